//! Pure projection of a dashboard and its UI state into the tree the widgets
//! draw. Nothing here touches iced.

use crate::dashboard::{Dashboard, GuidePlacement};
use crate::guides::Guide;
use crate::panels::{ChartPanel, PanelSpec};
use crate::screens::Tab;
use crate::state::{CategoryFilter, UiState};
use crate::table::TableGrid;

#[derive(Debug, Clone, PartialEq)]
pub struct TabButton {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterView {
    pub options: Vec<CategoryFilter>,
    pub selected: CategoryFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub grid: TableGrid,
    /// Present only when the dashboard offers a category filter.
    pub filter: Option<FilterView>,
}

/// The single content branch visible for the active tab.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Table(TableView),
    Charts(Vec<ChartPanel>),
    Overview(Vec<ChartPanel>),
    Insights(Vec<Guide>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualTree {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tabs: Vec<TabButton>,
    pub body: Body,
    pub guides_below: Vec<Guide>,
}

pub fn render(dashboard: &Dashboard, state: &UiState) -> VisualTree {
    let active = state.active_tab();

    let tabs = dashboard
        .tabs
        .iter()
        .map(|tab| TabButton {
            tab: *tab,
            label: tab.label(),
            active: *tab == active,
        })
        .collect();

    let body = match active {
        Tab::Metrics => Body::Table(table_view(dashboard, state)),
        Tab::Charts | Tab::Analytics => Body::Charts(build_panels(dashboard, &dashboard.panels)),
        Tab::Overview => Body::Overview(build_panels(dashboard, &dashboard.overview)),
        Tab::Insights => Body::Insights(dashboard.guides.clone()),
    };

    let guides_below = match dashboard.guide_placement {
        GuidePlacement::BelowContent => dashboard.guides.clone(),
        GuidePlacement::InsightsTab => Vec::new(),
    };

    VisualTree {
        title: dashboard.title,
        subtitle: dashboard.subtitle,
        tabs,
        body,
        guides_below,
    }
}

fn table_view(dashboard: &Dashboard, state: &UiState) -> TableView {
    let filter = dashboard.category_filter.then(|| {
        let options = std::iter::once(CategoryFilter::All)
            .chain(
                dashboard
                    .category_labels()
                    .into_iter()
                    .map(CategoryFilter::Only),
            )
            .collect();
        FilterView {
            options,
            selected: state.selected_category().clone(),
        }
    });

    let applied = filter
        .as_ref()
        .map_or(CategoryFilter::All, |filter| filter.selected.clone());

    TableView {
        grid: TableGrid::build(dashboard.data.categories(), &applied, dashboard.summary_label),
        filter,
    }
}

fn build_panels(dashboard: &Dashboard, specs: &[PanelSpec]) -> Vec<ChartPanel> {
    specs.iter().map(|spec| spec.build(&dashboard.data)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(body: &Body) -> &'static str {
        match body {
            Body::Table(_) => "table",
            Body::Charts(_) => "charts",
            Body::Overview(_) => "overview",
            Body::Insights(_) => "insights",
        }
    }

    fn expected_branch(tab: Tab) -> &'static str {
        match tab {
            Tab::Metrics => "table",
            Tab::Charts | Tab::Analytics => "charts",
            Tab::Overview => "overview",
            Tab::Insights => "insights",
        }
    }

    #[test]
    fn each_tab_selects_its_branch() {
        for dashboard in [Dashboard::tracker(), Dashboard::full_window()] {
            let mut state = UiState::new(&dashboard.tabs);
            for tab in dashboard.tabs.clone() {
                assert!(state.select(tab));
                let tree = render(&dashboard, &state);
                assert_eq!(branch(&tree.body), expected_branch(tab), "{tab:?}");

                let active: Vec<Tab> = tree
                    .tabs
                    .iter()
                    .filter(|button| button.active)
                    .map(|button| button.tab)
                    .collect();
                assert_eq!(active, [tab]);
            }
        }
    }

    #[test]
    fn loads_on_first_tab() {
        let tracker = Dashboard::tracker();
        let tree = render(&tracker, &UiState::new(&tracker.tabs));
        assert_eq!(branch(&tree.body), "table");
        assert_eq!(tree.title, "Website Performance Tracking Sheet");

        let full = Dashboard::full_window();
        let tree = render(&full, &UiState::new(&full.tabs));
        assert_eq!(branch(&tree.body), "overview");
    }

    #[test]
    fn reselecting_active_tab_is_idempotent() {
        let dashboard = Dashboard::tracker();
        let mut state = UiState::new(&dashboard.tabs);
        state.select(Tab::Charts);
        let before = render(&dashboard, &state);

        state.select(Tab::Charts);
        assert_eq!(render(&dashboard, &state), before);
    }

    #[test]
    fn ignored_selection_keeps_tree() {
        let dashboard = Dashboard::tracker();
        let mut state = UiState::new(&dashboard.tabs);
        let before = render(&dashboard, &state);

        assert!(!state.select(Tab::Insights));
        assert!(!state.select_id("settings"));
        assert_eq!(render(&dashboard, &state), before);
    }

    #[test]
    fn guides_follow_placement() {
        let tracker = Dashboard::tracker();
        let tree = render(&tracker, &UiState::new(&tracker.tabs));
        assert_eq!(tree.guides_below.len(), 2);

        let full = Dashboard::full_window();
        let mut state = UiState::new(&full.tabs);
        assert!(render(&full, &state).guides_below.is_empty());
        state.select(Tab::Insights);
        let Body::Insights(guides) = render(&full, &state).body else {
            panic!("insights tab should show guides");
        };
        assert_eq!(guides.len(), 2);
    }

    #[test]
    fn category_filter_only_on_full_window() {
        let tracker = Dashboard::tracker();
        let mut state = UiState::new(&tracker.tabs);
        state.select_category(CategoryFilter::Only("USER EXPERIENCE"));
        let Body::Table(table) = render(&tracker, &state).body else {
            panic!("metrics tab should show the table");
        };
        assert!(table.filter.is_none());
        assert_eq!(table.grid.groups.len(), 8);

        let full = Dashboard::full_window();
        let mut state = UiState::new(&full.tabs);
        state.select(Tab::Metrics);
        state.select_category(CategoryFilter::Only("USER EXPERIENCE"));
        let Body::Table(table) = render(&full, &state).body else {
            panic!("metrics tab should show the table");
        };
        let filter = table.filter.unwrap();
        assert_eq!(filter.options.len(), 9);
        assert_eq!(table.grid.groups.len(), 1);
    }
}
