use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Fill, Length, Task, Theme};

use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::message::Message;
use crate::render::{render, Body, TabButton};
use crate::screens::{self, Tab};
use crate::state::UiState;
use crate::table::CellEdits;
use crate::theme::{tab_button_style, HEADER_BG, HEADER_TEXT};
use lucide_icons::iced::{icon_chart_line, icon_house, icon_lightbulb, icon_table};

pub struct App {
    theme: Theme,
    dashboard: Dashboard,
    state: UiState,
    edits: CellEdits,
}

impl App {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let dashboard = Dashboard::for_variant(settings.variant);
        let mut state = UiState::new(&dashboard.tabs);
        if let Some(tab) = settings.tab.as_deref() {
            if !state.select_id(tab) {
                tracing::warn!(tab, "configured tab not available, using the first tab");
            }
        }
        tracing::info!(
            variant = ?dashboard.variant,
            tab = state.active_tab().id(),
            "dashboard ready"
        );

        (
            Self {
                theme: settings.theme.theme(),
                dashboard,
                state,
                edits: CellEdits::default(),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectTab(tab) => {
                self.state.select(tab);
                Task::none()
            }
            Message::CellEdited {
                metric,
                week,
                value,
            } => {
                self.edits.set(metric, week, value);
                Task::none()
            }
            Message::SelectCategory(filter) => {
                tracing::debug!(%filter, "category filter changed");
                self.state.select_category(filter);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let tree = render(&self.dashboard, &self.state);

        let header = container(
            column![text(tree.title).size(34), text(tree.subtitle).size(17)]
                .spacing(10)
                .align_x(Alignment::Center),
        )
        .padding(32)
        .width(Fill)
        .style(|_| container::background(HEADER_BG).color(HEADER_TEXT));

        let tabs = row(tree.tabs.into_iter().map(tab_button))
            .spacing(8)
            .padding([12, 24]);

        let body = match tree.body {
            Body::Table(table) => screens::metrics::view(table, &self.edits),
            Body::Charts(panels) => screens::charts::view(panels),
            Body::Overview(panels) => screens::overview::view(panels),
            Body::Insights(guides) => screens::insights::view(guides),
        };

        let mut page = Column::new()
            .push(header)
            .push(tabs)
            .push(container(body).padding(24).width(Fill))
            .spacing(8);

        if !tree.guides_below.is_empty() {
            page = page.push(
                container(screens::insights::guide_row(tree.guides_below)).padding([0, 24]),
            );
        }

        scrollable(page).height(Length::Fill).into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

fn tab_button<'a>(tab: TabButton) -> Element<'a, Message> {
    let icon = match tab.tab {
        Tab::Overview => icon_house(),
        Tab::Metrics => icon_table(),
        Tab::Charts | Tab::Analytics => icon_chart_line(),
        Tab::Insights => icon_lightbulb(),
    }
    .size(16);

    button(
        row![icon, text(tab.label).size(14)]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .on_press(Message::SelectTab(tab.tab))
    .padding([8, 14])
    .style(tab_button_style(tab.active))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(metric: &'static str, week: usize, value: &str) -> Message {
        Message::CellEdited {
            metric,
            week,
            value: value.to_string(),
        }
    }

    #[test]
    fn cell_edit_is_shown_but_data_is_untouched() {
        let (mut app, _) = App::new(Settings::default());
        let _ = app.update(edit("lcp", 6, "1.1"));
        let _ = app.update(edit("lcp", 0, "oops"));

        assert_eq!(app.edits.get("lcp", 6), Some("1.1"));
        let lcp = app.dashboard.data.get("lcp").unwrap();
        assert_eq!(lcp.value(6), None);
        assert_eq!(lcp.value(0), Some(2.1));

        let Body::Table(table) = render(&app.dashboard, &app.state).body else {
            panic!("tracker opens on the metrics table");
        };
        let row = &table.grid.groups[0].rows[0];
        assert_eq!(row.cells[6].text, "");
        assert_eq!(app.edits.display(row.metric, &row.cells[6]), "1.1");
        assert_eq!(app.edits.display(row.metric, &row.cells[0]), "oops");
        assert_eq!(app.edits.display(row.metric, &row.cells[1]), "1.9");
    }

    #[test]
    fn tab_messages_move_between_tabs() {
        let (mut app, _) = App::new(Settings::default());
        let _ = app.update(Message::SelectTab(Tab::Charts));
        assert_eq!(app.state.active_tab(), Tab::Charts);

        let _ = app.update(Message::SelectTab(Tab::Overview));
        assert_eq!(app.state.active_tab(), Tab::Charts);
    }

    #[test]
    fn configured_tab_is_opened() {
        let settings = Settings {
            tab: Some(String::from("charts")),
            ..Settings::default()
        };
        let (app, _) = App::new(settings);
        assert_eq!(app.state.active_tab(), Tab::Charts);
    }

    #[test]
    fn unavailable_configured_tab_keeps_first_tab() {
        for tab in ["insights", "settings"] {
            let settings = Settings {
                tab: Some(tab.to_string()),
                ..Settings::default()
            };
            let (app, _) = App::new(settings);
            assert_eq!(app.state.active_tab(), Tab::Metrics, "{tab}");
        }
    }
}
