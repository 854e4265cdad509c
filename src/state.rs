use std::fmt;

use crate::screens::Tab;

/// Category filter for the metrics table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(&'static str),
}

impl CategoryFilter {
    pub fn admits(&self, label: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == label,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All categories"),
            CategoryFilter::Only(label) => f.write_str(label),
        }
    }
}

/// Page-local UI state. Starts on the first enumerated tab and only moves
/// between the tabs it was created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    tabs: Vec<Tab>,
    active_tab: Tab,
    selected_category: CategoryFilter,
}

impl UiState {
    pub fn new(tabs: &[Tab]) -> Self {
        let active_tab = tabs.first().copied().unwrap_or(Tab::Metrics);
        Self {
            tabs: tabs.to_vec(),
            active_tab,
            selected_category: CategoryFilter::All,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Returns whether the tab belongs to this page. Tabs outside the set
    /// leave the state untouched.
    pub fn select(&mut self, tab: Tab) -> bool {
        if !self.tabs.contains(&tab) {
            tracing::debug!(tab = tab.id(), "ignoring tab outside the page's tab set");
            return false;
        }

        if self.active_tab != tab {
            tracing::debug!(from = self.active_tab.id(), to = tab.id(), "switching tab");
            self.active_tab = tab;
        }
        true
    }

    pub fn select_id(&mut self, id: &str) -> bool {
        match Tab::from_id(id) {
            Some(tab) => self.select(tab),
            None => {
                tracing::debug!(id, "ignoring unknown tab id");
                false
            }
        }
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected_category
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.selected_category = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACKER_TABS: [Tab; 2] = [Tab::Metrics, Tab::Charts];

    #[test]
    fn starts_on_first_enumerated_tab() {
        assert_eq!(UiState::new(&TRACKER_TABS).active_tab(), Tab::Metrics);
        let full = [Tab::Overview, Tab::Metrics, Tab::Analytics, Tab::Insights];
        assert_eq!(UiState::new(&full).active_tab(), Tab::Overview);
    }

    #[test]
    fn selecting_member_tab_moves_state() {
        let mut state = UiState::new(&TRACKER_TABS);
        assert!(state.select(Tab::Charts));
        assert_eq!(state.active_tab(), Tab::Charts);
        assert!(state.select(Tab::Metrics));
        assert_eq!(state.active_tab(), Tab::Metrics);
    }

    #[test]
    fn tab_outside_set_is_a_no_op() {
        let mut state = UiState::new(&TRACKER_TABS);
        let before = state.clone();
        assert!(!state.select(Tab::Insights));
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut state = UiState::new(&TRACKER_TABS);
        let before = state.clone();
        assert!(!state.select_id("dashboard"));
        assert!(!state.select_id(""));
        assert_eq!(state, before);
        assert!(state.select_id("charts"));
        assert_eq!(state.active_tab(), Tab::Charts);
    }

    #[test]
    fn reselecting_active_tab_is_idempotent() {
        let mut state = UiState::new(&TRACKER_TABS);
        state.select(Tab::Charts);
        let before = state.clone();
        assert!(state.select(Tab::Charts));
        assert_eq!(state, before);
    }

    #[test]
    fn accepts_unlimited_transitions() {
        let mut state = UiState::new(&TRACKER_TABS);
        for round in 0..100 {
            let tab = TRACKER_TABS[round % 2];
            state.select(tab);
            assert_eq!(state.active_tab(), tab);
        }
    }

    #[test]
    fn category_filter() {
        let mut state = UiState::new(&TRACKER_TABS);
        assert!(state.selected_category().admits("USER EXPERIENCE"));
        state.select_category(CategoryFilter::Only("CORE WEB VITALS"));
        assert!(state.selected_category().admits("CORE WEB VITALS"));
        assert!(!state.selected_category().admits("USER EXPERIENCE"));
        assert_eq!(state.selected_category().to_string(), "CORE WEB VITALS");
    }
}
