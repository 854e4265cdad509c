pub mod charts;
pub mod insights;
pub mod metrics;
pub mod overview;

/// Every tab a dashboard may enumerate. A dashboard exposes an ordered
/// subset of these.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum Tab {
    Overview,
    Metrics,
    Analytics,
    Insights,
    Charts,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Metrics,
        Tab::Analytics,
        Tab::Insights,
        Tab::Charts,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Metrics => "metrics",
            Tab::Analytics => "analytics",
            Tab::Insights => "insights",
            Tab::Charts => "charts",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Metrics => "Complete Metrics Table",
            Tab::Analytics => "Advanced Analytics",
            Tab::Insights => "Insights",
            Tab::Charts => "Advanced Analytics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tab;

    #[test]
    fn ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(Tab::from_id("settings"), None);
        assert_eq!(Tab::from_id("Metrics"), None);
    }
}
