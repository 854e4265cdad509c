use iced::Color;

use crate::data::{display_value, DataTable, MetricSeries};

use super::lookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiFormat {
    Percent,
    Dollars,
}

impl KpiFormat {
    fn value(self, value: f64) -> String {
        match self {
            KpiFormat::Percent => format!("{}%", display_value(value)),
            KpiFormat::Dollars => format!("${value:.2}"),
        }
    }
}

/// Which metric a card reports and how.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSpec {
    pub label: &'static str,
    pub id: &'static str,
    pub format: KpiFormat,
    /// Word shown after the change, e.g. `improvement` or `growth`.
    pub trend: &'static str,
    pub accent: Color,
}

/// A rendered business impact card.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
    pub change: String,
    pub accent: Color,
}

impl KpiCard {
    fn from_series(spec: &KpiSpec, series: &MetricSeries) -> Option<Self> {
        let latest = series.latest()?;
        let change = match series.first() {
            Some(first) if first != 0.0 => {
                let percent = (latest - first) / first * 100.0;
                format!("{percent:+.0}% {}", spec.trend)
            }
            _ => String::from("no baseline"),
        };

        Some(Self {
            label: spec.label,
            value: spec.format.value(latest),
            change,
            accent: spec.accent,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiPanel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<KpiSpec>,
}

impl KpiPanel {
    /// Latest reading of each metric, with its change since the first week.
    pub fn cards(&self, table: &DataTable) -> Vec<KpiCard> {
        self.cards
            .iter()
            .filter_map(|spec| {
                let series = lookup(table, spec.id, self.title)?;
                KpiCard::from_series(spec, series)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business_impact() -> KpiPanel {
        let spec = |label, id, format, trend| KpiSpec {
            label,
            id,
            format,
            trend,
            accent: Color::BLACK,
        };
        KpiPanel {
            title: "Business Impact Summary",
            subtitle: "",
            cards: vec![
                spec("Conversion Rate", "conversionRate", KpiFormat::Percent, "improvement"),
                spec("Revenue/Visitor", "revenuePerVisitor", KpiFormat::Dollars, "improvement"),
                spec("Bounce Rate", "bounceRate", KpiFormat::Percent, "improvement"),
                spec("Mobile Traffic", "mobileTrafficShare", KpiFormat::Percent, "growth"),
            ],
        }
    }

    #[test]
    fn tracker_cards() {
        let cards = business_impact().cards(&DataTable::tracker());
        let summary: Vec<(&str, &str)> = cards
            .iter()
            .map(|card| (card.value.as_str(), card.change.as_str()))
            .collect();

        assert_eq!(
            summary,
            [
                ("4.6%", "+100% improvement"),
                ("$9.80", "+118% improvement"),
                ("28%", "-38% improvement"),
                ("69%", "+19% growth"),
            ]
        );
    }

    #[test]
    fn unknown_metric_is_skipped() {
        let mut panel = business_impact();
        panel.cards[0].id = "churn";
        assert_eq!(panel.cards(&DataTable::tracker()).len(), 3);
    }
}
