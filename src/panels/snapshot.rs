use iced::Color;

use crate::charts::{ChartDataset, DatasetSeries, RadarChart};
use crate::data::DataTable;

use super::lookup;

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotAxis {
    pub label: &'static str,
    pub id: &'static str,
}

/// Radar of the most recent reading of several metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotPanel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub label: &'static str,
    pub axes: Vec<SnapshotAxis>,
    pub color: Color,
}

impl SnapshotPanel {
    pub fn dataset(&self, table: &DataTable) -> ChartDataset {
        let labels = self.axes.iter().map(|axis| axis.label.to_string()).collect();
        let values = self
            .axes
            .iter()
            .map(|axis| {
                lookup(table, axis.id, self.title)
                    .and_then(|series| series.latest())
                    .map(|value| value as f32)
            })
            .collect();

        ChartDataset::new(labels, vec![DatasetSeries::new(self.label, self.color, values)])
    }
}

pub fn chart(dataset: ChartDataset) -> RadarChart {
    RadarChart::new(dataset).with_max_value(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview() -> SnapshotPanel {
        let axis = |label, id| SnapshotAxis { label, id };
        SnapshotPanel {
            title: "Performance Overview",
            subtitle: "",
            label: "Current Performance",
            axes: vec![
                axis("PageSpeed Mobile", "pageSpeedMobile"),
                axis("SEO Score", "seoScore"),
                axis("Accessibility", "accessibilityScore"),
                axis("Conversion Rate", "conversionRate"),
                axis("Cache Hit Rate", "cacheHitRate"),
                axis("Mobile Optimization", "mobileTrafficShare"),
            ],
            color: Color::BLACK,
        }
    }

    #[test]
    fn takes_latest_reading_per_axis() {
        let dataset = overview().dataset(&DataTable::tracker());
        assert_eq!(
            dataset.series[0].values,
            [Some(94.0), Some(96.0), Some(98.0), Some(4.6), Some(95.0), Some(69.0)]
        );
        assert_eq!(dataset.labels.len(), 6);
    }

    #[test]
    fn full_window_uses_week_thirteen() {
        let dataset = overview().dataset(&DataTable::full_window());
        assert_eq!(dataset.series[0].values[0], Some(98.0));
        assert_eq!(dataset.series[0].values[5], Some(74.0));
    }
}
