use iced::Color;

use crate::charts::{ChartDataset, DatasetSeries, DoughnutChart, InteractionConfig};
use crate::data::DataTable;

use super::lookup;

#[derive(Debug, Clone, PartialEq)]
pub struct ShareSlice {
    pub label: &'static str,
    pub id: &'static str,
    pub color: Color,
}

/// Doughnut split of the latest readings of several metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePanel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub label: &'static str,
    pub slices: Vec<ShareSlice>,
}

impl SharePanel {
    pub fn dataset(&self, table: &DataTable) -> ChartDataset {
        let labels = self.slices.iter().map(|slice| slice.label.to_string()).collect();
        let values = self
            .slices
            .iter()
            .map(|slice| {
                lookup(table, slice.id, self.title)
                    .and_then(|series| series.latest())
                    .map(|value| value as f32)
            })
            .collect();
        let colors = self.slices.iter().map(|slice| slice.color).collect();
        let border = self.slices.first().map_or(Color::BLACK, |slice| slice.color);

        ChartDataset::new(
            labels,
            vec![DatasetSeries::new(self.label, border, values).with_segment_colors(colors)],
        )
    }
}

pub fn chart(dataset: ChartDataset) -> DoughnutChart {
    // segments are picked with the left button, so panning stays off
    DoughnutChart::new(dataset).with_interaction(InteractionConfig {
        enable_hover: true,
        enable_zoom: false,
        enable_pan: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_composition_uses_latest_sizes() {
        let panel = SharePanel {
            title: "Bundle Composition",
            subtitle: "",
            label: "KB",
            slices: vec![
                ShareSlice { label: "JavaScript", id: "jsBundleSize", color: Color::BLACK },
                ShareSlice { label: "CSS", id: "cssBundleSize", color: Color::WHITE },
            ],
        };

        let dataset = panel.dataset(&DataTable::full_window());
        assert_eq!(dataset.labels, ["JavaScript", "CSS"]);
        assert_eq!(dataset.series[0].values, [Some(70.0), Some(16.0)]);
        assert_eq!(dataset.series[0].segment_color(1), Color::WHITE);
    }
}
