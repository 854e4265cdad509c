use crate::charts::{ChartConfig, ChartDataset, DatasetSeries, LineChart};
use crate::data::{DataTable, WEEKS};

use super::{lookup, PlotSeries};

/// Line chart over every populated week.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPanel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub series: Vec<PlotSeries>,
}

impl TrendPanel {
    pub fn dataset(&self, table: &DataTable) -> ChartDataset {
        let weeks = table.populated_weeks();
        let labels = WEEKS
            .iter()
            .take(weeks)
            .map(|week| week.label())
            .collect();

        let series = self
            .series
            .iter()
            .filter_map(|plot| {
                let metric = lookup(table, plot.id, self.title)?;
                Some(
                    DatasetSeries::new(plot.label, plot.color, plot.plotted(metric, weeks))
                        .with_scale(plot.scale),
                )
            })
            .collect();

        ChartDataset::new(labels, series)
    }
}

pub fn chart(dataset: ChartDataset) -> LineChart {
    LineChart::new(dataset).with_config(ChartConfig {
        padding: 40.0,
        grid_lines: 5,
        legend: true,
    })
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::*;
    use crate::charts::Scale;

    fn core_web_vitals() -> TrendPanel {
        TrendPanel {
            title: "Core Web Vitals Trend",
            subtitle: "",
            series: vec![
                PlotSeries::new("lcp", "LCP (seconds)", Color::BLACK),
                PlotSeries::new("fid", "FID (ms) / 10", Color::BLACK).scaled(Scale::Divide(10.0)),
                PlotSeries::new("cls", "CLS * 10", Color::BLACK).scaled(Scale::Multiply(10.0)),
            ],
        }
    }

    #[test]
    fn covers_populated_weeks_only() {
        let dataset = core_web_vitals().dataset(&DataTable::tracker());
        assert_eq!(dataset.labels.len(), 6);
        assert_eq!(dataset.labels[0], "Week 1 (6/30-7/6)");
        assert!(dataset.series.iter().all(|s| s.values.len() == 6));

        let full = core_web_vitals().dataset(&DataTable::full_window());
        assert_eq!(full.labels.len(), 13);
    }

    #[test]
    fn scaled_series_recover_original_readings() {
        let table = DataTable::tracker();
        let panel = core_web_vitals();
        let dataset = panel.dataset(&table);

        for (plot, series) in panel.series.iter().zip(&dataset.series) {
            let original = table.get(plot.id).unwrap();
            for (week, plotted) in series.values.iter().enumerate() {
                let plotted = plotted.expect("populated week");
                let recovered = series.scale.invert(f64::from(plotted));
                let expected = original.value(week).unwrap();
                assert!((recovered - expected).abs() < 1e-4, "{} week {week}", plot.id);
            }
        }
    }
}
