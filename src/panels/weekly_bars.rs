use crate::charts::{BarChart, ChartConfig, ChartDataset, DatasetSeries};
use crate::data::{DataTable, WEEKS};

use super::{lookup, PlotSeries};

/// Grouped bars per populated week, labelled with the short week name.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyBarsPanel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub series: Vec<PlotSeries>,
}

impl WeeklyBarsPanel {
    pub fn dataset(&self, table: &DataTable) -> ChartDataset {
        let weeks = table.populated_weeks();
        let labels = WEEKS.iter().take(weeks).map(|week| week.short_label()).collect();

        let series = self
            .series
            .iter()
            .filter_map(|plot| {
                let metric = lookup(table, plot.id, self.title)?;
                Some(
                    DatasetSeries::new(plot.label, plot.color, plot.plotted(metric, weeks))
                        .with_fill(plot.color.scale_alpha(0.6)),
                )
            })
            .collect();

        ChartDataset::new(labels, series)
    }
}

pub fn chart(dataset: ChartDataset) -> BarChart {
    BarChart::new(dataset).with_config(ChartConfig {
        padding: 40.0,
        grid_lines: 4,
        legend: true,
    })
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::*;

    #[test]
    fn pagespeed_bars() {
        let panel = WeeklyBarsPanel {
            title: "PageSpeed Score Progress",
            subtitle: "",
            series: vec![
                PlotSeries::new("pageSpeedMobile", "Mobile", Color::BLACK),
                PlotSeries::new("pageSpeedDesktop", "Desktop", Color::BLACK),
            ],
        };
        let dataset = panel.dataset(&DataTable::tracker());

        assert_eq!(dataset.labels, ["Week 1", "Week 2", "Week 3", "Week 4", "Week 5", "Week 6"]);
        assert_eq!(dataset.series[0].values[5], Some(94.0));
        assert_eq!(dataset.series[1].values[0], Some(85.0));
        assert_eq!(dataset.series[0].fill.a, 0.6);
    }
}
