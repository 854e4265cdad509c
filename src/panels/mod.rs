//! Declarative chart panels. Each panel projects one or more metric series
//! from the data table into a chart dataset on every render.

pub mod business_impact;
pub mod share;
pub mod snapshot;
pub mod trend;
pub mod weekly_bars;

use iced::Color;

use crate::charts::{ChartDataset, Scale};
use crate::data::{DataTable, MetricSeries};

pub use business_impact::{KpiCard, KpiFormat, KpiPanel, KpiSpec};
pub use share::{SharePanel, ShareSlice};
pub use snapshot::{SnapshotAxis, SnapshotPanel};
pub use trend::TrendPanel;
pub use weekly_bars::WeeklyBarsPanel;

/// One metric plotted in a panel, with the factor applied before drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub id: &'static str,
    pub label: &'static str,
    pub scale: Scale,
    pub color: Color,
}

impl PlotSeries {
    pub fn new(id: &'static str, label: &'static str, color: Color) -> Self {
        Self {
            id,
            label,
            scale: Scale::Identity,
            color,
        }
    }

    pub fn scaled(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// The first `weeks` readings, scaled for plotting.
    fn plotted(&self, series: &MetricSeries, weeks: usize) -> Vec<Option<f32>> {
        series
            .values
            .iter()
            .take(weeks)
            .map(|value| value.map(|value| self.scale.apply(value) as f32))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelSpec {
    Trend(TrendPanel),
    Bars(WeeklyBarsPanel),
    Snapshot(SnapshotPanel),
    Share(SharePanel),
    Kpis(KpiPanel),
}

impl PanelSpec {
    pub fn build(&self, table: &DataTable) -> ChartPanel {
        match self {
            PanelSpec::Trend(panel) => ChartPanel {
                title: panel.title,
                subtitle: panel.subtitle,
                body: PanelBody::Line(panel.dataset(table)),
            },
            PanelSpec::Bars(panel) => ChartPanel {
                title: panel.title,
                subtitle: panel.subtitle,
                body: PanelBody::Bar(panel.dataset(table)),
            },
            PanelSpec::Snapshot(panel) => ChartPanel {
                title: panel.title,
                subtitle: panel.subtitle,
                body: PanelBody::Radar(panel.dataset(table)),
            },
            PanelSpec::Share(panel) => ChartPanel {
                title: panel.title,
                subtitle: panel.subtitle,
                body: PanelBody::Doughnut(panel.dataset(table)),
            },
            PanelSpec::Kpis(panel) => ChartPanel {
                title: panel.title,
                subtitle: panel.subtitle,
                body: PanelBody::Kpis(panel.cards(table)),
            },
        }
    }
}

/// A built panel, ready to hand to a chart program or card grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: PanelBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Line(ChartDataset),
    Bar(ChartDataset),
    Radar(ChartDataset),
    Doughnut(ChartDataset),
    Kpis(Vec<KpiCard>),
}

impl ChartPanel {
    pub fn is_empty(&self) -> bool {
        match &self.body {
            PanelBody::Line(dataset)
            | PanelBody::Bar(dataset)
            | PanelBody::Radar(dataset)
            | PanelBody::Doughnut(dataset) => dataset.is_empty(),
            PanelBody::Kpis(cards) => cards.is_empty(),
        }
    }
}

fn lookup<'a>(table: &'a DataTable, id: &str, panel: &str) -> Option<&'a MetricSeries> {
    let series = table.get(id);
    if series.is_none() {
        tracing::warn!(metric = id, panel, "panel references unknown metric");
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plotted_applies_scale_and_keeps_gaps() {
        let table = DataTable::tracker();
        let fid = table.get("fid").unwrap();
        let plot = PlotSeries::new("fid", "FID (ms) / 10", Color::BLACK).scaled(Scale::Divide(10.0));

        let values = plot.plotted(fid, 8);
        assert_eq!(values.len(), 8);
        assert_eq!(values[0], Some(12.0));
        assert_eq!(values[5], Some(3.5));
        assert_eq!(values[6], None);
    }

    #[test]
    fn unknown_metric_leaves_panel_empty() {
        let table = DataTable::tracker();
        let panel = PanelSpec::Trend(TrendPanel {
            title: "Missing",
            subtitle: "",
            series: vec![PlotSeries::new("firstPaint", "FP", Color::BLACK)],
        });
        assert!(panel.build(&table).is_empty());
    }
}
