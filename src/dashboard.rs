use serde::Deserialize;

use crate::charts::Scale;
use crate::data::DataTable;
use crate::guides::{self, Guide};
use crate::panels::{
    KpiFormat, KpiPanel, KpiSpec, PanelSpec, PlotSeries, SharePanel, ShareSlice, SnapshotAxis,
    SnapshotPanel, TrendPanel, WeeklyBarsPanel,
};
use crate::screens::Tab;
use crate::theme;

pub const TITLE: &str = "Website Performance Tracking Sheet";
pub const SUBTITLE: &str =
    "Next.js Performance Optimization Metrics • June 30 - September 28, 2025";

/// Which of the two dashboard layouts to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Six tracked weeks, metrics and charts tabs, guides under the content.
    #[default]
    Tracker,
    /// All thirteen weeks with overview and insights tabs.
    FullWindow,
}

/// Where the optimization guides are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidePlacement {
    BelowContent,
    InsightsTab,
}

/// Everything a dashboard variant enumerates. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub variant: Variant,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tabs: Vec<Tab>,
    pub data: DataTable,
    /// Header of the trailing table column.
    pub summary_label: &'static str,
    pub panels: Vec<PanelSpec>,
    pub overview: Vec<PanelSpec>,
    pub guides: Vec<Guide>,
    pub guide_placement: GuidePlacement,
    pub category_filter: bool,
}

impl Dashboard {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Tracker => Self::tracker(),
            Variant::FullWindow => Self::full_window(),
        }
    }

    pub fn tracker() -> Self {
        Self {
            variant: Variant::Tracker,
            title: TITLE,
            subtitle: SUBTITLE,
            tabs: vec![Tab::Metrics, Tab::Charts],
            data: DataTable::tracker(),
            summary_label: "Avg/Total",
            panels: vec![
                core_web_vitals(),
                performance_snapshot(),
                pagespeed_progress(),
                business_impact("Business Impact"),
            ],
            overview: Vec::new(),
            guides: guides::all(),
            guide_placement: GuidePlacement::BelowContent,
            category_filter: false,
        }
    }

    pub fn full_window() -> Self {
        Self {
            variant: Variant::FullWindow,
            title: TITLE,
            subtitle: SUBTITLE,
            tabs: vec![Tab::Overview, Tab::Metrics, Tab::Analytics, Tab::Insights],
            data: DataTable::full_window(),
            summary_label: "Current",
            panels: vec![
                core_web_vitals(),
                pagespeed_progress(),
                load_times(),
                engagement(),
                bundle_composition(),
                performance_snapshot(),
            ],
            overview: vec![business_impact("Business Impact Summary"), quality_scores()],
            guides: guides::all(),
            guide_placement: GuidePlacement::InsightsTab,
            category_filter: true,
        }
    }

    /// Category labels offered by the metrics table filter.
    pub fn category_labels(&self) -> Vec<&'static str> {
        self.data
            .categories()
            .iter()
            .map(|category| category.label)
            .collect()
    }
}

fn core_web_vitals() -> PanelSpec {
    PanelSpec::Trend(TrendPanel {
        title: "Core Web Vitals Trend",
        subtitle: "FID and CLS are rescaled to share the LCP axis",
        series: vec![
            PlotSeries::new("lcp", "LCP (seconds)", theme::LCP),
            PlotSeries::new("fid", "FID (ms) / 10", theme::FID).scaled(Scale::Divide(10.0)),
            PlotSeries::new("cls", "CLS * 10", theme::CLS).scaled(Scale::Multiply(10.0)),
        ],
    })
}

fn performance_snapshot() -> PanelSpec {
    let axis = |label, id| SnapshotAxis { label, id };
    PanelSpec::Snapshot(SnapshotPanel {
        title: "Performance Overview",
        subtitle: "Latest reading per dimension",
        label: "Current Performance",
        axes: vec![
            axis("PageSpeed Mobile", "pageSpeedMobile"),
            axis("SEO Score", "seoScore"),
            axis("Accessibility", "accessibilityScore"),
            axis("Conversion Rate", "conversionRate"),
            axis("Cache Hit Rate", "cacheHitRate"),
            axis("Mobile Optimization", "mobileTrafficShare"),
        ],
        color: theme::SNAPSHOT,
    })
}

fn pagespeed_progress() -> PanelSpec {
    PanelSpec::Bars(WeeklyBarsPanel {
        title: "PageSpeed Score Progress",
        subtitle: "Mobile vs desktop score per week",
        series: vec![
            PlotSeries::new("pageSpeedMobile", "Mobile", theme::MOBILE),
            PlotSeries::new("pageSpeedDesktop", "Desktop", theme::DESKTOP),
        ],
    })
}

fn load_times() -> PanelSpec {
    PanelSpec::Trend(TrendPanel {
        title: "Load Time Trend",
        subtitle: "Seconds until the page is fully loaded",
        series: vec![
            PlotSeries::new("pageLoadTime", "Page Load (s)", theme::MOBILE),
            PlotSeries::new("mobileLoadTime", "Mobile Load (s)", theme::KPI_ORANGE),
        ],
    })
}

fn engagement() -> PanelSpec {
    PanelSpec::Bars(WeeklyBarsPanel {
        title: "User Engagement",
        subtitle: "Session length (minutes) and pages per session",
        series: vec![
            PlotSeries::new("avgSessionDuration", "Session (min)", theme::KPI_PURPLE),
            PlotSeries::new("pagesPerSession", "Pages/Session", theme::KPI_GREEN),
        ],
    })
}

fn bundle_composition() -> PanelSpec {
    PanelSpec::Share(SharePanel {
        title: "Bundle Composition",
        subtitle: "Latest JavaScript and CSS bundle sizes",
        label: "KB",
        slices: vec![
            ShareSlice {
                label: "JavaScript",
                id: "jsBundleSize",
                color: theme::JAVASCRIPT,
            },
            ShareSlice {
                label: "CSS",
                id: "cssBundleSize",
                color: theme::CSS,
            },
        ],
    })
}

fn quality_scores() -> PanelSpec {
    PanelSpec::Trend(TrendPanel {
        title: "Quality Scores",
        subtitle: "Lighthouse scores across the window",
        series: vec![
            PlotSeries::new("pageSpeedMobile", "PageSpeed Mobile", theme::MOBILE),
            PlotSeries::new("seoScore", "SEO", theme::KPI_GREEN),
            PlotSeries::new("accessibilityScore", "Accessibility", theme::KPI_PURPLE),
        ],
    })
}

fn business_impact(title: &'static str) -> PanelSpec {
    let card = |label, id, format, trend, accent| KpiSpec {
        label,
        id,
        format,
        trend,
        accent,
    };
    PanelSpec::Kpis(KpiPanel {
        title,
        subtitle: "Latest value and change since week 1",
        cards: vec![
            card(
                "Conversion Rate",
                "conversionRate",
                KpiFormat::Percent,
                "improvement",
                theme::KPI_GREEN,
            ),
            card(
                "Revenue/Visitor",
                "revenuePerVisitor",
                KpiFormat::Dollars,
                "improvement",
                theme::KPI_BLUE,
            ),
            card(
                "Bounce Rate",
                "bounceRate",
                KpiFormat::Percent,
                "improvement",
                theme::KPI_ORANGE,
            ),
            card(
                "Mobile Traffic",
                "mobileTrafficShare",
                KpiFormat::Percent,
                "growth",
                theme::KPI_PURPLE,
            ),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_layout() {
        let dashboard = Dashboard::tracker();
        assert_eq!(dashboard.tabs, [Tab::Metrics, Tab::Charts]);
        assert_eq!(dashboard.summary_label, "Avg/Total");
        assert_eq!(dashboard.data.populated_weeks(), 6);
        assert_eq!(dashboard.guide_placement, GuidePlacement::BelowContent);
        assert!(!dashboard.category_filter);
    }

    #[test]
    fn full_window_layout() {
        let dashboard = Dashboard::full_window();
        assert_eq!(
            dashboard.tabs,
            [Tab::Overview, Tab::Metrics, Tab::Analytics, Tab::Insights]
        );
        assert_eq!(dashboard.summary_label, "Current");
        assert_eq!(dashboard.data.populated_weeks(), 13);
        assert_eq!(dashboard.guide_placement, GuidePlacement::InsightsTab);
        assert_eq!(dashboard.category_labels().len(), 8);
    }

    #[test]
    fn every_panel_resolves_its_metrics() {
        for dashboard in [Dashboard::tracker(), Dashboard::full_window()] {
            for spec in dashboard.panels.iter().chain(&dashboard.overview) {
                let panel = spec.build(&dashboard.data);
                assert!(!panel.is_empty(), "{} is empty", panel.title);
            }
        }
    }

    #[test]
    fn for_variant_matches_constructors() {
        assert_eq!(Dashboard::for_variant(Variant::Tracker), Dashboard::tracker());
        assert_eq!(Dashboard::for_variant(Variant::FullWindow), Dashboard::full_window());
    }
}
