//! Hard-coded weekly performance readings.

pub mod catalog;
mod full_window;
mod tracker;

use self::catalog::CATALOG;

pub const WEEK_COUNT: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub number: u8,
    pub range: &'static str,
}

impl Week {
    const fn new(number: u8, range: &'static str) -> Self {
        Self { number, range }
    }

    pub fn label(&self) -> String {
        format!("Week {} ({})", self.number, self.range)
    }

    pub fn short_label(&self) -> String {
        format!("Week {}", self.number)
    }
}

pub const WEEKS: [Week; WEEK_COUNT] = [
    Week::new(1, "6/30-7/6"),
    Week::new(2, "7/7-7/13"),
    Week::new(3, "7/14-7/20"),
    Week::new(4, "7/21-7/27"),
    Week::new(5, "7/28-8/3"),
    Week::new(6, "8/4-8/10"),
    Week::new(7, "8/11-8/17"),
    Week::new(8, "8/18-8/24"),
    Week::new(9, "8/25-8/31"),
    Week::new(10, "9/1-9/7"),
    Week::new(11, "9/8-9/14"),
    Week::new(12, "9/15-9/21"),
    Week::new(13, "9/22-9/28"),
];

/// A single weekly reading. `None` marks a week with no reading yet.
pub type WeekValue = Option<f64>;

/// Spreads the given readings over the leading weeks and leaves the rest absent.
pub fn weeks<const N: usize>(populated: [f64; N]) -> [WeekValue; WEEK_COUNT] {
    const { assert!(N <= WEEK_COUNT) };
    std::array::from_fn(|index| populated.get(index).copied())
}

/// Shortest decimal form of a reading, e.g. `2.1`, `120`, `0.05`.
pub fn display_value(value: f64) -> String {
    format!("{value}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub id: &'static str,
    pub name: &'static str,
    pub values: [WeekValue; WEEK_COUNT],
    pub summary: f64,
}

impl MetricSeries {
    pub fn value(&self, week: usize) -> WeekValue {
        self.values.get(week).copied().flatten()
    }

    /// Initial text for a table cell; absent readings are blank.
    pub fn cell_text(&self, week: usize) -> String {
        self.value(week).map(display_value).unwrap_or_default()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.iter().flatten().next().copied()
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.iter().rev().flatten().next().copied()
    }

    fn populated_weeks(&self) -> usize {
        self.values
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |index| index + 1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub label: &'static str,
    pub metrics: Vec<MetricSeries>,
}

/// Read-only lookup from metric id to its weekly series.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    categories: Vec<CategorySection>,
}

impl DataTable {
    pub fn tracker() -> Self {
        tracker::table()
    }

    pub fn full_window() -> Self {
        full_window::table()
    }

    /// Builds a table over the shared catalog, asking `lookup` for each
    /// metric's readings and summary value.
    pub fn from_catalog(
        lookup: impl Fn(&str) -> Option<([WeekValue; WEEK_COUNT], f64)>,
    ) -> Self {
        let categories = CATALOG
            .iter()
            .map(|category| {
                let metrics = category
                    .metrics
                    .iter()
                    .filter_map(|def| match lookup(def.id) {
                        Some((values, summary)) => Some(MetricSeries {
                            id: def.id,
                            name: def.name,
                            values,
                            summary,
                        }),
                        None => {
                            tracing::warn!(metric = def.id, "no readings for catalog metric");
                            None
                        }
                    })
                    .collect();

                CategorySection {
                    label: category.label,
                    metrics,
                }
            })
            .collect();

        Self { categories }
    }

    pub fn get(&self, id: &str) -> Option<&MetricSeries> {
        self.metrics().find(|series| series.id == id)
    }

    pub fn categories(&self) -> &[CategorySection] {
        &self.categories
    }

    pub fn metrics(&self) -> impl Iterator<Item = &MetricSeries> {
        self.categories
            .iter()
            .flat_map(|category| category.metrics.iter())
    }

    /// Number of leading weeks that carry at least one reading.
    pub fn populated_weeks(&self) -> usize {
        self.metrics()
            .map(MetricSeries::populated_weeks)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_series_spans_the_full_window() {
        for table in [DataTable::tracker(), DataTable::full_window()] {
            for series in table.metrics() {
                assert_eq!(series.values.len(), WEEK_COUNT, "{}", series.id);
            }
        }
    }

    #[test]
    fn metric_ids_are_unique() {
        let table = DataTable::tracker();
        let mut seen = HashSet::new();
        for series in table.metrics() {
            assert!(seen.insert(series.id), "duplicate id {}", series.id);
        }
        assert_eq!(seen.len(), 22);
    }

    #[test]
    fn categories_keep_catalog_order() {
        let table = DataTable::full_window();
        let labels: Vec<_> = table.categories().iter().map(|c| c.label).collect();
        assert_eq!(labels.first(), Some(&"CORE WEB VITALS"));
        assert_eq!(labels.last(), Some(&"MOBILE OPTIMIZATION"));
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let table = DataTable::tracker();
        assert!(table.get("lcp").is_some());
        assert!(table.get("timeToInteractive").is_none());
    }

    #[test]
    fn tracker_fills_six_weeks_and_full_window_fills_all() {
        assert_eq!(DataTable::tracker().populated_weeks(), 6);
        assert_eq!(DataTable::full_window().populated_weeks(), WEEK_COUNT);
    }

    #[test]
    fn absent_weeks_render_blank() {
        let table = DataTable::tracker();
        let lcp = table.get("lcp").unwrap();
        assert_eq!(lcp.cell_text(0), "2.1");
        assert_eq!(lcp.cell_text(6), "");
        assert_eq!(lcp.cell_text(WEEK_COUNT + 3), "");
    }

    #[test]
    fn display_value_uses_shortest_form() {
        assert_eq!(display_value(120.0), "120");
        assert_eq!(display_value(0.05), "0.05");
        assert_eq!(display_value(6.87), "6.87");
        assert_eq!(display_value(11120.0), "11120");
    }

    #[test]
    fn latest_skips_absent_weeks() {
        let table = DataTable::tracker();
        let mobile = table.get("pageSpeedMobile").unwrap();
        assert_eq!(mobile.first(), Some(72.0));
        assert_eq!(mobile.latest(), Some(94.0));
    }

    #[test]
    fn full_window_summary_is_the_current_reading() {
        let table = DataTable::full_window();
        for series in table.metrics() {
            assert_eq!(series.latest(), Some(series.summary), "{}", series.id);
        }
    }

    #[test]
    fn week_labels() {
        assert_eq!(WEEKS[0].label(), "Week 1 (6/30-7/6)");
        assert_eq!(WEEKS[12].short_label(), "Week 13");
    }
}
