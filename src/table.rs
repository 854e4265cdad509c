use std::collections::HashMap;

use crate::data::{display_value, CategorySection, WEEKS, WEEK_COUNT};
use crate::state::CategoryFilter;

/// Text typed into table cells, keyed by metric id and week index. Edits are
/// display-only; the data table never sees them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellEdits {
    edits: HashMap<(&'static str, usize), String>,
}

impl CellEdits {
    pub fn set(&mut self, metric: &'static str, week: usize, value: String) {
        if week >= WEEK_COUNT {
            tracing::debug!(metric, week, "ignoring edit outside the week window");
            return;
        }
        self.edits.insert((metric, week), value);
    }

    pub fn get(&self, metric: &'static str, week: usize) -> Option<&str> {
        self.edits.get(&(metric, week)).map(String::as_str)
    }

    /// What a cell shows: the typed text if any, else the reading.
    pub fn display<'a>(&'a self, metric: &'static str, cell: &'a TableCell) -> &'a str {
        self.get(metric, cell.week).unwrap_or(&cell.text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub week: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// 1-based position across the whole table ("Sr. No.").
    pub number: usize,
    pub metric: &'static str,
    pub name: &'static str,
    pub cells: Vec<TableCell>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableGroup {
    pub label: &'static str,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableGrid {
    pub header: Vec<String>,
    pub groups: Vec<TableGroup>,
}

impl TableGrid {
    pub fn build(
        categories: &[CategorySection],
        filter: &CategoryFilter,
        summary_label: &str,
    ) -> Self {
        let mut header = vec![String::from("Sr. No."), String::from("Metric")];
        header.extend(WEEKS.iter().map(|week| week.label()));
        header.push(summary_label.to_string());

        let mut number = 0;
        let mut groups = Vec::new();
        for category in categories {
            let start = number;
            number += category.metrics.len();
            if !filter.admits(category.label) {
                continue;
            }

            let rows = category
                .metrics
                .iter()
                .enumerate()
                .map(|(offset, series)| TableRow {
                    number: start + offset + 1,
                    metric: series.id,
                    name: series.name,
                    cells: (0..WEEK_COUNT)
                        .map(|week| TableCell {
                            week,
                            text: series.cell_text(week),
                        })
                        .collect(),
                    summary: display_value(series.summary),
                })
                .collect();

            groups.push(TableGroup {
                label: category.label,
                rows,
            });
        }

        Self { header, groups }
    }

    #[cfg(test)]
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.groups.iter().flat_map(|group| group.rows.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataTable;

    #[test]
    fn first_row_is_lcp() {
        let table = DataTable::tracker();
        let grid = TableGrid::build(table.categories(), &CategoryFilter::All, "Avg/Total");

        let first = grid.rows().next().unwrap();
        assert_eq!(first.number, 1);
        assert_eq!(first.name, "Largest Contentful Paint (LCP) - seconds");
        assert_eq!(first.cells.len(), 13);
        assert_eq!(first.cells[0].text, "2.1");
        assert_eq!(first.cells[6].text, "");
        assert_eq!(first.summary, "1.6");
    }

    #[test]
    fn header_lists_every_week_and_summary() {
        let table = DataTable::tracker();
        let grid = TableGrid::build(table.categories(), &CategoryFilter::All, "Avg/Total");

        assert_eq!(grid.header.len(), 16);
        assert_eq!(grid.header[0], "Sr. No.");
        assert_eq!(grid.header[2], "Week 1 (6/30-7/6)");
        assert_eq!(grid.header[15], "Avg/Total");
    }

    #[test]
    fn absent_weeks_render_blank() {
        let table = DataTable::tracker();
        let grid = TableGrid::build(table.categories(), &CategoryFilter::All, "Avg/Total");

        for row in grid.rows() {
            for cell in &row.cells[6..] {
                assert_eq!(cell.text, "", "{} week {}", row.metric, cell.week);
            }
            for cell in &row.cells {
                assert!(!cell.text.contains("NaN") && !cell.text.contains("None"));
            }
        }
    }

    #[test]
    fn rows_are_numbered_across_groups() {
        let table = DataTable::full_window();
        let grid = TableGrid::build(table.categories(), &CategoryFilter::All, "Current");

        let numbers: Vec<usize> = grid.rows().map(|row| row.number).collect();
        assert_eq!(numbers, (1..=22).collect::<Vec<_>>());
        assert_eq!(grid.groups.len(), 8);
    }

    #[test]
    fn filter_keeps_global_numbering() {
        let table = DataTable::full_window();
        let filter = CategoryFilter::Only("USER EXPERIENCE");
        let grid = TableGrid::build(table.categories(), &filter, "Current");

        assert_eq!(grid.groups.len(), 1);
        let numbers: Vec<usize> = grid.rows().map(|row| row.number).collect();
        assert_eq!(numbers, [9, 10, 11]);
    }

    #[test]
    fn edits_override_only_their_cell() {
        let table = DataTable::tracker();
        let grid = TableGrid::build(table.categories(), &CategoryFilter::All, "Avg/Total");
        let lcp = grid.rows().next().unwrap();

        let mut edits = CellEdits::default();
        edits.set("lcp", 0, String::from("abc"));

        assert_eq!(edits.display(lcp.metric, &lcp.cells[0]), "abc");
        assert_eq!(edits.display(lcp.metric, &lcp.cells[1]), "1.9");
        assert_eq!(edits.display(lcp.metric, &lcp.cells[6]), "");
    }

    #[test]
    fn edits_are_kept_per_cell() {
        let mut edits = CellEdits::default();
        edits.set("lcp", 6, String::from("1.1"));
        edits.set("lcp", 6, String::from("1.0"));
        edits.set("lcp", 13, String::from("ignored"));

        assert_eq!(edits.get("lcp", 6), Some("1.0"));
        assert_eq!(edits.get("lcp", 0), None);
        assert_eq!(edits.get("lcp", 13), None);
    }
}
