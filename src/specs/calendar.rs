// src/specs/calendar.rs

use std::fmt;

use crate::config::TargetSpec;
use crate::config::consts::AVAILABLE_MARKERS;
use crate::core::html::{CalendarTable, HtmlCalendar};

/// Why a (row, date) cell could not be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Miss {
    DateColumn,
    Row,
    Cell,
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Miss::DateColumn => "date column not found",
            Miss::Row => "row not found",
            Miss::Cell => "cell not found",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellStatus {
    /// Marker is a circle or a triangle.
    Available(String),
    /// Any other marker, including an empty cell.
    Unavailable(String),
    Unknown(Miss),
}

impl CellStatus {
    pub fn from_marker(text: &str) -> Self {
        let t = text.trim();
        if AVAILABLE_MARKERS.contains(&t) {
            CellStatus::Available(s!(t))
        } else {
            CellStatus::Unavailable(s!(t))
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, CellStatus::Available(_))
    }

    pub fn marker(&self) -> Option<&str> {
        match self {
            CellStatus::Available(m) | CellStatus::Unavailable(m) => Some(m),
            CellStatus::Unknown(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellResult {
    pub row: String,
    pub date: String,
    pub status: CellStatus,
}

impl CellResult {
    /// Stable identity of an available cell, used for duplicate suppression.
    pub fn key(&self) -> String {
        format!("{}|{}|{}", self.date, self.row, self.status.marker().unwrap_or(""))
    }
}

/// Classification of every configured (row, date) pair, rows outer, dates inner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellReport {
    cells: Vec<CellResult>,
}

impl CellReport {
    pub fn cells(&self) -> &[CellResult] {
        &self.cells
    }

    pub fn status(&self, row: &str, date: &str) -> Option<&CellStatus> {
        self.cells
            .iter()
            .find(|c| c.row == row && c.date == date)
            .map(|c| &c.status)
    }

    pub fn available(&self) -> impl Iterator<Item = &CellResult> {
        self.cells.iter().filter(|c| c.status.is_available())
    }

    pub fn unknown(&self) -> impl Iterator<Item = &CellResult> {
        self.cells
            .iter()
            .filter(|c| matches!(c.status, CellStatus::Unknown(_)))
    }

    pub fn any_available(&self) -> bool {
        self.available().next().is_some()
    }
}

/// Classify every target cell of an already-parsed table.
///
/// Lookups are independent: a missing column only affects its own date,
/// a missing row only affects its own label.
pub fn match_cells(table: &impl CalendarTable, target: &TargetSpec) -> CellReport {
    let columns: Vec<Option<usize>> = target
        .dates
        .iter()
        .map(|d| {
            let col = table.column_of(d);
            if col.is_none() {
                logw!("date column {d:?} not found");
            }
            col
        })
        .collect();

    let mut cells = Vec::with_capacity(target.rows.len() * target.dates.len());
    for row_label in &target.rows {
        let row = table.row_of(row_label);
        if row.is_none() {
            logw!("row {row_label:?} not found");
        }

        for (date, col) in target.dates.iter().zip(&columns) {
            let status = match (row, *col) {
                (_, None) => CellStatus::Unknown(Miss::DateColumn),
                (None, _) => CellStatus::Unknown(Miss::Row),
                (Some(r), Some(c)) => match table.cell_text(r, c) {
                    Some(text) => CellStatus::from_marker(&text),
                    None => {
                        logw!("no cell at row {row_label:?}, column {date:?} (index {c})");
                        CellStatus::Unknown(Miss::Cell)
                    }
                },
            };
            cells.push(CellResult { row: row_label.clone(), date: date.clone(), status });
        }
    }

    CellReport { cells }
}

/// Parse the markup and classify. Malformed markup degrades to `Unknown` cells.
pub fn match_document(doc: &str, target: &TargetSpec) -> CellReport {
    let table = HtmlCalendar::parse(doc);
    logd!("calendar: {} header cells, {} rows", table.headers().len(), table.row_labels().count());
    match_cells(&table, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <table>
          <thead><tr><th>区分</th><th>10/23(金)</th><th>10/24(土)</th></tr></thead>
          <tbody>
            <tr><th>キャンプ宿泊</th><td>×</td><td>〇</td></tr>
            <tr><th>キャンプ日帰り</th><td>△</td><td>✕</td></tr>
            <tr><th>毛無山登山</th><td>○</td><td></td></tr>
          </tbody>
        </table>
    "#;

    fn target(dates: &[&str], rows: &[&str]) -> TargetSpec {
        TargetSpec::new(dates.iter().copied(), rows.iter().copied())
    }

    #[test]
    fn marker_vocabulary() {
        for m in ["〇", "○", "△", " 〇 "] {
            assert!(CellStatus::from_marker(m).is_available(), "{m}");
        }
        for m in ["×", "✕", "", "-", "休"] {
            assert!(matches!(CellStatus::from_marker(m), CellStatus::Unavailable(_)), "{m:?}");
        }
        assert_eq!(CellStatus::from_marker(" △").marker(), Some("△"));
    }

    #[test]
    fn circle_under_target_date_is_available() {
        let report = match_document(DOC, &target(&["10/24"], &["キャンプ宿泊"]));
        assert_eq!(report.cells().len(), 1);
        assert_eq!(
            report.status("キャンプ宿泊", "10/24"),
            Some(&CellStatus::Available(s!("〇")))
        );
    }

    #[test]
    fn rows_classified_independently() {
        let report = match_document(DOC, &target(&["10/23"], &["キャンプ宿泊", "キャンプ日帰り"]));
        assert_eq!(report.status("キャンプ宿泊", "10/23"), Some(&CellStatus::Unavailable(s!("×"))));
        assert_eq!(report.status("キャンプ日帰り", "10/23"), Some(&CellStatus::Available(s!("△"))));
        let avail: Vec<_> = report.available().map(|c| c.row.as_str()).collect();
        assert_eq!(avail, ["キャンプ日帰り"]);
    }

    #[test]
    fn cross_and_empty_are_unavailable() {
        let report = match_document(DOC, &target(&["10/24"], &["キャンプ日帰り", "毛無山登山"]));
        assert_eq!(report.status("キャンプ日帰り", "10/24"), Some(&CellStatus::Unavailable(s!("✕"))));
        assert_eq!(report.status("毛無山登山", "10/24"), Some(&CellStatus::Unavailable(s!())));
        assert!(!report.any_available());
    }

    #[test]
    fn absent_date_makes_every_row_unknown() {
        let report = match_document(DOC, &target(&["11/31"], &["キャンプ宿泊", "キャンプ日帰り"]));
        assert_eq!(report.cells().len(), 2);
        assert!(report
            .cells()
            .iter()
            .all(|c| c.status == CellStatus::Unknown(Miss::DateColumn)));
        assert!(!report.any_available());
    }

    #[test]
    fn absent_row_does_not_affect_others() {
        let report = match_document(DOC, &target(&["10/24"], &["存在しない行", "キャンプ宿泊"]));
        assert_eq!(report.status("存在しない行", "10/24"), Some(&CellStatus::Unknown(Miss::Row)));
        assert!(report.status("キャンプ宿泊", "10/24").unwrap().is_available());
        assert_eq!(report.unknown().count(), 1);
    }

    #[test]
    fn row_match_is_exact() {
        let report = match_document(DOC, &target(&["10/24"], &["キャンプ"]));
        assert_eq!(report.status("キャンプ", "10/24"), Some(&CellStatus::Unknown(Miss::Row)));
    }

    #[test]
    fn covers_every_row_and_date_in_order() {
        let t = target(&["10/23", "11/31", "10/24"], &["キャンプ宿泊", "毛無山登山"]);
        let report = match_document(DOC, &t);
        let pairs: Vec<_> = report
            .cells()
            .iter()
            .map(|c| (c.row.as_str(), c.date.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("キャンプ宿泊", "10/23"),
                ("キャンプ宿泊", "11/31"),
                ("キャンプ宿泊", "10/24"),
                ("毛無山登山", "10/23"),
                ("毛無山登山", "11/31"),
                ("毛無山登山", "10/24"),
            ]
        );
        assert_eq!(report.status("毛無山登山", "10/23"), Some(&CellStatus::Available(s!("○"))));
    }

    #[test]
    fn classification_is_deterministic() {
        let t = target(&["10/23", "10/24"], &["キャンプ宿泊", "キャンプ日帰り", "毛無山登山"]);
        assert_eq!(match_document(DOC, &t), match_document(DOC, &t));
    }

    #[test]
    fn garbage_document_is_all_unknown() {
        let report = match_document("<<<not html", &target(&["10/24"], &["キャンプ宿泊"]));
        assert_eq!(report.status("キャンプ宿泊", "10/24"), Some(&CellStatus::Unknown(Miss::DateColumn)));
    }

    #[test]
    fn key_includes_marker() {
        let report = match_document(DOC, &target(&["10/24"], &["キャンプ宿泊"]));
        assert_eq!(report.cells()[0].key(), "10/24|キャンプ宿泊|〇");
    }
}
