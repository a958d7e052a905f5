// src/core/html.rs
// Calendar table extraction. Everything page-specific stops at the
// CalendarTable trait; matching logic never sees the DOM.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::{date_key, looks_like_date, normalize_ws};

/// Read-only view of a calendar grid: find a column, find a row, read a cell.
pub trait CalendarTable {
    /// Index of the header cell whose date label matches `date_label`.
    fn column_of(&self, date_label: &str) -> Option<usize>;
    /// Index of the row whose row-header text equals `row_label`.
    fn row_of(&self, row_label: &str) -> Option<usize>;
    /// Normalized text of the cell at (`row`, `column`), column counted in header cells.
    fn cell_text(&self, row: usize, column: usize) -> Option<String>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Row {
    label: String,
    /// Every `th`/`td` cell in order, row header included.
    cells: Vec<String>,
    /// `td` cells only.
    data: Vec<String>,
}

/// The calendar `<table>` of a document, flattened to text.
///
/// The calendar is the first table with a header row holding an `M/D` cell;
/// legend tables and month banner rows above it are skipped. Without such a
/// table the first table's first row is used as header. A document without
/// any table yields an empty grid: every lookup misses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlCalendar {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl HtmlCalendar {
    pub fn parse(doc: &str) -> Self {
        let html = Html::parse_document(doc);
        let table_sel = selector("table");
        let tr_sel = selector("tr");

        let tables: Vec<ElementRef> = html.select(&table_sel).collect();
        let Some(first) = tables.first().copied() else {
            logd!("no <table> in document ({} bytes)", doc.len());
            return Self::default();
        };

        for table in &tables {
            let trs = own_rows(*table, &tr_sel);
            let header = trs
                .iter()
                .position(|tr| row_cells(*tr).iter().any(|c| looks_like_date(c)));
            if let Some(h) = header {
                let headers = row_cells(trs[h]);
                let rows = trs[h + 1..]
                    .iter()
                    .copied()
                    .filter(|tr| !in_thead(*tr))
                    .filter_map(to_row)
                    .collect();
                return Self { headers, rows };
            }
        }

        logd!("no date header row in {} table(s); using the first table", tables.len());
        let mut trs = own_rows(first, &tr_sel).into_iter();
        let headers = trs.next().map(row_cells).unwrap_or_default();
        let rows = trs.filter_map(to_row).collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.label.as_str())
    }
}

impl CalendarTable for HtmlCalendar {
    fn column_of(&self, date_label: &str) -> Option<usize> {
        let want = date_key(date_label);
        self.headers.iter().position(|h| date_key(h) == want)
    }

    fn row_of(&self, row_label: &str) -> Option<usize> {
        let want = normalize_ws(row_label);
        self.rows.iter().position(|r| r.label == want)
    }

    fn cell_text(&self, row: usize, column: usize) -> Option<String> {
        let r = self.rows.get(row)?;
        if !r.data.is_empty() {
            // Row header is a <th>: data cells sit one left of their header
            let j = if r.data.len() + 1 == self.headers.len() {
                column.checked_sub(1)?
            } else {
                column
            };
            return r.data.get(j).cloned();
        }
        r.cells.get(column).cloned()
    }
}

fn selector(css: &str) -> Selector {
    // Only called with literal selectors above
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e}"))
}

/// `<tr>`s of `table` itself, not of tables nested inside its cells.
fn own_rows<'a>(table: ElementRef<'a>, tr_sel: &Selector) -> Vec<ElementRef<'a>> {
    table
        .select(tr_sel)
        .filter(|tr| {
            tr.ancestors()
                .filter_map(ElementRef::wrap)
                .find(|el| el.value().name() == "table")
                .is_some_and(|t| t.id() == table.id())
        })
        .collect()
}

fn in_thead(tr: ElementRef) -> bool {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|el| el.value().name() == "thead")
}

/// Direct `th`/`td` children of a row; nested tables are not descended into.
fn cell_elements(tr: ElementRef) -> impl Iterator<Item = ElementRef> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "th" | "td"))
}

fn text_of(el: ElementRef) -> String {
    normalize_ws(&el.text().collect::<String>())
}

fn row_cells(tr: ElementRef) -> Vec<String> {
    cell_elements(tr).map(text_of).collect()
}

fn to_row(tr: ElementRef) -> Option<Row> {
    let cells: Vec<String> = row_cells(tr);
    let label = cells.first()?.clone();
    let data = cell_elements(tr)
        .filter(|el| el.value().name() == "td")
        .map(text_of)
        .collect();
    Some(Row { label, cells, data })
}
