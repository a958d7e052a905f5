// src/specs/mod.rs
//! # Page "specs"
//!
//! Page-specific reading rules. A spec knows *where the ground truth lives* in a
//! fetched page and turns it into small typed results; it never fetches, never
//! notifies and never touches the disk.
//!
//! ## What lives here
//! - **Cell matching** for the reservation calendar: locate the date column and the
//!   target rows, read the intersecting cell, classify its marker.
//! - **Tolerant extraction**: a missing column, row or cell becomes an `Unknown`
//!   status for that one cell, never an error for the whole page.
//!
//! ## What does **not** live here
//! - **DOM access**. Specs go through `core::html::CalendarTable`, so the HTML
//!   backend can change without touching the matching rules.
//! - **Message text and delivery** (`notify`), **duplicate suppression** (`store`).
//!
//! ## Typical call chain
//! ```text
//! runner → core::net::Fetch → specs::calendar::match_document
//!                                ↘  CellReport
//!          notify::compose → notify::Notifier::send
//! ```
//!
//! ## Conventions & invariants
//! - Row labels match **exactly** after whitespace normalization; no substring hits.
//! - Date labels match after `core::sanitize::date_key` (zero padding and a weekday
//!   suffix are ignored), still exact: `11/1` never hits `11/12`.
//! - Output covers **every** configured (row, date) pair, in configured order.
//! - Same document + same targets → same report.
//!
//! ## Testing notes
//! Specs are tested offline against inline markup and `tests/fixtures/*.html`.
pub mod calendar;

pub use calendar::{CellReport, CellResult, CellStatus, Miss, match_cells, match_document};
