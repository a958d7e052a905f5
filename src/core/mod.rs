// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{CalendarTable, HtmlCalendar};
pub use net::{Fetch, FileFetcher, HttpFetcher};
