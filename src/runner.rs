// src/runner.rs
// Fetch → Match → (Notify | NoOp) → End. One pass, no loops, no retries.

use crate::config::WatchOptions;
use crate::core::net::Fetch;
use crate::error::WatchError;
use crate::notify::{self, Delivery, Notifier};
use crate::specs::{self, CellReport, CellStatus};
use crate::store::{self, NotifiedState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to announce; no network call made.
    Quiet,
    /// Message accepted by the endpoint.
    Sent,
    /// Message composed but not delivered (no token, dry run).
    Skipped,
    /// Same vacancies as the last successful send; not repeated.
    Suppressed,
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub report: CellReport,
    pub outcome: Outcome,
}

/// Top-level runner.
///
/// Fetch failures abort before anything is sent. A delivery failure is returned
/// once the run is otherwise complete; the caller reports either.
pub fn run(
    opts: &WatchOptions,
    fetcher: &dyn Fetch,
    notifier: &dyn Notifier,
) -> Result<RunSummary, WatchError> {
    let doc = fetcher.fetch()?;

    let report = specs::match_document(&doc, &opts.target);
    log_report(&report);

    let Some(notice) = notify::compose(&report, &opts.target, &opts.page_url, opts.always_notify) else {
        logf!("no vacancy for {}", opts.target.dates.join(", "));
        if let Some(path) = &opts.state_file {
            if let Err(e) = store::clear(path) {
                loge!("cannot clear {}: {e}", path.display());
            }
        }
        return Ok(RunSummary { report, outcome: Outcome::Quiet });
    };

    if let Some(path) = &opts.state_file {
        if notice.has_vacancy() && store::load(path).available == notice.keys {
            logf!("vacancies unchanged since last notification; not repeating");
            return Ok(RunSummary { report, outcome: Outcome::Suppressed });
        }
    }

    let delivery = notifier.send(&notice.text)?;

    let outcome = match delivery {
        Delivery::Sent => {
            if let Some(path) = &opts.state_file {
                remember(path, &notice);
            }
            Outcome::Sent
        }
        Delivery::Skipped => Outcome::Skipped,
    };

    Ok(RunSummary { report, outcome })
}

fn remember(path: &std::path::Path, notice: &notify::Notice) {
    let res = if notice.has_vacancy() {
        store::save(path, &NotifiedState { available: notice.keys.clone() })
    } else {
        store::clear(path)
    };
    if let Err(e) = res {
        loge!("cannot update {}: {e}", path.display());
    }
}

fn log_report(report: &CellReport) {
    for c in report.cells() {
        match &c.status {
            CellStatus::Available(m) => logf!("{} の {}: {} (available)", c.date, c.row, m),
            CellStatus::Unavailable(m) => logf!("{} の {}: {:?}", c.date, c.row, m),
            CellStatus::Unknown(miss) => logw!("{} の {}: {}", c.date, c.row, miss),
        }
    }
}
