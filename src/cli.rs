// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::WatchOptions;
use crate::core::net::{Fetch, FileFetcher, HttpFetcher};
use crate::error::WatchError;
use crate::notify::{DryRun, LineBroadcast, Notifier, NullNotifier};
use crate::runner::{self, RunSummary};

/// Check the campground reservation calendar once and push a LINE message on vacancies.
///
/// Targets and credentials come from the environment (TARGET_DATE_LABEL(S),
/// TARGET_ROWS, LINE_CHANNEL_ACCESS_TOKEN, ...); flags here override them.
#[derive(Debug, Parser)]
#[command(name = "camp_watch", version, about)]
pub struct Cli {
    /// Compose and log the message but never POST it
    #[arg(long)]
    pub dry_run: bool,

    /// Read the calendar from a saved page instead of fetching it
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Calendar page to fetch
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Send a "no vacancy" message too
    #[arg(long)]
    pub always_notify: bool,
}

impl Cli {
    /// Overlay flags on environment-derived options.
    pub fn apply(&self, opts: &mut WatchOptions) {
        if let Some(url) = &self.url {
            opts.page_url = url.clone();
        }
        if self.always_notify {
            opts.always_notify = true;
        }
    }

    fn fetcher(&self, opts: &WatchOptions) -> Result<Box<dyn Fetch>, WatchError> {
        let fetcher: Box<dyn Fetch> = match &self.from_file {
            Some(path) => Box::new(FileFetcher::new(path)),
            None => Box::new(HttpFetcher::new(&opts.page_url, opts.timeout)?),
        };
        Ok(fetcher)
    }

    fn notifier(&self, opts: &WatchOptions) -> Result<Box<dyn Notifier>, WatchError> {
        if self.dry_run {
            return Ok(Box::new(DryRun));
        }
        let notifier: Box<dyn Notifier> = match opts.token() {
            Some(token) => Box::new(LineBroadcast::new(&opts.notify_url, token, opts.timeout)?),
            None => Box::new(NullNotifier),
        };
        Ok(notifier)
    }
}

pub fn run() -> Result<RunSummary, WatchError> {
    let cli = Cli::parse();

    let mut opts = WatchOptions::from_env()?;
    cli.apply(&mut opts);

    logf!(
        "watching {} for rows [{}]",
        opts.target.dates.join(", "),
        opts.target.rows.join(", ")
    );

    let fetcher = cli.fetcher(&opts)?;
    let notifier = cli.notifier(&opts)?;
    let summary = runner::run(&opts, fetcher.as_ref(), notifier.as_ref())?;

    logf!("done: {:?}", summary.outcome);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "camp_watch",
            "--dry-run",
            "--from-file",
            "page.html",
            "--url",
            "https://example.test/cal",
            "--always-notify",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.from_file.as_deref(), Some(std::path::Path::new("page.html")));

        let mut opts = WatchOptions::default();
        cli.apply(&mut opts);
        assert_eq!(opts.page_url, "https://example.test/cal");
        assert!(opts.always_notify);
    }

    #[test]
    fn no_flags_keep_env_options() {
        let cli = Cli::try_parse_from(["camp_watch"]).unwrap();
        let mut opts = WatchOptions::default();
        opts.always_notify = true;
        cli.apply(&mut opts);
        assert_eq!(opts, {
            let mut o = WatchOptions::default();
            o.always_notify = true;
            o
        });
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["camp_watch", "--loop"]).is_err());
    }
}
