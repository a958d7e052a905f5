// src/notify/mod.rs

mod line;
mod message;

pub use line::LineBroadcast;
pub use message::{Notice, compose};

use crate::error::DeliveryError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// The endpoint accepted the message.
    Sent,
    /// Nothing left the process (no token, dry run).
    Skipped,
}

/// Outbound message sink. One call per run at most.
pub trait Notifier {
    fn send(&self, text: &str) -> Result<Delivery, DeliveryError>;
}

/// Used when no token is configured: logs and drops the message.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn send(&self, text: &str) -> Result<Delivery, DeliveryError> {
        logw!("no LINE token configured; notification not sent");
        logd!("dropped message:\n{text}");
        Ok(Delivery::Skipped)
    }
}

/// `--dry-run`: print the message that would have been sent.
pub struct DryRun;

impl Notifier for DryRun {
    fn send(&self, text: &str) -> Result<Delivery, DeliveryError> {
        logf!("dry run; message not sent:\n{text}");
        Ok(Delivery::Skipped)
    }
}
