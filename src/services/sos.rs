//! Emergency alert timer.
//!
//! A triggered alert moves `Idle → Sending → Sent → Dismissed` on two
//! timed steps. [`SosAlert::cancel`] stops it at any point and leaves it
//! `Cancelled`. The alert never reads or writes the store.

use std::fmt;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::SosConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SosStatus {
    Idle,
    Sending,
    Sent,
    Dismissed,
    Cancelled,
}

impl SosStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Dismissed | Self::Cancelled)
    }
}

impl fmt::Display for SosStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Sending => f.write_str("sending"),
            Self::Sent => f.write_str("sent"),
            Self::Dismissed => f.write_str("dismissed"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

pub struct SosAlert {
    contact: String,
    send_delay: Duration,
    dismiss_delay: Duration,
    status: watch::Sender<SosStatus>,
    cancel: watch::Sender<bool>,
}

impl SosAlert {
    #[must_use]
    pub fn new(config: &SosConfig, contact: impl Into<String>) -> Self {
        Self {
            contact: contact.into(),
            send_delay: Duration::from_millis(config.send_delay_ms),
            dismiss_delay: Duration::from_millis(config.dismiss_delay_ms),
            status: watch::Sender::new(SosStatus::Idle),
            cancel: watch::Sender::new(false),
        }
    }

    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    #[must_use]
    pub fn status(&self) -> SosStatus {
        *self.status.borrow()
    }

    /// Receiver that observes every status change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SosStatus> {
        self.status.subscribe()
    }

    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    /// Drives the alert to completion and returns the final status.
    ///
    /// Only an idle alert starts; any other state is returned unchanged.
    pub async fn run(&self) -> SosStatus {
        if self.status() != SosStatus::Idle {
            return self.status();
        }

        self.status.send_replace(SosStatus::Sending);
        info!(contact = %self.contact, "Sending SOS alert");
        if !self.wait(self.send_delay).await {
            return self.cancelled();
        }

        self.status.send_replace(SosStatus::Sent);
        info!(contact = %self.contact, "SOS alert sent");
        if !self.wait(self.dismiss_delay).await {
            return self.cancelled();
        }

        self.status.send_replace(SosStatus::Dismissed);
        SosStatus::Dismissed
    }

    /// Sleeps for `delay`; `false` if cancelled first.
    async fn wait(&self, delay: Duration) -> bool {
        let mut cancel = self.cancel.subscribe();
        let sleep = tokio::time::sleep(delay);
        tokio::pin!(sleep);

        tokio::select! {
            () = &mut sleep => true,
            _ = cancel.wait_for(|cancelled| *cancelled) => false,
        }
    }

    fn cancelled(&self) -> SosStatus {
        warn!(contact = %self.contact, "SOS alert cancelled");
        self.status.send_replace(SosStatus::Cancelled);
        SosStatus::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn quick() -> SosConfig {
        SosConfig {
            send_delay_ms: 20,
            dismiss_delay_ms: 20,
        }
    }

    #[tokio::test]
    async fn runs_through_every_stage() {
        let alert = SosAlert::new(&quick(), "9999999999");
        let mut rx = alert.subscribe();

        let observer = tokio::spawn(async move {
            let mut seen = Vec::new();
            while rx.changed().await.is_ok() {
                let status = *rx.borrow_and_update();
                seen.push(status);
                if status.is_finished() {
                    break;
                }
            }
            seen
        });

        assert_eq!(alert.run().await, SosStatus::Dismissed);
        let seen = observer.await.unwrap();
        assert_eq!(seen.last(), Some(&SosStatus::Dismissed));
        assert!(seen.contains(&SosStatus::Sending));
    }

    #[tokio::test]
    async fn cancel_while_sending() {
        let alert = Arc::new(SosAlert::new(
            &SosConfig {
                send_delay_ms: 5_000,
                dismiss_delay_ms: 5_000,
            },
            "9999999999",
        ));
        let mut rx = alert.subscribe();

        let runner = tokio::spawn({
            let alert = alert.clone();
            async move { alert.run().await }
        });

        rx.wait_for(|s| *s == SosStatus::Sending).await.unwrap();
        alert.cancel();

        assert_eq!(runner.await.unwrap(), SosStatus::Cancelled);
        assert_eq!(alert.status(), SosStatus::Cancelled);
    }

    #[tokio::test]
    async fn cancel_before_start_never_sends() {
        let alert = SosAlert::new(&quick(), "9999999999");
        alert.cancel();
        assert_eq!(alert.run().await, SosStatus::Cancelled);
        assert_ne!(alert.run().await, SosStatus::Dismissed);
    }
}
