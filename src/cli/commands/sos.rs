//! SOS alert command handler

use std::sync::Arc;
use tokio::signal;

use crate::services::SosStatus;
use crate::state::SharedState;

/// Runs the alert in the foreground. Ctrl-C cancels it.
pub async fn cmd_sos(state: &SharedState) -> anyhow::Result<()> {
    let alert = Arc::new(state.sos_alert());
    let mut updates = alert.subscribe();

    println!("🚨 SOS: alerting the chowk manager at {}", alert.contact());
    println!("Press Ctrl-C to cancel.");

    let runner = tokio::spawn({
        let alert = alert.clone();
        async move { alert.run().await }
    });

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let status = *updates.borrow_and_update();
                match status {
                    SosStatus::Sending => println!("Sending alert..."),
                    SosStatus::Sent => println!("✓ Alert sent. Help is on the way."),
                    SosStatus::Dismissed | SosStatus::Cancelled | SosStatus::Idle => {}
                }
                if status.is_finished() {
                    break;
                }
            }
            _ = signal::ctrl_c() => {
                alert.cancel();
            }
        }
    }

    match runner.await? {
        SosStatus::Cancelled => println!("SOS cancelled."),
        _ => println!("Done."),
    }
    Ok(())
}
