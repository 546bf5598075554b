//! Worker dashboard command handlers

use crate::models::{Role, User};
use crate::services::WorkerProfileUpdate;
use crate::state::SharedState;

use super::{print_worker, session_as};

/// Resolves the logged-in worker and clears yesterday's availability flag.
fn worker_session(state: &SharedState) -> anyhow::Result<Option<User>> {
    let Some(user) = session_as(state, Role::Worker)? else {
        return Ok(None);
    };
    if state.worker.refresh_daily_availability(user.id())? {
        println!("A new day: you are marked busy until you toggle availability.");
    }
    Ok(Some(user))
}

pub fn cmd_worker_jobs(state: &SharedState) -> anyhow::Result<()> {
    let Some(user) = worker_session(state)? else {
        return Ok(());
    };

    let listings = state.worker.find_work(user.id())?;
    if listings.is_empty() {
        println!("No open jobs right now.");
        return Ok(());
    }

    println!("Open Jobs ({} total)", listings.len());
    println!("{:-<70}", "");

    for listing in listings {
        let job = &listing.job;
        let marker = if listing.urgent { "🔥 URGENT " } else { "" };
        println!(
            "{marker}{} in {} [{}] - ₹{}/day",
            job.job_type, job.area, job.id, job.payment
        );
        println!(
            "  {} | {} worker(s) | needed: {}",
            job.employer_name, job.workers_needed, job.date_needed
        );
        if let Some(description) = &job.description {
            println!("  {description}");
        }
    }

    Ok(())
}

pub fn cmd_worker_toggle(state: &SharedState) -> anyhow::Result<()> {
    let Some(user) = worker_session(state)? else {
        return Ok(());
    };

    let worker = state.worker.toggle_availability(user.id())?;
    if worker.is_available_today {
        println!("✓ You are now available for work today.");
    } else {
        println!("✓ You are now marked busy.");
    }
    Ok(())
}

pub fn cmd_worker_rate(
    state: &SharedState,
    employer_id: &str,
    rating: u8,
    comment: Option<String>,
) -> anyhow::Result<()> {
    let Some(user) = worker_session(state)? else {
        return Ok(());
    };

    state
        .worker
        .rate_employer(user.id(), employer_id, rating, comment)?;
    println!("✓ Rated {employer_id} {rating}/5. Thanks for the feedback!");
    Ok(())
}

pub fn cmd_worker_profile(state: &SharedState, update: WorkerProfileUpdate) -> anyhow::Result<()> {
    let Some(user) = worker_session(state)? else {
        return Ok(());
    };

    let worker = if update == WorkerProfileUpdate::default() {
        match user.into_worker() {
            Some(worker) => worker,
            None => return Ok(()),
        }
    } else {
        let worker = state.worker.update_profile(user.id(), update)?;
        println!("✓ Profile updated.");
        worker
    };

    print_worker(&worker);
    println!("  Status: {}", worker.status);
    Ok(())
}
