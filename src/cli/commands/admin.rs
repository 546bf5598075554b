//! Admin moderation command handlers

use crate::cli::AdminWorkerForm;
use crate::models::{Role, Skill, WorkerProfile};
use crate::services::NewWorker;
use crate::state::SharedState;

use super::{confirm, print_worker, session_as};

fn is_admin(state: &SharedState) -> anyhow::Result<bool> {
    Ok(session_as(state, Role::Admin)?.is_some())
}

fn print_list(title: &str, workers: &[WorkerProfile]) {
    if workers.is_empty() {
        println!("No {} workers.", title.to_lowercase());
        return;
    }

    println!("{title} Workers ({} total)", workers.len());
    println!("{:-<70}", "");
    for worker in workers {
        print_worker(worker);
    }
}

pub fn cmd_admin_pending(state: &SharedState, search: Option<&str>) -> anyhow::Result<()> {
    if !is_admin(state)? {
        return Ok(());
    }
    let workers = state.admin.pending_workers(search.unwrap_or_default())?;
    print_list("Pending", &workers);
    Ok(())
}

pub fn cmd_admin_active(state: &SharedState, search: Option<&str>) -> anyhow::Result<()> {
    if !is_admin(state)? {
        return Ok(());
    }
    let workers = state.admin.active_workers(search.unwrap_or_default())?;
    print_list("Active", &workers);
    Ok(())
}

pub fn cmd_admin_suspended(state: &SharedState, search: Option<&str>) -> anyhow::Result<()> {
    if !is_admin(state)? {
        return Ok(());
    }
    let workers = state.admin.suspended_workers(search.unwrap_or_default())?;
    print_list("Suspended", &workers);
    if !workers.is_empty() {
        println!();
        println!("Reinstate with: kaamchowk admin approve <worker_id>");
    }
    Ok(())
}

pub fn cmd_admin_rejected(state: &SharedState, search: Option<&str>) -> anyhow::Result<()> {
    if !is_admin(state)? {
        return Ok(());
    }
    let workers = state.admin.rejected_workers(search.unwrap_or_default())?;
    if workers.is_empty() {
        println!("No rejected workers.");
        return Ok(());
    }

    println!("Rejected Workers ({} total)", workers.len());
    println!("{:-<70}", "");
    for worker in &workers {
        print_worker(worker);
        if let Some(reason) = &worker.rejection_reason {
            println!("  Reason: {reason}");
        }
    }
    Ok(())
}

pub fn cmd_admin_approve(state: &SharedState, worker_id: &str) -> anyhow::Result<()> {
    if !is_admin(state)? {
        return Ok(());
    }
    let worker = state.admin.approve(worker_id)?;
    println!("✓ Approved {} [{}]", worker.account.name, worker.account.id);
    Ok(())
}

pub fn cmd_admin_reject(
    state: &SharedState,
    worker_id: &str,
    reason: Option<String>,
) -> anyhow::Result<()> {
    if !is_admin(state)? {
        return Ok(());
    }
    let worker = state.admin.reject(worker_id, reason)?;
    println!("✓ Rejected {} [{}]", worker.account.name, worker.account.id);
    Ok(())
}

pub fn cmd_admin_suspend(
    state: &SharedState,
    worker_id: &str,
    assume_yes: bool,
) -> anyhow::Result<()> {
    if !is_admin(state)? {
        return Ok(());
    }
    if !confirm(&format!("Suspend worker {worker_id}?"), assume_yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    let worker = state.admin.suspend(worker_id)?;
    println!("✓ Suspended {} [{}]", worker.account.name, worker.account.id);
    Ok(())
}

pub fn cmd_admin_delete(
    state: &SharedState,
    worker_id: &str,
    assume_yes: bool,
) -> anyhow::Result<()> {
    if !is_admin(state)? {
        return Ok(());
    }

    let Some(worker) = state
        .store
        .find_user(worker_id)?
        .and_then(|u| u.into_worker())
    else {
        println!("Worker {worker_id} not found.");
        return Ok(());
    };

    let question = format!(
        "Permanently delete {} [{}]?",
        worker.account.name, worker.account.id
    );
    if !confirm(&question, assume_yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    state.admin.delete_worker(worker_id)?;
    println!("✓ Deleted: {}", worker.account.name);
    Ok(())
}

pub fn cmd_admin_add_worker(state: &SharedState, form: AdminWorkerForm) -> anyhow::Result<()> {
    if !is_admin(state)? {
        return Ok(());
    }

    let worker = state.admin.add_worker(NewWorker {
        name: form.name,
        phone: form.phone,
        area: form.area,
        skills: form
            .skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(Skill::from)
            .collect(),
        daily_wage: form.wage,
        experience_years: form.experience,
        photo_url: form.photo_url,
    })?;

    println!("✓ Added worker {} [{}]", worker.account.name, worker.account.id);
    Ok(())
}
