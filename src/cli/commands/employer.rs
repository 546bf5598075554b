//! Employer dashboard command handlers

use crate::cli::JobPosting;
use crate::derivations::WorkerFilter;
use crate::models::{Role, Skill};
use crate::services::{EmployerProfileUpdate, NewJob};
use crate::state::SharedState;

use super::{confirm, print_worker, session_as};

pub fn cmd_employer_workers(
    state: &SharedState,
    skill: Option<String>,
    area: Option<String>,
) -> anyhow::Result<()> {
    if session_as(state, Role::Employer)?.is_none() {
        return Ok(());
    }

    let workers = state.employer.find_workers(&WorkerFilter { skill, area })?;
    if workers.is_empty() {
        println!("No workers match your search.");
        return Ok(());
    }

    println!("Workers ({} found)", workers.len());
    println!("{:-<70}", "");
    for worker in &workers {
        print_worker(worker);
    }
    Ok(())
}

pub fn cmd_employer_post(state: &SharedState, posting: JobPosting) -> anyhow::Result<()> {
    let Some(user) = session_as(state, Role::Employer)? else {
        return Ok(());
    };

    let job = state.employer.post_job(
        user.id(),
        NewJob {
            job_type: Skill::from(posting.job_type.as_str()),
            area: posting.area,
            workers_needed: posting.workers,
            payment: posting.payment,
            date_needed: posting.date,
            description: posting.description,
        },
    )?;

    println!("✓ Posted {} job [{}] in {}", job.job_type, job.id, job.area);
    Ok(())
}

pub fn cmd_employer_jobs(state: &SharedState) -> anyhow::Result<()> {
    let Some(user) = session_as(state, Role::Employer)? else {
        return Ok(());
    };

    let jobs = state.employer.my_jobs(user.id())?;
    if jobs.is_empty() {
        println!("You have no active jobs.");
        println!();
        println!("Post one with: kaamchowk employer post --type Mason --payment 700 --date Today");
        return Ok(());
    }

    println!("My Jobs ({} active)", jobs.len());
    println!("{:-<70}", "");
    for job in jobs {
        println!(
            "{} [{}] - {} worker(s) at ₹{}/day",
            job.job_type, job.id, job.workers_needed, job.payment
        );
        println!("  {} | needed: {}", job.area, job.date_needed);
    }
    Ok(())
}

pub fn cmd_employer_delete_job(
    state: &SharedState,
    job_id: &str,
    assume_yes: bool,
) -> anyhow::Result<()> {
    let Some(user) = session_as(state, Role::Employer)? else {
        return Ok(());
    };

    let Some(job) = state.store.find_job(job_id)? else {
        println!("Job {job_id} not found.");
        return Ok(());
    };

    let question = format!("Delete {} job [{}] in {}?", job.job_type, job.id, job.area);
    if !confirm(&question, assume_yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    state.employer.delete_job(user.id(), job_id)?;
    println!("✓ Deleted job {job_id}");
    Ok(())
}

pub fn cmd_employer_rate(
    state: &SharedState,
    worker_id: &str,
    rating: u8,
    comment: Option<String>,
) -> anyhow::Result<()> {
    let Some(user) = session_as(state, Role::Employer)? else {
        return Ok(());
    };

    state
        .employer
        .rate_worker(user.id(), worker_id, rating, comment)?;
    println!("✓ Rated {worker_id} {rating}/5.");
    Ok(())
}

pub fn cmd_employer_profile(
    state: &SharedState,
    update: EmployerProfileUpdate,
) -> anyhow::Result<()> {
    let Some(user) = session_as(state, Role::Employer)? else {
        return Ok(());
    };

    let employer = if update == EmployerProfileUpdate::default() {
        match user.into_employer() {
            Some(employer) => employer,
            None => return Ok(()),
        }
    } else {
        let employer = state.employer.update_profile(user.id(), update)?;
        println!("✓ Profile updated.");
        employer
    };

    println!("{} [{}]", employer.account.name, employer.account.id);
    println!(
        "  {} | ★ {} | 📞 {}",
        employer.area,
        employer.rating.display(),
        employer.account.phone
    );
    if let Some(bio) = &employer.account.bio {
        println!("  {bio}");
    }
    Ok(())
}
