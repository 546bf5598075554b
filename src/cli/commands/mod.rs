mod account;
mod admin;
mod employer;
mod register;
mod sos;
mod worker;

pub use account::{cmd_init, cmd_login, cmd_logout, cmd_whoami};
pub use admin::{
    cmd_admin_active, cmd_admin_add_worker, cmd_admin_approve, cmd_admin_delete,
    cmd_admin_pending, cmd_admin_reject, cmd_admin_rejected, cmd_admin_suspend,
    cmd_admin_suspended,
};
pub use employer::{
    cmd_employer_delete_job, cmd_employer_jobs, cmd_employer_post, cmd_employer_profile,
    cmd_employer_rate, cmd_employer_workers,
};
pub use register::{cmd_register_employer, cmd_register_worker};
pub use sos::cmd_sos;
pub use worker::{cmd_worker_jobs, cmd_worker_profile, cmd_worker_rate, cmd_worker_toggle};

use std::io::{BufRead, Write};

use crate::models::{Role, User, WorkerProfile};
use crate::state::SharedState;

/// Asks `question` and reads a `y`/`N` answer. Anything other than `y`
/// declines.
fn confirm_with(
    question: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<bool> {
    writeln!(output, "{question}")?;
    writeln!(output, "Enter 'y' to confirm, anything else to cancel:")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn confirm(question: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    confirm_with(question, &mut std::io::stdin().lock(), &mut std::io::stdout())
}

/// The logged-in user if they hold `role`; otherwise prints why not.
fn session_as(state: &SharedState, role: Role) -> anyhow::Result<Option<User>> {
    let Some(user) = state.current_user()? else {
        println!("Not logged in. Use: kaamchowk login <phone>");
        return Ok(None);
    };

    if user.role() != role {
        println!(
            "Logged in as {} ({}); this command is for {role}s.",
            user.name(),
            user.role()
        );
        return Ok(None);
    }

    Ok(Some(user))
}

fn print_worker(worker: &WorkerProfile) {
    let availability = if worker.is_available_today {
        "🟢 Available"
    } else {
        "⚪ Busy"
    };
    let skills: Vec<&str> = worker.skills.iter().map(|s| s.as_str()).collect();

    println!(
        "{} [{}] ★ {} | {}",
        worker.account.name,
        worker.account.id,
        worker.rating.display(),
        availability
    );
    println!(
        "  {} | {} | ₹{}/day | {} yrs | 📞 {}",
        skills.join(", "),
        worker.area,
        worker.daily_wage,
        worker.experience_years,
        worker.account.phone
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn only_y_confirms() {
        let mut out = Vec::new();
        assert!(confirm_with("Delete?", &mut Cursor::new("y\n"), &mut out).unwrap());
        assert!(confirm_with("Delete?", &mut Cursor::new(" Y \n"), &mut out).unwrap());
        assert!(!confirm_with("Delete?", &mut Cursor::new("yes\n"), &mut out).unwrap());
        assert!(!confirm_with("Delete?", &mut Cursor::new(""), &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().contains("Delete?"));
    }

    #[test]
    fn assume_yes_skips_prompt() {
        assert!(confirm("Delete?", true).unwrap());
    }
}
