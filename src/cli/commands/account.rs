//! Session command handlers

use crate::config::Config;
use crate::models::User;
use crate::services::AuthError;
use crate::state::SharedState;

pub fn cmd_init() -> anyhow::Result<()> {
    if Config::create_default_if_missing()? {
        println!("✓ Config file created. Edit config.toml and run again.");
    } else {
        println!("config.toml already exists; leaving it unchanged.");
    }
    Ok(())
}

pub fn cmd_login(state: &SharedState, phone: &str) -> anyhow::Result<()> {
    match state.auth.login(phone) {
        Ok(user) => {
            println!("✓ Welcome, {} ({})", user.name(), user.role());
            Ok(())
        }
        Err(AuthError::UserNotFound) => {
            println!("{}", AuthError::UserNotFound);
            println!("Register with: kaamchowk register worker|employer --help");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn cmd_logout(state: &SharedState) -> anyhow::Result<()> {
    state.auth.logout()?;
    println!("✓ Logged out.");
    Ok(())
}

pub fn cmd_whoami(state: &SharedState) -> anyhow::Result<()> {
    let Some(user) = state.auth.current_user()? else {
        println!("Not logged in.");
        return Ok(());
    };

    println!("{} [{}]", user.name(), user.id());
    println!("  Role: {} | Phone: {}", user.role(), user.phone());

    match &user {
        User::Worker(worker) => {
            println!(
                "  Status: {} | Rating: {} | Available today: {}",
                worker.status,
                worker.rating.display(),
                if worker.is_available_today { "yes" } else { "no" }
            );
            if let Some(reason) = &worker.rejection_reason {
                println!("  Rejection reason: {reason}");
            }
        }
        User::Employer(employer) => {
            println!(
                "  Area: {} | Rating: {}",
                employer.area,
                employer.rating.display()
            );
        }
        User::Admin(_) => {}
    }

    if let Some(bio) = &user.account().bio {
        println!("  {bio}");
    }

    Ok(())
}
