pub mod cli;
pub mod config;
pub mod db;
pub mod derivations;
pub mod domain;
pub mod models;
pub mod services;
pub mod state;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{AdminCommands, Cli, Commands, EmployerCommands, RegisterCommands, WorkerCommands};
pub use config::Config;
pub use db::Store;
use services::{EmployerProfileUpdate, WorkerProfileUpdate};
pub use state::SharedState;

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command.as_ref() else {
        print_help();
        return Ok(());
    };

    if matches!(command, Commands::Init) {
        return cli::cmd_init();
    }

    let config = load_config(&cli)?;
    init_tracing(&config);
    debug!(?config, "Configuration loaded");

    let state = SharedState::new(config)?;

    match cli.command {
        None | Some(Commands::Init) => Ok(()),

        Some(Commands::Login { phone }) => cli::cmd_login(&state, &phone),

        Some(Commands::Logout) => cli::cmd_logout(&state),

        Some(Commands::Whoami) => cli::cmd_whoami(&state),

        Some(Commands::Register { command }) => match command {
            RegisterCommands::Worker(signup) => cli::cmd_register_worker(&state, signup),
            RegisterCommands::Employer(signup) => cli::cmd_register_employer(&state, signup),
        },

        Some(Commands::Worker { command }) => match command {
            WorkerCommands::Jobs => cli::cmd_worker_jobs(&state),
            WorkerCommands::Toggle => cli::cmd_worker_toggle(&state),
            WorkerCommands::Rate {
                employer_id,
                rating,
                comment,
            } => cli::cmd_worker_rate(&state, &employer_id, rating, comment),
            WorkerCommands::Profile {
                name,
                area,
                wage,
                experience,
                bio,
            } => cli::cmd_worker_profile(
                &state,
                WorkerProfileUpdate {
                    name,
                    area,
                    daily_wage: wage,
                    experience_years: experience,
                    bio,
                },
            ),
        },

        Some(Commands::Employer { command }) => match command {
            EmployerCommands::Workers { skill, area } => {
                cli::cmd_employer_workers(&state, skill, area)
            }
            EmployerCommands::Post(posting) => cli::cmd_employer_post(&state, posting),
            EmployerCommands::Jobs => cli::cmd_employer_jobs(&state),
            EmployerCommands::DeleteJob { job_id, yes } => {
                cli::cmd_employer_delete_job(&state, &job_id, yes)
            }
            EmployerCommands::Rate {
                worker_id,
                rating,
                comment,
            } => cli::cmd_employer_rate(&state, &worker_id, rating, comment),
            EmployerCommands::Profile { name, area, bio } => cli::cmd_employer_profile(
                &state,
                EmployerProfileUpdate { name, area, bio },
            ),
        },

        Some(Commands::Admin { command }) => match command {
            AdminCommands::Pending { search } => cli::cmd_admin_pending(&state, search.as_deref()),
            AdminCommands::Active { search } => cli::cmd_admin_active(&state, search.as_deref()),
            AdminCommands::Suspended { search } => {
                cli::cmd_admin_suspended(&state, search.as_deref())
            }
            AdminCommands::Rejected { search } => cli::cmd_admin_rejected(&state, search.as_deref()),
            AdminCommands::Approve { worker_id } => cli::cmd_admin_approve(&state, &worker_id),
            AdminCommands::Reject { worker_id, reason } => {
                cli::cmd_admin_reject(&state, &worker_id, reason)
            }
            AdminCommands::Suspend { worker_id, yes } => {
                cli::cmd_admin_suspend(&state, &worker_id, yes)
            }
            AdminCommands::Delete { worker_id, yes } => {
                cli::cmd_admin_delete(&state, &worker_id, yes)
            }
            AdminCommands::AddWorker(form) => cli::cmd_admin_add_worker(&state, form),
        },

        Some(Commands::Sos) => cli::cmd_sos(&state).await,
    }
}

fn print_help() {
    println!("KaamChowk - daily-wage labour marketplace");
    println!();
    println!("Usage: kaamchowk <command>");
    println!();
    println!("Getting started:");
    println!("  init                      Create a default config.toml");
    println!("  login <phone>             Log in (admin: 9999999999)");
    println!("  register worker|employer  Create an account");
    println!("  whoami                    Show the logged-in account");
    println!("  logout                    End the session");
    println!();
    println!("Dashboards:");
    println!("  worker jobs|toggle|rate|profile");
    println!("  employer workers|post|jobs|delete-job|rate|profile");
    println!("  admin pending|active|suspended|rejected|approve|reject|suspend|delete|add-worker");
    println!("  sos                       Alert the chowk manager");
    println!();
    println!("Run 'kaamchowk <command> --help' for details.");
}
