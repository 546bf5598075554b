//! CLI module - command-line front end for the KaamChowk marketplace.
//!
//! Commands act as the logged-in user recorded in the store's session key.

mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// KaamChowk - daily-wage labour marketplace
#[derive(Parser)]
#[command(name = "kaamchowk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default search paths
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Log in with a registered phone number
    Login {
        phone: String,
    },

    /// End the current session
    Logout,

    /// Show the logged-in account
    #[command(alias = "me")]
    Whoami,

    /// Create a new account and log in
    Register {
        #[command(subcommand)]
        command: RegisterCommands,
    },

    /// Worker dashboard
    #[command(alias = "w")]
    Worker {
        #[command(subcommand)]
        command: WorkerCommands,
    },

    /// Employer dashboard
    #[command(alias = "e")]
    Employer {
        #[command(subcommand)]
        command: EmployerCommands,
    },

    /// Admin moderation panel
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Send an emergency alert to the chowk manager
    Sos,
}

#[derive(Subcommand)]
pub enum RegisterCommands {
    /// Register as a worker (starts pending admin approval)
    Worker(WorkerSignup),
    /// Register as an employer
    Employer(EmployerSignup),
}

#[derive(Args)]
pub struct WorkerSignup {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    /// Primary skill, e.g. "Painter" or "Tile Worker"
    #[arg(long, default_value = "Painter")]
    pub skill: String,
    /// Daily wage in rupees
    #[arg(long)]
    pub wage: u32,
    #[arg(long)]
    pub experience: Option<u32>,
    #[arg(long)]
    pub area: String,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub photo_url: Option<String>,
    #[arg(long)]
    pub id_proof_url: Option<String>,
}

#[derive(Args)]
pub struct EmployerSignup {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub area: String,
    #[arg(long)]
    pub bio: Option<String>,
}

#[derive(Subcommand)]
pub enum WorkerCommands {
    /// Show open jobs, nearby first
    #[command(alias = "ls")]
    Jobs,
    /// Flip today's availability
    Toggle,
    /// Rate an employer from 1 to 5
    Rate {
        employer_id: String,
        rating: u8,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Show or edit the worker profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        area: Option<String>,
        #[arg(long)]
        wage: Option<u32>,
        #[arg(long)]
        experience: Option<u32>,
        #[arg(long)]
        bio: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum EmployerCommands {
    /// Find approved workers
    #[command(alias = "find")]
    Workers {
        /// Skill to search for (substring match)
        #[arg(long)]
        skill: Option<String>,
        /// Area to search in (substring match)
        #[arg(long)]
        area: Option<String>,
    },
    /// Post a new job
    Post(JobPosting),
    /// List my active jobs
    #[command(alias = "ls")]
    Jobs,
    /// Delete one of my jobs
    #[command(alias = "rm")]
    DeleteJob {
        job_id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Rate a worker from 1 to 5
    Rate {
        worker_id: String,
        rating: u8,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Show or edit the employer profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        area: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
}

#[derive(Args)]
pub struct JobPosting {
    /// Kind of work, e.g. "Mason"
    #[arg(long = "type", default_value = "Helper")]
    pub job_type: String,
    /// Defaults to the employer's area
    #[arg(long)]
    pub area: Option<String>,
    #[arg(long, default_value = "1")]
    pub workers: u32,
    /// Daily payment per worker in rupees
    #[arg(long, default_value = "0")]
    pub payment: u32,
    /// Free text, e.g. "Today" or "2024-03-01"
    #[arg(long, default_value = "")]
    pub date: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Workers waiting for approval
    Pending {
        /// Filter by name or phone
        search: Option<String>,
    },
    /// Approved workers
    Active {
        /// Filter by name or phone
        search: Option<String>,
    },
    /// Suspended workers, for reinstating
    Suspended {
        /// Filter by name or phone
        search: Option<String>,
    },
    /// Rejected workers
    Rejected {
        /// Filter by name or phone
        search: Option<String>,
    },
    /// Approve a pending worker or reinstate a suspended one
    Approve {
        worker_id: String,
    },
    /// Reject a pending worker
    Reject {
        worker_id: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// Suspend an approved worker
    Suspend {
        worker_id: String,
        #[arg(long, short)]
        yes: bool,
    },
    /// Delete a worker account
    #[command(alias = "rm")]
    Delete {
        worker_id: String,
        #[arg(long, short)]
        yes: bool,
    },
    /// Add an approved worker directly
    AddWorker(AdminWorkerForm),
}

#[derive(Args)]
pub struct AdminWorkerForm {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub area: String,
    /// Comma-separated skills
    #[arg(long, value_delimiter = ',', default_value = "Helper")]
    pub skills: Vec<String>,
    #[arg(long)]
    pub wage: Option<u32>,
    #[arg(long)]
    pub experience: Option<u32>,
    #[arg(long)]
    pub photo_url: Option<String>,
}

pub use commands::*;
