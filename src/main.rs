mod data;
mod deck;
mod models;
mod rewind;
mod services;
mod session;
mod swipe;
mod toast;
mod tracker;
mod tui;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};

use models::Session;
use services::{JobCatalog, MockSwipeService, RandomSimulation};
use session::{FileSessionStore, SessionStore};
use swipe::{SwipeConfig, SwipeEngine};

#[derive(Parser)]
#[command(name = "jobswipe")]
#[command(about = "Tinder-style job discovery - swipe, apply, and track applications")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive swipe deck
    Swipe,

    /// List recommended jobs
    Jobs,

    /// Show job details
    Show {
        /// Job ID
        id: String,
    },

    /// List tracked applications
    Applications,

    /// Log in and persist a session
    Login {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Identity provider label
        #[arg(short, long, default_value = "demo")]
        provider: String,
    },

    /// Clear the persisted session
    Logout,

    /// Show the logged-in user
    Whoami,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = FileSessionStore::open()?;

    match cli.command {
        Commands::Swipe => {
            if let Some(session) = store.load()? {
                println!("Welcome back, {}!", session.name);
            }
            if !store.welcome_seen() {
                println!("Welcome to JobSwipe! Swipe right to apply, left to pass.");
                store.mark_welcome_seen()?;
            }

            println!("Loading jobs...");
            let catalog = JobCatalog::new();
            let response = catalog.recommended_jobs()?;
            let jobs = response
                .data
                .ok_or_else(|| anyhow!("Job catalog returned no data"))?;

            let engine = SwipeEngine::new(
                jobs,
                data::seeded_applications(),
                Box::new(MockSwipeService::new()),
                Box::new(RandomSimulation::new()),
                SwipeConfig::default(),
            );
            tui::run_swipe(engine)?;
        }

        Commands::Jobs => {
            println!("Loading jobs...");
            let catalog = JobCatalog::new();
            let response = catalog.recommended_jobs()?;
            let jobs = response.data.unwrap_or_default();
            if jobs.is_empty() {
                println!("No jobs found.");
            } else {
                println!(
                    "{:<4} {:<30} {:<22} {:>7} {:>14}",
                    "ID", "TITLE", "COMPANY", "MATCH", "PAY RANGE"
                );
                println!("{}", "-".repeat(82));
                for job in jobs {
                    let pay = match (job.salary_min, job.salary_max) {
                        (Some(min), Some(max)) => format!("{}-{}k", min / 1000, max / 1000),
                        (Some(min), None) => format!("{}k+", min / 1000),
                        (None, Some(max)) => format!("<{}k", max / 1000),
                        (None, None) => "-".to_string(),
                    };
                    let score = job
                        .match_score
                        .map(|s| format!("{}%", s))
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{:<4} {:<30} {:<22} {:>7} {:>14}",
                        job.id,
                        truncate(&job.title, 28),
                        truncate(&job.company.name, 20),
                        score,
                        pay
                    );
                }
            }
        }

        Commands::Show { id } => {
            let catalog = JobCatalog::new();
            let response = catalog
                .job_by_id(&id)
                .with_context(|| format!("Failed to look up job {}", id))?;
            let job = response
                .data
                .ok_or_else(|| anyhow!("Job {} not found", id))?;

            println!("{}", job.title);
            println!("at {}", job.company.name);
            if let Some(location) = &job.location {
                println!("Location: {}{}", location, if job.remote { " (Remote)" } else { "" });
            } else if job.remote {
                println!("Location: Remote");
            }
            println!("Type: {}", job.employment_type);
            match (job.salary_min, job.salary_max) {
                (Some(min), Some(max)) => println!("Pay: {} {} - {}", job.currency, min, max),
                (Some(min), None) => println!("Pay: {} {}+", job.currency, min),
                (None, Some(max)) => println!("Pay: up to {} {}", job.currency, max),
                (None, None) => {}
            }
            if let Some(score) = job.match_score {
                println!("Match: {}%", score);
            }
            if let Some(deadline) = &job.deadline {
                println!("Apply by: {}", deadline);
            }
            if !job.skills.is_empty() {
                println!("Skills: {}", job.skills.join(", "));
            }
            println!("\n{}", textwrap::fill(&job.description, 78));
            if !job.requirements.is_empty() {
                println!("\nRequirements:");
                for req in &job.requirements {
                    println!("  - {}", req);
                }
            }
        }

        Commands::Applications => {
            let records = data::seeded_applications();
            if records.is_empty() {
                println!("No applications yet. Start swiping right!");
            } else {
                println!(
                    "{:<6} {:<26} {:<16} {:<10} {:>6} {:>8}",
                    "ID", "TITLE", "COMPANY", "STATUS", "MATCH", "TASKS"
                );
                println!("{}", "-".repeat(78));
                for record in &records {
                    println!(
                        "{:<6} {:<26} {:<16} {:<10} {:>5}% {:>5}/{}",
                        record.id,
                        truncate(&record.title, 24),
                        truncate(&record.company, 14),
                        record.status.as_str(),
                        record.match_strength,
                        record.skill_gap.completed,
                        record.skill_gap.total
                    );
                }

                let tracker = tracker::ApplicationTracker::new(records);
                let stats = tracker.stats();
                println!(
                    "\nPending: {}   Interviews: {}   Avg match: {}%",
                    stats.pending, stats.interviews, stats.avg_match
                );
            }
        }

        Commands::Login {
            name,
            email,
            provider,
        } => {
            let session = Session {
                id: format!("{}", chrono::Utc::now().timestamp_millis()),
                name: name.clone(),
                email,
                provider,
                has_completed_onboarding: true,
            };
            store.save(&session)?;
            println!("Logged in as {} (session: {})", name, store.path().display());
        }

        Commands::Logout => {
            store.clear()?;
            println!("Logged out.");
        }

        Commands::Whoami => match store.load()? {
            Some(session) => {
                println!("{} <{}>", session.name, session.email);
                println!("Provider: {}", session.provider);
                println!(
                    "Onboarding: {}",
                    if session.has_completed_onboarding {
                        "complete"
                    } else {
                        "pending"
                    }
                );
            }
            None => println!("Not logged in."),
        },
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
