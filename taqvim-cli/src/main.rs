mod commands;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::store::Store;

#[derive(Parser)]
#[command(name = "taqvim")]
#[command(about = "Jalali project calendar for the certification dashboard")]
struct Cli {
    /// Path to the item file (defaults to ~/.taqvim/items.json)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a month grid
    View {
        /// Month to show (Jalali YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// First weekday of each row (0 = Saturday .. 6 = Friday)
        #[arg(long)]
        week_start: Option<u32>,
    },
    /// List the items occurring on a day
    Agenda {
        /// Jalali date (YYYY-MM-DD)
        date: String,
    },
    /// Add a new item
    Add {
        /// meeting, assignment, deadline or event
        #[arg(short, long)]
        kind: String,

        #[arg(short, long)]
        title: String,

        /// Project id to link the item to
        #[arg(long)]
        project: Option<String>,

        /// Person id responsible for the item
        #[arg(long)]
        person: Option<String>,

        /// Workflow stage label
        #[arg(long)]
        stage: Option<String>,

        /// Jalali date/time for a point item (YYYY-MM-DD[THH:MM])
        #[arg(long, conflicts_with_all = ["start", "end"])]
        date: Option<String>,

        /// Range start (Jalali YYYY-MM-DD[THH:MM])
        #[arg(long, requires = "end")]
        start: Option<String>,

        /// Range end (Jalali YYYY-MM-DD[THH:MM])
        #[arg(long, requires = "start")]
        end: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },
    /// Edit an existing item
    Edit {
        id: String,

        #[arg(short, long)]
        kind: Option<String>,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        project: Option<String>,

        #[arg(long)]
        person: Option<String>,

        #[arg(long)]
        stage: Option<String>,

        /// Move the item to a point occurrence at this Jalali date/time
        #[arg(long, conflicts_with_all = ["start", "end"])]
        date: Option<String>,

        #[arg(long, requires = "end")]
        start: Option<String>,

        #[arg(long, requires = "start")]
        end: Option<String>,

        #[arg(long)]
        note: Option<String>,

        /// Convert a point item into a one-day range
        #[arg(long, conflicts_with = "to_point")]
        to_range: bool,

        /// Collapse a range item to a point at its start
        #[arg(long)]
        to_point: bool,
    },
    /// Remove an item
    Remove { id: String },
    /// Show the nearest scheduled item per project
    Upcoming {
        /// Only this project id
        #[arg(short, long)]
        project: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = Store::load(cli.file)?;

    match cli.command {
        Commands::View { month, week_start } => {
            commands::view::run(&store, month.as_deref(), week_start)
        }
        Commands::Agenda { date } => commands::agenda::run(&store, &date),
        Commands::Add {
            kind,
            title,
            project,
            person,
            stage,
            date,
            start,
            end,
            note,
        } => commands::add::run(
            store,
            commands::add::Args {
                kind,
                title,
                project,
                person,
                stage,
                date,
                start,
                end,
                note,
            },
        ),
        Commands::Edit {
            id,
            kind,
            title,
            project,
            person,
            stage,
            date,
            start,
            end,
            note,
            to_range,
            to_point,
        } => commands::edit::run(
            store,
            &id,
            commands::edit::Args {
                kind,
                title,
                project,
                person,
                stage,
                date,
                start,
                end,
                note,
                to_range,
                to_point,
            },
        ),
        Commands::Remove { id } => commands::remove::run(store, &id),
        Commands::Upcoming { project } => commands::upcoming::run(&store, project.as_deref()),
    }
}
