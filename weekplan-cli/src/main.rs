mod render;
mod repl;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use weekplan::logging::set_log_level;
use weekplan::plan::{PlanSource, builtin_names};

#[derive(Parser, Debug)]
#[command(version, about = "Weekplan - weekly training plan viewer", long_about = None)]
struct Args {
    /// Plan document to load (defaults to $WEEKPLAN_PLAN)
    #[arg(short, long, global = true)]
    plan: Option<PathBuf>,
    /// Name of a built-in plan
    #[arg(short, long, global = true, conflicts_with = "plan")]
    builtin: Option<String>,
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive command loop (default)
    Interactive,
    /// Print the full plan for one day (1-7)
    Day { day: usize },
    /// Print total weekly volume per muscle group
    Volume {
        #[arg(long)]
        json: bool,
    },
    /// Print the schedule with per-day totals
    Schema {
        #[arg(long)]
        json: bool,
    },
    /// Print every day in full
    Week,
    /// List built-in plans
    Plans,
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    if !set_log_level(&args.log_level) {
        bail!("unknown log level '{}'", args.log_level);
    }

    let source = PlanSource::select(args.plan, args.builtin);
    let load = || {
        source
            .load()
            .with_context(|| format!("failed to load {}", source))
    };

    match args.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let routine = load()?;
            println!("{} - type 'help' for commands", routine.name());
            repl::run(&routine, io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::Day { day } => {
            let routine = load()?;
            let slot = routine.day(day)?;
            print!("{}", render::day_detail(&slot));
        }
        Commands::Volume { json } => {
            let volume = load()?.volume_by_group();
            if json {
                println!("{}", serde_json::to_string_pretty(&volume)?);
            } else {
                print!("{}", render::volume(&volume));
            }
        }
        Commands::Schema { json } => {
            let routine = load()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&routine.schedule_summary())?
                );
            } else {
                print!("{}", render::schema(&routine));
            }
        }
        Commands::Week => print!("{}", render::week(&load()?)),
        Commands::Plans => {
            for name in builtin_names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
