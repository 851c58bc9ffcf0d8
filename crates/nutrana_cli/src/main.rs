//! CLI inspection entry point.
//!
//! # Responsibility
//! - Print dashboard summaries, meal plans and lookup values from core.
//! - Keep output deterministic for quick local sanity checks.

use clap::{Parser, Subcommand};
use nutrana_core::{
    demo_meal_plan, icon_for_key, icon_for_kind, init_logging, main_menu, name_for_key,
    name_for_kind, AuthChannel, AuthEvent, DashboardSession, DashboardSnapshot, DisplayDefaults,
    GateOutcome, LogNavigator, MockSnapshotProvider, Principal, SessionGate, SnapshotProvider,
    StaticSnapshotProvider, DEFAULT_INGREDIENT_PREVIEW,
};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nutrana")]
#[command(about = "Nutrana core inspection tool", long_about = None)]
struct Cli {
    /// Absolute directory for rotated log files. Logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[arg(long, global = true, default_value_t = nutrana_core::default_log_level().to_string())]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and print the dashboard summary.
    Summary {
        #[arg(long, default_value = "local-user")]
        uid: String,
        #[arg(long)]
        name: Option<String>,
        /// JSON dashboard snapshot; demo data when omitted.
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Print today's and upcoming meals.
    MealPlan {
        /// Register this meal id before printing.
        #[arg(long)]
        register: Option<u32>,
    },
    /// Resolve icon and display name for a meal type key.
    Lookup { meal_type: String },
    /// List dashboard menu routes.
    Routes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(cli.log_level.as_str(), log_dir)?;
    }

    match cli.command {
        Commands::Summary {
            uid,
            name,
            snapshot,
        } => {
            let principal = Principal {
                uid,
                display_name: name,
                avatar_url: None,
            };
            match snapshot {
                Some(path) => print_summary(
                    StaticSnapshotProvider::new(load_snapshot(&path)?),
                    principal,
                ),
                None => print_summary(MockSnapshotProvider, principal),
            }
        }
        Commands::MealPlan { register } => print_meal_plan(register),
        Commands::Lookup { meal_type } => {
            println!(
                "{} {}",
                icon_for_key(meal_type.as_str()),
                name_for_key(meal_type.as_str())
            );
            Ok(())
        }
        Commands::Routes => {
            for item in main_menu() {
                println!("{:<20} {}", item.route.path(), item.label);
            }
            Ok(())
        }
    }
}

fn load_snapshot(path: &Path) -> Result<DashboardSnapshot, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
    let snapshot = serde_json::from_str(raw.as_str())
        .map_err(|err| format!("invalid snapshot `{}`: {err}", path.display()))?;
    Ok(snapshot)
}

fn print_summary<P: SnapshotProvider + 'static>(
    provider: P,
    principal: Principal,
) -> Result<(), Box<dyn Error>> {
    let channel = AuthChannel::new();
    let gate = SessionGate::new(provider, LogNavigator, DisplayDefaults::from_env());
    let session = DashboardSession::start(gate, &channel);
    channel.publish(AuthEvent::SignedIn(principal));

    let outcome = session.last_outcome();
    let view = session.view();
    session.teardown();

    match (outcome, view) {
        (Some(GateOutcome::Failed(err)), _) => Err(err.into()),
        (_, Some(view)) => {
            let nutrition = &view.snapshot.nutrition;
            println!("Bem-vindo, {}!", view.identity.display_name);
            println!(
                "calories  {}/{} kcal  {}%",
                nutrition.calories_consumed, nutrition.calories_goal, view.report.calories_percent
            );
            println!(
                "water     {}/{} L  {}%",
                nutrition.water_consumed_liters,
                nutrition.water_goal_liters,
                view.report.water_percent
            );
            let challenge = &view.snapshot.weekly_challenge;
            println!(
                "challenge {} {}/{}  {}%  ({} dias restantes)",
                challenge.title,
                challenge.progress,
                challenge.goal,
                view.report.challenge_percent,
                challenge.days_left
            );
            for meal in &view.snapshot.meals {
                println!(
                    "  {} {:<14} {:<24} {}",
                    icon_for_kind(&meal.meal_type),
                    name_for_kind(&meal.meal_type),
                    meal.name,
                    meal.calories_label()
                );
            }
            println!("{}", view.report.motivational_message);
            Ok(())
        }
        _ => Err("dashboard view was not published".into()),
    }
}

fn print_meal_plan(register: Option<u32>) -> Result<(), Box<dyn Error>> {
    let mut plan = demo_meal_plan();
    if let Some(id) = register {
        plan.register(id)?;
    }

    for (title, meals) in [("Hoje", &plan.today), ("Próximos", &plan.upcoming)] {
        println!("{title}");
        for meal in meals {
            let preview = meal.ingredient_preview(DEFAULT_INGREDIENT_PREVIEW);
            let overflow = if preview.overflow > 0 {
                format!(" +{}", preview.overflow)
            } else {
                String::new()
            };
            println!(
                "  [{}] {} {} {} {} kcal  {}{}{}",
                meal.id,
                meal.time,
                icon_for_kind(&meal.meal_type),
                meal.name,
                meal.calories,
                preview.shown.join(", "),
                overflow,
                if meal.registered { "  ✓" } else { "" }
            );
        }
    }
    println!("registered: {} kcal", plan.registered_calories());
    Ok(())
}
