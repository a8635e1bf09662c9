use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::{Context, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use liftplan_app::{
    log::{self as app_log, RingBuffer},
    report::RecoveryReport,
    session::{self, OngoingWorkout},
    settings::{ENV_ALL_RECOVERED, Settings},
};
use liftplan_domain::{
    Archetype, Service, Sex, UserID, UserProfile, WeightUnit, WorkoutGenerator, WorkoutPlan,
    WorkoutService, validate_body_weight, validate_training_frequency,
};
use liftplan_storage::json_file::JsonFile;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the settings file
    #[arg(long, default_value = "liftplan.json")]
    settings: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a workout and print it as JSON
    Generate {
        #[arg(long)]
        user: UserID,
        /// lower, upper or full
        #[arg(long)]
        plan: Archetype,
        /// Treat every muscle group as fully recovered
        #[arg(long)]
        all_recovered: bool,
    },
    /// Record a finished workout
    Complete {
        #[arg(long)]
        user: UserID,
        #[arg(long)]
        plan_file: PathBuf,
    },
    /// Print the current recovery state as JSON
    Recovery {
        #[arg(long)]
        user: UserID,
    },
    /// Store the profile of a user
    Profile {
        #[arg(long)]
        user: UserID,
        #[arg(long, default_value = "other")]
        sex: String,
        #[arg(long)]
        body_weight: String,
        #[arg(long, default_value = "kg")]
        weight_unit: String,
        /// Training days per week
        #[arg(long, default_value = "3")]
        training_frequency: String,
        /// Rest between sets in seconds
        #[arg(long, default_value_t = 90)]
        rest_time: u32,
        #[arg(long, default_value_t = 48)]
        muscle_group_rest_interval: u32,
    },
    /// Start performing a generated workout
    Start {
        #[arg(long)]
        plan_file: PathBuf,
    },
    /// Log a set of the current exercise
    LogSet {
        #[arg(long)]
        user: UserID,
        #[arg(long)]
        weight: f32,
        #[arg(long)]
        reps: u32,
    },
    /// Continue with the next exercise
    Next,
    /// Finish the ongoing workout and record it
    Finish {
        #[arg(long)]
        user: UserID,
    },
    /// Print the most recent log entries
    Log,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = Settings::load(&args.settings)
        .await?
        .with_env(std::env::var(ENV_ALL_RECOVERED).ok().as_deref());

    let log_store = RingBuffer::open(settings.data_dir.join(app_log::FILE_NAME), app_log::CAPACITY)?;
    app_log::init(Arc::new(Mutex::new(log_store)), settings.log_level)
        .context("failed to initialize logger")?;

    let result = run(args.command, &settings).await;
    log::logger().flush();
    result
}

async fn run(command: Command, settings: &Settings) -> anyhow::Result<()> {
    let mut engine = settings.engine;
    if let Command::Generate {
        all_recovered: true,
        ..
    } = command
    {
        engine.all_recovered = true;
    }
    let service = Service::new(
        JsonFile::new(settings.data_dir.clone()),
        WorkoutGenerator::new(engine),
    );
    let now = Utc::now();

    match command {
        Command::Generate { user, plan, .. } => {
            let plan = service.generate_workout(user, plan, now).await?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Command::Complete { user, plan_file } => {
            let plan = read_plan(&plan_file).await?;
            let recovery = service.complete_workout(user, &plan, now).await?;
            println!("{}", serde_json::to_string_pretty(&recovery)?);
        }
        Command::Recovery { user } => {
            let recovery = service.get_recovery(user, now).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&RecoveryReport::new(&recovery))?
            );
        }
        Command::Profile {
            user,
            sex,
            body_weight,
            weight_unit,
            training_frequency,
            rest_time,
            muscle_group_rest_interval,
        } => {
            let profile = UserProfile {
                sex: Sex::from(sex.as_str()),
                body_weight: validate_body_weight(&body_weight)?,
                weight_unit: WeightUnit::from(weight_unit.as_str()),
                training_frequency: validate_training_frequency(&training_frequency)?,
                rest_time,
                muscle_group_rest_interval,
            };
            let profile = service.set_profile(user, profile).await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Command::Start { plan_file } => {
            if session::read(&settings.data_dir).await?.is_some() {
                bail!("a workout is already ongoing");
            }
            let ongoing_workout = OngoingWorkout::new(read_plan(&plan_file).await?, now);
            print_current_exercise(&ongoing_workout);
            session::write(&settings.data_dir, Some(&ongoing_workout)).await?;
        }
        Command::LogSet { user, weight, reps } => {
            let mut ongoing_workout = ongoing_workout(settings).await?;
            let profile = service.get_profile(user).await?;
            let Some(next_weight) = ongoing_workout.log_set(weight, reps, profile.rest_time, now)
            else {
                bail!("all exercises were performed");
            };
            println!(
                "next set: {next_weight:.1} {} x {reps}, rest {} s",
                profile.weight_unit, profile.rest_time
            );
            session::write(&settings.data_dir, Some(&ongoing_workout)).await?;
        }
        Command::Next => {
            let mut ongoing_workout = ongoing_workout(settings).await?;
            if ongoing_workout.next_exercise() {
                print_current_exercise(&ongoing_workout);
            } else {
                println!("all exercises performed");
            }
            session::write(&settings.data_dir, Some(&ongoing_workout)).await?;
        }
        Command::Finish { user } => {
            let plan = ongoing_workout(settings).await?.finish();
            let recovery = service.complete_workout(user, &plan, now).await?;
            session::write(&settings.data_dir, None).await?;
            println!("{}", serde_json::to_string_pretty(&recovery)?);
        }
        Command::Log => {
            for entry in app_log::entries() {
                println!("{} {:<5} {}", entry.time, entry.level, entry.message);
            }
        }
    }

    Ok(())
}

async fn read_plan(path: &Path) -> anyhow::Result<WorkoutPlan> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("invalid workout plan in {}", path.display()))
}

async fn ongoing_workout(settings: &Settings) -> anyhow::Result<OngoingWorkout> {
    session::read(&settings.data_dir)
        .await?
        .context("no workout is ongoing")
}

fn print_current_exercise(ongoing_workout: &OngoingWorkout) {
    if let Some(exercise) = ongoing_workout.current_exercise() {
        println!(
            "{}/{}: {} ({}), {} x {} at {:.1}, {}",
            ongoing_workout.exercise_idx + 1,
            ongoing_workout.plan.exercises.len(),
            exercise.exercise.name,
            exercise.exercise.muscle_group,
            exercise.sets,
            exercise.reps,
            exercise.suggested_weight,
            exercise.exercise.demo_url,
        );
    }
}
