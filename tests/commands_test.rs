//! Integration tests for command handlers

use chrono::NaiveDate;
use clap::Parser;
use fitness_tracker::{
    cli::{Commands, FitnessCli, MealCmd, ProgressCmd},
    commands::{
        dashboard::build_dashboard,
        meals::{handle_add_meal, AddMealParams},
        progress::{handle_add_progress, AddProgressParams},
        resolve_user_id,
        users::{handle_init, InitParams},
        workouts::{handle_add_workout, AddWorkoutParams},
        CommandContext,
    },
    storage::*,
    DateRange, FitnessError, MealType, UserId, WorkoutType, DEFAULT_GOAL_WEIGHT, DEFAULT_USER_ID,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn init_context(user: &str) -> CommandContext {
    let db = FitnessDatabase::new_in_memory().unwrap();
    let mut ctx = CommandContext::new(db, UserId::new(user));
    let created = handle_init(
        &mut ctx,
        InitParams {
            username: format!("user-{}", user),
            email: None,
            goals: None,
            start_weight: None,
        },
    )
    .unwrap();
    assert!(created);
    ctx
}

#[test]
fn test_constants() {
    assert_eq!(DEFAULT_USER_ID, "12345");
    assert_eq!(DEFAULT_GOAL_WEIGHT, 75.0);
}

#[test]
fn test_resolve_user_id_from_option() {
    assert_eq!(resolve_user_id(Some(UserId::new("7"))), UserId::new("7"));
}

#[test]
fn test_parse_meal_add_case_insensitive_type() {
    let cli = FitnessCli::try_parse_from([
        "fitness-tracker",
        "meal",
        "add",
        "--type",
        "breakfast",
        "--calories",
        "450",
        "--proteins",
        "25",
    ])
    .unwrap();

    match cli.command {
        Commands::Meal {
            cmd:
                MealCmd::Add {
                    meal_type,
                    calories,
                    proteins,
                    carbs,
                    ..
                },
        } => {
            assert_eq!(meal_type, MealType::Breakfast);
            assert_eq!(calories, 450);
            assert_eq!(proteins, 25);
            assert_eq!(carbs, 0);
        }
        other => panic!("Expected meal add, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_bad_input() {
    // Unknown workout type
    assert!(FitnessCli::try_parse_from([
        "fitness-tracker",
        "workout",
        "add",
        "--type",
        "yoga",
        "--duration",
        "30",
        "--calories",
        "100",
    ])
    .is_err());

    // Negative calories
    assert!(FitnessCli::try_parse_from([
        "fitness-tracker",
        "meal",
        "add",
        "--type",
        "Lunch",
        "--calories",
        "-5",
    ])
    .is_err());

    // Malformed date
    assert!(
        FitnessCli::try_parse_from(["fitness-tracker", "progress", "list", "--from", "01/02/2025"])
            .is_err()
    );
}

#[test]
fn test_parse_global_db_after_subcommand() {
    let cli = FitnessCli::try_parse_from([
        "fitness-tracker",
        "progress",
        "list",
        "--db",
        "/tmp/fit.db",
        "--to",
        "2025-03-01",
    ])
    .unwrap();

    assert_eq!(cli.db.as_deref(), Some(std::path::Path::new("/tmp/fit.db")));
    match cli.command {
        Commands::Progress {
            cmd: ProgressCmd::List { dates, json },
        } => {
            assert_eq!(dates.from, None);
            assert_eq!(dates.to, Some(date(2025, 3, 1)));
            assert!(!json);
        }
        other => panic!("Expected progress list, got {:?}", other),
    }
}

#[test]
fn test_handlers_keep_users_apart() {
    let mut ctx = init_context("alice");
    // A second user in the same database
    ctx.db
        .add_user(&User {
            user_id: UserId::new("bob"),
            username: "bob".to_string(),
            password_hash: "!".to_string(),
            email: None,
            goals: None,
            start_weight: None,
            current_weight: None,
        })
        .unwrap();

    handle_add_workout(
        &mut ctx,
        AddWorkoutParams {
            date: date(2025, 2, 3),
            workout_type: WorkoutType::Cardio,
            duration_minutes: 45,
            calories_burned: 400,
        },
    )
    .unwrap();
    handle_add_meal(
        &mut ctx,
        AddMealParams {
            date: date(2025, 2, 3),
            meal_type: MealType::Dinner,
            calories: 900,
            proteins: 40,
            carbs: 100,
            fats: 30,
        },
    )
    .unwrap();

    let bob = UserId::new("bob");
    assert!(ctx.db.list_workouts(&bob, &WorkoutQuery::default()).unwrap().is_empty());
    assert!(ctx.db.list_meals(&bob, &MealQuery::default()).unwrap().is_empty());

    let balance = ctx.db.calorie_balance(&ctx.user_id, &DateRange::all()).unwrap();
    assert_eq!(balance.balance(), 400 - 900);
}

#[test]
fn test_progress_updates_dashboard_goal() {
    let mut ctx = init_context("12345");
    for (day, weight) in [(1, 82.0), (8, 80.5), (15, 79.0)] {
        handle_add_progress(
            &mut ctx,
            AddProgressParams {
                date: date(2025, 3, day),
                weight: Some(weight),
                body_fat: None,
                notes: None,
            },
        )
        .unwrap();
    }
    // A measurement without weight does not count as the latest weight
    handle_add_progress(
        &mut ctx,
        AddProgressParams {
            date: date(2025, 3, 16),
            weight: None,
            body_fat: Some(20.0),
            notes: Some("scale broken".to_string()),
        },
    )
    .unwrap();

    let summary = build_dashboard(&ctx.db, &ctx.user_id, 75.0, date(2025, 3, 17)).unwrap();
    let to_go = summary.weight_to_goal.unwrap();
    assert!((to_go - 4.0).abs() < 1e-9);
    assert_eq!(summary.weight_trend.len(), 3);
    assert_eq!(summary.weight_trend[0].date, date(2025, 3, 1));
    assert_eq!(summary.week, DateRange::between(date(2025, 3, 17), date(2025, 3, 17)).unwrap());
}

#[test]
fn test_handlers_require_initialized_user() {
    let db = FitnessDatabase::new_in_memory().unwrap();
    let mut ctx = CommandContext::new(db, UserId::new("ghost"));
    let result = handle_add_meal(
        &mut ctx,
        AddMealParams {
            date: date(2025, 1, 1),
            meal_type: MealType::Snack,
            calories: 120,
            proteins: 0,
            carbs: 0,
            fats: 0,
        },
    );
    match result {
        Err(FitnessError::UserNotFound { user_id }) => assert_eq!(user_id, "ghost"),
        other => panic!("Expected UserNotFound, got {:?}", other.map(|m| m.calories)),
    }
}
