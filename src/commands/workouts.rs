//! Workout logging and history

use super::{to_json, CommandContext};
use crate::{
    cli::types::{DateRange, WorkoutType},
    storage::{Workout, WorkoutQuery},
    Result,
};
use chrono::NaiveDate;

/// Parameters for logging a workout
#[derive(Debug, Clone)]
pub struct AddWorkoutParams {
    pub date: NaiveDate,
    pub workout_type: WorkoutType,
    pub duration_minutes: u32,
    pub calories_burned: u32,
}

pub fn handle_add_workout(ctx: &mut CommandContext, params: AddWorkoutParams) -> Result<Workout> {
    ctx.require_user()?;

    let workout = Workout::new(
        ctx.user_id.clone(),
        params.date,
        params.workout_type,
        params.duration_minutes,
        params.calories_burned,
    );
    ctx.db.add_workout(&workout)?;

    println!(
        "✓ Logged {} workout on {}: {} min, {} kcal",
        workout.workout_type,
        workout.workout_date,
        workout.duration_minutes,
        workout.calories_burned
    );
    Ok(workout)
}

pub fn handle_list_workouts(
    ctx: &CommandContext,
    query: WorkoutQuery,
    as_json: bool,
) -> Result<()> {
    ctx.require_user()?;
    let workouts = ctx.db.list_workouts(&ctx.user_id, &query)?;
    tracing::debug!(count = workouts.len(), range = %query.range, "workouts listed");

    if as_json {
        println!("{}", to_json(&workouts)?);
    } else {
        print!("{}", render_workouts(&workouts, &query.range));
    }
    Ok(())
}

pub fn render_workouts(workouts: &[Workout], range: &DateRange) -> String {
    if workouts.is_empty() {
        return if range.is_unbounded() {
            "No workouts logged yet.\n".to_string()
        } else {
            format!("No workouts logged for {}.\n", range)
        };
    }

    let mut out = format!(
        "{:<12} {:<10} {:>10} {:>10}\n",
        "Date", "Type", "Minutes", "Calories"
    );
    for w in workouts {
        out.push_str(&format!(
            "{:<12} {:<10} {:>10} {:>10}\n",
            w.workout_date.to_string(),
            w.workout_type.as_str(),
            w.duration_minutes,
            w.calories_burned
        ));
    }
    out
}
