//! Dashboard: all-time totals plus this week's calorie balance and macros.
//!
//! Workout and meal totals cover every record. Calorie balance and macro
//! breakdown cover Monday of the current week through today.

use super::{to_json, CommandContext};
use crate::{
    cli::types::DateRange,
    storage::{
        CalorieBalance, FitnessDatabase, MacroBreakdown, MealMetrics, WeightPoint, WorkoutMetrics,
    },
    Result, UserId,
};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub workouts: WorkoutMetrics,
    pub meals: MealMetrics,
    pub goal_weight: f64,
    pub weight_to_goal: Option<f64>,
    pub week: DateRange,
    pub calorie_balance: CalorieBalance,
    pub net_calories: i64,
    pub weekly_macros: Option<MacroBreakdown>,
    pub weight_trend: Vec<WeightPoint>,
}

/// Gather every dashboard figure for `owner` as of `today`
pub fn build_dashboard(
    db: &FitnessDatabase,
    owner: &UserId,
    goal_weight: f64,
    today: NaiveDate,
) -> Result<DashboardSummary> {
    let all_time = DateRange::all();
    let week = DateRange::week_to_date(today);
    let calorie_balance = db.calorie_balance(owner, &week)?;

    Ok(DashboardSummary {
        workouts: db.workout_metrics(owner, &all_time)?,
        meals: db.meal_metrics(owner, &all_time)?,
        goal_weight,
        weight_to_goal: db.weight_to_goal(owner, goal_weight)?,
        week,
        calorie_balance,
        net_calories: calorie_balance.balance(),
        weekly_macros: db.macro_breakdown(owner, &week)?,
        weight_trend: db.weight_trend(owner, &all_time)?,
    })
}

pub fn handle_dashboard(
    ctx: &CommandContext,
    goal_weight: f64,
    today: NaiveDate,
    as_json: bool,
) -> Result<()> {
    ctx.require_user()?;
    let summary = build_dashboard(&ctx.db, &ctx.user_id, goal_weight, today)?;
    tracing::debug!(week = %summary.week, net = summary.net_calories, "dashboard built");

    if as_json {
        println!("{}", to_json(&summary)?);
    } else {
        print!("{}", render_dashboard(&summary));
    }
    Ok(())
}

pub fn render_dashboard(summary: &DashboardSummary) -> String {
    let mut out = String::new();

    out.push_str("== Workout Summary ==\n");
    out.push_str(&format!(
        "Total workouts:        {}\n",
        summary.workouts.total_workouts
    ));
    out.push_str(&format!(
        "Total duration (min):  {}\n",
        summary.workouts.total_duration_minutes
    ));
    if let Some(avg) = summary.workouts.average_duration_minutes {
        out.push_str(&format!("Average duration (min): {:.1}\n", avg));
    }
    out.push_str(&format!(
        "Total calories burned: {}\n",
        summary.workouts.total_calories_burned
    ));

    out.push_str("\n== Nutrition Summary ==\n");
    out.push_str(&format!(
        "Total meals logged:      {}\n",
        summary.meals.total_meals
    ));
    out.push_str(&format!(
        "Total calories consumed: {}\n",
        summary.meals.total_calories
    ));
    if let Some(avg) = summary.meals.average_calories {
        out.push_str(&format!("Average per meal:        {:.1}\n", avg));
    }

    out.push_str("\n== Goals & Progress ==\n");
    match summary.weight_to_goal {
        Some(to_go) => out.push_str(&format!(
            "Weight to goal ({:.2} kg): {:.2} kg to go!\n",
            summary.goal_weight, to_go
        )),
        None => out.push_str("No weight recorded yet.\n"),
    }

    out.push_str(&format!("\n== Calorie Balance ({}) ==\n", summary.week));
    out.push_str(&format!(
        "Consumed: {}  Burned: {}  Net: {}\n",
        summary.calorie_balance.consumed, summary.calorie_balance.burned, summary.net_calories
    ));

    out.push_str("\n== Macro Breakdown (this week) ==\n");
    match summary.weekly_macros {
        Some(macros) => {
            let (p, c, f) = macros.shares();
            out.push_str(&format!(
                "Proteins: {}g ({:.0}%)  Carbs: {}g ({:.0}%)  Fats: {}g ({:.0}%)\n",
                macros.proteins,
                p * 100.0,
                macros.carbs,
                c * 100.0,
                macros.fats,
                f * 100.0
            ));
        }
        None => out.push_str("No meal data for macro breakdown.\n"),
    }

    out.push_str("\n== Weight Trend ==\n");
    if summary.weight_trend.is_empty() {
        out.push_str("No progress data to display weight trend.\n");
    } else {
        for point in &summary.weight_trend {
            out.push_str(&format!("{}  {:>7.2} kg\n", point.date, point.weight));
        }
    }

    out
}
