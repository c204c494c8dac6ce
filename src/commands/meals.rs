//! Meal logging and history

use super::{to_json, CommandContext};
use crate::{
    cli::types::{DateRange, MealType},
    storage::{Meal, MealQuery},
    Result,
};
use chrono::NaiveDate;

/// Parameters for logging a meal; macros in grams
#[derive(Debug, Clone)]
pub struct AddMealParams {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub calories: u32,
    pub proteins: u32,
    pub carbs: u32,
    pub fats: u32,
}

pub fn handle_add_meal(ctx: &mut CommandContext, params: AddMealParams) -> Result<Meal> {
    ctx.require_user()?;

    let meal = Meal::new(
        ctx.user_id.clone(),
        params.date,
        params.meal_type,
        params.calories,
        params.proteins,
        params.carbs,
        params.fats,
    );
    ctx.db.add_meal(&meal)?;

    println!(
        "✓ Logged {} on {}: {} kcal (P {}g / C {}g / F {}g)",
        meal.meal_type, meal.meal_date, meal.calories, meal.proteins, meal.carbs, meal.fats
    );
    Ok(meal)
}

pub fn handle_list_meals(ctx: &CommandContext, query: MealQuery, as_json: bool) -> Result<()> {
    ctx.require_user()?;
    let meals = ctx.db.list_meals(&ctx.user_id, &query)?;

    if as_json {
        println!("{}", to_json(&meals)?);
    } else {
        print!("{}", render_meals(&meals, &query.range));
    }
    Ok(())
}

pub fn render_meals(meals: &[Meal], range: &DateRange) -> String {
    if meals.is_empty() {
        return if range.is_unbounded() {
            "No meals logged yet.\n".to_string()
        } else {
            format!("No meals logged for {}.\n", range)
        };
    }

    let mut out = format!(
        "{:<12} {:<10} {:>9} {:>9} {:>9} {:>9}\n",
        "Date", "Meal", "Calories", "Protein", "Carbs", "Fat"
    );
    for m in meals {
        out.push_str(&format!(
            "{:<12} {:<10} {:>9} {:>9} {:>9} {:>9}\n",
            m.meal_date.to_string(),
            m.meal_type.as_str(),
            m.calories,
            m.proteins,
            m.carbs,
            m.fats
        ));
    }
    out
}
