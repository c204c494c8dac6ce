//! Body measurement logging and history

use super::{fmt_optional, to_json, CommandContext};
use crate::{cli::types::DateRange, storage::ProgressEntry, Result};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct AddProgressParams {
    pub date: NaiveDate,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub notes: Option<String>,
}

pub fn handle_add_progress(
    ctx: &mut CommandContext,
    params: AddProgressParams,
) -> Result<ProgressEntry> {
    ctx.require_user()?;

    let entry = ProgressEntry::new(
        ctx.user_id.clone(),
        params.date,
        params.weight,
        params.body_fat,
        params.notes,
    );
    ctx.db.add_progress(&entry)?;

    println!(
        "✓ Logged progress on {}: weight {}, body fat {}",
        entry.date,
        fmt_optional(entry.weight.map(|w| format!("{:.2} kg", w))),
        fmt_optional(entry.body_fat.map(|b| format!("{:.2}%", b)))
    );
    Ok(entry)
}

pub fn handle_list_progress(ctx: &CommandContext, range: DateRange, as_json: bool) -> Result<()> {
    ctx.require_user()?;
    let entries = ctx.db.list_progress(&ctx.user_id, &range)?;

    if as_json {
        println!("{}", to_json(&entries)?);
    } else {
        print!("{}", render_progress(&entries));
    }
    Ok(())
}

pub fn render_progress(entries: &[ProgressEntry]) -> String {
    if entries.is_empty() {
        return "No progress entries yet.\n".to_string();
    }

    let mut out = format!(
        "{:<12} {:>10} {:>9}  {}\n",
        "Date", "Weight", "Body fat", "Notes"
    );
    for e in entries {
        out.push_str(&format!(
            "{:<12} {:>10} {:>9}  {}\n",
            e.date.to_string(),
            fmt_optional(e.weight.map(|w| format!("{:.2}", w))),
            fmt_optional(e.body_fat.map(|b| format!("{:.2}", b))),
            e.notes.as_deref().unwrap_or("")
        ));
    }
    out
}
