//! User setup and display

use super::{fmt_optional, to_json, CommandContext};
use crate::{storage::User, Result};

/// Parameters for creating the acting user
#[derive(Debug, Clone)]
pub struct InitParams {
    pub username: String,
    pub email: Option<String>,
    pub goals: Option<String>,
    pub start_weight: Option<f64>,
}

/// Password hash stored for users created here; there is no login, so nothing can match it
pub const LOCKED_PASSWORD_HASH: &str = "!";

/// Create the acting user unless it already exists.
///
/// Returns `true` when a new user row was written.
pub fn handle_init(ctx: &mut CommandContext, params: InitParams) -> Result<bool> {
    if let Some(existing) = ctx.db.get_user(&ctx.user_id)? {
        println!(
            "User {} ({}) already exists; nothing to do.",
            existing.user_id, existing.username
        );
        return Ok(false);
    }

    let user = User {
        user_id: ctx.user_id.clone(),
        username: params.username,
        password_hash: LOCKED_PASSWORD_HASH.to_string(),
        email: params.email,
        goals: params.goals,
        start_weight: params.start_weight,
        current_weight: params.start_weight,
    };
    ctx.db.add_user(&user)?;

    println!("✓ Created user {} ({})", user.user_id, user.username);
    Ok(true)
}

pub fn handle_show_user(ctx: &CommandContext, as_json: bool) -> Result<()> {
    let user = ctx.require_user()?;
    if as_json {
        println!("{}", to_json(&user)?);
    } else {
        print!("{}", render_user(&user));
    }
    Ok(())
}

pub fn render_user(user: &User) -> String {
    format!(
        "User ID:        {}\n\
         Username:       {}\n\
         Email:          {}\n\
         Goals:          {}\n\
         Start weight:   {}\n\
         Current weight: {}\n",
        user.user_id,
        user.username,
        fmt_optional(user.email.as_deref()),
        fmt_optional(user.goals.as_deref()),
        fmt_optional(user.start_weight.map(|w| format!("{:.2} kg", w))),
        fmt_optional(user.current_weight.map(|w| format!("{:.2} kg", w))),
    )
}
