use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::text;
use crate::profile::load_viewer_profile;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let profile = load_viewer_profile(&ctx.store, &ctx.keys, &ctx.options);

    let lines = match &profile {
        Some(profile) => text::profile_lines(profile),
        None => vec![no_profile_line(&ctx.keys.user)],
    };
    ctx.output.emit(&lines, &profile)
}

fn no_profile_line(user_key: &str) -> String {
    format!("no profile under `{user_key}`")
}
