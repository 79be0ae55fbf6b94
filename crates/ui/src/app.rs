use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::console::Console;
use crate::context::AppContext;
use crate::routes::{MenuAction, render_menu};
use crate::views::{CANCELLED_MESSAGE, collect_draft, dashboard_view, list_view, submit_draft};

/// Run the interactive main menu until Exit is chosen or input ends.
///
/// Action failures are printed and the loop continues; only a broken
/// terminal stream ends it with an error.
///
/// # Errors
///
/// Returns any error raised by the console streams.
pub async fn run_menu<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        console.say(render_menu().trim_end())?;
        let Some(choice) = console.prompt("> ")? else {
            return Ok(());
        };

        let Some(action) = MenuAction::parse(&choice) else {
            console.say(&format!("Unknown choice: {}", choice.trim()))?;
            continue;
        };
        debug!(?action, "menu action");

        let result = match action {
            MenuAction::Add => match collect_draft(console)? {
                Some(draft) => submit_draft(ctx, draft).await,
                None => Ok(CANCELLED_MESSAGE.to_owned()),
            },
            MenuAction::List => list_view(ctx).await,
            MenuAction::Dashboard => dashboard_view(ctx).await,
            MenuAction::Exit => return Ok(()),
        };

        match result {
            Ok(text) => console.say(text.trim_end())?,
            Err(err) => console.say(&err.message())?,
        }
    }
}
