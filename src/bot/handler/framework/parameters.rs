use super::{Context, Error};
use crate::bot::handler::{
    Handler,
    events::{HandlerResult, commands},
};

/// Set custom completion parameters using a JSON code block
///
/// Use `reset` to go back to defaults and `show` to display the current
/// parameters. Whatever object is stored gets forwarded to the completion
/// endpoint as-is.
#[poise::command(slash_command, prefix_command, guild_only)]
pub(super) async fn parameters(
    ctx: Context<'_>,
    #[description = "reset | clear | show | list | a ```json``` code block"]
    #[rest]
    input: String,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::parameters::parameters(ctx, input).await {
        Handler::on_error(why).await;
    }

    Ok(())
}
