use super::{Context, Error};
use crate::bot::handler::{
    Handler,
    events::{HandlerResult, commands},
};

/// Returns the current settings for this server
#[poise::command(slash_command, prefix_command, guild_only)]
pub(super) async fn settings(ctx: Context<'_>) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::settings::settings(ctx).await {
        Handler::on_error(why).await;
    }

    Ok(())
}
