use serenity::all::ChannelId;

use super::{Context, Error};
use crate::bot::handler::{
    Handler,
    events::{HandlerResult, commands},
};

/// Manage which channels the bot is allowed to reply in
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    subcommands("add", "remove"),
    subcommand_required
)]
pub(super) async fn whitelist(_: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Adds a channel to the whitelist
#[poise::command(slash_command, prefix_command, guild_only)]
async fn add(
    ctx: Context<'_>,
    #[description = "A mention of the channel"] channel: ChannelId,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::whitelist::add(ctx, channel).await {
        Handler::on_error(why).await;
    }

    Ok(())
}

/// Removes a channel from the whitelist
#[poise::command(slash_command, prefix_command, guild_only)]
async fn remove(
    ctx: Context<'_>,
    #[description = "A mention of the channel"] channel: ChannelId,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::whitelist::remove(ctx, channel).await {
        Handler::on_error(why).await;
    }

    Ok(())
}
