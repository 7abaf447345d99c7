use super::{Context, Error};
use crate::bot::handler::{
    Handler,
    events::{HandlerResult, commands},
};
use crate::bot::handler::events::commands::filters::FilterList;

/// Manage the regex filters applied to the bot's responses
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    subcommands("block", "unblock", "remove", "unremove", "ignore"),
    subcommand_required
)]
pub(super) async fn filters(_: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Adds a pattern that blocks a response entirely when it matches
#[poise::command(slash_command, prefix_command, guild_only)]
async fn block(
    ctx: Context<'_>,
    #[description = "Regex pattern"]
    #[rest]
    pattern: String,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::filters::add(ctx, FilterList::Block, pattern).await {
        Handler::on_error(why).await;
    }

    Ok(())
}

/// Removes a pattern from the block list
#[poise::command(slash_command, prefix_command, guild_only)]
async fn unblock(
    ctx: Context<'_>,
    #[description = "Regex pattern"]
    #[rest]
    pattern: String,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) =
        commands::filters::remove(ctx, FilterList::Block, pattern).await
    {
        Handler::on_error(why).await;
    }

    Ok(())
}

/// Adds a pattern whose matches are stripped out of responses
#[poise::command(slash_command, prefix_command, guild_only)]
async fn remove(
    ctx: Context<'_>,
    #[description = "Regex pattern"]
    #[rest]
    pattern: String,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::filters::add(ctx, FilterList::Remove, pattern).await
    {
        Handler::on_error(why).await;
    }

    Ok(())
}

/// Removes a pattern from the remove list
#[poise::command(slash_command, prefix_command, guild_only)]
async fn unremove(
    ctx: Context<'_>,
    #[description = "Regex pattern"]
    #[rest]
    pattern: String,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) =
        commands::filters::remove(ctx, FilterList::Remove, pattern).await
    {
        Handler::on_error(why).await;
    }

    Ok(())
}

/// Sets or clears the regex that makes the bot ignore matching messages
#[poise::command(slash_command, prefix_command, guild_only)]
async fn ignore(
    ctx: Context<'_>,
    #[description = "Regex pattern (omit to unset)"] pattern: Option<String>,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::filters::ignore(ctx, pattern).await {
        Handler::on_error(why).await;
    }

    Ok(())
}
