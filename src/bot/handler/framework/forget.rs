use super::{Context, Error};
use crate::bot::handler::{
    Handler,
    events::{HandlerResult, commands},
};

/// Forces the bot to forget the conversation up to this point
#[poise::command(slash_command, prefix_command, guild_only, aliases("lobotomize"))]
pub(super) async fn forget(ctx: Context<'_>) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::forget::forget(ctx).await {
        Handler::on_error(why).await;
    }

    Ok(())
}

/// Toggles whether everyone on the server may use the forget command
#[poise::command(slash_command, prefix_command, guild_only)]
pub(super) async fn public_forget(
    ctx: Context<'_>,
    #[description = "Whether anyone may use the forget command"] enabled: bool,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::forget::public_forget(ctx, enabled).await {
        Handler::on_error(why).await;
    }

    Ok(())
}
