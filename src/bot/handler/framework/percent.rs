use super::{Context, Error};
use crate::bot::handler::{
    Handler,
    events::{HandlerResult, commands},
};

/// Changes the bot's response chance for this server
#[poise::command(slash_command, prefix_command, guild_only)]
pub(super) async fn percent(
    ctx: Context<'_>,
    #[description = "Chance of replying, 0 to 100"] percent: f64,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::percent::percent(ctx, percent).await {
        Handler::on_error(why).await;
    }

    Ok(())
}
