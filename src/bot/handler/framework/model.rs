use super::{Context, Error};
use crate::bot::handler::{
    Handler,
    events::{HandlerResult, commands},
};

/// Changes the chat completion model for this server
#[poise::command(slash_command, prefix_command, guild_only)]
pub(super) async fn model(
    ctx: Context<'_>,
    #[description = "Name of the completion model"] model: String,
) -> Result<(), Error> {
    if let HandlerResult::Err(why) = commands::model::model(ctx, model).await {
        Handler::on_error(why).await;
    }

    Ok(())
}
