use poise::CreateReply;
use serenity::all::CreateEmbed;

use crate::bot::handler::events::HandlerResult;
use crate::bot::handler::framework::Context;

/// Changes the bot's response chance for this server
pub async fn percent(ctx: Context<'_>, percent: f64) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("this command can only be used in a server"))?;

        if !(0.0..=100.0).contains(&percent) {
            ctx.send(
                CreateReply::default()
                    .content(format!(
                        "Invalid value \"{percent}\", please provide a percentage between 0 and 100"
                    ))
                    .ephemeral(true),
            )
            .await?;

            return Ok(());
        }

        data.guilds
            .update(guild_id, |settings| settings.reply_percent = percent / 100.0)
            .await?;

        let embed = CreateEmbed::default()
            .color(0x77DD77)
            .title("Chance that the bot will reply on this server is now:")
            .description(format!("{percent:.2}%"));

        ctx.send(CreateReply::default().embed(embed).ephemeral(true))
            .await?;

        Ok(())
    }
    .await;

    match result {
        Ok(_) => HandlerResult::ok(()),
        Err(why) => HandlerResult::err(why, ctx),
    }
}
