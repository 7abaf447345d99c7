use poise::CreateReply;
use serenity::all::CreateEmbed;

use crate::bot::handler::events::HandlerResult;
use crate::bot::handler::framework::Context;
use crate::settings::parameters::ParametersInput;

/// Replaces, shows or resets this server's custom completion parameters
pub async fn parameters(ctx: Context<'_>, input: String) -> HandlerResult<()> {
    let data = ctx.data().clone();

    let result: anyhow::Result<()> = async {
        let guild_id = ctx
            .guild_id()
            .ok_or_else(|| anyhow::anyhow!("this command can only be used in a server"))?;

        let input = match ParametersInput::parse(&input) {
            Ok(input) => input,
            Err(why) => {
                // the user's mistake, not ours: reply and stop before any write
                ctx.send(CreateReply::default().content(why.to_string()).ephemeral(true))
                    .await?;

                return Ok(());
            }
        };

        let embed = CreateEmbed::default()
            .color(0xFFB347)
            .title("Custom Parameters")
            .field(
                ":warning: Warning :warning:",
                "No checks were done to see if parameters were compatible",
                false,
            );

        match input {
            ParametersInput::Reset => {
                data.guilds
                    .update(guild_id, |settings| settings.parameters = None)
                    .await?;

                log::info!("cleared custom parameters for guild {guild_id}");

                ctx.send(
                    CreateReply::default()
                        .content("Parameters reset to default")
                        .ephemeral(true),
                )
                .await?;
            }
            ParametersInput::Show => {
                let settings = data.guilds.guild(guild_id).await;
                let rendered = serde_json::to_string_pretty(&settings.parameters)?;

                ctx.send(
                    CreateReply::default()
                        .embed(embed.field("Parameters", format!("```{rendered}```"), false))
                        .ephemeral(true),
                )
                .await?;
            }
            ParametersInput::Set(parameters) => {
                let settings = data
                    .guilds
                    .update(guild_id, |settings| {
                        settings.parameters = Some(parameters);
                    })
                    .await?;
                let rendered = serde_json::to_string_pretty(&settings.parameters)?;

                log::info!("replaced custom parameters for guild {guild_id}");

                ctx.send(
                    CreateReply::default()
                        .embed(embed.field("Parameters", format!("```{rendered}```"), false))
                        .ephemeral(true),
                )
                .await?;
            }
        }

        Ok(())
    }
    .await;

    match result {
        Ok(_) => HandlerResult::ok(()),
        Err(why) => HandlerResult::err(why, ctx),
    }
}
