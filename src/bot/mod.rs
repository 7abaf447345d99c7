use anyhow::Result;
use handler::Handler;
use serenity::{Client, all::GatewayIntents};

use crate::config::store::AiUserConfig;
pub use handler::Data;

mod handler;

pub struct AiUserBot {
    client: Client,
}

impl AiUserBot {
    pub async fn new(config: AiUserConfig) -> Result<Self> {
        let builder =
            serenity::Client::builder(&config.discord.token, GatewayIntents::non_privileged());

        let (framework, data) = handler::framework::framework(config.storage.guilds.clone())?;
        let handler = Handler::new(data);

        let client = builder.event_handler(handler).framework(framework).await?;

        Ok(Self { client })
    }

    pub async fn run(self) {
        let AiUserBot { mut client } = self;

        if let Err(why) = client.start().await {
            log::error!("Client error: {why:?}");
        }
    }
}
