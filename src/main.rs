use std::path::PathBuf;

use config::store::AiUserConfig;

mod bot;
mod config;
mod settings;
mod utils;

#[tokio::main]
async fn main() {
    utils::log::Logger::init(None);

    let config = AiUserConfig::read(PathBuf::from("config.toml")).unwrap();

    let bot = bot::AiUserBot::new(config).await.unwrap();
    bot.run().await;
}
