use etna_client::prelude::*;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting whoami example");

    // Reads ETNA_LOGIN / ETNA_PASSWORD from the environment or a .env file
    let client = Client::from_env()?;
    let identity = client.login_from_config().await?;
    info!("✓ Logged in as {}", identity.login);

    let me = client.user_info(None).await?;
    info!("Profile: {}", me);
    if let (true, closed_at) = me.is_closed() {
        warn!("Account closed since {:?}", closed_at);
    }

    for promo in client.user_promo(None).await? {
        info!(
            "Promotion {} ({} → {}), wall: {}",
            promo.target_name, promo.learning_start, promo.learning_end, promo.wall_name
        );
    }

    let walls = client.walls_list().await?;
    info!("Walls: {:?}", walls);
    if let Some(wall) = walls.first() {
        let messages = client.wall_messages(wall, 0, 5).await?;
        info!("Last conversations of {}: {}", wall, serde_json::to_string_pretty(&messages)?);
    }

    let trophies = client.user_trophy(None).await?;
    info!("{} trophies", trophies.len());
    for trophy in &trophies {
        info!("{} [{}] on {}: {}", trophy.name, trophy.kind, trophy.achieved_at, trophy.image_url);
    }

    let avatar = client.user_avatar(None).await?;
    info!("Avatar: {} bytes", avatar.len());

    client.logout().await?;
    info!("✓ Logged out");
    Ok(())
}
