use chrono::{Duration, Utc};
use dailyco::{Client, MeetingTokenProperties, RoomProperties};
use log::{error, info};
use service::{config::Config, logging::Logger};

#[tokio::main]
async fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
        std::process::exit(1);
    }

    let Some(token) = config.dailyco_token() else {
        error!("No Daily.co API token provided, set DAILYCO_TOKEN or --dailyco-token");
        std::process::exit(1);
    };

    let client = match Client::with_base_url(token, config.dailyco_base_url()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build Daily.co client: {e}");
            std::process::exit(1);
        }
    };

    info!("Creating room against [{}]...", client.base_url());

    let room = match client
        .create_room("", config.room_privacy(), Some(&RoomProperties::default()))
        .await
    {
        Ok(room) => room,
        Err(e) => {
            error!("Failed to create room: {e}");
            std::process::exit(1);
        }
    };
    info!("Room id: {}", room.id);
    info!("Room name: {}", room.name);
    info!("Room created at: {}", room.created_at);

    let expires_at = Utc::now() + Duration::seconds(config.meeting_token_ttl_secs);
    let properties = MeetingTokenProperties::for_room(&room.name, expires_at);
    match client.create_meeting_token(Some(&properties)).await {
        Ok(response) => info!("Meeting token: {}", response.token),
        Err(e) => error!("Failed to create meeting token: {e}"),
    }

    match client.delete_room(&room.name).await {
        Ok(deleted) => info!("Room {} deleted: {deleted}", room.name),
        Err(e) => {
            error!("Failed to delete room {}: {e}", room.name);
            std::process::exit(1);
        }
    }
}
