//! Room creation and deletion.

use crate::client::{decode, Client};
use crate::error::Error;
use chrono::{DateTime, Utc};
use log::*;
use reqwest::Method;
use serde::{Deserialize, Serialize};

const ROOMS_FRAGMENT: &str = "/rooms";

/// Request to create a new room
#[derive(Debug, Serialize)]
struct CreateRoomRequest<'a> {
    name: &'a str,
    privacy: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<&'a RoomProperties>,
}

/// Room configuration.
///
/// Every field is optional: an unset field is left out of the request so the
/// server applies its default, which is not the same as sending `0` or `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomProperties {
    /// Unix time (seconds) before which nobody may join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Unix time (seconds) after which nobody may join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autojoin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_knocking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_screenshare: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_chat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_video_off: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_audio_off: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_only_broadcast: Option<bool>,
    /// Recording mode, e.g. `"cloud"` or `"local"`. Values are defined by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_recording: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eject_at_room_exp: Option<bool>,
    /// Seconds a participant may stay in the room before being ejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eject_after_elapsed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// Room as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub api_created: bool,
    pub privacy: String,
    pub url: String,
    /// Creation time as sent by the API, normally RFC 3339.
    pub created_at: String,
    /// Effective configuration of the room.
    pub config: Option<RoomProperties>,
}

impl RoomResponse {
    /// Parse `created_at`, or `None` if the API sent something other than an
    /// RFC 3339 timestamp.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|created_at| created_at.with_timezone(&Utc))
    }
}

/// Response from deleting a room
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeleteRoomResponse {
    deleted: bool,
    name: String,
}

impl Client {
    /// Create a new room.
    ///
    /// An empty `name` lets the API pick one. `privacy` is passed through as
    /// given (`"public"` or `"private"`); the API validates it. `None`
    /// properties are left out of the request entirely.
    ///
    /// An `UnexpectedResponse` error means the API accepted the request but
    /// returned a room this client could not decode; the room may exist.
    pub async fn create_room(
        &self,
        name: &str,
        privacy: &str,
        properties: Option<&RoomProperties>,
    ) -> Result<RoomResponse, Error> {
        let request = CreateRoomRequest {
            name,
            privacy,
            properties,
        };

        debug!("Creating Daily.co room: {:?}", name);

        let raw_response = self
            .call(ROOMS_FRAGMENT, Method::POST, Some(&request))
            .await?;
        let room: RoomResponse = decode(&raw_response)?;

        info!("Created Daily.co room {} with ID: {}", room.name, room.id);
        Ok(room)
    }

    /// Delete a room by name and return whether the API reports it deleted.
    ///
    /// The name is substituted into the path as is, so it must not need
    /// escaping. Path joining drops empty, `.` and `..` segments rather than
    /// resolving them, so `"a/../b"` targets `/rooms/a/b`.
    pub async fn delete_room(&self, room_name: &str) -> Result<bool, Error> {
        let fragment = format!("{}/{}", ROOMS_FRAGMENT, room_name);

        let raw_response = self
            .call::<()>(&fragment, Method::DELETE, None)
            .await?;
        let response: DeleteRoomResponse = decode(&raw_response)?;

        info!(
            "Deleted Daily.co room {}: {}",
            response.name, response.deleted
        );
        Ok(response.deleted)
    }
}
