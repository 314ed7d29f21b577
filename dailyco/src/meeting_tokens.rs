//! Meeting token minting.

use crate::client::{decode, Client};
use crate::error::Error;
use chrono::{DateTime, Utc};
use log::*;
use reqwest::Method;
use serde::{Deserialize, Serialize};

const MEETING_TOKENS_FRAGMENT: &str = "/meeting-tokens";

/// Request to create a meeting token
#[derive(Debug, Serialize)]
struct CreateMeetingTokenRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<&'a MeetingTokenProperties>,
}

/// Meeting token configuration.
///
/// As with [`RoomProperties`](crate::RoomProperties), unset fields are left out
/// of the request rather than sent as zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingTokenProperties {
    /// Unix time (seconds) before which the token is not valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Unix time (seconds) at which the token expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Room the token is valid for. Unset means any room in the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
    /// Display name of the participant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_screenshare: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_video_off: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_audio_off: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_recording: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cloud_recording: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_tab_on_exit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eject_at_token_exp: Option<bool>,
    /// Elapsed time before ejection, in the string form the API accepts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eject_after_elapsed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl MeetingTokenProperties {
    /// Properties for a token that only grants access to `room_name` and
    /// expires at `expires_at`.
    pub fn for_room(room_name: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            room_name: Some(room_name.into()),
            exp: Some(expires_at.timestamp()),
            ..Default::default()
        }
    }
}

/// Response from creating a meeting token
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MeetingTokenResponse {
    pub token: String,
}

impl Client {
    /// Create a meeting token.
    ///
    /// `None` properties send an empty object and the API mints a token with
    /// its defaults.
    pub async fn create_meeting_token(
        &self,
        properties: Option<&MeetingTokenProperties>,
    ) -> Result<MeetingTokenResponse, Error> {
        let request = CreateMeetingTokenRequest { properties };

        debug!(
            "Creating Daily.co meeting token for room: {:?}",
            properties.and_then(|p| p.room_name.as_deref())
        );

        let raw_response = self
            .call(MEETING_TOKENS_FRAGMENT, Method::POST, Some(&request))
            .await?;
        let response: MeetingTokenResponse = decode(&raw_response)?;

        info!("Created Daily.co meeting token");
        Ok(response)
    }
}
