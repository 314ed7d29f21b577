//! # dailyco
//!
//! Client for the Daily.co video-room REST API:
//! - Room creation and deletion
//! - Meeting token minting
//!
//! Every operation is a single bearer-authenticated JSON round trip through
//! [`Client`]. Responses are checked for the API's `{error, info}` envelope
//! before they are decoded into the operation's typed response.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dailyco::{Client, MeetingTokenProperties, RoomProperties};
//!
//! let client = Client::new("api_key_here")?;
//! let room = client.create_room("", "private", Some(&RoomProperties::default())).await?;
//! let token = client
//!     .create_meeting_token(Some(&MeetingTokenProperties::for_room(&room.name, expires_at)))
//!     .await?;
//! let deleted = client.delete_room(&room.name).await?;
//! ```

pub mod client;
pub mod error;
pub mod meeting_tokens;
pub mod rooms;

// Re-export commonly used types
pub use client::{Client, DAILYCO_API_ROOT};
pub use error::{Error, ErrorKind};
pub use meeting_tokens::{MeetingTokenProperties, MeetingTokenResponse};
pub use rooms::{RoomProperties, RoomResponse};
