//! SSE message types
//!
//! Wire format on the push channel, one JSON object per `data:` frame:
//! `{"type":"INITIAL_DATA","artists":[...]}` once at connection open, then
//! `{"type":"ARTIST_UPDATED","artist":{...}}` after each successful mutation.

use crate::db::models::ArtistWithLikes;
use serde::{Deserialize, Serialize};

/// Change notification pushed to SSE clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SseMessage {
    /// Full snapshot, sent once per connection at open time, enriched for
    /// the identity that opened the connection
    #[serde(rename = "INITIAL_DATA")]
    InitialData { artists: Vec<ArtistWithLikes> },

    /// Incremental update, fanned out to every open connection after a
    /// like/unlike completes
    #[serde(rename = "ARTIST_UPDATED")]
    ArtistUpdated { artist: ArtistWithLikes },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_artist() -> ArtistWithLikes {
        let now = Utc::now();
        ArtistWithLikes {
            id: 7,
            name: "The Weeknd".to_string(),
            image: "/weeknd.jpeg".to_string(),
            created_at: now,
            updated_at: now,
            likes: 4,
            has_liked: false,
        }
    }

    #[test]
    fn initial_data_tag() {
        let msg = SseMessage::InitialData {
            artists: vec![sample_artist()],
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "INITIAL_DATA");
        assert_eq!(json["artists"][0]["id"], 7);
    }

    #[test]
    fn artist_updated_tag() {
        let msg = SseMessage::ArtistUpdated {
            artist: sample_artist(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "ARTIST_UPDATED");
        assert_eq!(json["artist"]["likes"], 4);
        assert_eq!(json["artist"]["hasLiked"], false);
    }
}
