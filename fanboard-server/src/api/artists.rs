//! Artist listing and like/unlike handlers
//!
//! `GET /api/artists` serves either the plain JSON list or, when the
//! client asks for `text/event-stream`, the long-lived push channel.
//! POST/DELETE toggle the caller's like and fan the updated record out to
//! every open push connection before returning it.

use crate::api::{ApiError, Identity};
use crate::{db, sse, AppState};
use axum::{
    extract::State,
    http::{header::ACCEPT, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use fanboard_common::db::models::ArtistWithLikes;
use fanboard_common::events::SseMessage;
use fanboard_common::Error;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Success envelope, `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Body of POST/DELETE `/api/artists`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub artist_id: i64,
}

/// Direction of a like toggle
#[derive(Debug, Clone, Copy)]
enum Direction {
    Like,
    Unlike,
}

/// GET /api/artists
///
/// With `Accept: text/event-stream` this upgrades to the push channel;
/// otherwise it returns the enriched artist list for the caller.
pub async fn list_artists(
    State(state): State<AppState>,
    identity: Identity,
    headers: HeaderMap,
) -> Response {
    if wants_event_stream(&headers) {
        return sse::artist_event_stream(state, identity.0).into_response();
    }

    match db::list_artists_with_likes(&state.db, &identity.0).await {
        Ok(artists) => Json(DataResponse { data: artists }).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// POST /api/artists - like an artist for the caller's identity
pub async fn like_artist(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<DataResponse<ArtistWithLikes>>, ApiError> {
    let artist = toggle_like(&state, &identity.0, request.artist_id, Direction::Like).await?;
    Ok(Json(DataResponse { data: artist }))
}

/// DELETE /api/artists - remove the caller's like
pub async fn unlike_artist(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<DataResponse<ArtistWithLikes>>, ApiError> {
    let artist = toggle_like(&state, &identity.0, request.artist_id, Direction::Unlike).await?;
    Ok(Json(DataResponse { data: artist }))
}

/// Apply a like toggle, recompute the derived record, and broadcast it.
///
/// The duplicate-like race is settled by the store's uniqueness constraint;
/// the loser surfaces as Conflict.
async fn toggle_like(
    state: &AppState,
    user_id: &str,
    artist_id: i64,
    direction: Direction,
) -> Result<ArtistWithLikes, ApiError> {
    if db::get_artist_with_likes(&state.db, artist_id, user_id)
        .await?
        .is_none()
    {
        return Err(Error::NotFound("Artist not found".to_string()).into());
    }

    match direction {
        Direction::Like => {
            db::insert_like(&state.db, user_id, artist_id).await?;
            info!("User {} liked artist {}", user_id, artist_id);
        }
        Direction::Unlike => {
            if !db::delete_like(&state.db, user_id, artist_id).await? {
                return Err(
                    Error::Conflict("Haven't liked this artist yet".to_string()).into(),
                );
            }
            info!("User {} unliked artist {}", user_id, artist_id);
        }
    }

    let artist = db::get_artist_with_likes(&state.db, artist_id, user_id)
        .await?
        .ok_or_else(|| Error::NotFound("Artist not found".to_string()))?;

    state.broadcaster.broadcast_lossy(SseMessage::ArtistUpdated {
        artist: artist.clone(),
    });

    Ok(artist)
}

/// Did the client ask for the push channel?
fn wants_event_stream(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "text/event-stream")
        .unwrap_or(false)
}
