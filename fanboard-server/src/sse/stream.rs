//! Per-connection SSE stream
//!
//! Protocol, per connection: subscribe to the broadcaster, fetch a full
//! snapshot enriched for the opening identity, emit it as an INITIAL_DATA
//! frame, then forward ARTIST_UPDATED frames until the client goes away.
//! Subscribing before the snapshot fetch means a mutation that lands during
//! the fetch is still delivered, just after the snapshot.

use crate::{db, AppState};
use axum::response::sse::{Event, KeepAlive, Sse};
use fanboard_common::events::SseMessage;
use futures::stream::Stream;
use futures::StreamExt;
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{info, warn};

/// Build the SSE response for one push connection
pub fn artist_event_stream(
    state: AppState,
    user_id: String,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!(
        "New SSE client connected, total clients: {}",
        state.broadcaster.client_count() + 1
    );

    let rx = state.broadcaster.subscribe();

    let stream = async_stream::stream! {
        match db::list_artists_with_likes(&state.db, &user_id).await {
            Ok(artists) => {
                let snapshot = SseMessage::InitialData { artists };
                match Event::default().json_data(&snapshot) {
                    Ok(event) => yield Ok(event),
                    Err(e) => {
                        warn!("Failed to encode SSE snapshot: {}", e);
                        return;
                    }
                }
            }
            Err(e) => {
                // Terminal for this connection only; ending the stream
                // drops the receiver and deregisters it
                warn!("Failed to build SSE snapshot: {}", e);
                return;
            }
        }

        let mut updates = BroadcastStream::new(rx);
        while let Some(item) = updates.next().await {
            match item {
                Ok(message) => match Event::default().json_data(&message) {
                    Ok(event) => yield Ok(event),
                    Err(e) => warn!("Failed to encode SSE event: {}", e),
                },
                Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                    // Slow client: it simply misses these events
                    warn!("SSE client lagged, dropped {} events", skipped);
                }
            }
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
