//! Server-Sent Events: broadcaster and per-connection streams

mod broadcaster;
mod stream;

pub use broadcaster::SseBroadcaster;
pub use stream::artist_event_stream;
