//! YouTube Data API v3 client.
//!
//! This module provides a typed client for the read-only, API-key
//! authenticated endpoints this crate consumes: live-event search, channel
//! resolution, playlist listing, and single-video lookup.
//!
//! # Layering
//!
//! Everything here is the *fallible* layer: operations return
//! [`eyre::Result`] and keep transport failures, API errors, and malformed
//! responses distinct from legitimate empty results. The fail-soft collapse
//! to "no results" that the browsing surface presents happens one level up,
//! in [`crate::feed`], never here.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use darshan_live::youtube_api::YouTubeClient;
//!
//! # async fn example() -> eyre::Result<()> {
//! let yt = YouTubeClient::new("AIza...", reqwest::Client::new());
//!
//! let results = yt.search_live("ganga aarti varanasi live", 10).await?;
//! for result in &results.items {
//!     println!("{} ({})", result.snippet.title, result.id.video_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod playlists;
pub mod search;
pub mod types;
pub mod videos;

// Re-export main types for convenience
pub use client::YouTubeClient;
pub use types::{PageInfo, Thumbnail, Thumbnails};

// Re-export commonly used types from each module
pub use channels::{Channel, ChannelContentDetails, ChannelListResponse, RelatedPlaylists};

pub use playlists::{PlaylistItem, PlaylistItemListResponse, PlaylistItemSnippet, ResourceId};

pub use search::{SearchListResponse, SearchResult, SearchResultId, SearchSnippet};

pub use videos::{LiveStreamingDetails, Video, VideoListResponse, VideoSnippet};
