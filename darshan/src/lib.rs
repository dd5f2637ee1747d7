//! Live temple darshan discovery.
//!
//! This crate is the content-discovery core behind a darshan browsing
//! experience: finding live temple broadcasts, listing a temple channel's
//! uploads, looking up single videos, and assembling the featured feed that
//! blends several curated searches into one deduplicated list.
//!
//! # Layers
//!
//! * [`youtube_api`] -- a typed, fallible client for the YouTube Data API v3
//!   endpoints this crate consumes.
//! * [`source::VideoSource`] -- the capability seam the browsing surface is
//!   written against, so everything above it is testable without a network.
//! * [`feed::DarshanFeed`] -- the fail-soft browsing surface: failures
//!   degrade to "no results" so a broken backend never breaks the page.
//! * [`directory`] -- the static curated directory of temple channels.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use darshan_live::{DarshanFeed, YouTubeClient};
//!
//! # async fn example() {
//! let yt = YouTubeClient::new("AIza...", reqwest::Client::new());
//! let feed = DarshanFeed::new(yt);
//!
//! for video in feed.featured_live_darshans(20).await {
//!     println!("{} -- {}", video.title, video.channel_title);
//! }
//! # }
//! ```

pub mod directory;
pub mod feed;
pub mod record;
pub mod source;
pub mod youtube_api;

// Re-export main types for convenience
pub use directory::{TempleChannel, temple_channels};
pub use feed::DarshanFeed;
pub use record::VideoRecord;
pub use source::VideoSource;
pub use youtube_api::YouTubeClient;
