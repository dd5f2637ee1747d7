//! The capability seam between the browsing surface and the video platform.

use crate::record::VideoRecord;
use crate::youtube_api::YouTubeClient;
use async_trait::async_trait;
use eyre::Result;

/// A source of live and recorded videos.
///
/// [`crate::feed::DarshanFeed`] talks to the platform exclusively through this
/// trait, so the fail-soft and aggregation behavior can be exercised against
/// fakes. Implementations return tagged results: a transport or API failure
/// is an `Err`, kept distinct from a legitimately empty result set.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Search currently-live videos for a free-text query, in the platform's
    /// relevance order, at most `max_results` of them.
    async fn search_live(&self, query: &str, max_results: u32) -> Result<Vec<VideoRecord>>;

    /// List a channel's uploaded videos, newest first, at most `max_results`
    /// of them. A channel whose uploads cannot be resolved is an `Err`, not
    /// an empty list.
    async fn channel_videos(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<VideoRecord>>;

    /// Look up a single video by id. `Ok(None)` means the id matched nothing.
    async fn video(&self, video_id: &str) -> Result<Option<VideoRecord>>;
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn search_live(&self, query: &str, max_results: u32) -> Result<Vec<VideoRecord>> {
        let results = YouTubeClient::search_live(self, query, max_results).await?;
        Ok(results
            .items
            .into_iter()
            .map(VideoRecord::from_live_search)
            .collect())
    }

    async fn channel_videos(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<VideoRecord>> {
        let playlist_id = self.uploads_playlist(channel_id).await?;
        let items = self.playlist_items(&playlist_id, max_results, None).await?;
        Ok(items
            .items
            .into_iter()
            .map(VideoRecord::from_upload)
            .collect())
    }

    async fn video(&self, video_id: &str) -> Result<Option<VideoRecord>> {
        let video = YouTubeClient::video(self, video_id).await?;
        Ok(video.map(VideoRecord::from_lookup))
    }
}
