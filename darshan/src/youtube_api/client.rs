//! Core YouTube API client functionality.

use crate::youtube_api::{
    channels::ChannelListResponse,
    playlists::PlaylistItemListResponse,
    search::SearchListResponse,
    videos::{Video, VideoListResponse},
};
use eyre::Context;
use tracing::instrument;

/// Base URL for the YouTube Data API v3.
const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Client for the public, API-key-authenticated surface of the YouTube Data
/// API v3.
///
/// The client holds the API key and a shared [`reqwest::Client`]. Cloning it
/// is cheap and clones share the underlying connection pool.
///
/// All operations here are read-only and need no OAuth scopes; the key is
/// sent as the `key` query parameter on every request. Request timeouts are
/// whatever the injected HTTP client is configured with -- none by default.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// API key sent with every request.
    api_key: String,
    /// HTTP client for API requests.
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a new YouTube API client with the provided API key and HTTP client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - A YouTube Data API v3 key
    /// * `client` - Shared HTTP client for making API requests
    pub fn new(api_key: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            api_key: api_key.into(),
            client,
        }
    }

    /// Makes a GET request to the YouTube API with common error handling.
    ///
    /// This method consolidates the shared logic across all YouTube API
    /// requests: query parameters, the `key` parameter, and status code
    /// validation. Non-success responses are surfaced as errors carrying the
    /// response body, which is where the API reports quota and validity
    /// problems.
    ///
    /// # Returns
    ///
    /// The raw [`reqwest::Response`] for endpoint-specific JSON parsing.
    async fn make_request(
        &self,
        url: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .query(query_params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("send GET request to YouTube API: {url}"))?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(eyre::eyre!(
                "YouTube API request failed with status {}: {}",
                status_code,
                error_text
            ));
        }

        Ok(response)
    }

    /// Searches for currently-live videos matching a free-text query.
    ///
    /// Uses the `search.list` API with `type=video` and `eventType=live`, so
    /// every returned item refers to a broadcast that is on air at request
    /// time. Results come back in the API's relevance order; no local
    /// re-ranking is applied.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search query
    /// * `max_results` - Maximum number of results to return (the API accepts 0-50)
    ///
    /// # Returns
    ///
    /// A [`SearchListResponse`] containing at most `max_results` matches.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    pub async fn search_live(
        &self,
        query: &str,
        max_results: u32,
    ) -> eyre::Result<SearchListResponse> {
        let url = format!("{API_BASE_URL}/search");
        let max_results = max_results.to_string();
        let query_params = [
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("eventType", "live"),
            ("maxResults", max_results.as_str()),
            ("relevanceLanguage", "en"),
        ];

        let response = self.make_request(&url, &query_params).await?;

        let results: SearchListResponse = response
            .json()
            .await
            .context("parse YouTube search API response as JSON")?;

        tracing::debug!(
            query,
            returned_items = results.items.len(),
            "searched live videos"
        );

        Ok(results)
    }

    /// Resolves the id of a channel's canonical uploads playlist.
    ///
    /// Uses the `channels.list` API with `part=contentDetails`. Every listable
    /// channel has exactly one uploads playlist containing all of its public
    /// videos; listing that playlist is the supported way to enumerate a
    /// channel's uploads.
    ///
    /// # Arguments
    ///
    /// * `channel_id` - The id of the channel to resolve
    ///
    /// # Returns
    ///
    /// The uploads playlist id. An unknown channel id, or a channel without an
    /// uploads playlist, is an error.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self), ret)]
    pub async fn uploads_playlist(&self, channel_id: &str) -> eyre::Result<String> {
        let url = format!("{API_BASE_URL}/channels");
        let query_params = [("part", "contentDetails"), ("id", channel_id)];

        let response = self.make_request(&url, &query_params).await?;

        let channels: ChannelListResponse = response
            .json()
            .await
            .context("parse YouTube channels API response as JSON")?;

        channels
            .into_uploads_playlist()
            .with_context(|| format!("resolve uploads playlist for channel {channel_id}"))
    }

    /// Lists one page of items from a playlist.
    ///
    /// Uses the `playlistItems.list` API with `part=snippet`. Items come back
    /// in playlist order, which for uploads playlists is reverse chronological.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - The id of the playlist to list
    /// * `max_results` - Maximum number of items to return (the API accepts 0-50)
    /// * `page_token` - Optional page token for pagination
    ///
    /// # Returns
    ///
    /// A [`PlaylistItemListResponse`] whose `next_page_token` continues the
    /// listing when present.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    pub async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<PlaylistItemListResponse> {
        let url = format!("{API_BASE_URL}/playlistItems");
        let max_results = max_results.to_string();
        let mut query_params = vec![
            ("part", "snippet"),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            query_params.push(("pageToken", token));
        }

        let response = self.make_request(&url, &query_params).await?;

        let items: PlaylistItemListResponse = response
            .json()
            .await
            .context("parse YouTube playlistItems API response as JSON")?;

        tracing::debug!(
            playlist_id,
            returned_items = items.items.len(),
            has_next_page = items.next_page_token.is_some(),
            "listed playlist items"
        );

        Ok(items)
    }

    /// Fetches full metadata for a single video by its id.
    ///
    /// Uses the `videos.list` API with `part=snippet,liveStreamingDetails`.
    /// The live streaming details are what distinguish an on-air broadcast
    /// from a plain upload; see [`Video::is_live`].
    ///
    /// # Arguments
    ///
    /// * `video_id` - The id of the video to look up
    ///
    /// # Returns
    ///
    /// `Ok(Some(video))` when the video exists, `Ok(None)` when the id matches
    /// nothing. Transport and API failures are errors, kept distinct from the
    /// not-found case.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self))]
    pub async fn video(&self, video_id: &str) -> eyre::Result<Option<Video>> {
        let url = format!("{API_BASE_URL}/videos");
        let query_params = [("part", "snippet,liveStreamingDetails"), ("id", video_id)];

        let response = self.make_request(&url, &query_params).await?;

        let videos: VideoListResponse = response
            .json()
            .await
            .context("parse YouTube videos API response as JSON")?;

        tracing::debug!(
            video_id,
            returned_items = videos.items.len(),
            "fetched video metadata"
        );

        Ok(videos.items.into_iter().next())
    }
}
