//! YouTube Search API types.

use crate::youtube_api::types::{PageInfo, Thumbnails};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `search.list` API call.
///
/// Contains a list of [`SearchResult`] resources that match the request
/// criteria, along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#searchListResponse`.
    pub kind: String,
    /// A list of results that match the search criteria.
    pub items: VecDeque<SearchResult>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A search result contains information about a YouTube video that matches
/// the search parameters.
///
/// Unlike other resource types, a search result does not carry persistent
/// data of its own; it points at the underlying resource via its id.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    /// Identifies the matched resource.
    pub id: SearchResultId,
    /// Basic details about the matched resource.
    pub snippet: SearchSnippet,
}

/// The id object of a search result.
///
/// This crate always searches with `type=video`, so the video id is modeled
/// as required; a result without one fails deserialization and surfaces as a
/// malformed-response error.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultId {
    /// The type of the matched resource.
    ///
    /// The value will be `youtube#video` for video searches.
    pub kind: String,
    /// The ID that YouTube uses to uniquely identify the matched video.
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// Basic details about a search result, such as its title and description.
///
/// This is a subset of the full snippet data available from the YouTube API,
/// containing only the fields currently needed by this implementation.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchSnippet {
    /// The title of the matched video.
    pub title: String,
    /// A description of the matched video.
    pub description: String,
    /// The title of the channel that published the matched video.
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    /// The creation date and time of the matched video.
    ///
    /// The value is specified in ISO 8601 format.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    /// Thumbnail images associated with the matched video.
    pub thumbnails: Thumbnails,
}
