//! YouTube PlaylistItems API types.

use crate::youtube_api::types::{PageInfo, Thumbnails};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `playlistItems.list` API call.
///
/// Contains a list of [`PlaylistItem`] resources belonging to the requested
/// playlist, along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#playlistItemListResponse`.
    pub kind: String,
    /// A list of playlist items that match the request criteria.
    pub items: VecDeque<PlaylistItem>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `playlistItem` resource identifies another resource, such as a video,
/// that is included in a playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// The ID that YouTube uses to uniquely identify the playlist item.
    ///
    /// Note that this is distinct from the id of the video the item points at,
    /// which lives in the snippet's resource id.
    pub id: String,
    /// Basic details about the playlist item.
    pub snippet: PlaylistItemSnippet,
}

/// Basic details about a playlist item, such as its title and the resource it
/// points at.
///
/// This is a subset of the full snippet data available from the YouTube API,
/// containing only the fields currently needed by this implementation.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemSnippet {
    /// The item's title.
    pub title: String,
    /// The item's description.
    pub description: String,
    /// The title of the channel the playlist belongs to.
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    /// The date and time that the item was added to the playlist.
    ///
    /// The value is specified in ISO 8601 format.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    /// Thumbnail images associated with the playlist item.
    ///
    /// Empty for videos that have been deleted or made private.
    #[serde(default)]
    pub thumbnails: Thumbnails,
    /// The resource the playlist item refers to.
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}

/// The id object of the resource a playlist item points at.
///
/// Uploads playlists only ever contain videos, so the video id is modeled as
/// required.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceId {
    /// The kind of the referred resource.
    ///
    /// The value will be `youtube#video`.
    pub kind: String,
    /// The ID that YouTube uses to uniquely identify the referred video.
    #[serde(rename = "videoId")]
    pub video_id: String,
}
