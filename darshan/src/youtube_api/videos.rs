//! YouTube Videos API types and functionality.

use crate::youtube_api::types::{PageInfo, Thumbnails};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `videos.list` API call.
///
/// Contains a list of [`Video`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#videoListResponse`.
    pub kind: String,
    /// A list of videos that match the request criteria.
    pub items: VecDeque<Video>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// A `video` resource represents a YouTube video.
///
/// This crate requests the `snippet` and `liveStreamingDetails` parts; the
/// latter is only present for videos that are or were live broadcasts.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    /// Basic details about the video.
    pub snippet: VideoSnippet,
    /// Metadata about a live broadcast.
    ///
    /// Absent for plain uploads that were never streamed.
    #[serde(rename = "liveStreamingDetails")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

impl Video {
    /// Whether the broadcast behind this video has actually gone on air.
    ///
    /// True iff the live streaming metadata carries an actual start time.
    /// Scheduled-but-unstarted broadcasts and plain uploads are not live.
    pub fn is_live(&self) -> bool {
        self.live_streaming_details
            .as_ref()
            .is_some_and(|details| details.actual_start_time.is_some())
    }
}

/// Basic details about a video, such as its title and description.
///
/// This is a subset of the full snippet data available from the YouTube API,
/// containing only the fields currently needed by this implementation.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoSnippet {
    /// The video's title.
    pub title: String,
    /// The video's description.
    pub description: String,
    /// The title of the channel the video belongs to.
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    /// The date and time that the video was published.
    ///
    /// The value is specified in ISO 8601 format.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    /// Thumbnail images associated with the video.
    pub thumbnails: Thumbnails,
}

/// Metadata about a live video broadcast.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#liveStreamingDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct LiveStreamingDetails {
    /// The time that the broadcast actually started.
    ///
    /// Not available until the broadcast begins.
    #[serde(rename = "actualStartTime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_start_time: Option<Timestamp>,
    /// The time that the broadcast actually ended.
    ///
    /// Not available until the broadcast is over.
    #[serde(rename = "actualEndTime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_end_time: Option<Timestamp>,
    /// The time that the broadcast is scheduled to begin.
    #[serde(rename = "scheduledStartTime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_start_time: Option<Timestamp>,
    /// The number of viewers currently watching the broadcast.
    ///
    /// Only present while the broadcast has live viewers.
    #[serde(rename = "concurrentViewers")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrent_viewers: Option<String>,
}
