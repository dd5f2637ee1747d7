//! Normalized video records handed to display layers.

use crate::youtube_api::Thumbnails;
use crate::youtube_api::playlists::PlaylistItem;
use crate::youtube_api::search::SearchResult;
use crate::youtube_api::videos::Video;
use jiff::Timestamp;
use serde::Serialize;

/// A video normalized for display, independent of which API endpoint it came
/// from.
///
/// Records are constructed fresh on every fetch and never persisted; `id` is
/// only guaranteed unique within a single fetch's output. Serializes with the
/// camelCase field names downstream consumers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// The source platform's video id.
    pub id: String,
    /// The video's title.
    pub title: String,
    /// The video's description.
    pub description: String,
    /// Preview image URL; the high-resolution variant when the source offers
    /// one, the default variant otherwise. Empty when the source offers
    /// neither.
    pub thumbnail_url: String,
    /// Playback URL for embedding. Carries an autoplay parameter iff the
    /// record is live.
    pub embed_url: String,
    /// Display name of the channel the video belongs to.
    pub channel_title: String,
    /// When the video was published. Carried for display only, never compared.
    pub published_at: Timestamp,
    /// Whether the video is a broadcast that is on air.
    pub is_live: bool,
}

impl VideoRecord {
    /// Normalizes a live-event search result.
    ///
    /// Results only reach this constructor through an `eventType=live`
    /// search, so the record is unconditionally flagged live.
    pub fn from_live_search(result: SearchResult) -> Self {
        let embed_url = embed_url(&result.id.video_id, true);
        Self {
            id: result.id.video_id,
            title: result.snippet.title,
            description: result.snippet.description,
            thumbnail_url: preferred_or_empty(&result.snippet.thumbnails),
            embed_url,
            channel_title: result.snippet.channel_title,
            published_at: result.snippet.published_at,
            is_live: true,
        }
    }

    /// Normalizes an uploads-playlist item as a non-live video.
    pub fn from_upload(item: PlaylistItem) -> Self {
        let embed_url = embed_url(&item.snippet.resource_id.video_id, false);
        Self {
            id: item.snippet.resource_id.video_id,
            title: item.snippet.title,
            description: item.snippet.description,
            thumbnail_url: preferred_or_empty(&item.snippet.thumbnails),
            embed_url,
            channel_title: item.snippet.channel_title,
            published_at: item.snippet.published_at,
            is_live: false,
        }
    }

    /// Normalizes a directly-looked-up video, deriving liveness from its live
    /// streaming metadata (see [`Video::is_live`]).
    pub fn from_lookup(video: Video) -> Self {
        let is_live = video.is_live();
        let embed_url = embed_url(&video.id, is_live);
        Self {
            id: video.id,
            title: video.snippet.title,
            description: video.snippet.description,
            thumbnail_url: preferred_or_empty(&video.snippet.thumbnails),
            embed_url,
            channel_title: video.snippet.channel_title,
            published_at: video.snippet.published_at,
            is_live,
        }
    }
}

/// Embed playback URL for a video id, with autoplay for live feeds.
fn embed_url(video_id: &str, live: bool) -> String {
    if live {
        format!("https://www.youtube.com/embed/{video_id}?autoplay=1")
    } else {
        format!("https://www.youtube.com/embed/{video_id}")
    }
}

fn preferred_or_empty(thumbnails: &Thumbnails) -> String {
    thumbnails.preferred().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embed_url_carries_autoplay_only_when_live() {
        assert_eq!(
            embed_url("dMH0bHeiRNg", true),
            "https://www.youtube.com/embed/dMH0bHeiRNg?autoplay=1"
        );
        assert_eq!(
            embed_url("dMH0bHeiRNg", false),
            "https://www.youtube.com/embed/dMH0bHeiRNg"
        );
    }

    #[test]
    fn search_results_are_flagged_live_and_prefer_high_res_thumbnails() {
        let json = r#"
        {
            "kind": "youtube#searchResult",
            "id": { "kind": "youtube#video", "videoId": "jNQXAC9IVRw" },
            "snippet": {
                "publishedAt": "2024-03-01T04:30:00Z",
                "title": "Ganga Aarti LIVE",
                "description": "Evening aarti streamed daily.",
                "thumbnails": {
                    "default": { "url": "https://i.ytimg.com/vi/jNQXAC9IVRw/default.jpg", "width": 120, "height": 90 },
                    "high": { "url": "https://i.ytimg.com/vi/jNQXAC9IVRw/hqdefault.jpg", "width": 480, "height": 360 }
                },
                "channelTitle": "Varanasi Live Ganga Aarti"
            }
        }"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();

        let record = VideoRecord::from_live_search(result);
        assert!(record.is_live);
        assert_eq!(record.id, "jNQXAC9IVRw");
        assert_eq!(
            record.thumbnail_url,
            "https://i.ytimg.com/vi/jNQXAC9IVRw/hqdefault.jpg"
        );
        assert_eq!(
            record.embed_url,
            "https://www.youtube.com/embed/jNQXAC9IVRw?autoplay=1"
        );
    }

    #[test]
    fn uploads_are_flagged_non_live_and_use_the_referred_video_id() {
        let json = r#"
        {
            "kind": "youtube#playlistItem",
            "id": "VVU1TjN6X0N2RXRMQVJVSmc3clpuSGdBLmRNSDBiSGVpUk5n",
            "snippet": {
                "publishedAt": "2024-02-20T12:00:11Z",
                "title": "Morning Aarti - 20 February",
                "description": "Recorded morning aarti.",
                "thumbnails": {
                    "default": { "url": "https://i.ytimg.com/vi/dMH0bHeiRNg/default.jpg", "width": 120, "height": 90 }
                },
                "channelTitle": "Shri Siddhivinayak Temple",
                "resourceId": { "kind": "youtube#video", "videoId": "dMH0bHeiRNg" }
            }
        }"#;
        let item: PlaylistItem = serde_json::from_str(json).unwrap();

        let record = VideoRecord::from_upload(item);
        assert!(!record.is_live);
        // The playlist item's own id is an opaque membership id; records must
        // carry the video id so deduplication works across endpoints.
        assert_eq!(record.id, "dMH0bHeiRNg");
        assert_eq!(
            record.thumbnail_url,
            "https://i.ytimg.com/vi/dMH0bHeiRNg/default.jpg"
        );
        assert_eq!(
            record.embed_url,
            "https://www.youtube.com/embed/dMH0bHeiRNg"
        );
    }

    #[test]
    fn lookup_liveness_follows_actual_start_time() {
        let started = r#"
        {
            "kind": "youtube#video",
            "id": "dMH0bHeiRNg",
            "snippet": {
                "publishedAt": "2024-03-01T04:30:00Z",
                "title": "Siddhivinayak Live Darshan",
                "description": "",
                "thumbnails": {},
                "channelTitle": "Shri Siddhivinayak Temple"
            },
            "liveStreamingDetails": { "actualStartTime": "2024-03-01T04:31:12Z" }
        }"#;
        let record =
            VideoRecord::from_lookup(serde_json::from_str::<Video>(started).unwrap());
        assert!(record.is_live);
        assert_eq!(
            record.embed_url,
            "https://www.youtube.com/embed/dMH0bHeiRNg?autoplay=1"
        );

        let scheduled_only = r#"
        {
            "kind": "youtube#video",
            "id": "zW3_kPd1BJ8",
            "snippet": {
                "publishedAt": "2024-03-01T04:30:00Z",
                "title": "Evening Aarti (starts at 18:30 IST)",
                "description": "",
                "thumbnails": {},
                "channelTitle": "Kashi Vishwanath Temple"
            },
            "liveStreamingDetails": { "scheduledStartTime": "2024-03-01T13:00:00Z" }
        }"#;
        let record =
            VideoRecord::from_lookup(serde_json::from_str::<Video>(scheduled_only).unwrap());
        assert!(!record.is_live);
        assert_eq!(
            record.embed_url,
            "https://www.youtube.com/embed/zW3_kPd1BJ8"
        );
    }
}
