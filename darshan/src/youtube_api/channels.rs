//! YouTube Channels API types and functionality.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `channels.list` API call.
///
/// Contains a list of [`Channel`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#channelListResponse`.
    pub kind: String,
    /// A list of channels that match the request criteria.
    ///
    /// The API omits this field entirely when no channel matched the
    /// requested id, so it defaults to empty.
    #[serde(default)]
    pub items: VecDeque<Channel>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

impl ChannelListResponse {
    /// The uploads playlist id of the first returned channel.
    ///
    /// A response without any channels, or a channel that does not expose an
    /// uploads playlist, is an error rather than an empty result, so that an
    /// unresolvable channel id is never mistaken for a channel with no videos.
    pub fn into_uploads_playlist(self) -> eyre::Result<String> {
        let channel = self
            .items
            .into_iter()
            .next()
            .ok_or_else(|| eyre::eyre!("no channel matched the requested id"))?;

        channel
            .content_details
            .related_playlists
            .uploads
            .filter(|playlist_id| !playlist_id.is_empty())
            .ok_or_else(|| eyre::eyre!("channel {} has no uploads playlist", channel.id))
    }
}

/// A `channel` resource contains information about a YouTube channel.
///
/// This crate only requests the `contentDetails` part, which carries the
/// channel's canonical playlists.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    /// Information about the channel's content.
    #[serde(rename = "contentDetails")]
    pub content_details: ChannelContentDetails,
}

/// The contentDetails object encapsulates information about the channel's
/// content.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelContentDetails {
    /// The playlists associated with the channel.
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

/// Playlists associated with a channel, such as the channel's uploads.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#contentDetails.relatedPlaylists>
#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedPlaylists {
    /// The ID of the playlist that contains the channel's uploaded videos.
    ///
    /// The API reports an empty string for channels that cannot be listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploads: Option<String>,
}
