//! Shared wire types for the YouTube API client.

use serde::{Deserialize, Serialize};

/// Paging details for lists of resources.
///
/// Includes the total number of items available and the number of resources
/// returned in a single page response.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Serialize, Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}

/// The set of thumbnail images associated with a resource, keyed by resolution.
///
/// The API returns whichever variants exist for the resource; none of them is
/// guaranteed. Additional variants (`standard`, `maxres`) exist for some videos
/// but are not consumed by this crate.
///
/// See: <https://developers.google.com/youtube/v3/docs/thumbnails>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    /// The default thumbnail image (120x90 for videos).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    /// A higher resolution version of the thumbnail image (320x180 for videos).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    /// A high resolution version of the thumbnail image (480x360 for videos).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// URL of the variant preferred for display: the high-resolution image when
    /// present, the default image otherwise.
    pub fn preferred(&self) -> Option<&str> {
        self.high
            .as_ref()
            .or(self.default.as_ref())
            .map(|thumbnail| thumbnail.url.as_str())
    }
}

/// A single thumbnail image.
///
/// See: <https://developers.google.com/youtube/v3/docs/thumbnails>
#[derive(Debug, Serialize, Deserialize)]
pub struct Thumbnail {
    /// The image's URL.
    pub url: String,
    /// The image's width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// The image's height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}
