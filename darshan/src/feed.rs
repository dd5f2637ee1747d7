//! Fail-soft browsing surface over a video source, including the multi-query
//! featured aggregation.

use crate::record::VideoRecord;
use crate::source::VideoSource;
use crate::youtube_api::YouTubeClient;
use crate::youtube_api::playlists::PlaylistItemListResponse;
use futures::future;
use std::collections::HashSet;
use tokio_stream::Stream;
use tracing::instrument;

/// Search phrasings fanned out by [`DarshanFeed::featured_live_darshans`].
///
/// A single "temple darshan live" query under-represents ceremony diversity,
/// so the featured feed spreads its requests across phrasings targeting
/// different rituals and locations. Order matters: on id collisions between
/// queries, the earlier query's result wins its position in the merged feed.
const FEATURED_QUERIES: &[&str] = &[
    "temple darshan live",
    "aarti live ceremony hindu",
    "hindu temple puja live",
    "ganga aarti varanasi live",
    "tirupati balaji darshan live",
    "kedarnath temple live",
    "hindu temple abhishekam live",
    "temple procession live",
    "temple festival live hindu",
    "mandir live darshan",
];

/// The live-darshan browsing surface.
///
/// Wraps a [`VideoSource`] and presents the contract the display layer
/// relies on: every method absorbs transport and API failures, logging them
/// and degrading to "no results" instead of propagating. A broken or
/// rate-limited backend therefore presents identically to an evening with no
/// streams on air. Callers that need to tell the two apart should use the
/// source layer directly.
#[derive(Debug)]
pub struct DarshanFeed<S = YouTubeClient> {
    source: S,
}

impl<S: VideoSource> DarshanFeed<S> {
    /// Creates a feed over the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Searches currently-live darshan streams for a free-text query.
    ///
    /// Results are flagged live and come back in the source's relevance
    /// order, at most `max_results` of them. Failures yield an empty list.
    ///
    /// `query` and `max_results` are forwarded to the source unvalidated; an
    /// empty query or a zero count behaves however the backend treats those
    /// parameters.
    #[instrument(skip(self))]
    pub async fn search_live_darshans(&self, query: &str, max_results: u32) -> Vec<VideoRecord> {
        match self.source.search_live(query, max_results).await {
            Ok(videos) => videos,
            Err(error) => {
                tracing::warn!(query, %error, "live search failed, returning no results");
                Vec::new()
            }
        }
    }

    /// Lists a channel's uploaded videos, newest first, flagged non-live.
    ///
    /// Resolution of the channel's uploads collection and the listing itself
    /// are one operation here: a failure at either step yields an empty list,
    /// never a partial result.
    #[instrument(skip(self))]
    pub async fn channel_videos(&self, channel_id: &str, max_results: u32) -> Vec<VideoRecord> {
        match self.source.channel_videos(channel_id, max_results).await {
            Ok(videos) => videos,
            Err(error) => {
                tracing::warn!(channel_id, %error, "channel listing failed, returning no results");
                Vec::new()
            }
        }
    }

    /// Looks up a single video by id.
    ///
    /// Returns `None` both when the id matches nothing and when the lookup
    /// fails; the distinction is logged but not surfaced. Liveness on the
    /// returned record is derived from the video's own broadcast metadata,
    /// not from how it was found.
    #[instrument(skip(self))]
    pub async fn video_details(&self, video_id: &str) -> Option<VideoRecord> {
        match self.source.video(video_id).await {
            Ok(video) => video,
            Err(error) => {
                tracing::warn!(video_id, %error, "video lookup failed");
                None
            }
        }
    }

    /// Produces the featured live-darshan feed.
    ///
    /// Fans out one live search per curated query phrasing, all concurrently,
    /// and merges the result sets into a single deduplicated list of at most
    /// `max_results` records. Each query is independently fail-soft, so one
    /// broken search degrades coverage rather than emptying the feed; if
    /// every query fails, the result is an empty list, indistinguishable from
    /// no live content existing anywhere.
    #[instrument(skip(self))]
    pub async fn featured_live_darshans(&self, max_results: u32) -> Vec<VideoRecord> {
        self.featured_from_queries(FEATURED_QUERIES, max_results)
            .await
    }

    async fn featured_from_queries(
        &self,
        queries: &[&str],
        max_results: u32,
    ) -> Vec<VideoRecord> {
        let cap = per_query_cap(max_results, queries.len() as u32);
        let searches = queries.iter().map(|&query| async move {
            match self.source.search_live(query, cap).await {
                Ok(videos) => videos,
                Err(error) => {
                    tracing::warn!(query, %error, "featured query failed, contributing no results");
                    Vec::new()
                }
            }
        });

        // A full join: the merge never sees partial batches, and its order is
        // dictated by query position rather than completion time.
        let batches = future::join_all(searches).await;
        merge_unique(batches, max_results as usize)
    }
}

impl DarshanFeed<YouTubeClient> {
    /// Streams a channel's entire uploads collection, newest first, across
    /// page boundaries.
    ///
    /// Unlike [`DarshanFeed::channel_videos`] this is a fallible surface:
    /// resolution and paging errors are yielded into the stream rather than
    /// collapsed, and the stream ends at the first error. Pages of 50 are
    /// fetched on demand as the stream is consumed.
    pub fn stream_channel_uploads(
        &self,
        channel_id: &str,
    ) -> impl Stream<Item = eyre::Result<VideoRecord>> + use<'_> {
        let channel_id = channel_id.to_string();
        async_stream::try_stream! {
            let playlist_id = self.source.uploads_playlist(&channel_id).await?;
            let mut page_token: Option<String> = None;
            loop {
                let page = self
                    .source
                    .playlist_items(&playlist_id, 50, page_token.as_deref())
                    .await?;
                let PlaylistItemListResponse {
                    items,
                    next_page_token,
                    ..
                } = page;
                for item in items {
                    yield VideoRecord::from_upload(item);
                }
                match next_page_token {
                    Some(token) => page_token = Some(token),
                    None => break,
                }
            }
        }
    }
}

/// How many results to request from each individual query of a fan-out so
/// that the union still reaches `max_results` when no ids overlap.
///
/// Ceiling division deliberately over-requests slightly to compensate for
/// duplicates across overlapping queries. `query_count` must be non-zero.
fn per_query_cap(max_results: u32, query_count: u32) -> u32 {
    max_results.div_ceil(query_count)
}

/// Concatenates per-query batches in query order, drops records whose id was
/// already seen, and truncates to `max_results`.
///
/// First occurrence wins: a record duplicated across queries keeps the
/// position (and fields) it had in the earliest query's batch. Within one
/// batch the source's ranking order is preserved.
fn merge_unique(batches: Vec<Vec<VideoRecord>>, max_results: usize) -> Vec<VideoRecord> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for video in batches.into_iter().flatten() {
        if seen.insert(video.id.clone()) {
            unique.push(video);
        }
    }

    unique.truncate(max_results);
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jiff::Timestamp;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use std::time::Duration;

    fn live_record(id: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            title: format!("stream {id}"),
            description: String::new(),
            thumbnail_url: String::new(),
            embed_url: format!("https://www.youtube.com/embed/{id}?autoplay=1"),
            channel_title: "Test Mandir".to_string(),
            published_at: Timestamp::UNIX_EPOCH,
            is_live: true,
        }
    }

    fn ids(videos: &[VideoRecord]) -> Vec<&str> {
        videos.iter().map(|video| video.id.as_str()).collect()
    }

    /// A search source scripted per query: fabricates `per_query` records
    /// with ids of the form `{query}-{rank}`, optionally failing or delaying
    /// chosen queries, and records the caps the aggregator asked for.
    struct ScriptedSearch {
        per_query: usize,
        failing: fn(&str) -> bool,
        delay_ms: fn(&str) -> u64,
        caps: Mutex<Vec<u32>>,
    }

    impl ScriptedSearch {
        fn returning(per_query: usize) -> Self {
            Self {
                per_query,
                failing: |_| false,
                delay_ms: |_| 0,
                caps: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VideoSource for ScriptedSearch {
        async fn search_live(
            &self,
            query: &str,
            max_results: u32,
        ) -> eyre::Result<Vec<VideoRecord>> {
            self.caps.lock().unwrap().push(max_results);

            let delay = (self.delay_ms)(query);
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }

            if (self.failing)(query) {
                eyre::bail!("simulated transport failure for {query:?}");
            }

            Ok((0..self.per_query)
                .map(|rank| live_record(&format!("{query}-{rank}")))
                .collect())
        }

        async fn channel_videos(
            &self,
            _channel_id: &str,
            _max_results: u32,
        ) -> eyre::Result<Vec<VideoRecord>> {
            eyre::bail!("not exercised")
        }

        async fn video(&self, _video_id: &str) -> eyre::Result<Option<VideoRecord>> {
            eyre::bail!("not exercised")
        }
    }

    /// A source whose every operation fails, simulating an unreachable or
    /// quota-exhausted backend.
    struct DownSource;

    #[async_trait]
    impl VideoSource for DownSource {
        async fn search_live(
            &self,
            _query: &str,
            _max_results: u32,
        ) -> eyre::Result<Vec<VideoRecord>> {
            eyre::bail!("connection reset by peer")
        }

        async fn channel_videos(
            &self,
            _channel_id: &str,
            _max_results: u32,
        ) -> eyre::Result<Vec<VideoRecord>> {
            eyre::bail!("channel resolution failed: quota exceeded")
        }

        async fn video(&self, _video_id: &str) -> eyre::Result<Option<VideoRecord>> {
            eyre::bail!("connection reset by peer")
        }
    }

    /// A lookup source with one fixed answer.
    struct FixedLookup(Option<VideoRecord>);

    #[async_trait]
    impl VideoSource for FixedLookup {
        async fn search_live(
            &self,
            _query: &str,
            _max_results: u32,
        ) -> eyre::Result<Vec<VideoRecord>> {
            eyre::bail!("not exercised")
        }

        async fn channel_videos(
            &self,
            _channel_id: &str,
            _max_results: u32,
        ) -> eyre::Result<Vec<VideoRecord>> {
            eyre::bail!("not exercised")
        }

        async fn video(&self, _video_id: &str) -> eyre::Result<Option<VideoRecord>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn per_query_cap_is_ceiling_division() {
        assert_eq!(per_query_cap(20, 10), 2);
        assert_eq!(per_query_cap(10, 3), 4);
        assert_eq!(per_query_cap(9, 3), 3);
        assert_eq!(per_query_cap(1, 10), 1);
    }

    #[test]
    fn merge_keeps_first_occurrence_in_query_order() {
        let batches = vec![
            vec![live_record("A"), live_record("B")],
            vec![live_record("B"), live_record("C")],
        ];

        let merged = merge_unique(batches, 10);
        assert_eq!(ids(&merged), ["A", "B", "C"]);
    }

    #[test]
    fn merge_is_idempotent() {
        let batches = vec![
            vec![live_record("A"), live_record("B"), live_record("A")],
            vec![live_record("B"), live_record("C")],
        ];

        let once = merge_unique(batches, 10);
        let twice = merge_unique(vec![once.clone()], 10);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_truncates_to_requested_total() {
        let batches = vec![(0..30).map(|n| live_record(&n.to_string())).collect()];

        let merged = merge_unique(batches, 20);
        assert_eq!(merged.len(), 20);
        assert_eq!(merged[0].id, "0");
        assert_eq!(merged[19].id, "19");
    }

    #[tokio::test]
    async fn featured_fans_out_with_ceiling_caps_and_merges_in_query_order() {
        let feed = DarshanFeed::new(ScriptedSearch::returning(3));

        // 10 curated queries, 3 distinct results each, 30 available in total.
        let featured = feed.featured_live_darshans(20).await;
        assert_eq!(featured.len(), 20);

        let mut expected = Vec::new();
        'outer: for query in FEATURED_QUERIES {
            for rank in 0..3 {
                expected.push(format!("{query}-{rank}"));
                if expected.len() == 20 {
                    break 'outer;
                }
            }
        }
        assert_eq!(ids(&featured), expected);

        let caps = feed.source.caps.lock().unwrap();
        assert_eq!(caps.len(), FEATURED_QUERIES.len());
        assert!(caps.iter().all(|&cap| cap == 2));
    }

    #[tokio::test]
    async fn featured_order_is_query_position_not_completion_time() {
        let mut source = ScriptedSearch::returning(1);
        // Earlier queries respond last.
        source.delay_ms = |query| if query == "q0" { 50 } else { 5 };
        let feed = DarshanFeed::new(source);

        let featured = feed.featured_from_queries(&["q0", "q1", "q2"], 10).await;
        assert_eq!(ids(&featured), ["q0-0", "q1-0", "q2-0"]);
    }

    #[tokio::test]
    async fn featured_absorbs_individual_query_failures() {
        let mut source = ScriptedSearch::returning(2);
        source.failing = |query| query == "q1";
        let feed = DarshanFeed::new(source);

        let featured = feed.featured_from_queries(&["q0", "q1", "q2"], 10).await;
        assert_eq!(ids(&featured), ["q0-0", "q0-1", "q2-0", "q2-1"]);
    }

    #[tokio::test]
    async fn featured_is_empty_when_every_query_fails() {
        let feed = DarshanFeed::new(DownSource);
        assert!(feed.featured_live_darshans(20).await.is_empty());
    }

    #[tokio::test]
    async fn featured_is_empty_when_no_content_is_live() {
        let feed = DarshanFeed::new(ScriptedSearch::returning(0));
        assert!(feed.featured_live_darshans(20).await.is_empty());
    }

    #[tokio::test]
    async fn search_collapses_failures_to_an_empty_list() {
        let feed = DarshanFeed::new(DownSource);
        let results = feed.search_live_darshans("temple darshan live", 10).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn channel_listing_collapses_resolution_failure_to_an_empty_list() {
        let feed = DarshanFeed::new(DownSource);
        let videos = feed.channel_videos("UC5N3z_CvEtLARUJg7rZnHgA", 10).await;
        assert!(videos.is_empty());
    }

    #[tokio::test]
    async fn video_details_collapses_failure_and_absence_to_none() {
        let feed = DarshanFeed::new(DownSource);
        assert_eq!(feed.video_details("dMH0bHeiRNg").await, None);

        let feed = DarshanFeed::new(FixedLookup(None));
        assert_eq!(feed.video_details("dMH0bHeiRNg").await, None);

        let record = live_record("dMH0bHeiRNg");
        let feed = DarshanFeed::new(FixedLookup(Some(record.clone())));
        assert_eq!(feed.video_details("dMH0bHeiRNg").await, Some(record));
    }
}
