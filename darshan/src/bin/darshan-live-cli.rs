use clap::{Parser, Subcommand};
use darshan_live::{DarshanFeed, VideoRecord, YouTubeClient, directory};
use eyre::Context;
use std::io::IsTerminal;
use tokio_stream::StreamExt;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Browse live temple darshans from the terminal.
#[derive(Debug, Parser)]
#[command(name = "darshan-live-cli")]
struct Cli {
    /// YouTube Data API v3 key. Not needed for the `channels` directory.
    #[arg(long, env = "YOUTUBE_API_KEY", global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// The featured feed: curated searches merged into one deduplicated list.
    Featured {
        /// Maximum number of videos to return.
        #[arg(long, default_value_t = 20)]
        max: u32,
    },
    /// A single live search for a free-text query.
    Search {
        query: String,
        /// Maximum number of videos to return.
        #[arg(long, default_value_t = 10)]
        max: u32,
    },
    /// A temple channel's uploaded videos, newest first.
    Channel {
        channel_id: String,
        /// Maximum number of videos to return.
        #[arg(long, default_value_t = 10, conflicts_with = "all")]
        max: u32,
        /// Walk the channel's entire uploads playlist instead.
        #[arg(long)]
        all: bool,
    },
    /// Full metadata for one video.
    Video { video_id: String },
    /// The curated temple channel directory.
    Channels {
        /// Only temples in India.
        #[arg(long, conflicts_with = "international")]
        domestic: bool,
        /// Only temples abroad.
        #[arg(long)]
        international: bool,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let cli = Cli::parse();

    if let Command::Channels {
        domestic,
        international,
    } = &cli.command
    {
        let channels = if *domestic {
            directory::domestic()
        } else if *international {
            directory::international()
        } else {
            directory::temple_channels()
        };
        for channel in channels {
            println!("{:<24} {} ({})", channel.id, channel.name, channel.location);
        }
        return Ok(());
    }

    let api_key = cli.api_key.ok_or_else(|| {
        eyre::eyre!("an API key is required: pass --api-key or set YOUTUBE_API_KEY")
    })?;
    let feed = DarshanFeed::new(YouTubeClient::new(api_key, reqwest::Client::new()));

    match cli.command {
        Command::Featured { max } => {
            for video in feed.featured_live_darshans(max).await {
                print_video(&video);
            }
        }
        Command::Search { query, max } => {
            for video in feed.search_live_darshans(&query, max).await {
                print_video(&video);
            }
        }
        Command::Channel {
            channel_id,
            max,
            all,
        } => {
            if all {
                let uploads = feed.stream_channel_uploads(&channel_id);
                let mut uploads = std::pin::pin!(uploads);
                while let Some(video) = uploads.next().await {
                    let video = video.context("walk channel uploads")?;
                    print_video(&video);
                }
            } else {
                for video in feed.channel_videos(&channel_id, max).await {
                    print_video(&video);
                }
            }
        }
        Command::Video { video_id } => match feed.video_details(&video_id).await {
            Some(video) => print_video(&video),
            None => println!("no video found for id {video_id}"),
        },
        Command::Channels { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn print_video(video: &VideoRecord) {
    let flag = if video.is_live { "LIVE" } else { "    " };
    println!("[{flag}] {} -- {}", video.title, video.channel_title);
    println!("       published: {}", video.published_at);
    println!("       watch:     {}", video.embed_url);
}
