use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use video_client::render::render;
use video_client::view::DELETE_FAILED_MESSAGE;
use video_client::{NewVideo, SortOrder, VideoApiClient, VideoListView};

#[derive(Debug, Parser)]
#[command(name = "video-client", version, about = "Browse and manage the video catalog")]
struct Cli {
    /// Base URL of the video service
    #[arg(long, env = "VIDEO_API_URL", default_value = "http://localhost:5000")]
    base_url: String,

    /// Terminal width used to lay out the grid
    #[arg(long, env = "COLUMNS", default_value_t = 120)]
    width: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the catalog as a grid, optionally filtered
    List {
        #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
        order: SortOrder,
        /// Case-insensitive match against title or url
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show a single video
    Show { id: i32 },
    /// Add a video (rating starts at 0)
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        /// Upload date, YYYY-MM-DD
        #[arg(long)]
        uploaded: Option<NaiveDate>,
    },
    /// Set a video's rating
    Rate {
        id: i32,
        #[arg(allow_negative_numbers = true)]
        rating: i32,
    },
    /// Delete a video, then show what is left
    Delete {
        id: i32,
        #[arg(long, default_value = "")]
        search: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let api = VideoApiClient::new(&cli.base_url).context("invalid --base-url")?;

    match cli.command {
        Command::List { order, search } => {
            let mut view = VideoListView::new();
            println!("{}", render(&view, cli.width));
            view.load(&api, order).await?;
            view.set_search_term(search);
            println!("{}", render(&view, cli.width));
        }
        Command::Show { id } => {
            let video = api.get(id).await?;
            let mut view = VideoListView::new();
            view.set_videos(vec![video]);
            println!("{}", render(&view, cli.width));
        }
        Command::Add {
            title,
            url,
            uploaded,
        } => {
            let id = api
                .create(&NewVideo {
                    title: title.clone(),
                    url,
                    uploaded,
                })
                .await?;
            println!("Saved \"{title}\" with id {id}");
        }
        Command::Rate { id, rating } => {
            api.update_rating(id, rating).await?;
            println!("Video {id} rated {rating}");
        }
        Command::Delete { id, search } => {
            let mut view = VideoListView::new();
            view.load(&api, SortOrder::Desc).await?;
            view.set_search_term(search);

            if view.delete(&api, id).await.is_err() {
                eprintln!("{DELETE_FAILED_MESSAGE}");
            }
            println!("{}", render(&view, cli.width));
        }
    }

    Ok(())
}
