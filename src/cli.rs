use clap::{Args, Parser, Subcommand};
use genre_explorer::clients::errors::{Error, Result};
use genre_explorer::explorer::{
    ConfigBuilder, Explorer, Genre, Outcome, ResultLimit, SearchRequest, ViewMode,
};
use genre_explorer::render;
use log::{info, warn};

#[derive(Parser)]
#[command(name = "genre-explorer")]
#[command(version, about = "Discover Spotify tracks, artists and popularity by genre", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search tracks of a genre and display them
    Explore(ExploreArgs),
    /// List the supported genres
    Genres,
    /// Describe what this tool does
    About,
}

#[derive(Args)]
struct ExploreArgs {
    /// One of: rock, pop, jazz, classical, hip-hop, edm, country, metal, indie, r&b
    genre: Genre,

    /// Number of tracks, clamped to 5..=50
    #[arg(short, long, default_value_t = ResultLimit::DEFAULT)]
    limit: u32,

    /// Layout of the track list: columns or table
    #[arg(short, long, default_value = "columns")]
    view: ViewMode,

    /// Show the artist popularity chart
    #[arg(long)]
    chart: bool,

    /// Show the random artist map (demo)
    #[arg(long)]
    map: bool,

    /// Your name, echoed back as a greeting
    #[arg(long)]
    name: Option<String>,

    /// Concurrent artist lookups for the popularity chart
    #[arg(long, default_value_t = 1)]
    concurrency: usize,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Explore(args) => explore(args).await?,
        Commands::Genres => {
            for genre in Genre::ALL {
                println!("{genre}");
            }
        }
        Commands::About => println!("{}", render::ABOUT),
    }
    Ok(())
}

/// User-facing text for a failed run, always including the cause
pub fn describe(err: &Error) -> String {
    match err {
        Error::SearchFailed(_) => render::error_banner(err),
        Error::ConfigurationError(msg) => msg.clone(),
        other => other.to_string(),
    }
}

async fn explore(args: ExploreArgs) -> Result<()> {
    let limit = ResultLimit::clamped(args.limit);
    if limit.get() != args.limit {
        warn!("Limit {} is out of range, using {}", args.limit, limit.get());
    }

    info!("Building config ...");
    // Credentials are resolved here, before any output
    let config = ConfigBuilder::new()
        .concurrency(args.concurrency)
        .build()
        .await?;
    let explorer = Explorer::new(config);

    if let Some(greeting) = args.name.as_deref().and_then(|n| render::greeting(n, args.genre)) {
        println!("{greeting}");
    }
    println!("{}", render::FETCHING_NOTICE);

    let result = explorer
        .explore(SearchRequest::new(args.genre, limit), args.chart)
        .await?;
    print!("{}", render::explore_report(&result, args.view));

    if args.map && result.outcome == Outcome::Done {
        let points = render::demo_map(&mut rand::rng(), render::DEMO_MAP_POINTS);
        print!("\n{}", render::map_listing(&points));
    }
    Ok(())
}
