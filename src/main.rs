//! `threadlink` CLI - resolve TV episode identifiers to Reddit discussion threads

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use threadlink::{
    manifest, queries_for_show, DiscussionResolver, Endpoints, EpisodeRef, HttpClient,
    ImdbMetadata, MetadataSource, ShowInfo,
};

#[derive(Parser)]
#[command(name = "threadlink")]
#[command(about = "Resolve TV episode identifiers to Reddit discussion threads")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an episode identifier to a discussion stream response
    Resolve {
        /// Episode identifier, e.g. tt0903747:2:5
        id: String,
    },

    /// Fetch and display show metadata for an identifier
    Show {
        /// Show or episode identifier, e.g. tt0903747 or tt0903747:2:5
        id: String,
    },

    /// Print the generated search query fan-out for an identifier
    Queries {
        /// Episode identifier, e.g. tt0903747:2:5
        id: String,

        /// Skip metadata resolution and use the show id as the only name
        #[arg(long)]
        offline: bool,
    },

    /// Print the addon manifest
    Manifest,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Commands::Resolve { id } => cmd_resolve(&id).await?,
        Commands::Show { id } => cmd_show(&id).await?,
        Commands::Queries { id, offline } => cmd_queries(&id, offline).await?,
        Commands::Manifest => cmd_manifest()?,
    }

    Ok(())
}

async fn cmd_resolve(id: &str) -> Result<()> {
    let resolver = DiscussionResolver::from_endpoints(Endpoints::default())?;
    let response = resolver.resolve(id).await;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn cmd_show(id: &str) -> Result<()> {
    // Accept either a bare show id or a full episode identifier.
    let show_id = id.split(':').next().unwrap_or(id);

    let show = fetch_show_info(show_id).await?;

    println!("Show:    {}", show.canonical_name);
    println!("Seasons: {}", show.season_count);
    if show.aliases.is_empty() {
        println!("Aliases: (none)");
    } else {
        println!("Aliases: {}", show.aliases.join(", "));
    }
    Ok(())
}

async fn cmd_queries(id: &str, offline: bool) -> Result<()> {
    let episode = EpisodeRef::parse(id)?;

    let show = if offline {
        ShowInfo::fallback(&episode.show_id)
    } else {
        fetch_show_info(&episode.show_id).await?
    };

    let endpoints = Endpoints::default();
    let queries = queries_for_show(
        &endpoints.search_base,
        &show,
        episode.season,
        episode.episode,
    );

    println!(
        "{} queries for \"{}\" S{:02}E{:02}:\n",
        queries.len(),
        show.canonical_name,
        episode.season,
        episode.episode
    );
    for (i, query) in queries.iter().enumerate() {
        println!("{:2}. {}", i + 1, query.query);
        println!("    {}", query.url);
    }
    Ok(())
}

fn cmd_manifest() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&manifest())?);
    Ok(())
}

/// Resolve show metadata, degrading to the fallback on failure like the
/// pipeline does.
async fn fetch_show_info(show_id: &str) -> Result<ShowInfo> {
    let endpoints = Endpoints::default();
    let source = ImdbMetadata::new(HttpClient::new()?, endpoints.metadata_base);

    Ok(match source.show_info(show_id).await {
        Ok(show) => show,
        Err(error) => {
            eprintln!("warning: {error}; using fallback metadata");
            ShowInfo::fallback(show_id)
        }
    })
}
