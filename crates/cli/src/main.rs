use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use advisor_client::GeminiAdvisor;
use common::{CommunityInfo, Config, RecommendationRequest};
use directory_client::RedditDirectory;
use pipeline::DirectoryClient;
use server::RecommendationOrchestrator;
use server::surprise;

/// community-recs - Community Recommendation Engine
#[derive(Parser)]
#[command(name = "community-recs")]
#[command(about = "Find online discussion communities matching your interests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get community recommendations for free-text interests
    Recommend {
        /// What you are interested in (required)
        #[arg(long)]
        interests: String,

        /// Problems or challenges you want help with
        #[arg(long)]
        problems: Option<String>,

        /// Preferences for community style or size
        #[arg(long)]
        preferences: Option<String>,
    },

    /// Search the community directory by keyword
    Search {
        /// Keyword to search for
        #[arg(long)]
        term: String,

        /// Number of results to return
        #[arg(long, default_value = "15")]
        limit: u32,
    },

    /// List the most popular communities
    Popular {
        /// Number of results to return
        #[arg(long, default_value = "30")]
        limit: u32,
    },

    /// Show a random sample of trending communities
    Surprise,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let directory = RedditDirectory::new(&config);

    match cli.command {
        Commands::Recommend {
            interests,
            problems,
            preferences,
        } => handle_recommend(&config, directory, interests, problems, preferences).await?,
        Commands::Search { term, limit } => handle_search(directory, term, limit).await?,
        Commands::Popular { limit } => handle_popular(directory, limit).await?,
        Commands::Surprise => handle_surprise(directory).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    config: &Config,
    directory: RedditDirectory,
    interests: String,
    problems: Option<String>,
    preferences: Option<String>,
) -> Result<()> {
    let advisor = GeminiAdvisor::new(config);
    let orchestrator = RecommendationOrchestrator::new(directory, advisor);

    let request = RecommendationRequest {
        interests,
        problems,
        preferences,
    };
    let response = orchestrator.recommend(request).await?;

    println!(
        "{}",
        format!("Search strategy: {}", response.search_terms.join(", ")).dimmed()
    );
    if !response.categories.is_empty() {
        println!(
            "{}",
            format!("Categories: {}", response.categories.join(", ")).dimmed()
        );
    }
    println!();
    println!("{}", "Recommended communities:".bold().blue());
    print_communities(&response.recommendations);
    println!();
    println!("{}", "Why these communities:".bold().blue());
    println!("{}", response.reasoning);

    Ok(())
}

/// Handle the 'search' command
async fn handle_search(directory: RedditDirectory, term: String, limit: u32) -> Result<()> {
    let results = directory.search(&term, limit).await?;

    println!(
        "{}",
        format!("Search results for '{term}':").bold().blue()
    );
    print_communities(&results);
    Ok(())
}

/// Handle the 'popular' command
async fn handle_popular(directory: RedditDirectory, limit: u32) -> Result<()> {
    let results = directory.popular(limit).await?;

    println!("{}", "Popular communities:".bold().blue());
    print_communities(&results);
    Ok(())
}

/// Handle the 'surprise' command
async fn handle_surprise(directory: RedditDirectory) -> Result<()> {
    let response = surprise::surprise(&directory).await;

    println!("{}", response.message.bold().blue());
    for community in &response.communities {
        println!(
            "{} {} [{}] - {} subscribers, {} active",
            "•".green(),
            community.name.bold(),
            community.category,
            community.subscribers,
            community.active_users
        );
        println!("  {}", community.description);
    }
    Ok(())
}

/// Helper function to format and print community records
fn print_communities(communities: &[CommunityInfo]) {
    for (i, community) in communities.iter().enumerate() {
        println!(
            "{}. {} ({} subscribers)",
            (i + 1).to_string().green(),
            community.display_name.bold(),
            community.subscriber_count
        );
        if !community.description.is_empty() {
            println!("   {}", community.description);
        }
        println!("   {}", community.url.dimmed());
    }
}
