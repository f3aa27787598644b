use anyhow::{anyhow, bail, Context, Result};
use catalog::{Catalog, HighlightType, VideoHighlight};
use clap::{Parser, Subcommand};
use colored::Colorize;
use discovery::{DiscoveryEngine, HighlightCard};
use pipeline::{DateRange, FilterState, PlayerSelection, SortKey};
use search::{ResultKind, SearchEngine, SearchResult, SearchScope};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Scout - player highlight discovery
#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Search players and filter AI-annotated video highlights", long_about = None)]
struct Cli {
    /// Directory containing players.json and highlights.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search players and highlights by free text
    Search {
        /// Case-insensitive substring to look for
        query: String,

        /// Which collections to search: all, players or highlights
        #[arg(long, default_value = "all")]
        scope: SearchScope,

        /// Maximum number of results
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the filtered and sorted highlight grid
    Highlights {
        /// Only show highlights of this player id
        #[arg(long)]
        player: Option<String>,

        /// Hide strength highlights
        #[arg(long)]
        no_strengths: bool,

        /// Hide weakness highlights
        #[arg(long)]
        no_weaknesses: bool,

        /// Minimum AI confidence (0-100, inclusive)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_confidence: Option<u8>,

        /// Date window: all, week, month, season or year
        #[arg(long)]
        date_range: Option<DateRange>,

        /// Sort key: date, duration, confidence or relevance
        #[arg(long, default_value = "date")]
        sort: SortKey,

        /// Filter snapshot (JSON) to start from; flags override it
        #[arg(long)]
        state: Option<PathBuf>,

        /// Print the grid as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a player's profile and highlights
    Player {
        /// Player id
        id: String,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of concurrent evaluations to run
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

const SORT_KEYS: [SortKey; 4] = [
    SortKey::Date,
    SortKey::Duration,
    SortKey::Confidence,
    SortKey::Relevance,
];

const DATE_RANGES: [DateRange; 5] = [
    DateRange::All,
    DateRange::Week,
    DateRange::Month,
    DateRange::Season,
    DateRange::Year,
];

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Missing or malformed files are logged and yield an empty catalog
    println!("Loading catalog from {}...", cli.data_dir.display());
    let start = Instant::now();
    let data_dir = cli.data_dir.clone();
    let catalog = Arc::new(
        tokio::task::spawn_blocking(move || Catalog::load_or_empty(&data_dir))
            .await
            .context("Catalog loading task failed")?,
    );
    let (players, highlights) = catalog.counts();
    println!(
        "{} Loaded {} players and {} highlights in {:?}",
        "✓".green(),
        players,
        highlights,
        start.elapsed()
    );

    let engine = DiscoveryEngine::new();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            query,
            scope,
            limit,
            json,
        } => {
            let engine = engine.with_search_engine(SearchEngine::new().with_limit(limit));
            handle_search(&catalog, &engine, &query, scope, json)?
        }
        Commands::Highlights {
            player,
            no_strengths,
            no_weaknesses,
            min_confidence,
            date_range,
            sort,
            state,
            json,
        } => {
            let mut filter_state = match state {
                Some(path) => load_state(&path)?,
                None => FilterState::default(),
            };
            if let Some(player) = player {
                filter_state.selected_player = PlayerSelection::from(player);
            }
            if no_strengths {
                filter_state.show_strengths = false;
            }
            if no_weaknesses {
                filter_state.show_weaknesses = false;
            }
            if let Some(threshold) = min_confidence {
                filter_state.confidence_threshold = threshold;
            }
            if let Some(range) = date_range {
                filter_state.date_range = range;
            }
            handle_highlights(&catalog, &engine, &filter_state, sort, json)?
        }
        Commands::Player { id } => handle_player(&catalog, &id)?,
        Commands::Benchmark { requests } => handle_benchmark(catalog, engine, requests).await?,
    }

    Ok(())
}

/// Read a FilterState snapshot from a JSON file
fn load_state(path: &Path) -> Result<FilterState> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read filter state {}", path.display()))?;
    FilterState::from_json(&raw)
        .with_context(|| format!("Invalid filter state in {}", path.display()))
}

/// Handle the 'search' command
fn handle_search(
    catalog: &Catalog,
    engine: &DiscoveryEngine,
    query: &str,
    scope: SearchScope,
    json: bool,
) -> Result<()> {
    let results = engine.search_scoped(query, scope, catalog.players(), catalog.highlights());

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{}", format!("Search results for '{}':", query).bold().blue());
    if results.is_empty() {
        println!("  No results found");
        return Ok(());
    }
    print_search_results(&results);
    Ok(())
}

/// Handle the 'highlights' command
fn handle_highlights(
    catalog: &Catalog,
    engine: &DiscoveryEngine,
    state: &FilterState,
    sort_key: SortKey,
    json: bool,
) -> Result<()> {
    let visible = engine.visible_highlights(catalog.highlights(), state, sort_key);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Highlights ({} of {}, sorted by {}):",
            visible.len(),
            catalog.highlights().len(),
            sort_key
        )
        .bold()
        .blue()
    );
    let cards = engine.highlight_cards(catalog.players(), &visible);
    print_cards(&cards);
    Ok(())
}

/// Handle the 'player' command
fn handle_player(catalog: &Catalog, id: &str) -> Result<()> {
    let player = catalog
        .get_player(id)
        .ok_or_else(|| anyhow!("Player {} not found", id))?;

    println!("{}", player.name.bold().blue());
    println!("{}Position: {}", "• ".green(), player.position);
    println!("{}Team: {}", "• ".green(), player.team);
    println!("{}Age: {}", "• ".green(), player.age);
    println!("{}Nationality: {}", "• ".green(), player.nationality);

    println!("Stats:");
    for (attribute, value) in player.stats.attributes() {
        let bar = "█".repeat(usize::from(value) / 5);
        println!("  {:<10} {:>3} {}", attribute, value, bar.cyan());
    }

    let recent = &player.recent_performance;
    println!("Recent performance:");
    println!("{}Goals: {}", "• ".cyan(), recent.goals);
    println!("{}Assists: {}", "• ".cyan(), recent.assists);
    println!("{}Average rating: {:.1}", "• ".cyan(), recent.average_rating);
    println!("{}Minutes played: {}", "• ".cyan(), recent.minutes_played);

    let highlights = catalog.highlights_for_player(id);
    println!("Highlights ({}):", highlights.len());
    for highlight in highlights {
        println!(
            "  - {} [{}] {}% ({})",
            highlight.title,
            colored_type(highlight.highlight_type),
            highlight.confidence(),
            highlight.date
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    catalog: Arc<Catalog>,
    engine: DiscoveryEngine,
    requests: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    if catalog.is_empty() {
        bail!("Catalog is empty, nothing to benchmark");
    }

    // Queries drawn from names and tags so most of them match something
    let queries: Vec<String> = catalog
        .players()
        .iter()
        .map(|p| p.name.clone())
        .chain(catalog.highlights().iter().flat_map(|h| h.tags.clone()))
        .collect();

    // Each task gets its own FilterState snapshot
    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for _ in 0..requests {
        let query = queries
            .get(rand::random_range(0..queries.len().max(1)))
            .cloned()
            .unwrap_or_default();
        let state = random_state(&catalog);
        let sort_key = SORT_KEYS[rand::random_range(0..SORT_KEYS.len())];
        let catalog = Arc::clone(&catalog);
        let engine = engine.clone();

        let handle = tokio::spawn(async move {
            let start = Instant::now();
            let results = engine.search(&query, catalog.players(), catalog.highlights());
            let visible = engine.visible_highlights(catalog.highlights(), &state, sort_key);
            (start.elapsed(), results.len() + visible.len())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = Vec::with_capacity(requests);
    let mut produced = 0;
    for handle in handles {
        let (elapsed, items) = handle.await?;
        timings.push(elapsed);
        produced += items;
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let busy: Duration = timings.iter().sum();
    let avg_latency = busy / timings.len() as u32;
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} items produced)", requests, produced);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn random_state(catalog: &Catalog) -> FilterState {
    let players = catalog.players();
    let selected_player = if players.is_empty() || rand::random::<bool>() {
        PlayerSelection::All
    } else {
        PlayerSelection::from(players[rand::random_range(0..players.len())].id.as_str())
    };

    FilterState {
        selected_player,
        show_strengths: rand::random(),
        show_weaknesses: rand::random(),
        confidence_threshold: rand::random_range(0..=100),
        date_range: DATE_RANGES[rand::random_range(0..DATE_RANGES.len())],
        ..FilterState::default()
    }
}

/// Nearest-rank percentile over sorted samples
fn percentile(sorted: &[Duration], fraction: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let rank = (sorted.len() as f64 * fraction) as usize;
    sorted[rank.min(sorted.len() - 1)]
}

fn colored_type(highlight_type: HighlightType) -> colored::ColoredString {
    match highlight_type {
        HighlightType::Strength => highlight_type.as_str().green(),
        HighlightType::Weakness => highlight_type.as_str().red(),
        HighlightType::Neutral => highlight_type.as_str().yellow(),
    }
}

fn print_search_results(results: &[SearchResult]) {
    for (rank, result) in results.iter().enumerate() {
        let kind = match result.kind {
            ResultKind::Player => result.kind.to_string().magenta(),
            ResultKind::Highlight | ResultKind::Match => result.kind.to_string().cyan(),
        };
        println!(
            "{}. [{}] {} (score {})",
            (rank + 1).to_string().green(),
            kind,
            result.title,
            result.relevance_score
        );
        if !result.description.is_empty() {
            println!("   {}", result.description);
        }
    }
}

fn print_cards(cards: &[HighlightCard<'_>]) {
    for (rank, card) in cards.iter().enumerate() {
        let highlight: &VideoHighlight = card.highlight;
        let player = card
            .player
            .map(|p| p.name.as_str())
            .unwrap_or("Unknown player");
        println!(
            "{}. {} [{}] - {}",
            (rank + 1).to_string().green(),
            highlight.title,
            colored_type(highlight.highlight_type),
            player
        );
        println!(
            "   {} | {} | {} | confidence {}%",
            highlight.match_name,
            highlight.date,
            highlight.duration,
            highlight.confidence()
        );
    }
}
