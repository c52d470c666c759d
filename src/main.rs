use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use mood_rooms::catalog::RoomCatalog;
use mood_rooms::client::YouTubeClient;
use mood_rooms::config::{Config, load_config};
use mood_rooms::mood::{Lexicon, MoodClassifier, TitleEnricher};

#[derive(Parser)]
#[command(name = "mood-rooms")]
#[command(about = "Match a free-text mood to a playlist room")]
#[command(version)]
struct Args {
    /// How you are feeling, e.g. "rainy afternoon with tea"
    #[arg(required = true)]
    mood: Vec<String>,

    /// Path to the rooms JSON file
    #[arg(short = 'r', long = "rooms", default_value = "rooms.json")]
    rooms_file: String,

    /// Build rooms from the configured YouTube channel instead of a file
    #[arg(long = "channel")]
    channel: bool,

    /// Boost rooms whose track titles fit the mood (needs YOUTUBE_API_KEY)
    #[arg(short = 'e', long = "enrich")]
    enrich: bool,

    /// Print the score of every mood category
    #[arg(short = 's', long = "scores")]
    scores: bool,

    /// Pick a random room when nothing matches
    #[arg(long = "random-fallback")]
    random_fallback: bool,

    /// Path to a lexicon JSON file, overrides MOOD_LEXICON
    #[arg(short = 'l', long = "lexicon")]
    lexicon: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = load_config()?;
    let text = args.mood.join(" ");

    let lexicon = match args.lexicon.as_ref().or(config.lexicon_path.as_ref()) {
        Some(path) => Lexicon::load_from_file(path)?,
        None => Lexicon::default(),
    };
    let mut classifier = MoodClassifier::new(lexicon)?;

    // One client serves both the channel listing and title lookups
    let client = if args.channel || args.enrich {
        Some(Arc::new(YouTubeClient::new(&config)?))
    } else {
        None
    };

    let catalog = load_catalog(&args, &config, client.as_deref())?;

    if let Some(client) = client.filter(|_| args.enrich) {
        classifier = classifier.with_enricher(TitleEnricher::new(client, config.enrichment_timeout));
    }

    if args.scores {
        println!("\n=== MOOD SCORES ===");
        for result in classifier.score_all(&text) {
            let terms = if result.matched_terms.is_empty() {
                String::new()
            } else {
                format!(" [{}]", result.matched_terms.join(", "))
            };
            println!("{:<10} {:>7.3}{}", result.category, result.score, terms);
        }
    }

    let Some(best) = classifier.best_match(&text) else {
        println!("\nNo mood recognised in \"{text}\".");
        return fallback(&args, &catalog);
    };
    println!("\nMood: {} ({:.2})", best.category, best.score);

    let ranked = classifier.rank_rooms(&text, catalog.rooms());
    match ranked.first() {
        Some(top) => {
            println!("✓ {} (channel {})", top.room.name, top.room.channel_number);
            if !top.room.description.is_empty() {
                println!("   {}", top.room.description);
            }
            for other in ranked.iter().skip(1) {
                println!("   also: {} ({:.2})", other.room.name, other.score);
            }
            Ok(())
        }
        None => {
            println!("✗ No {} room available.", best.category);
            fallback(&args, &catalog)
        }
    }
}

fn load_catalog(args: &Args, config: &Config, client: Option<&YouTubeClient>) -> Result<RoomCatalog> {
    if args.channel {
        let client = client.ok_or_else(|| anyhow::anyhow!("YouTube client is not available"))?;
        println!("Fetching playlists for channel {}...", config.channel_id);
        let playlists = client.fetch_channel_playlists()?;
        return Ok(RoomCatalog::from_playlists(&playlists));
    }

    if !std::path::Path::new(&args.rooms_file).exists() {
        eprintln!("Error: Rooms file '{}' not found.", args.rooms_file);
        eprintln!("Please ensure the file exists, pass --rooms, or use --channel.");
        return Err(anyhow::anyhow!("Rooms file '{}' not found", args.rooms_file));
    }
    RoomCatalog::load_from_file(&args.rooms_file)
}

fn fallback(args: &Args, catalog: &RoomCatalog) -> Result<()> {
    if !args.random_fallback {
        return Ok(());
    }
    match catalog.random_room(&mut rand::thread_rng()) {
        Some(room) => println!("Teleporting to a random room: {}", room.name),
        None => println!("The catalog has no rooms to teleport to."),
    }
    Ok(())
}
