//! Command-line front end: list decks and print generated puzzles.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use crossdeck_core::{
    Config, DeckCatalog, DecorationLayout, Difficulty, Direction, GameSession, GenerationOptions,
    Puzzle, PuzzleError,
};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crossdeck", about = "Crossdeck puzzle generator", version)]
struct Cli {
    /// Deck catalog JSON file (can also be set via CROSSDECK_DECKS_PATH)
    #[arg(long, env = "CROSSDECK_DECKS_PATH", global = true)]
    decks_path: Option<String>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// List decks in the catalog
    Decks,
    /// Generate a puzzle from a deck and print it
    Generate {
        /// Deck id
        deck: String,
        /// easy, medium, hard, or expert
        #[arg(short, long, value_parser = parse_difficulty)]
        difficulty: Option<Difficulty>,
        /// Seed for reproducible layouts and reveals
        #[arg(short, long)]
        seed: Option<u64>,
        /// none, centered, or top-right
        #[arg(long, value_parser = parse_decoration)]
        decoration: Option<DecorationLayout>,
        /// Print the solved grid instead of the playable one
        #[arg(long)]
        solution: bool,
    },
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    Difficulty::parse(value).ok_or_else(|| {
        format!(
            "unknown difficulty '{}' (expected easy, medium, hard, or expert)",
            value
        )
    })
}

fn parse_decoration(value: &str) -> Result<DecorationLayout, String> {
    DecorationLayout::parse(value).ok_or_else(|| {
        format!(
            "unknown decoration '{}' (expected none, centered, or top-right)",
            value
        )
    })
}

fn format_decks_output(catalog: &DeckCatalog, json: bool) -> Result<String, String> {
    if json {
        return serde_json::to_string_pretty(catalog.decks())
            .map_err(|err| format!("deck encoding error: {}", err));
    }
    let rows: Vec<String> = catalog
        .decks()
        .iter()
        .map(|deck| format!("{:<16} {:<30} {} items", deck.id, deck.name, deck.items.len()))
        .collect();
    Ok(rows.join("\n"))
}

fn clue_lines(puzzle: &Puzzle, direction: Direction) -> Vec<String> {
    let mut words: Vec<_> = puzzle
        .playable_words()
        .filter(|word| word.direction == direction)
        .collect();
    words.sort_by_key(|word| word.number);
    words
        .into_iter()
        .map(|word| {
            let letters = puzzle.letter_positions(word).len();
            match word.number {
                Some(number) => format!("  {:>2}. {} ({})", number, word.clue, letters),
                None => format!("      {} ({})", word.clue, letters),
            }
        })
        .collect()
}

fn format_puzzle_output(
    session: &GameSession,
    deck_name: &str,
    solution: bool,
    json: bool,
) -> Result<String, String> {
    let puzzle = session.puzzle();
    if json {
        let size = puzzle.size();
        let grid: Vec<String> = puzzle
            .to_text_grid(solution)
            .lines()
            .map(str::to_string)
            .collect();
        let payload = serde_json::json!({
            "deck": session.deck_id(),
            "difficulty": session.difficulty(),
            "rows": size.rows,
            "cols": size.cols,
            "grid": grid,
            "words": puzzle.words(),
        });
        return serde_json::to_string_pretty(&payload)
            .map_err(|err| format!("puzzle encoding error: {}", err));
    }

    let size = puzzle.size();
    let mut out = format!(
        "{} ({}, {}x{})\n\n",
        deck_name,
        session.difficulty().label(),
        size.rows,
        size.cols
    );
    out.push_str(&puzzle.to_text_grid(solution));
    for (heading, direction) in [("Across", Direction::Across), ("Down", Direction::Down)] {
        let lines = clue_lines(puzzle, direction);
        if lines.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(heading);
        out.push('\n');
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
    }
    Ok(out)
}

fn generate_output(
    catalog: &DeckCatalog,
    config: &Config,
    deck: &str,
    solution: bool,
    json: bool,
) -> Result<String, String> {
    let session = GameSession::start(
        catalog,
        deck,
        config.difficulty,
        GenerationOptions::from_config(config),
        config.seed,
    )
    .map_err(|err| match err {
        PuzzleError::InsufficientCorpus { .. } => {
            format!("no puzzle available for deck '{}': {}", deck, err)
        }
        other => other.to_string(),
    })?;
    let deck_name = catalog
        .get(deck)
        .map(|deck| deck.name.as_str())
        .unwrap_or(deck);
    let output = format_puzzle_output(&session, deck_name, solution, json);
    session.quit();
    output
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run_or_exit(action: &str, result: Result<String, String>) {
    match result {
        Ok(output) => println!("{}", output.trim_end()),
        Err(message) => {
            eprintln!("{} failed: {}", action, message);
            std::process::exit(1);
        }
    }
}

fn main() {
    let Cli {
        decks_path,
        json,
        command,
    } = Cli::parse();

    if let Commands::Completions { shell } = &command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    init_tracing();
    let mut config = Config::from_env();
    if decks_path.is_some() {
        config.decks_path = decks_path;
    }

    match command {
        Commands::Completions { .. } => {}
        Commands::Decks => {
            let catalog = DeckCatalog::from_config(&config);
            run_or_exit("Decks", format_decks_output(&catalog, json));
        }
        Commands::Generate {
            deck,
            difficulty,
            seed,
            decoration,
            solution,
        } => {
            if let Some(difficulty) = difficulty {
                config.difficulty = difficulty;
            }
            if let Some(decoration) = decoration {
                config.decoration = decoration;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            debug!(deck = %deck, seed = ?config.seed, "generating puzzle");
            let catalog = DeckCatalog::from_config(&config);
            run_or_exit(
                "Generate",
                generate_output(&catalog, &config, &deck, solution, json),
            );
        }
    }
}
