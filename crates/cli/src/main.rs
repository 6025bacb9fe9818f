use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use registry::{Actor, Movie, Registry, RegistryError};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;
use std::time::Instant;

/// Credits - query who appeared in which movie
#[derive(Parser)]
#[command(name = "credits")]
#[command(about = "Look up movie casts and actor filmographies from a credits file", long_about = None)]
struct Cli {
    /// Path to the credits file (`Title::Actor|Actor` per line)
    #[arg(short, long, default_value = "data/credits.dat")]
    credits_file: PathBuf,

    /// Print results as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cast of a movie
    Actors {
        /// Movie title (exact match)
        #[arg(long)]
        movie: String,
    },

    /// List every movie an actor is credited in
    Movies {
        /// Actor name (exact match)
        #[arg(long)]
        actor: String,
    },

    /// List every actor credited in at least one movie
    AllActors,

    /// Count every (movie, actor) credit
    TotalCredits,

    /// Summarize the loaded registry
    Stats,
}

/// Summary printed by the `stats` command
#[derive(Serialize)]
struct Stats {
    movies: usize,
    actors: usize,
    credits: usize,
}

fn main() -> Result<()> {
    // Initialize tracing. Logs go to stderr, stdout carries only command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let registry = Registry::load_from_file(&cli.credits_file).with_context(|| {
        format!(
            "Failed to load credits from {}",
            cli.credits_file.display()
        )
    })?;
    tracing::debug!("Loaded registry in {:?}", start.elapsed());

    let output = match cli.command {
        Commands::Actors { movie } => handle_actors(&registry, Movie::from(movie), cli.json)?,
        Commands::Movies { actor } => handle_movies(&registry, Actor::from(actor), cli.json)?,
        Commands::AllActors => handle_all_actors(&registry, cli.json)?,
        Commands::TotalCredits => handle_total_credits(&registry, cli.json)?,
        Commands::Stats => handle_stats(&registry, cli.json)?,
    };
    println!("{}", output);

    Ok(())
}

/// Handle the 'actors' command
fn handle_actors(registry: &Registry, movie: Movie, json: bool) -> Result<String> {
    let cast = match registry.actors_for(&movie) {
        Ok(cast) => cast,
        Err(RegistryError::MovieNotFound(movie)) => {
            anyhow::bail!("Movie '{}' has not been released", movie.title())
        }
        Err(err) => return Err(err.into()),
    };

    render_set(&format!("Cast of '{}':", movie.title()), cast, json)
}

/// Handle the 'movies' command
fn handle_movies(registry: &Registry, actor: Actor, json: bool) -> Result<String> {
    let movies = registry.movies_for(&actor);
    render_set(&format!("Movies featuring '{}':", actor.name()), movies, json)
}

/// Handle the 'all-actors' command
fn handle_all_actors(registry: &Registry, json: bool) -> Result<String> {
    render_set("All credited actors:", registry.all_actors(), json)
}

/// Handle the 'total-credits' command
fn handle_total_credits(registry: &Registry, json: bool) -> Result<String> {
    let total = registry.total_credits();

    if json {
        return Ok(serde_json::to_string(&total)?);
    }
    Ok(format!("{} {}", "Total credits:".bold().blue(), total))
}

/// Handle the 'stats' command
fn handle_stats(registry: &Registry, json: bool) -> Result<String> {
    let stats = Stats {
        movies: registry.len(),
        actors: registry.all_actors().len(),
        credits: registry.total_credits(),
    };

    if json {
        return Ok(serde_json::to_string_pretty(&stats)?);
    }

    let lines = [
        "Registry stats:".bold().blue().to_string(),
        format!("{}Movies: {}", "• ".green(), stats.movies),
        format!("{}Actors: {}", "• ".green(), stats.actors),
        format!("{}Credits: {}", "• ".cyan(), stats.credits),
    ];
    Ok(lines.join("\n"))
}

/// Render a set sorted, so output is stable between runs
fn render_set<T>(header: &str, items: HashSet<T>, json: bool) -> Result<String>
where
    T: Ord + Serialize + std::fmt::Display,
{
    let sorted: BTreeSet<T> = items.into_iter().collect();

    if json {
        return Ok(serde_json::to_string_pretty(&sorted)?);
    }

    let mut lines = vec![header.bold().blue().to_string()];
    if sorted.is_empty() {
        lines.push(format!("  {}", "(none)".dimmed()));
    }
    for item in &sorted {
        lines.push(format!("  - {}", item));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_registry() -> Registry {
        let mut registry = Registry::new();
        registry.release(Movie::from("Inception"), [Actor::from("DiCaprio")]);
        registry.release(
            Movie::from("Titanic"),
            [Actor::from("DiCaprio"), Actor::from("Winslet")],
        );
        registry
    }

    #[test]
    fn test_json_all_actors_is_a_sorted_array() {
        let output = handle_all_actors(&create_test_registry(), true).unwrap();

        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec!["DiCaprio", "Winslet"]);
    }

    #[test]
    fn test_json_movies_for_actor() {
        let output =
            handle_movies(&create_test_registry(), Actor::from("DiCaprio"), true).unwrap();

        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec!["Inception", "Titanic"]);
    }

    #[test]
    fn test_json_stats_and_total() {
        let registry = create_test_registry();

        let stats: serde_json::Value =
            serde_json::from_str(&handle_stats(&registry, true).unwrap()).unwrap();
        assert_eq!(stats["movies"], 2);
        assert_eq!(stats["actors"], 2);
        assert_eq!(stats["credits"], 3);

        let total: usize =
            serde_json::from_str(&handle_total_credits(&registry, true).unwrap()).unwrap();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_actors_for_unreleased_movie_is_an_error() {
        let err = handle_actors(&create_test_registry(), Movie::from("Heat"), true).unwrap_err();
        assert!(err.to_string().contains("Heat"));
    }

    #[test]
    fn test_text_output_lists_items() {
        let output = handle_actors(&create_test_registry(), Movie::from("Titanic"), false).unwrap();

        assert!(output.contains("Titanic"));
        assert!(output.contains("  - DiCaprio"));
        assert!(output.contains("  - Winslet"));
    }
}
