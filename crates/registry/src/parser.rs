//! Parser for credits files used to seed a registry.
//!
//! Format, one movie per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! #Alive::Yoo Ah-in
//! Titanic::Leonardo DiCaprio|Kate Winslet
//! Koyaanisqatsi::
//! ```
//!
//! A comment is a `#` followed by whitespace or the end of the line, so
//! titles that begin with `#` still parse.
//!
//! Each line is applied as a `release`, so a later line for the same title
//! replaces the cast from an earlier one. Nothing is ever written back.

use crate::error::{RegistryError, Result};
use crate::registry::Registry;
use crate::types::{Actor, Movie};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

const FIELD_SEPARATOR: &str = "::";
const ACTOR_SEPARATOR: char = '|';

/// One parsed line of a credits file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditLine {
    pub movie: Movie,
    pub actors: Vec<Actor>,
}

fn is_comment(line: &str) -> bool {
    match line.strip_prefix('#') {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// Parse a single credits line.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str, file: &str, line_no: usize) -> Result<Option<CreditLine>> {
    let line = line.trim();
    if line.is_empty() || is_comment(line) {
        return Ok(None);
    }

    let (title, cast) = line
        .split_once(FIELD_SEPARATOR)
        .ok_or_else(|| RegistryError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: format!("Missing '{}' separator", FIELD_SEPARATOR),
        })?;

    let title = title.trim();
    if title.is_empty() {
        return Err(RegistryError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Empty movie title".to_string(),
        });
    }

    let actors = cast
        .split(ACTOR_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Actor::from)
        .collect();

    Ok(Some(CreditLine {
        movie: Movie::from(title),
        actors,
    }))
}

/// Parse the full contents of a credits file.
///
/// `file` is only used to label parse errors.
pub fn parse_credits_str(content: &str, file: &str) -> Result<Vec<CreditLine>> {
    let mut credits = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if let Some(credit) = parse_line(line, file, idx + 1)? {
            credits.push(credit);
        }
    }

    Ok(credits)
}

/// Parse a credits file from disk
pub fn parse_credits(path: &Path) -> Result<Vec<CreditLine>> {
    let content = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => RegistryError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => RegistryError::IoError(err),
    })?;

    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_credits_str(&content, &file)
}

impl Registry {
    /// Build a registry from a credits file.
    ///
    /// Every line is released in file order.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading credits from {}", path.display());

        let credits = parse_credits(path)?;
        debug!("Parsed {} credit lines", credits.len());

        let registry: Registry = credits
            .into_iter()
            .map(|credit| (credit.movie, credit.actors))
            .collect();

        info!(
            "Loaded {} movies with {} credits",
            registry.len(),
            registry.total_credits()
        );
        Ok(registry)
    }
}
