//! Core identity types for the registry.
//!
//! Movies and actors are opaque to the registry: it never looks inside them,
//! it only compares and hashes them. Both are newtypes over `String` so that
//! two values built separately from the same name are the same key.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// Movie
// =============================================================================

/// A movie, identified by its title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Movie(String);

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn title(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Movie {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for Movie {
    fn from(title: String) -> Self {
        Self(title)
    }
}

// =============================================================================
// Actor
// =============================================================================

/// An actor, identified by their credited name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Actor(String);

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Actor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Actor {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// =============================================================================
// Cast
// =============================================================================

/// The set of actors credited in one movie
pub type Cast = HashSet<Actor>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_separately_built_movies_collide() {
        let mut map = HashMap::new();
        map.insert(Movie::new("Heat"), 1);
        map.insert(Movie::from(String::from("Heat")), 2);

        assert_eq!(map.len(), 1);
        assert_eq!(map[&Movie::from("Heat")], 2);
    }

    #[test]
    fn test_cast_deduplicates_actors() {
        let cast: Cast = ["Pacino", "De Niro", "Pacino"]
            .into_iter()
            .map(Actor::from)
            .collect();

        assert_eq!(cast.len(), 2);
        assert!(cast.contains(&Actor::new("Pacino")));
    }

    #[test]
    fn test_display_is_the_bare_name() {
        assert_eq!(Movie::new("Alien").to_string(), "Alien");
        assert_eq!(Actor::new("Weaver").to_string(), "Weaver");
        assert_eq!(Movie::new("Alien").title(), "Alien");
        assert_eq!(Actor::from(String::from("Weaver")).name(), "Weaver");
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&Actor::new("Weaver")).unwrap();
        assert_eq!(json, "\"Weaver\"");

        let movie: Movie = serde_json::from_str("\"Alien\"").unwrap();
        assert_eq!(movie, Movie::new("Alien"));
    }
}
