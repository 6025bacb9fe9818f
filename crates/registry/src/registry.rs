//! The movie -> cast mapping and the queries answered over it.
//!
//! The registry keeps exactly one index: movie to cast. Reverse lookups by
//! actor scan every cast, so `movies_for` is O(movies x cast size). A reverse
//! index would have to be diffed against the old cast on every `release`;
//! add one here if the scan ever shows up in the `credit_queries` bench.

use crate::error::{RegistryError, Result};
use crate::types::{Actor, Cast, Movie};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// In-memory registry of which actors are credited in which movies.
///
/// A movie is "released" exactly when it is a key here, even if its cast
/// is empty. Queries hand back owned sets, so callers can never mutate the
/// registry through a query result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    casts: HashMap<Movie, Cast>,
}

impl Registry {
    /// Creates a new, empty registry
    pub fn new() -> Self {
        Self {
            casts: HashMap::new(),
        }
    }

    // Mutators

    /// Releases `movie` with the given cast.
    ///
    /// If the movie was already released its previous cast is discarded
    /// entirely. Duplicate actors in `actors` collapse into one credit.
    pub fn release<I>(&mut self, movie: Movie, actors: I)
    where
        I: IntoIterator<Item = Actor>,
    {
        let cast: Cast = actors.into_iter().collect();
        debug!(movie = %movie, cast_size = cast.len(), "Releasing movie");

        if let Some(previous) = self.casts.insert(movie, cast) {
            debug!(replaced = previous.len(), "Replaced previous cast");
        }
    }

    /// Removes `movie` and every credit attached to it.
    ///
    /// Returns `true` if the movie was released, `false` if there was nothing
    /// to remove.
    pub fn remove(&mut self, movie: &Movie) -> bool {
        let removed = self.casts.remove(movie).is_some();
        debug!(movie = %movie, removed, "Removing movie");
        removed
    }

    /// Credits `actor` in `movie`, releasing the movie first if needed.
    ///
    /// Tagging the same pair twice is a no-op.
    pub fn tag(&mut self, movie: Movie, actor: Actor) {
        debug!(movie = %movie, actor = %actor, "Tagging actor");

        match self.casts.entry(movie) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().insert(actor);
            }
            Entry::Vacant(entry) => {
                entry.insert(HashSet::from([actor]));
            }
        }
    }

    // Queries

    /// Returns a copy of the cast of `movie`.
    ///
    /// Fails with [`RegistryError::MovieNotFound`] if the movie was never
    /// released (or has been removed). A released movie with no actors
    /// yields an empty set instead.
    pub fn actors_for(&self, movie: &Movie) -> Result<Cast> {
        self.casts
            .get(movie)
            .cloned()
            .ok_or_else(|| RegistryError::MovieNotFound(movie.clone()))
    }

    /// Returns every movie whose cast contains `actor`.
    ///
    /// An actor unknown to the registry appears in no movie, so the result is
    /// empty rather than an error.
    #[instrument(skip(self, actor), fields(actor = %actor))]
    pub fn movies_for(&self, actor: &Actor) -> HashSet<Movie> {
        let movies: HashSet<Movie> = self
            .casts
            .iter()
            .filter(|(_, cast)| cast.contains(actor))
            .map(|(movie, _)| movie.clone())
            .collect();

        debug!(
            "Scanned {} movies, found {}",
            self.casts.len(),
            movies.len()
        );
        movies
    }

    /// Returns every actor credited in at least one movie
    pub fn all_actors(&self) -> Cast {
        self.casts.values().flatten().cloned().collect()
    }

    /// Returns the number of (movie, actor) credit pairs.
    ///
    /// With one movie of 1 actor and another of 6 actors this is 7.
    pub fn total_credits(&self) -> usize {
        self.casts.values().map(HashSet::len).sum()
    }

    /// Whether `movie` is currently released
    pub fn is_released(&self, movie: &Movie) -> bool {
        self.casts.contains_key(movie)
    }

    /// Number of released movies
    pub fn len(&self) -> usize {
        self.casts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.casts.is_empty()
    }

    /// Iterates over released movies in no particular order
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.casts.keys()
    }

    /// Iterates over every (movie, actor) credit
    pub fn credits(&self) -> impl Iterator<Item = (&Movie, &Actor)> {
        self.casts
            .iter()
            .flat_map(|(movie, cast)| cast.iter().map(move |actor| (movie, actor)))
    }
}

// Collecting and extending apply each item as a `release`, so a later item
// for the same movie replaces the earlier cast.

impl<I> FromIterator<(Movie, I)> for Registry
where
    I: IntoIterator<Item = Actor>,
{
    fn from_iter<T: IntoIterator<Item = (Movie, I)>>(iter: T) -> Self {
        let mut registry = Registry::new();
        registry.extend(iter);
        registry
    }
}

impl<I> Extend<(Movie, I)> for Registry
where
    I: IntoIterator<Item = Actor>,
{
    fn extend<T: IntoIterator<Item = (Movie, I)>>(&mut self, iter: T) {
        for (movie, actors) in iter {
            self.release(movie, actors);
        }
    }
}
