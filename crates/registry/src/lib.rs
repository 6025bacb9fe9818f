//! # Registry Crate
//!
//! An in-memory registry of movie credits: which actors appear in which
//! movies, with reverse lookups of movies by actor.
//!
//! ## Main Components
//!
//! - **types**: Identity types (Movie, Actor) and the Cast alias
//! - **registry**: The Registry itself and its queries
//! - **parser**: Seed a Registry from a credits file
//! - **error**: Error types for queries and loading
//!
//! ## Example Usage
//!
//! ```
//! use registry::{Actor, Movie, Registry};
//!
//! let mut registry = Registry::new();
//! registry.release(Movie::from("Inception"), [Actor::from("DiCaprio")]);
//! registry.tag(Movie::from("Titanic"), Actor::from("Winslet"));
//!
//! assert_eq!(registry.movies_for(&Actor::from("DiCaprio")).len(), 1);
//! assert_eq!(registry.total_credits(), 2);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod registry;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{RegistryError, Result};
pub use registry::Registry;
pub use types::{Actor, Cast, Movie};
