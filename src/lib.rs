//! Campus Study-Space Finder Library.
//! Decides which study spaces are open and which one is nearest.
//!
//! The two core computations are pure functions:
//! * [`hours::is_open`] / [`hours::open_until`] evaluate weekly opening
//!   hours against an instant in a fixed reference timezone.
//! * [`haversine::distance`], [`nearest::nearest`] and
//!   [`nearest::sort_by_distance`] rank spaces by great-circle distance.
//!
//! Everything else (catalog loading, search, the global finder state)
//! is built on top of those.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;

/// Domain types.
pub mod types {
    pub mod location;
    pub mod schedule;
    pub mod space;
    pub mod status;
}

/// Computations and state built on the domain types.
pub mod utils {
    pub mod catalog;
    pub mod finder_state;
    pub mod generator;
    pub mod haversine;
    pub mod hours;
    pub mod nearest;
    pub mod search;
}

pub use types::*;
pub use utils::*;
