//! Sequence-protocol value types with optional `no_std` support.
//!
//! The crate provides three independent types:
//!
//! - [`FrenchDeck`], a fixed 52-card deck with indexing, slicing, filtering,
//!   and sort-key ordering;
//! - [`Vector2`], a 2D vector with arithmetic and dot/cross products;
//! - [`Series`], an owned run of zero-padded [`SerialNumber`]s with forward
//!   and reverse iteration and membership tests.
//!
//! # Example
//!
//! ```
//! use seqmodel::{FrenchDeck, Rank, Series, Vector2};
//!
//! let deck = FrenchDeck::new();
//! assert_eq!(deck.filter_by_rank(Rank::Queen).len(), 4);
//!
//! let v = Vector2::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! let series = Series::new(3);
//! let values: Vec<i64> = series.iter_reverse().map(|n| n.value()).collect();
//! assert_eq!(values, [3, 2, 1]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod format;
pub mod options;
pub mod serial;
pub mod series;
pub mod slice;
pub mod vector;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::FrenchDeck;
pub use error::{FormatError, LookupError, OptionsError, ValidationError};
pub use format::{Align, FormatSpec, Sign};
pub use options::{SortOptions, SuitRanking};
pub use serial::SerialNumber;
pub use series::Series;
pub use slice::{Slice, SliceIndices, resolve_index};
pub use vector::Vector2;
