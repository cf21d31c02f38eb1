//! Deck ordering options.

use crate::card::{SUITS, Suit};
use crate::error::OptionsError;

/// Relative weight of each suit when ordering cards, lowest first.
///
/// The ranking is independent of the order in which suits are laid out in a
/// freshly built deck. The default ranks clubs lowest and spades highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuitRanking {
    order: [Suit; 4],
}

impl SuitRanking {
    /// Creates a ranking from suits listed lowest to highest.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::DuplicateSuit`] if a suit is listed twice.
    ///
    /// # Example
    ///
    /// ```
    /// use seqmodel::{Suit, SuitRanking};
    ///
    /// let bridge = SuitRanking::new([Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]);
    /// assert!(bridge.is_ok());
    ///
    /// let broken = SuitRanking::new([Suit::Clubs, Suit::Clubs, Suit::Hearts, Suit::Spades]);
    /// assert!(broken.is_err());
    /// ```
    pub fn new(order: [Suit; 4]) -> Result<Self, OptionsError> {
        for (position, suit) in order.iter().enumerate() {
            if order[..position].contains(suit) {
                return Err(OptionsError::DuplicateSuit(*suit));
            }
        }
        Ok(Self { order })
    }

    /// Returns the weight of `suit`: its position in the ranking.
    #[must_use]
    pub fn weight(&self, suit: Suit) -> usize {
        self.order
            .iter()
            .position(|&ranked| ranked == suit)
            .unwrap_or_default()
    }

    /// Returns the suits lowest to highest.
    #[must_use]
    pub const fn order(&self) -> [Suit; 4] {
        self.order
    }

    /// Number of distinct weights.
    #[must_use]
    pub const fn len(&self) -> usize {
        SUITS.len()
    }

    /// Always `false`; every ranking covers all suits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for SuitRanking {
    fn default() -> Self {
        Self {
            order: [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades],
        }
    }
}

/// Options for ordering a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use seqmodel::{SortOptions, Suit, SuitRanking};
///
/// let ranking = SuitRanking::new([Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]).unwrap();
/// let options = SortOptions::default()
///     .with_suit_ranking(ranking)
///     .with_reverse(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOptions {
    /// Suit weights used as the secondary key.
    pub suit_ranking: SuitRanking,
    /// Whether to order from the highest key down.
    pub reverse: bool,
}

impl SortOptions {
    /// Sets the suit ranking.
    ///
    /// # Example
    ///
    /// ```
    /// use seqmodel::{SortOptions, Suit, SuitRanking};
    ///
    /// let ranking = SuitRanking::new([Suit::Hearts, Suit::Clubs, Suit::Spades, Suit::Diamonds]).unwrap();
    /// let options = SortOptions::default().with_suit_ranking(ranking);
    /// assert_eq!(options.suit_ranking.weight(Suit::Hearts), 0);
    /// ```
    #[must_use]
    pub const fn with_suit_ranking(mut self, ranking: SuitRanking) -> Self {
        self.suit_ranking = ranking;
        self
    }

    /// Sets whether to sort in descending order.
    ///
    /// # Example
    ///
    /// ```
    /// use seqmodel::SortOptions;
    ///
    /// let options = SortOptions::default().with_reverse(true);
    /// assert!(options.reverse);
    /// ```
    #[must_use]
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}
