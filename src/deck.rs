//! The French deck: a fixed, read-only sequence of 52 cards.

use alloc::vec::Vec;
use core::ops::Index;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
use crate::error::LookupError;
use crate::options::{SortOptions, SuitRanking};
use crate::slice::{Slice, checked_index};

/// A deck of 52 playing cards.
///
/// Cards are laid out suit by suit, following [`SUITS`], with every rank of a
/// suit in [`RANKS`] order before the next suit starts. The deck never
/// changes after construction; ordering and shuffling return new vectors.
///
/// # Example
///
/// ```
/// use seqmodel::{Card, FrenchDeck, Rank, Suit};
///
/// let deck = FrenchDeck::new();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.get(0).unwrap(), &Card::new(Rank::Two, Suit::Spades));
/// assert_eq!(deck.get(-1).unwrap(), &Card::new(Rank::Ace, Suit::Hearts));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrenchDeck {
    cards: Vec<Card>,
}

impl FrenchDeck {
    /// Builds a new deck in construction order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in RANKS {
                cards.push(Card::new(rank, suit));
            }
        }

        tracing::trace!(cards = cards.len(), "built french deck");
        Self { cards }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty. A deck always holds 52 cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `position`; negative positions count from the end.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::IndexOutOfRange`] if `position` is outside the deck.
    pub fn get(&self, position: isize) -> Result<&Card, LookupError> {
        let index = checked_index(self.cards.len(), position)?;
        Ok(&self.cards[index])
    }

    /// Returns the cards selected by `slice`, in slice order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::ZeroStep`] if the slice step is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use seqmodel::{FrenchDeck, Rank, Slice};
    ///
    /// let deck = FrenchDeck::new();
    /// let top_three = deck.slice(Slice::from(..3)).unwrap();
    /// assert_eq!(top_three.len(), 3);
    ///
    /// let aces = deck.slice(Slice::from(12..).with_step(13)).unwrap();
    /// assert!(aces.iter().all(|card| card.rank == Rank::Ace));
    /// ```
    pub fn slice(&self, slice: impl Into<Slice>) -> Result<Vec<Card>, LookupError> {
        let indices = slice.into().indices(self.cards.len())?;
        Ok(indices.map(|index| self.cards[index]).collect())
    }

    /// Returns the cards as a slice, in construction order.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards in construction order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the four cards of `rank`, one per suit in [`SUITS`] order.
    #[must_use]
    pub fn filter_by_rank(&self, rank: Rank) -> Vec<Card> {
        // Equal ranks sit one suit-run apart.
        self.cards
            .iter()
            .skip(rank.index())
            .step_by(RANKS.len())
            .copied()
            .collect()
    }

    /// Returns the thirteen cards of `suit`, in [`RANKS`] order.
    #[must_use]
    pub fn filter_by_suit(&self, suit: Suit) -> Vec<Card> {
        let start = suit.index() * RANKS.len();
        self.cards[start..start + RANKS.len()].to_vec()
    }

    /// Parses `rank` and returns its cards.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownRank`] if `rank` is not a rank symbol.
    pub fn filter_by_rank_name(&self, rank: &str) -> Result<Vec<Card>, LookupError> {
        Ok(self.filter_by_rank(rank.parse()?))
    }

    /// Parses `suit` and returns its cards.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownSuit`] if `suit` is not a suit name.
    pub fn filter_by_suit_name(&self, suit: &str) -> Result<Vec<Card>, LookupError> {
        Ok(self.filter_by_suit(suit.parse()?))
    }

    /// Returns the ordering key of `card` under the default suit ranking.
    ///
    /// Cards order by rank first and suit weight second, with clubs lowest
    /// and spades highest.
    #[must_use]
    pub fn sort_key(&self, card: &Card) -> usize {
        sort_key(card, &SuitRanking::default())
    }

    /// Returns all cards ordered by ascending [`sort_key`](Self::sort_key).
    #[must_use]
    pub fn get_sorted(&self) -> Vec<Card> {
        self.sorted_with(&SortOptions::default())
    }

    /// Returns all cards ordered according to `options`.
    ///
    /// The sort is stable in both directions.
    #[must_use]
    pub fn sorted_with(&self, options: &SortOptions) -> Vec<Card> {
        let ranking = &options.suit_ranking;
        let mut cards = self.cards.clone();

        if options.reverse {
            cards.sort_by(|a, b| sort_key(b, ranking).cmp(&sort_key(a, ranking)));
        } else {
            cards.sort_by_key(|card| sort_key(card, ranking));
        }

        cards
    }

    /// Returns a uniformly random card.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &Card {
        &self.cards[rng.random_range(0..self.cards.len())]
    }

    /// Returns a shuffled copy of the cards, deterministic for a given seed.
    #[must_use]
    pub fn shuffled(&self, seed: u64) -> Vec<Card> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = self.cards.clone();
        cards.shuffle(&mut rng);
        cards
    }
}

fn sort_key(card: &Card, ranking: &SuitRanking) -> usize {
    card.rank.index() * ranking.len() + ranking.weight(card.suit)
}

impl Default for FrenchDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for FrenchDeck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a FrenchDeck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
