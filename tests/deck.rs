//! Deck integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seqmodel::{
    Card, DECK_SIZE, FrenchDeck, LookupError, OptionsError, RANKS, Rank, SUITS, Slice,
    SortOptions, Suit, SuitRanking,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn deck_is_built_suit_by_suit() {
    let deck = FrenchDeck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.is_empty());

    assert_eq!(deck[0], card(Rank::Two, Suit::Spades));
    assert_eq!(deck[12], card(Rank::Ace, Suit::Spades));
    assert_eq!(deck[13], card(Rank::Two, Suit::Diamonds));
    assert_eq!(deck[51], card(Rank::Ace, Suit::Hearts));

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn get_supports_negative_positions() {
    let deck = FrenchDeck::new();
    assert_eq!(deck.get(0).unwrap(), &card(Rank::Two, Suit::Spades));
    assert_eq!(deck.get(-1).unwrap(), &card(Rank::Ace, Suit::Hearts));
    assert_eq!(deck.get(-52).unwrap(), &card(Rank::Two, Suit::Spades));
}

#[test]
fn get_out_of_range() {
    let deck = FrenchDeck::new();
    assert_eq!(
        deck.get(100).unwrap_err(),
        LookupError::IndexOutOfRange {
            index: 100,
            len: 52
        }
    );
    assert_eq!(
        deck.get(52).unwrap_err(),
        LookupError::IndexOutOfRange { index: 52, len: 52 }
    );
    assert!(deck.get(-53).is_err());
}

#[test]
fn slicing_returns_new_sequences() {
    let deck = FrenchDeck::new();

    let first_three = deck.slice(Slice::from(..3)).unwrap();
    assert_eq!(
        first_three,
        [
            card(Rank::Two, Suit::Spades),
            card(Rank::Three, Suit::Spades),
            card(Rank::Four, Suit::Spades),
        ]
    );

    let reversed = deck.slice(Slice::from(..).with_step(-1)).unwrap();
    assert_eq!(reversed.len(), DECK_SIZE);
    assert_eq!(reversed[0], card(Rank::Ace, Suit::Hearts));
    assert_eq!(reversed[51], card(Rank::Two, Suit::Spades));

    let tail = deck.slice(Slice::from(-2..)).unwrap();
    assert_eq!(
        tail,
        [card(Rank::King, Suit::Hearts), card(Rank::Ace, Suit::Hearts)]
    );

    assert!(deck.slice(Slice::from(60..70)).unwrap().is_empty());
    assert_eq!(
        deck.slice(Slice::from(..).with_step(0)).unwrap_err(),
        LookupError::ZeroStep
    );
}

#[test]
fn filter_by_rank_yields_one_card_per_suit() {
    let deck = FrenchDeck::new();

    for rank in RANKS {
        let cards = deck.filter_by_rank(rank);
        assert_eq!(cards.len(), SUITS.len());
        assert!(cards.iter().all(|c| c.rank == rank));

        let suits: Vec<Suit> = cards.iter().map(|c| c.suit).collect();
        assert_eq!(suits, SUITS);
    }
}

#[test]
fn filter_by_suit_yields_ranks_in_order() {
    let deck = FrenchDeck::new();

    for suit in SUITS {
        let cards = deck.filter_by_suit(suit);
        assert_eq!(cards.len(), RANKS.len());
        assert!(cards.iter().all(|c| c.suit == suit));

        let ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, RANKS);
    }
}

#[test]
fn filter_by_name() {
    let deck = FrenchDeck::new();

    assert_eq!(
        deck.filter_by_rank_name("Q").unwrap(),
        deck.filter_by_rank(Rank::Queen)
    );
    assert_eq!(
        deck.filter_by_suit_name("hearts").unwrap(),
        deck.filter_by_suit(Suit::Hearts)
    );

    assert_eq!(
        deck.filter_by_rank_name("1").unwrap_err(),
        LookupError::UnknownRank("1".to_owned())
    );
    assert_eq!(
        deck.filter_by_suit_name("Hearts").unwrap_err(),
        LookupError::UnknownSuit("Hearts".to_owned())
    );
}

#[test]
fn rank_and_suit_text() {
    assert_eq!("10".parse::<Rank>().unwrap(), Rank::Ten);
    assert_eq!("A".parse::<Rank>().unwrap(), Rank::Ace);
    assert_eq!("clubs".parse::<Suit>().unwrap(), Suit::Clubs);
    assert_eq!(card(Rank::Queen, Suit::Hearts).to_string(), "Q of hearts");
}

#[test]
fn sort_key_orders_rank_then_suit_weight() {
    let deck = FrenchDeck::new();

    assert_eq!(deck.sort_key(&card(Rank::Two, Suit::Clubs)), 0);
    assert_eq!(deck.sort_key(&card(Rank::Two, Suit::Spades)), 3);
    assert_eq!(deck.sort_key(&card(Rank::Three, Suit::Clubs)), 4);
    assert_eq!(deck.sort_key(&card(Rank::Ace, Suit::Spades)), 51);
}

#[test]
fn get_sorted_is_a_strictly_increasing_permutation() {
    let deck = FrenchDeck::new();
    let sorted = deck.get_sorted();

    assert_eq!(sorted.len(), DECK_SIZE);
    assert!(
        sorted
            .windows(2)
            .all(|pair| deck.sort_key(&pair[0]) < deck.sort_key(&pair[1]))
    );

    let original: HashSet<Card> = deck.iter().copied().collect();
    let reordered: HashSet<Card> = sorted.iter().copied().collect();
    assert_eq!(original, reordered);

    assert_eq!(sorted[0], card(Rank::Two, Suit::Clubs));
    assert_eq!(sorted[1], card(Rank::Two, Suit::Diamonds));
    assert_eq!(sorted[2], card(Rank::Two, Suit::Hearts));
    assert_eq!(sorted[3], card(Rank::Two, Suit::Spades));
    assert_eq!(sorted[51], card(Rank::Ace, Suit::Spades));
}

#[test]
fn sorted_with_custom_options() {
    let deck = FrenchDeck::new();

    let descending = deck.sorted_with(&SortOptions::default().with_reverse(true));
    let mut ascending = deck.get_sorted();
    ascending.reverse();
    assert_eq!(descending, ascending);

    let ranking =
        SuitRanking::new([Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]).unwrap();
    let sorted = deck.sorted_with(&SortOptions::default().with_suit_ranking(ranking));
    assert_eq!(sorted[0], card(Rank::Two, Suit::Spades));
    assert_eq!(sorted[3], card(Rank::Two, Suit::Clubs));
}

#[test]
fn suit_ranking_rejects_duplicates() {
    assert_eq!(
        SuitRanking::new([Suit::Hearts, Suit::Clubs, Suit::Hearts, Suit::Spades]).unwrap_err(),
        OptionsError::DuplicateSuit(Suit::Hearts)
    );

    let ranking = SuitRanking::default();
    assert_eq!(ranking.weight(Suit::Clubs), 0);
    assert_eq!(ranking.weight(Suit::Diamonds), 1);
    assert_eq!(ranking.weight(Suit::Hearts), 2);
    assert_eq!(ranking.weight(Suit::Spades), 3);
}

#[test]
fn shuffled_is_deterministic_and_leaves_the_deck_alone() {
    let deck = FrenchDeck::new();

    let first = deck.shuffled(7);
    let second = deck.shuffled(7);
    assert_eq!(first, second);
    assert_ne!(first, deck.as_slice());

    let shuffled: HashSet<Card> = first.iter().copied().collect();
    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_eq!(deck, FrenchDeck::new());
}

#[test]
fn choose_returns_a_deck_card() {
    let deck = FrenchDeck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..20 {
        let chosen = deck.choose(&mut rng);
        assert!(deck.iter().any(|c| c == chosen));
    }
}
