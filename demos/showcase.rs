//! Prints each sequence type through its public operations.

use seqmodel::{FrenchDeck, Rank, SerialNumber, Series, Slice, SortOptions, Suit, Vector2};

fn main() {
    show_deck();
    show_vectors();
    show_series();
}

fn show_deck() {
    let deck = FrenchDeck::new();
    println!("Deck of {} cards", deck.len());

    match deck.get(-1) {
        Ok(card) => println!("Last card: {card}"),
        Err(err) => println!("Lookup error: {err}"),
    }

    if let Ok(top) = deck.slice(Slice::from(..3)) {
        println!("Top three: {}", join(&top));
    }

    println!("Queens: {}", join(&deck.filter_by_rank(Rank::Queen)));
    println!("Hearts: {}", join(&deck.filter_by_suit(Suit::Hearts)));

    match deck.filter_by_suit_name("stars") {
        Ok(cards) => println!("Stars: {}", join(&cards)),
        Err(err) => println!("Lookup error: {err}"),
    }

    let sorted = deck.get_sorted();
    println!("Lowest: {}, highest: {}", sorted[0], sorted[sorted.len() - 1]);

    let descending = deck.sorted_with(&SortOptions::default().with_reverse(true));
    println!("Descending first: {}", descending[0]);

    println!("Shuffled top: {}", deck.shuffled(42)[0]);
}

fn show_vectors() {
    let a = Vector2::new(2.0, 4.0);
    let b = Vector2::new(2.0, 1.0);

    println!("{a:?} + {b:?} = {}", a.add(b));
    println!("|{}| = {}", Vector2::new(3.0, 4.0), Vector2::new(3.0, 4.0).magnitude());
    println!("{a} * 3 = {}", a.scale(3.0));
    println!("{a} . {b} = {}", a.dot(b));
    println!("{a} x {b} = {}", a.cross(b));
    println!("{} is nonzero: {}", Vector2::default(), Vector2::default().is_nonzero());
}

fn show_series() {
    let series = Series::new(5);
    println!("{series:?}: {series}");

    let reversed: Vec<String> = series.iter_reverse().map(ToString::to_string).collect();
    println!("Reversed: {}", reversed.join(" "));
    println!("Contains 3: {}", series.contains(&3_i64));
    println!("Contains 6: {}", series.contains(&6_i64));

    let serial = SerialNumber::new(7);
    println!("[{serial}] [{serial:>5}] [{serial:<5}]");
    for spec in ["05", "*^7", "#x", "9.4f", "e", ".2"] {
        match serial.render(Some(spec)) {
            Ok(text) => println!("{spec:>4}: {text}"),
            Err(err) => println!("{spec:>4}: error: {err}"),
        }
    }

    match "abc".parse::<SerialNumber>() {
        Ok(serial) => println!("Parsed {serial}"),
        Err(err) => println!("Validation error: {err}"),
    }
}

fn join(cards: &[seqmodel::Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
