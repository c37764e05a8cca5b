//! straight-odds: five-card poker hand predicates and a Monte Carlo
//! estimate of the probability of being dealt a straight.
//!
//! Cards compare by rank only: `5♣ == 5♦`. Hand categories are read off the
//! count of ordered rank-equal card pairs (see [`hand::Hand`]).
//!
//! ## Quick start
//! ```
//! use straight_odds::deck::Deck;
//! use straight_odds::hand::Hand;
//!
//! let mut deck = Deck::standard();
//! deck.shuffle_seeded(11);
//! let mut hand = Hand::deal(&mut deck).unwrap();
//! assert_eq!(deck.len(), 47);
//! let _ = hand.is_straight();
//! ```
//!
//! ## Simulation
//! Run the straight estimate with:
//! ```sh
//! RUST_LOG=info cargo run --release --bin straight-odds
//! ```

pub mod cards;
pub mod deck;
pub mod hand;
pub mod simulation;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
