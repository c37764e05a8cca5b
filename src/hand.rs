use crate::cards::{parse_cards, Card, CardError};
use crate::deck::{write_card_list, Deck, DeckError};
use std::fmt;
use std::str::FromStr;

pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    CardCount(usize),
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Five cards dealt from a [`Deck`].
///
/// Category predicates are driven by [`Hand::number_matches`], the count of
/// ordered rank-equal card pairs:
///
/// | hand            | matches |
/// |-----------------|---------|
/// | no pair         | 0       |
/// | pair            | 2       |
/// | two pair        | 4       |
/// | trips           | 6       |
/// | full house      | 8       |
/// | four of a kind  | 12      |
///
/// ```
/// use straight_odds::hand::Hand;
///
/// let mut hand: Hand = "3♣ 7♦ 5♥ 4♠ 6♣".parse().unwrap();
/// assert!(hand.is_straight());
/// assert_eq!(hand.to_string(), "[3♣, 4♠, 5♥, 6♣, 7♦]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Deal five cards one after another from `deck`.
    pub fn deal(deck: &mut Deck) -> Result<Self, DeckError> {
        let cards = [
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
        ];
        Ok(Self { cards })
    }

    pub const fn from_cards(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards[1..].iter().all(|c| c.suit() == suit)
    }

    /// Ordered pairs `(i, j)`, `i != j`, whose cards share a rank. Each
    /// matching pair is counted twice.
    pub fn number_matches(&self) -> usize {
        let mut matches = 0;
        for (i, a) in self.cards.iter().enumerate() {
            for (j, b) in self.cards.iter().enumerate() {
                if i != j && a.rank() == b.rank() {
                    matches += 1;
                }
            }
        }
        matches
    }

    pub fn is_pair(&self) -> bool {
        self.number_matches() == 2
    }

    pub fn is_two_pair(&self) -> bool {
        self.number_matches() == 4
    }

    pub fn is_trips(&self) -> bool {
        self.number_matches() == 6
    }

    pub fn is_full_house(&self) -> bool {
        self.number_matches() == 8
    }

    pub fn is_four_of_a_kind(&self) -> bool {
        self.number_matches() == 12
    }

    /// Five distinct, consecutive ranks. Ace only counts high, so A-2-3-4-5
    /// is not a straight.
    ///
    /// Sorts the held cards ascending by rank as a side effect; the new
    /// order is visible through [`Hand::cards`] afterwards.
    pub fn is_straight(&mut self) -> bool {
        self.cards.sort();
        let distance = self.cards[HAND_SIZE - 1].rank().index() - self.cards[0].rank().index();
        self.number_matches() == 0 && distance == HAND_SIZE - 1
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        let cards: [Card; HAND_SIZE] =
            cards.try_into().map_err(|v: Vec<Card>| HandError::CardCount(v.len()))?;
        Ok(Self::from_cards(cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_card_list(f, &self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn deal_takes_five_from_the_tail() {
        let mut deck = Deck::standard();
        let h = Hand::deal(&mut deck).unwrap();
        assert_eq!(deck.len(), 47);
        let ranks: Vec<Rank> = h.cards().iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        assert!(h.cards().iter().all(|c| c.suit() == Suit::Diamonds));
    }

    #[test]
    fn deal_propagates_empty_deck() {
        let mut deck = Deck::standard();
        for _ in 0..49 {
            deck.deal().unwrap();
        }
        assert_eq!(Hand::deal(&mut deck), Err(DeckError::Empty));
    }

    #[test]
    fn number_matches_table() {
        assert_eq!(hand("2♣ 3♦ 4♥ 5♠ 9♣").number_matches(), 0);
        assert_eq!(hand("2♣ 2♦ 5♥ 7♠ 9♣").number_matches(), 2);
        assert_eq!(hand("2♣ 2♦ 5♥ 5♠ 9♣").number_matches(), 4);
        assert_eq!(hand("2♣ 2♦ 2♥ 7♠ 9♣").number_matches(), 6);
        assert_eq!(hand("2♣ 2♦ 2♥ 5♠ 5♣").number_matches(), 8);
        assert_eq!(hand("2♣ 2♦ 2♥ 2♠ 5♣").number_matches(), 12);
    }

    #[test]
    fn category_predicates() {
        let pair = hand("2♣ 2♦ 5♥ 7♠ 9♣");
        assert!(pair.is_pair() && !pair.is_two_pair() && !pair.is_trips());

        let two_pair = hand("2♣ 2♦ 5♥ 5♠ 9♣");
        assert!(two_pair.is_two_pair() && !two_pair.is_pair());

        let trips = hand("2♣ 2♦ 2♥ 7♠ 9♣");
        assert!(trips.is_trips() && !trips.is_full_house());

        let boat = hand("2♣ 2♦ 2♥ 5♠ 5♣");
        assert!(boat.is_full_house() && !boat.is_trips());

        assert!(hand("K♣ K♦ K♥ K♠ 5♣").is_four_of_a_kind());
    }

    #[test]
    fn flush_requires_one_suit() {
        assert!(hand("2♠ 7♠ 9♠ J♠ K♠").is_flush());
        assert!(!hand("2♠ 7♠ 9♠ J♠ K♥").is_flush());
    }

    #[test]
    fn straights() {
        assert!(hand("3♣ 4♦ 5♥ 6♠ 7♣").is_straight());
        assert!(hand("A♣ K♦ Q♥ J♠ 10♣").is_straight());
        assert!(!hand("A♣ 2♦ 3♥ 4♠ 5♣").is_straight());
        assert!(!hand("2♣ 2♦ 3♥ 4♠ 5♣").is_straight());
        assert!(!hand("2♣ 3♦ 4♥ 5♠ 7♣").is_straight());
    }

    #[test]
    fn is_straight_sorts_held_cards() {
        let mut h = hand("9♣ 2♦ K♥ 5♠ 7♣");
        assert!(!h.is_straight());
        assert_eq!(h.to_string(), "[2♦, 5♠, 7♣, 9♣, K♥]");
    }

    #[test]
    fn parse_requires_five_cards() {
        assert!(matches!("2♣ 3♦".parse::<Hand>(), Err(HandError::CardCount(2))));
        assert!(matches!("2♣ 3♦ 4♥ 5♠ 1♣".parse::<Hand>(), Err(HandError::Card(_))));
    }
}
