use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high). Ace is never played low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Position of this rank in [`Rank::ALL`]: Two is 0, Ace is 12.
    pub const fn index(self) -> usize {
        (self as u8 - 2) as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let r = match s.trim().to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(CardError::InvalidRank(s.to_string())),
        };
        Ok(r)
    }
}

/// The four suits. Suits carry no order; `ALL` fixes the deck layout only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            '♣' | 'c' => Ok(Suit::Clubs),
            '♠' | 's' => Ok(Suit::Spades),
            '♥' | 'h' => Ok(Suit::Hearts),
            '♦' | 'd' => Ok(Suit::Diamonds),
            _ => Err(CardError::InvalidSuit(c.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c).map_err(|_| CardError::InvalidSuit(s.to_string()));
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "spades" => Ok(Suit::Spades),
            "hearts" => Ok(Suit::Hearts),
            "diamonds" => Ok(Suit::Diamonds),
            _ => Err(CardError::InvalidSuit(s.to_string())),
        }
    }
}

/// A rank or suit outside the fixed enumerations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("invalid rank: '{0}'")]
    InvalidRank(String),
    #[error("invalid suit: '{0}'")]
    InvalidSuit(String),
    #[error("invalid card: '{0}'")]
    InvalidCard(String),
}

/// A playing card: rank + suit.
///
/// Equality, hashing and ordering look at the rank only, so two cards of the
/// same rank compare equal whatever their suits. Use [`Card::same_identity`]
/// to compare the full (rank, suit) pair.
///
/// ```
/// use straight_odds::cards::{Card, Rank, Suit};
///
/// let five_clubs = Card::new(Rank::Five, Suit::Clubs);
/// let five_diamonds = Card::new(Rank::Five, Suit::Diamonds);
/// assert_eq!(five_clubs, five_diamonds);
/// assert!(!five_clubs.same_identity(five_diamonds));
/// assert_eq!(five_clubs.to_string(), "5♣");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from its symbolic suit and rank, e.g. `("♠", "10")`.
    ///
    /// Only the exact symbols are accepted: `"2"`..`"10"`, `"J"`, `"Q"`,
    /// `"K"`, `"A"` and the glyphs `♣ ♠ ♥ ♦`. Parse with [`FromStr`] for
    /// looser text such as `"Ts"`.
    ///
    /// ```
    /// use straight_odds::cards::{Card, CardError};
    ///
    /// let ace = Card::try_new("♣", "A").unwrap();
    /// assert_eq!(ace.to_string(), "A♣");
    /// assert!(matches!(Card::try_new("♣", "1"), Err(CardError::InvalidRank(_))));
    /// assert!(matches!(Card::try_new("c", "A"), Err(CardError::InvalidSuit(_))));
    /// ```
    pub fn try_new(suit: &str, rank: &str) -> Result<Self, CardError> {
        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.as_str() == rank)
            .ok_or_else(|| CardError::InvalidRank(rank.to_string()))?;
        let mut chars = suit.chars();
        let suit = match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::ALL.into_iter().find(|s| s.glyph() == c),
            _ => None,
        }
        .ok_or_else(|| CardError::InvalidSuit(suit.to_string()))?;
        Ok(Self::new(rank, suit))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// True when both rank and suit match.
    pub fn same_identity(self, other: Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }

    pub const fn to_tuple(self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.index().cmp(&other.rank.index())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // suit is always the last char; it may be a multi-byte glyph
        let Some((split, suit_ch)) = t.char_indices().last() else {
            return Err(CardError::InvalidCard(s.to_string()));
        };
        if split == 0 {
            return Err(CardError::InvalidCard(s.to_string()));
        }
        let rank = Rank::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use straight_odds::cards::{parse_cards, Rank, Suit};
///
/// let cards = parse_cards("10♠, Kd 2c").unwrap();
/// assert_eq!(cards[0].to_tuple(), (Rank::Ten, Suit::Spades));
/// assert_eq!(cards[1].to_tuple(), (Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2].to_tuple(), (Rank::Two, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
