use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ParseError;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Масть по символу `C/D/H/S` (регистр не важен).
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// Ранг карты. Значения 2..14, где 11=J, 12=Q, 13=K, 14=A.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Все ранги по возрастанию.
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

    /// Числовое значение ранга (2..14).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Ранг по символу: `2`-`9`, `T`, `J`, `Q`, `K`, `A` (регистр не важен).
    pub fn from_char(ch: char) -> Option<Self> {
        let rank = match ch.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// Обычная покерная карта. Идентичность = ранг + масть.
///
/// Полного порядка на картах нет: внутри руки карты
/// сортируются только по рангу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Card {
    /// Формат вида `AH`, `TD`, `7C` (всегда в верхнем регистре).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг токена вида "AH", "td", "7c".
///
/// Сначала проверяется длина (в символах), затем ранг, затем масть.
impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (r_ch, s_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => {
                return Err(ParseError::MalformedToken {
                    token: s.to_string(),
                })
            }
        };

        let rank = Rank::from_char(r_ch).ok_or_else(|| ParseError::InvalidRank {
            token: s.to_string(),
            rank: r_ch,
        })?;

        let suit = Suit::from_char(s_ch).ok_or_else(|| ParseError::InvalidSuit {
            token: s.to_string(),
            suit: s_ch,
        })?;

        Ok(Card { rank, suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_chars_roundtrip_in_both_cases() {
        for rank in Rank::ALL {
            let ch = rank.to_char();
            assert_eq!(Rank::from_char(ch), Some(rank));
            assert_eq!(Rank::from_char(ch.to_ascii_lowercase()), Some(rank));
        }
        assert_eq!(Rank::from_char('1'), None);
        assert_eq!(Rank::from_char('X'), None);
    }

    #[test]
    fn rank_values_cover_two_to_ace() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::Jack.value(), 11);
    }

    #[test]
    fn token_errors_are_typed() {
        assert_eq!(
            "AHX".parse::<Card>(),
            Err(ParseError::MalformedToken { token: "AHX".into() })
        );
        assert_eq!(
            "XD".parse::<Card>(),
            Err(ParseError::InvalidRank { token: "XD".into(), rank: 'X' })
        );
        assert_eq!(
            "KX".parse::<Card>(),
            Err(ParseError::InvalidSuit { token: "KX".into(), suit: 'X' })
        );
        // Ранг проверяется раньше масти.
        assert!(matches!(
            "XZ".parse::<Card>(),
            Err(ParseError::InvalidRank { .. })
        ));
    }

    #[test]
    fn multibyte_suit_counts_as_one_char() {
        assert_eq!(
            "A♥".parse::<Card>(),
            Err(ParseError::InvalidSuit { token: "A♥".into(), suit: '♥' })
        );
    }

    #[test]
    fn display_is_uppercase() {
        let card: Card = "th".parse().unwrap();
        assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(card.to_string(), "TH");
    }
}
