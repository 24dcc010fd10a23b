use core::fmt;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;

/// Категория покерной руки по силе.
///
/// Порядок задаётся явно через [`HandCategory::strength`],
/// а не порядком объявления вариантов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandCategory {
    /// Все категории от слабейшей к сильнейшей.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    /// Сила категории: 0 (старшая карта) .. 8 (стрит-флеш).
    pub const fn strength(self) -> u8 {
        match self {
            HandCategory::HighCard => 0,
            HandCategory::OnePair => 1,
            HandCategory::TwoPair => 2,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::Straight => 4,
            HandCategory::Flush => 5,
            HandCategory::FullHouse => 6,
            HandCategory::FourOfAKind => 7,
            HandCategory::StraightFlush => 8,
        }
    }

    /// Человеческое название категории.
    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Удобная функция – получить категорию руки.
pub fn hand_category(hand: &Hand) -> HandCategory {
    hand.category()
}

/// Название категории руки.
pub fn describe_hand(hand: &Hand) -> &'static str {
    hand.category().name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted_by_strength() {
        for pair in HandCategory::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} должна быть слабее {}", pair[0], pair[1]);
        }
        for (i, cat) in HandCategory::ALL.iter().enumerate() {
            assert_eq!(cat.strength() as usize, i);
        }
    }

    #[test]
    fn names_match_display() {
        assert_eq!(HandCategory::ThreeOfAKind.name(), "Three of a Kind");
        assert_eq!(HandCategory::StraightFlush.to_string(), "Straight Flush");
        assert_eq!(HandCategory::HighCard.to_string(), "High Card");
    }
}
