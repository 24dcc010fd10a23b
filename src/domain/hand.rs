use core::fmt;
use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::errors::ParseError;
use crate::eval::evaluator::{classify, compare_hands};
use crate::eval::hand_rank::HandCategory;

/// Сколько карт в руке.
pub const HAND_SIZE: usize = 5;

/// Пятикарточная покерная рука.
///
/// Карты отсортированы по убыванию ранга (стабильно относительно
/// входного порядка). Категория и тай-брейкеры считаются один раз
/// при создании и дальше не меняются.
///
/// Одинаковые карты (например, две `AH`) не отклоняются: рука
/// оценивается сама по себе, без общей колоды.
///
/// В serde рука представлена строкой и при чтении парсится заново.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    category: HandCategory,
    tiebreakers: Vec<Rank>,
}

impl Hand {
    /// Собрать руку из ровно пяти карт.
    pub fn new(mut cards: [Card; HAND_SIZE]) -> Self {
        // sort_by стабильный: равные ранги сохраняют входной порядок.
        cards.sort_by(|a, b| b.rank.cmp(&a.rank));

        let classification = classify(&cards);
        log::trace!(
            "classified {} as {} {:?}",
            DisplayCards(&cards),
            classification.category,
            classification.tiebreakers
        );

        Hand {
            cards,
            category: classification.category,
            tiebreakers: classification.tiebreakers,
        }
    }

    /// Собрать руку из произвольного списка карт (должно быть ровно 5).
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, ParseError> {
        let found = cards.len();
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| ParseError::WrongCardCount { found })?;
        Ok(Hand::new(cards))
    }

    /// Разобрать строку вида "9H 7S TH JS 8D".
    ///
    /// Токены проверяются слева направо, первая ошибка возвращается сразу;
    /// количество карт проверяется после того, как прочитаны все токены.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let cards = text
            .split_whitespace()
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::from_cards(cards)
    }

    /// Карты по убыванию ранга.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Отображаемое имя категории ("Two Pair", "Straight Flush", ...).
    pub fn category_name(&self) -> &'static str {
        self.category.name()
    }

    /// Ранги групп в порядке старшинства: сначала большие группы,
    /// внутри одного размера старший ранг. Для колеса первый
    /// элемент заменён на пятёрку.
    pub fn tiebreakers(&self) -> &[Rank] {
        &self.tiebreakers
    }

    /// Те же тай-брейкеры, но числами 2..14.
    pub fn tiebreaker_values(&self) -> Vec<u8> {
        self.tiebreakers.iter().map(|r| r.value()).collect()
    }

    /// Трёхстороннее сравнение: категория, затем тай-брейкеры.
    pub fn compare(&self, other: &Hand) -> Ordering {
        compare_hands(self, other)
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::parse(s)
    }
}

impl TryFrom<&str> for Hand {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Hand::parse(value)
    }
}

impl TryFrom<String> for Hand {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Hand::parse(&value)
    }
}

impl From<Hand> for String {
    fn from(hand: Hand) -> Self {
        hand.to_string()
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

struct DisplayCards<'a>(&'a [Card]);

impl fmt::Display for DisplayCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Hand {
    /// Карты через пробел, по убыванию ранга: "KD 9C 5S 3D 2H".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DisplayCards(&self.cards))
    }
}
