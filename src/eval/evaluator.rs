use std::cmp::Ordering;

use crate::domain::card::{Card, Rank};
use crate::domain::hand::{Hand, HAND_SIZE};

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, mask_from_cards};

/// Результат классификации пяти карт.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub category: HandCategory,
    /// Ранги групп: размер группы по убыванию, затем ранг по убыванию.
    pub tiebreakers: Vec<Rank>,
}

/// Группа одинаковых рангов.
#[derive(Clone, Copy, Debug)]
struct RankCount {
    rank: Rank,
    count: u8,
}

/// Оценка строго 5-карточной комбинации.
///
/// Порядок проверок важен: стрит-флеш, каре, фулл-хаус, флеш, стрит,
/// сет, две пары, пара, старшая карта. Первое совпадение выигрывает.
pub fn classify(cards: &[Card; HAND_SIZE]) -> Classification {
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight(mask_from_cards(cards));
    let is_straight = straight_high.is_some();

    let groups = rank_groups(cards);

    let mut tiebreakers: Vec<Rank> = groups.iter().map(|g| g.rank).collect();

    // Колесо A2345: туз играет снизу, старшая карта стрита пятёрка.
    if straight_high == Some(Rank::Five) {
        tiebreakers[0] = Rank::Five;
    }

    let largest = groups[0].count;
    let second = groups.get(1).map_or(0, |g| g.count);

    let category = if is_straight && is_flush {
        HandCategory::StraightFlush
    } else if largest == 4 {
        HandCategory::FourOfAKind
    } else if largest == 3 && second == 2 {
        HandCategory::FullHouse
    } else if is_flush {
        HandCategory::Flush
    } else if is_straight {
        HandCategory::Straight
    } else if largest == 3 {
        HandCategory::ThreeOfAKind
    } else if largest == 2 && second == 2 {
        HandCategory::TwoPair
    } else if largest == 2 {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    };

    Classification {
        category,
        tiebreakers,
    }
}

/// Подсчёт рангов и сортировка групп:
/// сначала по количеству (desc), затем по рангу (desc).
fn rank_groups(cards: &[Card]) -> Vec<RankCount> {
    let mut rank_counts = [0u8; 15]; // индексы 0..14, используем 2..14
    for card in cards {
        rank_counts[card.rank.value() as usize] += 1;
    }

    let mut groups: Vec<RankCount> = Rank::ALL
        .iter()
        .filter_map(|&rank| {
            let count = rank_counts[rank.value() as usize];
            (count > 0).then_some(RankCount { rank, count })
        })
        .collect();

    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| b.rank.cmp(&a.rank)));
    groups
}

/// Каноническое трёхстороннее сравнение двух рук.
///
/// Разные категории решает категория. Внутри категории тай-брейкеры
/// сравниваются лексикографически; при общем префиксе короче = слабее
/// (так бывает только с дубликатами карт, порядок остаётся полным).
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    a.category()
        .cmp(&b.category())
        .then_with(|| a.tiebreakers().cmp(b.tiebreakers()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Suit;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn groups_are_ordered_by_size_then_rank() {
        let cards = [
            c(Rank::King, Suit::Hearts),
            c(Rank::Five, Suit::Spades),
            c(Rank::Five, Suit::Clubs),
            c(Rank::Two, Suit::Hearts),
            c(Rank::Two, Suit::Diamonds),
        ];
        let ranks: Vec<(Rank, u8)> = rank_groups(&cards).iter().map(|g| (g.rank, g.count)).collect();
        assert_eq!(ranks, vec![(Rank::Five, 2), (Rank::Two, 2), (Rank::King, 1)]);
    }

    #[test]
    fn wheel_overwrites_first_tiebreaker() {
        let cards = [
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Five, Suit::Diamonds),
            c(Rank::Four, Suit::Clubs),
            c(Rank::Three, Suit::Spades),
            c(Rank::Two, Suit::Diamonds),
        ];
        let cl = classify(&cards);
        assert_eq!(cl.category, HandCategory::Straight);
        assert_eq!(
            cl.tiebreakers,
            vec![Rank::Five, Rank::Five, Rank::Four, Rank::Three, Rank::Two]
        );
    }

    #[test]
    fn five_identical_cards_are_still_classified() {
        let cards = [c(Rank::Ace, Suit::Spades); HAND_SIZE];
        let cl = classify(&cards);
        assert_eq!(cl.category, HandCategory::Flush);
        assert_eq!(cl.tiebreakers, vec![Rank::Ace]);
    }

    #[test]
    fn quads_beat_flush_even_when_suited() {
        // Дубликаты карт допускаются: четыре AH + KH.
        let cards = [
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Ace, Suit::Hearts),
            c(Rank::King, Suit::Hearts),
        ];
        assert_eq!(classify(&cards).category, HandCategory::FourOfAKind);
    }
}
