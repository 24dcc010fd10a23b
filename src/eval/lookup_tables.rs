use crate::domain::card::{Card, Rank};

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Константы масок для всех возможных стритов (5 подряд).
///
/// Индексы:
///   0: A-5 (wheel)     : A2345
///   1: 6-2             : 23456
///   2: 7-3             : 34567
///   3: 8-4             : 45678
///   4: 9-5             : 56789
///   5: T-6             : 6789T
///   6: J-7             : 789TJ
///   7: Q-8             : 89TJQ
///   8: K-9             : 9TJQK
///   9: A-T (broadway)  : TJQKA
pub const STRAIGHT_MASKS: [RankMask; 10] = [
    mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]),
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]),
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]),
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]),
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
];

/// Старшая карта стрита для каждой маски из `STRAIGHT_MASKS`.
const STRAIGHT_HIGHS: [Rank; 10] = [
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

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << (rank.value() - 2)
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let idx = ranks[i].value() - 2;
        mask |= 1 << idx;
        i += 1;
    }
    mask
}

/// Маска рангов набора карт (повторы рангов схлопываются).
pub fn mask_from_cards(cards: &[Card]) -> RankMask {
    cards.iter().fold(0, |mask, c| mask | rank_to_bit(c.rank))
}

/// Найти стрит в маске рангов пяти карт.
/// Возвращает старшую карту стрита, если маска в точности совпадает со стритом.
///
/// Особый случай: wheel (A2345) → возвращаем Rank::Five.
///
/// Для пяти карт точное совпадение маски означает пять разных рангов
/// подряд (или колесо); при повторах в маске меньше пяти бит.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    STRAIGHT_MASKS
        .iter()
        .position(|&sm| sm == rank_mask)
        .map(|i| STRAIGHT_HIGHS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_to_bit_basic() {
        assert_eq!(rank_to_bit(Rank::Two), 1u16 << 0);
        assert_eq!(rank_to_bit(Rank::Ace), 1u16 << 12);
    }

    #[test]
    fn mask_from_ranks_builds_correct_mask() {
        let mask = mask_from_ranks(&[Rank::Two, Rank::Four, Rank::Ace]);
        let expected = rank_to_bit(Rank::Two) | rank_to_bit(Rank::Four) | rank_to_bit(Rank::Ace);
        assert_eq!(mask, expected);
    }

    #[test]
    fn detect_straight_wheel_and_broadway() {
        assert_eq!(detect_straight(STRAIGHT_MASKS[0]), Some(Rank::Five));
        assert_eq!(detect_straight(STRAIGHT_MASKS[1]), Some(Rank::Six));
        assert_eq!(detect_straight(STRAIGHT_MASKS[9]), Some(Rank::Ace));
    }

    #[test]
    fn detect_straight_none_when_gap() {
        let mask = mask_from_ranks(&[Rank::Two, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]);
        assert_eq!(detect_straight(mask), None);
    }

    #[test]
    fn detect_straight_none_for_king_ace_two_wrap() {
        let mask = mask_from_ranks(&[Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three]);
        assert_eq!(detect_straight(mask), None);
    }

    #[test]
    fn paired_ranks_never_form_a_straight() {
        // 2 2 3 4 5 → в маске только четыре бита.
        let mask = mask_from_ranks(&[Rank::Two, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert_eq!(mask.count_ones(), 4);
        assert_eq!(detect_straight(mask), None);
    }
}
