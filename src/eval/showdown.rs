use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;

/// Итог очной схватки двух рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Winner {
    Left,
    Right,
    Tie,
}

/// Кто выигрывает: левая рука, правая или ничья.
pub fn head_to_head(left: &Hand, right: &Hand) -> Winner {
    match left.compare(right) {
        Ordering::Greater => Winner::Left,
        Ordering::Less => Winner::Right,
        Ordering::Equal => Winner::Tie,
    }
}

/// Индексы всех сильнейших рук (при равенстве банк делится).
///
/// Пустой вход → пустой результат.
pub fn winners(hands: &[Hand]) -> Vec<usize> {
    let mut best: Option<&Hand> = None;
    let mut winners: Vec<usize> = Vec::new();

    for (idx, hand) in hands.iter().enumerate() {
        match best.map(|b| hand.compare(b)) {
            None | Some(Ordering::Greater) => {
                best = Some(hand);
                winners.clear();
                winners.push(idx);
            }
            Some(Ordering::Equal) => winners.push(idx),
            Some(Ordering::Less) => {}
        }
    }

    winners
}
