//! Модуль оценки силы пятикарточной покерной руки.
//!
//! Основные функции:
//!   `classify(cards) -> Classification`
//!   `compare_hands(a, b) -> Ordering`

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;
pub mod showdown;

pub use evaluator::{classify, compare_hands, Classification};
pub use hand_rank::{describe_hand, hand_category, HandCategory};
pub use showdown::{head_to_head, winners, Winner};
