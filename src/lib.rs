//! Оценщик пятикарточных покерных рук.
//!
//! Текст руки → карты → категория + тай-брейкеры → сравнение.
//! Рука после создания неизменяема, общего состояния нет.

pub mod api;
pub mod domain;
pub mod eval;

pub use domain::{Card, Hand, ParseError, Rank, Suit};
pub use eval::{compare_hands, HandCategory, Winner};
