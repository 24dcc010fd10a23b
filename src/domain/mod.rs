//! Доменная модель: карты, рука из пяти карт, ошибки разбора.

pub mod card;
pub mod errors;
pub mod hand;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use errors::*;
pub use hand::*;
