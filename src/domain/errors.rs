use thiserror::Error;

/// Ошибки разбора текстовой руки.
///
/// Классификация и сравнение ошибок не имеют: всё, что может
/// пойти не так, ловится здесь, на входе.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Hand must contain exactly 5 cards, got {found}")]
    WrongCardCount { found: usize },

    #[error("Invalid card format: {token}")]
    MalformedToken { token: String },

    #[error("Invalid rank '{rank}' in card {token}")]
    InvalidRank { token: String, rank: char },

    #[error("Invalid suit '{suit}' in card {token}")]
    InvalidSuit { token: String, suit: char },
}
