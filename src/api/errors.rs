use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::errors::ParseError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Рука с номером `index` (с нуля) не разобралась.
    #[error("hand #{index}: {message}")]
    BadHand { index: usize, message: String },

    /// Для вскрытия не передано ни одной руки.
    #[error("no hands given")]
    NoHands,
}

impl ApiError {
    pub fn bad_hand(index: usize, err: ParseError) -> Self {
        ApiError::BadHand {
            index,
            message: err.to_string(),
        }
    }
}
