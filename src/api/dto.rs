use serde::{Deserialize, Serialize};

use crate::eval::{HandCategory, Winner};

/// DTO одной оценённой руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandViewDto {
    /// Рука в нормализованном виде: "KD 9C 5S 3D 2H".
    pub hand: String,
    /// Карты по убыванию ранга.
    pub cards: Vec<String>,
    pub category: HandCategory,
    pub category_name: String,
    /// Тай-брейкеры числами 2..14.
    pub tiebreakers: Vec<u8>,
}

/// DTO сравнения двух рук.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonDto {
    pub left: HandViewDto,
    pub right: HandViewDto,
    pub winner: Winner,
}

/// DTO вскрытия нескольких рук.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownDto {
    pub hands: Vec<HandViewDto>,
    /// Индексы победителей (больше одного: делёж).
    pub winners: Vec<usize>,
}
