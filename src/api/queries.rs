use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;
use crate::eval::{head_to_head, winners};

use super::dto::{ComparisonDto, HandViewDto, ShowdownDto};
use super::errors::ApiError;

/// Запросы "только чтение". Руки передаются текстом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Оценить одну руку.
    Describe { hand: String },

    /// Сравнить две руки.
    Compare { left: String, right: String },

    /// Найти сильнейшие руки среди нескольких.
    Showdown { hands: Vec<String> },
}

/// Результат запроса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Hand(HandViewDto),
    Comparison(ComparisonDto),
    Showdown(ShowdownDto),
}

/// Выполнить запрос.
pub fn handle_query(query: &Query) -> Result<QueryResponse, ApiError> {
    log::debug!("handle query {:?}", query);
    match query {
        Query::Describe { hand } => describe_hand_text(hand).map(QueryResponse::Hand),
        Query::Compare { left, right } => {
            compare_hand_texts(left, right).map(QueryResponse::Comparison)
        }
        Query::Showdown { hands } => showdown_texts(hands.as_slice()).map(QueryResponse::Showdown),
    }
}

/// Сформировать DTO на основе уже разобранной руки.
pub fn build_hand_view(hand: &Hand) -> HandViewDto {
    HandViewDto {
        hand: hand.to_string(),
        cards: hand.cards().iter().map(|c| c.to_string()).collect(),
        category: hand.category(),
        category_name: hand.category_name().to_string(),
        tiebreakers: hand.tiebreaker_values(),
    }
}

pub fn describe_hand_text(text: &str) -> Result<HandViewDto, ApiError> {
    let hand = Hand::parse(text).map_err(|e| ApiError::bad_hand(0, e))?;
    Ok(build_hand_view(&hand))
}

pub fn compare_hand_texts(left: &str, right: &str) -> Result<ComparisonDto, ApiError> {
    let l = Hand::parse(left).map_err(|e| ApiError::bad_hand(0, e))?;
    let r = Hand::parse(right).map_err(|e| ApiError::bad_hand(1, e))?;

    Ok(ComparisonDto {
        left: build_hand_view(&l),
        right: build_hand_view(&r),
        winner: head_to_head(&l, &r),
    })
}

pub fn showdown_texts<S: AsRef<str>>(texts: &[S]) -> Result<ShowdownDto, ApiError> {
    if texts.is_empty() {
        return Err(ApiError::NoHands);
    }

    let hands = texts
        .iter()
        .enumerate()
        .map(|(i, t)| Hand::parse(t.as_ref()).map_err(|e| ApiError::bad_hand(i, e)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ShowdownDto {
        hands: hands.iter().map(build_hand_view).collect(),
        winners: winners(&hands),
    })
}
