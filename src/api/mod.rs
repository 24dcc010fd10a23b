//! Внешний API оценщика.
//!
//! Здесь описываются:
//! - запросы (queries.rs): оценить руку, сравнить две, вскрыть несколько;
//! - DTO (dto.rs): сериализуемые структуры для клиента / CLI;
//! - ошибки (errors.rs): то, что видит клиент.

pub mod dto;
pub mod errors;
pub mod queries;

pub use dto::*;
pub use errors::*;
pub use queries::*;
