//! Errors raised while reading a road from text.

use thiserror::Error;

/// Errors that can occur when converting text into a road.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Road is empty. A road needs at least one cell")]
    EmptyRoad,

    #[error("Unknown symbol {symbol:?} at index {index}. Expected one of '.', 'C', 'G', 'O', 'R'")]
    UnknownSymbol { symbol: char, index: usize },
}
