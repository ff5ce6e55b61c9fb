pub mod error;
pub mod nearest_neighbors;
pub mod parse;
