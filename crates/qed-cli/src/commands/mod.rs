pub mod catalog;
pub mod score;
