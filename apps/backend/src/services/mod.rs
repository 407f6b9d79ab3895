pub mod deck;
pub mod export;
pub mod quiz;
pub mod speech;
