//! timeframe lib test modules
pub mod toolkit;

mod epoch;
