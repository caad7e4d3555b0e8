#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * Timeframe: calendar periods, intervals and interval chunking
 * on top of the hifitime library.
 * This crate is shipped under both Apache-2.0 and MIT License.
 */

pub mod calendar;
pub mod chunk;
pub mod epoch;
pub mod error;
pub mod interval;
pub mod period;
pub mod unit;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        chunk::{chunk, Chunk, Chunks, PeriodSteps, Steps},
        epoch::EpochExt,
        error::Error,
        interval::Interval,
        period::{Period, PeriodUnits},
        unit::CalendarUnit,
    };
    // pub re-export
    pub use hifitime::{Duration, Epoch, TimeScale, TimeUnits, Unit};
}
