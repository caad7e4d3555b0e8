//! Interval enumeration and chunking
use std::iter::FusedIterator;

use hifitime::Epoch;

#[cfg(feature = "log")]
use log::{debug, error, trace};

use crate::{error::Error, interval::Interval, period::Period, unit::CalendarUnit};

/// [Steps] walks from `start` by one [CalendarUnit] at a time,
/// yielding every point strictly before `end`.
/// It is a lazy, single pass iterator: clone it before consumption
/// to walk the same grid twice.
#[derive(Debug, Clone)]
pub struct Steps {
    /// Next candidate, None once exhausted
    current: Option<Epoch>,
    end: Epoch,
    unit: CalendarUnit,
}

impl Steps {
    pub(crate) fn new(start: Epoch, end: Epoch, unit: CalendarUnit) -> Self {
        Self {
            current: Some(start),
            end,
            unit,
        }
    }
    /// [CalendarUnit] used to walk
    pub fn unit(&self) -> CalendarUnit {
        self.unit
    }
    /// Next point to be yielded, if any
    pub(crate) fn peek(&self) -> Option<Epoch> {
        self.current.filter(|t| *t < self.end)
    }
}

impl Iterator for Steps {
    type Item = Epoch;
    fn next(&mut self) -> Option<Epoch> {
        let current = self.current?;
        if current < self.end {
            self.current = Some(self.unit.advance(current));
            Some(current)
        } else {
            self.current = None;
            None
        }
    }
}

impl FusedIterator for Steps {}

/// [PeriodSteps] walks from `start` by a [Period], yielding
/// `start + p`, `start + p + p`.. up to `end` (included).
#[derive(Debug, Clone)]
pub struct PeriodSteps {
    current: Option<Epoch>,
    end: Epoch,
    period: Period,
}

impl PeriodSteps {
    pub(crate) fn new(start: Epoch, end: Epoch, period: Period) -> Self {
        Self {
            current: Some(start),
            end,
            period,
        }
    }
}

impl Iterator for PeriodSteps {
    type Item = Epoch;
    fn next(&mut self) -> Option<Epoch> {
        let current = self.current?;
        let next = current + self.period;
        // a period that does not move forward would never terminate
        if next > current && next <= self.end {
            self.current = Some(next);
            Some(next)
        } else {
            self.current = None;
            None
        }
    }
}

impl FusedIterator for PeriodSteps {}

/// [Chunk] is one group of at most `size` consecutive grid points.
/// It is lazy: points are computed as the [Chunk] is consumed, whatever the
/// chunk size. A [Chunk] owns its cursor, so it remains valid once the
/// parent [Chunks] moved on.
#[derive(Debug, Clone)]
pub struct Chunk {
    first: Epoch,
    steps: Steps,
    remaining: usize,
}

impl Chunk {
    /// First [Epoch] of this chunk
    pub fn first(&self) -> Epoch {
        self.first
    }
}

impl Iterator for Chunk {
    type Item = Epoch;
    fn next(&mut self) -> Option<Epoch> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let t = self.steps.next();
        if t.is_none() {
            self.remaining = 0;
        }
        t
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl FusedIterator for Chunk {}

/// [Chunks] groups consecutive [Steps] into [Chunk]s of at most `size`
/// [Epoch]s. Chunks are never empty and are produced in ascending order:
/// concatenating them reproduces the underlying [Steps] exactly.
///
/// [Chunks] is lazy and holds a single cursor whatever `size` is.
/// Moving to the next [Chunk] walks past the points of the previous one,
/// which costs `size` calendar steps but no allocation.
#[derive(Debug, Clone)]
pub struct Chunks {
    steps: Steps,
    size: usize,
    /// Points of the previously yielded chunk, skipped on next call
    pending: usize,
}

impl Chunks {
    /// Maximal number of [Epoch]s per chunk
    pub fn size(&self) -> usize {
        self.size
    }
    /// [CalendarUnit] used to walk the interval
    pub fn unit(&self) -> CalendarUnit {
        self.steps.unit()
    }
}

impl Iterator for Chunks {
    type Item = Chunk;
    fn next(&mut self) -> Option<Chunk> {
        if self.pending > 0 {
            let _ = self.steps.nth(self.pending - 1);
            self.pending = 0;
        }
        let first = self.steps.peek()?;
        #[cfg(feature = "log")]
        trace!("chunk: up to {} epoch(s) from {}", self.size, first);
        self.pending = self.size;
        Some(Chunk {
            first,
            steps: self.steps.clone(),
            remaining: self.size,
        })
    }
}

impl FusedIterator for Chunks {}

/// Partitions the grid obtained by walking `interval` by `unit`
/// into chunks of up to `size` consecutive [Epoch]s.
///
/// The grid starts at `interval.start()` and holds every point strictly
/// before `interval.end()`. Chunk boundaries are determined by count only,
/// not by calendar alignment.
///
/// `size` is validated right away: [Error::InvalidChunkSize] is returned
/// when `size` < 1, before anything is enumerated.
/// ```
/// use timeframe::prelude::*;
///
/// let t0 = Epoch::from_gregorian_utc_at_midnight(2020, 1, 1);
/// let interval = t0.until(t0 + 5.year_period());
///
/// let chunks = chunk(&interval, CalendarUnit::Year, 4)
///     .unwrap()
///     .map(|chunk| chunk.collect::<Vec<_>>())
///     .collect::<Vec<_>>();
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].len(), 4);
/// assert_eq!(chunks[1], vec![Epoch::from_gregorian_utc_at_midnight(2024, 1, 1)]);
///
/// assert!(chunk(&interval, CalendarUnit::Year, 0).is_err());
/// ```
pub fn chunk(interval: &Interval, unit: CalendarUnit, size: i64) -> Result<Chunks, Error> {
    if size < 1 {
        #[cfg(feature = "log")]
        error!("{}: invalid chunk size {}", interval, size);
        return Err(Error::InvalidChunkSize(size));
    }
    #[cfg(feature = "log")]
    debug!("{}: chunks of {} {}(s)", interval, size, unit);
    // a chunk can't hold more than usize::MAX points anyway
    Ok(Chunks {
        steps: interval.walk(unit),
        size: usize::try_from(size).unwrap_or(usize::MAX),
        pending: 0,
    })
}
