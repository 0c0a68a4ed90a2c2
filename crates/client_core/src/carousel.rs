//! Rotating content index shared by the timer and manual selection.

use thiserror::Error;

pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide {index} is out of range for a carousel of {len} slides")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePosition {
    Active,
    /// Already shown in this rotation; rests off to the left.
    Before,
    /// Not yet shown; waits off to the right.
    After,
}

/// Single authoritative active index over a fixed, non-empty list.
///
/// The timer and the user both simply overwrite the index. A manual
/// selection does not reset the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    active: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { active: 0, len })
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn tick(&mut self) -> usize {
        self.active = (self.active + 1) % self.len;
        self.active
    }

    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.active = index;
        Ok(())
    }

    pub fn slide_position(&self, index: usize) -> SlidePosition {
        match index.cmp(&self.active) {
            std::cmp::Ordering::Equal => SlidePosition::Active,
            std::cmp::Ordering::Less => SlidePosition::Before,
            std::cmp::Ordering::Greater => SlidePosition::After,
        }
    }
}
