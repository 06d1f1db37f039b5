//! Long-press detection
//!
//! A press is armed on pointer-down and fires once its deadline passes,
//! unless the pointer is released or travels further than the slop first.
//! The timer never reads the clock itself; callers pass `now`.

use super::Point;
use crate::core::TileId;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingPress {
    tile: TileId,
    origin: Point,
    deadline: Instant,
}

/// A cancellable one-shot timer for a single pressed tile
#[derive(Debug, Clone, Default)]
pub struct PressTimer {
    pending: Option<PendingPress>,
}

impl PressTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Start timing a press on `tile`, replacing any earlier press
    pub fn arm(&mut self, tile: TileId, origin: Point, now: Instant, delay: Duration) {
        self.pending = Some(PendingPress {
            tile,
            origin,
            deadline: now + delay,
        });
    }

    /// Drop the pending press; returns whether one was armed
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Cancel the press if the pointer has travelled more than `slop` from its origin
    pub fn moved(&mut self, to: Point, slop: f64) {
        if self
            .pending
            .is_some_and(|press| press.origin.distance(to) > slop)
        {
            self.pending = None;
        }
    }

    /// The pressed tile, once, if the deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<TileId> {
        match self.pending {
            Some(press) if now >= press.deadline => {
                self.pending = None;
                Some(press.tile)
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending press will fire
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|press| press.deadline)
    }
}
