// SPDX-License-Identifier: MPL-2.0
//! Banner rotation module for cycling through short lines of text.
//!
//! This module provides a `BannerRotator` that owns the ordered list of
//! banner lines and the rotation position, so whatever renders the
//! banner has a single source of truth for which line is on screen and
//! which comes next. Driving a clock is the embedder's concern; the
//! timing constants here describe the intended cadence.

use std::time::Duration;

/// Time each line stays on screen before the next transition starts.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(5);

/// Fade-out time for the outgoing line.
pub const FADE_OUT: Duration = Duration::from_millis(240);

/// Settle time between removing the outgoing line and revealing the
/// incoming one.
pub const SWAP_SETTLE: Duration = Duration::from_millis(20);

/// Manages rotation through an ordered list of banner lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerRotator {
    lines: Vec<String>,
    current: usize,
}

impl BannerRotator {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            current: 0,
        }
    }

    /// Returns the line currently on screen, if any.
    pub fn current(&self) -> Option<&str> {
        self.lines.get(self.current).map(String::as_str)
    }

    /// Returns the line the next transition will reveal.
    ///
    /// Wraps around to the first line after the last. A single-line
    /// rotation transitions to itself.
    pub fn peek_next(&self) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        let next = (self.current + 1) % self.lines.len();
        self.lines.get(next).map(String::as_str)
    }

    /// Advances the rotation and returns the newly current line.
    ///
    /// Returns `None` if there are no lines to rotate.
    pub fn advance(&mut self) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.lines.len();
        self.lines.get(self.current).map(String::as_str)
    }

    /// Returns the total number of banner lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if there are no banner lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the rotation position of the current line.
    pub fn current_index(&self) -> usize {
        self.current
    }
}

impl Default for BannerRotator {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}
