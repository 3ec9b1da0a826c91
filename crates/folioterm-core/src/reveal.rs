//! Tick-driven character reveal.
//!
//! One [`TypingReveal`] animates one scrollback line. The frame loop feeds
//! it elapsed milliseconds; it converts them into revealed characters at a
//! fixed per-character speed, carrying the remainder so uneven frame times
//! do not drift. Completion is reported exactly once, on the tick that
//! reveals the final character. Dropping the value cancels the reveal; there
//! is no completion callback to fire late.

/// Character-by-character reveal of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingReveal {
    total_chars: usize,
    revealed: usize,
    speed_ms: u32,
    carry_ms: u32,
    completed: bool,
}

impl TypingReveal {
    /// Reveal `total_chars` characters at `speed_ms` per character.
    /// A speed of 0 reveals everything on the first tick.
    pub fn new(total_chars: usize, speed_ms: u32) -> Self {
        Self {
            total_chars,
            revealed: 0,
            speed_ms,
            carry_ms: 0,
            completed: false,
        }
    }

    /// Advance by `dt_ms`. Returns `true` exactly once: on the tick that
    /// reveals the last character (for an empty line, the first tick).
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        if self.completed {
            return false;
        }
        if self.speed_ms == 0 {
            self.revealed = self.total_chars;
        } else {
            self.carry_ms += dt_ms;
            let step = (self.carry_ms / self.speed_ms) as usize;
            self.carry_ms %= self.speed_ms;
            self.revealed = (self.revealed + step).min(self.total_chars);
        }
        if self.revealed == self.total_chars {
            self.completed = true;
            return true;
        }
        false
    }

    /// Characters revealed so far.
    pub fn revealed_chars(&self) -> usize {
        self.revealed
    }

    /// Total characters this reveal covers.
    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    /// Whether the final character has been revealed.
    pub fn is_finished(&self) -> bool {
        self.completed
    }
}
