//! Bounded scrollback with a permanent header prefix.
//!
//! The buffer owns every rendered line. The first `prefix_len` entries are
//! the permanent header (banner and welcome); they are never evicted and
//! never reordered. When the buffer grows past its cap, the middle is
//! discarded: header first, then the most recent entries, original order
//! preserved.

use crate::richtext::RichText;

/// Stable identity of a scrollback entry, unique within one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(u64);

/// What produced a line; drives color and reveal speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Permanent ASCII-art header.
    Banner,
    /// Permanent welcome message.
    Welcome,
    /// `$ `-prefixed echo of a submitted command.
    Echo,
    /// Command response block; may span many visual rows.
    Response,
}

/// One scrollback entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: LineId,
    pub rich: RichText,
    pub kind: LineKind,
    /// Flips false -> true exactly once, when the reveal finishes. Permanent
    /// header lines are born revealed.
    pub revealed: bool,
}

impl Line {
    pub fn id(&self) -> LineId {
        self.id
    }
}

/// Default maximum number of retained entries.
pub const DEFAULT_CAP: usize = 50;

/// Bounded line buffer. Entry count includes the permanent header.
#[derive(Debug)]
pub struct Scrollback {
    lines: Vec<Line>,
    cap: usize,
    prefix_len: usize,
    next_id: u64,
}

impl Scrollback {
    /// Create a buffer whose permanent header is the given (rich, kind)
    /// pairs, pre-revealed. The header counts toward `cap`; if `cap` is
    /// smaller than the header, the header still survives every trim.
    pub fn with_header(cap: usize, header: Vec<(RichText, LineKind)>) -> Self {
        let mut sb = Self {
            lines: Vec::new(),
            cap,
            prefix_len: 0,
            next_id: 0,
        };
        // Installed directly; trim must not run until the prefix is fixed.
        for (rich, kind) in header {
            let id = LineId(sb.next_id);
            sb.next_id += 1;
            sb.lines.push(Line {
                id,
                rich,
                kind,
                revealed: true,
            });
        }
        sb.prefix_len = sb.lines.len();
        sb
    }

    fn push(&mut self, rich: RichText, kind: LineKind, revealed: bool) -> LineId {
        let id = LineId(self.next_id);
        self.next_id += 1;
        self.lines.push(Line {
            id,
            rich,
            kind,
            revealed,
        });
        self.trim();
        id
    }

    /// Append an already-visible line.
    pub fn push_revealed(&mut self, rich: RichText, kind: LineKind) -> LineId {
        self.push(rich, kind, true)
    }

    /// Append a line awaiting its reveal.
    pub fn push_pending(&mut self, rich: RichText, kind: LineKind) -> LineId {
        self.push(rich, kind, false)
    }

    /// Flip a line to revealed. Returns `false` if the line was evicted.
    pub fn mark_revealed(&mut self, id: LineId) -> bool {
        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.revealed = true;
                true
            }
            None => false,
        }
    }

    /// Drop everything but the permanent header.
    pub fn reset(&mut self) {
        self.lines.truncate(self.prefix_len);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    fn trim(&mut self) {
        if self.lines.len() <= self.cap {
            return;
        }
        let keep_recent = self.cap.saturating_sub(self.prefix_len);
        let evict_end = self.lines.len() - keep_recent;
        self.lines.drain(self.prefix_len..evict_end);
    }
}
