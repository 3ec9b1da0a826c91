//! Terminal session: prompt state, dispatch, and reveal sequencing.
//!
//! The session owns everything behind the prompt. A submitted line is
//! interpreted once; its echo and response land in the scrollback as
//! pending lines and reveal sequentially (echo first, then the response
//! at its own speed). While a reveal is in flight the prompt is locked:
//! keystrokes, submissions, recall, and completion are all dropped until
//! the animation finishes.

use std::collections::VecDeque;
use std::mem;

use folioterm_content::{BANNER, WELCOME};

use crate::commands::register_builtins;
use crate::completion::Completion;
use crate::config::FolioConfig;
use crate::history::{History, Recall};
use crate::interpreter::{CommandOutput, CommandRegistry};
use crate::reveal::TypingReveal;
use crate::richtext::RichText;
use crate::scrollback::{Line, LineId, LineKind, Scrollback};
use crate::viewer::CertificateViewer;

/// What the session is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Prompt is live; input is accepted.
    Idle,
    /// A reveal is animating; the prompt is locked.
    AwaitingReveal,
}

/// A pending scrollback line together with its reveal timer.
///
/// Dropping a job silently stops the timer; completion effects only fire
/// from [`Session::tick`]. A job whose line was evicted by scrollback trim
/// keeps timing so the session still unlocks on schedule.
struct RevealJob {
    line: LineId,
    reveal: TypingReveal,
}

/// The interactive state of the whole terminal.
pub struct Session {
    registry: CommandRegistry,
    scrollback: Scrollback,
    history: History,
    completion: Completion,
    viewer: CertificateViewer,
    input: String,
    state: SessionState,
    active: Option<RevealJob>,
    queued: VecDeque<RevealJob>,
    /// Raw line to record in history once the whole reveal completes.
    pending_record: Option<String>,
    echo_speed_ms: u32,
    response_speed_ms: u32,
}

impl Session {
    pub fn new(config: &FolioConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);

        let header = vec![
            (RichText::plain(BANNER), LineKind::Banner),
            (RichText::plain(WELCOME), LineKind::Welcome),
        ];

        Self {
            registry,
            scrollback: Scrollback::with_header(config.scrollback_cap, header),
            history: History::new(),
            completion: Completion::new(),
            viewer: CertificateViewer::new(),
            input: String::new(),
            state: SessionState::Idle,
            active: None,
            queued: VecDeque::new(),
            pending_record: None,
            echo_speed_ms: config.echo_speed_ms,
            response_speed_ms: config.response_speed_ms,
        }
    }

    // --- prompt editing ---

    /// Append a typed character. Dropped while a reveal is in flight.
    pub fn insert_char(&mut self, ch: char) {
        if self.state != SessionState::Idle {
            return;
        }
        self.input.push(ch);
        self.completion.reset();
    }

    /// Delete the last character. Dropped while a reveal is in flight.
    pub fn backspace(&mut self) {
        if self.state != SessionState::Idle {
            return;
        }
        self.input.pop();
        self.completion.reset();
    }

    /// Submit the current input line.
    ///
    /// Blank input clears the prompt and appends nothing. Anything else is
    /// echoed as `$ {raw}` (verbatim, untrimmed) followed by the command
    /// response, both revealed sequentially. Submission while a reveal is
    /// in flight is dropped with the input intact.
    pub fn submit(&mut self) {
        if self.state != SessionState::Idle {
            return;
        }
        self.completion.reset();
        let raw = mem::take(&mut self.input);
        if raw.trim().is_empty() {
            return;
        }

        match self.registry.interpret(&raw) {
            CommandOutput::None => {}
            CommandOutput::Clear => {
                // Clear is synchronous: no echo, no reveal, recorded at once.
                self.scrollback.reset();
                self.viewer.hide();
                self.history.record(&raw);
            }
            CommandOutput::Text(text) => {
                // Leaving education: any other command closes the viewer and
                // drops its selection.
                self.viewer.hide();
                let rich = RichText::scan_links(&text);
                self.begin_reveal(raw, rich);
            }
            CommandOutput::Certifications(rich) => {
                self.viewer.show();
                self.begin_reveal(raw, rich);
            }
        }
    }

    fn begin_reveal(&mut self, raw: String, response: RichText) {
        let echo = RichText::plain(format!("$ {raw}"));
        let echo_chars = echo.char_len();
        let echo_line = self.scrollback.push_pending(echo, LineKind::Echo);

        let response_chars = response.char_len();
        let response_line = self.scrollback.push_pending(response, LineKind::Response);

        self.active = Some(RevealJob {
            line: echo_line,
            reveal: TypingReveal::new(echo_chars, self.echo_speed_ms),
        });
        self.queued.push_back(RevealJob {
            line: response_line,
            reveal: TypingReveal::new(response_chars, self.response_speed_ms),
        });
        self.pending_record = Some(raw);
        self.state = SessionState::AwaitingReveal;
    }

    // --- animation ---

    /// Advance the in-flight reveal by `dt_ms`. No-op when idle.
    pub fn tick(&mut self, dt_ms: u32) {
        if self.state != SessionState::AwaitingReveal {
            return;
        }
        let Some(job) = self.active.as_mut() else {
            self.finish_reveal();
            return;
        };
        if job.reveal.tick(dt_ms) {
            // May no-op if scrollback trim evicted the line mid-reveal.
            self.scrollback.mark_revealed(job.line);
            self.active = self.queued.pop_front();
            if self.active.is_none() {
                self.finish_reveal();
            }
        }
    }

    /// Fast-forward the in-flight reveal: all pending lines become fully
    /// visible and the command is recorded as if the animation had run out.
    pub fn skip_reveal(&mut self) {
        if self.state != SessionState::AwaitingReveal {
            return;
        }
        if let Some(job) = self.active.take() {
            self.scrollback.mark_revealed(job.line);
        }
        while let Some(job) = self.queued.pop_front() {
            self.scrollback.mark_revealed(job.line);
        }
        self.finish_reveal();
    }

    fn finish_reveal(&mut self) {
        if let Some(raw) = self.pending_record.take() {
            self.history.record(&raw);
        }
        self.state = SessionState::Idle;
    }

    /// Abandon everything and return to the freshly started state: the
    /// scrollback shrinks to its permanent header, the viewer closes, and
    /// any in-flight reveal is cancelled without recording its command.
    /// Recorded history survives.
    pub fn reset(&mut self) {
        self.active = None;
        self.queued.clear();
        self.pending_record = None;
        self.scrollback.reset();
        self.viewer.hide();
        self.input.clear();
        self.completion.reset();
        self.history.stop_browsing();
        self.state = SessionState::Idle;
    }

    // --- history recall ---

    /// Replace the input with the previous history entry (Up arrow).
    pub fn recall_previous(&mut self) {
        if self.state != SessionState::Idle {
            return;
        }
        if let Some(entry) = self.history.recall_previous() {
            self.input = entry.to_string();
            self.completion.reset();
        }
    }

    /// Step toward the newest history entry (Down arrow). Stepping past the
    /// newest entry clears the input.
    pub fn recall_next(&mut self) {
        if self.state != SessionState::Idle {
            return;
        }
        match self.history.recall_next() {
            Some(Recall::Entry(entry)) => self.input = entry.to_string(),
            Some(Recall::Clear) => self.input.clear(),
            None => return,
        }
        self.completion.reset();
    }

    // --- tab completion ---

    /// Complete the input against command names, cycling on repeat presses.
    pub fn complete(&mut self) {
        if self.state != SessionState::Idle {
            return;
        }
        if let Some(candidate) = self.completion.advance(&self.input, &self.registry) {
            self.input = candidate;
        }
    }

    // --- views into the session ---

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True while a reveal locks the prompt.
    pub fn is_busy(&self) -> bool {
        self.state == SessionState::AwaitingReveal
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn viewer(&self) -> &CertificateViewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut CertificateViewer {
        &mut self.viewer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// How many characters of `line` are currently visible.
    ///
    /// Revealed lines show everything; the animating line shows its partial
    /// count; queued lines show nothing yet.
    pub fn visible_chars(&self, line: &Line) -> usize {
        if line.revealed {
            return line.rich.char_len();
        }
        match &self.active {
            Some(job) if job.line == line.id() => job.reveal.revealed_chars(),
            _ => 0,
        }
    }
}
