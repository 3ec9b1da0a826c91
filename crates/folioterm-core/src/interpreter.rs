//! Command trait, registry, and dispatch logic.
//!
//! The interpreter is pure and total: one raw input line in, one
//! [`CommandOutput`] out. Every failure mode is a textual response -- unknown
//! names, bad project indices, and empty input never become errors, and
//! dispatch never mutates anything outside the registry.

use log::debug;

use crate::richtext::RichText;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Plain text block. Hyperlinks are scanned when it becomes a line.
    Text(String),
    /// Certification rich text; its action runs open the certificate viewer,
    /// and the viewer panel is shown alongside the reveal.
    Certifications(RichText),
    /// Command produced no visible output (blank input).
    None,
    /// Signal to reset the scrollback to the permanent header.
    Clear,
}

/// A single executable command.
///
/// Deliberately small: the help text is a fixed block, so there is no
/// per-command description or usage surface to implement.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// Execute with lower-cased, whitespace-split arguments. Total: commands
    /// answer bad arguments with text, never with errors.
    fn execute(&self, args: &[&str]) -> CommandOutput;
}

/// Registry of available commands with dispatch.
///
/// Commands are kept in registration order; completion candidates follow
/// that order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name,
    /// keeping the original position.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        if let Some(slot) = self
            .commands
            .iter_mut()
            .find(|existing| existing.name() == cmd.name())
        {
            *slot = cmd;
        } else {
            self.commands.push(cmd);
        }
    }

    /// Look up a command by exact name.
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|cmd| cmd.name() == name)
            .map(|cmd| cmd.as_ref())
    }

    /// All command names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|cmd| cmd.name()).collect()
    }

    /// Command names matching a case-insensitive prefix, in registration
    /// order. An empty prefix matches everything.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        let prefix = partial.to_lowercase();
        self.commands
            .iter()
            .filter(|cmd| cmd.name().starts_with(&prefix))
            .map(|cmd| cmd.name().to_string())
            .collect()
    }

    /// Interpret one raw input line.
    ///
    /// Blank input produces [`CommandOutput::None`]. Otherwise the line is
    /// lower-cased and whitespace-split; the first token selects the command
    /// and the rest become its arguments. Unknown names produce the
    /// not-found text with the raw line reproduced verbatim.
    pub fn interpret(&self, raw: &str) -> CommandOutput {
        if raw.trim().is_empty() {
            return CommandOutput::None;
        }
        let lowered = raw.to_lowercase();
        let mut tokens = lowered.split_whitespace();
        let Some(name) = tokens.next() else {
            return CommandOutput::None;
        };
        let args: Vec<&str> = tokens.collect();
        match self.find(name) {
            Some(cmd) => {
                debug!("dispatch: {name} ({} args)", args.len());
                cmd.execute(&args)
            }
            None => {
                debug!("unknown command: {name}");
                CommandOutput::Text(format!(
                    "Command not found: {raw}. Type \"help\" to see available commands."
                ))
            }
        }
    }
}
