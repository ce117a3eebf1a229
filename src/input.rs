//! Line-oriented input surface.
//!
//! Each stdin line is either a `:`-prefixed command or text typed into the
//! authoring buffer.

use std::fmt;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Append a line to the authoring buffer.
    Type(String),
    Send,
    Clear,
    Language(String),
    Copy(usize),
    /// Ask to delete every clip; needs a `:yes` before anything is sent.
    Flush,
    /// Delete every clip without asking (`:flush!` or a confirmed `:flush`).
    FlushConfirmed,
    Yes,
    No,
    Refresh,
    Scroll(u32),
    Focus,
    WhoAmI,
    Help,
    Quit,
    Invalid(InvalidInput),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    UnknownCommand(String),
    MissingArgument(&'static str),
    BadNumber(String),
    NothingToConfirm,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::UnknownCommand(cmd) => write!(f, "unknown command :{cmd}, try :help"),
            InvalidInput::MissingArgument(cmd) => write!(f, ":{cmd} needs an argument"),
            InvalidInput::BadNumber(raw) => write!(f, "not a number: {raw}"),
            InvalidInput::NothingToConfirm => write!(f, "nothing to confirm"),
        }
    }
}

pub const HELP: &str = "\
:send            publish the authoring buffer
:clear           empty the authoring buffer
:lang <tag>      switch the authoring language
:copy <n>        copy clip n (0-based) to the clipboard
:flush           delete every clip (privileged), asks :yes / :no first
:flush!          delete every clip without asking
:refresh         pull the feed now
:scroll <px>     report a feed scroll offset
:focus           focus the authoring panel
:whoami          print the display name
:quit            exit
anything else    is typed into the authoring buffer";

impl InputCommand {
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.strip_prefix(':') else {
            return InputCommand::Type(line.to_string());
        };
        // `::` escapes a literal leading colon.
        if rest.starts_with(':') {
            return InputCommand::Type(rest.to_string());
        }

        let mut parts = rest.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match name {
            "send" => InputCommand::Send,
            "clear" => InputCommand::Clear,
            "lang" => match arg {
                Some(tag) => InputCommand::Language(tag.to_string()),
                None => InputCommand::Invalid(InvalidInput::MissingArgument("lang")),
            },
            "copy" => parse_number(arg, "copy").map_or_else(InputCommand::Invalid, InputCommand::Copy),
            "scroll" => {
                parse_number(arg, "scroll").map_or_else(InputCommand::Invalid, InputCommand::Scroll)
            }
            "flush" => InputCommand::Flush,
            "flush!" => InputCommand::FlushConfirmed,
            "yes" | "y" => InputCommand::Yes,
            "no" | "n" => InputCommand::No,
            "refresh" => InputCommand::Refresh,
            "focus" => InputCommand::Focus,
            "whoami" => InputCommand::WhoAmI,
            "help" => InputCommand::Help,
            "quit" | "q" => InputCommand::Quit,
            other => InputCommand::Invalid(InvalidInput::UnknownCommand(other.to_string())),
        }
    }
}

/// Pending yes/no question for a destructive command.
#[derive(Debug, Default)]
pub struct Confirmation {
    pending_flush: bool,
}

impl Confirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending_flush
    }

    /// Fold an answer into the command it answers.
    ///
    /// `:yes` after `:flush` becomes [`InputCommand::FlushConfirmed`]; any
    /// other command drops the question.
    pub fn resolve(&mut self, command: InputCommand) -> InputCommand {
        let pending = std::mem::take(&mut self.pending_flush);
        match command {
            InputCommand::Flush => {
                self.pending_flush = true;
                InputCommand::Flush
            }
            InputCommand::Yes if pending => InputCommand::FlushConfirmed,
            InputCommand::Yes | InputCommand::No if !pending => {
                InputCommand::Invalid(InvalidInput::NothingToConfirm)
            }
            other => other,
        }
    }
}

fn parse_number<T: std::str::FromStr>(
    arg: Option<&str>,
    command: &'static str,
) -> Result<T, InvalidInput> {
    let raw = arg.ok_or(InvalidInput::MissingArgument(command))?;
    raw.parse()
        .map_err(|_| InvalidInput::BadNumber(raw.to_string()))
}
