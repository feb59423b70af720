use std::{fmt, process};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An operand addressed either by its declared name or, for unnamed
/// operands, by its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandRef {
    Name(String),
    Index(usize),
}

impl fmt::Display for OperandRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandRef::Name(name) => fmt::Display::fmt(name, f),
            OperandRef::Index(index) => fmt::Display::fmt(index, f),
        }
    }
}

/// Everything that can go wrong while building a [`CommandSpec`] or parsing
/// tokens against one.
///
/// `command` fields hold the space separated path of the command that
/// failed, root first. Errors raised inside a sub-command are re-raised by
/// the enclosing level with its name prepended, see [`Error::nested_in`].
///
/// [`CommandSpec`]: crate::CommandSpec
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid command specifications{}", details(.0))]
    InvalidCommandSpecs(Option<String>),

    #[error("Invalid utf8 in argument {0}")]
    InvalidUtf8(String),

    #[error("Unknown option '{option}' for command '{command}'")]
    OptionNotFound { option: String, command: String },

    #[error("Missing argument for option '{option}' of command '{command}'.")]
    MissingOptionArgument { command: String, option: String },

    #[error("Option '{option}' cannot be repeated in command '{command}'.")]
    OptionRepetitionDenied { command: String, option: String },

    #[error("Missing required option '{option}' for command '{command}'.")]
    MissingRequiredOption { command: String, option: String },

    #[error("Missing required operand '{operand}' for command '{command}'.")]
    MissingRequiredOperand { command: String, operand: OperandRef },

    #[error(
        "The option token '{token}' is already defined for option '{option}'{}",
        in_command(.command)
    )]
    OptionTokenAlreadyDefined { token: String, option: String, command: Option<String> },

    #[error("The command '{command}' is already defined in the command '{parent}'")]
    CommandAlreadyDefined { command: String, parent: String },

    #[error("The operand '{operand}' is already defined in the command '{command}'")]
    OperandAlreadyDefined { operand: OperandRef, command: String },

    #[error("The option '{option}' is already defined in the command '{command}'")]
    OptionAlreadyDefined { option: String, command: String },

    #[error("The variadic operand '{operand}' must be the last operand of the command '{command}'")]
    VariadicOperandNotLast { operand: OperandRef, command: String },
}

fn details(description: &Option<String>) -> String {
    description.as_ref().map(|it| format!(": {it}")).unwrap_or_default()
}

fn in_command(command: &Option<String>) -> String {
    command.as_ref().map(|it| format!(" in command '{it}'")).unwrap_or_default()
}

impl Error {
    /// Re-annotates an error raised while parsing the sub-command of
    /// `parent`, so that its command path starts at `parent`.
    ///
    /// Only parse-time errors carry a path; construction-time errors are
    /// returned unchanged.
    pub fn nested_in(self, parent: &str) -> Error {
        let path = |command: String| format!("{parent} {command}");
        match self {
            Error::OptionNotFound { option, command } => {
                Error::OptionNotFound { option, command: path(command) }
            }
            Error::MissingOptionArgument { command, option } => {
                Error::MissingOptionArgument { command: path(command), option }
            }
            Error::OptionRepetitionDenied { command, option } => {
                Error::OptionRepetitionDenied { command: path(command), option }
            }
            Error::MissingRequiredOption { command, option } => {
                Error::MissingRequiredOption { command: path(command), option }
            }
            Error::MissingRequiredOperand { command, operand } => {
                Error::MissingRequiredOperand { command: path(command), operand }
            }
            Error::OptionTokenAlreadyDefined { token, option, command } => {
                Error::OptionTokenAlreadyDefined { token, option, command: command.map(path) }
            }
            it => it,
        }
    }

    /// Whether this error was raised by parsing, as opposed to building a
    /// specification.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCommandSpecs(_)
                | Error::InvalidUtf8(_)
                | Error::OptionNotFound { .. }
                | Error::MissingOptionArgument { .. }
                | Error::OptionRepetitionDenied { .. }
                | Error::MissingRequiredOption { .. }
                | Error::MissingRequiredOperand { .. }
                | Error::OptionTokenAlreadyDefined { command: Some(_), .. }
        )
    }

    /// The command path this error refers to, if it has one.
    pub fn command(&self) -> Option<&str> {
        match self {
            Error::InvalidCommandSpecs(_) | Error::InvalidUtf8(_) => None,
            Error::OptionNotFound { command, .. }
            | Error::MissingOptionArgument { command, .. }
            | Error::OptionRepetitionDenied { command, .. }
            | Error::MissingRequiredOption { command, .. }
            | Error::MissingRequiredOperand { command, .. }
            | Error::OperandAlreadyDefined { command, .. }
            | Error::OptionAlreadyDefined { command, .. }
            | Error::VariadicOperandNotLast { command, .. } => Some(command),
            Error::CommandAlreadyDefined { parent, .. } => Some(parent),
            Error::OptionTokenAlreadyDefined { command, .. } => command.as_deref(),
        }
    }

    /// Prints the error to stderr and exits the process with status 2.
    pub fn exit(self) -> ! {
        eprintln!("{self}");
        process::exit(2)
    }
}
