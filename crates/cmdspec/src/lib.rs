//! Parses command line tokens against a declarative command specification.
//!
//! Describe a command with [`CommandSpec`], [`OptionSpec`] and
//! [`OperandSpec`], then hand the tokens (command name first) to [`parse`]:
//!
//! ```
//! use cmdspec::{CommandSpec, OperandSpec, OptionSpec};
//!
//! let spec = CommandSpec::new("cp")
//!     .option(OptionSpec::new("recursive").short('r').long("recursive").flag())?
//!     .operand(OperandSpec::new(0).name("src").required())?
//!     .operand(OperandSpec::new(1).name("dst").required())?;
//!
//! let cmd = cmdspec::parse(["cp", "-r", "a", "b"], &spec)?.unwrap();
//! assert!(cmd.has_option("recursive"));
//! assert_eq!(cmd.operand_by_name("dst").unwrap().value.as_slice(), ["b"]);
//! # Ok::<(), cmdspec::Error>(())
//! ```
//!
//! Short options bundle (`-rf`) and take their value either inline (`-ofile`)
//! or from the next token (`-o file`). Long options take theirs after `=`
//! (`--output=file`). Everything after `--` is an operand. A token naming a
//! sub-command, seen before any operand, hands the rest of the tokens to that
//! sub-command.
//!
//! To see what the parser is doing, give it a [`Sink`], for example
//! [`TracingSink`]:
//!
//! ```
//! # let spec = cmdspec::CommandSpec::new("true");
//! let parser = cmdspec::Parser::new().sink(&cmdspec::TracingSink);
//! let _cmd = parser.parse(["true"], &spec)?;
//! # Ok::<(), cmdspec::Error>(())
//! ```

mod command;
mod error;
mod help;
mod parser;
mod sink;
mod spec;
mod validate;

pub use crate::{
    command::{Command, Operand, Opt, Value},
    error::{Error, OperandRef, Result},
    parser::{parse, Parser},
    sink::{Fields, Level, NoopSink, Sink, TracingSink},
    spec::{CommandSpec, OperandSpec, OptionSpec, OptionToken, TokenKind},
};
