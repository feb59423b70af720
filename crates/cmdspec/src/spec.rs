//! Declarative description of a command: its options, operands and
//! sub-commands.
//!
//! A [`CommandSpec`] is assembled once and then only read by the parser.
//! Name and index clashes inside one level are rejected while building it;
//! clashes between the tokens of different options are left to
//! [`CommandSpec::validate`], which the parser runs before every level.

use std::fmt;

use crate::{Error, OperandRef, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `-x`, bundleable.
    Short,
    /// `--name`, optionally `--name=value`.
    Long,
}

impl TokenKind {
    pub fn prefix(self) -> &'static str {
        match self {
            TokenKind::Short => "-",
            TokenKind::Long => "--",
        }
    }
}

/// One spelling of an option on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionToken {
    pub literal: String,
    pub kind: TokenKind,
}

impl OptionToken {
    pub fn short(c: char) -> OptionToken {
        OptionToken { literal: c.to_string(), kind: TokenKind::Short }
    }

    pub fn long(name: impl Into<String>) -> OptionToken {
        OptionToken { literal: name.into(), kind: TokenKind::Long }
    }
}

impl fmt::Display for OptionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.literal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) tokens: Vec<OptionToken>,
    pub(crate) flag: bool,
    pub(crate) repeatable: bool,
    pub(crate) required: bool,
}

impl OptionSpec {
    /// A value-taking, optional, non-repeatable option without tokens.
    pub fn new(name: impl Into<String>) -> OptionSpec {
        OptionSpec {
            name: name.into(),
            description: None,
            tokens: Vec::new(),
            flag: false,
            repeatable: false,
            required: false,
        }
    }

    pub fn short(self, c: char) -> OptionSpec {
        self.token(OptionToken::short(c))
    }

    pub fn long(self, name: impl Into<String>) -> OptionSpec {
        self.token(OptionToken::long(name))
    }

    pub fn token(mut self, token: OptionToken) -> OptionSpec {
        self.tokens.push(token);
        self
    }

    /// Marks the option as taking no value.
    pub fn flag(mut self) -> OptionSpec {
        self.flag = true;
        self
    }

    pub fn repeatable(mut self) -> OptionSpec {
        self.repeatable = true;
        self
    }

    pub fn required(mut self) -> OptionSpec {
        self.required = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> OptionSpec {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tokens(&self) -> &[OptionToken] {
        &self.tokens
    }

    pub fn is_flag(&self) -> bool {
        self.flag
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn has_token(&self, literal: &str, kind: TokenKind) -> bool {
        self.tokens.iter().any(|it| it.kind == kind && it.literal == literal)
    }

    fn duplicate_token(&self) -> Option<&OptionToken> {
        self.tokens.iter().enumerate().find_map(|(i, token)| {
            self.tokens[..i].contains(token).then_some(token)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandSpec {
    pub(crate) index: usize,
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) required: bool,
    pub(crate) variadic: bool,
}

impl OperandSpec {
    pub fn new(index: usize) -> OperandSpec {
        OperandSpec { index, name: None, description: None, required: false, variadic: false }
    }

    pub fn name(mut self, name: impl Into<String>) -> OperandSpec {
        self.name = Some(name.into());
        self
    }

    pub fn required(mut self) -> OperandSpec {
        self.required = true;
        self
    }

    /// Absorbs every positional token from this index onward.
    pub fn variadic(mut self) -> OperandSpec {
        self.variadic = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> OperandSpec {
        self.description = Some(description.into());
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn operand_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn doc(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// The name if there is one, the index otherwise.
    pub fn reference(&self) -> OperandRef {
        match &self.name {
            Some(name) => OperandRef::Name(name.clone()),
            None => OperandRef::Index(self.index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) options: Vec<OptionSpec>,
    /// Sorted by index.
    pub(crate) operands: Vec<OperandSpec>,
    pub(crate) subcommands: Vec<CommandSpec>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> CommandSpec {
        CommandSpec {
            name: name.into(),
            description: None,
            options: Vec::new(),
            operands: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    /// Builds a command from all of its parts at once, checking each list
    /// the same way the incremental methods do.
    pub fn from_parts(
        name: impl Into<String>,
        description: Option<String>,
        options: Vec<OptionSpec>,
        operands: Vec<OperandSpec>,
        subcommands: Vec<CommandSpec>,
    ) -> Result<CommandSpec> {
        let mut res = CommandSpec::new(name);
        res.description = description;
        let res = options.into_iter().try_fold(res, CommandSpec::option)?;
        let res = operands.into_iter().try_fold(res, CommandSpec::operand)?;
        subcommands.into_iter().try_fold(res, CommandSpec::subcommand)
    }

    pub fn description(mut self, description: impl Into<String>) -> CommandSpec {
        self.description = Some(description.into());
        self
    }

    pub fn option(mut self, option: OptionSpec) -> Result<CommandSpec> {
        if self.option_named(&option.name).is_some() {
            return Err(Error::OptionAlreadyDefined {
                option: option.name,
                command: self.name,
            });
        }
        if let Some(token) = option.duplicate_token() {
            return Err(Error::OptionTokenAlreadyDefined {
                token: token.to_string(),
                option: option.name.clone(),
                command: None,
            });
        }
        self.options.push(option);
        Ok(self)
    }

    pub fn operand(mut self, operand: OperandSpec) -> Result<CommandSpec> {
        let clash = self.operands.iter().any(|it| it.index == operand.index);
        if clash {
            return Err(Error::OperandAlreadyDefined {
                operand: OperandRef::Index(operand.index),
                command: self.name,
            });
        }
        if let Some(name) = &operand.name {
            if self.operand_by_name(name).is_some() {
                return Err(Error::OperandAlreadyDefined {
                    operand: OperandRef::Name(name.clone()),
                    command: self.name,
                });
            }
        }

        let earlier_variadic =
            self.operands.iter().find(|it| it.variadic && it.index < operand.index);
        if let Some(variadic) = earlier_variadic {
            return Err(Error::VariadicOperandNotLast {
                operand: variadic.reference(),
                command: self.name,
            });
        }
        if operand.variadic && self.operands.iter().any(|it| it.index > operand.index) {
            return Err(Error::VariadicOperandNotLast {
                operand: operand.reference(),
                command: self.name,
            });
        }

        let at = self.operands.partition_point(|it| it.index < operand.index);
        self.operands.insert(at, operand);
        Ok(self)
    }

    pub fn subcommand(mut self, subcommand: CommandSpec) -> Result<CommandSpec> {
        if self.has_subcommand(&subcommand.name) {
            return Err(Error::CommandAlreadyDefined {
                command: subcommand.name,
                parent: self.name,
            });
        }
        self.subcommands.push(subcommand);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub fn operands(&self) -> &[OperandSpec] {
        &self.operands
    }

    pub fn subcommands(&self) -> &[CommandSpec] {
        &self.subcommands
    }

    pub fn find_option(&self, literal: &str, kind: TokenKind) -> Option<&OptionSpec> {
        self.options.iter().find(|it| it.has_token(literal, kind))
    }

    pub fn option_named(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|it| it.name == name)
    }

    pub fn operand_at(&self, index: usize) -> Option<&OperandSpec> {
        self.operands.iter().find(|it| it.index == index)
    }

    pub fn operand_by_name(&self, name: &str) -> Option<&OperandSpec> {
        self.operands.iter().find(|it| it.name.as_deref() == Some(name))
    }

    pub fn find_subcommand(&self, name: &str) -> Option<&CommandSpec> {
        self.subcommands.iter().find(|it| it.name == name)
    }

    pub fn has_subcommand(&self, name: &str) -> bool {
        self.find_subcommand(name).is_some()
    }

    /// Checks that no two options of this command share a token.
    ///
    /// Sub-commands are not visited; the parser validates each level when
    /// it gets there.
    pub fn validate(&self) -> Result<()> {
        crate::validate::check_spec(self)
    }

    /// Usage text for this command and everything below it.
    pub fn help(&self) -> String {
        crate::help::render(self)
    }
}
