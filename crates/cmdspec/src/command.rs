//! Parsed command lines.

/// An option as it appeared on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opt {
    pub name: String,
    /// One entry per occurrence that carried a value, in encounter order.
    /// Always empty for flags.
    pub values: Vec<String>,
    /// How many times the option was given, with or without a value.
    pub occurrences: usize,
}

impl Opt {
    pub(crate) fn new(name: &str) -> Opt {
        Opt { name: name.to_string(), values: Vec::new(), occurrences: 0 }
    }

    /// The last value given, which is the only one for non-repeatable
    /// options.
    pub fn value(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Single(String),
    /// Everything absorbed by a variadic operand.
    Many(Vec<String>),
}

impl Value {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Value::Single(it) => std::slice::from_ref(it),
            Value::Many(it) => it,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub value: Value,
    /// Position of the first token of this operand among the operands of
    /// its command.
    pub index: usize,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    /// Unique by name, ordered by first occurrence.
    pub options: Vec<Opt>,
    pub operands: Vec<Operand>,
    pub subcommands: Vec<Command>,
}

impl Command {
    pub fn option(&self, name: &str) -> Option<&Opt> {
        self.options.iter().find(|it| it.name == name)
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.option(name).is_some()
    }

    pub fn operand(&self, index: usize) -> Option<&Operand> {
        self.operands.iter().find(|it| it.index == index)
    }

    pub fn operand_by_name(&self, name: &str) -> Option<&Operand> {
        self.operands.iter().find(|it| it.name.as_deref() == Some(name))
    }

    /// The sub-command that was invoked, if any.
    pub fn subcommand(&self) -> Option<&Command> {
        self.subcommands.first()
    }
}
