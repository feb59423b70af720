use std::ffi::OsString;

use crate::{
    sink::{Fields, NoopSink, Sink},
    spec::{OptionSpec, TokenKind},
    validate, Command, CommandSpec, Error, Operand, Opt, Result, Value,
};

/// Parses `tokens` against `spec` without reporting diagnostics.
///
/// `tokens[0]` must be the name of `spec`. An empty sequence parses to
/// `None`.
pub fn parse<I>(tokens: I, spec: &CommandSpec) -> Result<Option<Command>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Parser::new().parse(tokens, spec)
}

/// Parser configuration. Holds no state between parses, so one value can be
/// shared freely.
#[derive(Clone, Copy)]
pub struct Parser<'a> {
    sink: &'a dyn Sink,
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Parser { sink: &NoopSink }
    }
}

impl Parser<'static> {
    pub fn new() -> Self {
        Parser::default()
    }
}

impl<'a> Parser<'a> {
    /// Reports diagnostic events to `sink`.
    pub fn sink<'b>(self, sink: &'b dyn Sink) -> Parser<'b> {
        Parser { sink }
    }

    pub fn parse<I>(&self, tokens: I, spec: &CommandSpec) -> Result<Option<Command>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = Args::new(tokens.into_iter().map(Into::into).collect());
        if args.is_empty() {
            return Ok(None);
        }
        self.parse_args(&mut args, spec).map(Some)
    }

    /// Like [`Parser::parse`], for tokens that may not be valid UTF-8.
    pub fn parse_os<I>(&self, tokens: I, spec: &CommandSpec) -> Result<Option<Command>>
    where
        I: IntoIterator<Item = OsString>,
    {
        self.parse(utf8_tokens(tokens)?, spec)
    }

    /// Parses the arguments of the current process. The program name is
    /// replaced by the name of `spec`.
    pub fn parse_env(&self, spec: &CommandSpec) -> Result<Command> {
        let mut args = utf8_tokens(std::env::args_os().skip(1))?;
        args.insert(0, spec.name.clone());
        self.parse_args(&mut Args::new(args), spec)
    }

    pub fn parse_env_or_exit(&self, spec: &CommandSpec) -> Command {
        self.parse_env(spec).unwrap_or_else(|err| err.exit())
    }

    fn parse_args(&self, args: &mut Args, spec: &CommandSpec) -> Result<Command> {
        let res = self.parse_command(args, spec);
        if let Err(err) = &res {
            self.sink.error("cmdspec::parser::parse", &|| {
                vec![("command", spec.name.clone()), ("error", err.to_string())]
            });
        }
        res
    }

    fn parse_command(&self, args: &mut Args, spec: &CommandSpec) -> Result<Command> {
        let name = args.next().unwrap_or_default();
        if name != spec.name {
            return Err(Error::InvalidCommandSpecs(Some(format!("Invalid command name: {name}"))));
        }
        self.sink.info("cmdspec::parser::parse", &|| {
            vec![("command", spec.name.clone()), ("tokens", args.len().to_string())]
        });

        spec.validate()?;

        let mut st = State::default();
        while let Some(token) = args.next() {
            if token.is_empty() {
                continue;
            }
            if st.treat_all_as_operands {
                self.classified(spec, &token, "operand");
                st.push_operand(spec, token);
                continue;
            }
            if token == "--" {
                self.classified(spec, &token, "terminator");
                st.treat_all_as_operands = true;
                continue;
            }
            if let Some((option, _)) = st.pending.take() {
                self.classified(spec, &token, "value");
                st.add_value(option, token);
                continue;
            }
            if let Some(long) = token.strip_prefix("--") {
                self.classified(spec, &token, "long");
                self.parse_long(&mut st, spec, long)?;
                continue;
            }
            if let Some(run) = token.strip_prefix('-').filter(|it| !it.is_empty()) {
                self.classified(spec, &token, "short");
                self.parse_short(&mut st, spec, run)?;
                continue;
            }
            if st.accepts_subcommand {
                if let Some(sub) = spec.find_subcommand(&token) {
                    self.classified(spec, &token, "subcommand");
                    args.push_back(token);
                    let cmd = self.parse_args(args, sub).map_err(|err| err.nested_in(&spec.name))?;
                    st.subcommands.push(cmd);
                    break;
                }
            }
            self.classified(spec, &token, "operand");
            st.push_operand(spec, token);
        }

        if let Some((_, token)) = st.pending {
            return Err(Error::MissingOptionArgument { command: spec.name.clone(), option: token });
        }

        let cmd = Command {
            name: spec.name.clone(),
            options: st.options,
            operands: st.operands,
            subcommands: st.subcommands,
        };
        validate::check_result(spec, &cmd)?;

        self.sink.info("cmdspec::parser::parse", &|| {
            vec![
                ("command", spec.name.clone()),
                ("options", cmd.options.len().to_string()),
                ("operands", cmd.operands.len().to_string()),
            ]
        });
        Ok(cmd)
    }

    /// `-abc`, `-ovalue`, `-o value`.
    fn parse_short<'s>(
        &self,
        st: &mut State<'s>,
        spec: &'s CommandSpec,
        run: &str,
    ) -> Result<()> {
        for (i, c) in run.char_indices() {
            let mut buf = [0; 4];
            let option = spec.find_option(c.encode_utf8(&mut buf), TokenKind::Short).ok_or_else(
                || Error::OptionNotFound { option: format!("-{c}"), command: spec.name.clone() },
            )?;
            st.check_repetition(spec, option)?;

            if option.flag {
                st.add_flag(option);
                continue;
            }

            let value = &run[i + c.len_utf8()..];
            if value.is_empty() {
                st.pending = Some((option, format!("-{c}")));
            } else {
                st.add_value(option, value.to_string());
            }
            break;
        }
        Ok(())
    }

    /// `--name`, `--name=value`.
    fn parse_long<'s>(&self, st: &mut State<'s>, spec: &'s CommandSpec, body: &str) -> Result<()> {
        let (name, value) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        let option = spec.find_option(name, TokenKind::Long).ok_or_else(|| {
            Error::OptionNotFound { option: format!("--{name}"), command: spec.name.clone() }
        })?;
        st.check_repetition(spec, option)?;

        if option.flag {
            if let Some(value) = value {
                self.sink.warn("cmdspec::parser::parse_long", &|| {
                    vec![
                        ("command", spec.name.clone()),
                        ("option", option.name.clone()),
                        ("discarded", value.to_string()),
                    ]
                });
            }
            st.add_flag(option);
            return Ok(());
        }

        match value {
            Some(value) => st.add_value(option, value.to_string()),
            None => {
                return Err(Error::MissingOptionArgument {
                    command: spec.name.clone(),
                    option: format!("--{name}"),
                })
            }
        }
        Ok(())
    }

    fn classified(&self, spec: &CommandSpec, token: &str, class: &'static str) {
        self.sink.debug("cmdspec::parser::classify", &|| -> Fields {
            vec![
                ("command", spec.name.clone()),
                ("token", token.to_string()),
                ("class", class.to_string()),
            ]
        });
    }
}

fn utf8_tokens<I>(tokens: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    tokens
        .into_iter()
        .map(|it| it.into_string().map_err(|it| Error::InvalidUtf8(format!("{it:?}"))))
        .collect()
}

/// Scratch state of one command level.
struct State<'s> {
    treat_all_as_operands: bool,
    /// A short option waiting for its value in the next token, with the
    /// token that introduced it.
    pending: Option<(&'s OptionSpec, String)>,
    options: Vec<Opt>,
    operands: Vec<Operand>,
    accepts_subcommand: bool,
    subcommands: Vec<Command>,
}

impl Default for State<'_> {
    fn default() -> Self {
        State {
            treat_all_as_operands: false,
            pending: None,
            options: Vec::new(),
            operands: Vec::new(),
            accepts_subcommand: true,
            subcommands: Vec::new(),
        }
    }
}

impl State<'_> {
    fn check_repetition(&self, spec: &CommandSpec, option: &OptionSpec) -> Result<()> {
        if !option.repeatable && self.options.iter().any(|it| it.name == option.name) {
            return Err(Error::OptionRepetitionDenied {
                command: spec.name.clone(),
                option: option.name.clone(),
            });
        }
        Ok(())
    }

    fn opt(&mut self, option: &OptionSpec) -> &mut Opt {
        let idx = match self.options.iter().position(|it| it.name == option.name) {
            Some(idx) => idx,
            None => {
                self.options.push(Opt::new(&option.name));
                self.options.len() - 1
            }
        };
        &mut self.options[idx]
    }

    fn add_flag(&mut self, option: &OptionSpec) {
        self.opt(option).occurrences += 1;
    }

    fn add_value(&mut self, option: &OptionSpec, value: String) {
        let opt = self.opt(option);
        opt.values.push(value);
        opt.occurrences += 1;
    }

    fn push_operand(&mut self, spec: &CommandSpec, token: String) {
        self.accepts_subcommand = false;
        if let Some(Operand { value: Value::Many(values), .. }) = self.operands.last_mut() {
            values.push(token);
            return;
        }

        let index = self.operands.len();
        let operand = spec.operand_at(index);
        let value = match operand {
            Some(it) if it.variadic => Value::Many(vec![token]),
            _ => Value::Single(token),
        };
        let name = operand.and_then(|it| it.name.clone());
        self.operands.push(Operand { value, index, name });
    }
}

/// Remaining tokens, last one first.
struct Args {
    rargs: Vec<String>,
}

impl Args {
    fn new(mut args: Vec<String>) -> Self {
        args.reverse();
        Self { rargs: args }
    }

    fn is_empty(&self) -> bool {
        self.rargs.is_empty()
    }

    fn len(&self) -> usize {
        self.rargs.len()
    }

    fn next(&mut self) -> Option<String> {
        self.rargs.pop()
    }

    fn push_back(&mut self, arg: String) {
        self.rargs.push(arg)
    }
}
