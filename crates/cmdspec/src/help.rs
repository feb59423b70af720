use std::fmt::Write;

use crate::{CommandSpec, OperandSpec, OptionSpec};

macro_rules! w {
    ($($tt:tt)*) => {{
        let _ = write!($($tt)*);
    }};
}

pub(crate) fn render(spec: &CommandSpec) -> String {
    let mut buf = String::new();
    help_rec(&mut buf, "", spec);
    buf
}

fn help_rec(buf: &mut String, prefix: &str, spec: &CommandSpec) {
    w!(buf, "{}{}\n", prefix, spec.name);
    describe(buf, spec.description.as_deref(), 2);
    let indent = if prefix.is_empty() { "" } else { "  " };

    if !spec.operands.is_empty() {
        buf.push('\n');
        w!(buf, "{indent}ARGS:\n");

        let mut blank = "";
        for operand in &spec.operands {
            w!(buf, "{blank}");
            blank = "\n";

            w!(buf, "    {}\n", operand_usage(operand));
            describe(buf, operand.description.as_deref(), 6);
        }
    }

    if !spec.options.is_empty() {
        buf.push('\n');
        w!(buf, "{indent}OPTIONS:\n");

        let mut blank = "";
        for option in &spec.options {
            w!(buf, "{blank}");
            blank = "\n";

            w!(buf, "    {}\n", option_usage(option));
            describe(buf, option.description.as_deref(), 6);
        }
    }

    if !spec.subcommands.is_empty() {
        if prefix.is_empty() {
            buf.push('\n');
            w!(buf, "SUBCOMMANDS:");
        }

        let prefix = format!("{}{} ", prefix, spec.name);
        for sub in &spec.subcommands {
            buf.push_str("\n\n");
            help_rec(buf, &prefix, sub);
        }
    }
}

fn operand_usage(operand: &OperandSpec) -> String {
    let name = match &operand.name {
        Some(name) => name.clone(),
        None => operand.index.to_string(),
    };
    let (l, r) = match (operand.required, operand.variadic) {
        (true, false) => ("<", ">"),
        (false, false) => ("[", "]"),
        (true, true) => ("<", ">..."),
        (false, true) => ("[", "]..."),
    };
    format!("{l}{name}{r}")
}

fn option_usage(option: &OptionSpec) -> String {
    let mut res = option.tokens.iter().map(|it| it.to_string()).collect::<Vec<_>>().join(", ");
    if res.is_empty() {
        res = option.name.clone();
    }
    if !option.flag {
        w!(res, " <{}>", option.name);
    }
    if option.repeatable {
        res.push_str("...");
    }
    res
}

/// Writes a description under its entry. Blank lines stay unindented.
fn describe(buf: &mut String, description: Option<&str>, indent: usize) {
    for line in description.into_iter().flat_map(str::lines).map(str::trim_end) {
        let pad = if line.is_empty() { 0 } else { indent };
        w!(buf, "{:pad$}{line}\n", "");
    }
}
