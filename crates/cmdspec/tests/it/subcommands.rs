use cmdspec::{CommandSpec, OperandSpec, OptionSpec};

pub(crate) fn spec() -> CommandSpec {
    let leaf = CommandSpec::new("leaf")
        .option(OptionSpec::new("out").short('o').long("out"))
        .and_then(|it| it.operand(OperandSpec::new(0).name("target").required()))
        .unwrap();
    let mid = CommandSpec::new("mid")
        .option(OptionSpec::new("dir").long("dir"))
        .and_then(|it| it.subcommand(leaf))
        .and_then(|it| it.subcommand(CommandSpec::new("watch")))
        .unwrap();
    let stats = CommandSpec::new("stats")
        .option(OptionSpec::new("parallel").long("parallel").flag())
        .and_then(|it| it.operand(OperandSpec::new(0).name("path").required()))
        .unwrap();
    CommandSpec::new("root")
        .option(OptionSpec::new("verbose").short('v').flag().repeatable())
        .and_then(|it| it.operand(OperandSpec::new(0).name("file")))
        .and_then(|it| it.subcommand(mid))
        .and_then(|it| it.subcommand(stats))
        .unwrap()
}

/// A valid root whose `bad` sub-command declares `-x` twice.
pub(crate) fn broken_spec() -> CommandSpec {
    let bad = CommandSpec::new("bad")
        .option(OptionSpec::new("first").short('x').flag())
        .and_then(|it| it.option(OptionSpec::new("second").long("second").short('x')))
        .unwrap();
    CommandSpec::new("root2").subcommand(bad).unwrap()
}
