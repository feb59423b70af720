//! A tiny `git` front-end. Run with `RUST_LOG=cmdspec=debug` to watch the
//! parser classify each token.

use cmdspec::{Command, CommandSpec, OperandSpec, OptionSpec, TracingSink};
use tracing_subscriber::EnvFilter;

fn spec() -> cmdspec::Result<CommandSpec> {
    let add = CommandSpec::new("add")
        .description("Add file contents to the index.")
        .option(OptionSpec::new("force").short('f').long("force").flag())?
        .operand(OperandSpec::new(0).name("pathspec").required().variadic())?;
    let commit = CommandSpec::new("commit")
        .description("Record changes to the repository.")
        .option(
            OptionSpec::new("message")
                .short('m')
                .long("message")
                .repeatable()
                .required()
                .description("Use the given <message> as the commit message."),
        )?
        .option(OptionSpec::new("all").short('a').long("all").flag())?;
    CommandSpec::new("git")
        .description("The stupid content tracker.")
        .option(OptionSpec::new("dir").short('C').description("Run as if started in <dir>."))?
        .option(OptionSpec::new("help").short('h').long("help").flag())?
        .subcommand(add)?
        .subcommand(commit)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let spec = spec().unwrap_or_else(|err| err.exit());
    let cmd = cmdspec::Parser::new().sink(&TracingSink).parse_env_or_exit(&spec);
    if cmd.has_option("help") {
        print!("{}", spec.help());
        return;
    }
    print(&cmd, 0);
}

fn print(cmd: &Command, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{indent}{}", cmd.name);
    for opt in &cmd.options {
        println!("{indent}  --{} {:?}", opt.name, opt.values);
    }
    for operand in &cmd.operands {
        let name = operand.name.as_deref().unwrap_or("-");
        println!("{indent}  {name} = {:?}", operand.value.as_slice());
    }
    for sub in &cmd.subcommands {
        print(sub, depth + 1);
    }
}
