use cmdspec::{CommandSpec, OperandSpec, OptionSpec};

pub(crate) fn spec() -> CommandSpec {
    CommandSpec::new("ra")
        .option(OptionSpec::new("verbose").short('v').long("verbose").flag().repeatable())
        .and_then(|it| it.option(OptionSpec::new("number").short('n').long("number").required()))
        .and_then(|it| it.option(OptionSpec::new("data").long("data").repeatable()))
        .and_then(|it| it.option(OptionSpec::new("log-file").long("log-file")))
        .and_then(|it| it.option(OptionSpec::new("emoji").long("emoji").flag()))
        .and_then(|it| it.option(OptionSpec::new("jobs").short('j')))
        .and_then(|it| it.operand(OperandSpec::new(0).name("workspace").required()))
        .unwrap()
}
