use std::collections::HashMap;

use crate::{spec::OptionToken, Command, CommandSpec, Error, Result};

/// Rejects two options of `spec` declaring the same token.
pub(crate) fn check_spec(spec: &CommandSpec) -> Result<()> {
    let mut owners: HashMap<&OptionToken, &str> = HashMap::new();
    for option in &spec.options {
        for token in &option.tokens {
            match owners.get(token) {
                Some(&owner) if owner != option.name => {
                    return Err(Error::OptionTokenAlreadyDefined {
                        token: token.to_string(),
                        option: owner.to_string(),
                        command: Some(spec.name.clone()),
                    })
                }
                Some(_) => (),
                None => {
                    owners.insert(token, &option.name);
                }
            }
        }
    }
    Ok(())
}

/// Checks that everything `spec` requires made it into `cmd`.
///
/// Only this level is checked: sub-commands were validated when they were
/// parsed.
pub(crate) fn check_result(spec: &CommandSpec, cmd: &Command) -> Result<()> {
    if let Some(option) = spec.options.iter().find(|it| it.required && !cmd.has_option(&it.name)) {
        return Err(Error::MissingRequiredOption {
            command: spec.name.clone(),
            option: option.name.clone(),
        });
    }
    if let Some(operand) =
        spec.operands.iter().find(|it| it.required && cmd.operand(it.index).is_none())
    {
        return Err(Error::MissingRequiredOperand {
            command: spec.name.clone(),
            operand: operand.reference(),
        });
    }
    Ok(())
}
