//! Tool info dumps of clap command trees.
//!
//! Produces the same version 0 document an argument parser would emit for
//! its own `--experimental-dump-help`, so a clap-based CLI can be fed through
//! the regular pipeline.

use clap::{Arg, ArgAction, Command, ValueHint};
use figspec_toolinfo::v0::{
    ArgumentInfoV0, ArgumentKind, CommandInfoV0, CompletionKindV0, NameInfoV0, ToolInfoV0,
};

/// Describe `cmd` (and all its subcommands) as a version 0 dump.
pub fn tool_info(cmd: &Command) -> ToolInfoV0 {
    let mut cmd = cmd.clone();
    // Materializes the generated help/version flags and help subcommand.
    cmd.build();
    ToolInfoV0::new(command_info(&cmd, &[]))
}

fn command_info(cmd: &Command, parents: &[String]) -> CommandInfoV0 {
    let mut path = parents.to_vec();
    path.push(cmd.get_name().to_string());

    let arguments: Vec<ArgumentInfoV0> = cmd.get_arguments().map(argument_info).collect();
    let subcommands: Vec<CommandInfoV0> = cmd
        .get_subcommands()
        .map(|sub| command_info(sub, &path))
        .collect();

    CommandInfoV0 {
        super_commands: (!parents.is_empty()).then(|| parents.to_vec()),
        command_name: cmd.get_name().to_string(),
        abstract_text: cmd.get_about().map(ToString::to_string),
        discussion: cmd.get_long_about().map(ToString::to_string),
        default_subcommand: None,
        subcommands: (!subcommands.is_empty()).then_some(subcommands),
        arguments: (!arguments.is_empty()).then_some(arguments),
    }
}

fn argument_info(arg: &Arg) -> ArgumentInfoV0 {
    let kind = if arg.is_positional() {
        ArgumentKind::Positional
    } else if matches!(arg.get_action(), ArgAction::Set | ArgAction::Append) {
        ArgumentKind::Option
    } else {
        ArgumentKind::Flag
    };

    let mut info = ArgumentInfoV0::new(kind);
    info.should_display = !arg.is_hide_set();
    info.is_optional = !arg.is_required_set();
    info.is_repeating = matches!(arg.get_action(), ArgAction::Append | ArgAction::Count)
        || arg.get_num_args().is_some_and(|range| range.max_values() > 1);
    info.value_name = Some(
        arg.get_value_names()
            .and_then(|names| names.first())
            .map(|name| name.as_str().to_string())
            .unwrap_or_else(|| arg.get_id().as_str().to_string()),
    );
    info.abstract_text = arg.get_help().map(ToString::to_string);
    info.discussion = arg.get_long_help().map(ToString::to_string);

    if kind != ArgumentKind::Positional {
        let (names, preferred) = names(arg);
        info.names = Some(names);
        info.preferred_name = preferred;
    }

    if kind != ArgumentKind::Flag {
        info.default_value = arg
            .get_default_values()
            .first()
            .and_then(|v| v.to_str())
            .map(str::to_owned);
        let values: Vec<String> = arg
            .get_possible_values()
            .iter()
            .filter(|v| !v.is_hide_set())
            .map(|v| v.get_name().to_string())
            .collect();
        info.all_values = (!values.is_empty()).then_some(values);
        info.completion_kind = completion_kind(arg.get_value_hint());
    }

    info
}

/// All spellings of a named argument, and the one to show first.
///
/// The long name is preferred when there is one.
fn names(arg: &Arg) -> (Vec<NameInfoV0>, Option<NameInfoV0>) {
    let mut names = Vec::new();
    if let Some(short) = arg.get_short() {
        names.push(NameInfoV0::short(short.to_string()));
    }
    for alias in arg.get_all_short_aliases().unwrap_or_default() {
        names.push(NameInfoV0::short(alias.to_string()));
    }
    let long = arg.get_long().map(NameInfoV0::long);
    names.extend(long.clone());
    for alias in arg.get_all_aliases().unwrap_or_default() {
        names.push(NameInfoV0::long(alias));
    }

    let preferred = long.or_else(|| names.first().cloned());
    (names, preferred)
}

fn completion_kind(hint: ValueHint) -> Option<CompletionKindV0> {
    match hint {
        ValueHint::AnyPath | ValueHint::FilePath | ValueHint::ExecutablePath => {
            Some(CompletionKindV0::File { extensions: vec![] })
        }
        ValueHint::DirPath => Some(CompletionKindV0::Directory {}),
        _ => None,
    }
}
