//! Version 0 tool info to completion spec.

use super::{ArgumentInfoV0, ArgumentKind, CommandInfoV0, CompletionKindV0, NameInfoV0, ToolInfoV0};
use figspec_schema::{Argument, CliOption, RepeatCount, Spec, Subcommand, Template, non_empty};

impl From<ToolInfoV0> for Spec {
    fn from(info: ToolInfoV0) -> Self {
        Spec::new(info.command.into())
    }
}

impl From<CommandInfoV0> for Subcommand {
    fn from(command: CommandInfoV0) -> Self {
        let (positionals, named): (Vec<_>, Vec<_>) = command
            .arguments
            .unwrap_or_default()
            .into_iter()
            .partition(|a| a.kind == ArgumentKind::Positional);

        let mut subcommand = Subcommand::new(command.command_name);
        subcommand.subcommands = command
            .subcommands
            .map(|children| children.into_iter().map(Subcommand::from).collect())
            .and_then(non_empty);
        subcommand.options = non_empty(named.into_iter().map(CliOption::from).collect());
        subcommand.arguments = non_empty(positionals.into_iter().map(Argument::from).collect());
        subcommand.presentation.description = command.abstract_text;
        subcommand
    }
}

/// Positional arguments.
impl From<ArgumentInfoV0> for Argument {
    fn from(info: ArgumentInfoV0) -> Self {
        let mut argument = Argument {
            name: info.value_name,
            description: info.abstract_text,
            default: info.default_value,
            is_variadic: info.is_repeating,
            is_optional: info.is_optional,
            ..Default::default()
        };
        apply_completion(&mut argument, info.completion_kind, info.all_values);
        argument
    }
}

/// Flags and options.
impl From<ArgumentInfoV0> for CliOption {
    fn from(info: ArgumentInfoV0) -> Self {
        let mut names: Vec<String> =
            info.names.iter().flatten().map(NameInfoV0::formatted).collect();
        if names.is_empty() && info.preferred_name.is_none() {
            // An option needs at least one name; derive a long one from the value.
            names.extend(info.value_name.as_deref().map(|name| format!("--{name}")));
        }

        // `isRequired` stays unset: `isOptional` is not reliable for options.
        let mut option = CliOption::new(names);
        option.repeat_count = info.is_repeating.then_some(RepeatCount::Infinite);
        option.presentation.description = help_text(info.abstract_text, info.discussion);
        option.presentation.is_hidden = !info.should_display;

        if let Some(preferred) = &info.preferred_name {
            option = option.with_preferred_name(&preferred.formatted());
        }

        if info.kind == ArgumentKind::Option {
            let mut value = Argument {
                name: info.value_name,
                default: info.default_value,
                ..Default::default()
            };
            apply_completion(&mut value, info.completion_kind, info.all_values);
            option.arguments = Some(vec![value]);
        }
        option
    }
}

fn help_text(abstract_text: Option<String>, discussion: Option<String>) -> Option<String> {
    match abstract_text {
        Some(text) if !text.is_empty() => Some(text),
        _ => discussion,
    }
}

fn apply_completion(
    argument: &mut Argument,
    completion: Option<CompletionKindV0>,
    all_values: Option<Vec<String>>,
) {
    match completion {
        Some(CompletionKindV0::File { .. }) => argument.templates = Some(vec![Template::Filepaths]),
        Some(CompletionKindV0::Directory {}) => argument.templates = Some(vec![Template::Folders]),
        Some(CompletionKindV0::List { values }) => argument.suggestions = non_empty(values),
        Some(CompletionKindV0::ShellCommand { .. } | CompletionKindV0::Custom {}) | None => {}
    }
    if argument.suggestions.is_none() {
        argument.suggestions = all_values.and_then(non_empty);
    }
}
