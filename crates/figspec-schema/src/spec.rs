//! The canonical completion spec tree.

use crate::icon::{Icon, IconError};
use serde::{Serialize, Serializer};

/// A complete completion spec: the root command of the described CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Spec {
    pub root: Subcommand,
}

impl Spec {
    pub fn new(root: Subcommand) -> Self {
        Self { root }
    }
}

/// Completion templates an argument can draw suggestions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Filepaths,
    Folders,
    History,
}

/// How many times an option may be repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    Finite(u32),
    Infinite,
}

impl Serialize for RepeatCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RepeatCount::Finite(count) => serializer.serialize_u32(*count),
            // Completion tooling reads `true` as "unbounded".
            RepeatCount::Infinite => serializer.serialize_bool(true),
        }
    }
}

/// Display metadata shared by subcommands and options.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// Text shown instead of the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Text inserted instead of the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Ranking hint, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_dangerous: bool,
    #[serde(rename = "hidden", skip_serializing_if = "is_false")]
    pub is_hidden: bool,
    #[serde(rename = "deprecated", skip_serializing_if = "is_false")]
    pub is_deprecated: bool,
}

/// Parser behavior switches for a subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcommandParserDirectives {
    /// Options like `-long` are whole names, not bundled short flags.
    #[serde(skip_serializing_if = "is_false")]
    pub flags_are_posix_noncompliant: bool,
}

impl SubcommandParserDirectives {
    fn is_empty(&self) -> bool {
        !self.flags_are_posix_noncompliant
    }
}

/// A command, or the root of the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcommand {
    /// All names; the first is the primary one.
    #[serde(rename = "name")]
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "absent")]
    pub subcommands: Option<Vec<Subcommand>>,
    #[serde(skip_serializing_if = "absent")]
    pub options: Option<Vec<CliOption>>,
    #[serde(rename = "args", skip_serializing_if = "absent")]
    pub arguments: Option<Vec<Argument>>,
    #[serde(skip_serializing_if = "no_subcommand_directives")]
    pub parser_directives: Option<SubcommandParserDirectives>,
    #[serde(flatten)]
    pub presentation: Presentation,
}

impl Subcommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            ..Default::default()
        }
    }

    /// Primary name.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    /// Keep only options matching `keep`, in this command and every descendant.
    ///
    /// A command left without options has its `options` field cleared.
    pub fn retain_options(&mut self, mut keep: impl FnMut(&CliOption) -> bool) {
        self.retain_options_in_tree(&mut keep);
    }

    fn retain_options_in_tree(&mut self, keep: &mut impl FnMut(&CliOption) -> bool) {
        if let Some(options) = self.options.take() {
            self.options = non_empty(options.into_iter().filter(|o| keep(o)).collect());
        }
        for subcommand in self.subcommands.iter_mut().flatten() {
            subcommand.retain_options_in_tree(keep);
        }
    }

    /// Find a direct subcommand by any of its names.
    pub fn subcommand(&self, name: &str) -> Option<&Subcommand> {
        self.subcommands
            .iter()
            .flatten()
            .find(|s| s.names.iter().any(|n| n == name))
    }

    /// Find a direct option by any of its names.
    pub fn option(&self, name: &str) -> Option<&CliOption> {
        self.options
            .iter()
            .flatten()
            .find(|o| o.names.iter().any(|n| n == name))
    }

    /// Resolve every icon in the tree, failing on the first one that cannot be encoded.
    pub(crate) fn check_icons(&self) -> Result<(), IconError> {
        if let Some(icon) = &self.presentation.icon {
            icon.encode()?;
        }
        for option in self.options.iter().flatten() {
            if let Some(icon) = &option.presentation.icon {
                icon.encode()?;
            }
        }
        for subcommand in self.subcommands.iter().flatten() {
            subcommand.check_icons()?;
        }
        Ok(())
    }
}

/// A flag or an option taking a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliOption {
    /// All names; the preferred one comes first.
    #[serde(rename = "name")]
    pub names: Vec<String>,
    /// Value taken by the option, if any.
    #[serde(rename = "args", skip_serializing_if = "absent")]
    pub arguments: Option<Vec<Argument>>,
    /// Also available in every subcommand
    #[serde(skip_serializing_if = "is_false")]
    pub is_persistent: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_required: bool,
    /// Value must be attached with `=`
    #[serde(skip_serializing_if = "is_false")]
    pub requires_equals: bool,
    #[serde(rename = "isRepeatable", skip_serializing_if = "Option::is_none")]
    pub repeat_count: Option<RepeatCount>,
    /// Options this one cannot be combined with
    #[serde(skip_serializing_if = "absent")]
    pub exclusive_on: Option<Vec<String>>,
    /// Options this one requires
    #[serde(skip_serializing_if = "absent")]
    pub depends_on: Option<Vec<String>>,
    #[serde(flatten)]
    pub presentation: Presentation,
}

impl CliOption {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Move `preferred` to the front of the names.
    ///
    /// Every existing occurrence is dropped and a single copy is placed first,
    /// so applying this twice is the same as applying it once.
    pub fn with_preferred_name(mut self, preferred: &str) -> Self {
        let mut names = Vec::with_capacity(self.names.len() + 1);
        names.push(preferred.to_string());
        names.extend(self.names.into_iter().filter(|n| n != preferred));
        self.names = names;
        self
    }

    /// Whether this is the help flag added by the argument parser itself.
    pub fn is_help(&self) -> bool {
        self.names.iter().any(|n| n == "--help")
    }
}

/// Parser behavior switches for an argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArgumentParserDirectives {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// A positional argument, or the value of an option.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "template", skip_serializing_if = "absent")]
    pub templates: Option<Vec<Template>>,
    /// Fixed values offered as completions
    #[serde(skip_serializing_if = "absent")]
    pub suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "no_argument_directives")]
    pub parser_directives: Option<ArgumentParserDirectives>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_dangerous: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_variadic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub options_can_break_variadic_arg: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_optional: bool,
    /// Remaining words form another command
    #[serde(skip_serializing_if = "is_false")]
    pub is_command: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_script: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub debounce: bool,
}

impl Argument {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// `None` for an empty vector, so empty sequences are never stored.
pub fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

fn absent<T>(items: &Option<Vec<T>>) -> bool {
    items.as_ref().is_none_or(Vec::is_empty)
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

fn no_subcommand_directives(directives: &Option<SubcommandParserDirectives>) -> bool {
    directives
        .as_ref()
        .is_none_or(SubcommandParserDirectives::is_empty)
}

fn no_argument_directives(directives: &Option<ArgumentParserDirectives>) -> bool {
    directives.as_ref().is_none_or(|d| d.alias.is_none())
}
