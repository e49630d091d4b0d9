//! Tool info layout, serialization version 0.
//!
//! Field names follow the dump format (`camelCase`). Optional fields may be
//! missing from the input; unknown fields are ignored.

mod mapping;

use serde::{Deserialize, Serialize};

/// A complete version 0 dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfoV0 {
    pub serialization_version: i64,
    pub command: CommandInfoV0,
}

impl ToolInfoV0 {
    pub const SERIALIZATION_VERSION: i64 = 0;

    pub fn new(command: CommandInfoV0) -> Self {
        Self {
            serialization_version: Self::SERIALIZATION_VERSION,
            command,
        }
    }
}

/// One command of the described CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandInfoV0 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_commands: Option<Vec<String>>,
    pub command_name: String,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_subcommand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcommands: Option<Vec<CommandInfoV0>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<ArgumentInfoV0>>,
}

/// What kind of command-line element an argument is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArgumentKind {
    /// Identified by position
    Positional,
    /// Named, takes a value
    Option,
    /// Named, takes no value
    Flag,
}

/// One argument, option or flag of a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentInfoV0 {
    pub kind: ArgumentKind,
    pub should_display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,
    pub is_optional: bool,
    pub is_repeating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<NameInfoV0>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<NameInfoV0>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_kind: Option<CompletionKindV0>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion: Option<String>,
}

impl ArgumentInfoV0 {
    /// A visible, required, non-repeating argument with no names.
    pub fn new(kind: ArgumentKind) -> Self {
        Self {
            kind,
            should_display: true,
            section_title: None,
            is_optional: false,
            is_repeating: false,
            names: None,
            preferred_name: None,
            value_name: None,
            default_value: None,
            all_values: None,
            completion_kind: None,
            abstract_text: None,
            discussion: None,
        }
    }
}

/// How a name is spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameKind {
    /// `--name`
    Long,
    /// `-n`
    Short,
    /// `-name`
    LongWithSingleDash,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameInfoV0 {
    pub kind: NameKind,
    pub name: String,
}

impl NameInfoV0 {
    pub fn long(name: impl Into<String>) -> Self {
        Self {
            kind: NameKind::Long,
            name: name.into(),
        }
    }

    pub fn short(name: impl Into<String>) -> Self {
        Self {
            kind: NameKind::Short,
            name: name.into(),
        }
    }

    /// The name as typed on the command line, dashes included.
    pub fn formatted(&self) -> String {
        match self.kind {
            NameKind::Long => format!("--{}", self.name),
            // TODO: set `flagsArePosixNoncompliant` on the owning command
            // instead of collapsing single-dash long names onto short ones.
            NameKind::Short | NameKind::LongWithSingleDash => format!("-{}", self.name),
        }
    }
}

/// Completion source declared for an argument's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionKindV0 {
    List {
        values: Vec<String>,
    },
    File {
        #[serde(default)]
        extensions: Vec<String>,
    },
    Directory {},
    ShellCommand {
        command: String,
    },
    Custom {},
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_formatted_names() {
        assert_eq!(NameInfoV0::long("verbose").formatted(), "--verbose");
        assert_eq!(NameInfoV0::short("v").formatted(), "-v");
        let single_dash = NameInfoV0 {
            kind: NameKind::LongWithSingleDash,
            name: "verbose".to_string(),
        };
        assert_eq!(single_dash.formatted(), "-verbose");
    }

    #[test]
    fn test_decode_argument() {
        let info: ArgumentInfoV0 = serde_json::from_value(json!({
            "kind": "option",
            "shouldDisplay": true,
            "sectionTitle": "Output",
            "isOptional": true,
            "isRepeating": false,
            "names": [{ "kind": "long", "name": "out" }, { "kind": "short", "name": "o" }],
            "preferredName": { "kind": "long", "name": "out" },
            "valueName": "out",
            "defaultValue": "a.out",
            "completionKind": { "file": { "extensions": ["out"] } },
            "abstract": "Output file",
            "somethingNew": 3
        }))
        .unwrap();
        assert_eq!(info.kind, ArgumentKind::Option);
        assert_eq!(info.names.as_ref().map(Vec::len), Some(2));
        assert_eq!(info.preferred_name, Some(NameInfoV0::long("out")));
        assert_eq!(
            info.completion_kind,
            Some(CompletionKindV0::File {
                extensions: vec!["out".to_string()]
            })
        );
        assert_eq!(info.abstract_text.as_deref(), Some("Output file"));
    }

    #[test]
    fn test_decode_completion_kinds() {
        let kinds: Vec<CompletionKindV0> = serde_json::from_value(json!([
            { "list": { "values": ["a", "b"] } },
            { "directory": {} },
            { "shellCommand": { "command": "ls" } },
            { "custom": {} }
        ]))
        .unwrap();
        assert_eq!(
            kinds,
            vec![
                CompletionKindV0::List {
                    values: vec!["a".to_string(), "b".to_string()]
                },
                CompletionKindV0::Directory {},
                CompletionKindV0::ShellCommand {
                    command: "ls".to_string()
                },
                CompletionKindV0::Custom {},
            ]
        );
    }

    #[test]
    fn test_unknown_argument_kind_is_rejected() {
        let result: Result<ArgumentInfoV0, _> = serde_json::from_value(json!({
            "kind": "switch",
            "shouldDisplay": true,
            "isOptional": true,
            "isRepeating": false
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_omits_absent_fields() {
        let info = ToolInfoV0::new(CommandInfoV0 {
            command_name: "tool".to_string(),
            ..Default::default()
        });
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value,
            json!({ "serializationVersion": 0, "command": { "commandName": "tool" } })
        );
    }
}
