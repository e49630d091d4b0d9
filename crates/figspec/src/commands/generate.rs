//! Generate command - completion scripts from tool info dumps.

use crate::config::{FigspecConfig, GenerateConfig};
use clap::{Args, ValueHint};
use figspec_schema::ScriptGenerator;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output shaping shared by every command that renders a spec.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Print the bare JSON document instead of a module
    #[arg(long)]
    pub json: bool,

    /// Declared type of the exported constant (default: Fig.Spec)
    #[arg(long, value_name = "NAME")]
    pub type_name: Option<String>,

    /// Leave out the --help flag of every command
    #[arg(long)]
    pub skip_help: bool,
}

/// Generate command arguments
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Tool info dump (JSON); stdin if omitted or `-`
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Convert a dump into the requested output text.
pub fn render(
    data: &[u8],
    args: &RenderArgs,
    config: &GenerateConfig,
) -> Result<String, figspec_toolinfo::Error> {
    let mut spec = figspec_toolinfo::parse(data)?;
    debug!(command = spec.root.name(), "mapped tool info");

    if args.skip_help || config.skip_help() {
        spec.root.retain_options(|o| !o.is_help());
    }

    let generator = ScriptGenerator::new(args.type_name.as_deref().unwrap_or(config.type_name()));
    let text = if args.json {
        generator.to_json(&spec)?
    } else {
        generator.generate(&spec)?
    };
    debug!(bytes = text.len(), type_name = generator.type_name(), "rendered spec");
    Ok(text)
}

/// Run the generate command
pub fn run(args: GenerateArgs, config: &FigspecConfig) -> i32 {
    let input = args.input.as_deref().filter(|p| *p != Path::new("-"));
    let data = match read_input(input) {
        Ok(data) => data,
        Err(e) => {
            let source = input.map_or("stdin".to_string(), |p| p.display().to_string());
            eprintln!("Failed to read {}: {}", source, e);
            return 1;
        }
    };
    debug!(bytes = data.len(), "read tool info dump");

    match render(&data, &args.render, &config.generate) {
        Ok(text) => write_output(args.output.as_deref(), &text),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn read_input(path: Option<&Path>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut data = Vec::new();
            std::io::stdin().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

/// Print `text`, or write it to `path`. Returns the exit code.
pub(crate) fn write_output(path: Option<&Path>, text: &str) -> i32 {
    if let Some(path) = path {
        if let Err(e) = std::fs::write(path, format!("{}\n", text)) {
            eprintln!("Failed to write {}: {}", path.display(), e);
            return 1;
        }
        eprintln!("Generated {}", path.display());
    } else {
        println!("{}", text);
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DUMP: &str = r#"{
        "serializationVersion": 0,
        "command": {
            "commandName": "tool",
            "subcommands": [{
                "commandName": "sub",
                "arguments": [{
                    "kind": "flag", "shouldDisplay": true, "isOptional": true, "isRepeating": false,
                    "names": [{"kind": "long", "name": "help"}]
                }]
            }],
            "arguments": [
                {
                    "kind": "flag", "shouldDisplay": true, "isOptional": true, "isRepeating": false,
                    "names": [{"kind": "short", "name": "h"}, {"kind": "long", "name": "help"}]
                },
                {
                    "kind": "flag", "shouldDisplay": true, "isOptional": true, "isRepeating": false,
                    "names": [{"kind": "long", "name": "verbose"}]
                }
            ]
        }
    }"#;

    #[test]
    fn test_render_script() {
        let text = render(DUMP.as_bytes(), &RenderArgs::default(), &GenerateConfig::default())
            .unwrap();
        assert!(text.starts_with("const completionSpec: Fig.Spec = {"));
        assert!(text.contains("\"--help\""));
        assert!(text.contains("\"--verbose\""));
    }

    #[test]
    fn test_render_skip_help() {
        let args = RenderArgs {
            skip_help: true,
            ..Default::default()
        };
        let text = render(DUMP.as_bytes(), &args, &GenerateConfig::default()).unwrap();
        assert!(!text.contains("--help"));
        assert!(text.contains("\"--verbose\""));
    }

    #[test]
    fn test_render_skip_help_from_config() {
        let config = GenerateConfig {
            skip_help: Some(true),
            ..Default::default()
        };
        let text = render(DUMP.as_bytes(), &RenderArgs::default(), &config).unwrap();
        assert!(!text.contains("--help"));
    }

    #[test]
    fn test_render_json() {
        let args = RenderArgs {
            json: true,
            ..Default::default()
        };
        let text = render(DUMP.as_bytes(), &args, &GenerateConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], serde_json::json!(["tool"]));
    }

    #[test]
    fn test_type_name_flag_beats_config() {
        let args = RenderArgs {
            type_name: Some("Flag.Spec".to_string()),
            ..Default::default()
        };
        let config = GenerateConfig {
            type_name: Some("Config.Spec".to_string()),
            ..Default::default()
        };
        let text = render(DUMP.as_bytes(), &args, &config).unwrap();
        assert!(text.starts_with("const completionSpec: Flag.Spec = "));

        let text = render(DUMP.as_bytes(), &RenderArgs::default(), &config).unwrap();
        assert!(text.starts_with("const completionSpec: Config.Spec = "));
    }

    #[test]
    fn test_render_unsupported_version() {
        let err = render(
            br#"{"serializationVersion": 3}"#,
            &RenderArgs::default(),
            &GenerateConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("dump.json");
        let output = dir.path().join("tool.ts");
        std::fs::write(&input, DUMP).unwrap();

        let args = GenerateArgs {
            input: Some(input),
            output: Some(output.clone()),
            render: RenderArgs::default(),
        };
        assert_eq!(run(args, &FigspecConfig::default()), 0);

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.ends_with("export default completionSpec;\n"));
    }

    #[test]
    fn test_run_missing_input_fails() {
        let dir = TempDir::new().unwrap();
        let args = GenerateArgs {
            input: Some(dir.path().join("missing.json")),
            output: None,
            render: RenderArgs::default(),
        };
        assert_eq!(run(args, &FigspecConfig::default()), 1);
    }
}
