//! Completions command - the completion script for a clap command tree.

use crate::commands::generate::{RenderArgs, render, write_output};
use crate::config::FigspecConfig;
use crate::dump;
use clap::Command;
use tracing::debug;

/// Run the completions command for `cmd`.
pub fn run(cmd: Command, args: RenderArgs, config: &FigspecConfig) -> i32 {
    let info = dump::tool_info(&cmd);
    let data = match serde_json::to_vec(&info) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    debug!(command = %info.command.command_name, bytes = data.len(), "dumped command tree");

    match render(&data, &args, &config.generate) {
        Ok(text) => write_output(None, &text),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::config::GenerateConfig;
    use clap::CommandFactory;

    fn self_spec(args: &RenderArgs) -> serde_json::Value {
        let info = dump::tool_info(&Cli::command());
        let data = serde_json::to_vec(&info).unwrap();
        let text = render(
            &data,
            &RenderArgs {
                json: true,
                ..args.clone()
            },
            &GenerateConfig::default(),
        )
        .unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_self_spec_describes_generate() {
        let doc = self_spec(&RenderArgs::default());
        assert_eq!(doc["name"], serde_json::json!(["figspec"]));

        let generate = doc["subcommands"]
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["name"] == serde_json::json!(["generate"]))
            .unwrap();
        let options = generate["options"].as_array().unwrap();
        assert!(
            options
                .iter()
                .any(|o| o["name"] == serde_json::json!(["--output", "-o"]))
        );
        let input = &generate["args"][0];
        assert!(input["name"].as_str().unwrap().eq_ignore_ascii_case("input"));
        assert_eq!(input["template"], serde_json::json!(["filepaths"]));
    }

    #[test]
    fn test_self_spec_skip_help() {
        let doc = self_spec(&RenderArgs {
            skip_help: true,
            ..Default::default()
        });
        let text = doc.to_string();
        assert!(!text.contains("\"--help\""));
        assert!(text.contains("\"--skip-help\""));
    }

    #[test]
    fn test_run_prints() {
        assert_eq!(
            run(Cli::command(), RenderArgs::default(), &FigspecConfig::default()),
            0
        );
    }
}
