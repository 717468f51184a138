//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for cascade-relay
#[derive(Parser, Debug)]
#[command(name = "cascade-relay")]
#[command(author, version, about = "Gemini relay with model fallback and retry")]
#[command(long_about = r#"
cascade-relay forwards a prompt to the Gemini generateContent API and keeps
trying until some model answers.

Each model is called up to 3 times, backing off 800ms then 1600ms on
429/500/502/503/504. A model that fails for good, or answers with blank
text, hands over to the next one in the cascade:

  gemini-2.5-flash -> gemini-2.5-pro -> gemini-2.0-flash -> gemini-2.0-flash-lite

Configuration files are loaded from (in priority order):
1. RELAY_* environment variables (e.g. RELAY_SERVER__BIND)
2. --config <path>     Explicit config file
3. ./relay.toml        Project-level config
4. ~/.config/cascade-relay/config.toml   Global config

The API key is read from GEMINI_API_KEY (or GEMINIAPIKEY).

Example:
  cascade-relay serve --bind 0.0.0.0:8787
  cascade-relay ask "Outline a three-month Rust learning plan"
  cascade-relay ask -m gemini-2.5-pro "Summarise the borrow checker"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP relay
    Serve {
        /// Address to listen on (overrides server.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Run one prompt through the cascade and print the answer
    Ask {
        /// The prompt to send
        prompt: String,

        /// Use only this model instead of the cascade
        #[arg(short, long, value_name = "MODEL")]
        model: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_bind() {
        let cli = Cli::try_parse_from(["cascade-relay", "serve", "--bind", "0.0.0.0:9000"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Serve {
                bind: Some("0.0.0.0:9000".to_string())
            })
        );
    }

    #[test]
    fn test_ask_with_model_and_global_flags() {
        let cli = Cli::try_parse_from([
            "cascade-relay",
            "ask",
            "hello",
            "-m",
            "gemini-2.5-pro",
            "-vv",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Ask {
                prompt: "hello".to_string(),
                model: Some("gemini-2.5-pro".to_string()),
            })
        );
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_show_config_without_subcommand() {
        let cli = Cli::try_parse_from(["cascade-relay", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_ask_requires_prompt() {
        assert!(Cli::try_parse_from(["cascade-relay", "ask"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
