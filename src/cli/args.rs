//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::{AppConfig, DelaysConfig, LoggingConfig, UiConfig};
use crate::domain::selection::SelectionMode;

/// Lipunto - fix text typed in the wrong keyboard layout
#[derive(Parser, Debug)]
#[command(name = "lipunto")]
#[command(version)]
#[command(about = "Convert the last typed word between English and Russian keyboard layouts")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// What to convert
    #[arg(value_enum, default_value_t = ModeArg::Last)]
    pub mode: ModeArg,

    /// Conversion direction (en_ru, ru_en)
    #[arg(short = 'l', long, value_name = "PAIR")]
    pub layout: Option<String>,

    /// Where the selected text is read from (primary, clipboard)
    #[arg(short = 's', long, value_name = "SOURCE")]
    pub source: Option<String>,

    /// Wait after setting the clipboard, in seconds
    #[arg(long, value_name = "SECS")]
    pub delay_clipboard_set: Option<f64>,

    /// Wait after copying before reading the clipboard, in seconds
    #[arg(long, value_name = "SECS")]
    pub delay_clipboard_get: Option<f64>,

    /// Wait after selecting the last word, in seconds
    #[arg(long, value_name = "SECS")]
    pub delay_text_process: Option<f64>,

    /// Wait after pasting, in seconds
    #[arg(long, value_name = "SECS")]
    pub delay_paste: Option<f64>,

    /// Write a log file
    #[arg(long)]
    pub enable_logging: bool,

    /// Log level (DEBUG, INFO, WARNING, ERROR)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Log file path
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<String>,

    /// Also log to stderr
    #[arg(long)]
    pub log_console: bool,

    /// Show desktop notifications
    #[arg(short = 'n', long, conflicts_with = "no_popup")]
    pub show_popup: bool,

    /// Never show desktop notifications
    #[arg(long)]
    pub no_popup: bool,

    /// How long notifications stay visible (1-60 seconds)
    #[arg(long, value_name = "SECS")]
    pub popup_timeout: Option<u32>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Mode argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Select and convert the word before the cursor
    Last,
    /// Convert the current selection
    Selected,
}

impl From<ModeArg> for SelectionMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Last => SelectionMode::LastWord,
            ModeArg::Selected => SelectionMode::Selected,
        }
    }
}

impl Cli {
    /// Config overrides given on the command line; unset flags stay `None`
    pub fn to_config(&self) -> AppConfig {
        let delays = DelaysConfig {
            clipboard_set: self.delay_clipboard_set,
            clipboard_get: self.delay_clipboard_get,
            text_process: self.delay_text_process,
            paste: self.delay_paste,
        };
        let logging = LoggingConfig {
            enabled: self.enable_logging.then_some(true),
            level: self.log_level.clone(),
            file: self.log_file.clone(),
            console: self.log_console.then_some(true),
        };
        let show_popup = match (self.show_popup, self.no_popup) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        let ui = UiConfig {
            show_popup,
            popup_timeout: self.popup_timeout,
            notifier: None,
        };

        AppConfig {
            layout: self.layout.clone(),
            source: self.source.clone(),
            layout_count: None,
            delays: (delays != DelaysConfig::default()).then_some(delays),
            logging: (logging != LoggingConfig::default()).then_some(logging),
            ui: (ui != UiConfig::default()).then_some(ui),
            tools: None,
        }
    }
}

/// Options for one switch run, resolved from the merged config
#[derive(Debug, Clone)]
pub struct SwitchOptions {
    pub mode: SelectionMode,
    pub config: AppConfig,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "layout",
    "source",
    "layout_count",
    "delays.clipboard_set",
    "delays.clipboard_get",
    "delays.text_process",
    "delays.paste",
    "logging.enabled",
    "logging.level",
    "logging.file",
    "logging.console",
    "ui.show_popup",
    "ui.popup_timeout",
    "ui.notifier",
    "tools.qdbus",
    "tools.ydotool",
    "tools.wl_paste",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["lipunto"]);
        assert_eq!(cli.mode, ModeArg::Last);
        assert!(cli.layout.is_none());
        assert!(!cli.enable_logging);
        assert!(!cli.show_popup);
        assert!(!cli.no_popup);
        assert!(cli.command.is_none());
        assert_eq!(cli.to_config(), AppConfig::empty());
    }

    #[test]
    fn cli_parses_mode() {
        let cli = Cli::parse_from(["lipunto", "selected"]);
        assert_eq!(SelectionMode::from(cli.mode), SelectionMode::Selected);
    }

    #[test]
    fn cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["lipunto", "everything"]).is_err());
    }

    #[test]
    fn cli_parses_delays() {
        let cli = Cli::parse_from(["lipunto", "--delay-paste", "0.3", "--delay-text-process", "0"]);
        let delays = cli.to_config().delays.unwrap();
        assert_eq!(delays.paste, Some(0.3));
        assert_eq!(delays.text_process, Some(0.0));
        assert_eq!(delays.clipboard_set, None);
    }

    #[test]
    fn cli_parses_logging_flags() {
        let cli = Cli::parse_from([
            "lipunto",
            "--enable-logging",
            "--log-level",
            "debug",
            "--log-console",
        ]);
        let logging = cli.to_config().logging.unwrap();
        assert_eq!(logging.enabled, Some(true));
        assert_eq!(logging.level.as_deref(), Some("debug"));
        assert_eq!(logging.console, Some(true));
        assert_eq!(logging.file, None);
    }

    #[test]
    fn popup_flags_map_to_config() {
        let on = Cli::parse_from(["lipunto", "--show-popup"]).to_config();
        assert_eq!(on.ui.and_then(|u| u.show_popup), Some(true));

        let off = Cli::parse_from(["lipunto", "--no-popup"]).to_config();
        assert_eq!(off.ui.and_then(|u| u.show_popup), Some(false));
    }

    #[test]
    fn popup_flags_conflict() {
        assert!(Cli::try_parse_from(["lipunto", "--show-popup", "--no-popup"]).is_err());
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["lipunto", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["lipunto", "config", "set", "layout", "ru_en"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "layout");
            assert_eq!(value, "ru_en");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("layout"));
        assert!(is_valid_config_key("delays.paste"));
        assert!(is_valid_config_key("tools.wl_paste"));
        assert!(!is_valid_config_key("delays"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
