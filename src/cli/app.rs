//! Main app runner for a switch run

use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::application::ports::ConfigStore;
use crate::application::{SwitchInput, SwitchLayoutUseCase, SwitchOutcome};
use crate::domain::config::{AppConfig, DelaysConfig, LoggingConfig, UiConfig};
use crate::domain::error::ConfigError;
use crate::domain::selection::SelectionSource;
use crate::infrastructure::{
    create_notifier, init_logging, KdeLayoutIndicator, KlipperClipboard, LoggingOptions,
    NotifierKind, WhichDependencyChecker, WlPasteSelection, YdotoolInput,
};

use super::args::SwitchOptions;
use super::config_cmd::parse_bool;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run one layout switch with the merged configuration
pub async fn run_switch(options: SwitchOptions) -> ExitCode {
    let presenter = Presenter::new();
    let config = options.config;

    // Held until the run ends so the file writer flushes
    let _logging = match init_logging(&LoggingOptions::from_config(&config)) {
        Ok(guard) => Some(guard),
        Err(e) => {
            presenter.warn(&format!("Logging disabled: {}", e));
            None
        }
    };

    let qdbus = config.qdbus_or_default();
    let notifier_kind = NotifierKind::from_str(config.notifier_or_default()).unwrap_or_default();
    let popup_timeout = Duration::from_secs(u64::from(config.popup_timeout_or_default()));

    // Create adapters
    let clipboard = KlipperClipboard::new(qdbus);
    let input = YdotoolInput::new(config.ydotool_or_default());
    let selection = WlPasteSelection::new(config.wl_paste_or_default());
    let layout = KdeLayoutIndicator::new(qdbus, config.layout_count_or_default());
    let notifier = create_notifier(notifier_kind, popup_timeout);
    let dependencies = WhichDependencyChecker::new();

    let use_case =
        SwitchLayoutUseCase::new(clipboard, input, selection, layout, notifier, dependencies);

    let input = SwitchInput {
        mode: options.mode,
        pair: config.layout_or_default(),
        source: config.source_or_default(),
        delays: config.delays_or_default(),
        enable_notify: config.show_popup_or_default(),
        required_tools: required_tools(&config),
    };

    match use_case.execute(input).await {
        Ok(SwitchOutcome::NothingSelected) => {
            presenter.info("Nothing selected");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(SwitchOutcome::Converted(result)) => {
            presenter.conversion(&result);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Executables the run needs, given the configured adapters
pub fn required_tools(config: &AppConfig) -> Vec<String> {
    let mut tools = vec![
        config.qdbus_or_default().to_string(),
        config.ydotool_or_default().to_string(),
    ];
    if config.source_or_default() == SelectionSource::Primary {
        tools.push(config.wl_paste_or_default().to_string());
    }
    if config.show_popup_or_default() {
        let kind = NotifierKind::from_str(config.notifier_or_default()).unwrap_or_default();
        if let Some(tool) = kind.required_tool() {
            tools.push(tool.to_string());
        }
    }
    tools
}

/// Load and merge configuration from file, env, and CLI, then validate it
pub async fn load_merged_config<S, F>(
    store: &S,
    cli_config: AppConfig,
    lookup: F,
) -> Result<AppConfig, ConfigError>
where
    S: ConfigStore,
    F: Fn(&str) -> Option<String>,
{
    let file_config = store.load().await?;
    file_config.validate()?;

    let env_config = env_config(lookup)?;

    // Merge: defaults < file < env < cli
    let config = AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config);
    config.validate()?;
    Ok(config)
}

/// Build the environment layer from `LIPUNTO_*` variables.
///
/// Empty variables count as unset.
pub fn env_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let delays = DelaysConfig {
        clipboard_set: env_parse(&var, "LIPUNTO_DELAY_CLIPBOARD_SET")?,
        clipboard_get: env_parse(&var, "LIPUNTO_DELAY_CLIPBOARD_GET")?,
        text_process: env_parse(&var, "LIPUNTO_DELAY_TEXT_PROCESS")?,
        paste: env_parse(&var, "LIPUNTO_DELAY_PASTE")?,
    };
    let logging = LoggingConfig {
        enabled: env_bool(&var, "LIPUNTO_LOG_ENABLED")?,
        level: var("LIPUNTO_LOG_LEVEL"),
        file: var("LIPUNTO_LOG_FILE"),
        console: env_bool(&var, "LIPUNTO_LOG_CONSOLE")?,
    };
    let ui = UiConfig {
        show_popup: env_bool(&var, "LIPUNTO_UI_SHOW_POPUP")?,
        popup_timeout: env_parse(&var, "LIPUNTO_UI_POPUP_TIMEOUT")?,
        notifier: var("LIPUNTO_UI_NOTIFIER"),
    };

    Ok(AppConfig {
        layout: var("LIPUNTO_LAYOUT"),
        source: var("LIPUNTO_SOURCE"),
        layout_count: env_parse(&var, "LIPUNTO_LAYOUT_COUNT")?,
        delays: (delays != DelaysConfig::default()).then_some(delays),
        logging: (logging != LoggingConfig::default()).then_some(logging),
        ui: (ui != UiConfig::default()).then_some(ui),
        tools: None,
    })
}

fn env_parse<T, V>(var: &V, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    V: Fn(&str) -> Option<String>,
{
    var(name)
        .map(|value| {
            value.trim().parse().map_err(|_| {
                warn!(variable = name, value = %value, "invalid environment override");
                ConfigError::ValidationError {
                    key: name.to_string(),
                    message: format!("Cannot parse '{}'", value),
                }
            })
        })
        .transpose()
}

fn env_bool<V>(var: &V, name: &str) -> Result<Option<bool>, ConfigError>
where
    V: Fn(&str) -> Option<String>,
{
    var(name)
        .map(|value| {
            parse_bool(&value).map_err(|_| ConfigError::ValidationError {
                key: name.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })
        })
        .transpose()
}
