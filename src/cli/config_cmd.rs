//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, DelaysConfig, LoggingConfig, ToolsConfig, UiConfig};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    // Validate the new value on its own so a bad entry elsewhere in the
    // file does not block fixing this one
    let mut probe = AppConfig::empty();
    set_value(&mut probe, key, value)?;
    probe.validate()?;

    let mut config = store.load().await?;
    set_value(&mut config, key, value)?;
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    match get_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = get_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Store `value` under `key`, parsing it to the field's type
fn set_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let text = || Some(value.to_string());

    match key {
        "layout" => config.layout = text(),
        "source" => config.source = text(),
        "layout_count" => config.layout_count = Some(parse_number(key, value)?),
        "delays.clipboard_set" => delays(config).clipboard_set = Some(parse_seconds(key, value)?),
        "delays.clipboard_get" => delays(config).clipboard_get = Some(parse_seconds(key, value)?),
        "delays.text_process" => delays(config).text_process = Some(parse_seconds(key, value)?),
        "delays.paste" => delays(config).paste = Some(parse_seconds(key, value)?),
        "logging.enabled" => logging(config).enabled = Some(parse_bool_value(key, value)?),
        "logging.level" => logging(config).level = text(),
        "logging.file" => logging(config).file = text(),
        "logging.console" => logging(config).console = Some(parse_bool_value(key, value)?),
        "ui.show_popup" => ui(config).show_popup = Some(parse_bool_value(key, value)?),
        "ui.popup_timeout" => ui(config).popup_timeout = Some(parse_number(key, value)?),
        "ui.notifier" => ui(config).notifier = Some(value.to_lowercase()),
        "tools.qdbus" => tools(config).qdbus = text(),
        "tools.ydotool" => tools(config).ydotool = text(),
        "tools.wl_paste" => tools(config).wl_paste = text(),
        _ => return check_key(key),
    }
    Ok(())
}

/// Current value under `key`, formatted for display
fn get_value(config: &AppConfig, key: &str) -> Option<String> {
    let delays = config.delays.as_ref();
    let logging = config.logging.as_ref();
    let ui = config.ui.as_ref();
    let tools = config.tools.as_ref();

    match key {
        "layout" => config.layout.clone(),
        "source" => config.source.clone(),
        "layout_count" => config.layout_count.map(|n| n.to_string()),
        "delays.clipboard_set" => delays.and_then(|d| d.clipboard_set).map(|s| s.to_string()),
        "delays.clipboard_get" => delays.and_then(|d| d.clipboard_get).map(|s| s.to_string()),
        "delays.text_process" => delays.and_then(|d| d.text_process).map(|s| s.to_string()),
        "delays.paste" => delays.and_then(|d| d.paste).map(|s| s.to_string()),
        "logging.enabled" => logging.and_then(|l| l.enabled).map(|b| b.to_string()),
        "logging.level" => logging.and_then(|l| l.level.clone()),
        "logging.file" => logging.and_then(|l| l.file.clone()),
        "logging.console" => logging.and_then(|l| l.console).map(|b| b.to_string()),
        "ui.show_popup" => ui.and_then(|u| u.show_popup).map(|b| b.to_string()),
        "ui.popup_timeout" => ui.and_then(|u| u.popup_timeout).map(|t| t.to_string()),
        "ui.notifier" => ui.and_then(|u| u.notifier.clone()),
        "tools.qdbus" => tools.and_then(|t| t.qdbus.clone()),
        "tools.ydotool" => tools.and_then(|t| t.ydotool.clone()),
        "tools.wl_paste" => tools.and_then(|t| t.wl_paste.clone()),
        _ => None,
    }
}

fn delays(config: &mut AppConfig) -> &mut DelaysConfig {
    config.delays.get_or_insert_with(DelaysConfig::default)
}

fn logging(config: &mut AppConfig) -> &mut LoggingConfig {
    config.logging.get_or_insert_with(LoggingConfig::default)
}

fn ui(config: &mut AppConfig) -> &mut UiConfig {
    config.ui.get_or_insert_with(UiConfig::default)
}

fn tools(config: &mut AppConfig) -> &mut ToolsConfig {
    config.tools.get_or_insert_with(ToolsConfig::default)
}

/// Parse a boolean value
pub(super) fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

fn parse_bool_value(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

fn parse_seconds(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("'{}' is not a number of seconds", value),
        })
}

fn parse_number(key: &str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("'{}' is not a whole number", value),
        })
}
