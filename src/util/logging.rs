// Exploration Log - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr. Entry names and descriptions are never logged, only ids
// and sizes.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive with the documented priority.
///
/// RUST_LOG env var > CLI --debug flag > config level > default "info".
fn filter_directive(env_set: bool, debug_flag: bool, config_level: Option<&str>) -> Option<String> {
    if env_set {
        None
    } else if debug_flag {
        Some("debug".to_string())
    } else {
        Some(
            config_level
                .unwrap_or(super::constants::DEFAULT_LOG_LEVEL)
                .to_string(),
        )
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let env_set = std::env::var("RUST_LOG").is_ok();
    let filter = match filter_directive(env_set, debug_flag, config_level) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::from_default_env(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins_over_everything() {
        assert_eq!(filter_directive(true, true, Some("trace")), None);
    }

    #[test]
    fn test_debug_flag_beats_config_level() {
        assert_eq!(
            filter_directive(false, true, Some("warn")).as_deref(),
            Some("debug")
        );
    }

    #[test]
    fn test_config_level_then_default() {
        assert_eq!(
            filter_directive(false, false, Some("warn")).as_deref(),
            Some("warn")
        );
        assert_eq!(
            filter_directive(false, false, None).as_deref(),
            Some("info")
        );
    }
}
