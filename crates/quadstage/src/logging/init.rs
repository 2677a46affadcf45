use std::sync::Once;

/// Options for the `env_logger` backend installed by [`init_logging`].
///
/// `env_filter` uses `env_logger` directives; "quadstage=debug" shows the
/// stage descriptions as they are built, "quadstage=trace" also shows pixel
/// crops being clamped.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend once.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`.
/// Later calls are ignored. This crate is linked into renderers that usually
/// own the process logger; if one is already installed it stays in place and
/// this call does nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);

        match builder.try_init() {
            Ok(()) => log::debug!("env_logger installed"),
            Err(_) => log::debug!("keeping the logger installed by the host"),
        }
    });
}
