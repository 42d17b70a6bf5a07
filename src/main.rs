// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! Prints the resolved settings, with secrets masked, as JSON.
//!
//! Log output is filtered by `RUST_LOG` when set. Otherwise warnings are shown while the
//! settings load, and `FLASK_LOG_LEVEL` takes over once they are resolved.

use settings_builder::Settings;
use std::process::ExitCode;
use tracing::{Subscriber, error};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    reload,
    util::SubscriberInitExt,
};

/// Filter used until the settings, and with them `FLASK_LOG_LEVEL`, are known.
const LOADING_LOG_LEVEL: &str = "warn";

fn main() -> ExitCode {
    let rust_log = EnvFilter::try_from_default_env().ok();
    let follow_settings = rust_log.is_none();
    let (subscriber, filter) = logging_subscriber(rust_log, std::io::stderr);
    subscriber.init();

    let settings = settings_builder::load();

    if follow_settings {
        let level = tracing_level(&settings.log_level);
        if let Err(err) = filter.reload(EnvFilter::new(level)) {
            error!(error = err.to_string(), "failed to apply log level");
        }
    }

    match render(&settings) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = err.to_string(), "failed to serialize settings");
            ExitCode::FAILURE
        }
    }
}

/// Builds the subscriber along with a handle to swap its filter once settings resolve.
fn logging_subscriber<W>(
    rust_log: Option<EnvFilter>,
    writer: W,
) -> (
    impl Subscriber + Send + Sync + 'static,
    reload::Handle<EnvFilter, Registry>,
)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = rust_log.unwrap_or_else(|| EnvFilter::new(LOADING_LOG_LEVEL));
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer));
    (subscriber, handle)
}

fn render(settings: &Settings) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&settings.redacted())
}

/// Maps the log level names used by the web application onto tracing directives.
fn tracing_level(log_level: &str) -> &'static str {
    match log_level.to_ascii_uppercase().as_str() {
        "CRITICAL" | "FATAL" | "ERROR" => "error",
        "WARNING" | "WARN" => "warn",
        "INFO" => "info",
        "NOTSET" | "TRACE" => "trace",
        _ => "debug",
    }
}
