use std::{env, path::Path};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
    None,
}

impl LogOutput {
    fn parse(value: &str) -> Self {
        match value {
            "file" => LogOutput::File,
            "both" => LogOutput::Both,
            "none" => LogOutput::None,
            _ => LogOutput::Console,
        }
    }

    fn console(self) -> bool {
        matches!(self, LogOutput::Console | LogOutput::Both)
    }

    fn file(self) -> bool {
        matches!(self, LogOutput::File | LogOutput::Both)
    }
}

/// Logging settings read from `HLSCLT_LOG_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub output: LogOutput,
    pub json: bool,
    pub file_path: String,
}

impl LogSettings {
    /// Read settings from the environment, falling back to `default_level`.
    pub fn from_env(default_level: &str) -> Self {
        Self::from_lookup(default_level, |key| env::var(key).ok())
    }

    fn from_lookup<F>(default_level: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: lookup("HLSCLT_LOG_LEVEL").unwrap_or_else(|| default_level.to_string()),
            output: LogOutput::parse(&lookup("HLSCLT_LOG_OUTPUT").unwrap_or_default()),
            json: lookup("HLSCLT_LOG_FORMAT").is_some_and(|f| f == "json"),
            file_path: lookup("HLSCLT_LOG_FILE_PATH")
                .unwrap_or_else(|| "/tmp/hlsclt.log".to_string()),
        }
    }
}

fn fmt_layer<W>(writer: W, json: bool) -> BoxedLayer
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer().with_writer(writer).with_target(false);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Initializes the global tracing subscriber.
///
/// Console records go to stderr; stdout is reserved for command output. The
/// returned guard must be held until exit so file records get flushed.
pub fn init_subscriber(default_level: &str) -> Option<WorkerGuard> {
    let settings = LogSettings::from_env(default_level);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut guard = None;

    if settings.output.console() {
        layers.push(fmt_layer(std::io::stderr, settings.json));
    }

    if settings.output.file() {
        let log_path = Path::new(&settings.file_path);
        let log_dir = log_path.parent().unwrap_or_else(|| Path::new("/tmp"));
        let log_filename = log_path.file_name().unwrap_or("hlsclt.log".as_ref());

        let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(file_guard);
        layers.push(fmt_layer(non_blocking, settings.json));
    }

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = registry().with(layers).with(env_filter).try_init();

    guard
}
