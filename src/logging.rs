//! Logging setup
//!
//! `RUST_LOG` wins over the configured level when set.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` if present, else `finboard=<level>` plus
/// the HTTP layers at the same level
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "finboard={level},tower_http={level}",
            level = config.level
        ))
    })
}

/// Install the global subscriber.
///
/// Logs go to stderr so rendered dashboards on stdout stay clean.
pub fn init_logging(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialised: {}", e);
    }
}

/// Run `f` under a temporary stderr subscriber.
///
/// For work that happens before the configured subscriber can exist,
/// such as loading the config file itself.
pub fn with_startup_logging<T>(f: impl FnOnce() -> T) -> T {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("finboard=info"));
    with_scoped_logging(filter, std::io::stderr, f)
}

fn with_scoped_logging<W, T>(filter: EnvFilter, writer: W, f: impl FnOnce() -> T) -> T
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_broken_config_is_reported_at_startup() {
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[api\nurl = 1").unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let config = with_scoped_logging(
            EnvFilter::new("finboard=info"),
            move || writer.clone(),
            || Config::load_first(&[PathBuf::from(broken.path())]),
        );

        assert_eq!(config.server.port, 3333);
        let logs = captured.text();
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Failed to load config"));
    }

    #[test]
    fn test_env_filter_uses_configured_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let filter = env_filter(&LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        });
        assert!(filter.to_string().contains("finboard=debug"));
    }
}
