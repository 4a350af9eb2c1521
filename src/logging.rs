use std::error::Error;
use std::path::PathBuf;
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};

/// Directory holding log files, `~/.molweight/logs`
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".molweight")
        .join("logs")
}

/// Initialize logging to a timestamped file so the terminal UI stays clean
pub fn init_logging() -> Result<PathBuf, Box<dyn Error>> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("molweight_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

/// Map MOLWEIGHT_LOG_LEVEL onto a RUST_LOG filter for this crate
pub fn log_filter(level: Option<&str>) -> String {
    let level = level.unwrap_or("info").to_lowercase();

    let env_filter = match level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => {
            eprintln!("Invalid log level '{level}', defaulting to 'info'");
            "info"
        }
    };

    format!("molweight={env_filter}")
}

/// Set logging level based on environment variable or default
pub fn set_log_level() {
    let level = std::env::var("MOLWEIGHT_LOG_LEVEL").ok();
    std::env::set_var("RUST_LOG", log_filter(level.as_deref()));
}

/// Log system information at startup
pub fn log_system_info() {
    info!("=== Molweight Starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Available CPU cores: {}", num_cpus::get());

    debug!("Environment variables:");
    for (key, value) in std::env::vars() {
        if key.starts_with("MOLWEIGHT_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

/// Log application shutdown
pub fn log_shutdown() {
    info!("=== Molweight Shutting Down ===");
    info!("Application terminated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Log a fatal error to the log file and to stderr
pub fn log_critical_error(error: &str, context: Option<&str>) {
    if let Some(ctx) = context {
        error!("CRITICAL ERROR [{ctx}]: {error}");
        eprintln!("[{}] CRITICAL ERROR [{}]: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), ctx, error);
    } else {
        error!("CRITICAL ERROR: {error}");
        eprintln!("[{}] CRITICAL ERROR: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_logging_initialization() {
        let temp_dir = tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());

        let result = init_logging();
        assert!(result.is_ok());

        let log_file = result.unwrap();
        assert!(log_file.exists());
        assert!(log_file.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(None), "molweight=info");
        assert_eq!(log_filter(Some("DEBUG")), "molweight=debug");
        assert_eq!(log_filter(Some("verbose")), "molweight=info");
    }
}
