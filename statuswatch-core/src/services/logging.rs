//! Logging service

use crate::models::LogLevel;

/// Initialize logging with the specified level
pub fn init_logging(level: LogLevel) -> Result<(), Box<dyn std::error::Error>> {
    // Both the binary and the core library emit under their own targets.
    let filter = match level {
        LogLevel::Error => "statuswatch=error,statuswatch_core=error",
        LogLevel::Warn => "statuswatch=warn,statuswatch_core=warn",
        LogLevel::Info => "statuswatch=info,statuswatch_core=info",
        LogLevel::Debug => "statuswatch=debug,statuswatch_core=debug",
        LogLevel::Trace => "statuswatch=trace,statuswatch_core=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
