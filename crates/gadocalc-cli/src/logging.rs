use tracing_subscriber::EnvFilter;

use crate::args::LogFormat;

pub fn init_logging(format: LogFormat, verbose: bool) {
    let default_filter = if verbose {
        "gadocalc_core=debug,gadocalc_cli=debug,warn"
    } else {
        "gadocalc_core=info,gadocalc_cli=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Compact => builder.compact().init(),
        // Structured JSON lines for log shippers
        LogFormat::Json => builder.json().init(),
    }
}
