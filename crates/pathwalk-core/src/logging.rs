use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", settled = count);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Resolve the filter directive from CLI arguments.
///
/// A bare level such as `trace` is scoped to the pathwalk targets; a full
/// directive (containing `=`) is passed through untouched.
pub fn level_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("pathwalk={level},pathwalk_core={level}"),
        (true, None) => "pathwalk=debug,pathwalk_core=debug".to_string(),
        (false, None) => "pathwalk=warn,pathwalk_core=warn".to_string(),
    }
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = level_directive(verbose, log_level);

    // Support PATHWALK_LOG environment variable override
    let filter = EnvFilter::try_from_env("PATHWALK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive_defaults() {
        assert_eq!(
            level_directive(false, None),
            "pathwalk=warn,pathwalk_core=warn"
        );
        assert_eq!(
            level_directive(true, None),
            "pathwalk=debug,pathwalk_core=debug"
        );
    }

    #[test]
    fn test_level_directive_explicit_level_wins() {
        assert_eq!(
            level_directive(true, Some("trace")),
            "pathwalk=trace,pathwalk_core=trace"
        );
        assert_eq!(
            level_directive(false, Some("pathwalk_core=trace")),
            "pathwalk_core=trace"
        );
    }
}
