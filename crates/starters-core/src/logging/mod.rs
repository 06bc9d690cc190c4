use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
/// Covers both `starters_core` and `starters_ui` targets; `RUST_LOG` adds to it.
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(log_directive(quiet).parse().expect("Invalid log directive")),
        )
        .init();
}

fn log_directive(quiet: bool) -> &'static str {
    if quiet { "starters=error" } else { "starters=info" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::Directive;

    #[test]
    fn test_log_directives_parse() {
        for quiet in [true, false] {
            let parsed: Result<Directive, _> = log_directive(quiet).parse();
            assert!(parsed.is_ok(), "directive for quiet={quiet} must parse");
        }
    }

    #[test]
    fn test_quiet_directive_is_error_level() {
        assert_eq!(log_directive(true), "starters=error");
        assert_eq!(log_directive(false), "starters=info");
    }
}
