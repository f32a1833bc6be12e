use tracing_subscriber::EnvFilter;

/// Maps `-q`/`-v` to a level filter. The filter is built from flags only.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the stderr subscriber; stdout is reserved for reports.
pub fn init(verbose: u8, quiet: bool) {
    // Ignored when a global subscriber is already set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level_for(verbose, quiet)))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_overrides_verbosity() {
        assert_eq!(level_for(2, true), "error");
    }

    #[test]
    fn verbosity_steps_up_to_debug() {
        assert_eq!(level_for(0, false), "warn");
        assert_eq!(level_for(1, false), "info");
        assert_eq!(level_for(2, false), "debug");
        assert_eq!(level_for(5, false), "debug");
    }
}
