//! Console logger setup shared by the binary and the demo tasks.

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Route `log` macros to the terminal at the given level. Only the first
/// init in a process takes effect, later calls are ignored.
pub fn init_console_logger(level: LevelFilter) {
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_console_logger(LevelFilter::Debug);
        init_console_logger(LevelFilter::Info);
    }
}
