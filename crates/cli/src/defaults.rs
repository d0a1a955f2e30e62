//! Default values shared by the command-line arguments.

/// Repeat unit used by the `demo` command.
pub const DEMO_UNIT: &str =
    "TAGGGATTAACCGTTATATATATATAGCCATGGATCGATTATATAGGGATTAACCGTTATATATATATAGCCATGGATCGATTATA";

/// How many times the demo unit is repeated.
pub const DEMO_REPEAT: usize = 100;

/// Log level used when neither `RUST_LOG` nor `--verbose` is given.
pub const LOG_LEVEL: &str = "info";
pub const VERBOSE_LOG_LEVEL: &str = "debug";
