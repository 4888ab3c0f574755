//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract. Scripts rely on them.
//!
//! | Code | Description                                         |
//! |------|-----------------------------------------------------|
//! | 0    | Success                                             |
//! | 1    | General error (unspecified)                         |
//! | 2    | Usage error (bad args, malformed KEY=VALUE)         |
//! | 3    | Settings or scenario file could not be parsed       |
//! | 4    | Invalid config (unknown parameter, bad assumption)  |
//! | 5    | IO error (file missing, unreadable, unwritable)     |

use roicalc_config::ConfigError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, malformed assignment.
pub const EXIT_USAGE: u8 = 2;

/// Settings JSON or scenario TOML failed to parse.
pub const EXIT_CONFIG_PARSE: u8 = 3;

/// Config parsed but names an unknown parameter or an unusable assumption.
pub const EXIT_CONFIG_INVALID: u8 = 4;

/// File read/write failure.
pub const EXIT_IO: u8 = 5;

/// Map a ConfigError to its exit code.
pub fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::Io { .. } => EXIT_IO,
        ConfigError::Parse { .. } => EXIT_CONFIG_PARSE,
        ConfigError::UnknownParameter(_) => EXIT_CONFIG_INVALID,
        ConfigError::InvalidAssumption { .. } => EXIT_CONFIG_INVALID,
    }
}
