/// Name of the project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILENAME: &str = "tendency.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "TENDENCY_LOG";

/// Column name of the normalized join key in a merged table.
pub const MERGE_KEY_COLUMN: &str = "merge_key";

/// Upper bound on decimal places when rounding scores for output.
pub const MAX_SCORE_PRECISION: u32 = 10;
