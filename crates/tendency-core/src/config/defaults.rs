// Single source of truth for all default values.

// --- Input ---
pub const DEFAULT_SYSTEM_PATH: &str = "system_results.csv";
pub const DEFAULT_REFERENCE_PATH: &str = "questionnaire_results.csv";
pub const DEFAULT_KEY_COLUMN: &str = "student_name";
pub const DEFAULT_SYSTEM_SUFFIX: &str = "_system";
pub const DEFAULT_REFERENCE_SUFFIX: &str = "_questionnaire";

// --- Output ---
pub const DEFAULT_OUTPUT_PATH: &str = "Final_Comparison_Results.csv";
pub const DEFAULT_SCORE_PRECISION: u32 = 2;

// --- Membership (universe 0–11) ---
pub const DEFAULT_UNIVERSE_MIN: f64 = 0.0;
pub const DEFAULT_UNIVERSE_MAX: f64 = 11.0;
pub const DEFAULT_POLE1_PURE: [f64; 4] = [0.0, 0.0, 1.0, 3.0];
pub const DEFAULT_POLE1_LEANING: [f64; 4] = [2.0, 3.0, 4.0, 6.0];
pub const DEFAULT_POLE2_LEANING: [f64; 4] = [5.0, 6.0, 7.0, 9.0];
pub const DEFAULT_POLE2_PURE: [f64; 4] = [8.0, 9.0, 11.0, 11.0];

// --- Reference instrument ---
pub const DEFAULT_MIDPOINT: f64 = 5.5;

// --- Engine ---
pub const DEFAULT_PARALLEL: bool = false;
