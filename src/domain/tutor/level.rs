//! Learner proficiency levels.

/// Description used when the caller's level is not recognised.
pub const DEFAULT_LEVEL_DESCRIPTION: &str = "intermediate (CEFR B1-B2)";

/// Maps a caller-supplied level name onto the description sent to the model.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Unknown
/// levels fall back to intermediate.
pub fn describe_level(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "beginner" | "elementary" | "a1" | "a2" => "beginner (CEFR A1-A2)",
        "intermediate" | "b1" | "b2" => DEFAULT_LEVEL_DESCRIPTION,
        "advanced" | "proficient" | "c1" | "c2" => "advanced (CEFR C1-C2)",
        _ => DEFAULT_LEVEL_DESCRIPTION,
    }
}
