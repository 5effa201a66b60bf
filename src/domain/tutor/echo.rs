//! Detection of replies that merely parrot the requested level.
//!
//! Some model replies to the text-generation task come back as just the
//! level name, or start by restating the level description. Those are not
//! usable texts and are reported as `EchoedInput`.

/// Characters of slack after the description when looking for it at the
/// start of a reply.
const ECHO_WINDOW_SLACK: usize = 20;

/// Characters of the reply shown in the echo error.
pub const ECHO_PREVIEW_CHARS: usize = 50;

/// True when `reply` is the level itself, or when `level_description`
/// appears near the start of the reply.
pub fn detect_level_echo(reply: &str, level: &str, level_description: &str) -> bool {
    let reply = reply.trim();

    if reply.to_lowercase() == level.trim().to_lowercase() {
        return true;
    }

    let window = level_description.chars().count() + ECHO_WINDOW_SLACK;
    let head: String = reply.chars().take(window).collect();
    head.contains(level_description)
}

/// First characters of the reply for the error message.
pub fn echo_preview(reply: &str) -> String {
    reply.chars().take(ECHO_PREVIEW_CHARS).collect()
}
