//! Best-effort client identification from a user-agent string.

/// Substring checks in priority order. First match wins, so a UA carrying
/// both "Chrome" and "Safari" is reported as Chrome.
const AGENT_PATTERNS: [(&[&str], &str); 4] = [
    (&["Chrome"], "Chrome"),
    (&["Firefox"], "Firefox"),
    (&["Safari"], "Safari"),
    (&["MSIE", "Trident"], "Internet Explorer"),
];

pub const UNKNOWN_AGENT: &str = "Unknown";

/// Browser name for `user_agent`, or `"Unknown"`.
pub fn browser_name(user_agent: &str) -> &'static str {
    AGENT_PATTERNS
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| user_agent.contains(needle)))
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_AGENT)
}
