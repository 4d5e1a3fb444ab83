//! Turns catalog instruction blobs into numbered steps.

/// Glyphs some recipes use as step bullets.
const STEP_MARKERS: [char; 4] = ['▢', '□', '▪', '•'];

/// Formats free-text instructions as numbered steps, one per line.
///
/// Line endings are normalized, control characters other than newline and
/// tab are dropped, bullet glyphs are removed and every non-blank line
/// becomes a step: `1) ...`, `2) ...`.
pub fn format_instructions(text: &str) -> String {
    let cleaned: String = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| *c == '\n' || *c == '\t' || !c.is_control())
        .filter(|c| !STEP_MARKERS.contains(c))
        .collect();

    cleaned
        .split('\n')
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .enumerate()
        .map(|(i, step)| format!("{}) {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}
