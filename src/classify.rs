// Per-name predicates for things that break archives, transfers or Windows.
// All checks operate on the codepoint sequence of a single path segment.

// Emoji / pictograph ranges (best-effort; covers most practical cases).
// Both ends inclusive.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1FAFF), // Misc symbols & pictographs -> supplemental pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport & map
    (0x2600, 0x26FF),   // Misc symbols
    (0x2700, 0x27BF),   // Dingbats
    (0xFE0F, 0xFE0F),   // Variation Selector-16
];

const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

// CON, PRN, AUX, NUL, COM1..9, LPT1..9 — reserved regardless of extension.
const WIN_RESERVED_BASENAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL",
    "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
    "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issue {
    Emoji,
    NonAscii,
    IllegalChars,
    ControlChars,
    EdgeSpaceOrDot,
    WindowsReservedName,
}

impl Issue {
    pub fn label(self) -> &'static str {
        match self {
            Issue::Emoji => "emoji",
            Issue::NonAscii => "non-ascii",
            Issue::IllegalChars => "illegal-chars",
            Issue::ControlChars => "control-chars",
            Issue::EdgeSpaceOrDot => "leading/trailing-space-or-dot",
            Issue::WindowsReservedName => "windows-reserved-name",
        }
    }
}

fn is_emoji(ch: char) -> bool {
    let cp = ch as u32;
    EMOJI_RANGES.iter().any(|&(lo, hi)| lo <= cp && cp <= hi)
}

fn is_control(ch: char) -> bool {
    (ch as u32) <= 0x1F
}

fn has_edge_space_or_dot(name: &str) -> bool {
    name != name.trim() || name.ends_with('.') || name.ends_with(' ')
}

fn is_windows_reserved_basename(name: &str) -> bool {
    // Extension split happens at the last dot; dotless names are their own base.
    let base = match name.rsplit_once('.') {
        Some((base, _ext)) => base,
        None => name,
    };
    let upper = base.to_uppercase();
    WIN_RESERVED_BASENAMES.contains(&upper.as_str())
}

// Issue tags for one name, in fixed evaluation order. Empty means the name
// is safe to archive.
pub fn analyze(name: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    if name.chars().any(is_emoji) {
        issues.push(Issue::Emoji);
    }
    if name.chars().any(|ch| ch as u32 > 127) {
        issues.push(Issue::NonAscii);
    }
    if name.chars().any(|ch| ILLEGAL_CHARS.contains(&ch)) {
        issues.push(Issue::IllegalChars);
    }
    if name.chars().any(is_control) {
        issues.push(Issue::ControlChars);
    }
    if has_edge_space_or_dot(name) {
        issues.push(Issue::EdgeSpaceOrDot);
    }
    if is_windows_reserved_basename(name) {
        issues.push(Issue::WindowsReservedName);
    }
    issues
}

// The specific offending characters, unique, in order of first appearance.
// Intentionally narrower than analyze(): emoji below 0x80 and reserved-name
// hits contribute nothing here, so this can be empty for a flagged name.
pub fn bad_chars(name: &str) -> String {
    let mut seen: Vec<char> = Vec::new();
    for ch in name.chars() {
        let offending = ch as u32 > 127 || ILLEGAL_CHARS.contains(&ch) || is_control(ch);
        if offending && !seen.contains(&ch) {
            seen.push(ch);
        }
    }
    seen.into_iter().collect()
}
