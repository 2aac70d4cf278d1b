// Conservative, cross-platform safe rename suggestion:
// - Keep ASCII letters/digits/space/._-
// - Collapse runs of spaces to single spaces
// - Replace everything else with '_' (one per character; runs stay)
// - Strip leading/trailing spaces and dots
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::new();
    let mut prev_space = false;
    for ch in name.chars() {
        let allowed = ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '.' | '_' | '-');
        if allowed {
            if ch == ' ' {
                if !prev_space {
                    out.push(ch);
                }
                prev_space = true;
            } else {
                out.push(ch);
                prev_space = false;
            }
        } else {
            out.push('_');
            prev_space = false;
        }
    }
    let candidate = out.trim_matches([' ', '.']).to_string();
    // Avoid suggesting an empty name
    if candidate.is_empty() {
        "renamed_item".to_string()
    } else {
        candidate
    }
}
