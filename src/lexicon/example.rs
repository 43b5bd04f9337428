// Usage-example selection.
//
// Dictionary sentences arrive with inline `{tag}` markup. We strip it and keep
// the sentence that looks most complete: longer is better, with bonuses for a
// closing punctuation mark and a capitalised start.

const TERMINAL_BONUS: usize = 50;
const CAPITAL_BONUS: usize = 20;

/// Remove `{...}` markup spans. An unclosed `{` drops the rest of the text.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '{' => depth += 1,
            '}' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

fn score(sentence: &str) -> usize {
    let mut score = sentence.chars().count();
    let body = sentence.strip_suffix('"').unwrap_or(sentence);
    if body.ends_with(['.', '!', '?']) {
        score += TERMINAL_BONUS;
    }
    if sentence.starts_with(|c: char| c.is_uppercase() || c == '"') {
        score += CAPITAL_BONUS;
    }
    score
}

/// Best-scoring cleaned sentence; earlier candidates win ties.
pub fn best_example<S: AsRef<str>>(candidates: &[S]) -> Option<String> {
    let mut best: Option<(usize, String)> = None;
    for candidate in candidates {
        let text = strip_markup(candidate.as_ref());
        if text.trim().is_empty() {
            continue;
        }
        let s = score(&text);
        if best.as_ref().is_none_or(|(top, _)| s > *top) {
            best = Some((s, text));
        }
    }
    best.map(|(_, text)| text)
}

/// Drop syllable marks from a headword: "beau*ti*ful" -> "beautiful".
pub fn normalize_headword(headword: &str) -> String {
    headword.replace('*', "")
}
