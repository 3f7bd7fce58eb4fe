// Text formatting shared by the views

/// Characters of a post shown in previews
pub const EXCERPT_CHARS: usize = 150;

/// Scores print like the backend sends them: `9` for whole numbers, `8.5` otherwise
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        let text = format!("{:.2}", score);
        text.trim_end_matches('0').to_string()
    }
}

/// Average score as shown on stat cards
pub fn format_average(score: f64) -> String {
    format!("{:.1}", score)
}

/// First `EXCERPT_CHARS` characters followed by an ellipsis
pub fn excerpt(content: &str) -> String {
    let head: String = content.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", head)
}

/// Thousands separators for view and engagement totals
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
