// src/core/sanitize.rs

/// Collapse runs of whitespace (including NBSP and ideographic space) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Split a delimited list, trimming each entry and dropping empties.
pub fn split_list(s: &str, sep: char) -> Vec<String> {
    s.split(sep)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// Canonical form of a calendar date label, used on both sides of the column lookup.
///
/// * whitespace is normalized
/// * a trailing weekday annotation is dropped: `11/1(土)`, `11/1（土）`, `11/1 土`
/// * leading zeros of month and day are dropped: `11/01` → `11/1`
/// * anything glued after the day digits is dropped: `10/24土` → `10/24`
///
/// Labels without a `/` are only trimmed.
pub fn date_key(label: &str) -> String {
    let norm = normalize_ws(label);
    let head = norm
        .split(|c: char| c == '(' || c == '（' || c == ' ')
        .next()
        .unwrap_or("");

    match head.split_once('/') {
        Some((mon, day)) => {
            let digits = day.find(|c: char| !c.is_ascii_digit()).unwrap_or(day.len());
            let day = if digits == 0 { day } else { &day[..digits] };
            join!(strip_zeros(mon), "/", strip_zeros(day))
        }
        None => s!(head),
    }
}

/// True when the label reduces to `M/D` (digits on both sides) under `date_key`.
pub fn looks_like_date(label: &str) -> bool {
    let key = date_key(label);
    match key.split_once('/') {
        Some((mon, day)) => {
            let digits = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
            digits(mon) && digits(day)
        }
        None => false,
    }
}

fn strip_zeros(part: &str) -> &str {
    let t = part.trim_start_matches('0');
    if t.is_empty() && !part.is_empty() { "0" } else { t }
}
