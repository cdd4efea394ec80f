const MAX_VISIBLE_LENGTH: usize = 500;

const SECRET_MARKERS: [&str; 5] = ["Token ", "Bearer ", "key=", "api_key=", "token="];

/// Truncates vendor text and masks credentials before it reaches a log line or error.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let visible = match trimmed.char_indices().nth(MAX_VISIBLE_LENGTH) {
        Some((cut, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..cut],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();
    for marker in SECRET_MARKERS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(marker) {
            let start = search_from + found + marker.len();
            let end = result[start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\'' | ','))
                .map(|i| start + i)
                .unwrap_or(result.len());
            if end > start {
                result.replace_range(start..end, "[REDACTED]");
                search_from = start + "[REDACTED]".len();
            } else {
                search_from = start;
            }
        }
    }
    result
}
