// `quote` must be non-empty
pub fn escape_quote(value: &str, quote: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut rest_start = 0;

    for (start, matched) in value.match_indices(quote) {
        escaped.push_str(&value[rest_start..start]);
        escaped.push('\\');
        escaped.push_str(matched);

        rest_start = start + matched.len();
    }

    escaped.push_str(&value[rest_start..]);
    escaped
}
