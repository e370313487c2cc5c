/// Emoji for a GitHub style shortcode name, without the colons.
pub fn lookup(name: &str) -> Option<&'static str> {
    emojis::get_by_shortcode(name).map(|e| e.as_str())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '+' || c == '-'
}

/// Replace `:name:` shortcodes with the matching emoji.
///
/// Unknown names and colons that do not delimit a shortcode
/// are copied through unchanged.
pub fn replace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(':') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let len = after
            .find(|c: char| !is_name_char(c))
            .unwrap_or_else(|| after.len());

        if len > 0 && after[len..].starts_with(':') {
            if let Some(emoji) = lookup(&after[..len]) {
                out.push_str(emoji);
                rest = &after[len + 1..];
                continue;
            }
        }

        // The closing colon may open the next shortcode
        out.push(':');
        rest = after;
    }

    out.push_str(rest);
    out
}
