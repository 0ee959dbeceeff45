//! URL slugification.

/// Lowercase ASCII slug: runs of anything but `[a-z0-9_]` collapse to one `-`.
///
/// Non-ASCII input is transliterated first, so `Grüße, Welt!` becomes
/// `grusse-welt`. Leading and trailing separators are dropped.
pub fn slugify(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut need_dash = false;

    for ch in input.chars() {
        for b in deunicode::deunicode_char(ch).unwrap_or("-").bytes() {
            match b {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => {
                    if need_dash {
                        output.push('-');
                        need_dash = false;
                    }
                    output.push(b.to_ascii_lowercase() as char);
                }
                _ => need_dash = !output.is_empty(),
            }
        }
    }

    output
}
