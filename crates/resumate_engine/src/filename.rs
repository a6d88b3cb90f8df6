/// Longest file name we will write, in characters.
const MAX_NAME_CHARS: usize = 120;

/// Turns a server-supplied document name into a safe file name.
///
/// Only the last path component survives, so a name can never point outside
/// the output directory. The result is also safe on Windows.
pub fn sanitize_file_name(input: &str) -> String {
    let last = input
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(input);

    let mut cleaned = String::with_capacity(last.len());
    let mut prev_underscore = false;
    for c in last.chars() {
        let c = if is_forbidden(c) { '_' } else { c };
        if c == '_' && prev_underscore {
            continue;
        }
        prev_underscore = c == '_';
        cleaned.push(c);
    }

    let trimmed = cleaned.trim_matches(&['_', ' ', '.'][..]);
    let mut name: String = if trimmed.is_empty() {
        "document".to_owned()
    } else {
        trimmed.chars().take(MAX_NAME_CHARS).collect()
    };
    if is_reserved_windows_name(&name) {
        name.insert(0, '_');
    }
    name
}

fn is_forbidden(c: char) -> bool {
    matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}' | '\u{7F}')
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    let stem = name.split('.').next().unwrap_or(name);
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(stem))
}
