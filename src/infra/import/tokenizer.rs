use std::collections::BTreeMap;

pub type FieldMap = BTreeMap<String, String>;

/// Tokenizes raw CSV text into header-keyed field maps. The first line is
/// the header; empty header cells are dropped; blank lines are skipped.
/// Rows shorter than the header are padded with empty strings, longer rows
/// are truncated. Total: malformed input degrades to empty values, it never
/// fails.
///
/// Lines are split before fields are, so a quoted field containing a raw
/// newline is NOT joined across source lines. Deliberate: the format this
/// tool exchanges never quotes newlines, and the limitation is pinned by a
/// test.
pub fn parse(text: &str) -> Vec<FieldMap> {
    let mut lines = text.lines();
    let headers = match lines.next() {
        Some(line) => split_line(line),
        None => return Vec::new(),
    };

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let values = split_line(line);
            let mut fields = FieldMap::new();
            for (idx, header) in headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                fields.insert(header.clone(), values.get(idx).cloned().unwrap_or_default());
            }
            fields
        })
        .collect()
}

/// Splits one line into fields. A `"` inside a quoted region followed by
/// another `"` emits a literal quote; any other `"` toggles the quoted
/// state. Commas outside quotes delimit fields. Fields are trimmed of
/// surrounding whitespace.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if inside_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    inside_quotes = !inside_quotes;
                }
            }
            ',' if !inside_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
