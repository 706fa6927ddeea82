//! Inline `<script>` scanning for configuration-object assignments.

/// Every `<script ...>...</script>` block as `(opening tag, inner text)`.
pub(crate) fn iter_scripts(html: &str) -> Vec<(&str, &str)> {
    let mut res = Vec::new();
    let mut pos = 0usize;

    while let Some(si) = html[pos..].find("<script") {
        let si = pos + si;

        let open_end = match html[si..].find('>') {
            Some(x) => si + x,
            None => break,
        };
        let tag_open = &html[si..=open_end];

        let close = match html[open_end + 1..].find("</script>") {
            Some(x) => open_end + 1 + x,
            None => break,
        };
        res.push((tag_open, &html[open_end + 1..close]));
        pos = close + "</script>".len();
    }
    res
}

/// Index of the `}` closing the object that opens at `start`, skipping quoted strings.
pub(crate) fn find_matching_brace(s: &str, start: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.get(start).copied()? != b'{' {
        return None;
    }

    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut j = start;

    while j < bytes.len() {
        let c = bytes[j];

        if let Some(q) = quote {
            if c == b'\\' {
                j += 2;
                continue;
            } else if c == q {
                quote = None;
            }
            j += 1;
            continue;
        }

        match c {
            b'"' | b'\'' => quote = Some(c),
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}

/// Textual contents of every config object assigned to one of `markers` inside
/// the page's script blocks.
///
/// Handles both `Marker = {...}` and `Marker = JSON.parse("...")`; the latter is
/// returned with its string-literal escapes undone so that quoted keys look like
/// they do in a plain object.
pub(crate) fn config_objects(html: &str, markers: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for (_tag, inner) in iter_scripts(html) {
        for marker in markers {
            let mut from = 0usize;
            while let Some(rel) = inner[from..].find(marker.as_str()) {
                let at = from + rel + marker.len();
                from = at;
                if let Some(text) = assigned_value(inner, at) {
                    out.push(text);
                }
            }
        }
    }
    out
}

fn assigned_value(src: &str, after_marker: usize) -> Option<String> {
    let rest = src[after_marker..].trim_start();
    let rest = rest.strip_prefix('=')?;
    if rest.starts_with('=') {
        // comparison, not an assignment
        return None;
    }
    let rest = rest.trim_start();
    let base = src.len() - rest.len();

    if rest.starts_with('{') {
        let end = find_matching_brace(src, base)?;
        return Some(src[base..=end].to_string());
    }

    let literal = rest.strip_prefix("JSON.parse(")?.trim_start();
    let quote = literal.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    string_literal_contents(&literal[1..], quote)
}

fn string_literal_contents(s: &str, quote: char) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                'r' => out.push('\r'),
                // keep \u runs intact for the escape decoder
                'u' => out.push_str("\\u"),
                other => out.push(other),
            },
            c if c == quote => return Some(out),
            c => out.push(c),
        }
    }
    None
}
