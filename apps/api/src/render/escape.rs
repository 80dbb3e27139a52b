//! Markdown escaping for free text.
//!
//! Policy, applied in order:
//! 1. Runs of `\r`/`\n` collapse to one space, so free text stays on its line.
//! 2. `\` `` ` `` `*` `_` `#` `[` `]` `~` `|` get a backslash, as does a `<` that
//!    could open a tag or autolink (followed by a letter, `/`, `!` or `?`).
//! 3. A leading block marker (`-`, `+`, `=`, `>`, or `12.` / `12)`) is escaped.
//! 4. Surrounding whitespace is trimmed.
//!
//! Text with none of these characters passes through unchanged.

const ESCAPED_CHARS: &[char] = &['\\', '`', '*', '_', '#', '[', ']', '~', '|'];

/// Escapes `text` for use inside a heading, paragraph or list item.
pub fn escape_inline(text: &str) -> String {
    let mut single_line = String::with_capacity(text.len());
    let mut in_break = false;
    for ch in text.chars() {
        if ch == '\r' || ch == '\n' {
            if !in_break {
                single_line.push(' ');
            }
            in_break = true;
        } else {
            single_line.push(ch);
            in_break = false;
        }
    }

    let trimmed = single_line.trim();
    let mut out = String::with_capacity(trimmed.len() + 8);
    let mut chars = trimmed.chars().peekable();
    while let Some(ch) = chars.next() {
        let opens_tag = ch == '<'
            && chars
                .peek()
                .is_some_and(|next| next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?'));
        if opens_tag || ESCAPED_CHARS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }

    escape_block_marker(out)
}

fn escape_block_marker(text: String) -> String {
    if text.starts_with(['-', '+', '=', '>']) {
        return format!("\\{text}");
    }

    let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 && text[digits..].starts_with(['.', ')']) {
        let mut out = String::with_capacity(text.len() + 1);
        out.push_str(&text[..digits]);
        out.push('\\');
        out.push_str(&text[digits..]);
        return out;
    }

    text
}
