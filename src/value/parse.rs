use super::types::{QuoteStyle, SettingValue};
use crate::error::{Result, SettingsError};

fn coercion(expected: &'static str, literal: &str) -> SettingsError {
    SettingsError::Coercion {
        expected,
        literal: literal.trim().to_string(),
    }
}

/// Converts one value's literal text into a typed value.
///
/// Shapes that are not recognized at all (identifiers, calls, ternaries,
/// env-var fallbacks) come back as `Raw` with the exact source text.
/// A shape that *looks* recognized but is malformed (unterminated string,
/// unterminated list) is a `Coercion` error; the document layer decides
/// whether to degrade it.
pub fn parse_literal(text: &str) -> Result<SettingValue> {
    let trimmed = text.trim();
    match trimmed {
        "true" => return Ok(SettingValue::Bool(true)),
        "false" => return Ok(SettingValue::Bool(false)),
        _ => {}
    }

    let Some(first) = trimmed.chars().next() else {
        return Ok(SettingValue::Raw(text.to_string()));
    };

    if first == '"' || first == '\'' {
        let (value, consumed) = parse_string_token(trimmed)?;
        if trimmed[consumed..].trim().is_empty() {
            return Ok(SettingValue::Str(value));
        }
        // Quoted text followed by more expression, e.g. `'a' + suffix`.
        return Ok(SettingValue::Raw(text.to_string()));
    }

    if first.is_ascii_digit() || first == '-' || first == '+' || first == '.' {
        return match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(SettingValue::Number(n)),
            _ => Ok(SettingValue::Raw(text.to_string())),
        };
    }

    if first == '[' {
        return parse_list(text, trimmed);
    }

    Ok(SettingValue::Raw(text.to_string()))
}

/// Quote style of the first string literal appearing in the text. Used to
/// re-render edited entries in the style the file already uses.
pub fn detect_quote_style(text: &str) -> QuoteStyle {
    for c in text.chars() {
        match c {
            '\'' => return QuoteStyle::Single,
            '"' => return QuoteStyle::Double,
            _ => {}
        }
    }
    QuoteStyle::default()
}

/// String literals found in commented-out regions of a literal's text.
/// This is how disabled list entries (`// "./profiles/claude.json",`) are
/// recovered as alternatives.
pub fn commented_strings(literal: &str) -> Vec<String> {
    let bytes = literal.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' | b'`' => {
                // Live string; skip it so its contents can't look like comments.
                i += skip_string(&literal[i..]);
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let rest = &literal[i + 2..];
                let end = rest.find('\n').unwrap_or(rest.len());
                found.extend(quoted_strings(&rest[..end]));
                i += 2 + end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let rest = &literal[i + 2..];
                let end = rest.find("*/").unwrap_or(rest.len());
                found.extend(quoted_strings(&rest[..end]));
                i += 2 + end + 2;
            }
            _ => i += 1,
        }
    }
    found
}

/// Every well-formed single- or double-quoted string literal in the text,
/// in order. Tolerant of surrounding junk; used on comment contents.
pub fn quoted_strings(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'"' || bytes[i] == b'\'' {
            match parse_string_token(&text[i..]) {
                Ok((value, consumed)) => {
                    found.push(value);
                    i += consumed;
                }
                Err(_) => i += 1,
            }
        } else {
            i += 1;
        }
    }
    found
}

/// Decodes a leading string literal. Returns the value and the byte length
/// consumed, including both quotes.
pub(super) fn parse_string_token(text: &str) -> Result<(String, usize)> {
    let mut iter = text.char_indices();
    let quote = match iter.next() {
        Some((_, c @ ('"' | '\''))) => c,
        _ => return Err(coercion("string", text)),
    };

    let mut out = String::new();
    while let Some((i, c)) = iter.next() {
        if c == quote {
            return Ok((out, i + c.len_utf8()));
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match iter.next() {
            Some((_, 'n')) => out.push('\n'),
            Some((_, 't')) => out.push('\t'),
            Some((_, 'r')) => out.push('\r'),
            Some((_, '0')) => out.push('\0'),
            Some((_, 'u')) => {
                let hex: String = iter.by_ref().take(4).map(|(_, c)| c).collect();
                let decoded = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| coercion("string", text))?;
                out.push(decoded);
            }
            // JavaScript passes unknown escapes through unchanged.
            Some((_, other)) => out.push(other),
            None => return Err(coercion("string", text)),
        }
    }
    Err(coercion("string", text))
}

fn parse_list(original: &str, trimmed: &str) -> Result<SettingValue> {
    let elements = split_elements(trimmed)?;

    if elements.is_empty() {
        return Ok(SettingValue::StringList(Vec::new()));
    }

    if elements
        .iter()
        .all(|e| e.starts_with('"') || e.starts_with('\''))
    {
        let mut items = Vec::with_capacity(elements.len());
        for element in &elements {
            let (value, consumed) = parse_string_token(element)?;
            if !element[consumed..].trim().is_empty() {
                return Ok(SettingValue::Raw(original.to_string()));
            }
            items.push(value);
        }
        return Ok(SettingValue::StringList(items));
    }

    if elements.iter().all(|e| e.starts_with('{')) {
        return Ok(SettingValue::ObjectList(elements));
    }

    Ok(SettingValue::Raw(original.to_string()))
}

/// Splits a bracketed list into its top-level element texts, comma-separated
/// at depth zero. Comment bytes are excluded from the captured elements;
/// nested brackets, braces, and strings are kept intact.
fn split_elements(trimmed: &str) -> Result<Vec<String>> {
    let bytes = trimmed.as_bytes();
    let mut elements = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut i = 1; // past the opening '['

    while i < bytes.len() {
        let c = bytes[i];
        match c {
            b'"' | b'\'' | b'`' => {
                let consumed = skip_string(&trimmed[i..]);
                current.push_str(&trimmed[i..i + consumed]);
                i += consumed;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let rest = &trimmed[i..];
                i += rest.find('\n').unwrap_or(rest.len());
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let rest = &trimmed[i + 2..];
                i += 2 + rest.find("*/").map(|p| p + 2).unwrap_or(rest.len());
            }
            b'[' | b'{' | b'(' => {
                depth += 1;
                current.push(c as char);
                i += 1;
            }
            b']' if depth == 0 => {
                let element = current.trim().to_string();
                if !element.is_empty() {
                    elements.push(element);
                }
                return Ok(elements);
            }
            b']' | b'}' | b')' => {
                depth = depth.saturating_sub(1);
                current.push(c as char);
                i += 1;
            }
            b',' if depth == 0 => {
                let element = current.trim().to_string();
                if !element.is_empty() {
                    elements.push(element);
                }
                current.clear();
                i += 1;
            }
            _ => {
                // Push the whole UTF-8 character, not just its first byte.
                let ch_len = trimmed[i..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
                current.push_str(&trimmed[i..i + ch_len]);
                i += ch_len;
            }
        }
    }

    Err(coercion("list", trimmed))
}

/// Length in bytes of the leading string literal, quotes included. Falls back
/// to the rest of the text when unterminated.
pub(super) fn skip_string(text: &str) -> usize {
    let mut iter = text.char_indices();
    let Some((_, quote)) = iter.next() else {
        return 0;
    };
    while let Some((i, c)) = iter.next() {
        if c == '\\' {
            iter.next();
        } else if c == quote {
            return i + c.len_utf8();
        }
    }
    text.len()
}
