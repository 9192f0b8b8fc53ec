use super::types::{RawEntry, ScanOutcome};
use crate::error::{Result, SettingsError};
use crate::text::Span;

/// Scans JavaScript source for the settings object literal and its top-level
/// entries.
///
/// Fails with `Structure` when the `settings = {` marker is missing or the
/// literal never closes, and with `DuplicateKey` when the same key is
/// declared twice (first occurrence wins nothing; the whole scan fails).
pub fn scan(text: &str) -> Result<ScanOutcome> {
    let mut cursor = Cursor::new(text);
    let open = cursor.find_literal_start()?;
    cursor.pos = open + 1;

    let mut entries: Vec<RawEntry> = Vec::new();
    let mut pending_comments: Vec<String> = Vec::new();

    loop {
        cursor.skip_ws();
        if cursor.at("//") {
            pending_comments.push(cursor.read_line_comment());
            continue;
        }
        if cursor.at("/*") {
            pending_comments.push(cursor.read_block_comment()?);
            continue;
        }
        match cursor.peek() {
            None => {
                return Err(SettingsError::Structure(
                    "settings literal never closes".to_string(),
                ));
            }
            Some('}') => {
                let close = cursor.pos;
                return Ok(ScanOutcome {
                    literal: Span::new(open, close + 1),
                    entries,
                });
            }
            Some(',') => {
                // Stray comma between entries; tolerated.
                cursor.bump();
                continue;
            }
            _ => {}
        }

        let entry = cursor.read_entry(std::mem::take(&mut pending_comments))?;
        if entries.iter().any(|existing| existing.key == entry.key) {
            return Err(SettingsError::DuplicateKey(entry.key));
        }
        entries.push(entry);
    }
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn skip_spaces_same_line(&mut self) {
        while let Some(c) = self.peek() {
            if c == ' ' || c == '\t' {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn skip_ws_and_comments(&mut self) -> Result<()> {
        loop {
            self.skip_ws();
            if self.at("//") {
                self.read_line_comment();
            } else if self.at("/*") {
                self.read_block_comment()?;
            } else {
                return Ok(());
            }
        }
    }

    /// Advances past a string literal (the cursor sits on the opening quote).
    /// Returns false if the string never terminates.
    fn skip_string(&mut self) -> bool {
        let Some(quote) = self.peek() else {
            return false;
        };
        self.bump();
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.bump();
                self.bump();
            } else if c == quote {
                self.bump();
                return true;
            } else {
                self.bump();
            }
        }
        false
    }

    /// Consumes `//` to end of line (newline not included) and returns the
    /// comment text without the marker.
    fn read_line_comment(&mut self) -> String {
        self.pos += 2;
        let rest = self.rest();
        let end = rest.find('\n').unwrap_or(rest.len());
        let body = rest[..end].trim().to_string();
        self.pos += end;
        body
    }

    /// Consumes `/* ... */` and returns the body text.
    fn read_block_comment(&mut self) -> Result<String> {
        self.pos += 2;
        let rest = self.rest();
        let Some(end) = rest.find("*/") else {
            return Err(SettingsError::Structure(
                "unterminated block comment".to_string(),
            ));
        };
        let body = rest[..end].trim().to_string();
        self.pos += end + 2;
        Ok(body)
    }

    /// Finds the opening brace of the `settings = {` assignment, skipping
    /// strings and comments so the marker is never matched inside either.
    fn find_literal_start(&mut self) -> Result<usize> {
        while let Some(c) = self.peek() {
            match c {
                '"' | '\'' | '`' => {
                    self.skip_string();
                }
                '/' if self.at("//") => {
                    self.read_line_comment();
                }
                '/' if self.at("/*") => {
                    self.read_block_comment()?;
                }
                c if is_ident_start(c) => {
                    let ident = self.read_identifier();
                    if ident != "settings" {
                        continue;
                    }
                    let after_ident = self.pos;
                    self.skip_ws_and_comments()?;
                    if self.peek() != Some('=') || self.at("==") || self.at("=>") {
                        self.pos = after_ident;
                        continue;
                    }
                    self.bump();
                    self.skip_ws_and_comments()?;
                    if self.peek() == Some('{') {
                        return Ok(self.pos);
                    }
                    self.pos = after_ident;
                }
                _ => self.bump(),
            }
        }
        Err(SettingsError::Structure(
            "no `settings = { ... }` assignment found".to_string(),
        ))
    }

    fn read_identifier(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.bump();
            } else {
                break;
            }
        }
        &self.text[start..self.pos]
    }

    fn read_key(&mut self) -> Result<String> {
        match self.peek() {
            Some('"' | '\'') => {
                let start = self.pos;
                if !self.skip_string() {
                    return Err(SettingsError::Structure(format!(
                        "unterminated key string at byte {start}"
                    )));
                }
                // Both quote chars are one byte wide.
                Ok(self.text[start + 1..self.pos - 1].to_string())
            }
            Some(c) if is_ident_start(c) => Ok(self.read_identifier().to_string()),
            _ => Err(SettingsError::Structure(format!(
                "expected a key at byte {}",
                self.pos
            ))),
        }
    }

    fn read_entry(&mut self, leading_comments: Vec<String>) -> Result<RawEntry> {
        let key_start = self.pos;
        let key = self.read_key()?;
        let key_span = Span::new(key_start, self.pos);

        self.skip_ws_and_comments()?;
        if self.peek() != Some(':') {
            return Err(SettingsError::Structure(format!(
                "expected `:` after key `{key}` at byte {}",
                self.pos
            )));
        }
        self.bump();
        self.skip_ws_and_comments()?;

        let value_start = self.pos;
        let mut last_end = self.pos;
        let mut depth = 0usize;

        loop {
            let Some(c) = self.peek() else {
                return Err(SettingsError::Structure(format!(
                    "value of `{key}` runs past end of file"
                )));
            };
            match c {
                '"' | '\'' | '`' => {
                    if !self.skip_string() {
                        return Err(SettingsError::Structure(format!(
                            "unterminated string in value of `{key}`"
                        )));
                    }
                    last_end = self.pos;
                }
                '/' if self.at("//") => {
                    self.read_line_comment();
                    if depth > 0 {
                        // Embedded in a nested structure; part of the span.
                        last_end = self.pos;
                    }
                }
                '/' if self.at("/*") => {
                    self.read_block_comment()?;
                    if depth > 0 {
                        last_end = self.pos;
                    }
                }
                '{' | '[' | '(' => {
                    depth += 1;
                    self.bump();
                    last_end = self.pos;
                }
                '}' if depth == 0 => break,
                ',' if depth == 0 => break,
                ']' | ')' if depth == 0 => {
                    return Err(SettingsError::Structure(format!(
                        "unbalanced `{c}` in value of `{key}` at byte {}",
                        self.pos
                    )));
                }
                '}' | ']' | ')' => {
                    depth -= 1;
                    self.bump();
                    last_end = self.pos;
                }
                c if c.is_whitespace() => self.bump(),
                _ => {
                    self.bump();
                    last_end = self.pos;
                }
            }
        }

        if last_end == value_start {
            return Err(SettingsError::Structure(format!(
                "key `{key}` has no value"
            )));
        }
        let value_span = Span::new(value_start, last_end);

        let mut trailing_comment = None;
        if self.peek() == Some(',') {
            self.bump();
            let before_trailing = self.pos;
            self.skip_spaces_same_line();
            if self.at("//") {
                trailing_comment = Some(self.read_line_comment());
            } else {
                self.pos = before_trailing;
            }
        }

        Ok(RawEntry {
            key,
            key_span,
            value_span,
            leading_comments,
            trailing_comment,
        })
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
