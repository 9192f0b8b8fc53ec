use super::types::{QuoteStyle, SettingValue};

/// Renders a typed value back to literal text. `style` is the quote style of
/// the entry's original literal so edited strings keep the file's look.
pub fn render(value: &SettingValue, style: QuoteStyle) -> String {
    match value {
        SettingValue::Bool(b) => b.to_string(),
        SettingValue::Number(n) => render_number(*n),
        SettingValue::Str(s) => render_string(s, style),
        SettingValue::StringList(items) => {
            if items.is_empty() {
                "[]".to_string()
            } else {
                let rendered: Vec<String> =
                    items.iter().map(|item| render_string(item, style)).collect();
                format!("[{}]", rendered.join(", "))
            }
        }
        SettingValue::ObjectList(objects) => {
            if objects.is_empty() {
                "[]".to_string()
            } else {
                format!("[{}]", objects.join(", "))
            }
        }
        SettingValue::Raw(text) => text.clone(),
    }
}

/// Integral values render without a fractional part; nothing else is
/// reformatted (no trailing zeros, no separators).
fn render_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

fn render_string(s: &str, style: QuoteStyle) -> String {
    let quote = style.quote_char();
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
