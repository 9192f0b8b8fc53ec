use anyhow::{Result, bail};
use colored::*;

use crate::error::SettingsError;
use crate::value::{SettingType, SettingValue, parse_literal, render};

use super::session::EditSession;

pub(crate) fn handle_set(session: &mut EditSession, key: &str, input: &str) -> Result<()> {
    let declared = match session.document.entry(key) {
        Some(entry) => entry.declared_type(),
        None => return Err(SettingsError::UnknownKey(key.to_string()).into()),
    };

    let value = coerce_input(key, declared, input)?;
    session.document.set(key, value)?;
    session.save()?;

    let current = session.document.get(key)?;
    println!(
        "✅ {} = {} saved to {}",
        key.bold(),
        render(current, Default::default()).green(),
        session.path.display()
    );
    Ok(())
}

pub(crate) fn handle_add(session: &mut EditSession, key: &str, value: &str) -> Result<()> {
    let was_alternative = session
        .document
        .entry(key)
        .map(|entry| entry.alternatives().contains(&value.to_string()))
        .unwrap_or(false);

    session.document.add_to_list(key, value)?;
    session.save()?;

    if was_alternative {
        println!("✅ Promoted known alternative {} into {}", value.green(), key.bold());
    } else {
        println!("✅ Added {} to {}", value.green(), key.bold());
    }
    Ok(())
}

pub(crate) fn handle_remove(session: &mut EditSession, key: &str, value: &str) -> Result<()> {
    session.document.remove_from_list(key, value)?;
    session.save()?;
    println!("✅ Removed {} from {}", value.yellow(), key.bold());
    Ok(())
}

/// Interprets the command-line argument against the entry's declared type.
/// Strings are taken verbatim (surrounding quotes optional); lists accept a
/// JavaScript-style literal.
fn coerce_input(key: &str, declared: SettingType, input: &str) -> Result<SettingValue> {
    let trimmed = input.trim();
    match declared {
        SettingType::Bool => match trimmed {
            "true" => Ok(SettingValue::Bool(true)),
            "false" => Ok(SettingValue::Bool(false)),
            other => bail!("`{key}` is a boolean; expected true or false, got `{other}`"),
        },
        SettingType::Number => match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(SettingValue::Number(n)),
            _ => bail!("`{key}` is a number; `{trimmed}` does not parse as one"),
        },
        SettingType::String => {
            // Accept a quoted literal, else take the argument as-is.
            if trimmed.starts_with('"') || trimmed.starts_with('\'') {
                if let Ok(value @ SettingValue::Str(_)) = parse_literal(trimmed) {
                    return Ok(value);
                }
            }
            Ok(SettingValue::Str(trimmed.to_string()))
        }
        SettingType::StringList => match parse_literal(trimmed) {
            Ok(value @ SettingValue::StringList(_)) => Ok(value),
            _ => bail!(
                "`{key}` is a string list; pass a literal like '[\"a\", \"b\"]' \
                 or use `mindset add`/`mindset remove`"
            ),
        },
        SettingType::ObjectList => match parse_literal(trimmed) {
            Ok(value @ SettingValue::ObjectList(_)) => Ok(value),
            _ => bail!("`{key}` is an object list; pass a literal like '[{{...}}, {{...}}]'"),
        },
        SettingType::Raw => Err(SettingsError::UnsupportedEdit(key.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::coerce_input;
    use crate::value::{SettingType, SettingValue};

    #[test]
    fn booleans_and_numbers_coerce_strictly() {
        assert_eq!(
            coerce_input("speak", SettingType::Bool, "true").unwrap(),
            SettingValue::Bool(true)
        );
        assert!(coerce_input("speak", SettingType::Bool, "yes").is_err());
        assert_eq!(
            coerce_input("port", SettingType::Number, "55916").unwrap(),
            SettingValue::Number(55916.0)
        );
        assert!(coerce_input("port", SettingType::Number, "default").is_err());
    }

    #[test]
    fn strings_accept_bare_and_quoted_input() {
        assert_eq!(
            coerce_input("language", SettingType::String, "en").unwrap(),
            SettingValue::Str("en".to_string())
        );
        assert_eq!(
            coerce_input("language", SettingType::String, "'en'").unwrap(),
            SettingValue::Str("en".to_string())
        );
    }

    #[test]
    fn lists_require_a_literal() {
        assert_eq!(
            coerce_input("profiles", SettingType::StringList, "[\"a\"]").unwrap(),
            SettingValue::StringList(vec!["a".to_string()])
        );
        assert!(coerce_input("profiles", SettingType::StringList, "a, b").is_err());
    }

    #[test]
    fn raw_entries_refuse_coercion() {
        assert!(coerce_input("port", SettingType::Raw, "1234").is_err());
    }
}
