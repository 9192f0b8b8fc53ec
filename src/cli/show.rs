use anyhow::Result;
use colored::*;
use serde_json::{Map, Value as JsonValue, json};

use crate::catalog;
use crate::document::SettingEntry;
use crate::error::SettingsError;
use crate::value::{SettingType, render};

use super::session::EditSession;

pub(crate) fn handle_list(session: &EditSession, json: bool) -> Result<()> {
    if json {
        let mut map = Map::new();
        for entry in session.document.entries() {
            map.insert(entry.key().to_string(), entry_json(entry));
        }
        println!("{}", serde_json::to_string_pretty(&JsonValue::Object(map))?);
        return Ok(());
    }

    println!("📋 Settings from {}", session.path.display());

    let mut shown: Vec<&str> = Vec::new();
    for category in catalog::CATEGORIES {
        let in_category: Vec<&SettingEntry> = category
            .entries
            .iter()
            .filter_map(|catalog_entry| session.document.entry(catalog_entry.key))
            .collect();
        if in_category.is_empty() {
            continue;
        }

        println!("\n{}", category.title.bold());
        for entry in in_category {
            print_entry(entry);
            shown.push(entry.key());
        }
    }

    let others: Vec<&SettingEntry> = session
        .document
        .entries()
        .filter(|entry| !shown.contains(&entry.key()))
        .collect();
    if !others.is_empty() {
        println!("\n{}", "Other".bold());
        for entry in others {
            print_entry(entry);
        }
    }

    Ok(())
}

pub(crate) fn handle_get(session: &EditSession, key: &str, json: bool) -> Result<()> {
    let value = session.document.get(key)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&value.to_json())?);
    } else {
        println!("{}", render(value, Default::default()));
        if let Some(description) = catalog::description(key) {
            println!("{}", description.dimmed());
        }
    }
    Ok(())
}

pub(crate) fn handle_alternatives(session: &EditSession, key: &str) -> Result<()> {
    let Some(entry) = session.document.entry(key) else {
        return Err(SettingsError::UnknownKey(key.to_string()).into());
    };

    let alternatives = entry.alternatives();
    if alternatives.is_empty() {
        println!("No known alternatives for `{key}`.");
        return Ok(());
    }

    println!("💡 Known alternatives for {}:", key.bold());
    for alternative in alternatives {
        println!("   {}", alternative.cyan());
    }
    println!("\nAdd one with: mindset add {key} <value>");
    Ok(())
}

fn print_entry(entry: &SettingEntry) {
    let value_text = render(entry.value(), Default::default());
    let rendered = match entry.declared_type() {
        SettingType::Bool => value_text.yellow(),
        SettingType::Number => value_text.cyan(),
        SettingType::String => value_text.green(),
        SettingType::StringList | SettingType::ObjectList => value_text.green(),
        SettingType::Raw => value_text.dimmed(),
    };
    let mut line = format!("   {:<24} {}", entry.key(), rendered);
    if entry.declared_type() == SettingType::Raw {
        line.push_str(&format!(" {}", "(not editable)".dimmed()));
    }
    if !entry.alternatives().is_empty() {
        line.push_str(&format!(
            " {}",
            format!("(+{} alternatives)", entry.alternatives().len()).dimmed()
        ));
    }
    println!("{line}");
}

fn entry_json(entry: &SettingEntry) -> JsonValue {
    let mut object = json!({
        "type": entry.declared_type().name(),
        "value": entry.value().to_json(),
    });
    if !entry.alternatives().is_empty() {
        object["alternatives"] = json!(entry.alternatives());
    }
    if let Some(description) = catalog::description(entry.key()) {
        object["description"] = json!(description);
    }
    object
}
