use super::SettingsDocument;
use crate::error::SettingsError;
use crate::value::{SettingType, SettingValue};

const SETTINGS_JS: &str = r#"import { readFileSync } from 'fs';

const settings = {
    "minecraft_version": "1.21.4", // supports both 1.20 and 1.21
    "host": "127.0.0.1",
    "port": process.env.MINECRAFT_PORT || 55916,
    "profiles": [
        "./andy.json",
        // "./profiles/gpt.json",
        // "./profiles/claude.json",
    ],
    "max_messages": 15,
    "allow_insecure_coding": false,
};
export default settings;
"#;

#[test]
fn loads_typed_entries_in_declaration_order() {
    let doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    assert!(!doc.is_empty());
    assert_eq!(doc.len(), 6);

    let keys: Vec<&str> = doc.keys().collect();
    assert_eq!(
        keys,
        vec![
            "minecraft_version",
            "host",
            "port",
            "profiles",
            "max_messages",
            "allow_insecure_coding"
        ]
    );

    assert_eq!(
        doc.get("minecraft_version").unwrap(),
        &SettingValue::Str("1.21.4".to_string())
    );
    assert_eq!(doc.get("max_messages").unwrap(), &SettingValue::Number(15.0));
    assert_eq!(
        doc.get("allow_insecure_coding").unwrap(),
        &SettingValue::Bool(false)
    );
}

#[test]
fn entry_spans_point_at_the_value_literal() {
    let doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    let host = doc.entry("host").unwrap();
    let span = host.span();
    assert_eq!(&SETTINGS_JS[span.start..span.end], "\"127.0.0.1\"");
}

#[test]
fn env_override_entry_is_raw_and_preserved() {
    let doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    let port = doc.entry("port").unwrap();
    assert_eq!(port.declared_type(), SettingType::Raw);
    assert_eq!(
        port.value(),
        &SettingValue::Raw("process.env.MINECRAFT_PORT || 55916".to_string())
    );
}

#[test]
fn commented_list_entries_become_alternatives() {
    let doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    let profiles = doc.entry("profiles").unwrap();
    assert_eq!(
        profiles.alternatives(),
        &[
            "./profiles/gpt.json".to_string(),
            "./profiles/claude.json".to_string()
        ]
    );
}

#[test]
fn round_trip_without_edits_is_byte_identical() {
    let doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    let out = doc.render(SETTINGS_JS).unwrap();
    assert_eq!(out, SETTINGS_JS);
}

#[test]
fn edit_rewrites_only_the_touched_span() {
    let mut doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    doc.set("max_messages", SettingValue::Number(20.0)).unwrap();

    let out = doc.render(SETTINGS_JS).unwrap();
    assert_eq!(out, SETTINGS_JS.replace("\"max_messages\": 15,", "\"max_messages\": 20,"));
    // Comments and the env-var override are untouched.
    assert!(out.contains("// supports both 1.20 and 1.21"));
    assert!(out.contains("process.env.MINECRAFT_PORT || 55916"));
}

#[test]
fn promote_alternative_and_set_number_together() {
    let source = "settings = { profiles: [\"./andy.json\"], // [\"./bob.json\"]\n max_messages: 15, allow_insecure_coding: false }";
    let mut doc = SettingsDocument::load(source).unwrap();

    assert_eq!(
        doc.get("profiles").unwrap(),
        &SettingValue::StringList(vec!["./andy.json".to_string()])
    );
    assert_eq!(
        doc.entry("profiles").unwrap().alternatives(),
        &["./bob.json".to_string()]
    );
    assert_eq!(doc.get("max_messages").unwrap(), &SettingValue::Number(15.0));
    assert_eq!(
        doc.get("allow_insecure_coding").unwrap(),
        &SettingValue::Bool(false)
    );

    doc.set("max_messages", SettingValue::Number(20.0)).unwrap();
    doc.add_to_list("profiles", "./bob.json").unwrap();

    let out = doc.render(source).unwrap();
    assert!(out.contains("profiles: [\"./andy.json\", \"./bob.json\"],"));
    assert!(out.contains("max_messages: 20,"));
    assert!(out.contains("allow_insecure_coding: false"));
    // The alternative's comment sits outside the value span and survives.
    assert!(out.contains("// [\"./bob.json\"]"));
}

#[test]
fn promoting_an_alternative_is_idempotent() {
    let mut doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    doc.add_to_list("profiles", "./profiles/gpt.json").unwrap();
    let once = doc.clone();
    doc.add_to_list("profiles", "./profiles/gpt.json").unwrap();

    assert_eq!(doc.get("profiles").unwrap(), once.get("profiles").unwrap());
    assert_eq!(
        doc.entry("profiles").unwrap().alternatives(),
        once.entry("profiles").unwrap().alternatives()
    );
    assert_eq!(
        doc.entry("profiles").unwrap().alternatives(),
        &["./profiles/claude.json".to_string()]
    );
}

#[test]
fn removing_an_absent_value_is_a_noop() {
    let mut doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    doc.remove_from_list("profiles", "./not-there.json").unwrap();
    assert_eq!(
        doc.get("profiles").unwrap(),
        &SettingValue::StringList(vec!["./andy.json".to_string()])
    );
}

#[test]
fn removed_values_do_not_return_to_alternatives() {
    let mut doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    doc.remove_from_list("profiles", "./andy.json").unwrap();
    assert_eq!(
        doc.get("profiles").unwrap(),
        &SettingValue::StringList(Vec::new())
    );
    assert!(
        !doc.entry("profiles")
            .unwrap()
            .alternatives()
            .contains(&"./andy.json".to_string())
    );
}

#[test]
fn set_with_wrong_shape_fails_and_leaves_value_unchanged() {
    let mut doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    let err = doc
        .set("max_messages", SettingValue::Str("twenty".to_string()))
        .unwrap_err();
    assert!(matches!(err, SettingsError::TypeMismatch { .. }));
    assert_eq!(doc.get("max_messages").unwrap(), &SettingValue::Number(15.0));
}

#[test]
fn raw_entries_cannot_be_edited() {
    let mut doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    let err = doc.set("port", SettingValue::Number(25565.0)).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedEdit(_)));
    // Even a shape-matching raw write is refused.
    let err = doc
        .set("port", SettingValue::Raw("55916".to_string()))
        .unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedEdit(_)));
}

#[test]
fn unknown_keys_are_rejected() {
    let mut doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    assert!(matches!(
        doc.get("brand_new"),
        Err(SettingsError::UnknownKey(_))
    ));
    assert!(matches!(
        doc.set("brand_new", SettingValue::Bool(true)),
        Err(SettingsError::UnknownKey(_))
    ));
}

#[test]
fn externally_modified_text_fails_stale() {
    let mut doc = SettingsDocument::load(SETTINGS_JS).unwrap();
    doc.set("max_messages", SettingValue::Number(20.0)).unwrap();

    let modified = SETTINGS_JS.replace("127.0.0.1", "0.0.0.0");
    let err = doc.render(&modified).unwrap_err();
    assert!(matches!(err, SettingsError::StaleFile));
}

#[test]
fn quote_style_of_the_original_literal_is_kept() {
    let source = "const settings = { language: 'en', profiles: ['./andy.json'] };";
    let mut doc = SettingsDocument::load(source).unwrap();
    doc.set("language", SettingValue::Str("fr".to_string()))
        .unwrap();
    doc.add_to_list("profiles", "./bob.json").unwrap();

    let out = doc.render(source).unwrap();
    assert!(out.contains("language: 'fr'"));
    assert!(out.contains("profiles: ['./andy.json', './bob.json']"));
}

#[test]
fn malformed_value_degrades_to_raw_without_failing_load() {
    let source = "const settings = { broken: \"bad \\uXYZW escape\", port: 1 };";
    let doc = SettingsDocument::load(source).unwrap();

    let broken = doc.entry("broken").unwrap();
    assert_eq!(broken.declared_type(), SettingType::Raw);
    assert_eq!(
        broken.value(),
        &SettingValue::Raw("\"bad \\uXYZW escape\"".to_string())
    );
    // The rest of the document is unaffected.
    assert_eq!(doc.get("port").unwrap(), &SettingValue::Number(1.0));
    assert_eq!(doc.render(source).unwrap(), source);
}

#[test]
fn leading_comment_with_key_shape_contributes_alternatives() {
    let source = "const settings = {\n    // \"only_chat_with\": [\"player1\"],\n    \"only_chat_with\": [],\n};";
    let doc = SettingsDocument::load(source).unwrap();
    assert_eq!(
        doc.entry("only_chat_with").unwrap().alternatives(),
        &["player1".to_string()]
    );
}

#[test]
fn object_lists_are_opaque_but_editable_as_a_unit() {
    let source = "const settings = { agents: [{name: \"a\"}, {name: \"b\"}] };";
    let mut doc = SettingsDocument::load(source).unwrap();
    assert_eq!(
        doc.entry("agents").unwrap().declared_type(),
        SettingType::ObjectList
    );

    doc.set(
        "agents",
        SettingValue::ObjectList(vec!["{name: \"a\"}".to_string()]),
    )
    .unwrap();
    let out = doc.render(source).unwrap();
    assert_eq!(out, "const settings = { agents: [{name: \"a\"}] };");
}
