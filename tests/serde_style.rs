#![cfg(feature = "derive_serde_style")]

use ansi_color_codes::{ColorCode, Style};

#[test]
fn deserializes_with_default_modifiers() {
    let style: Style = serde_json::from_str(
        r#"{ "color": "green", "target": "foreground", "intensity": "bright" }"#,
    )
    .unwrap();
    assert_eq!(style, Style::bright_green());
    assert_eq!(ColorCode::new(style).code(), "\x1b[92m");
}

#[test]
fn serializes_flat() {
    let json = serde_json::to_value(Style::on_red().with_bold()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "color": "red",
            "target": "background",
            "intensity": "normal",
            "underline": false,
            "bold": true,
        })
    );
}

#[test]
fn unknown_names_are_rejected() {
    let result = serde_json::from_str::<Style>(
        r#"{ "color": "purple", "target": "foreground", "intensity": "bright" }"#,
    );
    assert!(result.is_err());
}
