// SPDX-License-Identifier: MPL-2.0
use iced_alert::config::{self, Config, StyleSettings};
use iced_alert::error::Error;
use iced_alert::ui::alert::{Alert, StyleConfig};
use iced_alert::ui::color::hex_color;
use iced_alert::ui::design_tokens::palette;
use std::fs;
use tempfile::tempdir;

#[test]
fn style_settings_survive_a_save_and_load() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("IcedAlert").join("settings.toml");

    let config = Config {
        style: Some(StyleSettings {
            hair_color: Some("#FF9500".to_string()),
            destructive_color: Some("#F00".to_string()),
            button_font: Some(17.0),
            ..StyleSettings::default()
        }),
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, config);

    let style = loaded.style_config().expect("valid style");
    assert_eq!(style.hair_color, hex_color("#FF9500"));
    assert_eq!(style.destructive_color, hex_color("#FF0000"));
    assert_eq!(style.button_font, 17.0);
    assert_eq!(style.message_color, palette::TEXT);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn malformed_color_in_settings_is_reported() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[style]\nhair_color = \"blue\"\n").expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("valid toml");
    assert!(matches!(loaded.style_config(), Err(Error::Color(_))));
}

#[test]
fn global_style_only_affects_future_alerts() {
    let orange = hex_color("#FF8000");
    let before = Alert::builder("OK").build();

    StyleConfig::set_global(StyleConfig::global().with_hair_color(orange));
    let after = Alert::builder("OK").build();
    let injected = Alert::builder("OK").style(StyleConfig::default()).build();

    assert_ne!(before.style().hair_color, orange);
    assert_eq!(after.style().hair_color, orange);
    assert_eq!(injected.style().hair_color, palette::ACCENT);

    StyleConfig::set_global(StyleConfig::default());
}
