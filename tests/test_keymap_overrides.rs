mod common;

use common::TestEnv;
use crossterm::event::{KeyCode, KeyModifiers};
use my_alarm::config::Config;
use my_alarm::keymap::{Action, KeyBinding, Keymap, KeymapPreset};

#[test]
fn test_keymap_override_in_config() {
    let env = TestEnv::new();

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // 'n' creates an alarm instead of vim's 'o'
    config
        .keymap
        .overrides
        .push(KeyBinding::new("n", Action::Create));
    // 'r' toggles an alarm on/off instead of 'a'
    config
        .keymap
        .overrides
        .push(KeyBinding::new("r", Action::ToggleActive));

    config.save(&env.config_path).unwrap();
    let loaded = Config::load_or_create(&env.config_path).unwrap();

    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('n'), KeyModifiers::NONE),
        Some(Action::Create)
    );
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('r'), KeyModifiers::NONE),
        Some(Action::ToggleActive)
    );

    // Preset bindings for overridden actions are gone
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('o'), KeyModifiers::NONE),
        None
    );
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('a'), KeyModifiers::NONE),
        None
    );

    // Untouched vim bindings still work
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_override_wins_over_preset_key() {
    // 'w' is smart wake in every preset; the override takes the key
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![KeyBinding::new("w", Action::MoveUp)],
    };

    assert_eq!(
        keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );
    assert_eq!(keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE), None);
    assert_eq!(keymap.get_key_display_for_action(Action::MoveUp), "W");
    assert!(!keymap.navigation_display().contains('K'));
}

#[test]
fn test_keymap_override_with_modifiers() {
    let env = TestEnv::new();

    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+w", Action::ToggleSmartWake));

    config.save(&env.config_path).unwrap();
    let loaded = Config::load_or_create(&env.config_path).unwrap();

    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('w'), KeyModifiers::CONTROL),
        Some(Action::ToggleSmartWake)
    );
    assert_ne!(
        loaded.keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::ToggleSmartWake)
    );
}

#[test]
fn test_keymap_override_serialization_format() {
    let env = TestEnv::new();

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Emacs;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("f1", Action::Help));
    config.save(&env.config_path).unwrap();

    let content = std::fs::read_to_string(&env.config_path).unwrap();
    assert!(content.contains("[keymap]"));
    assert!(content.contains("preset = \"emacs\""));
    assert!(content.contains("overrides"));
    assert!(content.contains("api_base_url"));

    let loaded = Config::load_or_create(&env.config_path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.keymap.get_action(KeyCode::F(1), KeyModifiers::NONE),
        Some(Action::Help)
    );
    // emacs help key is shadowed by the override
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('h'), KeyModifiers::CONTROL),
        None
    );
}

#[test]
fn test_missing_keymap_section_uses_standard() {
    let env = TestEnv::new();
    std::fs::write(&env.config_path, "api_base_url = \"http://10.1.1.1:3000\"\n").unwrap();

    let loaded = Config::load_or_create(&env.config_path).unwrap();
    assert_eq!(loaded.api_base_url, "http://10.1.1.1:3000");
    assert_eq!(loaded.keymap, Keymap::default());
    assert!(loaded.seed_sample_alarms);
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('c'), KeyModifiers::NONE),
        Some(Action::Create)
    );
}
