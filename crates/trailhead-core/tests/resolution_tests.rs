//! Resolution through the public API only.

use serde_json::json;
use trailhead_core::prelude::*;

fn widget() -> OptionLayer {
    OptionLayer::new().with(keys::NAME, "widget")
}

#[test]
fn precedence_is_overrides_then_preset_then_defaults() {
    let defaults = builtin_defaults();
    let preset = OptionLayer::new()
        .with(keys::CSPELL_PATH, ".cspell.json")
        .with(keys::LICENSE, "MIT");
    let overrides = widget().with(keys::LICENSE, "ISC");

    let config = resolve(&defaults, &preset, &overrides).unwrap();
    assert_eq!(config.paths().cspell.to_slash_string(), ".cspell.json");
    assert_eq!(config.license(), Some("ISC"));
}

#[test]
fn derived_urls_place_the_name() {
    let config = resolve(&builtin_defaults(), &OptionLayer::new(), &widget()).unwrap();
    for url in [
        config.homepage_url(),
        config.repository_url(),
        config.issues_url(),
    ] {
        assert!(url.contains("/widget"), "{url}");
    }
}

#[test]
fn preset_option_records_are_not_deep_merged() {
    let preset = OptionLayer::new().with(
        keys::VSCODE_EXTENSIONS_OPTIONS,
        json!({ "recommendations": ["esbenp.prettier-vscode"] }),
    );
    let config = resolve(&builtin_defaults(), &preset, &widget()).unwrap();
    assert_eq!(
        config.options().vscode_extensions_options["recommendations"],
        json!(["esbenp.prettier-vscode"])
    );
}

#[test]
fn resolved_configuration_serializes_with_option_keys() {
    let config = resolve(&builtin_defaults(), &OptionLayer::new(), &widget()).unwrap();
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["packageName"], "@mountainpass/widget");
    assert_eq!(value["flags"]["cSpell"], true);
    assert_eq!(value["paths"]["vscodeExtensions"], "vscode/extensions.json");
}

#[test]
fn feature_names_parse_loosely() {
    assert_eq!("eslint-jsdoc".parse::<Feature>().unwrap(), Feature::EslintJsdoc);
    assert_eq!("CSPELL".parse::<Feature>().unwrap(), Feature::CSpell);
    assert!("tslint".parse::<Feature>().is_err());
}

#[test]
fn release_settings_are_not_part_of_the_configuration() {
    let layer = widget().with("defaultReleaseBranch", "trunk");
    let config = resolve(&builtin_defaults(), &OptionLayer::new(), &layer).unwrap();
    let value = serde_json::to_value(&config).unwrap();
    assert!(value.get("defaultReleaseBranch").is_none());
    assert!(!builtin_defaults().supplies("defaultReleaseBranch"));
}
