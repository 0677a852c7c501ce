//! Option layers and their shallow merge.
//!
//! An [`OptionLayer`] is a plain key/value record. Three layers (builtin
//! defaults, a preset, caller overrides) are merged with [`merge_layers`];
//! later layers win per top-level key, and nested records are replaced whole.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::domain::{error::DomainError, value_objects::Feature};

/// Option keys understood by the resolver.
pub mod keys {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const PACKAGE_SCOPE: &str = "packageScope";
    pub const GITHUB_OWNER: &str = "githubOwner";
    pub const PACKAGE_NAME: &str = "packageName";
    pub const HOMEPAGE: &str = "homepage";
    pub const REPOSITORY: &str = "repository";
    pub const BUGS_URL: &str = "bugsUrl";
    pub const README: &str = "readme";
    pub const COMMITLINT_OPTIONS: &str = "commitlintOptions";
    pub const CSPELL_OPTIONS: &str = "cSpellOptions";
    pub const VSCODE_EXTENSIONS_OPTIONS: &str = "vscodeExtensionsOptions";
    pub const VSCODE_EXTENSIONS_PATH: &str = "vscodeExtensionsPath";
    pub const CSPELL_PATH: &str = "cSpellPath";
    pub const HUSKY_PRE_COMMIT_COMMANDS: &str = "huskyPreCommitCommands";
    pub const LICENSE: &str = "license";
    pub const AUTHOR_NAME: &str = "authorName";
    pub const AUTHOR_EMAIL: &str = "authorEmail";
    pub const AUTHOR_URL: &str = "authorUrl";
    pub const AUTHOR_ORGANIZATION: &str = "authorOrganization";
}

/// One layer of configuration options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionLayer(Map<String, Value>);

impl OptionLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DomainError::InvalidLayer {
                found: json_type_name(&other),
            }),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// A key counts as supplied unless it is absent or `null`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn supplies(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for OptionLayer {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Shallow merge, lowest precedence first.
///
/// For each top-level key the last layer that supplies a non-null value wins;
/// object values are taken whole rather than merged recursively.
pub fn merge_layers<'a, I>(layers: I) -> OptionLayer
where
    I: IntoIterator<Item = &'a OptionLayer>,
{
    let mut merged = Map::new();
    for layer in layers {
        for (key, value) in &layer.0 {
            if !value.is_null() {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    OptionLayer(merged)
}

/// Builtin defaults, built fresh on every call.
pub fn builtin_defaults() -> OptionLayer {
    OptionLayer::new()
        .with(keys::PACKAGE_SCOPE, "mountainpass")
        .with(keys::GITHUB_OWNER, "mountain-pass")
        .with(keys::LICENSE, "Apache-2.0")
        .with(keys::AUTHOR_NAME, "Mountain Pass")
        .with(keys::AUTHOR_EMAIL, "info@mountain-pass.com.au")
        .with(keys::AUTHOR_URL, "https://mountain-pass.com.au")
        .with(keys::AUTHOR_ORGANIZATION, true)
        .with(Feature::Prettier.key(), true)
        .with(Feature::Eslint.key(), true)
        .with(Feature::Docgen.key(), true)
        .with(Feature::EslintUnicorn.key(), true)
        .with(Feature::EslintJsdoc.key(), true)
        .with(Feature::Husky.key(), true)
        .with(Feature::Commitlint.key(), true)
        .with(
            keys::COMMITLINT_OPTIONS,
            json!({ "extends": ["@commitlint/config-conventional"] }),
        )
        .with(Feature::CSpell.key(), true)
        .with(
            keys::CSPELL_OPTIONS,
            json!({ "language": "en-GB", "words": default_cspell_words() }),
        )
        .with(Feature::VscodeExtensions.key(), true)
        .with(
            keys::VSCODE_EXTENSIONS_OPTIONS,
            json!({
                "recommendations": [
                    "dbaeumer.vscode-eslint",
                    "streetsidesoftware.code-spell-checker",
                ]
            }),
        )
        .with(keys::VSCODE_EXTENSIONS_PATH, "vscode/extensions.json")
        .with(keys::CSPELL_PATH, "cspell.json")
        .with(
            keys::HUSKY_PRE_COMMIT_COMMANDS,
            json!(["npm test", "npm run eslint"]),
        )
}

/// Words every generated project's spell checker accepts out of the box.
pub fn default_cspell_words() -> Vec<&'static str> {
    vec![
        "commitlint",
        "docgen",
        "projen",
        "projenrc",
        "unbump",
        "mountainpass",
        "dbaeumer",
        "outdir",
    ]
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_layers_win() {
        let defaults = OptionLayer::new().with("husky", true).with("license", "MIT");
        let preset = OptionLayer::new().with("husky", false);
        let overrides = OptionLayer::new().with("license", "ISC");

        let merged = merge_layers([&defaults, &preset, &overrides]);
        assert_eq!(merged.get("husky"), Some(&json!(false)));
        assert_eq!(merged.get("license"), Some(&json!("ISC")));
    }

    #[test]
    fn nested_records_are_replaced_not_merged() {
        let defaults = OptionLayer::new().with(
            keys::CSPELL_OPTIONS,
            json!({ "language": "en-GB", "words": ["projen"] }),
        );
        let overrides =
            OptionLayer::new().with(keys::CSPELL_OPTIONS, json!({ "ignorePaths": ["dist"] }));

        let merged = merge_layers([&defaults, &overrides]);
        assert_eq!(
            merged.get(keys::CSPELL_OPTIONS),
            Some(&json!({ "ignorePaths": ["dist"] }))
        );
    }

    #[test]
    fn null_does_not_override() {
        let defaults = OptionLayer::new().with("license", "MIT");
        let overrides = OptionLayer::new().with("license", Value::Null);

        let merged = merge_layers([&defaults, &overrides]);
        assert_eq!(merged.get("license"), Some(&json!("MIT")));
        assert!(!overrides.supplies("license"));
    }

    #[test]
    fn from_value_requires_an_object() {
        assert!(OptionLayer::from_value(json!({ "name": "widget" })).is_ok());
        assert_eq!(
            OptionLayer::from_value(json!(["widget"])),
            Err(DomainError::InvalidLayer { found: "an array" })
        );
    }

    #[test]
    fn builtin_defaults_are_fresh_values() {
        let mut first = builtin_defaults();
        first.set("husky", false);
        assert_eq!(builtin_defaults().get("husky"), Some(&json!(true)));
    }

    #[test]
    fn builtin_defaults_do_not_name_the_project() {
        assert!(!builtin_defaults().supplies(keys::NAME));
    }
}
