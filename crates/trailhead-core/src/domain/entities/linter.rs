//! Mutable builder for the eslint configuration.
//!
//! Planner rules update one `LinterConfig` in sequence. Every mutation is
//! idempotent so that replaying the rule sequence cannot duplicate entries.

use serde::Serialize;
use serde_json::{Map, Value, json};

/// Rules scoped to a set of file globs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOverride {
    pub files: Vec<String>,
    pub rules: Map<String, Value>,
}

impl FileOverride {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            rules: Map::new(),
        }
    }

    pub fn rule(mut self, name: impl Into<String>, setting: Value) -> Self {
        self.rules.insert(name.into(), setting);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinterConfig {
    plugins: Vec<String>,
    extends: Vec<String>,
    rules: Map<String, Value>,
    overrides: Vec<FileOverride>,
}

impl LinterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin; plugins behave as an insertion-ordered set.
    pub fn add_plugin(&mut self, plugin: impl Into<String>) {
        let plugin = plugin.into();
        if !self.plugins.contains(&plugin) {
            self.plugins.push(plugin);
        }
    }

    /// Append a rule-set extension. Later extensions win rule conflicts, so
    /// an extension already present keeps its original position.
    pub fn add_extension(&mut self, extension: impl Into<String>) {
        let extension = extension.into();
        if !self.extends.contains(&extension) {
            self.extends.push(extension);
        }
    }

    /// Merge rule settings; a rule set twice keeps the latest setting.
    pub fn add_rules<I, K>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (name, setting) in rules {
            self.rules.insert(name.into(), setting);
        }
    }

    pub fn add_override(&mut self, file_override: FileOverride) {
        if !self.overrides.contains(&file_override) {
            self.overrides.push(file_override);
        }
    }

    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    pub fn extends(&self) -> &[String] {
        &self.extends
    }

    pub fn rules(&self) -> &Map<String, Value> {
        &self.rules
    }

    pub fn rule(&self, name: &str) -> Option<&Value> {
        self.rules.get(name)
    }

    pub fn overrides(&self) -> &[FileOverride] {
        &self.overrides
    }

    /// `.eslintrc.json` document.
    pub fn to_json(&self) -> Value {
        json!({
            "plugins": self.plugins,
            "extends": self.extends,
            "rules": self.rules,
            "overrides": self.overrides,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugins_are_deduplicated() {
        let mut linter = LinterConfig::new();
        linter.add_plugin("jsdoc");
        linter.add_plugin("unicorn");
        linter.add_plugin("jsdoc");
        assert_eq!(linter.plugins(), ["jsdoc", "unicorn"]);
    }

    #[test]
    fn extensions_keep_first_position() {
        let mut linter = LinterConfig::new();
        linter.add_extension("plugin:jsdoc/recommended");
        linter.add_extension("prettier");
        linter.add_extension("plugin:jsdoc/recommended");
        assert_eq!(linter.extends(), ["plugin:jsdoc/recommended", "prettier"]);
    }

    #[test]
    fn later_rule_settings_win() {
        let mut linter = LinterConfig::new();
        linter.add_rules([("jsdoc/check-syntax", json!("warn"))]);
        linter.add_rules([("jsdoc/check-syntax", json!("error"))]);
        assert_eq!(linter.rule("jsdoc/check-syntax"), Some(&json!("error")));
        assert_eq!(linter.rules().len(), 1);
    }

    #[test]
    fn identical_overrides_are_ignored() {
        let mut linter = LinterConfig::new();
        let o = FileOverride::new([".projenrc.js"]).rule("unicorn/prefer-module", json!("off"));
        linter.add_override(o.clone());
        linter.add_override(o);
        assert_eq!(linter.overrides().len(), 1);
    }

    #[test]
    fn json_document_shape() {
        let mut linter = LinterConfig::new();
        linter.add_plugin("unicorn");
        linter.add_extension("plugin:unicorn/recommended");
        linter.add_override(FileOverride::new(["a.js"]).rule("r", json!("off")));

        let doc = linter.to_json();
        assert_eq!(doc["plugins"], json!(["unicorn"]));
        assert_eq!(doc["extends"], json!(["plugin:unicorn/recommended"]));
        assert_eq!(doc["overrides"][0]["files"], json!(["a.js"]));
        assert_eq!(doc["overrides"][0]["rules"]["r"], json!("off"));
    }
}
