//! The resolved configuration that drives one generation run.
//!
//! Built once by [`crate::domain::resolver::resolve`]. After construction only
//! the contributors list changes, and only by appending.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{entities::common::RelativePath, value_objects::Feature};

/// Feature flags, one per planner rule gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub commitlint: bool,
    pub husky: bool,
    pub eslint_jsdoc: bool,
    pub eslint_unicorn: bool,
    #[serde(rename = "cSpell")]
    pub cspell: bool,
    pub vscode_extensions: bool,
    pub prettier: bool,
    #[serde(rename = "eslint")]
    pub eslint_enabled: bool,
    pub docgen: bool,
}

impl FeatureFlags {
    pub const fn all_enabled() -> Self {
        Self {
            commitlint: true,
            husky: true,
            eslint_jsdoc: true,
            eslint_unicorn: true,
            cspell: true,
            vscode_extensions: true,
            prettier: true,
            eslint_enabled: true,
            docgen: true,
        }
    }

    pub const fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Commitlint => self.commitlint,
            Feature::Husky => self.husky,
            Feature::EslintJsdoc => self.eslint_jsdoc,
            Feature::EslintUnicorn => self.eslint_unicorn,
            Feature::CSpell => self.cspell,
            Feature::VscodeExtensions => self.vscode_extensions,
            Feature::Prettier => self.prettier,
            Feature::Eslint => self.eslint_enabled,
            Feature::Docgen => self.docgen,
        }
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        let slot = match feature {
            Feature::Commitlint => &mut self.commitlint,
            Feature::Husky => &mut self.husky,
            Feature::EslintJsdoc => &mut self.eslint_jsdoc,
            Feature::EslintUnicorn => &mut self.eslint_unicorn,
            Feature::CSpell => &mut self.cspell,
            Feature::VscodeExtensions => &mut self.vscode_extensions,
            Feature::Prettier => &mut self.prettier,
            Feature::Eslint => &mut self.eslint_enabled,
            Feature::Docgen => &mut self.docgen,
        };
        *slot = enabled;
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::all_enabled()
    }
}

/// Open-ended option records handed verbatim to the tools they configure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureOptions {
    pub commitlint_options: Map<String, Value>,
    #[serde(rename = "cSpellOptions")]
    pub cspell_options: Map<String, Value>,
    pub vscode_extensions_options: Map<String, Value>,
}

/// Where path-configurable artifacts land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactPaths {
    pub vscode_extensions: RelativePath,
    #[serde(rename = "cSpell")]
    pub cspell: RelativePath,
}

/// Package author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub organization: bool,
}

impl Author {
    /// Manifest `author` object; `None` when nothing identifies the author.
    pub fn to_manifest_value(&self) -> Option<Value> {
        if self.name.is_none() && self.email.is_none() && self.url.is_none() {
            return None;
        }
        let mut author = Map::new();
        if let Some(name) = &self.name {
            author.insert("name".into(), Value::from(name.as_str()));
        }
        if let Some(email) = &self.email {
            author.insert("email".into(), Value::from(email.as_str()));
        }
        if let Some(url) = &self.url {
            author.insert("url".into(), Value::from(url.as_str()));
        }
        author.insert("organization".into(), Value::from(self.organization));
        Some(Value::Object(author))
    }
}

/// Fully-merged configuration for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfiguration {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) package_scope: String,
    pub(crate) github_owner: String,
    pub(crate) package_name: String,
    pub(crate) homepage_url: String,
    pub(crate) repository_url: String,
    pub(crate) issues_url: String,
    pub(crate) readme_content: String,
    pub(crate) flags: FeatureFlags,
    pub(crate) options: FeatureOptions,
    pub(crate) paths: ArtifactPaths,
    pub(crate) pre_commit_commands: Vec<String>,
    pub(crate) license: Option<String>,
    pub(crate) author: Author,
    pub(crate) contributors: Vec<String>,
}

impl ResolvedConfiguration {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn package_scope(&self) -> &str {
        &self.package_scope
    }

    pub fn github_owner(&self) -> &str {
        &self.github_owner
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn homepage_url(&self) -> &str {
        &self.homepage_url
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn issues_url(&self) -> &str {
        &self.issues_url
    }

    pub fn readme_content(&self) -> &str {
        &self.readme_content
    }

    pub fn flags(&self) -> &FeatureFlags {
        &self.flags
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.flags.is_enabled(feature)
    }

    pub fn options(&self) -> &FeatureOptions {
        &self.options
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    pub fn pre_commit_commands(&self) -> &[String] {
        &self.pre_commit_commands
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn contributors(&self) -> &[String] {
        &self.contributors
    }

    /// Append contributors in call order. Duplicates are kept.
    pub fn add_contributors<I, S>(&mut self, contributors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contributors
            .extend(contributors.into_iter().map(Into::into));
    }
}
