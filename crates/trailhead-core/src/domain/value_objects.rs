//! Domain value objects: feature flags and dependency specifiers.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! define string representations and `FromStr` parsers only; which artifact a
//! feature produces lives in the planner rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Feature ──────────────────────────────────────────────────────────────────

/// A boolean option that gates one planner rule.
///
/// The string form is the option key used in option layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "commitlint")]
    Commitlint,
    #[serde(rename = "husky")]
    Husky,
    #[serde(rename = "eslintJsdoc")]
    EslintJsdoc,
    #[serde(rename = "eslintUnicorn")]
    EslintUnicorn,
    #[serde(rename = "cSpell")]
    CSpell,
    #[serde(rename = "vscodeExtensions")]
    VscodeExtensions,
    #[serde(rename = "prettier")]
    Prettier,
    /// The linting subsystem as a whole.
    #[serde(rename = "eslint")]
    Eslint,
    #[serde(rename = "docgen")]
    Docgen,
}

impl Feature {
    pub const ALL: [Feature; 9] = [
        Self::Commitlint,
        Self::Husky,
        Self::EslintJsdoc,
        Self::EslintUnicorn,
        Self::CSpell,
        Self::VscodeExtensions,
        Self::Prettier,
        Self::Eslint,
        Self::Docgen,
    ];

    /// Option-layer key for this flag.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Commitlint => "commitlint",
            Self::Husky => "husky",
            Self::EslintJsdoc => "eslintJsdoc",
            Self::EslintUnicorn => "eslintUnicorn",
            Self::CSpell => "cSpell",
            Self::VscodeExtensions => "vscodeExtensions",
            Self::Prettier => "prettier",
            Self::Eslint => "eslint",
            Self::Docgen => "docgen",
        }
    }

    /// Whether this flag only matters when the linter is enabled.
    pub const fn requires_linter(&self) -> bool {
        matches!(self, Self::EslintJsdoc | Self::EslintUnicorn | Self::Prettier)
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Commitlint => "conventional commit message linting",
            Self::Husky => "git hooks installed by husky",
            Self::EslintJsdoc => "JSDoc completeness lint rules",
            Self::EslintUnicorn => "unicorn lint rules",
            Self::CSpell => "spell checking with cspell",
            Self::VscodeExtensions => "VS Code extension recommendations",
            Self::Prettier => "prettier as the final lint extension",
            Self::Eslint => "the eslint configuration itself",
            Self::Docgen => "API documentation with typedoc",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Feature {
    type Err = DomainError;

    /// Accepts the option key in any case, plus kebab-case spellings
    /// (`eslint-jsdoc`, `vscode-extensions`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|f| f.key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| DomainError::InvalidOption {
                key: s.to_string(),
                expected: "a known feature name",
            })
    }
}

// ── Dependency ───────────────────────────────────────────────────────────────

/// A package requirement in `name[@version]` form.
///
/// A leading `@` is part of a scoped name (`@commitlint/cli`), never a version
/// separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dependency {
    name: String,
    version: Option<String>,
}

impl Dependency {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Version requirement as written into a manifest (`*` when unpinned).
    pub fn version_or_any(&self) -> &str {
        self.version.as_deref().unwrap_or("*")
    }
}

impl FromStr for Dependency {
    type Err = DomainError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim();
        let invalid = || DomainError::InvalidDependency {
            spec: spec.to_string(),
        };

        let (scope_prefix, rest) = match spec.strip_prefix('@') {
            Some(rest) => ("@", rest),
            None => ("", spec),
        };

        let (name, version) = match rest.split_once('@') {
            Some((name, version)) if !version.is_empty() => (name, Some(version.to_string())),
            Some(_) => return Err(invalid()),
            None => (rest, None),
        };

        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(invalid());
        }
        if !scope_prefix.is_empty() && !name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            name: format!("{scope_prefix}{name}"),
            version,
        })
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}@{}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}
