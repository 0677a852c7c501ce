//! Configuration resolver: three option layers in, one
//! [`ResolvedConfiguration`] out.
//!
//! Pure and deterministic. Derived fields (package name, URLs, README) are
//! computed from the merged name only when no layer supplied them. Scope,
//! owner, artifact paths, hook commands and the organization flag fall back
//! to [`builtin_defaults`] when the given layers leave them out.

use std::path::Component;

use serde_json::{Map, Value};

use crate::domain::{
    entities::{
        artifact::fixed_paths,
        common::RelativePath,
        configuration::{ArtifactPaths, Author, FeatureFlags, FeatureOptions, ResolvedConfiguration},
    },
    error::DomainError,
    layers::{OptionLayer, builtin_defaults, json_type_name, keys, merge_layers},
    value_objects::Feature,
};

/// Merge `defaults ← preset ← overrides` and resolve every field.
///
/// # Errors
///
/// - [`DomainError::MissingRequiredField`] when no layer supplies a non-empty
///   `name`.
/// - [`DomainError::InvalidOption`] when a supplied value has the wrong type.
/// - [`DomainError::AbsolutePathNotAllowed`] / [`DomainError::PathEscapesRoot`]
///   when an artifact path leaves the project.
/// - [`DomainError::ConflictingArtifactPath`] when an artifact path collides
///   with another artifact.
pub fn resolve(
    defaults: &OptionLayer,
    preset: &OptionLayer,
    overrides: &OptionLayer,
) -> Result<ResolvedConfiguration, DomainError> {
    let merged = merge_layers([defaults, preset, overrides]);
    let builtin = builtin_defaults();
    let fallback = merge_layers([&builtin, &merged]);

    let name = optional_string(&merged, keys::NAME)?
        .filter(|n| !n.trim().is_empty())
        .ok_or(DomainError::MissingRequiredField { field: "name" })?;
    let description = optional_string(&merged, keys::DESCRIPTION)?;

    let package_scope = required_string(&fallback, keys::PACKAGE_SCOPE)?;
    let github_owner = required_string(&fallback, keys::GITHUB_OWNER)?;

    let package_name = optional_string(&merged, keys::PACKAGE_NAME)?
        .unwrap_or_else(|| format!("@{package_scope}/{name}"));
    let homepage_url = optional_string(&merged, keys::HOMEPAGE)?
        .unwrap_or_else(|| format!("https://github.com/{github_owner}/{name}"));
    let repository_url = optional_string(&merged, keys::REPOSITORY)?
        .unwrap_or_else(|| format!("https://github.com/{github_owner}/{name}.git"));
    let issues_url = optional_string(&merged, keys::BUGS_URL)?
        .unwrap_or_else(|| format!("https://github.com/{github_owner}/{name}/issues"));

    let readme_content = match explicit_readme(&merged)? {
        Some(contents) => contents,
        None => derive_readme(&name, description.as_deref()),
    };

    let mut flags = FeatureFlags::all_enabled();
    for feature in Feature::ALL {
        if let Some(enabled) = optional_bool(&merged, feature.key())? {
            flags.set(feature, enabled);
        }
    }

    let options = FeatureOptions {
        commitlint_options: object(&merged, keys::COMMITLINT_OPTIONS)?,
        cspell_options: object(&merged, keys::CSPELL_OPTIONS)?,
        vscode_extensions_options: object(&merged, keys::VSCODE_EXTENSIONS_OPTIONS)?,
    };

    let paths = ArtifactPaths {
        vscode_extensions: path(&fallback, keys::VSCODE_EXTENSIONS_PATH)?,
        cspell: path(&fallback, keys::CSPELL_PATH)?,
    };
    check_artifact_paths(&paths)?;

    let pre_commit_commands = fallback
        .get(keys::HUSKY_PRE_COMMIT_COMMANDS)
        .map(|value| string_list(keys::HUSKY_PRE_COMMIT_COMMANDS, value))
        .transpose()?
        .unwrap_or_default();

    let author = Author {
        name: optional_string(&merged, keys::AUTHOR_NAME)?,
        email: optional_string(&merged, keys::AUTHOR_EMAIL)?,
        url: optional_string(&merged, keys::AUTHOR_URL)?,
        organization: optional_bool(&fallback, keys::AUTHOR_ORGANIZATION)?.unwrap_or_default(),
    };

    Ok(ResolvedConfiguration {
        name,
        description,
        package_scope,
        github_owner,
        package_name,
        homepage_url,
        repository_url,
        issues_url,
        readme_content,
        flags,
        options,
        paths,
        pre_commit_commands,
        license: optional_string(&merged, keys::LICENSE)?,
        author,
        contributors: Vec::new(),
    })
}

/// `# {name}`, then a blank line and the description when there is one.
pub fn derive_readme(name: &str, description: Option<&str>) -> String {
    let mut lines = vec![format!("# {name}")];
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        lines.push(String::new());
        lines.push(description.to_string());
    }
    lines.join("\n")
}

// ── typed extraction ─────────────────────────────────────────────────────────

fn invalid(key: &str, expected: &'static str) -> DomainError {
    DomainError::InvalidOption {
        key: key.to_string(),
        expected,
    }
}

fn optional_string(layer: &OptionLayer, key: &str) -> Result<Option<String>, DomainError> {
    match layer.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(key, "a string")),
    }
}

fn required_string(layer: &OptionLayer, key: &'static str) -> Result<String, DomainError> {
    optional_string(layer, key)?.ok_or(DomainError::MissingRequiredField { field: key })
}

fn optional_bool(layer: &OptionLayer, key: &str) -> Result<Option<bool>, DomainError> {
    match layer.get(key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(invalid(key, "a boolean")),
    }
}

fn object(layer: &OptionLayer, key: &str) -> Result<Map<String, Value>, DomainError> {
    match layer.get(key) {
        None => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(invalid(key, "an object")),
    }
}

fn path(layer: &OptionLayer, key: &'static str) -> Result<RelativePath, DomainError> {
    RelativePath::try_new(required_string(layer, key)?)
}

/// Configurable paths must differ from each other and from every fixed path.
fn check_artifact_paths(paths: &ArtifactPaths) -> Result<(), DomainError> {
    let vscode = lexical(&paths.vscode_extensions);
    let cspell = lexical(&paths.cspell);

    for (key, path) in [
        (keys::VSCODE_EXTENSIONS_PATH, &vscode),
        (keys::CSPELL_PATH, &cspell),
    ] {
        if fixed_paths::ALL.contains(&path.as_str()) {
            return Err(DomainError::ConflictingArtifactPath {
                key,
                path: path.clone(),
            });
        }
    }
    if vscode == cspell {
        return Err(DomainError::ConflictingArtifactPath {
            key: keys::CSPELL_PATH,
            path: cspell,
        });
    }
    Ok(())
}

/// `a/../b/./c.json` becomes `b/c.json`.
fn lexical(path: &RelativePath) -> String {
    let mut parts: Vec<String> = Vec::new();
    for component in path.as_path().components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                parts.pop();
            }
            _ => {}
        }
    }
    parts.join("/")
}

fn string_list(key: &str, value: &Value) -> Result<Vec<String>, DomainError> {
    let Value::Array(items) = value else {
        return Err(invalid(key, "an array of strings"));
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(invalid(key, "an array of strings")),
        })
        .collect()
}

/// `readme` may be a plain string or `{ "contents": "..." }`.
fn explicit_readme(layer: &OptionLayer) -> Result<Option<String>, DomainError> {
    match layer.get(keys::README) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Object(map)) => match map.get("contents") {
            Some(Value::String(s)) => Ok(Some(s.clone())),
            other => Err(DomainError::InvalidOption {
                key: format!(
                    "{}.contents ({})",
                    keys::README,
                    other.map_or("missing", json_type_name)
                ),
                expected: "a string",
            }),
        },
        Some(_) => Err(invalid(keys::README, "a string or an object with contents")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layers::builtin_defaults;
    use serde_json::json;

    fn named(name: &str) -> OptionLayer {
        OptionLayer::new().with(keys::NAME, name)
    }

    fn resolve_with(overrides: OptionLayer) -> Result<ResolvedConfiguration, DomainError> {
        resolve(&builtin_defaults(), &OptionLayer::new(), &overrides)
    }

    // ── name ──────────────────────────────────────────────────────────────

    #[test]
    fn missing_name_fails() {
        assert_eq!(
            resolve_with(OptionLayer::new()),
            Err(DomainError::MissingRequiredField { field: "name" })
        );
    }

    #[test]
    fn empty_or_blank_name_fails() {
        for name in ["", "   "] {
            assert_eq!(
                resolve_with(named(name)),
                Err(DomainError::MissingRequiredField { field: "name" })
            );
        }
    }

    #[test]
    fn null_name_counts_as_missing() {
        let overrides = OptionLayer::new().with(keys::NAME, Value::Null);
        assert!(matches!(
            resolve_with(overrides),
            Err(DomainError::MissingRequiredField { .. })
        ));
    }

    #[test]
    fn name_may_come_from_any_layer() {
        let preset = named("from-preset");
        let config = resolve(&builtin_defaults(), &preset, &OptionLayer::new()).unwrap();
        assert_eq!(config.name(), "from-preset");
    }

    // ── derived fields ────────────────────────────────────────────────────

    #[test]
    fn urls_derive_from_name() {
        let config = resolve_with(named("widget")).unwrap();
        assert_eq!(config.package_name(), "@mountainpass/widget");
        assert_eq!(config.homepage_url(), "https://github.com/mountain-pass/widget");
        assert_eq!(
            config.repository_url(),
            "https://github.com/mountain-pass/widget.git"
        );
        assert_eq!(
            config.issues_url(),
            "https://github.com/mountain-pass/widget/issues"
        );
    }

    #[test]
    fn overriding_one_url_leaves_the_others_derived() {
        let config = resolve_with(
            named("widget").with(keys::REPOSITORY, "https://git.example.com/widget.git"),
        )
        .unwrap();
        assert_eq!(config.repository_url(), "https://git.example.com/widget.git");
        assert_eq!(config.homepage_url(), "https://github.com/mountain-pass/widget");
        assert_eq!(
            config.issues_url(),
            "https://github.com/mountain-pass/widget/issues"
        );
        assert_eq!(config.package_name(), "@mountainpass/widget");
    }

    #[test]
    fn scope_and_owner_feed_the_derived_urls() {
        let config = resolve_with(
            named("widget")
                .with(keys::PACKAGE_SCOPE, "acme")
                .with(keys::GITHUB_OWNER, "acme-corp"),
        )
        .unwrap();
        assert_eq!(config.package_name(), "@acme/widget");
        assert_eq!(config.homepage_url(), "https://github.com/acme-corp/widget");
    }

    #[test]
    fn explicit_package_name_wins() {
        let config = resolve_with(named("widget").with(keys::PACKAGE_NAME, "widget-lib")).unwrap();
        assert_eq!(config.package_name(), "widget-lib");
    }

    // ── README ────────────────────────────────────────────────────────────

    #[test]
    fn readme_with_description() {
        let config =
            resolve_with(named("widget").with(keys::DESCRIPTION, "does things")).unwrap();
        assert_eq!(config.readme_content(), "# widget\n\ndoes things");
    }

    #[test]
    fn readme_without_description_has_no_body() {
        let config = resolve_with(named("widget")).unwrap();
        assert_eq!(config.readme_content(), "# widget");
    }

    #[test]
    fn explicit_readme_wins_in_either_form() {
        let plain = resolve_with(named("widget").with(keys::README, "custom")).unwrap();
        assert_eq!(plain.readme_content(), "custom");

        let object =
            resolve_with(named("widget").with(keys::README, json!({ "contents": "boxed" })))
                .unwrap();
        assert_eq!(object.readme_content(), "boxed");
    }

    #[test]
    fn readme_object_without_contents_is_rejected() {
        let result = resolve_with(named("widget").with(keys::README, json!({})));
        assert!(matches!(result, Err(DomainError::InvalidOption { .. })));
    }

    // ── flags and options ─────────────────────────────────────────────────

    #[test]
    fn flags_default_to_enabled() {
        let config = resolve_with(named("widget")).unwrap();
        for feature in Feature::ALL {
            assert!(config.is_enabled(feature), "{feature} should default on");
        }
    }

    #[test]
    fn flags_default_to_enabled_without_builtin_layer() {
        let config = resolve(&OptionLayer::new(), &OptionLayer::new(), &named("widget")).unwrap();
        assert!(config.flags().husky);
        assert!(config.options().cspell_options.is_empty());
    }

    #[test]
    fn overrides_beat_preset_beat_defaults() {
        let preset = OptionLayer::new()
            .with("husky", false)
            .with("commitlint", false);
        let overrides = named("widget").with("husky", true);
        let config = resolve(&builtin_defaults(), &preset, &overrides).unwrap();
        assert!(config.flags().husky);
        assert!(!config.flags().commitlint);
    }

    #[test]
    fn non_boolean_flag_is_rejected() {
        let result = resolve_with(named("widget").with("husky", "yes"));
        assert_eq!(
            result,
            Err(DomainError::InvalidOption {
                key: "husky".into(),
                expected: "a boolean",
            })
        );
    }

    #[test]
    fn option_records_are_replaced_wholesale() {
        let config = resolve_with(
            named("widget").with(keys::CSPELL_OPTIONS, json!({ "language": "en-US" })),
        )
        .unwrap();
        assert_eq!(
            Value::Object(config.options().cspell_options.clone()),
            json!({ "language": "en-US" })
        );
    }

    #[test]
    fn option_records_must_be_objects() {
        let result = resolve_with(named("widget").with(keys::COMMITLINT_OPTIONS, json!([])));
        assert!(matches!(result, Err(DomainError::InvalidOption { .. })));
    }

    #[test]
    fn pre_commit_commands_are_configurable() {
        let config = resolve_with(
            named("widget").with(
                keys::HUSKY_PRE_COMMIT_COMMANDS,
                json!(["npx projen test:update", "npx projen eslint"]),
            ),
        )
        .unwrap();
        assert_eq!(
            config.pre_commit_commands(),
            ["npx projen test:update", "npx projen eslint"]
        );
    }

    #[test]
    fn absolute_artifact_path_is_rejected() {
        let result = resolve_with(named("widget").with(keys::CSPELL_PATH, "/etc/cspell.json"));
        assert!(matches!(
            result,
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn artifact_paths_may_not_share_a_file() {
        let result = resolve_with(
            named("widget")
                .with(keys::VSCODE_EXTENSIONS_PATH, "tools.json")
                .with(keys::CSPELL_PATH, "./tools.json"),
        );
        assert_eq!(
            result,
            Err(DomainError::ConflictingArtifactPath {
                key: keys::CSPELL_PATH,
                path: "tools.json".into(),
            })
        );
    }

    #[test]
    fn artifact_paths_may_not_reuse_fixed_files() {
        let cases = [
            (keys::CSPELL_PATH, ".husky/pre-commit", ".husky/pre-commit"),
            (keys::CSPELL_PATH, "package.json", "package.json"),
            (keys::CSPELL_PATH, "docs/../README.md", "README.md"),
            (keys::VSCODE_EXTENSIONS_PATH, ".eslintrc.json", ".eslintrc.json"),
            (keys::VSCODE_EXTENSIONS_PATH, ".commitlintrc.json", ".commitlintrc.json"),
            (keys::VSCODE_EXTENSIONS_PATH, ".husky/commit-msg", ".husky/commit-msg"),
        ];
        for (key, raw, reported) in cases {
            let err = resolve_with(named("widget").with(key, raw)).unwrap_err();
            assert_eq!(
                err,
                DomainError::ConflictingArtifactPath {
                    key,
                    path: reported.into(),
                },
                "{key} = {raw}"
            );
            assert_eq!(err.category(), crate::domain::ErrorCategory::Validation);
        }
    }

    #[test]
    fn distinct_artifact_paths_are_accepted() {
        let config = resolve_with(
            named("widget")
                .with(keys::VSCODE_EXTENSIONS_PATH, ".vscode/extensions.json")
                .with(keys::CSPELL_PATH, ".cspell.json"),
        )
        .unwrap();
        assert_eq!(config.paths().cspell.to_slash_string(), ".cspell.json");
    }

    #[test]
    fn omitted_scalars_fall_back_to_builtin_defaults() {
        let bare = resolve(&OptionLayer::new(), &OptionLayer::new(), &named("widget")).unwrap();
        let full = resolve_with(named("widget")).unwrap();
        assert_eq!(bare.package_scope(), full.package_scope());
        assert_eq!(bare.github_owner(), full.github_owner());
        assert_eq!(bare.paths(), full.paths());
        assert_eq!(bare.pre_commit_commands(), full.pre_commit_commands());
        assert!(bare.author().organization);
        assert_eq!(bare.author().name, None);
    }

    #[test]
    fn contributors_start_empty() {
        let config = resolve_with(named("widget")).unwrap();
        assert!(config.contributors().is_empty());
    }

    #[test]
    fn resolution_is_deterministic() {
        let overrides = named("widget").with(keys::DESCRIPTION, "does things");
        assert_eq!(resolve_with(overrides.clone()), resolve_with(overrides));
    }
}
