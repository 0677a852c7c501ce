//! Presets shipped with the binary.

use serde_json::json;

use trailhead_core::domain::{OptionLayer, keys, layers::default_cspell_words};

/// A named preset with a one-line description.
pub struct BuiltinPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub layer: OptionLayer,
}

/// Dotted tool paths and a spell checker that ignores generated API docs.
pub fn recommended() -> BuiltinPreset {
    BuiltinPreset {
        name: "recommended",
        description: "Dotted tool paths; cspell ignores generated API docs",
        layer: OptionLayer::new()
            .with(keys::VSCODE_EXTENSIONS_PATH, ".vscode/extensions.json")
            .with(keys::CSPELL_PATH, ".cspell.json")
            .with(
                keys::CSPELL_OPTIONS,
                json!({
                    "language": "en-GB",
                    "words": default_cspell_words(),
                    "ignorePaths": ["./API.md"],
                }),
            ),
    }
}

/// Builtin defaults only.
pub fn none() -> BuiltinPreset {
    BuiltinPreset {
        name: "none",
        description: "Builtin defaults only",
        layer: OptionLayer::new(),
    }
}

pub fn all_presets() -> Vec<BuiltinPreset> {
    vec![recommended(), none()]
}
