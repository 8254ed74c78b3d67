//! The three configurable word-list scopes
//!
//! Each scope describes where its entries live in the server settings
//! (canonical key plus accepted aliases) and where they live on disk when
//! external files are enabled for it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Runs of characters not allowed in a language-tag file component.
static UNSAFE_TAG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").unwrap());

/// Placeholder replaced by the sanitized language tag in file templates.
const LANG_PLACEHOLDER: &str = "{lang}";

/// Identifies one of the scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// Words accepted as correctly spelled
    Dictionary,
    /// Diagnostics the user marked as false positives
    HiddenFalsePositives,
    /// Rule ids switched off
    DisabledRules,
}

impl ScopeKind {
    pub const ALL: [ScopeKind; 3] = [
        ScopeKind::Dictionary,
        ScopeKind::HiddenFalsePositives,
        ScopeKind::DisabledRules,
    ];

    /// Static description of this scope.
    pub fn scope(self) -> &'static Scope {
        match self {
            Self::Dictionary => &SCOPES[0],
            Self::HiddenFalsePositives => &SCOPES[1],
            Self::DisabledRules => &SCOPES[2],
        }
    }

    /// Short command-line name.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Dictionary => "dictionary",
            Self::HiddenFalsePositives => "hidden-false-positives",
            Self::DisabledRules => "disabled-rules",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Static description of a scope.
#[derive(Debug, PartialEq, Eq)]
pub struct Scope {
    pub kind: ScopeKind,
    /// Key the server sends and expects, e.g. `ltex.dictionary`
    pub canonical_key: &'static str,
    /// Other keys users may write instead, tried in order after the canonical one
    pub alias_keys: &'static [&'static str],
    /// Plugin setting that switches this scope to external files; only a
    /// boolean `true` counts
    pub enable_flag_key: &'static str,
    /// Plugin setting overriding the directory holding the files
    pub directory_override_key: &'static str,
    /// Subdirectory under the plugin's data directory when not overridden
    pub default_subdirectory: &'static str,
    /// File name with a `{lang}` placeholder
    pub filename_template: &'static str,
}

/// The scope table, in the order scopes are processed.
pub static SCOPES: [Scope; 3] = [
    Scope {
        kind: ScopeKind::Dictionary,
        canonical_key: "ltex.dictionary",
        alias_keys: &["dictionary"],
        enable_flag_key: "use_external_dictionary_files",
        directory_override_key: "external_dictionary_dir",
        default_subdirectory: "dictionaries",
        filename_template: "{lang}.txt",
    },
    Scope {
        kind: ScopeKind::HiddenFalsePositives,
        canonical_key: "ltex.hiddenFalsePositives",
        alias_keys: &["hiddenFalsePositives"],
        enable_flag_key: "use_external_hidden_false_positives_files",
        directory_override_key: "external_hidden_false_positives_dir",
        default_subdirectory: "hidden_false_positives",
        filename_template: "hiddenFalsePositives.{lang}.txt",
    },
    Scope {
        kind: ScopeKind::DisabledRules,
        canonical_key: "ltex.disabledRules",
        alias_keys: &["disabledRules"],
        enable_flag_key: "use_external_disabled_rules_files",
        directory_override_key: "external_disabled_rules_dir",
        default_subdirectory: "disabled_rules",
        filename_template: "disabledRules.{lang}.txt",
    },
];

impl Scope {
    /// Find the scope whose canonical key is exactly `key`.
    ///
    /// Code actions from the server always carry canonical keys.
    pub fn by_canonical_key(key: &str) -> Option<&'static Scope> {
        SCOPES.iter().find(|scope| scope.canonical_key == key)
    }

    /// Candidate settings keys: the canonical key first, then the aliases.
    pub fn candidate_keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical_key).chain(self.alias_keys.iter().copied())
    }

    /// File name for `language`'s word list in this scope.
    pub fn file_name(&self, language: &str) -> String {
        self.filename_template
            .replace(LANG_PLACEHOLDER, &sanitize_language_tag(language))
    }
}

/// Reduce a language tag to a safe single path component.
///
/// Every run of characters outside `[A-Za-z0-9._-]` becomes one `_`; an
/// empty result becomes `unknown`.
pub fn sanitize_language_tag(language: &str) -> String {
    let sanitized = UNSAFE_TAG_CHARS.replace_all(language.trim(), "_");
    if sanitized.is_empty() {
        "unknown".to_string()
    } else {
        sanitized.into_owned()
    }
}
