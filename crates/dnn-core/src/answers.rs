//! Answer collection results and derived module identity
//!
//! The prompt flow (or CLI overrides) produces a [`RawAnswers`], which is
//! resolved exactly once into an immutable [`AnswerSet`]. Every later stage
//! reads the set by reference; none mutates it.

use crate::error::{Result, ScaffoldError};
use chrono::{DateTime, Local};
use heck::ToPascalCase;
use std::fmt;
use uuid::Uuid;

/// Suffix on a raw answer meaning "use this text verbatim, skip pascal-casing"
const FORCE_SUFFIX: &str = " -f";

/// Extension type embedded in the generated namespace. DNN also knows
/// Providers and Libraries, but this generator only emits modules.
pub const EXTENSION_TYPE: &str = "Modules";

/// Version string substituted into generated manifests
pub const MODULE_VERSION: &str = "1.0.0";

/// SPA frameworks offered by the framework prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaFramework {
    React,
    Vue,
    Angular,
}

impl SpaFramework {
    /// Label shown in the prompt; also the stored answer value
    pub fn display_name(&self) -> &'static str {
        match self {
            SpaFramework::React => "ReactJS",
            SpaFramework::Vue => "VueJS",
            SpaFramework::Angular => "Angular",
        }
    }

    /// Parse a CLI override value
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "react" | "reactjs" => Some(SpaFramework::React),
            "vue" | "vuejs" => Some(SpaFramework::Vue),
            "angular" => Some(SpaFramework::Angular),
            _ => None,
        }
    }
}

impl fmt::Display for SpaFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Script language follow-up, asked only for the React path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptLanguage {
    Tsx,
    Jsx,
}

impl ScriptLanguage {
    pub fn display_name(&self) -> &'static str {
        match self {
            ScriptLanguage::Tsx => "TypeScript (tsx)",
            ScriptLanguage::Jsx => "ECMAScript (jsx)",
        }
    }

    /// Short value used in template paths ("tsx" / "jsx")
    pub fn value(&self) -> &'static str {
        match self {
            ScriptLanguage::Tsx => "tsx",
            ScriptLanguage::Jsx => "jsx",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tsx" | "typescript" | "ts" => Some(ScriptLanguage::Tsx),
            "jsx" | "ecmascript" | "js" => Some(ScriptLanguage::Jsx),
            _ => None,
        }
    }
}

impl fmt::Display for ScriptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Framework plus script language; the key the template tables are indexed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkChoice {
    ReactTsx,
    ReactJsx,
    Vue,
    Angular,
}

impl FrameworkChoice {
    pub fn new(framework: SpaFramework, lang: Option<ScriptLanguage>) -> Self {
        match (framework, lang) {
            (SpaFramework::React, Some(ScriptLanguage::Jsx)) => FrameworkChoice::ReactJsx,
            // React defaults to tsx when no language was collected
            (SpaFramework::React, _) => FrameworkChoice::ReactTsx,
            (SpaFramework::Vue, _) => FrameworkChoice::Vue,
            (SpaFramework::Angular, _) => FrameworkChoice::Angular,
        }
    }

    pub fn framework(&self) -> SpaFramework {
        match self {
            FrameworkChoice::ReactTsx | FrameworkChoice::ReactJsx => SpaFramework::React,
            FrameworkChoice::Vue => SpaFramework::Vue,
            FrameworkChoice::Angular => SpaFramework::Angular,
        }
    }

    pub fn script_language(&self) -> Option<ScriptLanguage> {
        match self {
            FrameworkChoice::ReactTsx => Some(ScriptLanguage::Tsx),
            FrameworkChoice::ReactJsx => Some(ScriptLanguage::Jsx),
            _ => None,
        }
    }
}

/// Raw answers gathered from prompts and CLI overrides, before derivation
#[derive(Debug, Clone)]
pub struct RawAnswers {
    pub framework: FrameworkChoice,
    pub company: String,
    pub module_name: String,
    pub description: String,
    pub author: String,
    pub company_url: String,
    pub email: String,
    pub dnn_host: String,
    pub dnn_root: String,
}

/// The resolved configuration for one generation run.
///
/// Built once by [`AnswerSet::from_raw`], read-only thereafter.
#[derive(Debug, Clone)]
pub struct AnswerSet {
    pub framework: FrameworkChoice,
    pub company_raw: String,
    pub module_name_raw: String,
    pub description: String,
    /// Pascal-cased company, or the literal text when the " -f" override was used
    pub namespace: String,
    /// Pascal-cased module name, same override rule
    pub module_name: String,
    /// The raw module-name answer, shown in manifests as the friendly name
    pub module_friendly_name: String,
    pub extension_type: &'static str,
    /// Hyphenated upper-case identifier, generated exactly once per run
    pub guid: String,
    /// Detected MSBuild major version, empty when undetectable
    pub msbuild_version: String,
    pub created_at: DateTime<Local>,
    pub author: String,
    pub company_url: String,
    pub email: String,
    pub dnn_host: String,
    pub dnn_root: String,
}

impl AnswerSet {
    /// Resolve raw answers into the immutable set used by every later stage.
    pub fn from_raw(raw: RawAnswers, msbuild_version: String) -> Result<Self> {
        for (field, value) in [
            ("company", &raw.company),
            ("module name", &raw.module_name),
            ("description", &raw.description),
        ] {
            if value.trim().is_empty() {
                return Err(ScaffoldError::Validation(format!(
                    "{field} must not be empty"
                )));
            }
        }

        Ok(Self {
            framework: raw.framework,
            namespace: derive_name(&raw.company),
            module_name: derive_name(&raw.module_name),
            module_friendly_name: raw.module_name.clone(),
            company_raw: raw.company,
            module_name_raw: raw.module_name,
            description: raw.description,
            extension_type: EXTENSION_TYPE,
            guid: Uuid::new_v4().to_string().to_uppercase(),
            msbuild_version,
            created_at: Local::now(),
            author: raw.author,
            company_url: raw.company_url,
            email: raw.email,
            dnn_host: raw.dnn_host,
            dnn_root: raw.dnn_root,
        })
    }

    /// Always recomputed from its three parts, never stored independently.
    pub fn full_namespace(&self) -> String {
        format!(
            "{}.{}.{}",
            self.namespace, self.extension_type, self.module_name
        )
    }
}

/// Apply the " -f" override convention: strip the suffix and keep the text
/// verbatim, otherwise pascal-case the answer.
pub fn derive_name(raw: &str) -> String {
    match raw.strip_suffix(FORCE_SUFFIX) {
        Some(literal) => literal.to_string(),
        None => raw.to_pascal_case(),
    }
}
