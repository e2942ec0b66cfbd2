use std::path::Path;

use serde::{Deserialize, Serialize};

/// Grammar dialect used to parse a module.
///
/// The TypeScript grammar accepts plain JavaScript as well, so `.js`
/// sources share the TypeScript dialect; `.tsx`/`.jsx` need the JSX-aware
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::TypeScript => "typescript",
            Dialect::Tsx => "tsx",
        }
    }

    pub fn language(&self) -> tree_sitter::Language {
        match self {
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    pub fn for_filename(filename: &str) -> Self {
        match Path::new(filename).extension().and_then(|ext| ext.to_str()) {
            Some("tsx") | Some("jsx") => Dialect::Tsx,
            _ => Dialect::TypeScript,
        }
    }
}

/// Language-version tag carried by extraction options.
///
/// The grammar accepts every version, so the tag only shows up in
/// diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptTarget {
    Es5,
    Es2015,
    Es2016,
    Es2017,
    #[default]
    Es2018,
    Es2019,
    Es2020,
    EsNext,
}

impl ScriptTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptTarget::Es5 => "es5",
            ScriptTarget::Es2015 => "es2015",
            ScriptTarget::Es2016 => "es2016",
            ScriptTarget::Es2017 => "es2017",
            ScriptTarget::Es2018 => "es2018",
            ScriptTarget::Es2019 => "es2019",
            ScriptTarget::Es2020 => "es2020",
            ScriptTarget::EsNext => "esnext",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "es5" => Some(ScriptTarget::Es5),
            "es2015" | "es6" => Some(ScriptTarget::Es2015),
            "es2016" => Some(ScriptTarget::Es2016),
            "es2017" => Some(ScriptTarget::Es2017),
            "es2018" => Some(ScriptTarget::Es2018),
            "es2019" => Some(ScriptTarget::Es2019),
            "es2020" => Some(ScriptTarget::Es2020),
            "esnext" => Some(ScriptTarget::EsNext),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_for_filename_typescript() {
        assert_eq!(Dialect::for_filename("app.ts"), Dialect::TypeScript);
        assert_eq!(Dialect::for_filename("src/users.js"), Dialect::TypeScript);
        assert_eq!(Dialect::for_filename("index.mjs"), Dialect::TypeScript);
    }

    #[test]
    fn test_dialect_for_filename_tsx() {
        assert_eq!(Dialect::for_filename("Component.tsx"), Dialect::Tsx);
        assert_eq!(Dialect::for_filename("Component.jsx"), Dialect::Tsx);
    }

    #[test]
    fn test_dialect_for_filename_no_extension() {
        assert_eq!(Dialect::for_filename("anonymous"), Dialect::TypeScript);
        assert_eq!(Dialect::for_filename(""), Dialect::TypeScript);
    }

    #[test]
    fn test_dialect_name() {
        assert_eq!(Dialect::TypeScript.name(), "typescript");
        assert_eq!(Dialect::Tsx.name(), "tsx");
    }

    #[test]
    fn test_script_target_default() {
        assert_eq!(ScriptTarget::default(), ScriptTarget::Es2018);
    }

    #[test]
    fn test_script_target_as_str() {
        assert_eq!(ScriptTarget::Es2018.as_str(), "es2018");
        assert_eq!(ScriptTarget::EsNext.as_str(), "esnext");
    }

    #[test]
    fn test_script_target_from_str() {
        assert_eq!(ScriptTarget::from_str("es2018"), Some(ScriptTarget::Es2018));
        assert_eq!(ScriptTarget::from_str("es6"), Some(ScriptTarget::Es2015));
        assert_eq!(ScriptTarget::from_str("unknown"), None);
    }
}
