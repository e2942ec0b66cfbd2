use serde::{Deserialize, Serialize};

use crate::dialects::ScriptTarget;

/// Shape of the module's sole exported entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Class,
    Object,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Class => "class",
            ExportKind::Object => "object",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "class" => Some(ExportKind::Class),
            "object" => Some(ExportKind::Object),
            _ => None,
        }
    }
}

/// One public method exposed by the exported entity. `lineno` is the
/// 1-based line where the member starts, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    pub lineno: u32,
}

impl MethodRecord {
    pub fn new(name: impl Into<String>, lineno: u32) -> Self {
        Self {
            name: name.into(),
            lineno,
        }
    }
}

/// The externally visible extraction result: what the module exports and
/// which methods that export carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSurface {
    pub kind: ExportKind,
    pub methods: Vec<MethodRecord>,
}

impl ModuleSurface {
    pub fn new(kind: ExportKind, methods: Vec<MethodRecord>) -> Self {
        Self { kind, methods }
    }

    /// Method names in declaration order, for consumers that only build
    /// completion lists.
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Used for diagnostics and dialect selection; the caller never has to
    /// point at a real file.
    pub filename: String,
    pub script_target: ScriptTarget,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_script_target(mut self, script_target: ScriptTarget) -> Self {
        self.script_target = script_target;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            filename: "anonymous".to_string(),
            script_target: ScriptTarget::default(),
        }
    }
}
