//! Import statement representation
//!
//! This module defines the record types an external parser produces for each
//! import statement in a source file. This crate never constructs or mutates
//! these records; it only evaluates predicates over them and returns sort
//! instructions for the host to apply.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// Byte offsets of a region of source text, opaque to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// The syntactic form of an import statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportKind {
    /// `import ... from "mod"`
    Import,
    /// `const x = require("mod")`
    Require,
    /// `import x = require("mod")` (TypeScript)
    ImportEquals,
    /// `import type { T } from "mod"` (TypeScript)
    ImportType,
}

impl ImportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Require => "require",
            Self::ImportEquals => "import-equals",
            Self::ImportType => "import-type",
        }
    }
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportKind {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "import" => Ok(Self::Import),
            "require" => Ok(Self::Require),
            "import-equals" => Ok(Self::ImportEquals),
            "import-type" => Ok(Self::ImportType),
            _ => Err(StyleError::UnknownImportKind {
                value: s.to_string(),
            }),
        }
    }
}

/// One named import binding, e.g. `{ useState as state }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedMember {
    pub name: String,
    /// The local binding name; equals `name` when no `as` clause is present
    pub alias: String,
}

impl NamedMember {
    pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
        }
    }

    /// A binding without an `as` clause
    pub fn plain(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
        }
    }
}

/// A parsed import statement as delivered by the host
///
/// `module_name` is the source string exactly as written (e.g. `"react"`,
/// `"./foo"`, `"@hook/useX"`). The host guarantees it is non-empty; no
/// validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    /// Span of the whole statement
    pub span: Span,
    /// Span of the `import` keyword region, when the parser tracks it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_span: Option<Span>,
    pub kind: ImportKind,
    pub module_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_member: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_member: Option<String>,
    /// Order is insignificant on input; the host reorders these per the
    /// matched rule's named-member sort
    #[serde(default)]
    pub named_members: Vec<NamedMember>,
}

impl ImportRecord {
    /// True for bare side-effect imports: no default, namespace, or named bindings
    pub fn has_no_member(&self) -> bool {
        self.default_member.is_none()
            && self.namespace_member.is_none()
            && self.named_members.is_empty()
    }
}
