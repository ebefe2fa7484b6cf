//! Data model for extracted function documentation: format-agnostic.

use serde::Serialize;

/// All records extracted from a single source file.
#[derive(Debug, Default, Serialize)]
pub struct Document {
    /// Path as given on the command line (or expanded from a glob)
    pub source: String,
    pub functions: Vec<FunctionRecord>,
}

/// One `pub fn` declaration and its documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    pub name: String,
    /// Raw text from `fn` up to the opening body delimiter, verbatim
    pub signature: String,
    /// Doc lines with whitespace collapsed, each terminated by `\n`
    pub description: String,
    /// `Key = value` doc lines, in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<DocField>,
    pub class: Classification,
    /// 1-based line of the `pub` keyword
    pub line: usize,
    /// Leading doc comments through the header, excluding the delimiter
    #[serde(skip)]
    pub block: String,
    /// `pub` keyword through the opening delimiter, inclusive
    #[serde(skip)]
    pub header: String,
}

/// How a public declaration is treated by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Has at least one `///` line
    Documented,
    /// No doc comments; still exported with an empty description
    Undocumented,
    /// Name starts with the excluded prefix; never exported
    Private,
}

impl Classification {
    pub fn is_exported(self) -> bool {
        !matches!(self, Classification::Private)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Documented => "documented",
            Classification::Undocumented => "undocumented",
            Classification::Private => "private",
        }
    }
}

/// A `Key = value` line found in a doc comment, e.g. `FuncId = "turn_led"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocField {
    pub key: String,
    pub value: String,
}
