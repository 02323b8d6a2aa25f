//! Serialized type declarations, the input side of the generator.
//!
//! A declaration document stands in for the live editor: it lists a type's
//! fields with their declared type text, modifiers and annotations, plus the
//! handful of source offsets needed to place generated text.
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    #[default]
    Class,
    Record,
    Enum,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub kind: DeclKind,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub superclass: Option<Box<TypeDecl>>,
    #[serde(default)]
    pub name_span: Option<Span>,
    #[serde(default)]
    pub implements: Option<ImplementsClause>,
    #[serde(default)]
    pub body_end: Option<usize>,
    /// Start of the line where missing imports are inserted.
    #[serde(default)]
    pub import_anchor: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

/// `offset` points at the first interface name after `implements`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ImplementsClause {
    pub offset: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DeclDocument {
    Many(Vec<TypeDecl>),
    One(TypeDecl),
}

impl TypeDecl {
    pub fn is_enum(&self) -> bool {
        self.kind == DeclKind::Enum
    }

    /// Own fields first, then inherited ones, walking up the superclass chain.
    pub fn all_fields(&self) -> Vec<&FieldDecl> {
        let mut out: Vec<&FieldDecl> = self.fields.iter().collect();
        let mut parent = self.superclass.as_deref();
        while let Some(p) = parent {
            out.extend(p.fields.iter());
            parent = p.superclass.as_deref();
        }
        out
    }

    pub fn has_method(&self, name: &str) -> bool {
        let mut cur = Some(self);
        while let Some(decl) = cur {
            if decl.methods.iter().any(|m| m == name) {
                return true;
            }
            cur = decl.superclass.as_deref();
        }
        false
    }
}

impl FieldDecl {
    pub fn is_static(&self) -> bool {
        self.modifiers.iter().any(|m| m == "static")
    }
}

/// Parse a declaration document holding one declaration or an array of them.
pub fn parse_document(src: &str) -> Result<Vec<TypeDecl>> {
    match crate::path_de::from_str_with_path::<DeclDocument>(src)? {
        DeclDocument::Many(xs) => Ok(xs),
        DeclDocument::One(x) => Ok(vec![x]),
    }
}

pub fn load_document(path: &Path) -> Result<Vec<TypeDecl>> {
    let src = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&src)
}

/// The "enclosing type" lookup: `None` selects the first declaration.
pub fn select<'a>(decls: &'a [TypeDecl], name: Option<&str>) -> Option<&'a TypeDecl> {
    match name {
        None => decls.first(),
        Some(name) => decls.iter().find(|d| d.name == name),
    }
}
