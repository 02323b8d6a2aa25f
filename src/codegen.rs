//! One generation request: extract → resolve → synthesize.
use std::fmt;

use tracing::info;

use crate::config::Config;
use crate::decl::TypeDecl;
use crate::error::{Error, Result};
use crate::extract::extract;
use crate::registry::{
    BYTE_BUF, BYTE_BUF_CODECS, CODEC, CODEC_FIELD, NOT_NULL, RECORD_CODEC_BUILDER, STREAM_CODEC,
    STREAM_CODEC_FIELD, STRING_REPRESENTABLE,
};
use crate::render::Names;
use crate::synth::{self, GeneratedDeclaration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paradigm {
    /// `Codec` (tree-structured encoding).
    Value,
    /// `StreamCodec` (binary network encoding).
    Stream,
}

impl Paradigm {
    /// Library types the templates of this paradigm spell out.
    fn library_names(self) -> &'static [&'static str] {
        match self {
            Paradigm::Value => &[CODEC, RECORD_CODEC_BUILDER, STRING_REPRESENTABLE, NOT_NULL],
            Paradigm::Stream => &[STREAM_CODEC, BYTE_BUF_CODECS, BYTE_BUF],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub type_name: String,
    pub declarations: Vec<GeneratedDeclaration>,
    /// Imports the simple name style relies on; empty when qualified.
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyDeclared(&'static str),
    IncompleteGenerics(String),
    NoEnclosingType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(Generation),
    Skipped(SkipReason),
}

enum DeclShape<'a> {
    Enum(&'a TypeDecl),
    RecordOrClass(&'a TypeDecl),
}

impl<'a> DeclShape<'a> {
    fn of(decl: &'a TypeDecl) -> Self {
        if decl.is_enum() { DeclShape::Enum(decl) } else { DeclShape::RecordOrClass(decl) }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyDeclared(field) => write!(f, "`{field}` already exists"),
            SkipReason::IncompleteGenerics(msg) => write!(f, "{msg}"),
            SkipReason::NoEnclosingType => write!(f, "no enclosing type"),
        }
    }
}

pub struct Codegen {
    config: Config,
}

impl Codegen {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate the codec declaration(s) for `decl`. Every skip is a no-op
    /// outcome, never an error.
    pub fn emit(&self, decl: &TypeDecl, paradigm: Paradigm) -> Result<Outcome> {
        let fields = extract(decl);
        let mut names = Names::new(self.config.style);
        names.reserve(&decl.name);
        for imp in decl.imports.iter().filter(|imp| !imp.ends_with(".*")) {
            names.reserve(imp);
        }
        for library in paradigm.library_names().iter().chain(&["java.lang.Override", "java.lang.String"]) {
            names.reserve(library);
        }
        let cfg = &self.config;

        let produced = match (DeclShape::of(decl), paradigm) {
            (DeclShape::Enum(decl), Paradigm::Value) => {
                Ok(synth::enums::synthesize(decl, &fields, cfg, &mut names)
                    .ok_or(SkipReason::AlreadyDeclared(CODEC_FIELD)))
            }
            (DeclShape::RecordOrClass(decl), Paradigm::Value) => {
                synth::record::synthesize(decl, &fields, cfg, &mut names)
                    .map(|g| g.map(|g| vec![g]).ok_or(SkipReason::AlreadyDeclared(CODEC_FIELD)))
            }
            (DeclShape::Enum(decl) | DeclShape::RecordOrClass(decl), Paradigm::Stream) => {
                synth::stream::synthesize(decl, &fields, cfg, &mut names)
                    .map(|g| g.map(|g| vec![g]).ok_or(SkipReason::AlreadyDeclared(STREAM_CODEC_FIELD)))
            }
        };

        let outcome = match produced {
            Ok(Ok(declarations)) => Outcome::Generated(Generation {
                type_name: decl.name.clone(),
                declarations,
                imports: names.into_imports(),
            }),
            Ok(Err(reason)) => Outcome::Skipped(reason),
            Err(err @ Error::MissingTypeArguments { .. }) => {
                Outcome::Skipped(SkipReason::IncompleteGenerics(err.to_string()))
            }
            Err(err) => return Err(err),
        };
        match &outcome {
            Outcome::Generated(g) => {
                info!(type_name = %decl.name, fragments = g.declarations.len(), "generated")
            }
            Outcome::Skipped(reason) => info!(type_name = %decl.name, %reason, "skipped"),
        }
        Ok(outcome)
    }

    /// `emit` for the optional "enclosing type"; none found is a no-op.
    pub fn emit_selected(&self, decl: Option<&TypeDecl>, paradigm: Paradigm) -> Result<Outcome> {
        match decl {
            Some(decl) => self.emit(decl, paradigm),
            None => Ok(Outcome::Skipped(SkipReason::NoEnclosingType)),
        }
    }
}
