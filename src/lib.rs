//! Codec declaration synthesis for Java types.
//!
//! Given a type's declared fields, resolve each field type to a codec
//! expression and assemble a complete `Codec` / `StreamCodec` declaration.
//!
//! Pipeline: [`decl`] → [`extract`] (via [`classify`]) → [`resolve`]
//! (+ [`defaults`]) → [`synth`], driven by [`codegen::Codegen`]; [`edit`]
//! commits the result into source text.
pub mod classify;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod decl;
pub mod defaults;
pub mod edit;
pub mod error;
pub mod extract;
pub mod ir;
pub mod path_de;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod synth;

pub use error::{Error, Result};
