use tracing::warn;

use super::{already_declares, GeneratedDeclaration, Insertion};
use crate::config::Config;
use crate::decl::TypeDecl;
use crate::ir::FieldDescriptor;
use crate::registry::{CODEC, CODEC_FIELD, NOT_NULL, STRING_REPRESENTABLE};
use crate::render::Names;

/// `StringRepresentable.fromEnum` codec, the `getSerializedName` override,
/// and the implements-clause edit. `None` when the guard is on and `CODEC`
/// already exists.
pub fn synthesize(
    decl: &TypeDecl,
    fields: &[FieldDescriptor],
    cfg: &Config,
    names: &mut Names,
) -> Option<Vec<GeneratedDeclaration>> {
    if cfg.enum_guard && already_declares(fields, CODEC_FIELD) {
        return None;
    }
    let ty = &decl.name;
    let i = &cfg.indent;
    let representable = names.name(STRING_REPRESENTABLE);

    let codec = format!(
        "public static final {}<{ty}> {CODEC_FIELD} = {representable}.fromEnum({ty}::values);",
        names.name(CODEC),
    );
    let serialized_name = format!(
        "@{}\n@{}\npublic {} getSerializedName() {{\n{i}return name();\n}}",
        names.name("java.lang.Override"),
        names.name(NOT_NULL),
        names.name("java.lang.String"),
    );

    let mut out = vec![
        GeneratedDeclaration::member(codec),
        GeneratedDeclaration::member(serialized_name),
    ];
    match implements_edit(decl, &representable) {
        Some(edit) => out.push(edit),
        None => warn!(type_name = %ty, "no implements clause or name token offset; interface not added"),
    }
    Some(out)
}

/// Prepends to an existing implements list, else follows the name token.
fn implements_edit(decl: &TypeDecl, representable: &str) -> Option<GeneratedDeclaration> {
    if let Some(clause) = decl.implements {
        return Some(GeneratedDeclaration {
            text: format!("{representable}, "),
            insertion: Insertion::At(clause.offset),
        });
    }
    let span = decl.name_span?;
    Some(GeneratedDeclaration {
        text: format!(" implements {representable}"),
        insertion: Insertion::At(span.offset + span.len),
    })
}
