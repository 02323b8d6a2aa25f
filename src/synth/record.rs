use tracing::debug;

use super::{already_declares, getter_method, GeneratedDeclaration};
use crate::config::Config;
use crate::decl::TypeDecl;
use crate::defaults::default_for;
use crate::error::Result;
use crate::extract::instance_fields;
use crate::ir::FieldDescriptor;
use crate::registry::{CodecContext, CODEC, CODEC_FIELD, RECORD_CODEC_BUILDER};
use crate::render::Names;
use crate::resolve::{resolve, OPTIONAL};

/// `RecordCodecBuilder` group over every instance field, applied to the
/// canonical constructor. `None` when `CODEC` already exists.
pub fn synthesize(
    decl: &TypeDecl,
    fields: &[FieldDescriptor],
    cfg: &Config,
    names: &mut Names,
) -> Result<Option<GeneratedDeclaration>> {
    if already_declares(fields, CODEC_FIELD) {
        return Ok(None);
    }
    let ty = &decl.name;
    let mut entries = Vec::new();
    for field in instance_fields(fields) {
        let codec = resolve(&field.ty, CodecContext::Value, names)?;
        let getter = match getter_method(decl, &field.name) {
            Some(method) => format!("{ty}::{method}"),
            None => format!("value -> value.{}", field.name),
        };
        debug!(field = %field.name, %codec, "resolved value codec");
        entries.push(format!(
            "{}{codec}.{}.forGetter({getter})",
            cfg.indent,
            field_of(field)
        ));
    }
    let group = if entries.is_empty() {
        String::new()
    } else {
        format!("\n{}\n", entries.join(",\n"))
    };
    let text = format!(
        "public static final {}<{ty}> {CODEC_FIELD} = {}.create(ins -> ins.group({group}).apply(ins, {ty}::new));",
        names.name(CODEC),
        names.name(RECORD_CODEC_BUILDER),
    );
    Ok(Some(GeneratedDeclaration::member(text)))
}

fn field_of(field: &FieldDescriptor) -> String {
    if field.is_nullable {
        format!("optionalFieldOf(\"{}\", {})", field.name, default_for(&field.ty))
    } else if field.ty.qualified_name == OPTIONAL {
        format!("optionalFieldOf(\"{}\")", field.name)
    } else {
        format!("fieldOf(\"{}\")", field.name)
    }
}
