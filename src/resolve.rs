//! Classified type → codec-reference expression.
//!
//! Lookup order: the context's primitive table, then (value context only) the
//! container combinators, then the naming convention. Wire codecs get no
//! container special-casing: a `List<T>` on the wire resolves straight to
//! `java.util.List.STREAM_CODEC`, same as any other generic type.
use crate::error::{Error, Result};
use crate::ir::TypeRef;
use crate::registry::{CodecContext, CODEC};
use crate::render::Names;

pub const LIST: &str = "java.util.List";
pub const MAP: &str = "java.util.Map";
pub const OPTIONAL: &str = "java.util.Optional";

pub fn resolve(ty: &TypeRef, ctx: CodecContext, names: &mut Names) -> Result<String> {
    if let Some(token) = ctx.token(&ty.qualified_name) {
        return Ok(format!("{}.{token}", names.name(ctx.namespace())));
    }
    if ctx == CodecContext::Value {
        match ty.qualified_name.as_str() {
            LIST => {
                let [item] = type_args::<1>(ty)?;
                return Ok(format!("{}.listOf()", resolve(item, ctx, names)?));
            }
            MAP => {
                let [key, value] = type_args::<2>(ty)?;
                let key = resolve(key, ctx, names)?;
                let value = resolve(value, ctx, names)?;
                return Ok(format!("{}.unboundedMap({key}, {value})", names.name(CODEC)));
            }
            OPTIONAL => {
                let [inner] = type_args::<1>(ty)?;
                return resolve(inner, ctx, names);
            }
            _ => {}
        }
    }
    Ok(conventional_codec_ref(&ty.qualified_name, ctx, names))
}

/// `<TypeName>.CODEC` / `<TypeName>.STREAM_CODEC`. Total: any name works.
pub fn conventional_codec_ref(type_name: &str, ctx: CodecContext, names: &mut Names) -> String {
    format!("{}.{}", names.name(type_name), ctx.member())
}

fn type_args<const N: usize>(ty: &TypeRef) -> Result<[&TypeRef; N]> {
    if ty.type_arguments.len() < N {
        return Err(Error::MissingTypeArguments {
            type_name: ty.qualified_name.clone(),
            needed: N,
            found: ty.type_arguments.len(),
        });
    }
    Ok(std::array::from_fn(|i| &ty.type_arguments[i]))
}
