use tracing::{debug, warn};

use super::{already_declares, getter_method, GeneratedDeclaration};
use crate::config::Config;
use crate::decl::TypeDecl;
use crate::error::Result;
use crate::extract::instance_fields;
use crate::ir::FieldDescriptor;
use crate::registry::{CodecContext, BYTE_BUF, STREAM_CODEC, STREAM_CODEC_FIELD};
use crate::render::Names;
use crate::resolve::resolve;

struct WireField<'a> {
    field: &'a FieldDescriptor,
    codec: String,
    getter: Option<String>,
}

/// `StreamCodec.composite` over (codec, getter) pairs, or an explicit
/// encode/decode pair once the field count exceeds `composite_limit`.
/// `None` when `STREAM_CODEC` already exists.
pub fn synthesize(
    decl: &TypeDecl,
    fields: &[FieldDescriptor],
    cfg: &Config,
    names: &mut Names,
) -> Result<Option<GeneratedDeclaration>> {
    if already_declares(fields, STREAM_CODEC_FIELD) {
        return Ok(None);
    }
    let mut wire = Vec::new();
    for field in instance_fields(fields) {
        let codec = resolve(&field.ty, CodecContext::Wire, names)?;
        debug!(field = %field.name, %codec, "resolved stream codec");
        wire.push(WireField { field, codec, getter: getter_method(decl, &field.name) });
    }
    if wire.is_empty() {
        warn!(type_name = %decl.name, "no instance fields; the composite codec has only a constructor");
    }
    let header = format!(
        "public static final {}<{}, {}> {STREAM_CODEC_FIELD} = ",
        names.name(STREAM_CODEC),
        names.name(BYTE_BUF),
        decl.name,
    );
    let body = if wire.len() <= cfg.composite_limit {
        composite(&decl.name, &wire, cfg, names)
    } else {
        explicit(&decl.name, &wire, cfg, names)
    };
    Ok(Some(GeneratedDeclaration::member(format!("{header}{body}"))))
}

fn composite(ty: &str, wire: &[WireField], cfg: &Config, names: &mut Names) -> String {
    let i = &cfg.indent;
    let mut out = format!("{}.composite(\n", names.name(STREAM_CODEC));
    for w in wire {
        let getter = w.getter.as_deref().unwrap_or(&w.field.name);
        out.push_str(&format!("{i}{}, {ty}::{getter},\n", w.codec));
    }
    out.push_str(&format!("{i}{ty}::new\n);"));
    out
}

fn explicit(ty: &str, wire: &[WireField], cfg: &Config, names: &mut Names) -> String {
    let i = &cfg.indent;
    let over = names.name("java.lang.Override");
    let buf = names.name(BYTE_BUF);

    let mut decode = String::new();
    let mut encode = String::new();
    for w in wire {
        let name = &w.field.name;
        let local = names.java_type(&w.field.ty);
        decode.push_str(&format!("{i}{i}{local} {name} = {}.decode(buf);\n", w.codec));
        let access = match &w.getter {
            Some(method) => format!("value.{method}()"),
            None => format!("value.{name}"),
        };
        encode.push_str(&format!("{i}{i}{}.encode(buf, {access});\n", w.codec));
    }
    let args: Vec<&str> = wire.iter().map(|w| w.field.name.as_str()).collect();

    format!(
        "new {sc}<>() {{\n\
         {i}@{over}\n\
         {i}public {ty} decode({buf} buf) {{\n\
         {decode}\
         {i}{i}return new {ty}({args});\n\
         {i}}}\n\
         \n\
         {i}@{over}\n\
         {i}public void encode({buf} buf, {ty} value) {{\n\
         {encode}\
         {i}}}\n\
         }};",
        sc = names.name(STREAM_CODEC),
        args = args.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NameStyle;
    use crate::extract::extract;
    use serde_json::json;

    fn run_with(doc: serde_json::Value, cfg: &Config) -> Option<String> {
        let decl: TypeDecl = serde_json::from_value(doc).unwrap();
        let fields = extract(&decl);
        let mut names = Names::new(cfg.style);
        synthesize(&decl, &fields, cfg, &mut names).unwrap().map(|g| g.text)
    }

    fn run(doc: serde_json::Value) -> Option<String> {
        run_with(doc, &Config::default())
    }

    #[test]
    fn composite_pairs_then_constructor() {
        let text = run(json!({
            "name": "Point",
            "kind": "record",
            "fields": [
                {"name": "ORIGIN", "type": "Point", "modifiers": ["static"]},
                {"name": "x", "type": "int"},
                {"name": "label", "type": "String"}
            ]
        }))
        .unwrap();
        assert_eq!(
            text,
            "public static final StreamCodec<ByteBuf, Point> STREAM_CODEC = StreamCodec.composite(\n\
             \x20   ByteBufCodecs.VAR_INT, Point::x,\n\
             \x20   ByteBufCodecs.STRING_UTF8, Point::label,\n\
             \x20   Point::new\n\
             );"
        );
    }

    #[test]
    fn containers_fall_back_to_convention_on_the_wire() {
        let text = run(json!({
            "name": "Bag",
            "imports": ["java.util.List", "com.example.Item"],
            "fields": [{"name": "items", "type": "List<Item>"}, {"name": "raw", "type": "byte[]"}]
        }))
        .unwrap();
        assert!(text.contains("List.STREAM_CODEC, Bag::items,"));
        assert!(text.contains("ByteBufCodecs.BYTE_ARRAY, Bag::raw,"));
    }

    #[test]
    fn bean_getters_are_used_when_declared() {
        let text = run(json!({
            "name": "Named",
            "methods": ["getName"],
            "fields": [{"name": "name", "type": "String"}]
        }))
        .unwrap();
        assert!(text.contains("ByteBufCodecs.STRING_UTF8, Named::getName,"));
    }

    #[test]
    fn past_the_limit_an_explicit_codec_is_written() {
        let cfg = Config { composite_limit: 1, ..Config::default() };
        let text = run_with(
            json!({
                "name": "Big",
                "methods": ["getB"],
                "fields": [{"name": "a", "type": "int"}, {"name": "b", "type": "long"}]
            }),
            &cfg,
        )
        .unwrap();
        assert!(text.starts_with("public static final StreamCodec<ByteBuf, Big> STREAM_CODEC = new StreamCodec<>() {\n"));
        assert!(text.contains("        int a = ByteBufCodecs.VAR_INT.decode(buf);\n"));
        assert!(text.contains("        long b = ByteBufCodecs.VAR_LONG.decode(buf);\n"));
        assert!(text.contains("        return new Big(a, b);\n"));
        assert!(text.contains("    public void encode(ByteBuf buf, Big value) {\n"));
        assert!(text.contains("        ByteBufCodecs.VAR_INT.encode(buf, value.a);\n"));
        assert!(text.contains("        ByteBufCodecs.VAR_LONG.encode(buf, value.getB());\n"));
        assert!(text.ends_with("    }\n};"));
        assert_eq!(text.matches("@Override").count(), 2);
    }

    #[test]
    fn qualified_style_spells_everything_out() {
        let cfg = Config { style: NameStyle::Qualified, ..Config::default() };
        let text = run_with(json!({"name": "P", "fields": [{"name": "x", "type": "int"}]}), &cfg).unwrap();
        assert!(text.starts_with(
            "public static final net.minecraft.network.codec.StreamCodec<io.netty.buffer.ByteBuf, P> STREAM_CODEC = \
             net.minecraft.network.codec.StreamCodec.composite("
        ));
        assert!(text.contains("net.minecraft.network.codec.ByteBufCodecs.VAR_INT, P::x,"));
    }

    #[test]
    fn fieldless_types_still_get_a_composite() {
        let text = run(json!({"name": "Marker"})).unwrap();
        assert_eq!(
            text,
            "public static final StreamCodec<ByteBuf, Marker> STREAM_CODEC = StreamCodec.composite(\n    Marker::new\n);"
        );
    }

    #[test]
    fn existing_stream_codec_aborts() {
        let out = run(json!({
            "name": "Done",
            "fields": [{"name": "STREAM_CODEC", "type": "StreamCodec", "modifiers": ["static"]}]
        }));
        assert!(out.is_none());
    }
}
