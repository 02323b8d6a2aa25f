use codec_gen::codegen::{Codegen, Outcome, Paradigm, SkipReason};
use codec_gen::config::{Config, NameStyle};
use codec_gen::decl::{parse_document, select};
use codec_gen::edit::plan;
use serde_json::json;

const POINT_SRC: &str = "package demo;\n\npublic record Point(int x, int y) {\n}\n";

fn point_doc() -> String {
    json!({
        "name": "Point",
        "kind": "record",
        "fields": [{"name": "x", "type": "int"}, {"name": "y", "type": "int"}],
        "body_end": POINT_SRC.rfind('}').unwrap(),
        "import_anchor": POINT_SRC.find("public").unwrap()
    })
    .to_string()
}

#[test]
fn record_codec_lands_in_the_source() {
    let decls = parse_document(&point_doc()).unwrap();
    let decl = select(&decls, Some("Point")).unwrap();
    let codegen = Codegen::new(Config::default());

    let Outcome::Generated(generation) = codegen.emit(decl, Paradigm::Value).unwrap() else {
        panic!("expected a generated codec");
    };
    let mut doc = POINT_SRC.to_string();
    plan(decl, &generation, "    ").unwrap().commit(&mut doc).unwrap();

    assert_eq!(
        doc,
        "package demo;\n\n\
         import com.mojang.serialization.Codec;\n\
         import com.mojang.serialization.codecs.RecordCodecBuilder;\n\
         public record Point(int x, int y) {\n\
         \n\
         \x20   public static final Codec<Point> CODEC = RecordCodecBuilder.create(ins -> ins.group(\n\
         \x20       Codec.INT.fieldOf(\"x\").forGetter(value -> value.x),\n\
         \x20       Codec.INT.fieldOf(\"y\").forGetter(value -> value.y)\n\
         \x20   ).apply(ins, Point::new));\n\
         }\n"
    );
}

#[test]
fn stream_codec_qualified_needs_no_imports() {
    let decls = parse_document(&point_doc()).unwrap();
    let codegen = Codegen::new(Config { style: NameStyle::Qualified, ..Config::default() });

    let Outcome::Generated(generation) = codegen.emit(&decls[0], Paradigm::Stream).unwrap() else {
        panic!("expected a generated stream codec");
    };
    assert!(generation.imports.is_empty());
    let text = &generation.declarations[0].text;
    assert!(text.contains("net.minecraft.network.codec.ByteBufCodecs.VAR_INT, Point::x,"));
    assert!(text.contains("net.minecraft.network.codec.ByteBufCodecs.VAR_INT, Point::y,"));
    assert!(text.ends_with("Point::new\n);"));
}

#[test]
fn enum_gets_interface_and_members() {
    let src = "enum Color {\n    RED, GREEN;\n}\n";
    let doc = json!({
        "name": "Color",
        "kind": "enum",
        "name_span": {"offset": src.find("Color").unwrap(), "len": 5},
        "body_end": src.rfind('}').unwrap()
    });
    let decls = parse_document(&doc.to_string()).unwrap();
    let codegen = Codegen::new(Config { style: NameStyle::Qualified, ..Config::default() });

    let Outcome::Generated(generation) = codegen.emit(&decls[0], Paradigm::Value).unwrap() else {
        panic!("expected a generated enum codec");
    };
    let mut out = src.to_string();
    plan(&decls[0], &generation, "    ").unwrap().commit(&mut out).unwrap();

    assert!(out.starts_with("enum Color implements net.minecraft.util.StringRepresentable {\n"));
    assert!(out.contains(
        "    public static final com.mojang.serialization.Codec<Color> CODEC = \
         net.minecraft.util.StringRepresentable.fromEnum(Color::values);\n"
    ));
    assert!(out.contains("    public java.lang.String getSerializedName() {\n        return name();\n    }\n"));
}

#[test]
fn unknown_type_selection_is_a_no_op() {
    let decls = parse_document(&point_doc()).unwrap();
    let codegen = Codegen::new(Config::default());
    let outcome = codegen.emit_selected(select(&decls, Some("Missing")), Paradigm::Value).unwrap();
    assert_eq!(outcome, Outcome::Skipped(SkipReason::NoEnclosingType));
}
