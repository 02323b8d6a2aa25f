//! Zero-value literals for optional fields of the value codec.
use crate::ir::TypeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zero {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
}

impl Zero {
    fn from_keyword(name: &str) -> Option<Self> {
        Some(match name {
            "boolean" => Zero::Boolean,
            "byte" => Zero::Byte,
            "short" => Zero::Short,
            "int" => Zero::Int,
            "long" => Zero::Long,
            "float" => Zero::Float,
            "double" => Zero::Double,
            _ => return None,
        })
    }

    fn from_wrapper(name: &str) -> Option<Self> {
        Some(match name {
            "java.lang.Boolean" => Zero::Boolean,
            "java.lang.Byte" => Zero::Byte,
            "java.lang.Short" => Zero::Short,
            "java.lang.Integer" => Zero::Int,
            "java.lang.Long" => Zero::Long,
            "java.lang.Float" => Zero::Float,
            "java.lang.Double" => Zero::Double,
            "java.lang.String" => Zero::String,
            _ => return None,
        })
    }

    fn literal(self) -> &'static str {
        match self {
            Zero::Boolean => "false",
            Zero::Byte => "(byte)0",
            Zero::Short => "(short)0",
            Zero::Int => "0",
            Zero::Long => "0L",
            Zero::Float => "0.0F",
            Zero::Double => "0.0D",
            Zero::String => "\"\"",
        }
    }
}

pub const NULL_LITERAL: &str = "null";

pub fn default_for(ty: &TypeRef) -> &'static str {
    let name = ty.qualified_name.as_str();
    Zero::from_keyword(name)
        .or_else(|| Zero::from_wrapper(name))
        .map_or(NULL_LITERAL, Zero::literal)
}
