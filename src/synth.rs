//! Declaration templates for the three codec shapes.
pub mod enums;
pub mod record;
pub mod stream;

use crate::decl::TypeDecl;
use crate::ir::FieldDescriptor;

/// Where a generated fragment goes in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Appended as a new member before the closing brace.
    EndOfMembers,
    /// Raw text at a byte offset of the source.
    At(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDeclaration {
    pub text: String,
    pub insertion: Insertion,
}

impl GeneratedDeclaration {
    pub fn member(text: String) -> Self {
        Self { text, insertion: Insertion::EndOfMembers }
    }
}

/// Idempotency guard. Static fields count: a generated codec is one.
pub fn already_declares(fields: &[FieldDescriptor], name: &str) -> bool {
    fields.iter().any(|f| f.name == name)
}

/// A declared accessor for `field`: `field()` (records) or `getField()`.
pub fn getter_method(decl: &TypeDecl, field: &str) -> Option<String> {
    let mut chars = field.chars();
    let bean = match chars.next() {
        Some(first) => format!("get{}{}", first.to_uppercase(), chars.as_str()),
        None => return None,
    };
    [field.to_string(), bean].into_iter().find(|m| decl.has_method(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::TypeRef;

    #[test]
    fn guard_sees_static_fields() {
        let fields = vec![FieldDescriptor {
            name: "CODEC".into(),
            ty: TypeRef::simple("com.mojang.serialization.Codec"),
            is_static: true,
            is_nullable: false,
        }];
        assert!(already_declares(&fields, "CODEC"));
        assert!(!already_declares(&fields, "STREAM_CODEC"));
    }

    #[test]
    fn getters_prefer_record_accessor_then_bean() {
        let decl = TypeDecl {
            name: "T".into(),
            methods: vec!["x".into(), "getName".into()],
            ..TypeDecl::default()
        };
        assert_eq!(getter_method(&decl, "x").as_deref(), Some("x"));
        assert_eq!(getter_method(&decl, "name").as_deref(), Some("getName"));
        assert_eq!(getter_method(&decl, "y"), None);
    }
}
