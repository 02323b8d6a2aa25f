// Normalized IR for codegen. No declaration text here.

/// A classified type: a primitive keyword, or a qualified name with its
/// ordered generic arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub qualified_name: String,
    pub type_arguments: Vec<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeRef,
    pub is_static: bool,
    pub is_nullable: bool,
}

impl TypeRef {
    pub fn simple(name: impl Into<String>) -> Self {
        Self { qualified_name: name.into(), type_arguments: Vec::new() }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self { qualified_name: name.into(), type_arguments: args }
    }

    /// Last dotted segment of the qualified name.
    pub fn simple_name(&self) -> &str {
        simple_name(&self.qualified_name)
    }
}

pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}
