use crate::classify::TypeClassifier;
use crate::decl::{FieldDecl, TypeDecl};
use crate::ir::{simple_name, FieldDescriptor};

/// Every field of `decl`, inherited ones included, in declaration order.
/// Static fields are kept (the idempotency guard needs them); the
/// synthesizers filter them out.
pub fn extract(decl: &TypeDecl) -> Vec<FieldDescriptor> {
    let classifier = TypeClassifier::new(decl);
    decl.all_fields()
        .into_iter()
        .map(|field| describe(&classifier, field))
        .collect()
}

fn describe(classifier: &TypeClassifier, field: &FieldDecl) -> FieldDescriptor {
    FieldDescriptor {
        name: field.name.clone(),
        ty: classifier.classify(&field.ty),
        is_static: field.is_static(),
        is_nullable: field.annotations.iter().any(|a| is_nullable_annotation(a)),
    }
}

/// Matches on the trailing simple name only, so any `Nullable` annotation
/// counts whatever package declares it.
pub fn is_nullable_annotation(annotation: &str) -> bool {
    let name = annotation.trim().trim_start_matches('@');
    let name = name.split('(').next().unwrap_or(name).trim();
    simple_name(name) == "Nullable"
}

pub fn instance_fields(fields: &[FieldDescriptor]) -> impl Iterator<Item = &FieldDescriptor> {
    fields.iter().filter(|f| !f.is_static)
}
