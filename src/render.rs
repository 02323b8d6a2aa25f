//! Name rendering for generated Java text.
use std::collections::{BTreeSet, HashMap};

use crate::config::NameStyle;
use crate::ir::{simple_name, TypeRef};

/// Spells qualified names in the configured style and remembers which
/// imports the simple spelling relies on.
///
/// Each simple name belongs to the first qualified name that claims it; any
/// other qualified name with the same simple name is written in full.
#[derive(Debug, Clone)]
pub struct Names {
    style: NameStyle,
    owners: HashMap<String, String>,
    imports: BTreeSet<String>,
}

impl Names {
    pub fn new(style: NameStyle) -> Self {
        Self { style, owners: HashMap::new(), imports: BTreeSet::new() }
    }

    /// Claim the simple name of `qualified` without importing it. Names already
    /// in scope (the declared type, existing imports) are reserved up front.
    pub fn reserve(&mut self, qualified: &str) {
        if qualified.contains('.') && !is_packaged(qualified) {
            return;
        }
        self.owners
            .entry(simple_name(qualified).to_string())
            .or_insert_with(|| qualified.to_string());
    }

    pub fn name(&mut self, qualified: &str) -> String {
        if self.style == NameStyle::Qualified || !is_packaged(qualified) {
            return qualified.to_string();
        }
        let short = simple_name(qualified);
        let owner = self
            .owners
            .entry(short.to_string())
            .or_insert_with(|| qualified.to_string());
        if owner.as_str() != qualified {
            return qualified.to_string();
        }
        if needs_import(qualified) {
            self.imports.insert(qualified.to_string());
        }
        short.to_string()
    }

    /// Java source spelling of a classified type, generic arguments included.
    pub fn java_type(&mut self, ty: &TypeRef) -> String {
        let mut out = self.name(&ty.qualified_name);
        if !ty.type_arguments.is_empty() {
            let args: Vec<String> = ty.type_arguments.iter().map(|a| self.java_type(a)).collect();
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
        out
    }

    pub fn into_imports(self) -> Vec<String> {
        self.imports.into_iter().collect()
    }
}

fn needs_import(qualified: &str) -> bool {
    match qualified.strip_prefix("java.lang.") {
        Some(rest) => rest.contains('.'),
        None => qualified.contains('.'),
    }
}

/// Dotted, with a lowercase first segment. `Outer.Inner` is a nested type
/// reached through its outer class, not an importable name.
fn is_packaged(qualified: &str) -> bool {
    match qualified.split_once('.') {
        Some((head, _)) => head.starts_with(|c: char| c.is_ascii_lowercase()),
        None => false,
    }
}
