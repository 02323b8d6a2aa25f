//! Applying generated fragments to source text as one atomic edit.
use tracing::debug;

use crate::codegen::Generation;
use crate::decl::TypeDecl;
use crate::error::{Error, Result};
use crate::synth::Insertion;

/// Pending insertions against one document. Nothing is written until
/// [`commit`](Self::commit), and a failed commit leaves the document as it
/// was.
#[derive(Debug, Clone, Default)]
pub struct EditTransaction {
    inserts: Vec<(usize, String)>,
}

impl EditTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, offset: usize, text: impl Into<String>) {
        self.inserts.push((offset, text.into()));
    }

    /// Validate every offset, then apply back to front. Insertions sharing an
    /// offset land in submission order.
    pub fn commit(self, doc: &mut String) -> Result<()> {
        for (offset, _) in &self.inserts {
            if *offset > doc.len() {
                return Err(Error::OffsetOutOfBounds { offset: *offset, len: doc.len() });
            }
            if !doc.is_char_boundary(*offset) {
                return Err(Error::NotCharBoundary { offset: *offset });
            }
        }
        let mut order: Vec<usize> = (0..self.inserts.len()).collect();
        order.sort_by(|&a, &b| self.inserts[b].0.cmp(&self.inserts[a].0).then(b.cmp(&a)));
        for i in order {
            let (offset, text) = &self.inserts[i];
            debug!(offset, bytes = text.len(), "insert");
            doc.insert_str(*offset, text);
        }
        Ok(())
    }
}

/// Lay out a generation as insertions into the source `decl` came from:
/// members before `body_end`, missing imports at `import_anchor`, raw edits
/// at their own offsets.
pub fn plan(decl: &TypeDecl, generation: &Generation, indent: &str) -> Result<EditTransaction> {
    let mut tx = EditTransaction::new();

    let missing: Vec<&String> = generation
        .imports
        .iter()
        .filter(|imp| !decl.imports.contains(imp))
        .collect();
    if !missing.is_empty() {
        match decl.import_anchor {
            Some(anchor) => {
                let lines: String = missing.iter().map(|imp| format!("import {imp};\n")).collect();
                tx.insert(anchor, lines);
            }
            None => tracing::warn!(type_name = %decl.name, count = missing.len(), "no import anchor; imports not added"),
        }
    }

    for generated in &generation.declarations {
        match generated.insertion {
            Insertion::At(offset) => tx.insert(offset, generated.text.clone()),
            Insertion::EndOfMembers => {
                let body_end = decl.body_end.ok_or_else(|| Error::MissingAnchor {
                    type_name: decl.name.clone(),
                    anchor: "body_end",
                })?;
                tx.insert(body_end, member_text(&generated.text, indent));
            }
        }
    }
    Ok(tx)
}

fn member_text(text: &str, indent: &str) -> String {
    let mut out = String::from("\n");
    for line in text.lines() {
        if !line.is_empty() {
            out.push_str(indent);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
