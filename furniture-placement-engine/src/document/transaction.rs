use bevy::prelude::*;

use super::element::DocumentError;
use super::store::{Document, DocumentSnapshot};

/// A named unit of document work. Dropping the transaction without
/// committing restores the store to its pre-transaction state, so a
/// failure mid-way through a placement can never leave the document
/// half-mutated.
pub struct Transaction<'doc> {
    doc: &'doc mut Document,
    name: String,
    /// Present while uncommitted. `commit` takes it; `Drop` treats a
    /// remaining snapshot as a rollback.
    snapshot: Option<DocumentSnapshot>,
}

impl<'doc> Transaction<'doc> {
    pub fn start(doc: &'doc mut Document, name: &str) -> Result<Self, DocumentError> {
        let snapshot = doc.begin_transaction(name)?;
        Ok(Self {
            doc,
            name: name.to_string(),
            snapshot: Some(snapshot),
        })
    }

    /// The document, for mutation while the transaction is open.
    pub fn document(&mut self) -> &mut Document {
        self.doc
    }

    pub fn commit(mut self) {
        self.snapshot = None;
        self.doc.end_transaction();
        info!("transaction '{}' committed", self.name);
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.doc.restore(snapshot);
            self.doc.end_transaction();
            warn!("transaction '{}' rolled back", self.name);
        }
    }
}
