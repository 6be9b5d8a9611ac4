//! Dynamic question/answer reconciliation.
//!
//! Projects carry a serialized map of answers to externally-defined
//! questions. The question registry changes over time, so each record
//! resolves answer keys against its *own* historical set (the ids already
//! present in its stored map) and only bootstraps from the live registry
//! snapshot when it has no answers yet. Keys are never removed: removing a
//! question from the registry does not orphan historical answers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// A question definition from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: DbId,
    pub text: String,
    pub active: bool,
    pub created_at: Timestamp,
}

/// Stored answer map: question key → answer text.
pub type AnswerMap = BTreeMap<String, String>;

/// Transient answers supplied by the caller, keyed by question id.
pub type IncomingAnswers = BTreeMap<DbId, String>;

/// Derive the stable map key for a question id.
pub fn question_key(id: DbId) -> String {
    format!("question_{id}")
}

/// Parse a question id back out of a stored map key.
///
/// Returns `None` for keys that do not follow the `question_{id}` shape.
pub fn question_id_from_key(key: &str) -> Option<DbId> {
    key.rsplit('_').next()?.parse().ok()
}

/// The set of question ids a record resolves incoming answers against:
/// its own historical set when it has stored answers, otherwise the
/// currently-active questions from the registry snapshot.
pub fn resolution_set(stored: &AnswerMap, snapshot: &[Question]) -> Vec<DbId> {
    if stored.is_empty() {
        snapshot.iter().filter(|q| q.active).map(|q| q.id).collect()
    } else {
        stored.keys().filter_map(|k| question_id_from_key(k)).collect()
    }
}

/// Merge transient answers into the stored map ahead of a save.
///
/// For each resolvable question id, a non-null incoming answer that differs
/// from the stored value is written under the derived key. Keys are never
/// removed, so the stored map only grows. Returns the number of entries
/// written.
pub fn merge_answers(
    stored: &mut AnswerMap,
    snapshot: &[Question],
    incoming: &IncomingAnswers,
) -> usize {
    let ids = resolution_set(stored, snapshot);
    let mut written = 0;
    for id in ids {
        let key = question_key(id);
        if let Some(answer) = incoming.get(&id) {
            if stored.get(&key) != Some(answer) {
                stored.insert(key, answer.clone());
                written += 1;
            }
        }
    }
    written
}
