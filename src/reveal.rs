//! Study-mode reveal semantics and the authoring list edits.
//!
//! Every operation here is a pure whole-list transform: it takes the
//! current annotation slice and returns the replacement list (or `None`
//! when nothing would change), which the engine feeds to the store's single
//! replace entry point. Mode gating lives in the engine; these functions
//! only encode the list semantics.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::doc::Annotation;

/// Flip exactly one occlusion's `revealed` flag.
///
/// Returns `None` when `id` does not name an occlusion — clicks on arrows
/// and labels don't toggle anything.
#[must_use]
pub fn toggle_reveal(annotations: &[Annotation], id: &str) -> Option<Vec<Annotation>> {
    let mut hit = false;
    let updated = annotations
        .iter()
        .map(|ann| match ann {
            Annotation::Occlusion { id: ann_id, x, y, w, h, revealed } if ann_id == id => {
                hit = true;
                Annotation::Occlusion { id: ann_id.clone(), x: *x, y: *y, w: *w, h: *h, revealed: !revealed }
            }
            other => other.clone(),
        })
        .collect();
    hit.then_some(updated)
}

/// Bulk reveal-or-hide across every occlusion.
///
/// If at least one occlusion is still hidden, the action reveals all;
/// only when none are hidden does it hide all. This is deliberately NOT a
/// per-element inversion — flipping each flag independently would leave a
/// mixed set mixed, which is useless mid-study.
#[must_use]
pub fn toggle_all(annotations: &[Annotation]) -> Vec<Annotation> {
    let any_hidden = annotations.iter().any(Annotation::is_hidden_occlusion);
    annotations
        .iter()
        .map(|ann| match ann {
            Annotation::Occlusion { id, x, y, w, h, .. } => {
                Annotation::Occlusion { id: id.clone(), x: *x, y: *y, w: *w, h: *h, revealed: any_hidden }
            }
            other => other.clone(),
        })
        .collect()
}

/// Pop the most recently appended annotation, regardless of kind.
///
/// Returns `None` on an empty list (no-op, no error). There is no redo.
#[must_use]
pub fn undo_last(annotations: &[Annotation]) -> Option<Vec<Annotation>> {
    if annotations.is_empty() {
        return None;
    }
    Some(annotations[..annotations.len() - 1].to_vec())
}

/// Remove one annotation by id. Returns `None` when the id is absent.
#[must_use]
pub fn delete(annotations: &[Annotation], id: &str) -> Option<Vec<Annotation>> {
    if !annotations.iter().any(|ann| ann.id() == id) {
        return None;
    }
    Some(annotations.iter().filter(|ann| ann.id() != id).cloned().collect())
}

/// Replace a text label's content in place. Returns `None` when `id` does
/// not name a text annotation or the content is already identical.
#[must_use]
pub fn set_text(annotations: &[Annotation], id: &str, content: &str) -> Option<Vec<Annotation>> {
    let mut changed = false;
    let updated = annotations
        .iter()
        .map(|ann| match ann {
            Annotation::Text { id: ann_id, x, y, content: existing } if ann_id == id && existing != content => {
                changed = true;
                Annotation::Text { id: ann_id.clone(), x: *x, y: *y, content: content.to_owned() }
            }
            other => other.clone(),
        })
        .collect();
    changed.then_some(updated)
}
