//! Document model: annotations, the embedding image node, and the store.
//!
//! An [`Annotation`] is a kind-discriminated sum type — each kind carries
//! exactly the fields it uses, and serde's internal tagging keeps the wire
//! shape flat (`{"kind": "occlusion", "x": ..., ...}`). All positional
//! fields are container-relative percentages in `[0, 100]`, so resizing the
//! host container never rewrites annotation geometry.
//!
//! [`AnnotationStore`] owns the live [`ImageNode`] for one image. Mutation
//! goes through a single whole-list replace (plus `set_width` for the one
//! other mutable node field); there is no field-level update surface.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The kind of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    /// Masking box, hidden by default, revealable in study mode.
    Occlusion,
    /// Directed arrow from a start point to an endpoint.
    Arrow,
    /// Free-text label anchored at a point.
    Text,
}

/// One annotation over the image.
///
/// Wire keys follow the stored document format: arrows keep their endpoint
/// under `w`/`h`, and text labels written by older clients may carry unused
/// `w`/`h` keys, which are ignored on load and not written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Annotation {
    /// Masking box; `w`/`h` are its extent.
    Occlusion {
        id: String,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        /// Whether study mode currently shows what is underneath.
        #[serde(default)]
        revealed: bool,
    },
    /// Arrow from `(x, y)` to `(end_x, end_y)`.
    Arrow {
        id: String,
        x: f64,
        y: f64,
        #[serde(rename = "w")]
        end_x: f64,
        #[serde(rename = "h")]
        end_y: f64,
    },
    /// Text label centered at `(x, y)`; its hit-box derives from the
    /// rendered label, not from stored geometry.
    Text {
        id: String,
        x: f64,
        y: f64,
        #[serde(default)]
        content: String,
    },
}

impl Annotation {
    /// Generate a fresh opaque annotation id. Never reused.
    #[must_use]
    pub fn fresh_id() -> String {
        Uuid::new_v4().to_string()
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Occlusion { id, .. } | Self::Arrow { id, .. } | Self::Text { id, .. } => id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> AnnotationKind {
        match self {
            Self::Occlusion { .. } => AnnotationKind::Occlusion,
            Self::Arrow { .. } => AnnotationKind::Arrow,
            Self::Text { .. } => AnnotationKind::Text,
        }
    }

    /// Anchor position: top-left for occlusions and labels, start point for
    /// arrows.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        match self {
            Self::Occlusion { x, y, .. } | Self::Arrow { x, y, .. } | Self::Text { x, y, .. } => (*x, *y),
        }
    }

    /// Whether this is an occlusion that study mode still hides.
    #[must_use]
    pub fn is_hidden_occlusion(&self) -> bool {
        matches!(self, Self::Occlusion { revealed: false, .. })
    }
}

/// The image node embedded in the host document's content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageNode {
    /// Image payload reference (data URI or URL). Immutable after creation.
    pub src: String,
    /// Container width: `"100%"` or `"<int>px"`. Mutated only by the resize
    /// controller.
    pub width: String,
    /// Stable node identity, assigned once at creation.
    #[serde(rename = "nodeId")]
    pub node_id: String,
    /// Annotations in creation order. Append-only except for deletions and
    /// the single undo-last pop.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl ImageNode {
    /// Create a fresh node for a newly inserted image at full width.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            width: "100%".to_owned(),
            node_id: Uuid::new_v4().to_string(),
            annotations: Vec::new(),
        }
    }

    /// Decode a node from stored document content.
    ///
    /// Missing `revealed` and `content` fields default rather than fail, so
    /// legacy records still render. A structurally unreadable value is
    /// surfaced as an error instead of a panic.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, NodeDecodeError> {
        serde_json::from_value(value.clone()).map_err(NodeDecodeError::Malformed)
    }

    /// Encode the node for embedding back into the document tree.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        // Serializing a struct of plain fields cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// A stored image node that could not be decoded.
#[derive(Debug, Error)]
pub enum NodeDecodeError {
    #[error("malformed image node: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// In-memory store of one image node's annotation state.
///
/// All mutation funnels through [`AnnotationStore::replace`] (whole-list
/// swap) and [`AnnotationStore::set_width`]; each bumps a revision counter
/// the engine uses to trigger persistence.
#[derive(Debug, Clone)]
pub struct AnnotationStore {
    node: ImageNode,
    revision: u64,
}

impl AnnotationStore {
    #[must_use]
    pub fn new(node: ImageNode) -> Self {
        Self { node, revision: 0 }
    }

    #[must_use]
    pub fn node(&self) -> &ImageNode {
        &self.node
    }

    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.node.annotations
    }

    /// Replace the whole annotation list. The single mutation entry point
    /// for annotation edits; no partial update is exposed.
    pub fn replace(&mut self, annotations: Vec<Annotation>) {
        self.node.annotations = annotations;
        self.revision += 1;
    }

    /// Commit a new container width (`"100%"` or `"<int>px"`).
    pub fn set_width(&mut self, width: String) {
        self.node.width = width;
        self.revision += 1;
    }

    /// Monotonic edit counter; bumped on every committed mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.node.annotations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node.annotations.is_empty()
    }
}
