//! The engine core: pointer handling, mode/tool gating, and the fan-out
//! from committed mutations to persistence.
//!
//! `EngineCore` is browser-independent and fully testable; the WASM host
//! wrapper (feature `web`) forwards DOM events into it and reacts to the
//! returned [`Action`]s. Every handler that commits a change routes through
//! the store's single replace entry point and reports `DocumentChanged`, so
//! the host records exactly one snapshot per committed edit.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::coords::{ContainerRect, Point};
use crate::doc::{Annotation, AnnotationStore, ImageNode, NodeDecodeError};
use crate::input::{EditMode, GestureState, Session, Tool};
use crate::render::Scene;
use crate::{draw, hit, render, resize, reveal};

/// What a handler did, for the host to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A mutation was committed to the store; record a snapshot.
    DocumentChanged,
    /// Visual state changed (committed or ephemeral); redraw the scene.
    RenderNeeded,
}

/// Core engine state for one image node.
pub struct EngineCore {
    pub store: AnnotationStore,
    pub session: Session,
    pub gesture: GestureState,
}

impl EngineCore {
    #[must_use]
    pub fn new(node: ImageNode) -> Self {
        Self {
            store: AnnotationStore::new(node),
            session: Session::default(),
            gesture: GestureState::default(),
        }
    }

    /// Hydrate from stored document content. Legacy records with missing
    /// optional fields decode with defaults; structural garbage errors out.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, NodeDecodeError> {
        Ok(Self::new(ImageNode::from_value(value)?))
    }

    // --- Session ---

    /// Switch between authoring and study mode. Rejected mid-gesture.
    pub fn set_mode(&mut self, mode: EditMode) -> bool {
        if self.gesture.is_active() {
            return false;
        }
        self.session.mode = mode;
        true
    }

    /// Select the active drawing tool. Rejected mid-gesture.
    pub fn set_tool(&mut self, tool: Tool) -> bool {
        if self.gesture.is_active() {
            return false;
        }
        self.session.tool = tool;
        true
    }

    #[must_use]
    pub fn mode(&self) -> EditMode {
        self.session.mode
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.session.tool
    }

    // --- Pointer events (canvas surface) ---

    /// Pointer-down on the annotation surface.
    ///
    /// Study mode: hit-test and toggle the occlusion under the pointer.
    /// Edit mode: commit a text label directly, or open a drawing gesture —
    /// unless a resize gesture already holds the session, in which case
    /// this is a no-op.
    pub fn on_pointer_down(&mut self, client: Point, rect: ContainerRect) -> Vec<Action> {
        let pt = rect.to_percent(client);

        if self.session.mode == EditMode::Study {
            return self.study_click(pt);
        }

        if self.gesture.is_active() {
            return Vec::new();
        }

        match draw::begin(self.session.tool, pt) {
            Some(shape) => {
                self.gesture = GestureState::Drawing { start: pt, shape };
                vec![Action::RenderNeeded]
            }
            None => {
                // Text tool: direct commit, no drag.
                self.append(draw::text_label(pt))
            }
        }
    }

    /// Pointer-move: update whichever gesture owns the session.
    pub fn on_pointer_move(&mut self, client: Point, rect: ContainerRect) -> Vec<Action> {
        match self.gesture {
            GestureState::Drawing { start, mut shape } => {
                draw::update(&mut shape, start, rect.to_percent(client));
                self.gesture = GestureState::Drawing { start, shape };
                vec![Action::RenderNeeded]
            }
            GestureState::Resizing { .. } => {
                self.gesture = GestureState::Resizing { live_width_px: resize::live_width(client.x, &rect) };
                vec![Action::RenderNeeded]
            }
            GestureState::Idle => Vec::new(),
        }
    }

    /// Pointer-up: commit or discard the active gesture. A release with no
    /// gesture in progress is a no-op.
    pub fn on_pointer_up(&mut self, client: Point, rect: ContainerRect) -> Vec<Action> {
        match self.gesture {
            GestureState::Drawing { start, mut shape } => {
                draw::update(&mut shape, start, rect.to_percent(client));
                self.gesture = GestureState::Idle;
                match draw::commit(&shape, start) {
                    Some(ann) => self.append(ann),
                    // Below threshold: accidental tap, discard silently.
                    None => vec![Action::RenderNeeded],
                }
            }
            GestureState::Resizing { .. } => {
                let width = resize::live_width(client.x, &rect);
                self.gesture = GestureState::Idle;
                self.store.set_width(resize::width_string(width));
                vec![Action::DocumentChanged, Action::RenderNeeded]
            }
            GestureState::Idle => Vec::new(),
        }
    }

    // --- Pointer events (resize affordance) ---

    /// Pointer-down on the resize grip: acquire the gesture session.
    /// Drawing pointer-downs no-op until release. Edit mode only.
    pub fn on_resize_pointer_down(&mut self, client: Point, rect: ContainerRect) -> Vec<Action> {
        if self.session.mode != EditMode::Edit || self.gesture.is_active() {
            return Vec::new();
        }
        self.gesture = GestureState::Resizing { live_width_px: resize::live_width(client.x, &rect) };
        vec![Action::RenderNeeded]
    }

    // --- Reveal / authoring operations ---

    /// Toggle one occlusion's reveal flag. Study mode only; ignored in
    /// edit mode.
    pub fn toggle_reveal(&mut self, id: &str) -> Vec<Action> {
        if self.session.mode != EditMode::Study {
            return Vec::new();
        }
        match reveal::toggle_reveal(self.store.annotations(), id) {
            Some(updated) => self.replace(updated),
            None => Vec::new(),
        }
    }

    /// Bulk reveal-or-hide across all occlusions. Study mode only.
    pub fn toggle_all(&mut self) -> Vec<Action> {
        if self.session.mode != EditMode::Study {
            return Vec::new();
        }
        let updated = reveal::toggle_all(self.store.annotations());
        self.replace(updated)
    }

    /// Remove the most recently added annotation of any kind. Edit mode
    /// only; empty list is a no-op.
    pub fn undo_last(&mut self) -> Vec<Action> {
        if self.session.mode != EditMode::Edit {
            return Vec::new();
        }
        match reveal::undo_last(self.store.annotations()) {
            Some(updated) => self.replace(updated),
            None => Vec::new(),
        }
    }

    /// Delete one annotation by id. Edit mode only.
    pub fn delete_annotation(&mut self, id: &str) -> Vec<Action> {
        if self.session.mode != EditMode::Edit {
            return Vec::new();
        }
        match reveal::delete(self.store.annotations(), id) {
            Some(updated) => self.replace(updated),
            None => Vec::new(),
        }
    }

    /// Commit edited label content. Edit mode only; unchanged content does
    /// not dirty the document.
    pub fn set_text(&mut self, id: &str, content: &str) -> Vec<Action> {
        if self.session.mode != EditMode::Edit {
            return Vec::new();
        }
        match reveal::set_text(self.store.annotations(), id, content) {
            Some(updated) => self.replace(updated),
            None => Vec::new(),
        }
    }

    // --- Queries ---

    /// Display list for the current frame.
    #[must_use]
    pub fn scene(&self) -> Scene {
        render::build(self.store.node(), &self.gesture)
    }

    #[must_use]
    pub fn node(&self) -> &ImageNode {
        self.store.node()
    }

    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        self.store.annotations()
    }

    /// Occlusions study mode still hides. The host shows the bulk toggle
    /// affordance only when occlusions exist at all.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.store
            .annotations()
            .iter()
            .filter(|a| a.is_hidden_occlusion())
            .count()
    }

    #[must_use]
    pub fn has_occlusions(&self) -> bool {
        self.store
            .annotations()
            .iter()
            .any(|a| matches!(a, Annotation::Occlusion { .. }))
    }

    /// Annotation under a client-space point, if any.
    #[must_use]
    pub fn annotation_at(&self, client: Point, rect: ContainerRect) -> Option<&Annotation> {
        hit::hit_test(rect.to_percent(client), self.store.annotations())
    }

    // --- Internal ---

    fn study_click(&mut self, pt: Point) -> Vec<Action> {
        let Some(target) = hit::hit_test(pt, self.store.annotations()) else {
            return Vec::new();
        };
        let id = target.id().to_owned();
        match reveal::toggle_reveal(self.store.annotations(), &id) {
            Some(updated) => self.replace(updated),
            None => Vec::new(),
        }
    }

    fn append(&mut self, ann: Annotation) -> Vec<Action> {
        let mut updated = self.store.annotations().to_vec();
        updated.push(ann);
        self.replace(updated)
    }

    fn replace(&mut self, annotations: Vec<Annotation>) -> Vec<Action> {
        self.store.replace(annotations);
        vec![Action::DocumentChanged, Action::RenderNeeded]
    }
}
