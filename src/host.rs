//! Browser host wrapper around [`EngineCore`] and [`PersistenceSync`].
//!
//! The embedding JavaScript layer is responsible only for wiring DOM
//! pointer events to the widget (passing the container's bounding rect
//! captured at event time), rendering the returned scene, and supplying the
//! persistence callback. The callback receives
//! `(documentId, nodeJson, timestampMs)`; the host merges the node back
//! into its document content tree and forwards the whole-document snapshot
//! to the persistence sink. A returned `Promise` is awaited and its
//! rejection surfaces as the `"error"` save status.
//!
//! The debounce timer lives here as a single logical slot: every committed
//! edit bumps an epoch and spawns a fresh flush task, and stale tasks
//! observe the bump and bow out, so at most one timer is ever live for the
//! session.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::coords::{ContainerRect, Point};
use crate::engine::{Action, EngineCore};
use crate::input::{EditMode, Tool};
use crate::sync::{DocumentSnapshot, PersistenceSync, SaveState, SinkError};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // The embedding app already installed a logger; keep going.
    }
}

/// The image-occlusion widget exported to the page.
#[wasm_bindgen]
pub struct OcclusionWidget {
    core: EngineCore,
    sync: Rc<RefCell<PersistenceSync>>,
    sink: js_sys::Function,
    flush_epoch: Rc<Cell<u64>>,
}

#[wasm_bindgen]
impl OcclusionWidget {
    /// Create a widget from stored node JSON and a persistence callback.
    #[wasm_bindgen(constructor)]
    pub fn new(document_id: String, node_json: &str, sink: js_sys::Function) -> Result<OcclusionWidget, JsError> {
        let value: serde_json::Value =
            serde_json::from_str(node_json).map_err(|e| JsError::new(&e.to_string()))?;
        let core = EngineCore::from_value(&value).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self {
            core,
            sync: Rc::new(RefCell::new(PersistenceSync::new(document_id))),
            sink,
            flush_epoch: Rc::new(Cell::new(0)),
        })
    }

    // --- Session ---

    /// Switch authoring (`true`) vs. study (`false`) mode. Returns `false`
    /// when a gesture holds the session and the switch was rejected.
    pub fn set_edit_mode(&mut self, edit: bool) -> bool {
        self.core.set_mode(if edit { EditMode::Edit } else { EditMode::Study })
    }

    /// Select the active tool by wire name. Returns `false` for an unknown
    /// name or a mid-gesture switch.
    pub fn set_tool(&mut self, tool: &str) -> bool {
        match parse_tool(tool) {
            Some(tool) => self.core.set_tool(tool),
            None => false,
        }
    }

    // --- Pointer events ---

    /// Pointer-down on the annotation surface. Returns whether a redraw is
    /// needed.
    pub fn pointer_down(&mut self, x: f64, y: f64, left: f64, top: f64, width: f64, height: f64) -> bool {
        let actions = self
            .core
            .on_pointer_down(Point::new(x, y), ContainerRect::new(left, top, width, height));
        self.apply(&actions)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, left: f64, top: f64, width: f64, height: f64) -> bool {
        let actions = self
            .core
            .on_pointer_move(Point::new(x, y), ContainerRect::new(left, top, width, height));
        self.apply(&actions)
    }

    pub fn pointer_up(&mut self, x: f64, y: f64, left: f64, top: f64, width: f64, height: f64) -> bool {
        let actions = self
            .core
            .on_pointer_up(Point::new(x, y), ContainerRect::new(left, top, width, height));
        self.apply(&actions)
    }

    /// Pointer-down on the resize grip; the grip element should take
    /// pointer capture so move/up keep flowing here.
    pub fn resize_pointer_down(&mut self, x: f64, y: f64, left: f64, top: f64, width: f64, height: f64) -> bool {
        let actions = self
            .core
            .on_resize_pointer_down(Point::new(x, y), ContainerRect::new(left, top, width, height));
        self.apply(&actions)
    }

    // --- Reveal / authoring operations ---

    pub fn toggle_reveal(&mut self, id: &str) -> bool {
        let actions = self.core.toggle_reveal(id);
        self.apply(&actions)
    }

    pub fn toggle_all(&mut self) -> bool {
        let actions = self.core.toggle_all();
        self.apply(&actions)
    }

    pub fn undo_last(&mut self) -> bool {
        let actions = self.core.undo_last();
        self.apply(&actions)
    }

    pub fn delete_annotation(&mut self, id: &str) -> bool {
        let actions = self.core.delete_annotation(id);
        self.apply(&actions)
    }

    pub fn set_text(&mut self, id: &str, content: &str) -> bool {
        let actions = self.core.set_text(id, content);
        self.apply(&actions)
    }

    // --- Queries ---

    /// Current display list as JSON.
    #[must_use]
    pub fn scene_json(&self) -> String {
        serde_json::to_string(&self.core.scene()).unwrap_or_else(|_| "{}".to_owned())
    }

    /// Current node state as JSON, for embedding back into the document.
    #[must_use]
    pub fn node_json(&self) -> String {
        self.core.node().to_value().to_string()
    }

    /// `"saved"`, `"saving"` or `"error"`, for the status indicator.
    #[must_use]
    pub fn save_state(&self) -> String {
        match self.sync.borrow().save_state() {
            SaveState::Saved => "saved",
            SaveState::Saving => "saving",
            SaveState::Error => "error",
        }
        .to_owned()
    }

    #[must_use]
    pub fn has_occlusions(&self) -> bool {
        self.core.has_occlusions()
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.core.hidden_count()
    }

    // --- Internal ---

    fn apply(&mut self, actions: &[Action]) -> bool {
        if actions.contains(&Action::DocumentChanged) {
            self.record_and_arm();
        }
        actions.contains(&Action::RenderNeeded)
    }

    fn record_and_arm(&mut self) {
        let content = self.core.node().to_value();
        self.sync.borrow_mut().record(content, js_sys::Date::now());
        self.arm_flush();
    }

    /// Spawn the flush task for the newest edit; earlier tasks see the
    /// epoch move on and exit without writing.
    fn arm_flush(&self) {
        let epoch = self.flush_epoch.get().wrapping_add(1);
        self.flush_epoch.set(epoch);

        let sync = Rc::clone(&self.sync);
        let sink = self.sink.clone();
        let flush_epoch = Rc::clone(&self.flush_epoch);

        spawn_local(async move {
            loop {
                let Some(deadline) = sync.borrow().next_deadline() else {
                    return;
                };
                let wait = (deadline - js_sys::Date::now()).max(0.0);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                gloo_timers::future::sleep(std::time::Duration::from_millis(wait as u64)).await;
                if flush_epoch.get() != epoch {
                    return;
                }
                let snapshot = sync.borrow_mut().poll(js_sys::Date::now());
                let Some(snapshot) = snapshot else {
                    // Rescheduled while we slept; wait out the new deadline.
                    continue;
                };
                let result = write_snapshot(&sink, &snapshot).await;
                sync.borrow_mut().complete(result);
                return;
            }
        });
    }
}

async fn write_snapshot(sink: &js_sys::Function, snapshot: &DocumentSnapshot) -> Result<(), SinkError> {
    let ret = sink
        .call3(
            &JsValue::NULL,
            &JsValue::from_str(&snapshot.document_id),
            &JsValue::from_str(&snapshot.content.to_string()),
            &JsValue::from_f64(snapshot.timestamp_ms),
        )
        .map_err(js_sink_error)?;

    // Await a returned promise; a non-promise return means synchronous success.
    if let Some(promise) = ret.dyn_ref::<js_sys::Promise>() {
        JsFuture::from(promise.clone()).await.map_err(js_sink_error)?;
    }
    Ok(())
}

fn js_sink_error(err: JsValue) -> SinkError {
    SinkError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn parse_tool(tool: &str) -> Option<Tool> {
    match tool {
        "occlusion" => Some(Tool::Occlusion),
        "arrow" => Some(Tool::Arrow),
        "text" => Some(Tool::Text),
        _ => None,
    }
}
