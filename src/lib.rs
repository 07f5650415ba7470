//! Image-occlusion annotation engine for the study-notes editor.
//!
//! This crate owns the one deep subsystem of the app: the in-place editor
//! that draws masks, arrows and text labels over an image, toggles between
//! authoring and study reveal modes, resizes the host container, and
//! persists edits transparently through a debounced snapshot writer. It is
//! compiled to WebAssembly and embedded in the editor as a node view; the
//! host page wires DOM events to [`host::OcclusionWidget`] and renders the
//! scene the engine hands back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser-independent [`engine::EngineCore`] and action fan-out |
//! | [`doc`] | Annotation sum type, image node, and the annotation store |
//! | [`coords`] | Client-to-percent coordinate mapping |
//! | [`input`] | Mode/tool session context and the gesture state machine |
//! | [`draw`] | Live-shape geometry and commit thresholds |
//! | [`reveal`] | Study-mode reveal semantics and authoring list edits |
//! | [`resize`] | Container width computation |
//! | [`sync`] | Debounced snapshot persistence and save status |
//! | [`hit`] | Hit-testing annotations in percent space |
//! | [`render`] | Display-list scene construction for the host |
//! | `host` | WASM widget wrapper (feature `web`) |
//! | [`consts`] | Shared numeric constants (thresholds, intervals) |

pub mod consts;
pub mod coords;
pub mod doc;
pub mod draw;
pub mod engine;
pub mod hit;
#[cfg(feature = "web")]
pub mod host;
pub mod input;
pub mod render;
pub mod resize;
pub mod reveal;
pub mod sync;
