//! JSON-RPC 2.0 bridge to the page embedding the viewer.
//!
//! On wasm the viewer runs inside an iframe and talks to its parent window
//! through `postMessage`. Natively the bridge is inert.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Viewer (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │ <───────────────── Response (with ID) ─┤
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Notifications
//! - `model_load_progress`: `{loaded, total, percent}`
//! - `model_load_state`: `{state, error}` on every load state entry
//! - `interaction_hint_dismissed`: `{kind}`
//!
//! ## Methods
//! - `get_load_state`: current load state, progress and failure text
//! - `get_viewer_config`: model path, scale, camera and overlay settings
//!
//! Unknown methods answer with `-32601 Method not found`.

/// JSON-RPC 2.0 types, message listener and outgoing queue.
pub mod web_rpc;
