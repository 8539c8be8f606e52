//! LinkCore: Sibling-Entity Auto-Linking
//!
//! A Rust/WASM implementation of the KittClouds entity auto-linker. Free text
//! stored on an entity (a taxonomy term description, a node body) is rendered
//! to HTML and every mention of a sibling entity's name is turned into a link
//! to that sibling.
//!
//! # Architecture
//!
//! ## Core
//! - `linker/` - EntityLinker core: name pattern, case heuristics, word
//!   boundaries and anchor substitution
//! - `candidate.rs` - Candidate / CandidateSet (ordered id → name directory)
//!
//! ## Collaborators
//! - `directory.rs` - CandidateDirectory trait + in-memory EntityStore
//! - `url.rs` - UrlBuilder trait + RouteTable of canonical routes
//! - `format.rs` - Text formats applied before linking (plain_text, markdown, full_html)
//! - `render.rs` - LinkedText render element and field formatter
//! - `widget.rs` - Entity-reference widget selection context
//! - `config.rs` - LinkerConfig / EntityKeys / SiteConfig
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { EntityLinker } from 'linkcore';
//!
//! await init();
//!
//! const linker = new EntityLinker({}, '/taxonomy/term/{id}');
//! linker.setCandidates([{ id: '7', name: 'Climate Council' }]);
//!
//! linker.link(
//!   'See the Climate Council report.',
//!   '<p>See the Climate Council report.</p>'
//! );
//! // <p>See the <a href="/taxonomy/term/7">Climate Council</a> report.</p>
//! ```

pub mod candidate;
pub mod config;
pub mod directory;
pub mod error;
pub mod format;
pub mod linker;
pub mod render;
pub mod url;
pub mod wasm;
pub mod widget;

pub use candidate::*;
pub use config::*;
pub use directory::*;
pub use error::{LinkError, Result};
pub use format::*;
pub use linker::*;
pub use render::*;
pub use url::*;
pub use widget::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("linkcore v{}", env!("CARGO_PKG_VERSION"))
}
