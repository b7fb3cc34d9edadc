//! UncOpener Core: UNC path detection + link conversion
//!
//! A Rust/WASM implementation of the UncOpener content-script core. It decides
//! whether a page is in scope, which elements to look at, whether an element's
//! text is a UNC path, whether that path is allowed, and what URL it becomes.
//!
//! # Architecture
//!
//! ## Matching Components
//! - `unc/validator.rs` - UNC syntax check (`\\host\share`, 3..=260 chars)
//! - `unc/converter.rs` - UNC path + scheme -> `scheme://host/share/...`
//! - `unc/allowlist.rs` - Case-insensitive allowed-prefix policy
//! - `scope.rs` - Page URL -> active element tags (first match wins)
//! - `element/` - Eligibility: non-editable, exactly one text child
//!
//! ## Glue
//! - `settings.rs` - Stored configuration record, defaults, normalisation
//! - `linker.rs` - UncLinker: eligibility -> allowlist -> conversion
//! - `wasm.rs` - Free-function JS exports
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { UncLinker, isValidUncPath } from 'uncopener-core';
//!
//! await init();
//!
//! isValidUncPath('\\\\server\\share');   // true
//!
//! const linker = new UncLinker(await browser.storage.sync.get());
//! const count = linker.linkAll(document.body, location.href);
//! ```

pub mod element;
pub mod linker;
pub mod scope;
pub mod settings;
pub mod unc;
pub mod wasm;

#[cfg(test)]
mod tests;

pub use element::*;
pub use linker::*;
pub use scope::*;
pub use settings::*;
pub use unc::*;

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
    format!("uncopener-core v{}", env!("CARGO_PKG_VERSION"))
}
