use roundcorners::{Diagnostics, MemoryStore};
use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

/// A document of SVG path elements that corners can be rounded in.
#[wasm_bindgen]
pub struct Document {
    pub(crate) store: MemoryStore,
    /// Counters summed over every batch run on this document.
    pub(crate) totals: Diagnostics,
}

impl Document {
    pub fn rs_new() -> Document { Document { store: MemoryStore::new(), totals: Diagnostics::default() } }
    pub fn rs_store(&self) -> &MemoryStore { &self.store }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logger();
}
