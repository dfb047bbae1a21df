//! Browser-only tests for code that touches the live DOM.
//!
//! Run with `wasm-pack test --headless --firefox`.

mod dom_patches;

use wasm_bindgen_test::wasm_bindgen_test_configure;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

pub(crate) fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount `html` in a fresh `<div>` appended to the body.
pub(crate) fn fixture(html: &str) -> Element {
    let document = document();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}
