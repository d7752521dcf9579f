//! Thin `web-sys` lookups shared by the behavior shells.
//!
//! Every helper returns `Option`/`Vec` and swallows JS exceptions: a page
//! without a given element simply has nothing to wire.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, NodeList, Storage, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

pub fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Look up an element by id, narrowed to `HtmlElement`.
pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// First element matching `selector`, narrowed to `HtmlElement`.
pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// All elements under `root` matching `selector`.
pub fn query_all_in(root: &web_sys::Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector).map(html_elements).unwrap_or_default()
}

/// All elements in the document matching `selector`.
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    document()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(html_elements)
        .unwrap_or_default()
}

// Non-HTML nodes (SVG, MathML) are skipped.
fn html_elements(nodes: NodeList) -> Vec<HtmlElement> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}
