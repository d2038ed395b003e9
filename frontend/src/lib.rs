//! Browser side of the page enhancer.
//!
//! Compiled to WebAssembly and loaded by every page of the site. Once the
//! document is parsed it applies the stored or system theme, wires the theme
//! toggle, smooth-scrolls same-page anchors, and fades cards in as they scroll
//! into view. Every feature checks for its markup and silently stays off when
//! the markup or browser API is missing.

mod config;
mod dom;
mod listeners;

use std::cell::Cell;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::{dom::DomHost, listeners::Enhancer};

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Module entry point, run by the wasm-bindgen glue on instantiation.
#[wasm_bindgen(start)]
pub fn start() {
    enhance();
}

/// Enhances the current page once the DOM is ready. Later calls do nothing.
#[wasm_bindgen]
pub fn enhance() {
    if STARTED.with(|started| started.replace(true)) {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    // The module usually finishes loading after parsing is done, in which
    // case DOMContentLoaded has already fired.
    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::once_into_js(move || boot(&window, target));
        if let Err(err) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            warn(&format!("cannot wait for DOMContentLoaded: {}", dom::describe(&err)));
        }
    } else {
        boot(&window, document);
    }
}

fn boot(window: &Window, document: Document) {
    let config = config::load(&document);
    let host = DomHost::new(window, document, &config);
    let enhancer = Enhancer::new(host, config);

    enhancer.install_theme();
    enhancer.install_anchor_scrolling();
    enhancer.install_section_observer();
    enhancer.install_card_animation();
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
