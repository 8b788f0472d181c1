//! Run with `wasm-pack test --headless --firefox crates/webui`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlDocument;
use webui::util::cookie::read_cookie;

wasm_bindgen_test_configure!(run_in_browser);

fn set_cookie(cookie: &str) {
    let document: HtmlDocument = web_sys::window()
        .and_then(|window| window.document())
        .expect("document should exist")
        .dyn_into()
        .expect("should be an HTML document");
    document.set_cookie(cookie).expect("cookie should be writable");
}

#[wasm_bindgen_test]
fn reads_cookie_set_by_document() {
    set_cookie("hm_test=abc");
    assert_eq!(Some("abc".to_string()), read_cookie("hm_test"));
}

#[wasm_bindgen_test]
fn expired_cookie_is_absent() {
    set_cookie("hm_gone=1");
    set_cookie("hm_gone=; expires=Thu, 01 Jan 1970 00:00:00 GMT");
    assert_eq!(None, read_cookie("hm_gone"));
}
