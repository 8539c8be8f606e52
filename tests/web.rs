//! Browser-side checks for the JS surface. Run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use linkcore::wasm::EntityLinker;
use linkcore::Candidate;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn link_from_js_values() {
    let mut linker = EntityLinker::new(JsValue::UNDEFINED, "/taxonomy/term/{id}".to_string()).unwrap();
    let candidates = serde_wasm_bindgen::to_value(&vec![Candidate::new("7", "Climate Council")]).unwrap();
    linker.set_candidates(candidates).unwrap();
    assert_eq!(linker.candidate_count(), 1);

    let html = linker
        .link("See the Climate Council report.", "<p>See the Climate Council report.</p>")
        .unwrap();
    assert_eq!(html, r#"<p>See the <a href="/taxonomy/term/7">Climate Council</a> report.</p>"#);
}

#[wasm_bindgen_test]
fn invalid_candidates_are_rejected() {
    let mut linker = EntityLinker::new(JsValue::NULL, "/node/{id}".to_string()).unwrap();
    assert!(linker.set_candidates(JsValue::from_str("not a list")).is_err());
}
