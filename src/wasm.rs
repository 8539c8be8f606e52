use wasm_bindgen::prelude::*;

use crate::candidate::{Candidate, CandidateSet};
use crate::config::LinkerConfig;
use crate::linker::{LinkReport, Linker};
use crate::url::RouteTable;
use crate::widget::selection_context;

/// Route key used for the single template a JS caller supplies
const ENTITY_ROUTE: &str = "entity";

#[wasm_bindgen]
pub struct EntityLinker {
    linker: Linker,
    candidates: CandidateSet,
    routes: RouteTable,
}

#[wasm_bindgen]
impl EntityLinker {
    /// `config` may be `undefined`; `url_template` contains `{id}`
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, url_template: String) -> Result<EntityLinker, JsValue> {
        let config: LinkerConfig = if config.is_undefined() || config.is_null() {
            LinkerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid linker config: {}", e)))?
        };
        Ok(Self::with_config(config, url_template))
    }

    /// Replace the candidate list (`[{ id, name }]`)
    #[wasm_bindgen(js_name = setCandidates)]
    pub fn set_candidates(&mut self, candidates: JsValue) -> Result<(), JsValue> {
        let candidates: Vec<Candidate> = serde_wasm_bindgen::from_value(candidates)
            .map_err(|e| JsValue::from_str(&format!("Invalid candidates: {}", e)))?;
        self.set_candidate_list(candidates);
        Ok(())
    }

    #[wasm_bindgen(js_name = candidateCount)]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[wasm_bindgen]
    pub fn link(&self, plain_text: &str, rendered: &str) -> Result<String, JsValue> {
        self.report(plain_text, rendered)
            .map(|report| report.fragment)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns { fragment, linked, unresolved, url_failures, missing_in_fragment }
    #[wasm_bindgen(js_name = linkWithReport)]
    pub fn link_with_report(&self, plain_text: &str, rendered: &str) -> Result<JsValue, JsValue> {
        let report = self
            .report(plain_text, rendered)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl EntityLinker {
    pub fn with_config(config: LinkerConfig, url_template: String) -> Self {
        Self {
            linker: Linker::new(config),
            candidates: CandidateSet::default(),
            routes: RouteTable::new().with_route(ENTITY_ROUTE, url_template),
        }
    }

    pub fn set_candidate_list(&mut self, candidates: Vec<Candidate>) {
        self.candidates = CandidateSet::new(candidates);
    }

    fn report(&self, plain_text: &str, rendered: &str) -> crate::Result<LinkReport> {
        let urls = self.routes.for_entity_type(ENTITY_ROUTE);
        self.linker
            .link_with_report(plain_text, rendered, &self.candidates, &urls)
    }
}

/// `+`-joined selection context for an entity-reference picker
#[wasm_bindgen(js_name = selectionContext)]
pub fn selection_context_js(ids: Vec<String>) -> String {
    selection_context(&ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_linking_path() {
        let mut linker = EntityLinker::with_config(LinkerConfig::default(), "/taxonomy/term/{id}".into());
        linker.set_candidate_list(vec![Candidate::new("7", "Climate Council")]);
        assert_eq!(linker.candidate_count(), 1);

        let report = linker
            .report("See the Climate Council report.", "<p>See the Climate Council report.</p>")
            .unwrap();
        assert_eq!(
            report.fragment,
            r#"<p>See the <a href="/taxonomy/term/7">Climate Council</a> report.</p>"#
        );
    }

    #[test]
    fn test_template_without_placeholder_links_nothing() {
        let mut linker = EntityLinker::with_config(LinkerConfig::default(), "/static".into());
        linker.set_candidate_list(vec![Candidate::new("4", "WTO")]);
        let report = linker.report("Ask the WTO.", "<p>Ask the WTO.</p>").unwrap();
        assert_eq!(report.fragment, "<p>Ask the WTO.</p>");
        assert_eq!(report.url_failures, vec!["4".to_string()]);
    }

    #[test]
    fn test_selection_context_js() {
        assert_eq!(selection_context_js(vec!["1".into(), "2".into()]), "1+2");
    }
}
