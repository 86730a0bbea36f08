//! Form controller.
//!
//! The lookup form is modelled as a value, [`FormState`], and three
//! transitions that consume it and return the next one:
//!
//! - [`FormState::reset`]: result area empty, pending request superseded.
//! - [`FormState::submit`]: show "Loading", disable input, hand back the
//!   request the UI shell should send.
//! - [`FormState::settle`]: apply a finished request and re-enable input
//!   once nothing is in flight.
//!
//! Only the most recent submission may change the result area. A response
//! that arrives after a newer submission is counted (so the input is not
//! left disabled) and then dropped.

use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::LookupError;
use crate::lookup::{LookupRequest, RequestId, split_path, validate_word};
use crate::render::{RenderNode, render_result};
use crate::tree::SplitNode;

/// Text shown while a request is in flight.
pub const LOADING_TEXT: &str = "Loading";

/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Empty,
    Loading,
    Failed(String),
    Rendered(RenderNode),
}

/// How a request finished, as reported by the UI shell.
#[derive(Debug)]
pub enum Outcome {
    /// A success status with this response body.
    Body(String),
    Failed(LookupError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub input_enabled: bool,
    pub result: ResultView,
    /// Requests sent but not yet settled.
    pub in_flight: usize,
    /// The only request allowed to update `result`.
    pub latest: Option<RequestId>,
    next_id: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default().reset()
    }

    /// Back to the idle page: no result, and no pending request may paint
    /// over it. The input is usable once nothing is in flight.
    pub fn reset(self) -> Self {
        Self {
            input_enabled: self.in_flight == 0,
            result: ResultView::Empty,
            latest: None,
            ..self
        }
    }

    /// Start a lookup for `word`.
    ///
    /// Returns `None` for the request when the word is rejected locally; the
    /// result area then shows why. Either way any earlier request is
    /// superseded.
    pub fn submit(self, word: &str, config: &ClientConfig) -> (Self, Option<LookupRequest>) {
        let mut state = self.reset();

        if let Err(e) = validate_word(word) {
            warn!(word, "rejected lookup: {e}");
            state.result = ResultView::Failed(e.to_string());
            return (state, None);
        }

        let id = RequestId(state.next_id);
        state.next_id += 1;
        state.in_flight += 1;
        state.latest = Some(id);
        state.input_enabled = false;
        state.result = ResultView::Loading;

        let request = LookupRequest {
            id,
            method: config.method,
            path: split_path(config, word),
        };
        debug!(id = id.0, method = request.method.as_str(), path = %request.path, "submit");

        (state, Some(request))
    }

    /// Apply the outcome of request `id`.
    pub fn settle(mut self, id: RequestId, outcome: Outcome, config: &ClientConfig) -> Self {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.input_enabled = self.in_flight == 0;

        if self.latest != Some(id) {
            debug!(id = id.0, "discarding superseded response");
            return self;
        }

        let result = match outcome {
            Outcome::Body(body) => SplitNode::from_json(&body).map(|tree| {
                debug!(id = id.0, nodes = tree.node_count(), "rendering split tree");
                render_result(&tree, config)
            }),
            Outcome::Failed(e) => Err(e),
        };

        self.result = match result {
            Ok(rendered) => ResultView::Rendered(rendered),
            Err(e) => {
                warn!(id = id.0, status = e.status(), detail = e.detail(), "lookup failed");
                ResultView::Failed(e.to_string())
            }
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(state: FormState, word: &str) -> (FormState, LookupRequest) {
        let (state, request) = state.submit(word, &ClientConfig::default());
        (state, request.expect("word should be accepted"))
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = FormState::new();
        assert!(state.input_enabled);
        assert_eq!(state.result, ResultView::Empty);
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_submit_disables_input_and_builds_request() {
        let (state, request) = submit(FormState::new(), "probieren");
        assert!(!state.input_enabled);
        assert_eq!(state.result, ResultView::Loading);
        assert_eq!(request.path, "/split/probieren");
        assert_eq!(request.method.as_str(), "GET");
        assert_eq!(state.latest, Some(request.id));
    }

    #[test]
    fn test_probieren_end_to_end() {
        let config = ClientConfig::default();
        let (state, request) = submit(FormState::new(), "probieren");
        let state = state.settle(
            request.id,
            Outcome::Body(r#"{"word":"probieren","defns":["to try"]}"#.to_string()),
            &config,
        );

        assert!(state.input_enabled);
        let ResultView::Rendered(tree) = &state.result else {
            panic!("expected a rendered tree, got {:?}", state.result);
        };
        assert_eq!(tree.attr("id"), Some("tree"));
        let links = tree.find_all("a");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text_content(), "probieren");
        assert_eq!(
            links[0].attr("href"),
            Some("http://dict.leo.org/englisch-deutsch/probieren")
        );
        let text = tree.text_content();
        assert_eq!(text, "probierento try");
    }

    #[test]
    fn test_transport_failure_shows_status_and_reenables() {
        let (state, request) = submit(FormState::new(), "probieren");
        let state = state.settle(
            request.id,
            Outcome::Failed(LookupError::transport("error")),
            &ClientConfig::default(),
        );
        assert_eq!(state.result, ResultView::Failed("Error: error".to_string()));
        assert!(state.input_enabled);
    }

    #[test]
    fn test_bad_body_is_parse_error() {
        let (state, request) = submit(FormState::new(), "haus");
        let state = state.settle(
            request.id,
            Outcome::Body("not json".to_string()),
            &ClientConfig::default(),
        );
        assert_eq!(state.result, ResultView::Failed("Error: parsererror".to_string()));
        assert!(state.input_enabled);
    }

    #[test]
    fn test_invalid_word_sends_nothing() {
        let (state, request) = FormState::new().submit("haus1", &ClientConfig::default());
        assert!(request.is_none());
        assert!(state.input_enabled);
        assert_eq!(state.in_flight, 0);
        assert!(matches!(state.result, ResultView::Failed(ref m) if m.starts_with("Error: invalid word")));
    }

    #[test]
    fn test_double_submit_never_sticks_disabled() {
        let config = ClientConfig::default();
        let (state, first) = submit(FormState::new(), "haus");
        let (state, second) = submit(state, "hausboot");
        assert_ne!(first.id, second.id);
        assert_eq!(state.in_flight, 2);
        assert!(!state.input_enabled);

        // settle in reverse order
        let state = state.settle(
            second.id,
            Outcome::Body(r#"{"word":"hausboot"}"#.to_string()),
            &config,
        );
        assert!(!state.input_enabled);
        let state = state.settle(first.id, Outcome::Failed(LookupError::transport("error")), &config);
        assert!(state.input_enabled);
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_stale_response_does_not_overwrite() {
        let config = ClientConfig::default();
        let (state, first) = submit(FormState::new(), "haus");
        let (state, second) = submit(state, "boot");

        let state = state.settle(second.id, Outcome::Body(r#"{"word":"boot"}"#.to_string()), &config);
        let fresh = state.result.clone();
        let state = state.settle(first.id, Outcome::Body(r#"{"word":"haus"}"#.to_string()), &config);

        assert_eq!(state.result, fresh);
        let ResultView::Rendered(tree) = &state.result else {
            panic!("expected a rendered tree");
        };
        assert_eq!(tree.find_all("a")[0].text_content(), "boot");
    }

    #[test]
    fn test_stale_response_while_latest_pending() {
        let config = ClientConfig::default();
        let (state, first) = submit(FormState::new(), "haus");
        let (state, _second) = submit(state, "boot");
        let state = state.settle(first.id, Outcome::Failed(LookupError::transport("error")), &config);
        assert_eq!(state.result, ResultView::Loading);
        assert!(!state.input_enabled);
    }

    #[test]
    fn test_resubmit_clears_previous_result() {
        let config = ClientConfig::default();
        let (state, request) = submit(FormState::new(), "haus");
        let state = state.settle(request.id, Outcome::Failed(LookupError::transport("timeout")), &config);
        assert_eq!(state.result, ResultView::Failed("Error: timeout".to_string()));

        let (state, _) = submit(state, "boot");
        assert_eq!(state.result, ResultView::Loading);
    }

    #[test]
    fn test_reset_supersedes_pending_request() {
        let config = ClientConfig::default();
        let (state, request) = submit(FormState::new(), "haus");
        let state = state.reset();
        assert_eq!(state.result, ResultView::Empty);
        assert_eq!(state.in_flight, 1);
        assert_eq!(state.latest, None);
        assert!(!state.input_enabled);

        let state = state.settle(request.id, Outcome::Body(r#"{"word":"haus"}"#.to_string()), &config);
        assert_eq!(state.result, ResultView::Empty);
        assert!(state.input_enabled);
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_rejected_word_supersedes_pending_request() {
        let config = ClientConfig::default();
        let (state, request) = submit(FormState::new(), "haus");
        let (state, rejected) = state.submit("haus1", &config);
        assert!(rejected.is_none());
        assert_eq!(state.latest, None);

        let state = state.settle(request.id, Outcome::Body(r#"{"word":"haus"}"#.to_string()), &config);
        assert!(matches!(state.result, ResultView::Failed(ref m) if m.starts_with("Error: invalid word")));
        assert!(state.input_enabled);
    }

    #[test]
    fn test_reset_when_idle_enables_input() {
        let config = ClientConfig::default();
        let (state, request) = submit(FormState::new(), "haus");
        let state = state
            .settle(request.id, Outcome::Failed(LookupError::transport("error")), &config)
            .reset();
        assert!(state.input_enabled);
        assert_eq!(state.result, ResultView::Empty);
    }

    #[test]
    fn test_post_method_from_config() {
        let config = ClientConfig {
            method: crate::RequestMethod::Post,
            ..ClientConfig::default()
        };
        let (_, request) = FormState::new().submit("haus", &config);
        assert_eq!(request.map(|r| r.method.as_str()), Some("POST"));
    }
}
