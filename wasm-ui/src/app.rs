//! Main application component.

use std::rc::Rc;

use gloo::console;
use wortteiler::{ClientConfig, FormState, LookupRequest, Outcome, RequestId};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::{LookupForm, ResultPanel};
use crate::fetch;

/// Id of an optional `<script type="application/json">` holding a
/// [`ClientConfig`] for this page.
const CONFIG_ELEMENT_ID: &str = "wortteiler-config";

/// Read the page's embedded config, falling back to defaults.
fn page_config() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    match text {
        Some(text) => ClientConfig::from_json(&text).unwrap_or_else(|e| {
            console::warn!(format!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e));
            ClientConfig::default()
        }),
        None => ClientConfig::default(),
    }
}

/// Events fed to the form controller.
pub enum Action {
    Submit(String),
    Settle(RequestId, Outcome),
    Clear,
}

/// Main application state.
pub struct AppState {
    pub config: Rc<ClientConfig>,
    pub form: FormState,
    /// Request produced by the last submission, for the fetch effect to send.
    pub outbox: Option<LookupRequest>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            config: Rc::new(page_config()),
            form: FormState::new(),
            outbox: None,
        }
    }
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let config = Rc::clone(&self.config);
        let form = self.form.clone();

        let (form, outbox) = match action {
            Action::Submit(word) => form.submit(&word, &config),
            Action::Settle(id, outcome) => (form.settle(id, outcome, &config), self.outbox.clone()),
            Action::Clear => (form.reset(), self.outbox.clone()),
        };

        Rc::new(Self {
            config,
            form,
            outbox,
        })
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);

    // Send each new request once; completions come back as Settle actions
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.outbox.clone(), move |outbox| {
            if let Some(request) = outbox.clone() {
                spawn_local(async move {
                    let outcome = fetch::perform(&request).await;
                    dispatcher.dispatch(Action::Settle(request.id, outcome));
                });
            }
            || ()
        });
    }

    let on_submit = {
        let state = state.clone();
        Callback::from(move |word: String| state.dispatch(Action::Submit(word)))
    };

    let on_clear = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::Clear))
    };

    html! {
        <div class="app">
            <header class="header">
                <h1>{ "wortteiler" }</h1>
                <p class="subtitle">{ "Split German compound words into their parts" }</p>
            </header>

            <main class="main">
                <LookupForm
                    disabled={!state.form.input_enabled}
                    on_submit={on_submit}
                    on_clear={on_clear}
                />
                <ResultPanel result={state.form.result.clone()} />
            </main>

            <footer class="footer">
                <span>{ "Definitions link to " }</span>
                <a href={state.config.dictionary_url.clone()} target="_blank">{ "dict.leo.org" }</a>
            </footer>
        </div>
    }
}
