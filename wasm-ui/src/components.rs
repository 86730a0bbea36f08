//! UI Components for the lookup page.

use web_sys::HtmlInputElement;
use wortteiler::{LOADING_TEXT, ResultView};
use yew::prelude::*;

use crate::view::to_html;

/// The word entry form.
#[derive(Properties, PartialEq)]
pub struct LookupFormProps {
    pub disabled: bool,
    pub on_submit: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(LookupForm)]
pub fn lookup_form(props: &LookupFormProps) -> Html {
    let input_ref = use_node_ref();

    let on_form_submit = {
        let input_ref = input_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                on_submit.emit(input.value());
            }
        })
    };

    let on_clear_click = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| {
            on_clear.emit(());
        })
    };

    html! {
        <form id="lookup" class="lookup-form" onsubmit={on_form_submit}>
            <input
                ref={input_ref}
                type="text"
                name="q"
                class="word-input"
                placeholder="Wort eingeben..."
                spellcheck="false"
                autocomplete="off"
                disabled={props.disabled}
            />
            <button type="submit" class="split-button" disabled={props.disabled}>
                { "Split" }
            </button>
            <button type="button" class="clear-button" onclick={on_clear_click}>
                { "Clear" }
            </button>
        </form>
    }
}

/// The `#result` area.
#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub result: ResultView,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    result_html(&props.result)
}

fn result_html(result: &ResultView) -> Html {
    let content = match result {
        ResultView::Empty => html! {},
        ResultView::Loading => html! { <span class="loading">{ LOADING_TEXT }</span> },
        ResultView::Failed(message) => html! { { message.clone() } },
        ResultView::Rendered(tree) => to_html(tree),
    };

    html! {
        <div id="result" class={classes!(
            "result",
            matches!(result, ResultView::Failed(_)).then_some("error"),
        )}>
            { content }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(html: &Html, name: &str) -> Option<String> {
        let Html::VTag(tag) = html else {
            panic!("expected an element");
        };
        tag.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.to_string())
    }

    #[test]
    fn test_result_container_id() {
        for view in [ResultView::Empty, ResultView::Loading] {
            let html = result_html(&view);
            assert_eq!(attr(&html, "id").as_deref(), Some("result"));
            assert_eq!(attr(&html, "class").as_deref(), Some("result"));
        }
    }

    #[test]
    fn test_failed_result_has_error_class() {
        let html = result_html(&ResultView::Failed("Error: error".to_string()));
        assert_eq!(attr(&html, "id").as_deref(), Some("result"));
        let class = attr(&html, "class").unwrap_or_default();
        assert!(class.split_whitespace().any(|c| c == "error"), "class was {class:?}");
    }
}
