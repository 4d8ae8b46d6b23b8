//! Terminal view component.
//!
//! Output log with the prompt input, or the `nano` editor while a file is open.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Editor, Input, Output};

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

/// Focus the terminal input element.
fn focus_input() {
    use wasm_bindgen::JsCast;
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(input) = document.query_selector("input").ok().flatten()
        && let Ok(element) = input.dyn_into::<web_sys::HtmlElement>()
    {
        let _ = element.focus();
    }
}

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let prompt = Signal::derive(move || ctx.prompt());
    let editing = Memo::new(move |_| ctx.is_editing());

    let on_submit = Callback::new(move |input: String| ctx.submit(&input));
    let on_history_nav = Callback::new(move |direction: i32| ctx.navigate_history(direction));

    let handle_click = move |_| {
        if !editing.get_untracked() {
            focus_input();
        }
    };

    view! {
        <Show
            when=move || !editing.get()
            fallback=|| view! { <Editor /> }
        >
            <div class=css::container on:click=handle_click>
                <div node_ref=output_ref class=css::output>
                    <For
                        each=move || ctx.session.with(|s| s.log().to_vec())
                        key=|line| line.id
                        children=|line| view! { <Output line=line /> }
                    />
                </div>
                <div class=css::inputArea>
                    <Input prompt=prompt on_submit=on_submit on_history_nav=on_history_nav />
                </div>
            </div>
        </Show>
    }
}
