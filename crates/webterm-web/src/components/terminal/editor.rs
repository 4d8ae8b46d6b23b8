//! Full-screen `nano` editor.
//!
//! The textarea mirrors the session's editor buffer. An empty buffer shows
//! the `~` placeholder through the textarea's `placeholder` attribute, so it
//! is never part of the saved content.

use gloo_timers::callback::Timeout;
use leptos::{ev, prelude::*};
use tracing::debug;
use wasm_bindgen::JsCast;
use webterm_core::Editor as EditorState;

use crate::app::AppContext;
use crate::config::EDITOR_FOCUS_DELAY_MS;

stylance::import_crate_style!(css, "src/components/terminal/editor.module.css");

#[component]
pub fn Editor() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    let title = move || ctx.session.with(|s| s.editor().map(|e| e.title()).unwrap_or_default());
    let buffer = move || {
        ctx.session
            .with(|s| s.editor().map(|e| e.buffer().to_string()).unwrap_or_default())
    };
    let status = move || {
        ctx.session
            .with(|s| s.editor().and_then(|e| e.status().map(str::to_string)))
            .unwrap_or_default()
    };

    // Focus once the textarea is mounted and the terminal has been swapped out.
    Effect::new(move || {
        if textarea_ref.get().is_some() {
            Timeout::new(EDITOR_FOCUS_DELAY_MS, move || {
                if let Some(textarea) = textarea_ref.get_untracked() {
                    let _ = textarea.focus();
                }
            })
            .forget();
        }
    });

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let textarea = target.unchecked_into::<web_sys::HtmlTextAreaElement>();
        ctx.session.update(|s| s.editor_input(&textarea.value()));
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let ctrl = ev.ctrl_key() || ev.meta_key();
        if !ctrl {
            return;
        }
        let key = ev.key();
        let handled = ctx
            .session
            .try_update(|s| s.editor_key(ctrl, &key))
            .unwrap_or(false);
        if handled {
            ev.prevent_default();
            debug!(key = %key, "editor shortcut");
        }
    };

    view! {
        <div class=css::editor>
            <div class=css::titleBar>{title}</div>
            <textarea
                node_ref=textarea_ref
                class=css::textarea
                spellcheck="false"
                placeholder=EditorState::placeholder()
                prop:value=buffer
                on:input=handle_input
                on:keydown=handle_keydown
            ></textarea>
            <div class=css::statusBar>
                <span class=css::status>{status}</span>
                <span class=css::hints>
                    <span class=css::key>"^S"</span>" Save  "
                    <span class=css::key>"^X"</span>" Exit"
                </span>
            </div>
        </div>
    }
}
