//! Top-level view switch between the terminal and the desktop.

use leptos::prelude::*;
use webterm_core::models::ViewMode;

use crate::app::AppContext;
use crate::components::desktop::Desktop;
use crate::components::terminal::Terminal;

stylance::import_crate_style!(css, "src/components/shell.module.css");

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest output line in view.
    Effect::new(move || {
        ctx.session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let view_mode = Memo::new(move |_| ctx.view_mode());

    view! {
        <div class=css::screen>
            {move || match view_mode.get() {
                ViewMode::Terminal => view! { <Terminal output_ref=output_ref /> }.into_any(),
                ViewMode::Desktop => view! { <Desktop /> }.into_any(),
            }}
        </div>
    }
}
