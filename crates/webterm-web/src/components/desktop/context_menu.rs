use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use tracing::warn;

use super::DesktopState;
use super::desktop::viewport;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NEW_FOLDER_DEFAULT_NAME;
use crate::geometry::Point;

stylance::import_crate_style!(css, "src/components/desktop/context_menu.module.css");

/// Ask for a folder name and create it. Rejected names are reported in an alert.
fn new_folder(ctx: AppContext, state: DesktopState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(name)) =
        window.prompt_with_message_and_default("Folder name:", NEW_FOLDER_DEFAULT_NAME)
    else {
        return;
    };
    if name.is_empty() {
        return;
    }

    let samples = (js_sys::Math::random(), js_sys::Math::random());
    if let Err(e) = state.create_folder(ctx.session, &name, viewport(), samples) {
        warn!(error = %e, "desktop folder rejected");
        let _ = window.alert_with_message(&format!("mkdir: {e}"));
    }
}

/// Right-click menu on the desktop background.
#[component]
pub fn ContextMenu(at: Point) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let state = use_context::<DesktopState>().expect("DesktopState must be provided");

    let on_new_folder = move |event: ev::MouseEvent| {
        event.stop_propagation();
        state.menu.set(None);
        new_folder(ctx, state);
    };

    view! {
        <div
            class=css::menu
            style=at.to_style()
            on:mousedown=|event: ev::MouseEvent| event.stop_propagation()
        >
            <div class=css::item on:click=on_new_folder>
                <Icon icon=ic::NEW_FOLDER />
                <span>"New Folder"</span>
            </div>
        </div>
    }
}
