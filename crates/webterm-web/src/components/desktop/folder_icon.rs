use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::{DesktopState, DragTarget};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/desktop/folder_icon.module.css");

/// A draggable folder on the desktop. Double-click opens it.
#[component]
pub fn FolderIcon(index: usize, name: String) -> impl IntoView {
    let state = use_context::<DesktopState>().expect("DesktopState must be provided");

    let style = move || {
        state
            .icons
            .with(|icons| icons.get(index).map(|icon| icon.pos.to_style()))
            .unwrap_or_default()
    };
    let class = move || {
        if state.drag.get() == Some(DragTarget::Icon(index)) {
            format!("{} {}", css::folder, css::dragging)
        } else {
            css::folder.to_string()
        }
    };

    let on_mouse_down = move |event: ev::MouseEvent| {
        if event.button() == 0 {
            event.prevent_default();
            state.drag.set(Some(DragTarget::Icon(index)));
        }
    };
    let open_name = name.clone();
    let on_dblclick = move |_: ev::MouseEvent| state.open(open_name.clone());

    view! {
        <div class=class style=style on:mousedown=on_mouse_down on:dblclick=on_dblclick>
            <span class=css::glyph><Icon icon=ic::FOLDER /></span>
            <span class=css::label>{name}</span>
        </div>
    }
}
