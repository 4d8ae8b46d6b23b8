//! Desktop root component.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use webterm_core::models::ViewMode;

use super::{ContextMenu, DesktopState, FolderIcon, FolderWindow};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH};
use crate::geometry::{Point, Size};

stylance::import_crate_style!(css, "src/components/desktop/desktop.module.css");

/// Current browser window size.
pub(super) fn viewport() -> Size {
    web_sys::window()
        .and_then(|w| {
            let width = w.inner_width().ok()?.as_f64()?;
            let height = w.inner_height().ok()?.as_f64()?;
            Some(Size::new(width, height))
        })
        .unwrap_or(Size::new(FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT))
}

pub(super) fn client_point(event: &ev::MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

#[component]
pub fn Desktop() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let names = ctx.session.with_untracked(|s| s.list_home_directory());
    let state = DesktopState::new(names, viewport(), js_sys::Math::random);
    provide_context(state);

    let on_mouse_move = move |event: ev::MouseEvent| {
        state.pointer_moved(client_point(&event), viewport());
    };
    let on_mouse_up = move |_: ev::MouseEvent| state.release();
    let on_mouse_leave = move |_: ev::MouseEvent| state.release();
    let on_context_menu = move |event: ev::MouseEvent| {
        event.prevent_default();
        state.menu.set(Some(client_point(&event)));
    };
    let on_click = move |_: ev::MouseEvent| state.menu.set(None);
    let back_to_terminal = move |_: ev::MouseEvent| ctx.set_view_mode(ViewMode::Terminal);

    view! {
        <div
            class=css::desktop
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_up
            on:mouseleave=on_mouse_leave
            on:contextmenu=on_context_menu
            on:click=on_click
        >
            <For
                each=move || state.icons.get().into_iter().enumerate()
                key=|(_, icon)| icon.name.clone()
                children=|(index, icon)| view! { <FolderIcon index=index name=icon.name /> }
            />

            {move || state.open_folder.get().map(|name| view! { <FolderWindow name=name /> })}

            {move || state.menu.get().map(|at| view! { <ContextMenu at=at /> })}

            <button
                class=css::terminalButton
                title="Terminal"
                on:click=back_to_terminal
            >
                <Icon icon=ic::TERMINAL />
                <span>"Terminal"</span>
            </button>
        </div>
    }
}
