//! Folder window: lists a `/home/` folder, draggable and resizable.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use webterm_core::Session;

use super::desktop::client_point;
use super::{DesktopState, DragTarget};
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/desktop/window.module.css");

#[component]
pub fn FolderWindow(name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let state = use_context::<DesktopState>().expect("DesktopState must be provided");

    let path = Session::desktop_folder_path(&name);

    let style = move || {
        let pos = state.window_pos.get();
        let size = state.window_size.get();
        format!(
            "{} width: {}px; height: {}px;",
            pos.to_style(),
            size.width,
            size.height
        )
    };

    let on_title_down = move |event: ev::MouseEvent| {
        event.prevent_default();
        state.grab_window(client_point(&event));
    };
    let on_resize_down = move |event: ev::MouseEvent| {
        event.prevent_default();
        event.stop_propagation();
        state.drag.set(Some(DragTarget::Resize));
    };
    let on_close_down = move |event: ev::MouseEvent| event.stop_propagation();
    let on_close = move |_: ev::MouseEvent| state.close();

    let contents = move || {
        match ctx.session.with(|s| s.list_directory_contents(&path)) {
            Ok(listing) if listing.is_empty() => {
                view! { <p class=css::empty>"This folder is empty"</p> }.into_any()
            }
            Ok(listing) => {
                let dirs = listing.dirs.into_iter().map(|dir| {
                    view! {
                        <div class=css::item><Icon icon=ic::FOLDER />{dir}</div>
                    }
                });
                let files = listing.files.into_iter().map(|file| {
                    view! {
                        <div class=css::item><Icon icon=ic::FILE />{file}</div>
                    }
                });
                view! { {dirs.collect_view()} {files.collect_view()} }.into_any()
            }
            Err(e) => view! { <p class=css::error>{e.to_string()}</p> }.into_any(),
        }
    };

    view! {
        <div
            class=css::window
            style=style
            on:contextmenu=|event: ev::MouseEvent| event.stop_propagation()
        >
            <div class=css::titleBar on:mousedown=on_title_down>
                <span class=css::title>{name}</span>
                <button
                    class=css::closeButton
                    title="Close"
                    on:mousedown=on_close_down
                    on:click=on_close
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
            <div class=css::content>{contents}</div>
            <div class=css::resizeHandle on:mousedown=on_resize_down></div>
        </div>
    }
}
