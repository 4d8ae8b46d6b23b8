//! Reactive desktop state shared by the desktop components.

use leptos::prelude::*;
use tracing::debug;
use webterm_core::{FsError, Session};

use crate::config::{
    WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_X, WINDOW_DEFAULT_Y,
};
use crate::geometry::{self, ICON_SIZE, Point, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct DesktopIcon {
    pub name: String,
    pub pos: Point,
}

/// What the pointer is currently moving.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragTarget {
    /// Icon at this index in [`DesktopState::icons`]
    Icon(usize),
    /// Folder window, grabbed at this offset from its origin
    Window { grab: Point },
    /// Folder window resize handle
    Resize,
}

/// Desktop state. `Copy` because all fields are signals.
#[derive(Clone, Copy)]
pub struct DesktopState {
    pub icons: RwSignal<Vec<DesktopIcon>>,
    pub drag: RwSignal<Option<DragTarget>>,
    /// Name of the folder shown in the window, if any.
    pub open_folder: RwSignal<Option<String>>,
    pub window_pos: RwSignal<Point>,
    pub window_size: RwSignal<Size>,
    /// Position of the context menu while it is shown.
    pub menu: RwSignal<Option<Point>>,
}

impl DesktopState {
    /// Lay out one icon per folder, each at a random position.
    pub fn new(names: Vec<String>, viewport: Size, mut sample: impl FnMut() -> f64) -> Self {
        let icons = names
            .into_iter()
            .map(|name| DesktopIcon {
                name,
                pos: geometry::random_position(viewport, ICON_SIZE, sample(), sample()),
            })
            .collect();

        Self {
            icons: RwSignal::new(icons),
            drag: RwSignal::new(None),
            open_folder: RwSignal::new(None),
            window_pos: RwSignal::new(Point::new(WINDOW_DEFAULT_X, WINDOW_DEFAULT_Y)),
            window_size: RwSignal::new(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT)),
            menu: RwSignal::new(None),
        }
    }

    pub fn add_icon(&self, name: String, viewport: Size, rx: f64, ry: f64) {
        let pos = geometry::random_position(viewport, ICON_SIZE, rx, ry);
        self.icons.update(|icons| icons.push(DesktopIcon { name, pos }));
    }

    /// Create a folder under `/home/` and add its icon.
    ///
    /// No icon is added when the session rejects the name.
    pub fn create_folder(
        &self,
        session: RwSignal<Session>,
        name: &str,
        viewport: Size,
        (rx, ry): (f64, f64),
    ) -> Result<(), FsError> {
        match session.try_update(|s| s.create_desktop_folder(name)) {
            Some(Ok(())) => {
                self.add_icon(name.to_string(), viewport, rx, ry);
                Ok(())
            }
            Some(Err(e)) => Err(e),
            None => Ok(()),
        }
    }

    /// Show a folder in the window, replacing whatever it showed.
    pub fn open(&self, name: String) {
        debug!(folder = %name, "folder window opened");
        self.window_pos.set(Point::new(WINDOW_DEFAULT_X, WINDOW_DEFAULT_Y));
        self.window_size.set(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));
        self.open_folder.set(Some(name));
    }

    pub fn close(&self) {
        self.open_folder.set(None);
        self.release();
    }

    /// Start moving the window with the pointer at `pointer`.
    pub fn grab_window(&self, pointer: Point) {
        let origin = self.window_pos.get_untracked();
        let grab = Point::new(pointer.x - origin.x, pointer.y - origin.y);
        self.drag.set(Some(DragTarget::Window { grab }));
    }

    /// Apply a pointer move to whatever is being dragged.
    pub fn pointer_moved(&self, pointer: Point, viewport: Size) {
        match self.drag.get_untracked() {
            Some(DragTarget::Icon(index)) => self.icons.update(|icons| {
                if let Some(icon) = icons.get_mut(index) {
                    icon.pos = geometry::drop_position(pointer, ICON_SIZE, viewport);
                }
            }),
            Some(DragTarget::Window { grab }) => {
                let size = self.window_size.get_untracked();
                self.window_pos
                    .set(geometry::drag_position(pointer, grab, size, viewport));
            }
            Some(DragTarget::Resize) => {
                let origin = self.window_pos.get_untracked();
                self.window_size
                    .set(geometry::resize_window(origin, pointer));
            }
            None => {}
        }
    }

    pub fn release(&self) {
        if self.drag.get_untracked().is_some() {
            self.drag.set(None);
        }
    }
}
