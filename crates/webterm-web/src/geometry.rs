//! Desktop layout math.
//!
//! Kept free of DOM types so it can be tested natively.

use crate::config::{
    ICON_HEIGHT, ICON_WIDTH, WINDOW_MAX_HEIGHT, WINDOW_MAX_WIDTH, WINDOW_MIN_HEIGHT,
    WINDOW_MIN_WIDTH,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Inline CSS placing an absolutely positioned element here.
    pub fn to_style(self) -> String {
        format!("left: {}px; top: {}px;", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding box of a desktop icon.
pub const ICON_SIZE: Size = Size::new(ICON_WIDTH, ICON_HEIGHT);

/// Keep a box of `size` at `pos` fully inside `viewport`.
///
/// A box larger than the viewport is pinned to the top-left corner.
pub fn clamp_to_viewport(pos: Point, size: Size, viewport: Size) -> Point {
    let max_x = (viewport.width - size.width).max(0.0);
    let max_y = (viewport.height - size.height).max(0.0);
    Point::new(pos.x.clamp(0.0, max_x), pos.y.clamp(0.0, max_y))
}

/// Initial icon position from two samples in `[0, 1)`.
pub fn random_position(viewport: Size, size: Size, rx: f64, ry: f64) -> Point {
    let x = (viewport.width - size.width).max(0.0) * rx.clamp(0.0, 1.0);
    let y = (viewport.height - size.height).max(0.0) * ry.clamp(0.0, 1.0);
    Point::new(x, y)
}

/// Where an icon lands when released: centred on the pointer, inside the viewport.
pub fn drop_position(pointer: Point, size: Size, viewport: Size) -> Point {
    let centred = Point::new(pointer.x - size.width / 2.0, pointer.y - size.height / 2.0);
    clamp_to_viewport(centred, size, viewport)
}

/// Window position while dragging by the title bar.
///
/// `grab` is the pointer offset from the window origin at mouse-down.
pub fn drag_position(pointer: Point, grab: Point, size: Size, viewport: Size) -> Point {
    let pos = Point::new(pointer.x - grab.x, pointer.y - grab.y);
    clamp_to_viewport(pos, size, viewport)
}

/// Window size while dragging the resize handle.
pub fn resize_window(origin: Point, pointer: Point) -> Size {
    Size::new(
        (pointer.x - origin.x).clamp(WINDOW_MIN_WIDTH, WINDOW_MAX_WIDTH),
        (pointer.y - origin.y).clamp(WINDOW_MIN_HEIGHT, WINDOW_MAX_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    #[test]
    fn test_clamp_inside_is_unchanged() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(clamp_to_viewport(p, ICON_SIZE, VIEWPORT), p);
    }

    #[test]
    fn test_clamp_edges() {
        let p = clamp_to_viewport(Point::new(-50.0, 900.0), ICON_SIZE, VIEWPORT);
        assert_eq!(p, Point::new(0.0, 500.0));

        let p = clamp_to_viewport(Point::new(790.0, -1.0), ICON_SIZE, VIEWPORT);
        assert_eq!(p, Point::new(700.0, 0.0));
    }

    #[test]
    fn test_clamp_oversized_box() {
        let p = clamp_to_viewport(Point::new(30.0, 30.0), Size::new(900.0, 700.0), VIEWPORT);
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_random_position_bounds() {
        assert_eq!(random_position(VIEWPORT, ICON_SIZE, 0.0, 0.0), Point::new(0.0, 0.0));
        let p = random_position(VIEWPORT, ICON_SIZE, 0.5, 0.5);
        assert_eq!(p, Point::new(350.0, 250.0));
        let p = random_position(Size::new(50.0, 50.0), ICON_SIZE, 0.9, 0.9);
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_drop_position_centres_on_pointer() {
        let p = drop_position(Point::new(400.0, 300.0), ICON_SIZE, VIEWPORT);
        assert_eq!(p, Point::new(350.0, 250.0));

        let p = drop_position(Point::new(795.0, 5.0), ICON_SIZE, VIEWPORT);
        assert_eq!(p, Point::new(700.0, 0.0));
    }

    #[test]
    fn test_drag_position_keeps_grab_offset() {
        let size = Size::new(300.0, 200.0);
        let p = drag_position(Point::new(210.0, 120.0), Point::new(10.0, 20.0), size, VIEWPORT);
        assert_eq!(p, Point::new(200.0, 100.0));

        let p = drag_position(Point::new(1000.0, 1000.0), Point::new(10.0, 20.0), size, VIEWPORT);
        assert_eq!(p, Point::new(500.0, 400.0));
    }

    #[test]
    fn test_resize_limits() {
        let origin = Point::new(100.0, 100.0);
        assert_eq!(resize_window(origin, Point::new(150.0, 120.0)), Size::new(200.0, 150.0));
        assert_eq!(resize_window(origin, Point::new(400.0, 300.0)), Size::new(300.0, 200.0));
        assert_eq!(resize_window(origin, Point::new(900.0, 900.0)), Size::new(500.0, 400.0));
    }

    #[test]
    fn test_point_style() {
        assert_eq!(Point::new(1.5, 2.0).to_style(), "left: 1.5px; top: 2px;");
    }
}
