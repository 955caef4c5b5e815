//! Turning a flattened skyline into line draw calls.
//!
//! [`SkylineDrawer`] holds the whole drawing algorithm and knows nothing about
//! the surface it draws on; that is the [`Drawer`]'s business.

use std::fmt;

use tracing::trace;

use crate::config::RenderConfig;
use crate::domain::{Building, Skyline};

/// Surface that can draw a straight line.
pub trait Drawer {
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
}

/// One straight line from `(x1, y1)` to `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "{:.p$},{:.p$} -> {:.p$},{:.p$}",
                self.x1,
                self.y1,
                self.x2,
                self.y2,
                p = p
            ),
            None => write!(f, "{},{} -> {},{}", self.x1, self.y1, self.x2, self.y2),
        }
    }
}

/// Drawer that records every line it is asked to draw.
#[derive(Debug, Default, Clone)]
pub struct LineRecorder {
    lines: Vec<Line>,
}

impl LineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }
}

impl Drawer for LineRecorder {
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.lines.push(Line::new(x1, y1, x2, y2));
    }
}

/// Drawer decorator mapping skyline coordinates to screen coordinates.
///
/// `x` is zoomed and shifted right, `y` is zoomed, flipped and shifted down,
/// so ground level ends up at `y_offset`.
pub struct ScaledDrawer<D> {
    inner: D,
    render: RenderConfig,
}

impl<D: Drawer> ScaledDrawer<D> {
    pub fn new(inner: D, render: RenderConfig) -> Self {
        Self { inner, render }
    }

    pub fn into_inner(self) -> D {
        self.inner
    }

    fn x(&self, x: f64) -> f64 {
        x * self.render.zoom + self.render.x_offset
    }

    fn y(&self, y: f64) -> f64 {
        self.render.y_offset - y * self.render.zoom
    }
}

impl<D: Drawer> Drawer for ScaledDrawer<D> {
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (x1, y1, x2, y2) = (self.x(x1), self.y(y1), self.x(x2), self.y(y2));
        self.inner.draw_line(x1, y1, x2, y2);
    }
}

/// Draws a flattened skyline as its outline.
///
/// Per building, in this order: the left wall from the ground (first
/// building only), the right wall (last building only), a connector to the
/// predecessor's top if the two touch, and finally the top edge.
pub struct SkylineDrawer<D> {
    drawer: D,
}

impl<D: Drawer> SkylineDrawer<D> {
    pub fn new(drawer: D) -> Self {
        Self { drawer }
    }

    pub fn into_inner(self) -> D {
        self.drawer
    }

    pub fn draw_skyline(&mut self, skyline: &Skyline) {
        self.draw_buildings(&skyline.flatten());
    }

    pub fn draw_buildings(&mut self, buildings: &[Building]) {
        let Some(last) = buildings.len().checked_sub(1) else {
            return;
        };
        trace!(count = buildings.len(), "drawing skyline");

        for (i, building) in buildings.iter().enumerate() {
            if i == 0 {
                self.draw_left_side(building);
            }
            if i == last {
                self.draw_right_side(building);
            }
            if let Some(previous) = i.checked_sub(1).map(|p| &buildings[p]) {
                if previous.is_left_adjacent_of(building) {
                    self.draw_connection(previous, building);
                }
            }
            self.draw_top_side(building);
        }
    }

    fn draw_left_side(&mut self, b: &Building) {
        self.drawer.draw_line(b.start, 0.0, b.start, b.height);
    }

    fn draw_right_side(&mut self, b: &Building) {
        self.drawer.draw_line(b.end, 0.0, b.end, b.height);
    }

    fn draw_top_side(&mut self, b: &Building) {
        self.drawer.draw_line(b.start, b.height, b.end, b.height);
    }

    fn draw_connection(&mut self, previous: &Building, b: &Building) {
        self.drawer
            .draw_line(previous.end, previous.height, b.start, b.height);
    }
}

/// Draw `buildings` into a fresh [`LineRecorder`] and return the lines.
pub fn skyline_lines(buildings: &[Building]) -> Vec<Line> {
    let mut drawer = SkylineDrawer::new(LineRecorder::new());
    drawer.draw_buildings(buildings);
    drawer.into_inner().into_lines()
}

/// Like [`skyline_lines`], in screen coordinates.
pub fn scaled_skyline_lines(buildings: &[Building], render: &RenderConfig) -> Vec<Line> {
    let mut drawer = SkylineDrawer::new(ScaledDrawer::new(LineRecorder::new(), render.clone()));
    drawer.draw_buildings(buildings);
    drawer.into_inner().into_inner().into_lines()
}
