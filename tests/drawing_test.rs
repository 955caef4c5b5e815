//! Tests for drawing the sample scene

use skyline::application::drawing::{scaled_skyline_lines, skyline_lines};
use skyline::application::services::SAMPLE_BUILDINGS;
use skyline::application::{Drawer, Line, SkylineDrawer};
use skyline::config::RenderConfig;
use skyline::domain::Skyline;

fn sample_outline() -> Vec<skyline::Building> {
    SAMPLE_BUILDINGS.into_iter().collect::<Skyline>().flatten()
}

#[test]
fn given_sample_outline_when_drawing_then_walls_connectors_and_tops() {
    let lines = skyline_lines(&sample_outline());

    assert_eq!(
        lines,
        vec![
            Line::new(1.0, 0.0, 1.0, 1.0),
            Line::new(1.0, 1.0, 2.0, 1.0),
            Line::new(2.0, 1.0, 2.0, 2.0),
            Line::new(2.0, 2.0, 3.0, 2.0),
            Line::new(3.0, 2.0, 3.0, 1.0),
            Line::new(3.0, 1.0, 3.5, 1.0),
            Line::new(3.5, 1.0, 3.5, 1.5),
            Line::new(3.5, 1.5, 5.0, 1.5),
            Line::new(5.0, 1.5, 5.0, 3.0),
            Line::new(5.0, 3.0, 7.0, 3.0),
            Line::new(7.0, 3.0, 7.0, 1.5),
            Line::new(7.0, 1.5, 8.0, 1.5),
            Line::new(9.0, 0.0, 9.0, 0.5),
            Line::new(8.0, 1.5, 8.0, 0.5),
            Line::new(8.0, 0.5, 9.0, 0.5),
        ]
    );
}

#[test]
fn given_default_render_config_when_scaling_sample_then_ground_at_140() {
    let lines = scaled_skyline_lines(&sample_outline(), &RenderConfig::default());

    assert_eq!(lines.first(), Some(&Line::new(40.0, 140.0, 40.0, 120.0)));
    assert_eq!(lines.last(), Some(&Line::new(180.0, 130.0, 200.0, 130.0)));
}

/// Counts calls instead of storing them.
#[derive(Default)]
struct CountingDrawer {
    calls: usize,
}

impl Drawer for CountingDrawer {
    fn draw_line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64) {
        self.calls += 1;
    }
}

#[test]
fn given_custom_drawer_when_drawing_skyline_then_receives_every_line() {
    let skyline: Skyline = SAMPLE_BUILDINGS.into_iter().collect();
    let mut drawer = SkylineDrawer::new(CountingDrawer::default());

    drawer.draw_skyline(&skyline);

    assert_eq!(drawer.into_inner().calls, 15);
}

#[test]
fn given_empty_skyline_when_drawing_then_no_calls() {
    let mut drawer = SkylineDrawer::new(CountingDrawer::default());

    drawer.draw_skyline(&Skyline::new());

    assert_eq!(drawer.into_inner().calls, 0);
}
