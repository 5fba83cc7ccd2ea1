//! Window display for resolved figures.
//!
//! World coordinates stay `f64` in the library; everything here maps through
//! the figure's [`Frame`] into screen pixels and draws with macroquad
//! primitives. The palette follows the source figure: blue scatter, red
//! reference circle and spokes, green hull and boundary highlights.

use encircle::figure::{Figure, Frame};
use macroquad::prelude::*;

/// Half-length of the cross drawn for a scatter point, in pixels.
const MARKER_HALF: f32 = 5.0;
/// Dash length for hull edges and spokes, in pixels.
const DASH: f32 = 8.0;
/// Radius of the highlight ring around a boundary point, in pixels.
const HIGHLIGHT: f32 = 7.0;

fn to_screen(frame: &Frame, p: encircle::Vec2<f64>, w: f64, h: f64) -> Vec2 {
    let q = frame.map(p, w, h);
    Vec2::new(q.x as f32, q.y as f32)
}

fn draw_cross(at: Vec2, color: Color) {
    draw_line(at.x - MARKER_HALF, at.y, at.x + MARKER_HALF, at.y, 2.0, color);
    draw_line(at.x, at.y - MARKER_HALF, at.x, at.y + MARKER_HALF, 2.0, color);
}

fn draw_dashed_line(a: Vec2, b: Vec2, thickness: f32, color: Color) {
    let delta = b - a;
    let len = delta.length();
    if len <= f32::EPSILON {
        return;
    }
    let dir = delta / len;
    let mut t = 0.0;
    while t < len {
        let end = (t + DASH).min(len);
        let p = a + dir * t;
        let q = a + dir * end;
        draw_line(p.x, p.y, q.x, q.y, thickness, color);
        t += 2.0 * DASH;
    }
}

/// Draw one frame of the figure at the current screen size.
pub fn draw_figure(fig: &Figure) {
    let (w, h) = (screen_width() as f64, screen_height() as f64);
    let frame = &fig.frame;
    let scale = frame.scale(w, h) as f32;
    let at = |p| to_screen(frame, p, w, h);

    if let Some(circle) = fig.circle {
        let c = at(circle.center);
        draw_circle_lines(c.x, c.y, (circle.radius.max(0.0) as f32) * scale, 1.5, RED);
        draw_circle(c.x, c.y, 3.0, RED);
    }
    // Hull ring, dashed with a marker at each vertex.
    for k in 0..fig.hull.len() {
        let a = at(fig.hull[k]);
        let b = at(fig.hull[(k + 1) % fig.hull.len()]);
        draw_dashed_line(a, b, 1.5, GREEN);
        draw_cross(a, GREEN);
    }
    for spoke in &fig.spokes {
        draw_dashed_line(at(spoke[0]), at(spoke[1]), 2.0, RED);
    }
    for p in &fig.scatter {
        draw_cross(at(*p), BLUE);
    }
    for &i in &fig.on_circle {
        let p = at(fig.scatter[i]);
        draw_circle_lines(p.x, p.y, HIGHLIGHT, 2.0, GREEN);
    }
}

async fn show(fig: Figure) {
    loop {
        clear_background(BLACK);
        draw_figure(&fig);
        next_frame().await
    }
}

/// Open a window and redraw the figure until the window closes.
///
/// This is the blocking display call; it does not return while the window
/// is open.
pub fn run_window(title: &str, fig: Figure) {
    let conf = Conf {
        window_title: title.to_string(),
        window_width: 800,
        window_height: 600,
        ..Default::default()
    };
    macroquad::Window::from_config(conf, show(fig));
}
