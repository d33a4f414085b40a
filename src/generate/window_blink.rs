//! Window blink sheet (`gentlesparkle32.png`)
//!
//! The layout only reads three 32x32 frames from the top-left row of a
//! 192x320 sheet; everything else stays transparent.

use image::RgbaImage;
use imageproc::drawing::draw_filled_rect_mut;
use tracing::debug;

use super::FrameRect;
use super::canvas::{composite, draw_thick_outline, rect_between, transparent_canvas};
use crate::constants::{
    BUILDING_OUTLINE, WINDOW_FRAME_SIZE, WINDOW_FRAMES, WINDOW_LIT, WINDOW_SHEET_SIZE,
    WINDOW_UNLIT,
};

/// Top-left corners of the 3x3 windows, two floors of six
pub const WINDOWS: [(u32, u32); 12] = [
    (5, 7),
    (9, 7),
    (13, 7),
    (17, 7),
    (21, 7),
    (25, 7),
    (5, 15),
    (9, 15),
    (13, 15),
    (17, 15),
    (21, 15),
    (25, 15),
];

pub fn frames() -> Vec<FrameRect> {
    (0..WINDOW_FRAMES)
        .map(|i| FrameRect::square(i * WINDOW_FRAME_SIZE, 0, WINDOW_FRAME_SIZE))
        .collect()
}

/// Whether the window at (wx, wy) is lit in frame `i`
pub fn is_lit(wx: u32, wy: u32, i: u32) -> bool {
    ((wx + wy + 3 * i) / 4) % 2 == 0
}

pub fn render() -> RgbaImage {
    let (w, h) = WINDOW_SHEET_SIZE;
    let mut sheet = transparent_canvas(w, h);
    for (i, frame) in frames().iter().enumerate() {
        debug!("window blink frame {} at ({}, {})", i, frame.x, frame.y);
        composite(&mut sheet, &render_frame(i as u32), frame.x, frame.y);
    }
    sheet
}

pub fn render_frame(i: u32) -> RgbaImage {
    let mut tile = transparent_canvas(WINDOW_FRAME_SIZE, WINDOW_FRAME_SIZE);

    draw_thick_outline(&mut tile, rect_between(2, 2, 29, 29), 2, BUILDING_OUTLINE);

    for &(wx, wy) in &WINDOWS {
        let color = if is_lit(wx, wy, i) {
            WINDOW_LIT
        } else {
            WINDOW_UNLIT
        };
        let (x, y) = (wx as i32, wy as i32);
        draw_filled_rect_mut(&mut tile, rect_between(x, y, x + 2, y + 2), color);
    }

    tile
}
