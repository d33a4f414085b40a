//! Steam vent sheet (`campfire.png`)
//!
//! Four 32x32 frames left to right: a street vent grate with a puff of
//! steam that grows, rises and pales as it drifts away.

use image::RgbaImage;
use imageproc::drawing::draw_filled_rect_mut;
use tracing::debug;

use super::FrameRect;
use super::canvas::{composite, fill_circle_translucent, rect_between, transparent_canvas};
use crate::constants::{
    STEAM_FRAME_SIZE, STEAM_FRAMES, STEAM_HIGHLIGHT, STEAM_RAMP, STEAM_SHEET_SIZE, VENT_BAR,
    VENT_GRATE,
};

/// Frame rectangles in animation order
pub fn frames() -> Vec<FrameRect> {
    (0..STEAM_FRAMES)
        .map(|i| FrameRect::square(i * STEAM_FRAME_SIZE, 0, STEAM_FRAME_SIZE))
        .collect()
}

/// Puff radius for frame `i`
pub fn puff_radius(i: u32) -> i32 {
    6 + i as i32
}

/// Puff centre within the frame for frame `i`
pub fn puff_center(i: u32) -> (i32, i32) {
    (16, 18 - 2 * i as i32)
}

pub fn render() -> RgbaImage {
    let (w, h) = STEAM_SHEET_SIZE;
    let mut sheet = transparent_canvas(w, h);
    for (i, frame) in frames().iter().enumerate() {
        debug!("steam vent frame {} at ({}, {})", i, frame.x, frame.y);
        composite(&mut sheet, &render_frame(i as u32), frame.x, frame.y);
    }
    sheet
}

pub fn render_frame(i: u32) -> RgbaImage {
    let mut tile = transparent_canvas(STEAM_FRAME_SIZE, STEAM_FRAME_SIZE);

    // Grate with vertical bars
    draw_filled_rect_mut(&mut tile, rect_between(8, 22, 24, 28), VENT_GRATE);
    for bar in (8..=24).step_by(3) {
        draw_filled_rect_mut(&mut tile, rect_between(bar, 22, bar, 28), VENT_BAR);
    }

    let r = puff_radius(i);
    let center = puff_center(i);
    let color = STEAM_RAMP[i as usize % STEAM_RAMP.len()];
    fill_circle_translucent(&mut tile, center, r, color);
    fill_circle_translucent(&mut tile, center, r - 3, STEAM_HIGHLIGHT);

    tile
}
