//! Bay water sheet (`gentlewaterfall32.png`)
//!
//! Six 32x96 frames on the row starting at y=32. Each scanline picks one of
//! two blues from a sine wave whose phase advances with the frame, so the
//! bands appear to ripple.

use image::RgbaImage;
use imageproc::drawing::draw_filled_rect_mut;
use std::f64::consts::TAU;
use tracing::debug;

use super::FrameRect;
use super::canvas::{composite, fill_rect_blended, rect_between, transparent_canvas};
use crate::constants::{
    WATER_DARK, WATER_FRAME_SIZE, WATER_FRAMES, WATER_GLINT, WATER_LIGHT, WATER_ROW_Y,
    WATER_SHEET_SIZE,
};

/// Scanlines between surface glints
const GLINT_SPACING: usize = 8;

pub fn frames() -> Vec<FrameRect> {
    let (w, h) = WATER_FRAME_SIZE;
    (0..WATER_FRAMES)
        .map(|i| FrameRect::new(i * w, WATER_ROW_Y, w, h))
        .collect()
}

/// Whether scanline `y` of frame `i` uses the lighter blue
pub fn is_light_row(y: u32, i: u32) -> bool {
    let phase = (i as f64 / WATER_FRAMES as f64) * TAU;
    let s = (4.0 * (phase + y as f64 / 8.0).sin()).round() as i64;
    (y as i64 + s).rem_euclid(8) < 4
}

pub fn render() -> RgbaImage {
    let (w, h) = WATER_SHEET_SIZE;
    let mut sheet = transparent_canvas(w, h);
    for (i, frame) in frames().iter().enumerate() {
        debug!("bay water frame {} at ({}, {})", i, frame.x, frame.y);
        composite(&mut sheet, &render_frame(i as u32), frame.x, frame.y);
    }
    sheet
}

pub fn render_frame(i: u32) -> RgbaImage {
    let (w, h) = WATER_FRAME_SIZE;
    let mut tile = transparent_canvas(w, h);
    let right = w as i32 - 1;

    for y in 0..h {
        let color = if is_light_row(y, i) {
            WATER_LIGHT
        } else {
            WATER_DARK
        };
        draw_filled_rect_mut(&mut tile, rect_between(0, y as i32, right, y as i32), color);
    }

    for y in (0..h as i32).step_by(GLINT_SPACING) {
        fill_rect_blended(&mut tile, rect_between(0, y, right, y), WATER_GLINT);
    }

    tile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TRANSPARENT;

    fn row_is_glint(y: u32) -> bool {
        y as usize % GLINT_SPACING == 0
    }

    #[test]
    fn test_sheet_size() {
        assert_eq!(render().dimensions(), (192, 320));
    }

    #[test]
    fn test_frames_on_second_row() {
        let frames = frames();
        assert_eq!(frames.len(), 6);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(*frame, FrameRect::new(32 * i as u32, 32, 32, 96));
        }
    }

    #[test]
    fn test_scanlines_follow_wave() {
        for i in 0..6 {
            let tile = render_frame(i);
            for y in (0..96).filter(|y| !row_is_glint(*y)) {
                let phase = (i as f64 / 6.0) * 2.0 * std::f64::consts::PI;
                let s = (4.0 * (phase + y as f64 / 8.0).sin()).round() as i64;
                let expected = if (y as i64 + s).rem_euclid(8) < 4 {
                    WATER_LIGHT
                } else {
                    WATER_DARK
                };
                assert_eq!(*tile.get_pixel(0, y), expected, "frame {} row {}", i, y);
                assert_eq!(*tile.get_pixel(31, y), expected);
            }
        }
    }

    #[test]
    fn test_known_rows() {
        // Frame 0, y=0: sin(0) = 0, 0 % 8 < 4
        assert!(is_light_row(0, 0));
        // Frame 0, y=4: round(4 sin 0.5) = 2, 6 % 8 >= 4
        assert!(!is_light_row(4, 0));
        // Negative offsets wrap: frame 3, y=1 gives round(4 sin(pi + 0.125)) = 0
        assert!(is_light_row(1, 3));
    }

    #[test]
    fn test_phase_shift_changes_pattern() {
        let differing = (0..96)
            .filter(|&y| is_light_row(y, 0) != is_light_row(y, 3))
            .count();
        assert!(differing > 0);
        assert_ne!(render_frame(0), render_frame(3));
    }

    #[test]
    fn test_glint_rows_are_paler() {
        let tile = render_frame(2);
        for y in (0..96).step_by(8) {
            let pixel = tile.get_pixel(10, y);
            assert_eq!(pixel[3], 255);
            assert_ne!(*pixel, WATER_LIGHT);
            assert_ne!(*pixel, WATER_DARK);
            assert!(pixel[0] > WATER_DARK[0]);
        }
    }

    #[test]
    fn test_first_row_stays_transparent() {
        let sheet = render();
        assert!((0..32).all(|y| *sheet.get_pixel(50, y) == TRANSPARENT));
        assert_eq!(sheet.get_pixel(50, 33)[3], 255);
        assert!((128..320).all(|y| *sheet.get_pixel(50, y) == TRANSPARENT));
    }
}
