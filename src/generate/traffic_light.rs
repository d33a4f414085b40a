//! Traffic light sheet (`windmill.png`)
//!
//! Eight 208x208 frames in a 3x3 grid, last cell empty. The fixture is the
//! same on every frame; only the active light and its glow change.
//!
//! Cycle: green → yellow → red → red (dimmed blink) → red → yellow → green → off

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use tracing::debug;

use super::FrameRect;
use super::canvas::{
    composite, fill_circle_translucent, fill_rounded_rect, rect_between, transparent_canvas,
};
use crate::constants::{
    HOUSING_FILL, HOUSING_OUTLINE, LIGHT_GREEN, LIGHT_RED, LIGHT_RED_DIM, LIGHT_YELLOW,
    POLE_GREY, SOCKET_DARK, TRAFFIC_FRAME_SIZE, TRAFFIC_ORIGINS, TRAFFIC_SHEET_SIZE,
};

pub const SOCKET_RADIUS: i32 = 18;
/// Lit disc sits 2px inside the socket rim
pub const DISC_RADIUS: i32 = 16;
pub const GLOW_RADII: [i32; 5] = [22, 28, 34, 40, 46];

const HOUSING_RADIUS: u32 = 12;
const HOUSING_BORDER: u32 = 3;

/// One of the three lamp positions, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Socket {
    Top,
    Middle,
    Bottom,
}

impl Socket {
    pub const ALL: [Socket; 3] = [Socket::Top, Socket::Middle, Socket::Bottom];

    pub fn center(self) -> (i32, i32) {
        match self {
            Socket::Top => (104, 80),
            Socket::Middle => (104, 112),
            Socket::Bottom => (104, 144),
        }
    }
}

/// Light state shown by a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Green,
    Yellow,
    Red,
    RedDimmed,
    Off,
}

/// Stage per frame index
pub const CYCLE: [Stage; 8] = [
    Stage::Green,
    Stage::Yellow,
    Stage::Red,
    Stage::RedDimmed,
    Stage::Red,
    Stage::Yellow,
    Stage::Green,
    Stage::Off,
];

impl Stage {
    /// Socket lit by this stage, `None` when the light is off
    pub fn socket(self) -> Option<Socket> {
        match self {
            Stage::Red | Stage::RedDimmed => Some(Socket::Top),
            Stage::Yellow => Some(Socket::Middle),
            Stage::Green => Some(Socket::Bottom),
            Stage::Off => None,
        }
    }

    pub fn color(self) -> Option<Rgba<u8>> {
        match self {
            Stage::Green => Some(LIGHT_GREEN),
            Stage::Yellow => Some(LIGHT_YELLOW),
            Stage::Red => Some(LIGHT_RED),
            Stage::RedDimmed => Some(LIGHT_RED_DIM),
            Stage::Off => None,
        }
    }
}

/// Alpha of the glow ring at `radius` for a light of opacity `light_alpha`
pub fn glow_alpha(radius: i32, light_alpha: u8) -> u8 {
    let base = (120 - (radius - 22) * 6).max(0);
    (base * light_alpha as i32 / 255) as u8
}

pub fn frames() -> Vec<FrameRect> {
    TRAFFIC_ORIGINS
        .iter()
        .map(|&(x, y)| FrameRect::square(x, y, TRAFFIC_FRAME_SIZE))
        .collect()
}

pub fn render() -> RgbaImage {
    let (w, h) = TRAFFIC_SHEET_SIZE;
    let mut sheet = transparent_canvas(w, h);
    for (i, frame) in frames().iter().enumerate() {
        debug!(
            "traffic light frame {} ({:?}) at ({}, {})",
            i, CYCLE[i], frame.x, frame.y
        );
        composite(&mut sheet, &render_frame(i as u32), frame.x, frame.y);
    }
    sheet
}

pub fn render_frame(i: u32) -> RgbaImage {
    let size = TRAFFIC_FRAME_SIZE;
    let mut tile = transparent_canvas(size, size);

    draw_filled_rect_mut(&mut tile, rect_between(96, 40, 112, size as i32 - 10), POLE_GREY);
    fill_rounded_rect(
        &mut tile,
        rect_between(72, 60, 136, 180),
        HOUSING_RADIUS,
        HOUSING_FILL,
        HOUSING_OUTLINE,
        HOUSING_BORDER,
    );
    for socket in Socket::ALL {
        draw_filled_circle_mut(&mut tile, socket.center(), SOCKET_RADIUS, SOCKET_DARK);
    }

    let stage = CYCLE[i as usize % CYCLE.len()];
    if let (Some(socket), Some(color)) = (stage.socket(), stage.color()) {
        draw_light(&mut tile, socket.center(), color);
    }

    // Mounting arm goes over everything, lit or not
    draw_filled_rect_mut(&mut tile, rect_between(136, 96, size as i32 - 20, 106), POLE_GREY);

    tile
}

/// Glow rings under a disc of `color` centred on a socket
fn draw_light(tile: &mut RgbaImage, center: (i32, i32), color: Rgba<u8>) {
    let (w, h) = tile.dimensions();
    let mut glow = transparent_canvas(w, h);
    // Outermost first so each band keeps its own ring's alpha
    for &radius in GLOW_RADII.iter().rev() {
        let alpha = glow_alpha(radius, color[3]);
        draw_filled_circle_mut(
            &mut glow,
            center,
            radius,
            Rgba([color[0], color[1], color[2], alpha]),
        );
    }
    composite(tile, &glow, 0, 0);

    fill_circle_translucent(tile, center, DISC_RADIUS, color);
}
