//! Fixed values for the spritesheet generators
//!
//! Sheet sizes and frame offsets are dictated by the JSON layouts that ship
//! next to the images; changing any of them breaks the animations.

use image::Rgba;

// =============================================================================
// OUTPUT
// =============================================================================

/// Directory the sheets are written to when no override is given
pub const DEFAULT_OUT_DIR: &str = "public/assets/spritesheets";

/// Environment variable that overrides the output directory
pub const OUT_DIR_ENV: &str = "CITY_SPRITES_OUT";

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// =============================================================================
// CHECKER PREVIEW
// =============================================================================

pub const CHECKER_CELL: u32 = 8;
pub const CHECKER_LIGHT: Rgba<u8> = Rgba([235, 235, 235, 255]);
pub const CHECKER_PALE: Rgba<u8> = Rgba([245, 245, 245, 255]);

// =============================================================================
// STEAM VENT (campfire.png)
// =============================================================================

pub const STEAM_SHEET_SIZE: (u32, u32) = (128, 32);
pub const STEAM_FRAME_SIZE: u32 = 32;
pub const STEAM_FRAMES: u32 = 4;

pub const VENT_GRATE: Rgba<u8> = Rgba([70, 70, 70, 255]);
pub const VENT_BAR: Rgba<u8> = Rgba([110, 110, 110, 255]);
/// Puff colour per frame, darkest first
pub const STEAM_RAMP: [Rgba<u8>; 4] = [
    Rgba([140, 140, 140, 255]),
    Rgba([170, 170, 170, 255]),
    Rgba([200, 200, 200, 255]),
    Rgba([230, 230, 230, 255]),
];
pub const STEAM_HIGHLIGHT: Rgba<u8> = Rgba([255, 255, 255, 60]);

// =============================================================================
// WINDOW BLINK (gentlesparkle32.png)
// =============================================================================

pub const WINDOW_SHEET_SIZE: (u32, u32) = (192, 320);
pub const WINDOW_FRAME_SIZE: u32 = 32;
pub const WINDOW_FRAMES: u32 = 3;

pub const BUILDING_OUTLINE: Rgba<u8> = Rgba([40, 40, 60, 255]);
pub const WINDOW_LIT: Rgba<u8> = Rgba([255, 230, 120, 255]);
pub const WINDOW_UNLIT: Rgba<u8> = Rgba([60, 60, 70, 255]);

// =============================================================================
// BAY WATER (gentlewaterfall32.png)
// =============================================================================

pub const WATER_SHEET_SIZE: (u32, u32) = (192, 320);
pub const WATER_FRAME_SIZE: (u32, u32) = (32, 96);
pub const WATER_FRAMES: u32 = 6;
/// Row of the sheet the water frames start on
pub const WATER_ROW_Y: u32 = 32;

pub const WATER_LIGHT: Rgba<u8> = Rgba([70, 140, 200, 255]);
pub const WATER_DARK: Rgba<u8> = Rgba([60, 120, 180, 255]);
pub const WATER_GLINT: Rgba<u8> = Rgba([180, 220, 255, 70]);

// =============================================================================
// TRAFFIC LIGHT (windmill.png)
// =============================================================================

pub const TRAFFIC_SHEET_SIZE: (u32, u32) = (624, 624);
pub const TRAFFIC_FRAME_SIZE: u32 = 208;
/// Row-major cells of the 3x3 grid; the last cell is unused
pub const TRAFFIC_ORIGINS: [(u32, u32); 8] = [
    (0, 0),
    (208, 0),
    (416, 0),
    (0, 208),
    (208, 208),
    (416, 208),
    (0, 416),
    (208, 416),
];

pub const POLE_GREY: Rgba<u8> = Rgba([80, 80, 90, 255]);
pub const HOUSING_FILL: Rgba<u8> = Rgba([35, 35, 40, 255]);
pub const HOUSING_OUTLINE: Rgba<u8> = Rgba([90, 90, 100, 255]);
pub const SOCKET_DARK: Rgba<u8> = Rgba([25, 25, 28, 255]);

pub const LIGHT_GREEN: Rgba<u8> = Rgba([0, 200, 0, 255]);
pub const LIGHT_YELLOW: Rgba<u8> = Rgba([230, 200, 40, 255]);
pub const LIGHT_RED: Rgba<u8> = Rgba([220, 40, 40, 255]);
/// Blink phase of the red light
pub const LIGHT_RED_DIM: Rgba<u8> = Rgba([220, 40, 40, 180]);
