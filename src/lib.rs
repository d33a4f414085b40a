//! City Sprites - placeholder spritesheets for the city animation layouts
//!
//! Paints the steam vent, window blink, bay water and traffic light sheets
//! that replace the old campfire, sparkle, waterfall and windmill art.

pub mod constants;
pub mod generate;

pub use constants::*;
pub use generate::{FrameRect, GenerateOptions, Sheet, layout_report, run, write_sheet};
