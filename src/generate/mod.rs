//! Spritesheet generation
//!
//! Four placeholder sheets, each painted to match an existing JSON frame
//! layout:
//! - Steam vent (`campfire.png`)
//! - Window blink (`gentlesparkle32.png`)
//! - Bay water (`gentlewaterfall32.png`)
//! - Traffic light (`windmill.png`)

pub mod bay_water;
pub mod canvas;
pub mod steam_vent;
pub mod traffic_light;
pub mod window_blink;

use anyhow::{Context, Result};
use image::RgbaImage;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{
    CHECKER_CELL, DEFAULT_OUT_DIR, STEAM_SHEET_SIZE, TRAFFIC_SHEET_SIZE, WATER_SHEET_SIZE,
    WINDOW_SHEET_SIZE,
};

/// Pixel rectangle of one frame inside a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FrameRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn square(x: u32, y: u32, size: u32) -> Self {
        Self::new(x, y, size, size)
    }
}

impl fmt::Display for FrameRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} @ ({}, {})", self.width, self.height, self.x, self.y)
    }
}

/// The generated sheets, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sheet {
    SteamVent,
    WindowBlink,
    BayWater,
    TrafficLight,
}

impl Sheet {
    pub const ALL: [Sheet; 4] = [
        Sheet::SteamVent,
        Sheet::WindowBlink,
        Sheet::BayWater,
        Sheet::TrafficLight,
    ];

    /// Short name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Sheet::SteamVent => "steam",
            Sheet::WindowBlink => "windows",
            Sheet::BayWater => "water",
            Sheet::TrafficLight => "traffic",
        }
    }

    /// File name the layouts reference; kept from the sheets these replace
    pub fn file_name(self) -> &'static str {
        match self {
            Sheet::SteamVent => "campfire.png",
            Sheet::WindowBlink => "gentlesparkle32.png",
            Sheet::BayWater => "gentlewaterfall32.png",
            Sheet::TrafficLight => "windmill.png",
        }
    }

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Sheet::SteamVent => STEAM_SHEET_SIZE,
            Sheet::WindowBlink => WINDOW_SHEET_SIZE,
            Sheet::BayWater => WATER_SHEET_SIZE,
            Sheet::TrafficLight => TRAFFIC_SHEET_SIZE,
        }
    }

    pub fn frames(self) -> Vec<FrameRect> {
        match self {
            Sheet::SteamVent => steam_vent::frames(),
            Sheet::WindowBlink => window_blink::frames(),
            Sheet::BayWater => bay_water::frames(),
            Sheet::TrafficLight => traffic_light::frames(),
        }
    }

    pub fn render(self) -> RgbaImage {
        match self {
            Sheet::SteamVent => steam_vent::render(),
            Sheet::WindowBlink => window_blink::render(),
            Sheet::BayWater => bay_water::render(),
            Sheet::TrafficLight => traffic_light::render(),
        }
    }

    /// Resolve a command-line name or the file stem of the sheet
    pub fn from_name(name: &str) -> Option<Sheet> {
        let name = name.trim().to_ascii_lowercase();
        Sheet::ALL.into_iter().find(|sheet| {
            sheet.name() == name || sheet.file_name().trim_end_matches(".png") == name
        })
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a generation run writes and where
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub out_dir: PathBuf,
    pub sheets: Vec<Sheet>,
    /// Paint the checkerboard under every sheet (preview only)
    pub checker: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            sheets: Sheet::ALL.to_vec(),
            checker: false,
        }
    }
}

/// Render and write every requested sheet, returning the written paths.
///
/// Stops at the first failure; sheets written before it stay on disk.
pub fn run(options: &GenerateOptions) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&options.out_dir).with_context(|| {
        format!(
            "could not create output directory {}",
            options.out_dir.display()
        )
    })?;

    let mut written = Vec::with_capacity(options.sheets.len());
    for &sheet in &options.sheets {
        let mut image = sheet.render();
        if options.checker {
            image = with_checker(&image);
        }

        let path = options.out_dir.join(sheet.file_name());
        write_sheet(&path, &image)?;
        info!(
            "Created: {} ({}x{}, {} frames)",
            path.display(),
            image.width(),
            image.height(),
            sheet.frames().len()
        );
        written.push(path);
    }

    Ok(written)
}

/// Replace the file at `path` with `image` encoded as PNG
pub fn write_sheet(path: &Path, image: &RgbaImage) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("could not remove {}", path.display()));
        }
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("could not write {}", path.display()))
}

fn with_checker(image: &RgbaImage) -> RgbaImage {
    let mut preview = canvas::transparent_canvas(image.width(), image.height());
    canvas::checker_fill(&mut preview, CHECKER_CELL);
    canvas::composite(&mut preview, image, 0, 0);
    preview
}

/// Human-readable layout table, one block per sheet
pub fn layout_report() -> String {
    let mut out = String::new();
    for sheet in Sheet::ALL {
        let (w, h) = sheet.dimensions();
        let frames = sheet.frames();
        out.push_str(&format!(
            "{} ({}): {}x{}, {} frames\n",
            sheet.name(),
            sheet.file_name(),
            w,
            h,
            frames.len()
        ));
        for (i, frame) in frames.iter().enumerate() {
            out.push_str(&format!("  [{}] {}\n", i, frame));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sheet_dimensions_contract() {
        let expected = [(128, 32), (192, 320), (192, 320), (624, 624)];
        for (sheet, dims) in Sheet::ALL.iter().zip(expected) {
            assert_eq!(sheet.dimensions(), dims);
            assert_eq!(sheet.render().dimensions(), dims, "{}", sheet);
        }
    }

    #[test]
    fn test_frames_fit_inside_sheets() {
        for sheet in Sheet::ALL {
            let (w, h) = sheet.dimensions();
            for frame in sheet.frames() {
                assert!(frame.x + frame.width <= w, "{} {}", sheet, frame);
                assert!(frame.y + frame.height <= h, "{} {}", sheet, frame);
            }
        }
    }

    #[test]
    fn test_from_name_accepts_short_and_file_names() {
        assert_eq!(Sheet::from_name("steam"), Some(Sheet::SteamVent));
        assert_eq!(Sheet::from_name("Windows"), Some(Sheet::WindowBlink));
        assert_eq!(Sheet::from_name("gentlewaterfall32"), Some(Sheet::BayWater));
        assert_eq!(Sheet::from_name("windmill"), Some(Sheet::TrafficLight));
        assert_eq!(Sheet::from_name("lighthouse"), None);
    }

    #[test]
    fn test_run_creates_directory_and_four_files() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("public/assets/spritesheets");
        let options = GenerateOptions {
            out_dir: out_dir.clone(),
            ..Default::default()
        };

        let written = run(&options).unwrap();
        assert_eq!(written.len(), 4);

        let mut names: Vec<String> = fs::read_dir(&out_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "campfire.png",
                "gentlesparkle32.png",
                "gentlewaterfall32.png",
                "windmill.png"
            ]
        );

        for sheet in Sheet::ALL {
            let decoded = image::open(out_dir.join(sheet.file_name())).unwrap();
            assert_eq!((decoded.width(), decoded.height()), sheet.dimensions());
        }
    }

    #[test]
    fn test_run_is_byte_identical() {
        let dir = tempdir().unwrap();
        let options = GenerateOptions {
            out_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        run(&options).unwrap();
        let first: Vec<Vec<u8>> = Sheet::ALL
            .iter()
            .map(|s| fs::read(dir.path().join(s.file_name())).unwrap())
            .collect();

        run(&options).unwrap();
        for (sheet, bytes) in Sheet::ALL.iter().zip(first) {
            let again = fs::read(dir.path().join(sheet.file_name())).unwrap();
            assert!(bytes == again, "{} changed between runs", sheet);
        }
    }

    #[test]
    fn test_written_pixels_match_render() {
        let dir = tempdir().unwrap();
        let options = GenerateOptions {
            out_dir: dir.path().to_path_buf(),
            sheets: vec![Sheet::TrafficLight],
            checker: false,
        };
        let written = run(&options).unwrap();
        assert_eq!(written, vec![dir.path().join("windmill.png")]);

        let decoded = image::open(&written[0]).unwrap().to_rgba8();
        assert!(decoded == Sheet::TrafficLight.render());
    }

    #[test]
    fn test_write_sheet_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("campfire.png");
        fs::write(&path, b"not a png").unwrap();

        write_sheet(&path, &Sheet::SteamVent.render()).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (128, 32));
    }

    #[test]
    fn test_run_fails_when_directory_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("spritesheets");
        fs::write(&blocker, b"").unwrap();

        let options = GenerateOptions {
            out_dir: blocker,
            ..Default::default()
        };
        let err = run(&options).unwrap_err();
        assert!(err.to_string().contains("could not create output directory"));
    }

    #[test]
    fn test_checker_preview_fills_transparent_areas() {
        let dir = tempdir().unwrap();
        let options = GenerateOptions {
            out_dir: dir.path().to_path_buf(),
            sheets: vec![Sheet::WindowBlink],
            checker: true,
        };
        run(&options).unwrap();

        let decoded = image::open(dir.path().join("gentlesparkle32.png"))
            .unwrap()
            .to_rgba8();
        assert!(decoded.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_layout_report_lists_every_frame() {
        let report = layout_report();
        assert!(report.contains("steam (campfire.png): 128x32, 4 frames"));
        assert!(report.contains("traffic (windmill.png): 624x624, 8 frames"));
        assert!(report.contains("  [7] 208x208 @ (208, 416)"));
        assert!(report.contains("  [5] 32x96 @ (160, 32)"));
    }
}
