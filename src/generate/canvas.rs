//! Pixel buffer helpers shared by the sheet generators
//!
//! Opaque shapes go straight through `imageproc`. Anything translucent is
//! blended exactly once per pixel, either by a per-pixel loop or by drawing
//! into a scratch layer that is then composited.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::constants::{CHECKER_LIGHT, CHECKER_PALE, TRANSPARENT};

/// Allocate a `width` x `height` buffer with every pixel set to `fill`
pub fn new_canvas(width: u32, height: u32, fill: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, fill)
}

/// Fully transparent buffer
pub fn transparent_canvas(width: u32, height: u32) -> RgbaImage {
    new_canvas(width, height, TRANSPARENT)
}

/// Paint a light two-tone checkerboard, handy when previewing sheets in
/// viewers that render transparency as black.
pub fn checker_fill(image: &mut RgbaImage, cell_size: u32) {
    if cell_size == 0 {
        return;
    }
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let block = x / cell_size + y / cell_size;
        *pixel = if block % 2 == 0 {
            CHECKER_LIGHT
        } else {
            CHECKER_PALE
        };
    }
}

/// Straight-alpha source-over of `src` onto `dst`.
///
/// Opaque sources and empty destinations are copied as-is so solid shapes
/// keep their exact colours after compositing.
pub fn blend_pixel(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let src_a = src[3];
    if src_a == 0 {
        return;
    }
    if src_a == 255 || dst[3] == 0 {
        *dst = src;
        return;
    }

    let sa = src_a as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let mut out = [0u8; 4];
    for c in 0..3 {
        let value = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        out[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    *dst = Rgba(out);
}

/// Source-over `tile` onto `canvas` with its top-left corner at (x, y)
pub fn composite(canvas: &mut RgbaImage, tile: &RgbaImage, x: u32, y: u32) {
    let (w, h) = canvas.dimensions();
    for (tx, ty, pixel) in tile.enumerate_pixels() {
        let (dst_x, dst_y) = (x + tx, y + ty);
        if dst_x < w && dst_y < h {
            blend_pixel(canvas.get_pixel_mut(dst_x, dst_y), *pixel);
        }
    }
}

/// Blend `color` over every pixel of `rect` that lies inside the image
pub fn fill_rect_blended(image: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let (w, h) = image.dimensions();
    let x0 = rect.left().max(0) as u32;
    let y0 = rect.top().max(0) as u32;
    let x1 = (rect.right() + 1).clamp(0, w as i32) as u32;
    let y1 = (rect.bottom() + 1).clamp(0, h as i32) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            blend_pixel(image.get_pixel_mut(x, y), color);
        }
    }
}

/// Filled circle whose colour may be translucent.
///
/// `draw_filled_circle_mut` visits some rows twice, so blending in place
/// would darken those rows. The circle goes onto a transparent scratch
/// layer first and the layer is composited.
pub fn fill_circle_translucent(
    image: &mut RgbaImage,
    center: (i32, i32),
    radius: i32,
    color: Rgba<u8>,
) {
    let (w, h) = image.dimensions();
    let mut layer = transparent_canvas(w, h);
    draw_filled_circle_mut(&mut layer, center, radius, color);
    composite(image, &layer, 0, 0);
}

/// Rectangle outline `width` pixels thick, growing inward from `rect`
pub fn draw_thick_outline(image: &mut RgbaImage, rect: Rect, width: u32, color: Rgba<u8>) {
    for inset in 0..width {
        let Some(inner) = shrink(rect, inset) else {
            break;
        };
        draw_hollow_rect_mut(image, inner, color);
    }
}

/// Rounded rectangle with an `outline_width` border around an inset fill
pub fn fill_rounded_rect(
    image: &mut RgbaImage,
    rect: Rect,
    radius: u32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    outline_width: u32,
) {
    fill_rounded(image, rect, radius, outline);
    if let Some(inner) = shrink(rect, outline_width) {
        fill_rounded(image, inner, radius.saturating_sub(outline_width), fill);
    }
}

fn fill_rounded(image: &mut RgbaImage, rect: Rect, radius: u32, color: Rgba<u8>) {
    let (w, h) = (rect.width(), rect.height());
    let radius = radius.min(w.min(h).saturating_sub(1) / 2);
    if radius == 0 {
        draw_filled_rect_mut(image, rect, color);
        return;
    }

    let r = radius as i32;
    draw_filled_rect_mut(
        image,
        Rect::at(rect.left(), rect.top() + r).of_size(w, h - 2 * radius),
        color,
    );
    draw_filled_rect_mut(
        image,
        Rect::at(rect.left() + r, rect.top()).of_size(w - 2 * radius, h),
        color,
    );

    let corners = [
        (rect.left() + r, rect.top() + r),
        (rect.right() - r, rect.top() + r),
        (rect.left() + r, rect.bottom() - r),
        (rect.right() - r, rect.bottom() - r),
    ];
    for center in corners {
        draw_filled_circle_mut(image, center, r, color);
    }
}

/// `rect` with `by` pixels removed from every side, or `None` if nothing is left
fn shrink(rect: Rect, by: u32) -> Option<Rect> {
    let w = rect.width().checked_sub(2 * by).filter(|w| *w > 0)?;
    let h = rect.height().checked_sub(2 * by).filter(|h| *h > 0)?;
    Some(Rect::at(rect.left() + by as i32, rect.top() + by as i32).of_size(w, h))
}

/// Inclusive-corner rectangle, the way the layouts describe shapes
pub fn rect_between(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
    Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32)
}
