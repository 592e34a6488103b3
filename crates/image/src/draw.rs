//! Clipped raster primitives on `Rgb8` images.

use crate::{Image, PixelFormat};

pub type Color = [u8; 3];

fn set_pixel(image: &mut Image, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x as usize >= image.size.x || y as usize >= image.size.y {
        return;
    }
    let i = (y as usize * image.size.x + x as usize) * 3;
    if let Some(pixel) = image.data.get_mut(i..i + 3) {
        pixel.copy_from_slice(&color);
    }
}

/// Filled disc centered on (`cx`, `cy`). Pixels outside the image are skipped.
pub fn draw_filled_circle(image: &mut Image, cx: i32, cy: i32, radius: i32, color: Color) {
    if image.format != PixelFormat::Rgb8 {
        return;
    }
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                set_pixel(image, cx + dx, cy + dy, color);
            }
        }
    }
}

// Cohen-Sutherland outcodes
const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(x: i32, y: i32, width: i32, height: i32) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= height {
        code |= BOTTOM;
    }
    code
}

// clip (x0, y0)-(x1, y1) to the image rectangle, None if fully outside
fn clip(
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    width: i32,
    height: i32,
) -> Option<(i32, i32, i32, i32)> {
    loop {
        let code0 = outcode(x0, y0, width, height);
        let code1 = outcode(x1, y1, width, height);
        if code0 | code1 == 0 {
            return Some((x0, y0, x1, y1));
        }
        if code0 & code1 != 0 {
            return None;
        }
        let code = if code0 != 0 { code0 } else { code1 };
        let dx = x1 - x0;
        let dy = y1 - y0;
        let (x, y) = if code & TOP != 0 {
            (x0 + dx * (0 - y0) / dy, 0)
        } else if code & BOTTOM != 0 {
            (x0 + dx * (height - 1 - y0) / dy, height - 1)
        } else if code & LEFT != 0 {
            (0, y0 + dy * (0 - x0) / dx)
        } else {
            (width - 1, y0 + dy * (width - 1 - x0) / dx)
        };
        if code == code0 {
            x0 = x;
            y0 = y;
        } else {
            x1 = x;
            y1 = y;
        }
    }
}

/// Bresenham line, clipped to the image. `thickness` above 1 stamps a
/// disc of that diameter at every step.
pub fn draw_line(
    image: &mut Image,
    from: (i32, i32),
    to: (i32, i32),
    thickness: i32,
    color: Color,
) {
    if image.format != PixelFormat::Rgb8 {
        return;
    }
    let Some((mut x0, mut y0, x1, y1)) = clip(
        from.0,
        from.1,
        to.0,
        to.1,
        image.size.x as i32,
        image.size.y as i32,
    ) else {
        return;
    };

    let radius = (thickness / 2).max(0);
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        if radius == 0 {
            set_pixel(image, x0, y0, color);
        } else {
            draw_filled_circle(image, x0, y0, radius, color);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}
