use rand::rngs::StdRng;
use rand::SeedableRng;
use random_shapes::{Canvas, Color, Mode, PixelColor};

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Canvas of the given mode filled with a single background value.
pub fn blank_canvas(width: u32, height: u32, mode: Mode, background: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height, mode).expect("valid canvas size");
    canvas
        .create(&Color::Scalar(background), &mut seeded(0))
        .expect("background in range");
    canvas
}

/// Number of pixels equal to `color`.
pub fn count_pixels(canvas: &Canvas, color: PixelColor) -> usize {
    let mut n = 0;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if canvas.get_pixel(x, y) == color {
                n += 1;
            }
        }
    }
    n
}

/// Tight bounds `(x_min, y_min, x_max, y_max)` of pixels equal to `color`.
pub fn painted_bounds(canvas: &Canvas, color: PixelColor) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if canvas.get_pixel(x, y) != color {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    bounds
}
