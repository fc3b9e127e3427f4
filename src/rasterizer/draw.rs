//! Drawing utilities
//!
//! Depth-tested 3D lines, used for the wireframe overlay.

use super::constants::DEPTH_MAX;
use super::depth::DepthBuffer;
use super::render::PixelSink;
use super::scan::ErrorStepper;
use super::types::{Color, ScreenPoint};

/// Range of steps `[first, last]` along a line of `steps` steps from `a` to
/// `b` that can land inside a `width` x `height` viewport, padded by one step
/// each side for rounding. None when the line misses the viewport.
fn visible_steps(a: ScreenPoint, b: ScreenPoint, steps: i64, width: usize, height: usize) -> Option<(i64, i64)> {
    let mut lo = 0.0f64;
    let mut hi = steps as f64;
    for (start, end, limit) in [(a.x, b.x, width), (a.y, b.y, height)] {
        let start = start as f64;
        let delta = end as f64 - start;
        let max = limit as f64 - 1.0;
        if delta == 0.0 {
            if start < 0.0 || start > max {
                return None;
            }
            continue;
        }
        let per_step = delta / steps as f64;
        let (k0, k1) = (-start / per_step, (max - start) / per_step);
        let (k0, k1) = if k0 <= k1 { (k0, k1) } else { (k1, k0) };
        lo = lo.max(k0.floor() - 1.0);
        hi = hi.min(k1.ceil() + 1.0);
    }
    if lo > hi {
        None
    } else {
        Some((lo as i64, hi as i64))
    }
}

/// Draw a line from `a` to `b` (both endpoints included), stepping x, y and
/// depth together along the major screen axis. Only the steps that can reach
/// the viewport are walked.
///
/// Uses a less-than-or-equal depth test so the line shows on top of the
/// faces it outlines. Returns the number of pixels written.
pub fn draw_line_3d<S: PixelSink + ?Sized>(
    depth: &mut DepthBuffer,
    sink: &mut S,
    a: ScreenPoint,
    b: ScreenPoint,
    color: Color,
) -> usize {
    let steps = (b.x as i64 - a.x as i64).abs().max((b.y as i64 - a.y as i64).abs());
    let (first, last) = match visible_steps(a, b, steps, depth.width(), depth.height()) {
        Some(range) => range,
        None => return 0,
    };

    let mut x = ErrorStepper::new(a.x, b.x, steps);
    let mut y = ErrorStepper::new(a.y, b.y, steps);
    let mut z = ErrorStepper::new(a.z as i32, b.z as i32, steps);
    x.skip(first);
    y.skip(first);
    z.skip(first);

    let mut written = 0;
    for _ in first..=last {
        let (px, py) = (x.value(), y.value());
        if px >= 0 && py >= 0 {
            let d = z.value().clamp(0, DEPTH_MAX as i32) as u8;
            if depth.test_and_set_inclusive(px as usize, py as usize, d) {
                sink.set_pixel(px as usize, py as usize, color);
                written += 1;
            }
        }
        x.advance();
        y.advance();
        z.advance();
    }
    written
}
