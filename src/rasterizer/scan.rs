//! Scanline triangle fill
//!
//! Triangles are sorted by y and walked one row at a time: the short edges
//! (top->middle, then middle->bottom) against the long edge (top->bottom).
//! Both x and depth along each edge, and depth across each span, advance
//! with integer error-accumulator steppers. Rows and spans are inclusive at
//! both ends, and an edge's values depend only on its two endpoints, so
//! triangles sharing an edge meet without gaps.

use super::constants::DEPTH_MAX;
use super::depth::DepthBuffer;
use super::render::PixelSink;
use super::types::{Color, ScreenPoint};

/// Walks a value from `start` to `end` over a fixed number of unit steps on
/// the major axis. Each step adds the integer quotient and carries the
/// remainder in an accumulator, so the value after step k is
/// `start + round(k * (end - start) / steps)` and the last step lands
/// exactly on `end`. A zero-length walk never moves.
///
/// Arithmetic is done in i64 so endpoints anywhere in the i32 range (far
/// off-screen projections saturate there) cannot overflow.
#[derive(Debug, Clone, Copy)]
pub struct ErrorStepper {
    start: i64,
    value: i64,
    sign: i64,
    delta: i64,
    quotient: i64,
    remainder: i64,
    steps: i64,
    acc: i64,
    taken: i64,
}

impl ErrorStepper {
    pub fn new(start: i32, end: i32, steps: i64) -> Self {
        let (start, end) = (start as i64, end as i64);
        let steps = steps.max(0);
        let delta = (end - start).abs();
        let (quotient, remainder) = if steps > 0 { (delta / steps, delta % steps) } else { (0, 0) };
        Self {
            start,
            value: start,
            sign: if end < start { -1 } else { 1 },
            delta,
            quotient,
            remainder,
            steps,
            acc: steps / 2,
            taken: 0,
        }
    }

    /// Current value; always between the two endpoints
    #[inline]
    pub fn value(&self) -> i32 {
        self.value as i32
    }

    pub fn is_done(&self) -> bool {
        self.taken >= self.steps
    }

    /// Move one step along the major axis
    #[inline]
    pub fn advance(&mut self) {
        if self.is_done() {
            return;
        }
        self.taken += 1;
        self.value += self.sign * self.quotient;
        self.acc += self.remainder;
        if self.acc >= self.steps {
            self.acc -= self.steps;
            self.value += self.sign;
        }
    }

    /// Jump `n` steps ahead in one go (used to skip off-screen rows/columns)
    pub fn skip(&mut self, n: i64) {
        if n <= 0 || self.steps == 0 {
            return;
        }
        let k = self.taken.saturating_add(n).min(self.steps);
        let total = k as i128 * self.delta as i128 + (self.steps / 2) as i128;
        let steps = self.steps as i128;
        self.value = self.start + self.sign * (total / steps) as i64;
        self.acc = (total % steps) as i64;
        self.taken = k;
    }
}

/// How a rasterized pixel gets its color
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    /// One color for the whole triangle (flat shading)
    Solid(Color),
    /// Gray ramp from the pixel's depth, nearer = brighter
    DepthGray,
}

impl Fill {
    #[inline]
    fn color_at(self, depth: u8) -> Color {
        match self {
            Fill::Solid(color) => color,
            Fill::DepthGray => Color::gray(255 - depth),
        }
    }
}

/// Fill one row from (x0, z0) to (x1, z1) inclusive, depth-testing each
/// pixel. Returns the number of pixels written.
pub fn draw_scanline<S: PixelSink + ?Sized>(
    y: i32,
    x0: i32,
    z0: i32,
    x1: i32,
    z1: i32,
    fill: Fill,
    depth: &mut DepthBuffer,
    sink: &mut S,
) -> usize {
    let width = depth.width() as i32;
    if y < 0 || y >= depth.height() as i32 {
        return 0;
    }

    let (xl, zl, xr, zr) = if x0 <= x1 { (x0, z0, x1, z1) } else { (x1, z1, x0, z0) };
    if xr < 0 || xl >= width {
        return 0;
    }

    let mut z = ErrorStepper::new(zl, zr, xr as i64 - xl as i64);
    let first = xl.max(0);
    let last = xr.min(width - 1);
    z.skip(first as i64 - xl as i64);

    let mut written = 0;
    for x in first..=last {
        let d = z.value().clamp(0, DEPTH_MAX as i32) as u8;
        if depth.test_and_set(x as usize, y as usize, d) {
            sink.set_pixel(x as usize, y as usize, fill.color_at(d));
            written += 1;
        }
        z.advance();
    }
    written
}

/// Stable sort of three points by ascending y
fn sort_by_y(points: [ScreenPoint; 3]) -> [ScreenPoint; 3] {
    let mut p = points;
    if p[0].y > p[1].y {
        p.swap(0, 1);
    }
    if p[1].y > p[2].y {
        p.swap(1, 2);
    }
    if p[0].y > p[1].y {
        p.swap(0, 1);
    }
    p
}

/// One triangle edge walked top to bottom, x and depth together
struct Edge {
    x: ErrorStepper,
    z: ErrorStepper,
}

impl Edge {
    fn new(from: ScreenPoint, to: ScreenPoint) -> Self {
        let rows = to.y as i64 - from.y as i64;
        Self {
            x: ErrorStepper::new(from.x, to.x, rows),
            z: ErrorStepper::new(from.z as i32, to.z as i32, rows),
        }
    }

    fn advance(&mut self) {
        self.x.advance();
        self.z.advance();
    }

    fn skip(&mut self, rows: i64) {
        self.x.skip(rows);
        self.z.skip(rows);
    }
}

/// Fill a projected triangle into `sink`, depth-tested against `depth`.
/// Returns the number of pixels written.
pub fn rasterize_triangle<S: PixelSink + ?Sized>(
    points: [ScreenPoint; 3],
    fill: Fill,
    depth: &mut DepthBuffer,
    sink: &mut S,
) -> usize {
    let [top, mid, bot] = sort_by_y(points);
    let height = depth.height() as i32;

    // All on one row: a single span over the full x extent
    if top.y == bot.y {
        let left = points.iter().min_by_key(|p| p.x).copied().unwrap_or(top);
        let right = points.iter().max_by_key(|p| p.x).copied().unwrap_or(top);
        return draw_scanline(top.y, left.x, left.z as i32, right.x, right.z as i32, fill, depth, sink);
    }

    let first_row = top.y.max(0);
    let last_row = bot.y.min(height - 1);
    if first_row > last_row {
        return 0;
    }

    let mut long = Edge::new(top, bot);
    let mut upper = Edge::new(top, mid);
    let mut lower = Edge::new(mid, bot);

    long.skip(first_row as i64 - top.y as i64);
    if first_row < mid.y {
        upper.skip(first_row as i64 - top.y as i64);
    } else {
        lower.skip(first_row as i64 - mid.y as i64);
    }

    let mut written = 0;
    for y in first_row..=last_row {
        let short = if y < mid.y { &mut upper } else { &mut lower };
        written += draw_scanline(
            y,
            short.x.value(),
            short.z.value(),
            long.x.value(),
            long.z.value(),
            fill,
            depth,
            sink,
        );
        short.advance();
        long.advance();
    }
    written
}
