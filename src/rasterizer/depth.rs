//! Per-pixel depth buffer
//!
//! One byte per pixel, row-major. Smaller values are nearer; `DEPTH_EMPTY`
//! marks pixels nothing has been drawn to this frame.

use super::constants::DEPTH_EMPTY;
use super::error::RasterError;

#[derive(Debug, Clone)]
pub struct DepthBuffer {
    values: Vec<u8>,
    width: usize,
    height: usize,
}

impl DepthBuffer {
    /// Allocate a cleared buffer. Allocation failure is returned, not aborted on.
    pub fn new(width: usize, height: usize) -> Result<Self, RasterError> {
        let len = width
            .checked_mul(height)
            .filter(|&n| n > 0)
            .ok_or(RasterError::InvalidViewport { width, height })?;

        let mut values = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|_| RasterError::DepthBufferAlloc { width, height })?;
        values.resize(len, DEPTH_EMPTY);

        log::info!("allocated {}x{} depth buffer", width, height);
        Ok(Self { values, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every entry to `DEPTH_EMPTY`
    pub fn clear(&mut self) {
        self.values.fill(DEPTH_EMPTY);
    }

    /// Stored depth at (x, y), or None outside the buffer
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.values[y * self.width + x])
        } else {
            None
        }
    }

    /// True if something has been drawn at (x, y) this frame
    pub fn is_written(&self, x: usize, y: usize) -> bool {
        self.get(x, y).map_or(false, |d| d != DEPTH_EMPTY)
    }

    /// Store `depth` if it is strictly nearer than what is there.
    /// Returns whether the pixel passed.
    #[inline]
    pub fn test_and_set(&mut self, x: usize, y: usize, depth: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = y * self.width + x;
        if depth < self.values[idx] {
            self.values[idx] = depth;
            true
        } else {
            false
        }
    }

    /// Like `test_and_set` but also passes on equal depth.
    /// Used for lines drawn over the faces they outline.
    #[inline]
    pub fn test_and_set_inclusive(&mut self, x: usize, y: usize, depth: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = y * self.width + x;
        if depth <= self.values[idx] && depth != DEPTH_EMPTY {
            self.values[idx] = depth;
            true
        } else {
            false
        }
    }

    /// Raw row-major values
    pub fn values(&self) -> &[u8] {
        &self.values
    }
}
