//! Writable view over the packed normal-map output buffer.
//!
//! Each output pixel is 12 bytes: three native-endian `f32` (x, y, z). The
//! sink carries no dimensions of its own — the caller sizes it to match the
//! validated source dimensions and the bake walks it with the same (x, y)
//! grid it reads the sources with.
use nalgebra::Vector3;

/// Bytes per output pixel: three 32-bit floats.
pub const SINK_PIXEL_BYTES: usize = 12;

/// Borrowed mutable view over packed 12-byte-per-pixel normal data.
#[derive(Debug)]
pub struct NormalSink<'a> {
    pub stride: usize, // bytes between rows
    pub data: &'a mut [u8],
}

impl<'a> NormalSink<'a> {
    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        x * SINK_PIXEL_BYTES + y * self.stride
    }

    /// Read the vector stored at (x, y). Raw reinterpretation, no scaling.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Vector3<f32> {
        let off = self.offset(x, y);
        let fx = f32::from_ne_bytes(self.data[off..off + 4].try_into().unwrap());
        let fy = f32::from_ne_bytes(self.data[off + 4..off + 8].try_into().unwrap());
        let fz = f32::from_ne_bytes(self.data[off + 8..off + 12].try_into().unwrap());
        Vector3::new(fx, fy, fz)
    }

    /// Write `v` at (x, y). Exactly 12 bytes are touched.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: Vector3<f32>) {
        let off = self.offset(x, y);
        self.data[off..off + 4].copy_from_slice(&v.x.to_ne_bytes());
        self.data[off + 4..off + 8].copy_from_slice(&v.y.to_ne_bytes());
        self.data[off + 8..off + 12].copy_from_slice(&v.z.to_ne_bytes());
    }
}
