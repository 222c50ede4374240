use nalgebra::Vector3;

/// Bytes per source pixel. Channel order is irrelevant to the bake since the
/// three channels are collapsed to their maximum; the fourth byte is skipped.
pub const SOURCE_PIXEL_BYTES: usize = 4;

/// Borrowed view over packed 4-byte-per-pixel source data.
#[derive(Clone, Debug)]
pub struct SourceImage<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> SourceImage<'a> {
    /// Read the pixel at (x, y) as an RGB triplet scaled to [0, 1].
    ///
    /// Offset arithmetic is byte-exact: `x * 4 + y * stride`. No bounds check
    /// beyond slice indexing; the orchestrator validates dimensions before
    /// any pixel is touched.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Vector3<f32> {
        let off = x * SOURCE_PIXEL_BYTES + y * self.stride;
        Vector3::new(
            self.data[off] as f32 / 255.0,
            self.data[off + 1] as f32 / 255.0,
            self.data[off + 2] as f32 / 255.0,
        )
    }

    /// True when `other` has the same pixel dimensions.
    #[inline]
    pub fn same_shape(&self, other: &SourceImage<'_>) -> bool {
        self.w == other.w && self.h == other.h
    }
}
