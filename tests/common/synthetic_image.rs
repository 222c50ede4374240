/// Build a tightly packed 4-byte-per-pixel buffer with every channel set to
/// `value` (alpha included; the bake never reads it).
pub fn uniform_rgba(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height * 4]
}

/// Build a 4-byte-per-pixel buffer with `pad` extra bytes after each row,
/// padding filled with `0xEE` so accidental reads show up in assertions.
pub fn uniform_rgba_padded(width: usize, height: usize, value: u8, pad: usize) -> Vec<u8> {
    let stride = width * 4 + pad;
    let mut data = vec![0xEEu8; stride * height];
    for y in 0..height {
        let row = &mut data[y * stride..y * stride + width * 4];
        row.fill(value);
    }
    data
}
