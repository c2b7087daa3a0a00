/// Uniform gray image.
pub fn flat_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// White 45° stripe (`|x - y| <= half_width`) on black, limited to
/// `from..=to` along both axes.
pub fn diagonal_stripe_u8(size: usize, from: usize, to: usize, half_width: usize) -> Vec<u8> {
    assert!(from <= to && to < size, "stripe must lie inside the image");

    let mut img = vec![0u8; size * size];
    for y in from..=to {
        for x in from..=to {
            if x.abs_diff(y) <= half_width {
                img[y * size + x] = 255;
            }
        }
    }
    img
}

/// White axis-aligned squares of side `side` on black, one per origin.
pub fn squares_u8(size: usize, origins: &[(usize, usize)], side: usize) -> Vec<u8> {
    let mut img = vec![0u8; size * size];
    for &(ox, oy) in origins {
        assert!(ox + side <= size && oy + side <= size, "square out of bounds");
        for y in oy..oy + side {
            img[y * size + ox..y * size + ox + side].fill(255);
        }
    }
    img
}

/// `rows` × `cols` squares of side `side`, repeated every `pitch` pixels from
/// `(offset, offset)`.
pub fn square_grid_u8(
    size: usize,
    rows: usize,
    cols: usize,
    side: usize,
    pitch: usize,
    offset: usize,
) -> Vec<u8> {
    let origins: Vec<(usize, usize)> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (offset + c * pitch, offset + r * pitch)))
        .collect();
    squares_u8(size, &origins, side)
}

/// Expand a gray buffer into interleaved RGB with equal channels.
pub fn gray_to_rgb(gray: &[u8]) -> Vec<u8> {
    gray.iter().flat_map(|&v| [v, v, v]).collect()
}
