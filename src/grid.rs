use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

/// Channels per pixel in a [`PixelGrid`].
pub const CHANNELS: usize = 3;

/// Decoded image: `height` rows of `width` RGB pixels, top row first.
///
/// Logically a `(height, width, 3)` array of `u8` stored contiguously in
/// row-major order with no row padding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// A black grid of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 3` overflows `usize`. Decoding never
    /// reaches this: oversized headers fail with
    /// [`BmpError::DimensionsTooLarge`](crate::BmpError::DimensionsTooLarge).
    pub fn new(width: u32, height: u32) -> Self {
        let Some(len) = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
        else {
            panic!("pixel grid of {width}x{height} overflows usize");
        };
        Self::from_raw(width, height, vec![0u8; len])
    }

    /// Build a grid by calling `f(row, col)` for every pixel, top row first.
    ///
    /// Useful for synthetic images, e.g. random test patterns for a renderer.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(usize, usize) -> [u8; 3]) -> Self {
        let mut grid = Self::new(width, height);
        let w = width as usize;
        if w > 0 {
            for (idx, px) in grid.data.chunks_exact_mut(CHANNELS).enumerate() {
                px.copy_from_slice(&f(idx / w, idx % w));
            }
        }
        grid
    }

    pub(crate) fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * CHANNELS);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(height, width, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }

    /// The `[r, g, b]` pixel at `row` (0 = top) and `col`.
    pub fn get(&self, row: usize, col: usize) -> Option<[u8; 3]> {
        if row >= self.height as usize || col >= self.width as usize {
            return None;
        }
        let off = (row * self.width as usize + col) * CHANNELS;
        Some([self.data[off], self.data[off + 1], self.data[off + 2]])
    }

    /// Raw RGB bytes of one row, or `None` past the bottom.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        let stride = self.stride();
        if row >= self.height as usize {
            return None;
        }
        self.data.get(row * stride..(row + 1) * stride)
    }

    /// Rows of raw RGB bytes, top first. Always yields `height` rows, which
    /// are empty when `width` is 0.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let stride = self.stride();
        (0..self.height as usize).map(move |row| &self.data[row * stride..(row + 1) * stride])
    }

    /// Row length in bytes.
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// All pixel bytes, row-major, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take ownership of the pixel bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Copy into nested `rows -> pixels -> [r, g, b]`.
    pub fn to_nested(&self) -> Vec<Vec<[u8; 3]>> {
        self.rows()
            .map(|row| {
                row.chunks_exact(CHANNELS)
                    .map(|px| [px[0], px[1], px[2]])
                    .collect()
            })
            .collect()
    }

    /// Zero-copy view as typed RGB pixels.
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> &[rgb::RGB8] {
        self.as_bytes().as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] for rendering.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGB8> {
        imgref::ImgRef::new(self.as_rgb(), self.width as usize, self.height as usize)
    }

    /// Copy into an owned [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        imgref::ImgVec::new(
            self.as_rgb().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelGrid {
        PixelGrid::from_fn(3, 2, |row, col| [row as u8, col as u8, 7])
    }

    #[test]
    fn from_fn_fills_row_major() {
        let grid = sample();
        assert_eq!(grid.shape(), (2, 3, 3));
        assert_eq!(grid.get(0, 0), Some([0, 0, 7]));
        assert_eq!(grid.get(1, 2), Some([1, 2, 7]));
        assert_eq!(&grid.as_bytes()[9..12], &[1, 0, 7]);
    }

    #[test]
    fn get_out_of_range() {
        let grid = sample();
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn rows_and_row_agree() {
        let grid = sample();
        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(Some(rows[1]), grid.row(1));
        assert_eq!(grid.row(2), None);
        assert_eq!(grid.stride(), 9);
    }

    #[test]
    fn nested_matches_get() {
        let grid = sample();
        let nested = grid.to_nested();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[1][2], [1, 2, 7]);
    }

    #[test]
    fn new_is_black() {
        let grid = PixelGrid::new(4, 4);
        assert_eq!(grid.as_bytes().len(), 48);
        assert!(grid.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_width_grid_keeps_its_rows() {
        let grid = PixelGrid::new(0, 5);
        assert_eq!(grid.shape(), (5, 0, 3));
        assert_eq!(grid.rows().count(), 5);
        assert!(grid.rows().all(|row| row.is_empty()));
        assert_eq!(grid.row(4), Some(&[][..]));
        assert_eq!(grid.to_nested(), vec![Vec::<[u8; 3]>::new(); 5]);
    }

    #[test]
    fn zero_height_grid_has_no_rows() {
        let grid = PixelGrid::new(4, 0);
        assert_eq!(grid.rows().count(), 0);
        assert!(grid.to_nested().is_empty());
        assert_eq!(grid.row(0), None);
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn oversized_grid_panics() {
        PixelGrid::new(u32::MAX, u32::MAX);
    }

    #[cfg(feature = "rgb")]
    #[test]
    fn rgb_view() {
        let grid = sample();
        let px = grid.as_rgb();
        assert_eq!(px.len(), 6);
        assert_eq!(px[5], rgb::RGB8::new(1, 2, 7));
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_view() {
        let grid = sample();
        let img = grid.as_imgref();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img[(2usize, 1usize)], rgb::RGB8::new(1, 2, 7));
        assert_eq!(grid.to_imgvec().buf().len(), 6);
    }
}
