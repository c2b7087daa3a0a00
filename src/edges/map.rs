use serde::Serialize;

/// Binary edge map with the same size as its source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap {
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl EdgeMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        self.data[y * self.width + x] = true;
    }

    #[inline]
    pub(crate) fn is_set_index(&self, i: usize) -> bool {
        self.data[i]
    }

    #[inline]
    pub(crate) fn set_index(&mut self, i: usize) {
        self.data[i] = true;
    }

    /// Row-major edge flags.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Number of edge pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&e| e).count()
    }

    /// Coordinates of edge pixels in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.width;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &e)| e)
            .map(move |(i, _)| (i % w, i / w))
    }
}

/// Edge map summary for tools.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeMapSummary {
    pub width: usize,
    pub height: usize,
    pub edge_pixels: usize,
}

impl From<&EdgeMap> for EdgeMapSummary {
    fn from(map: &EdgeMap) -> Self {
        Self {
            width: map.width,
            height: map.height,
            edge_pixels: map.count(),
        }
    }
}
