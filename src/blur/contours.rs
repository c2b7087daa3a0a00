//! External contour counting on a binary edge map.
//!
//! Edge pixels are grouped with 8-connectivity and background with
//! 4-connectivity, with a virtual background frame around the image. A
//! component has an external (outermost) contour exactly when it touches the
//! background connected to that frame; components nested in the holes of
//! other components are not counted.
use crate::edges::EdgeMap;
use serde::Serialize;
use std::collections::VecDeque;

/// Bounding box and size of one component with an external contour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContourRegion {
    pub x_min: usize,
    pub y_min: usize,
    pub x_max: usize,
    pub y_max: usize,
    pub pixel_count: usize,
}

impl ContourRegion {
    fn seed(x: usize, y: usize) -> Self {
        Self {
            x_min: x,
            y_min: y,
            x_max: x,
            y_max: y,
            pixel_count: 0,
        }
    }

    fn include(&mut self, x: usize, y: usize) {
        self.x_min = self.x_min.min(x);
        self.y_min = self.y_min.min(y);
        self.x_max = self.x_max.max(x);
        self.y_max = self.y_max.max(y);
        self.pixel_count += 1;
    }
}

/// Components of `edges` that own an external contour, in raster order of
/// their first pixel.
pub fn external_regions(edges: &EdgeMap) -> Vec<ContourRegion> {
    let (w, h) = (edges.width(), edges.height());
    if w == 0 || h == 0 {
        return Vec::new();
    }
    let outer = outer_background(edges);
    let mut visited = vec![false; w * h];
    let mut queue = VecDeque::new();
    let mut regions = Vec::new();

    for start in 0..w * h {
        if visited[start] || !edges.as_slice()[start] {
            continue;
        }
        visited[start] = true;
        queue.push_back(start);
        let mut region = ContourRegion::seed(start % w, start / w);
        let mut external = false;

        while let Some(i) = queue.pop_front() {
            let (x, y) = (i % w, i / w);
            region.include(x, y);
            if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                external = true;
            }
            for (nx, ny) in four_neighbours(x, y, w, h) {
                if outer[ny * w + nx] {
                    external = true;
                }
            }
            for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                    let j = ny * w + nx;
                    if !visited[j] && edges.as_slice()[j] {
                        visited[j] = true;
                        queue.push_back(j);
                    }
                }
            }
        }

        if external {
            regions.push(region);
        }
    }

    regions
}

/// Number of external contours in `edges`.
pub fn count_external_contours(edges: &EdgeMap) -> usize {
    external_regions(edges).len()
}

/// Background pixels 4-connected to the virtual frame around the image.
fn outer_background(edges: &EdgeMap) -> Vec<bool> {
    let (w, h) = (edges.width(), edges.height());
    let data = edges.as_slice();
    let mut outer = vec![false; w * h];
    let mut queue = VecDeque::new();

    for y in 0..h {
        for x in 0..w {
            let on_border = x == 0 || y == 0 || x == w - 1 || y == h - 1;
            let i = y * w + x;
            if on_border && !data[i] && !outer[i] {
                outer[i] = true;
                queue.push_back(i);
            }
        }
    }

    while let Some(i) = queue.pop_front() {
        for (nx, ny) in four_neighbours(i % w, i / w, w, h) {
            let j = ny * w + nx;
            if !data[j] && !outer[j] {
                outer[j] = true;
                queue.push_back(j);
            }
        }
    }

    outer
}

fn four_neighbours(
    x: usize,
    y: usize,
    w: usize,
    h: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let candidates = [
        (x.checked_sub(1), Some(y)),
        ((x + 1 < w).then_some(x + 1), Some(y)),
        (Some(x), y.checked_sub(1)),
        (Some(x), (y + 1 < h).then_some(y + 1)),
    ];
    candidates
        .into_iter()
        .filter_map(|(nx, ny)| Some((nx?, ny?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline(map: &mut EdgeMap, x0: usize, y0: usize, x1: usize, y1: usize) {
        for x in x0..=x1 {
            map.set(x, y0);
            map.set(x, y1);
        }
        for y in y0..=y1 {
            map.set(x0, y);
            map.set(x1, y);
        }
    }

    #[test]
    fn empty_map_has_no_contours() {
        assert_eq!(count_external_contours(&EdgeMap::new(10, 10)), 0);
    }

    #[test]
    fn nested_outline_is_not_counted() {
        let mut map = EdgeMap::new(20, 20);
        outline(&mut map, 2, 2, 17, 17);
        outline(&mut map, 6, 6, 12, 12);
        let regions = external_regions(&map);
        assert_eq!(regions.len(), 1);
        assert_eq!(
            regions[0],
            ContourRegion {
                x_min: 2,
                y_min: 2,
                x_max: 17,
                y_max: 17,
                pixel_count: 60,
            }
        );
    }

    #[test]
    fn separate_blobs_are_counted_individually() {
        let mut map = EdgeMap::new(30, 10);
        outline(&mut map, 1, 1, 5, 5);
        outline(&mut map, 10, 1, 14, 5);
        map.set(20, 3);
        map.set(21, 4); // diagonal neighbours form one component
        assert_eq!(count_external_contours(&map), 3);
    }

    #[test]
    fn component_on_the_border_is_external() {
        let mut map = EdgeMap::new(5, 5);
        for x in 0..5 {
            for y in 0..5 {
                map.set(x, y);
            }
        }
        assert_eq!(count_external_contours(&map), 1);
    }

    #[test]
    fn blob_inside_a_diagonal_ring_is_nested() {
        // 8-connected diamond ring encloses a 4-connected hole
        let mut map = EdgeMap::new(9, 9);
        let ring = [
            (4, 1),
            (5, 2),
            (6, 3),
            (7, 4),
            (6, 5),
            (5, 6),
            (4, 7),
            (3, 6),
            (2, 5),
            (1, 4),
            (2, 3),
            (3, 2),
        ];
        for (x, y) in ring {
            map.set(x, y);
        }
        map.set(4, 4);
        assert_eq!(count_external_contours(&map), 1);
    }
}
