//! Hysteresis: weak maxima survive only when 8-connected to a strong one.
use super::map::EdgeMap;
use super::nms::EdgeClass;

pub fn link_edges(classes: &[EdgeClass], width: usize, height: usize) -> EdgeMap {
    let mut map = EdgeMap::new(width, height);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for (i, class) in classes.iter().enumerate() {
        if *class == EdgeClass::Strong && !map.is_set_index(i) {
            map.set_index(i);
            stack.push((i % width, i / width));
        }
        while let Some((x, y)) = stack.pop() {
            for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                    let j = ny * width + nx;
                    if classes[j] != EdgeClass::Suppressed && !map.is_set_index(j) {
                        map.set_index(j);
                        stack.push((nx, ny));
                    }
                }
            }
        }
    }

    map
}
