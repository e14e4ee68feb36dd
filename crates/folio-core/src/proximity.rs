//! Proximity graph between particles.
//!
//! Every unordered pair closer than the link distance becomes a [`Link`]
//! whose opacity falls off linearly with distance. The brute-force pass is
//! O(n²); the grid pass buckets points into cells one link distance wide so
//! only neighboring cells are compared. Both produce the same links in the
//! same order.

use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub opacity: f32,
}

/// `max_opacity * (1 - distance / link_distance)`, 0 at or beyond the limit.
#[inline]
pub fn link_opacity(distance: f32, link_distance: f32, max_opacity: f32) -> f32 {
    if distance.is_nan() || distance >= link_distance || link_distance <= 0.0 {
        return 0.0;
    }
    max_opacity * (1.0 - distance.max(0.0) / link_distance)
}

pub fn links_brute_force(
    points: &[Vec2],
    link_distance: f32,
    max_opacity: f32,
    out: &mut Vec<Link>,
) {
    out.clear();
    for (a, pa) in points.iter().enumerate() {
        for (offset, pb) in points[a + 1..].iter().enumerate() {
            let distance = pa.distance(*pb);
            if distance < link_distance {
                out.push(Link {
                    a,
                    b: a + 1 + offset,
                    distance,
                    opacity: link_opacity(distance, link_distance, max_opacity),
                });
            }
        }
    }
}

type Cell = (i32, i32);

#[inline]
fn cell_of(p: Vec2, size: f32) -> Cell {
    ((p.x / size).floor() as i32, (p.y / size).floor() as i32)
}

pub fn links_grid(points: &[Vec2], link_distance: f32, max_opacity: f32, out: &mut Vec<Link>) {
    out.clear();
    if link_distance <= 0.0 {
        return;
    }
    let mut cells: FnvHashMap<Cell, SmallVec<[usize; 8]>> = FnvHashMap::default();
    for (i, p) in points.iter().enumerate() {
        cells.entry(cell_of(*p, link_distance)).or_default().push(i);
    }
    let mut row: SmallVec<[Link; 16]> = SmallVec::new();
    for (a, pa) in points.iter().enumerate() {
        row.clear();
        let (cx, cy) = cell_of(*pa, link_distance);
        for nx in cx - 1..=cx + 1 {
            for ny in cy - 1..=cy + 1 {
                let Some(bucket) = cells.get(&(nx, ny)) else {
                    continue;
                };
                for &b in bucket.iter().filter(|&&b| b > a) {
                    let distance = pa.distance(points[b]);
                    if distance < link_distance {
                        row.push(Link {
                            a,
                            b,
                            distance,
                            opacity: link_opacity(distance, link_distance, max_opacity),
                        });
                    }
                }
            }
        }
        row.sort_unstable_by_key(|l| l.b);
        out.extend(row.drain(..));
    }
}

/// Pick the pass by population: brute force up to `grid_threshold` points.
pub fn build_links(
    points: &[Vec2],
    link_distance: f32,
    max_opacity: f32,
    grid_threshold: usize,
    out: &mut Vec<Link>,
) {
    if points.len() > grid_threshold {
        links_grid(points, link_distance, max_opacity, out);
    } else {
        links_brute_force(points, link_distance, max_opacity, out);
    }
}
