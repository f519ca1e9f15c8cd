// Shape rasterization shared by the frame buffer and the direct panel path.
//
// Everything here walks pixels through a caller-supplied setter, so the same
// loops serve an in-memory frame and a live hardware canvas. Clipping is the
// setter's job.

/// Filled rectangle with quarter-circle corners.
///
/// The radius is clamped so the corners can never overlap; radius 0 degrades
/// to a plain rectangle.
pub(crate) fn fill_round_rect(
    set: &mut impl FnMut(i32, i32),
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    radius: i32,
) {
    if w <= 0 || h <= 0 {
        return;
    }
    let r = radius.clamp(0, w.min(h) / 2);
    for py in y..y + h {
        for px in x..x + w {
            let left = px < x + r;
            let right = px >= x + w - r;
            let top = py < y + r;
            let bottom = py >= y + h - r;
            if (left || right) && (top || bottom) {
                // Corner region: keep the pixel only inside the corner circle
                let cx = if left { x + r } else { x + w - 1 - r };
                let cy = if top { y + r } else { y + h - 1 - r };
                let dx = (px - cx) as i64;
                let dy = (py - cy) as i64;
                if dx * dx + dy * dy > (r as i64) * (r as i64) {
                    continue;
                }
            }
            set(px, py);
        }
    }
}

/// Filled triangle via inclusive edge functions over the bounding box.
pub(crate) fn fill_triangle(
    set: &mut impl FnMut(i32, i32),
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) {
    let area = edge(x0, y0, x1, y1, x2, y2);
    if area == 0 {
        // Collinear vertices span no area
        return;
    }
    // Orient counter-clockwise so all edge functions share a sign
    let (x1, y1, x2, y2) = if area < 0 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };

    let min_x = x0.min(x1).min(x2);
    let max_x = x0.max(x1).max(x2);
    let min_y = y0.min(y1).min(y2);
    let max_y = y0.max(y1).max(y2);

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let e0 = edge(x0, y0, x1, y1, px, py);
            let e1 = edge(x1, y1, x2, y2, px, py);
            let e2 = edge(x2, y2, x0, y0, px, py);
            if e0 >= 0 && e1 >= 0 && e2 >= 0 {
                set(px, py);
            }
        }
    }
}

#[inline]
fn edge(ax: i32, ay: i32, bx: i32, by: i32, px: i32, py: i32) -> i64 {
    let abx = (bx - ax) as i64;
    let aby = (by - ay) as i64;
    let apx = (px - ax) as i64;
    let apy = (py - ay) as i64;
    abx * apy - aby * apx
}
