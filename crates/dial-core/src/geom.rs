use glam::DVec2;

// Point helpers DVec2 does not provide directly. The ordering predicates
// hold over both axes at once; they are not lexicographic or magnitude
// comparisons.

#[inline]
pub fn gte(a: DVec2, b: DVec2) -> bool {
    a.cmpge(b).all()
}

#[inline]
pub fn lte(a: DVec2, b: DVec2) -> bool {
    a.cmple(b).all()
}

/// Format a point as `"x, y"` with no decimal places.
pub fn label(p: DVec2) -> String {
    format!("{:.0}, {:.0}", p.x, p.y)
}

/// Pull `p` back onto the disk of `radius` around `center` by scaling the
/// center-to-p vector along its own direction. Points already on the disk
/// (including the degenerate `p == center`) pass through unchanged.
pub fn clamp_to_disk(p: DVec2, center: DVec2, radius: f64) -> DVec2 {
    let offset = p - center;
    let len = offset.length();
    if len <= radius {
        p
    } else {
        center + offset * (radius / len)
    }
}
