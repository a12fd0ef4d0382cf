//! Axis-aligned rectangle overlap

use super::state::Rect;

/// True if the two rectangles overlap on both axes
///
/// Edges that merely touch do not count as a collision.
#[inline]
pub fn collides(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}
