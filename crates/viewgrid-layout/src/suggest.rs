#![forbid(unsafe_code)]

//! Layout suggestion: view count to ordered candidate templates.

use crate::catalog::LayoutKind;

const FOR_ONE: [LayoutKind; 1] = [LayoutKind::Single];
const FOR_TWO: [LayoutKind; 2] = [LayoutKind::DoubleHorizontal, LayoutKind::DoubleVertical];
const FOR_THREE: [LayoutKind; 6] = [
    LayoutKind::TripleHorizontal,
    LayoutKind::TripleVertical,
    LayoutKind::Triple2T1B,
    LayoutKind::Triple1T2B,
    LayoutKind::Triple2L1R,
    LayoutKind::Triple1L2R,
];
const FOR_MANY: [LayoutKind; 1] = [LayoutKind::Quad];

/// Ordered layout candidates for a view count. Never empty.
///
/// Horizontal variants come first: most displays are wider than tall.
/// Counts past four still suggest only `Quad`; the selector's
/// degraded-capacity policy truncates placement to quad's four cells.
/// Zero views fall back to `[Single]`.
#[must_use]
pub fn suggest_layouts(view_count: usize) -> &'static [LayoutKind] {
    match view_count {
        1 => &FOR_ONE,
        2 => &FOR_TWO,
        3 => &FOR_THREE,
        n if n >= 4 => &FOR_MANY,
        _ => &FOR_ONE,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
