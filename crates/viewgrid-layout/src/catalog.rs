#![forbid(unsafe_code)]

//! Layout template catalog.
//!
//! Ten grid templates cover every supported view count. Each template fixes
//! a column/row grid and an ordered list of cell spans, one per placeable
//! view. The catalog is immutable static data; there is no runtime
//! registration.
//!
//! # Usage
//!
//! ```ignore
//! use viewgrid_layout::catalog::{template, LayoutKind};
//!
//! let t = template(LayoutKind::Triple2T1B);
//! assert_eq!(t.grid.cols, 2);
//! assert_eq!(t.capacity(), 3);
//! ```
//!
//! # Invariants
//!
//! 1. `cell_spans.len() == max_views` for every template.
//! 2. `min_views <= max_views`, both >= 1.
//! 3. Every span fits inside the template's grid and is >= 1 on both axes.
//! 4. `CATALOG[i].kind` is the i-th [`LayoutKind`] in declaration order;
//!    declaration order is also the suggestion order within a family.
//!
//! [`validate_catalog`] checks all of these and is cheap enough to run at
//! embedder startup.

use serde::{Deserialize, Serialize};

/// Identifier of a layout template.
///
/// Declaration order is load-bearing: suggestion lists are contiguous
/// slices of this order (horizontal before vertical, symmetric triples
/// before the 2+1 arrangements).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LayoutKind {
    /// One view filling the container.
    #[serde(rename = "single")]
    Single,
    /// Two views side by side.
    #[serde(rename = "double-horizontal")]
    DoubleHorizontal,
    /// Two views stacked.
    #[serde(rename = "double-vertical")]
    DoubleVertical,
    /// Three views side by side.
    #[serde(rename = "triple-horizontal")]
    TripleHorizontal,
    /// Three views stacked.
    #[serde(rename = "triple-vertical")]
    TripleVertical,
    /// Two views on top, one spanning the bottom.
    #[serde(rename = "triple-2T-1B")]
    Triple2T1B,
    /// One view spanning the top, two on the bottom.
    #[serde(rename = "triple-1T-2B")]
    Triple1T2B,
    /// Two views on the left, one spanning the right.
    #[serde(rename = "triple-2L-1R")]
    Triple2L1R,
    /// One view spanning the left, two on the right.
    #[serde(rename = "triple-1L-2R")]
    Triple1L2R,
    /// Four views in a 2x2 grid.
    #[serde(rename = "quad")]
    Quad,
}

impl LayoutKind {
    /// All kinds in declaration order.
    pub const ALL: [LayoutKind; 10] = [
        LayoutKind::Single,
        LayoutKind::DoubleHorizontal,
        LayoutKind::DoubleVertical,
        LayoutKind::TripleHorizontal,
        LayoutKind::TripleVertical,
        LayoutKind::Triple2T1B,
        LayoutKind::Triple1T2B,
        LayoutKind::Triple2L1R,
        LayoutKind::Triple1L2R,
        LayoutKind::Quad,
    ];

    /// Position in declaration order; indexes [`CATALOG`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable string id, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::DoubleHorizontal => "double-horizontal",
            Self::DoubleVertical => "double-vertical",
            Self::TripleHorizontal => "triple-horizontal",
            Self::TripleVertical => "triple-vertical",
            Self::Triple2T1B => "triple-2T-1B",
            Self::Triple1T2B => "triple-1T-2B",
            Self::Triple2L1R => "triple-2L-1R",
            Self::Triple1L2R => "triple-1L-2R",
            Self::Quad => "quad",
        }
    }

    /// The family this kind belongs to.
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::Single => Family::Single,
            Self::DoubleHorizontal | Self::DoubleVertical => Family::Double,
            Self::TripleHorizontal
            | Self::TripleVertical
            | Self::Triple2T1B
            | Self::Triple1T2B
            | Self::Triple2L1R
            | Self::Triple1L2R => Family::Triple,
            Self::Quad => Family::Quad,
        }
    }
}

impl std::fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LayoutKind {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownLayout(s.to_string()))
    }
}

/// Error for parsing an unrecognized layout id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLayout(pub String);

impl std::fmt::Display for UnknownLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown layout id: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLayout {}

/// Capacity family of a layout, derived from its natural view count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// One view.
    Single,
    /// Two views.
    Double,
    /// Three views.
    Triple,
    /// Four views.
    Quad,
}

impl Family {
    /// The natural family for a view count, if it has one.
    ///
    /// Zero views have no family; counts past four share `Quad`.
    #[must_use]
    pub const fn of_count(count: usize) -> Option<Family> {
        match count {
            0 => None,
            1 => Some(Family::Single),
            2 => Some(Family::Double),
            3 => Some(Family::Triple),
            _ => Some(Family::Quad),
        }
    }

    /// The default kind adopted when switching into this family.
    #[must_use]
    pub const fn default_kind(self) -> LayoutKind {
        match self {
            Family::Single => LayoutKind::Single,
            Family::Double => LayoutKind::DoubleHorizontal,
            Family::Triple => LayoutKind::TripleHorizontal,
            Family::Quad => LayoutKind::Quad,
        }
    }
}

/// Column/row counts of a template's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridTemplate {
    /// Number of columns, >= 1.
    pub cols: u8,
    /// Number of rows, >= 1.
    pub rows: u8,
}

impl GridTemplate {
    /// Create a grid template.
    #[inline]
    #[must_use]
    pub const fn new(cols: u8, rows: u8) -> Self {
        Self { cols, rows }
    }
}

/// How many columns and rows one view's cell covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSpan {
    /// Columns covered, >= 1.
    pub col: u8,
    /// Rows covered, >= 1.
    pub row: u8,
}

impl CellSpan {
    /// A 1x1 span.
    pub const ONE: CellSpan = CellSpan { col: 1, row: 1 };

    /// Create a span.
    #[inline]
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

/// A complete layout template: grid shape, per-view spans, and the view
/// count range the template is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutTemplate {
    /// Which kind this template describes.
    pub kind: LayoutKind,
    /// Grid shape.
    pub grid: GridTemplate,
    /// Spans indexed by view position. Length equals `max_views`.
    pub cell_spans: &'static [CellSpan],
    /// Smallest view count this template is intended for.
    pub min_views: u8,
    /// Largest view count this template can place.
    pub max_views: u8,
    /// Opaque i18n key for the template's description.
    pub description_key: &'static str,
}

impl LayoutTemplate {
    /// Number of views this template can place.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.cell_spans.len()
    }

    /// Whether a view count falls inside the intended range.
    #[inline]
    #[must_use]
    pub const fn accepts(&self, view_count: usize) -> bool {
        view_count >= self.min_views as usize && view_count <= self.max_views as usize
    }

    /// Span for a view position, if the position is placeable.
    #[inline]
    #[must_use]
    pub fn span(&self, view_index: usize) -> Option<CellSpan> {
        self.cell_spans.get(view_index).copied()
    }
}

const SPAN_1X1: CellSpan = CellSpan::ONE;
const SPAN_2COL: CellSpan = CellSpan::new(2, 1);
const SPAN_2ROW: CellSpan = CellSpan::new(1, 2);

/// The static template table, indexed by [`LayoutKind::index`].
pub static CATALOG: [LayoutTemplate; 10] = [
    LayoutTemplate {
        kind: LayoutKind::Single,
        grid: GridTemplate::new(1, 1),
        cell_spans: &[SPAN_1X1],
        min_views: 1,
        max_views: 1,
        description_key: "layoutSingle",
    },
    LayoutTemplate {
        kind: LayoutKind::DoubleHorizontal,
        grid: GridTemplate::new(2, 1),
        cell_spans: &[SPAN_1X1, SPAN_1X1],
        min_views: 2,
        max_views: 2,
        description_key: "layoutDoubleHorizontal",
    },
    LayoutTemplate {
        kind: LayoutKind::DoubleVertical,
        grid: GridTemplate::new(1, 2),
        cell_spans: &[SPAN_1X1, SPAN_1X1],
        min_views: 2,
        max_views: 2,
        description_key: "layoutDoubleVertical",
    },
    LayoutTemplate {
        kind: LayoutKind::TripleHorizontal,
        grid: GridTemplate::new(3, 1),
        cell_spans: &[SPAN_1X1, SPAN_1X1, SPAN_1X1],
        min_views: 3,
        max_views: 3,
        description_key: "layoutTripleHorizontal",
    },
    LayoutTemplate {
        kind: LayoutKind::TripleVertical,
        grid: GridTemplate::new(1, 3),
        cell_spans: &[SPAN_1X1, SPAN_1X1, SPAN_1X1],
        min_views: 3,
        max_views: 3,
        description_key: "layoutTripleVertical",
    },
    LayoutTemplate {
        kind: LayoutKind::Triple2T1B,
        grid: GridTemplate::new(2, 2),
        // top-left, top-right, bottom spanning both columns
        cell_spans: &[SPAN_1X1, SPAN_1X1, SPAN_2COL],
        min_views: 3,
        max_views: 3,
        description_key: "layoutTriple2T1B",
    },
    LayoutTemplate {
        kind: LayoutKind::Triple1T2B,
        grid: GridTemplate::new(2, 2),
        // top spanning both columns, bottom-left, bottom-right
        cell_spans: &[SPAN_2COL, SPAN_1X1, SPAN_1X1],
        min_views: 3,
        max_views: 3,
        description_key: "layoutTriple1T2B",
    },
    LayoutTemplate {
        kind: LayoutKind::Triple2L1R,
        grid: GridTemplate::new(2, 2),
        // top-left, bottom-left, right spanning both rows
        cell_spans: &[SPAN_1X1, SPAN_1X1, SPAN_2ROW],
        min_views: 3,
        max_views: 3,
        description_key: "layoutTriple2L1R",
    },
    LayoutTemplate {
        kind: LayoutKind::Triple1L2R,
        grid: GridTemplate::new(2, 2),
        // left spanning both rows, top-right, bottom-right
        cell_spans: &[SPAN_2ROW, SPAN_1X1, SPAN_1X1],
        min_views: 3,
        max_views: 3,
        description_key: "layoutTriple1L2R",
    },
    LayoutTemplate {
        kind: LayoutKind::Quad,
        grid: GridTemplate::new(2, 2),
        cell_spans: &[SPAN_1X1, SPAN_1X1, SPAN_1X1, SPAN_1X1],
        min_views: 4,
        max_views: 4,
        description_key: "layoutQuad",
    },
];

/// Look up the template for a kind.
#[inline]
#[must_use]
pub fn template(kind: LayoutKind) -> &'static LayoutTemplate {
    &CATALOG[kind.index()]
}

/// Catalog self-check failures.
///
/// The catalog is static data, so a failure here is a programming error in
/// this crate, not embedder input. Still surfaced as a `Result` so startup
/// code can refuse to run on a corrupted build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// `CATALOG[i].kind` is not the i-th kind in declaration order.
    MisorderedEntry { expected: LayoutKind, found: LayoutKind },
    /// `cell_spans.len()` differs from `max_views`.
    SpanCountMismatch { kind: LayoutKind, spans: usize, max_views: u8 },
    /// `min_views > max_views` or a bound is zero.
    InvalidRange { kind: LayoutKind, min_views: u8, max_views: u8 },
    /// The grid has a zero axis.
    DegenerateGrid { kind: LayoutKind },
    /// A span is zero on some axis.
    ZeroSpan { kind: LayoutKind, view_index: usize },
    /// A span covers more columns or rows than the grid has.
    SpanExceedsGrid { kind: LayoutKind, view_index: usize },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MisorderedEntry { expected, found } => {
                write!(f, "catalog entry out of order: expected {expected}, found {found}")
            }
            Self::SpanCountMismatch {
                kind,
                spans,
                max_views,
            } => write!(
                f,
                "{kind}: {spans} cell spans but max_views is {max_views}"
            ),
            Self::InvalidRange {
                kind,
                min_views,
                max_views,
            } => write!(f, "{kind}: invalid view range [{min_views}, {max_views}]"),
            Self::DegenerateGrid { kind } => write!(f, "{kind}: grid has a zero axis"),
            Self::ZeroSpan { kind, view_index } => {
                write!(f, "{kind}: span for view {view_index} is zero")
            }
            Self::SpanExceedsGrid { kind, view_index } => {
                write!(f, "{kind}: span for view {view_index} exceeds the grid")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Check every catalog invariant, returning the first violation.
pub fn validate_catalog() -> Result<(), CatalogError> {
    for (i, t) in CATALOG.iter().enumerate() {
        let expected = LayoutKind::ALL[i];
        if t.kind != expected {
            return Err(CatalogError::MisorderedEntry {
                expected,
                found: t.kind,
            });
        }
        if t.min_views == 0 || t.min_views > t.max_views {
            return Err(CatalogError::InvalidRange {
                kind: t.kind,
                min_views: t.min_views,
                max_views: t.max_views,
            });
        }
        if t.grid.cols == 0 || t.grid.rows == 0 {
            return Err(CatalogError::DegenerateGrid { kind: t.kind });
        }
        if t.cell_spans.len() != t.max_views as usize {
            return Err(CatalogError::SpanCountMismatch {
                kind: t.kind,
                spans: t.cell_spans.len(),
                max_views: t.max_views,
            });
        }
        for (view_index, span) in t.cell_spans.iter().enumerate() {
            if span.col == 0 || span.row == 0 {
                return Err(CatalogError::ZeroSpan {
                    kind: t.kind,
                    view_index,
                });
            }
            if span.col > t.grid.cols || span.row > t.grid.rows {
                return Err(CatalogError::SpanExceedsGrid {
                    kind: t.kind,
                    view_index,
                });
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_valid() {
        assert_eq!(validate_catalog(), Ok(()));
    }

    #[test]
    fn template_lookup_matches_kind() {
        for kind in LayoutKind::ALL {
            assert_eq!(template(kind).kind, kind);
        }
    }

    #[test]
    fn span_count_equals_max_views() {
        for t in &CATALOG {
            assert_eq!(t.capacity(), t.max_views as usize, "{}", t.kind);
        }
    }

    #[test]
    fn single_fills_grid() {
        let t = template(LayoutKind::Single);
        assert_eq!(t.grid, GridTemplate::new(1, 1));
        assert_eq!(t.cell_spans, &[CellSpan::ONE]);
        assert!(t.accepts(1));
        assert!(!t.accepts(0));
        assert!(!t.accepts(2));
    }

    #[test]
    fn doubles_split_one_axis() {
        let h = template(LayoutKind::DoubleHorizontal);
        assert_eq!(h.grid, GridTemplate::new(2, 1));
        let v = template(LayoutKind::DoubleVertical);
        assert_eq!(v.grid, GridTemplate::new(1, 2));
    }

    #[test]
    fn asymmetric_triples_span_correctly() {
        let t = template(LayoutKind::Triple2T1B);
        assert_eq!(t.span(2), Some(CellSpan::new(2, 1)));

        let t = template(LayoutKind::Triple1T2B);
        assert_eq!(t.span(0), Some(CellSpan::new(2, 1)));

        let t = template(LayoutKind::Triple2L1R);
        assert_eq!(t.span(2), Some(CellSpan::new(1, 2)));

        let t = template(LayoutKind::Triple1L2R);
        assert_eq!(t.span(0), Some(CellSpan::new(1, 2)));
    }

    #[test]
    fn span_out_of_range_is_none() {
        assert_eq!(template(LayoutKind::Quad).span(4), None);
        assert_eq!(template(LayoutKind::Single).span(1), None);
    }

    #[test]
    fn families_partition_kinds() {
        assert_eq!(LayoutKind::Single.family(), Family::Single);
        assert_eq!(LayoutKind::DoubleVertical.family(), Family::Double);
        assert_eq!(LayoutKind::Triple1L2R.family(), Family::Triple);
        assert_eq!(LayoutKind::Quad.family(), Family::Quad);
    }

    #[test]
    fn family_of_count() {
        assert_eq!(Family::of_count(0), None);
        assert_eq!(Family::of_count(1), Some(Family::Single));
        assert_eq!(Family::of_count(2), Some(Family::Double));
        assert_eq!(Family::of_count(3), Some(Family::Triple));
        assert_eq!(Family::of_count(4), Some(Family::Quad));
        assert_eq!(Family::of_count(17), Some(Family::Quad));
    }

    #[test]
    fn family_defaults_prefer_horizontal() {
        assert_eq!(Family::Double.default_kind(), LayoutKind::DoubleHorizontal);
        assert_eq!(Family::Triple.default_kind(), LayoutKind::TripleHorizontal);
    }

    #[test]
    fn kind_string_round_trip() {
        for kind in LayoutKind::ALL {
            let parsed: LayoutKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("triple-diagonal".parse::<LayoutKind>().is_err());
    }

    #[test]
    fn kind_serde_uses_original_ids() {
        let json = serde_json::to_string(&LayoutKind::Triple2T1B).unwrap();
        assert_eq!(json, "\"triple-2T-1B\"");
        let back: LayoutKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LayoutKind::Triple2T1B);
    }

    #[test]
    fn description_keys_are_unique() {
        use std::collections::HashSet;
        let keys: HashSet<_> = CATALOG.iter().map(|t| t.description_key).collect();
        assert_eq!(keys.len(), CATALOG.len());
    }
}
