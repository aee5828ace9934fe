#![no_main]

use libfuzzer_sys::fuzz_target;
use viewgrid_layout::{CellSpan, GridTemplate};

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary strings to the class parsers.
    // Parsing must never panic regardless of input.
    let Ok(class) = std::str::from_utf8(data) else {
        return;
    };

    // Accepted grids are well-formed and survive a render round trip.
    if let Ok(grid) = GridTemplate::parse_class(class) {
        assert!(grid.cols >= 1 && grid.rows >= 1, "zero axis accepted");
        assert_eq!(GridTemplate::parse_class(&grid.class_string()), Ok(grid));
    }

    if let Ok(span) = CellSpan::parse_class(class) {
        assert!(span.col >= 1 && span.row >= 1, "zero span accepted");
        assert_eq!(CellSpan::parse_class(&span.class_string()), Ok(span));
    }
});
