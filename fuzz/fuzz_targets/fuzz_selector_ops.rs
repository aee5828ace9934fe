#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use viewgrid_core::Size;
use viewgrid_layout::{CanvasConfig, LayoutKind, LayoutSelector, canvas_size, template};

#[derive(Debug, Arbitrary)]
enum Op {
    SetCount(u8),
    Select(u8),
    Canvas {
        width: f64,
        height: f64,
        view_index: u8,
    },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut sel = LayoutSelector::new();
    let cfg = CanvasConfig::default();

    for op in ops {
        let selection = match op {
            Op::SetCount(n) => sel.update_view_count(n as usize),
            Op::Select(i) => {
                let kind = LayoutKind::ALL[i as usize % LayoutKind::ALL.len()];
                sel.select(kind)
            }
            Op::Canvas {
                width,
                height,
                view_index,
            } => {
                let s = canvas_size(
                    Size::new(width, height),
                    sel.active(),
                    view_index as usize,
                    &cfg,
                );
                assert!(s.width >= cfg.min.width, "width under floor: {s}");
                assert!(s.height >= cfg.min.height, "height under floor: {s}");
                sel.selection()
            }
        };

        // Post-conditions that must always hold:
        let capacity = template(selection.kind).capacity();
        assert_eq!(selection.placed, sel.view_count().min(capacity));
        assert_eq!(selection.degraded, sel.view_count() > capacity);
        assert!(
            sel.view_count() == 0
                || template(sel.active()).accepts(sel.view_count())
                || selection.degraded,
            "active layout silently invalid for {} views",
            sel.view_count()
        );
    }
});
