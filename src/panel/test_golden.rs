//! Golden full-frame renders through the headless [`TextSurface`].
//!
//! Frames are asserted line-by-line against literal expectations, so any
//! drift in column math, header centering, or value formatting shows up as a
//! readable diff.

use crate::panel::compact::render_compact;
use crate::panel::gauge_page::render_engine_page;
use crate::panel::catalog::build_layout;
use crate::panel::surface::{PageGeometry, TextSurface};
use crate::panel::theme::Theme;
use crate::telemetry::snapshot::EngineSnapshot;

const ORIN_SNAPSHOT: &str = r#"{
    "board": { "model": "NVIDIA Jetson AGX Orin Developer Kit" },
    "engine": {
        "APE":   { "APE": { "status": true, "curr": 281600, "unit": "k", "max": 281600 } },
        "PVA0":  { "PVA0_CPU_AXI": { "status": true, "curr": 115200, "unit": "k", "max": 115200 } },
        "DLA0":  { "DLA0_CORE": { "status": true, "curr": 1600000, "unit": "k", "max": 1600000 } },
        "DLA1":  { "DLA1_CORE": { "status": true, "curr": 1600000, "unit": "k", "max": 1600000 } },
        "NVENC": { "NVENC": { "status": true, "curr": 729600, "unit": "k", "max": 729600 } },
        "NVDEC": { "NVDEC": { "status": true, "curr": 857600, "unit": "k", "max": 857600 } },
        "NVJPG": {
            "NVJPG":  { "status": true, "curr": 729600, "unit": "k", "max": 729600 },
            "NVJPG1": { "status": false, "curr": 0, "unit": "k" }
        },
        "SE":    { "SE": { "status": true, "curr": 614400, "unit": "k", "max": 614400 } },
        "VIC":   { "VIC": { "status": true, "curr": 729600, "unit": "k", "max": 729600 } }
    }
}"#;

#[test]
fn compact_agx_orin_frame_is_stable() {
    let snapshot = EngineSnapshot::from_json_str(ORIN_SNAPSHOT).expect("golden snapshot parses");
    let layout = build_layout(&snapshot.board, &snapshot.engine).expect("curated layout");
    let mut surface = TextSurface::new(40, 7);
    let consumed = render_compact(&mut surface, 0, 0, 40, &layout, &Theme::default());
    assert_eq!(consumed, 6);

    let expected = [
        " ──────────── [HW engines] ─────────────",
        " APE: 281.6MHz       PVA0a: 115.2MHz",
        " DLA0c: 1.6GHz       DLA1c: 1.6GHz",
        " NVENC: 729.6MHz     NVDEC: 857.6MHz",
        " NVJPG: 729.6MHz     NVJPG1: [OFF]",
        " SE: 614.4MHz        VIC: 729.6MHz",
        "",
    ];
    assert_eq!(surface.lines(), expected);
}

#[test]
fn gauge_page_single_engine_frame_is_stable() {
    let snapshot = EngineSnapshot::from_json_str(
        r#"{
            "board": { "model": "custom" },
            "engine": {
                "APE": { "APE": { "status": true, "curr": 281600, "unit": "k", "max": 281600 } }
            }
        }"#,
    )
    .expect("snapshot parses");
    let mut surface = TextSurface::new(20, 6);
    render_engine_page(
        &mut surface,
        PageGeometry::new(6, 20, 0),
        &snapshot.engine,
        &Theme::default(),
    );

    let expected = ["", "", "", " APE [|||281.6MHz]", "", ""];
    assert_eq!(surface.lines(), expected);
}

#[test]
fn unknown_board_compact_frame_lists_every_group() {
    let snapshot = EngineSnapshot::from_json_str(
        r#"{
            "board": { "model": "prototype-board-7" },
            "engine": {
                "VPU": {
                    "VPU_ENC": { "status": true, "curr": 500000, "unit": "k" },
                    "VPU_DEC": { "status": false, "curr": 0, "unit": "k" }
                },
                "ISP": { "ISP": { "status": true, "curr": 85, "unit": "%" } }
            }
        }"#,
    )
    .expect("snapshot parses");
    let layout = build_layout(&snapshot.board, &snapshot.engine).expect("fallback layout");
    let mut surface = TextSurface::new(48, 4);
    let consumed = render_compact(&mut surface, 0, 0, 48, &layout, &Theme::default());
    assert_eq!(consumed, 3);
    assert!(surface.line(1).contains("VPU_ENC: 500MHz"));
    assert!(surface.line(1).contains("VPU_DEC: [OFF]"));
    assert!(surface.line(2).contains("ISP: 85%"));
}
