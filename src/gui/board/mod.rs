use palette::Srgb;

pub mod canvas;
pub mod model;
pub mod surface;
pub mod view;

pub use canvas::CairoSurface;
pub use model::{BoardGeometry, BoardLayout, LayoutError, Path, PathCommand, Point, RingSpec};
pub use surface::{DrawCommand, RecordingSurface, Surface, TextAlign, TextStyle};
pub use view::SegmentRenderer;

pub const RED: Srgb<u8> = Srgb::new(0xFE, 0x32, 0x06);
pub const GREEN: Srgb<u8> = Srgb::new(0x01, 0xAC, 0x4A);
pub const BLACK: Srgb<u8> = Srgb::new(0x00, 0x00, 0x00);
pub const WHITE: Srgb<u8> = Srgb::new(0xF0, 0xDB, 0xBB);
pub const LABEL_COLOR: Srgb<u8> = Srgb::new(0xFF, 0xFF, 0xFF);

pub const SEGMENT_NUMBERS: [u32; 12] = [20, 5, 15, 10, 20, 5, 15, 10, 20, 5, 15, 10];

/// Bull, outer bull, inner single, triple, outer single, double, number band.
pub static RINGS: [RingSpec; 7] = [
    RingSpec::new(RED, RED, 0.04),
    RingSpec::new(GREEN, GREEN, 0.08),
    RingSpec::new(BLACK, WHITE, 0.3),
    RingSpec::new(RED, GREEN, 0.34),
    RingSpec::new(BLACK, WHITE, 0.64),
    RingSpec::new(RED, GREEN, 0.68),
    RingSpec::new(BLACK, BLACK, 1.0),
];

pub static CLASSIC: BoardLayout = BoardLayout::new(&RINGS, &SEGMENT_NUMBERS);
