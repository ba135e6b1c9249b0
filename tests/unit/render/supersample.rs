use super::*;
use crate::foundation::core::{Canvas, Color};

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

#[test]
fn new_buffer_is_opaque_white() {
    let buf = SupersampleBuffer::new(canvas(2, 3), 2);
    assert_eq!(buf.width(), 4);
    assert_eq!(buf.height(), 6);
    assert_eq!(buf.cells().len(), 4 * 4 * 6);
    assert!(buf.cells().iter().all(|&b| b == 255));
}

#[test]
fn cell_area_is_square_of_sample_rate_times_target() {
    for rate in [1, 2, 4] {
        let buf = SupersampleBuffer::new(canvas(5, 7), rate);
        let cells = (buf.width() * buf.height()) as usize;
        assert_eq!(cells, (rate * rate) as usize * 5 * 7);
    }
}

#[test]
fn blend_opaque_replaces_rgb_and_forces_alpha() {
    let mut buf = SupersampleBuffer::new(canvas(2, 2), 1);
    buf.blend_sample(1, 0, Color::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(&buf.cells()[4..8], &[255, 0, 0, 255]);
}

#[test]
fn blend_half_alpha_composites_over_white() {
    let mut buf = SupersampleBuffer::new(canvas(1, 1), 1);
    buf.blend_sample(0, 0, Color::new(1.0, 0.0, 0.0, 0.5));
    // r = 1*0.5 + 0.5*1, g = b = 0 + 0.5*1
    assert_eq!(&buf.cells()[0..4], &[255, 128, 128, 255]);
}

#[test]
fn blend_zero_alpha_is_identity() {
    let mut buf = SupersampleBuffer::new(canvas(1, 1), 1);
    buf.blend_sample(0, 0, Color::new(0.2, 0.4, 0.6, 1.0));
    let before = buf.cells().to_vec();
    buf.blend_sample(0, 0, Color::new(1.0, 1.0, 1.0, 0.0));
    assert_eq!(buf.cells(), &before[..]);
}

#[test]
fn blend_out_of_bounds_is_dropped() {
    let mut buf = SupersampleBuffer::new(canvas(2, 2), 1);
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    buf.blend_sample(-1, 0, red);
    buf.blend_sample(0, -1, red);
    buf.blend_sample(2, 0, red);
    buf.blend_sample(0, 2, red);
    assert!(buf.cells().iter().all(|&b| b == 255));
}

#[test]
fn resolve_truncates_fractional_average() {
    let mut buf = SupersampleBuffer::new(canvas(1, 1), 2);
    // red channel cells 1, 2, 2, 2: sum 7, 7 / 4 truncates to 1
    for (i, v) in [1u8, 2, 2, 2].into_iter().enumerate() {
        let color = Color::from_rgba8([v, 0, 0, 255]);
        buf.blend_sample((i % 2) as i64, (i / 2) as i64, color);
    }
    let mut target = [0u8; 4];
    buf.resolve_into(&mut target);
    assert_eq!(target, [1, 0, 0, 255]);
}

#[test]
fn resolve_resets_cells_to_white() {
    let mut buf = SupersampleBuffer::new(canvas(2, 2), 2);
    buf.blend_sample(0, 0, Color::new(0.0, 0.0, 0.0, 1.0));
    let mut target = [0u8; 4 * 4];
    buf.resolve_into(&mut target);
    assert!(buf.cells().iter().all(|&b| b == 255));
}

#[test]
fn resolve_of_untouched_buffer_is_white() {
    for rate in [1, 2, 3] {
        let mut buf = SupersampleBuffer::new(canvas(3, 2), rate);
        let mut target = [0u8; 4 * 6];
        buf.resolve_into(&mut target);
        assert!(target.iter().all(|&b| b == 255), "rate {rate}");
    }
}
