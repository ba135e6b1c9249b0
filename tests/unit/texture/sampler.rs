use super::*;

fn assert_close(a: Color, b: Color) {
    for (x, y) in [(a.r, b.r), (a.g, b.g), (a.b, b.b), (a.a, b.a)] {
        assert!((x - y).abs() < 1e-4, "{a:?} != {b:?}");
    }
}

/// 2x2 texture: red, green / blue, white.
fn quad() -> Texture {
    let texels = vec![
        255, 0, 0, 255, 0, 255, 0, 255, //
        0, 0, 255, 255, 255, 255, 255, 255,
    ];
    Texture::from_rgba8(2, 2, texels).unwrap()
}

/// Hand-built two-level pyramid: solid red base, solid blue top.
fn red_over_blue() -> Texture {
    Texture {
        levels: vec![
            MipLevel {
                width: 2,
                height: 2,
                texels: [255, 0, 0, 255].repeat(4),
            },
            MipLevel {
                width: 1,
                height: 1,
                texels: vec![0, 0, 255, 255],
            },
        ],
    }
}

#[test]
fn invalid_level_yields_sentinel() {
    let tex = quad();
    assert_eq!(sample_nearest(&tex, 0.5, 0.5, 3), INVALID_SAMPLE);
    assert_eq!(sample_bilinear(&tex, 0.5, 0.5, 3), INVALID_SAMPLE);
}

#[test]
fn nearest_out_of_bounds_uv_yields_sentinel() {
    let tex = quad();
    assert_eq!(sample_nearest(&tex, 1.5, 0.5, 0), INVALID_SAMPLE);
    assert_eq!(sample_nearest(&tex, 0.5, -0.25, 0), INVALID_SAMPLE);
}

#[test]
fn nearest_picks_the_enclosing_texel() {
    let tex = quad();
    assert_eq!(sample_nearest(&tex, 0.25, 0.25, 0), Color::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(sample_nearest(&tex, 0.75, 0.25, 0), Color::new(0.0, 1.0, 0.0, 1.0));
    assert_eq!(sample_nearest(&tex, 0.25, 0.75, 0), Color::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(sample_nearest(&tex, 0.75, 0.75, 0), Color::WHITE);
}

#[test]
fn bilinear_matches_nearest_at_texel_centers() {
    // 4x4 gradient so neighboring texels all differ
    let mut texels = Vec::new();
    for y in 0..4u8 {
        for x in 0..4u8 {
            texels.extend([16 * (x + 4 * y), 255 - 16 * (x + 4 * y), 7, 255]);
        }
    }
    let tex = Texture::from_rgba8(4, 4, texels).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            let u = (x as f32 + 0.5) / 4.0;
            let v = (y as f32 + 0.5) / 4.0;
            assert_close(sample_bilinear(&tex, u, v, 0), sample_nearest(&tex, u, v, 0));
        }
    }
}

#[test]
fn bilinear_blends_neighbor_texels_at_midpoints() {
    let texels = vec![0, 0, 0, 255, 255, 0, 0, 255];
    let tex = Texture::from_rgba8(2, 1, texels).unwrap();
    let mid = sample_bilinear(&tex, 0.5, 0.5, 0);
    assert_close(mid, Color::new(0.5, 0.0, 0.0, 1.0));
}

#[test]
fn bilinear_clamps_filter_footprint_at_edges() {
    let tex = quad();
    // u = v = 1.0 sits past the last texel center; the footprint clamps to
    // the corner texel
    assert_close(sample_bilinear(&tex, 1.0, 1.0, 0), Color::WHITE);
}

#[test]
fn trilinear_magnification_matches_base_bilinear() {
    let tex = quad();
    let (u, v) = (0.4, 0.6);
    assert_close(
        sample_trilinear(&tex, u, v, 1.0 / 2.0, 1.0 / 2.0),
        sample_bilinear(&tex, u, v, 0),
    );
}

#[test]
fn trilinear_blends_bracketing_levels() {
    let tex = red_over_blue();
    // footprint sqrt(2) texels per pixel: level of detail 0.5
    let scale = std::f32::consts::SQRT_2 / 2.0;
    let c = sample_trilinear(&tex, 0.5, 0.5, scale, scale);
    assert_close(c, Color::new(0.5, 0.0, 0.5, 1.0));
}

#[test]
fn trilinear_at_whole_lod_uses_that_level() {
    let tex = red_over_blue();
    // footprint 2 texels per pixel: level of detail exactly 1
    let c = sample_trilinear(&tex, 0.5, 0.5, 1.0, 1.0);
    assert_close(c, Color::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn trilinear_lod_beyond_pyramid_yields_sentinel() {
    let tex = quad();
    // footprint 8 texels per pixel wants level 3 of a single-level pyramid
    assert_eq!(sample_trilinear(&tex, 0.5, 0.5, 4.0, 4.0), INVALID_SAMPLE);
}

#[test]
fn trilinear_uses_larger_of_the_two_footprints() {
    let tex = red_over_blue();
    // v footprint dominates and selects level 1
    let c = sample_trilinear(&tex, 0.5, 0.5, 0.01, 1.0);
    assert_close(c, Color::new(0.0, 0.0, 1.0, 1.0));
}
