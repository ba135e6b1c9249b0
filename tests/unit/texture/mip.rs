use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
    px.repeat(width as usize * height as usize)
}

#[test]
fn from_rgba8_validates_shape() {
    assert!(Texture::from_rgba8(0, 4, Vec::new()).is_err());
    assert!(Texture::from_rgba8(4, 0, Vec::new()).is_err());
    assert!(Texture::from_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(Texture::from_rgba8(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn sixteen_square_pyramid_has_five_levels() {
    let mut tex = Texture::from_rgba8(16, 16, solid(16, 16, [8, 8, 8, 255])).unwrap();
    tex.generate_mips(0).unwrap();
    let dims: Vec<(u32, u32)> = tex.levels().iter().map(|l| (l.width, l.height)).collect();
    assert_eq!(dims, [(16, 16), (8, 8), (4, 4), (2, 2), (1, 1)]);
}

#[test]
fn one_by_one_base_is_terminal() {
    let mut tex = Texture::from_rgba8(1, 1, vec![1, 2, 3, 4]).unwrap();
    tex.generate_mips(0).unwrap();
    assert_eq!(tex.levels().len(), 1);
}

#[test]
fn odd_dimensions_round_down_to_minimum_one() {
    let mut tex = Texture::from_rgba8(5, 3, solid(5, 3, [0, 0, 0, 255])).unwrap();
    tex.generate_mips(0).unwrap();
    let dims: Vec<(u32, u32)> = tex.levels().iter().map(|l| (l.width, l.height)).collect();
    assert_eq!(dims, [(5, 3), (2, 1), (1, 1)]);
}

#[test]
fn pyramid_depth_is_bounded() {
    let width = 1 << 15;
    let mut tex = Texture::from_rgba8(width, 1, solid(width, 1, [0, 0, 0, 255])).unwrap();
    tex.generate_mips(0).unwrap();
    assert_eq!(tex.levels().len(), MAX_MIP_LEVELS);
    let last = tex.levels().last().unwrap();
    // 15 halvings would reach 1x1; the depth bound stops at 4x1
    assert_eq!((last.width, last.height), (4, 1));
}

#[test]
fn dimensions_strictly_decrease_past_the_base() {
    let mut tex = Texture::from_rgba8(16, 4, solid(16, 4, [0, 0, 0, 255])).unwrap();
    tex.generate_mips(0).unwrap();
    for pair in tex.levels().windows(2) {
        assert!(
            pair[1].width < pair[0].width || pair[1].height < pair[0].height,
            "levels must shrink"
        );
    }
}

#[test]
fn invalid_start_level_aborts_without_mutation() {
    let mut tex = Texture::from_rgba8(4, 4, solid(4, 4, [9, 9, 9, 255])).unwrap();
    let before = tex.levels().to_vec();
    let err = tex.generate_mips(1).unwrap_err();
    assert!(matches!(err, VexelError::Texture(_)));
    assert_eq!(tex.levels(), &before[..]);
}

#[test]
fn box_filter_averages_each_2x2_block() {
    let texels = vec![
        10, 0, 0, 255, 20, 0, 0, 255, //
        30, 0, 0, 255, 40, 0, 0, 255,
    ];
    let mut tex = Texture::from_rgba8(2, 2, texels).unwrap();
    tex.generate_mips(0).unwrap();
    let top = tex.level(1).unwrap();
    assert_eq!((top.width, top.height), (1, 1));
    assert_eq!(&top.texels[..], &[25, 0, 0, 255]);
}

#[test]
fn box_filter_clamps_footprint_at_odd_edges() {
    // the third texel is outside every 2x2 footprint of the halved level
    let texels = vec![10, 0, 0, 255, 20, 0, 0, 255, 90, 0, 0, 255];
    let mut tex = Texture::from_rgba8(3, 1, texels).unwrap();
    tex.generate_mips(0).unwrap();
    let dims: Vec<(u32, u32)> = tex.levels().iter().map(|l| (l.width, l.height)).collect();
    assert_eq!(dims, [(3, 1), (1, 1)]);
    assert_eq!(&tex.level(1).unwrap().texels[..], &[15, 0, 0, 255]);
}

#[test]
fn generate_from_start_level_rebuilds_sublevels() {
    let mut tex = Texture::from_rgba8(8, 8, solid(8, 8, [0, 0, 0, 255])).unwrap();
    tex.generate_mips(0).unwrap();
    assert_eq!(tex.levels().len(), 4);

    // repaint level 1, then rebuild everything below it
    let red = solid(4, 4, [255, 0, 0, 255]);
    tex.levels[1].texels = red;
    tex.generate_mips(1).unwrap();
    assert_eq!(tex.levels().len(), 4);
    assert_eq!(&tex.level(3).unwrap().texels[..], &[255, 0, 0, 255]);
    // level 0 is untouched
    assert_eq!(tex.level(0).unwrap().texels[0], 0);
}
