use super::*;
use crate::foundation::core::Color;

#[test]
fn builds_six_overlapping_segments() {
    let path = PathField::new(Color::from_u32(0x8B4513)).unwrap();
    assert_eq!(path.field().len(), SEGMENT_COUNT);
    for inst in path.field().instances() {
        assert_eq!(inst.params.length, SEGMENT_LENGTH);
        assert_eq!(inst.params.width, PATH_WIDTH);
        assert_eq!(inst.x, 0.0);
    }
}

#[test]
fn loop_distance_covers_the_segment_chain() {
    let path = PathField::new(Color::from_u32(0x8B4513)).unwrap();
    let inst = &path.field().instances()[0];
    let expected = SEGMENT_LENGTH * SEGMENT_COUNT as f32 * SEGMENT_PITCH;
    assert_eq!(inst.placement.loop_distance(), expected);
}

#[test]
fn segments_never_leave_the_centered_window() {
    let mut path = PathField::new(Color::from_u32(0xD3D3D3)).unwrap();
    for step in 0..400 {
        path.update_by_frame(step as f32 * 1.3);
        for inst in path.field().instances() {
            assert!((-96.0..96.0 + 1e-3).contains(&inst.z));
        }
    }
}

#[test]
fn surface_color_is_biome_supplied() {
    let snow = PathField::new(Color::from_u32(0xD3D3D3)).unwrap();
    assert_eq!(snow.surface(), Color::from_u32(0xD3D3D3));
}
