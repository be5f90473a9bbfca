use super::*;
use crate::character::style::CharacterStyle;

#[test]
fn build_is_pure_given_a_style() {
    let style = CharacterStyle::alex();
    let a = CharacterRig::build(&style);
    let b = CharacterRig::build(&style);
    assert_eq!(a.groups.len(), b.groups.len());
    for (ga, gb) in a.groups.iter().zip(&b.groups) {
        assert_eq!(ga.part, gb.part);
        assert_eq!(ga.pivot, gb.pivot);
        assert_eq!(ga.pieces.len(), gb.pieces.len());
        for (pa, pb) in ga.pieces.iter().zip(&gb.pieces) {
            assert_eq!(pa.primitive, pb.primitive);
            assert_eq!(pa.material, pb.material);
            assert_eq!(pa.offset, pb.offset);
        }
    }
}

#[test]
fn every_articulated_part_is_present() {
    let rig = CharacterRig::build(&CharacterStyle::alex());
    for part in [
        RigPart::Head,
        RigPart::Mouth,
        RigPart::LeftArm,
        RigPart::RightArm,
        RigPart::LeftForearm,
        RigPart::RightForearm,
        RigPart::LeftLeg,
        RigPart::RightLeg,
        RigPart::LeftShoe,
        RigPart::RightShoe,
    ] {
        assert!(rig.group(part).is_some(), "missing {part:?}");
    }
}

#[test]
fn style_colors_flow_into_materials() {
    let style = CharacterStyle::maya();
    let rig = CharacterRig::build(&style);
    assert_eq!(rig.torso[0].material.color, style.primary_color);
    assert_eq!(rig.torso[1].material.color, style.secondary_color);
}

#[test]
fn feminine_proportions_narrow_the_frame() {
    let male = CharacterRig::build(&CharacterStyle::alex());
    let female = CharacterRig::build(&CharacterStyle::maya());

    let male_shoulder = male.group(RigPart::RightArm).unwrap().pivot.x;
    let female_shoulder = female.group(RigPart::RightArm).unwrap().pivot.x;
    assert!(female_shoulder < male_shoulder);

    let male_head = match male.group(RigPart::Head).unwrap().pieces[0].primitive {
        Primitive::Sphere { radius } => radius,
        _ => panic!("head should start with the skull sphere"),
    };
    let female_head = match female.group(RigPart::Head).unwrap().pieces[0].primitive {
        Primitive::Sphere { radius } => radius,
        _ => panic!("head should start with the skull sphere"),
    };
    assert!(female_head < male_head);
}

#[test]
fn legs_and_shoes_mirror_left_right() {
    let rig = CharacterRig::build(&CharacterStyle::alex());
    let left = rig.group(RigPart::LeftLeg).unwrap().pivot;
    let right = rig.group(RigPart::RightLeg).unwrap().pivot;
    assert_eq!(left.x, -right.x);
    let left_shoe = rig.group(RigPart::LeftShoe).unwrap().pivot;
    assert_eq!(left_shoe.y, -1.25);
}
