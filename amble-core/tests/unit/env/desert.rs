use super::*;

#[test]
fn builds_cacti_and_rocks() {
    let desert = DesertEnvironment::new(12345).unwrap();
    assert_eq!(desert.cacti().len(), CACTUS_COUNT);
    assert_eq!(desert.rocks().len(), ROCK_COUNT);
}

#[test]
fn cactus_variants_are_well_formed() {
    let desert = DesertEnvironment::new(7).unwrap();
    for inst in desert.cacti().instances() {
        let p = &inst.params;
        match p.kind {
            CactusKind::Saguaro => {
                assert!((6.0..8.0).contains(&p.height));
                assert!(!p.arms.is_empty() && p.arms.len() <= 3);
            }
            CactusKind::Barrel => {
                assert!((1.2..1.8).contains(&p.radius));
                assert!(p.arms.is_empty());
            }
            CactusKind::PricklyPear => {
                assert!(p.paddles >= 2 && p.paddles <= 3);
            }
        }
        // Cacti keep clear of the path.
        assert!(inst.x.abs() >= 10.0);
    }
}

#[test]
fn rock_formations_cluster_around_their_center() {
    let desert = DesertEnvironment::new(7).unwrap();
    for inst in desert.rocks().instances() {
        let p = &inst.params;
        assert!(p.rocks.len() >= 3 && p.rocks.len() <= 5);
        for rock in &p.rocks {
            assert!(rock.offset.x.abs() <= 1.5 * p.size + 1e-3);
            assert!(rock.offset.y > 0.0);
        }
    }
}

#[test]
fn cactus_loop_matches_spacing_times_count() {
    let desert = DesertEnvironment::new(3).unwrap();
    let inst = &desert.cacti().instances()[0];
    assert_eq!(
        inst.placement.loop_distance(),
        CACTUS_COUNT as f32 * CACTUS_SPACING
    );
    let rock = &desert.rocks().instances()[0];
    assert_eq!(
        rock.placement.loop_distance(),
        ROCK_COUNT as f32 * ROCK_SPACING
    );
}

#[test]
fn mountains_wear_the_desert_palette() {
    let desert = DesertEnvironment::new(3).unwrap();
    assert_eq!(
        desert.mountains().palette().for_tier(MountainTier::Far),
        MountainPalette::desert().far
    );
}
