use super::*;

#[test]
fn builds_requested_population() {
    let field = TreeField::new(60, -80.0, 80.0, 12345).unwrap();
    assert_eq!(field.field().len(), 60);
}

#[test]
fn same_seed_reproduces_same_forest() {
    let a = TreeField::new(30, -80.0, 80.0, 42).unwrap();
    let b = TreeField::new(30, -80.0, 80.0, 42).unwrap();
    for (ia, ib) in a.field().instances().iter().zip(b.field().instances()) {
        assert_eq!(ia.params.kind, ib.params.kind);
        assert_eq!(ia.params.trunk_height, ib.params.trunk_height);
        assert_eq!(ia.x, ib.x);
    }
}

#[test]
fn dimensions_stay_inside_variant_ranges() {
    let field = TreeField::new(60, -80.0, 80.0, 7).unwrap();
    for inst in field.field().instances() {
        let p = &inst.params;
        match p.kind {
            TreeKind::TallJungle => {
                assert!((8.0..20.0).contains(&p.trunk_height));
                assert!((0.4..1.0).contains(&p.trunk_radius));
                assert!(p.vine_lengths.is_empty());
            }
            TreeKind::BroadJungle => {
                assert!((7.0..15.0).contains(&p.trunk_height));
                assert!((4.0..6.0).contains(&p.canopy_radius));
            }
            TreeKind::VineCovered => {
                assert_eq!(p.vine_lengths.len(), 3);
                assert!(p.vine_lengths.iter().all(|v| (1.0..3.0).contains(v)));
            }
        }
        assert!(p.trunk_color < TRUNK_COLORS.len());
        assert!(p.foliage_color < FOLIAGE_COLORS.len());
    }
}

#[test]
fn trees_flank_the_path_not_block_it() {
    let field = TreeField::new(60, -80.0, 80.0, 9).unwrap();
    for inst in field.field().instances() {
        // Trees sit at least half a path-width from the center line.
        assert!(inst.x.abs() > 0.5, "tree at x={} blocks the path", inst.x);
        assert_eq!(inst.y, -1.3);
    }
}

#[test]
fn snowy_dressing_caps_and_recolors() {
    let field = TreeField::snowy(30, -80.0, 80.0, 42).unwrap();
    assert!(field.field().instances().iter().all(|i| i.params.snow_capped));
    assert!(field.palette().snow_cap.is_some());
    assert!(field.palette().trunk_override.is_some());
}

#[test]
fn snowy_keeps_base_placement() {
    let plain = TreeField::new(30, -80.0, 80.0, 42).unwrap();
    let snowy = TreeField::snowy(30, -80.0, 80.0, 42).unwrap();
    for (a, b) in plain
        .field()
        .instances()
        .iter()
        .zip(snowy.field().instances())
    {
        assert_eq!(a.x, b.x);
        assert_eq!(a.placement.original_z, b.placement.original_z);
        assert_eq!(a.params.trunk_height, b.params.trunk_height);
    }
}
