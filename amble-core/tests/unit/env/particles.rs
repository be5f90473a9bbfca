use super::*;

#[test]
fn rejects_degenerate_specs() {
    let mut empty = ParticleSpec::snow();
    empty.count = 0;
    assert!(ParticleField::new(empty, 1).is_err());

    let mut flat = ParticleSpec::snow();
    flat.top = flat.ground;
    assert!(ParticleField::new(flat, 1).is_err());
}

#[test]
fn positions_are_pure_in_frame_time() {
    let field = ParticleField::new(ParticleSpec::snow(), 77).unwrap();
    for index in [0, 13, 999] {
        let a = field.position_at(index, 500.0);
        let _ = field.position_at(index, 10.0);
        let b = field.position_at(index, 500.0);
        assert_eq!(a, b);
    }
}

#[test]
fn update_matches_pointwise_queries() {
    let mut field = ParticleField::new(ParticleSpec::snow(), 3).unwrap();
    field.update_by_frame_time(123.4);
    for i in (0..field.len()).step_by(97) {
        assert_eq!(field.positions()[i], field.position_at(i, 123.4));
    }
}

#[test]
fn particles_never_sink_below_ground() {
    let spec = ParticleSpec::snow();
    let field = ParticleField::new(spec, 9).unwrap();
    for i in (0..field.len()).step_by(53) {
        for t in [0.0f32, 10.0, 100.0, 1000.0] {
            let p = field.position_at(i, t);
            assert!(p.y >= spec.ground - 1e-3, "particle {i} at t={t} sank to {}", p.y);
            assert!(p.y <= spec.top + 1e-3);
        }
    }
}

#[test]
fn respawn_redraws_lateral_position() {
    let spec = ParticleSpec::snow();
    let field = ParticleField::new(spec, 21).unwrap();
    // Far enough that every particle has cycled at least once.
    let early = field.position_at(0, 0.0);
    let late = field.position_at(0, 10_000.0);
    assert!(early.x != late.x || early.z != late.z);
    // And the respawn is itself reproducible.
    assert_eq!(field.position_at(0, 10_000.0), late);
}

#[test]
fn petals_sway_while_snow_does_not() {
    let snow_spec = ParticleSpec::snow();
    let snow = ParticleField::new(snow_spec, 5).unwrap();
    let petals = ParticleField::new(ParticleSpec::petals(), 5).unwrap();

    // Pick a particle high enough that both samples land in its first
    // descent: snow X is constant there, petal X moves with drift and sway.
    let tall = (0..snow.len())
        .find(|&i| snow.position_at(i, 0.0).y > snow_spec.ground + 10.0)
        .expect("some particle spawns high");
    let s0 = snow.position_at(tall, 0.0);
    let s1 = snow.position_at(tall, 0.5);
    assert_eq!(s0.x, s1.x);
    assert!(s1.y < s0.y, "snow should be falling");

    let tall = (0..petals.len())
        .find(|&i| petals.position_at(i, 0.0).y > -2.0 + 10.0)
        .expect("some petal spawns high");
    let p0 = petals.position_at(tall, 0.0);
    let p1 = petals.position_at(tall, 0.5);
    assert_ne!(p0.x, p1.x);
}

#[test]
fn same_seed_reproduces_the_flurry() {
    let a = ParticleField::new(ParticleSpec::petals(), 1234).unwrap();
    let b = ParticleField::new(ParticleSpec::petals(), 1234).unwrap();
    for i in (0..a.len()).step_by(41) {
        assert_eq!(a.position_at(i, 321.0), b.position_at(i, 321.0));
    }
}
