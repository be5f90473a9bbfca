use super::*;

#[test]
fn config_lifts_characters_out_of_the_sand() {
    let config = beach_config();
    assert_eq!(config.character_y_offset, Some(1.2));
    assert_eq!(config.fog_far, 200.0);
}

#[test]
fn builds_all_palm_bands() {
    let beach = BeachEnvironment::new(12345).unwrap();
    assert_eq!(beach.palms().len(), 33);
}

#[test]
fn shore_profile_is_flat_on_the_walking_side() {
    // The walking strip only carries the static sand ripples.
    for x in [-10.0f32, -3.0, 0.0] {
        let h = BeachEnvironment::shore_profile(x, 0.0);
        assert!(h.abs() < 0.1, "walking strip not flat at x={x}: {h}");
    }
    // Past the shoreline the sand slopes down toward the water.
    assert!(BeachEnvironment::shore_profile(20.0, 0.0) < -1.5);
}

#[test]
fn water_surface_is_pure_per_distance() {
    let mut a = BeachEnvironment::new(1).unwrap();
    let mut b = BeachEnvironment::new(1).unwrap();
    a.update_by_frame(321.0);
    b.update_by_frame(55.5);
    b.update_by_frame(321.0);
    assert_eq!(
        a.water_surface_height(5.0, 12.0),
        b.water_surface_height(5.0, 12.0)
    );
    assert_eq!(
        a.horizon_surface_height(30.0, -8.0),
        b.horizon_surface_height(30.0, -8.0)
    );
}

#[test]
fn wave_states_are_deterministic_and_bounded() {
    let mut beach = BeachEnvironment::new(9).unwrap();
    beach.update_by_frame(250.0);
    let first: Vec<WaveState> = beach.wave_states().to_vec();
    beach.update_by_frame(10.0);
    beach.update_by_frame(250.0);
    for (a, b) in first.iter().zip(beach.wave_states()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.opacity, b.opacity);
    }
    for w in beach.wave_states() {
        assert!((0.0..=1.0).contains(&w.opacity));
        assert!(w.scale_y >= 0.1);
        assert!(w.position.y >= -0.8);
    }
}

#[test]
fn tidal_cycle_sweeps_and_hides() {
    let mut beach = BeachEnvironment::new(4).unwrap();
    let mut seen_active = false;
    let mut seen_hidden = false;
    for step in 0..300 {
        beach.update_by_frame(step as f32 * 2.0);
        for t in beach.tidal_states() {
            assert!((0.0..=1.0).contains(&t.scale_x));
            assert!((0.0..=0.4 + 1e-3).contains(&t.opacity));
            if t.opacity > 0.2 {
                seen_active = true;
            }
            if t.opacity == 0.0 {
                seen_hidden = true;
            }
        }
    }
    assert!(seen_active && seen_hidden, "tidal cycle never completed");
}

#[test]
fn seagulls_circle_without_accumulated_state() {
    let mut a = BeachEnvironment::new(2).unwrap();
    let mut b = BeachEnvironment::new(2).unwrap();
    a.update_by_frame(600.0);
    // b reaches the same distance through a different call history.
    for d in [5.0f32, 90.0, 600.0] {
        b.update_by_frame(d);
    }
    for (ga, gb) in a.seagull_states().iter().zip(b.seagull_states()) {
        assert_eq!(ga.position, gb.position);
        assert_eq!(ga.wing_roll, gb.wing_roll);
    }
}

#[test]
fn coastal_mountains_parallax_slowly() {
    let beach = BeachEnvironment::new(11).unwrap();
    for inst in beach.mountains().instances() {
        assert_eq!(inst.placement.scroll_speed, COASTAL_PARALLAX);
        assert!(inst.x < -20.0, "coastal mountains belong on the land side");
    }
}
