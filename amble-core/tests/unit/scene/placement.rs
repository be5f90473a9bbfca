use super::*;

#[test]
fn rejects_empty_loop_window() {
    assert!(LoopablePlacement::new(0.0, 80.0, -80.0).is_err());
    assert!(LoopablePlacement::new(0.0, 80.0, 80.0).is_err());
}

#[test]
fn position_is_periodic_over_loop_distance() {
    let p = LoopablePlacement::new(12.5, -80.0, 80.0).unwrap();
    let loop_distance = p.loop_distance();
    for d in [0.0f32, 1.0, 37.2, 500.0, 1234.5] {
        let a = p.position_at(d);
        let b = p.position_at(d + loop_distance);
        assert!((a - b).abs() < 1e-3, "period broken at distance {d}");
    }
}

#[test]
fn position_is_pure_in_distance() {
    let p = LoopablePlacement::new(-30.0, -80.0, 80.0).unwrap();
    let a = p.position_at(500.0);
    let _ = p.position_at(10.0);
    let b = p.position_at(500.0);
    assert_eq!(a, b);
}

#[test]
fn positions_stay_inside_window_when_origin_does() {
    let p = LoopablePlacement::new(12.5, -80.0, 80.0).unwrap();
    for i in 0..500 {
        let z = p.position_at(i as f32 * 1.7);
        assert!((-80.0..80.0 + 1e-3).contains(&z));
    }
}

#[test]
fn negative_distance_resolves_through_same_formula() {
    let p = LoopablePlacement::new(0.0, -80.0, 80.0).unwrap();
    // Walking backward by a full loop lands where we started.
    assert!((p.position_at(-160.0) - p.position_at(0.0)).abs() < 1e-3);
    let z = p.position_at(-42.0);
    assert!((-80.0..80.0 + 1e-3).contains(&z));
}

#[test]
fn scroll_speed_scales_effective_distance() {
    let slow = LoopablePlacement::with_speed(0.0, -120.0, 120.0, 0.003).unwrap();
    let fast = LoopablePlacement::with_speed(0.0, -120.0, 120.0, 1.0).unwrap();
    let d = 100.0;
    let slow_moved = (slow.original_z - slow.position_at(d)).abs();
    let fast_moved = (fast.original_z - fast.position_at(d)).abs();
    assert!(slow_moved < fast_moved);
    assert!((slow_moved - 0.3).abs() < 1e-3);
}
