use super::*;
use crate::foundation::core::Vec3;

fn scatter(count: usize, seed: u32) -> Field<f32> {
    Field::generate(count, -80.0, 80.0, seed, |rng, i| {
        let height = rng.range(8.0, 20.0);
        let x = rng.sign() * rng.range(3.0, 23.0);
        let z = (i as f32 - count as f32 / 2.0) * 6.0;
        Spawn::new(height, Vec3::new(x, -1.3, z))
    })
    .unwrap()
}

#[test]
fn zero_count_is_a_config_error() {
    let r = Field::<f32>::generate(0, -80.0, 80.0, 1, |_rng, _i| {
        Spawn::new(0.0, Vec3::ZERO)
    });
    assert!(r.is_err());
}

#[test]
fn empty_loop_window_is_a_config_error() {
    let r = Field::<f32>::generate(4, 80.0, -80.0, 1, |_rng, _i| Spawn::new(0.0, Vec3::ZERO));
    assert!(r.is_err());
}

#[test]
fn same_seed_reproduces_same_layout() {
    let a = scatter(60, 12345);
    let b = scatter(60, 12345);
    for (ia, ib) in a.instances().iter().zip(b.instances()) {
        assert_eq!(ia.params, ib.params);
        assert_eq!(ia.x, ib.x);
        assert_eq!(ia.placement.original_z, ib.placement.original_z);
    }
}

#[test]
fn adjacent_seeds_produce_different_layouts() {
    let a = scatter(60, 12345);
    let b = scatter(60, 12346);
    let differs = a
        .instances()
        .iter()
        .zip(b.instances())
        .any(|(ia, ib)| ia.params != ib.params || ia.x != ib.x);
    assert!(differs);
}

#[test]
fn update_is_idempotent() {
    let mut f = scatter(20, 7);
    f.update_by_frame(123.0);
    let first: Vec<f32> = f.instances().iter().map(|i| i.z).collect();
    f.update_by_frame(123.0);
    let second: Vec<f32> = f.instances().iter().map(|i| i.z).collect();
    assert_eq!(first, second);
}

#[test]
fn update_is_order_independent() {
    let mut forward = scatter(20, 7);
    let mut shuffled = scatter(20, 7);

    forward.update_by_frame(500.0);
    let at_500: Vec<f32> = forward.instances().iter().map(|i| i.z).collect();

    shuffled.update_by_frame(10.0);
    shuffled.update_by_frame(999.0);
    shuffled.update_by_frame(500.0);
    let replayed: Vec<f32> = shuffled.instances().iter().map(|i| i.z).collect();

    assert_eq!(at_500, replayed);
}

#[test]
fn position_at_matches_update() {
    let mut f = scatter(20, 7);
    f.update_by_frame(77.7);
    for (i, inst) in f.instances().iter().enumerate() {
        assert_eq!(f.position_at(i, 77.7).z, inst.z);
    }
}

#[test]
fn wraps_over_the_loop_distance() {
    let f = scatter(20, 7);
    for i in 0..f.len() {
        let a = f.position_at(i, 40.0);
        let b = f.position_at(i, 40.0 + 160.0);
        assert!((a.z - b.z).abs() < 1e-3);
    }
}

#[test]
fn dress_rewrites_every_instance() {
    let mut f = scatter(10, 3);
    f.dress(|p| *p = 0.0);
    assert!(f.instances().iter().all(|i| i.params == 0.0));
}
