use super::*;

#[test]
fn known_names_parse_exactly() {
    assert_eq!(EnvironmentKind::from_name("jungle"), EnvironmentKind::Jungle);
    assert_eq!(EnvironmentKind::from_name("beach"), EnvironmentKind::Beach);
    assert_eq!(EnvironmentKind::from_name("desert"), EnvironmentKind::Desert);
    assert_eq!(
        EnvironmentKind::from_name("snowyForest"),
        EnvironmentKind::SnowyForest
    );
    assert_eq!(
        EnvironmentKind::from_name("cherryBlossom"),
        EnvironmentKind::CherryBlossom
    );
}

#[test]
fn unknown_name_falls_back_to_jungle() {
    assert_eq!(EnvironmentKind::from_name("volcano"), EnvironmentKind::Jungle);
    assert_eq!(EnvironmentKind::from_name(""), EnvironmentKind::Jungle);
}

#[test]
fn wire_names_round_trip_through_serde() {
    for kind in [
        EnvironmentKind::Jungle,
        EnvironmentKind::Beach,
        EnvironmentKind::Desert,
        EnvironmentKind::SnowyForest,
        EnvironmentKind::CherryBlossom,
    ] {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.name()));
        let back: EnvironmentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn unknown_wire_name_deserializes_to_jungle() {
    let kind: EnvironmentKind = serde_json::from_str("\"metropolis\"").unwrap();
    assert_eq!(kind, EnvironmentKind::Jungle);
}

#[test]
fn create_dispatches_every_biome() {
    for kind in [
        EnvironmentKind::Jungle,
        EnvironmentKind::Beach,
        EnvironmentKind::Desert,
        EnvironmentKind::SnowyForest,
        EnvironmentKind::CherryBlossom,
    ] {
        let env = Environment::create(kind, DEFAULT_ENVIRONMENT_SEED).unwrap();
        assert_eq!(env.kind(), kind);
    }
}

#[test]
fn biome_configs_carry_their_atmospheres() {
    let jungle = Environment::create(EnvironmentKind::Jungle, 1).unwrap();
    assert_eq!(jungle.config().fog_near, 25.0);
    assert_eq!(jungle.config().character_y_offset, None);

    let beach = Environment::create(EnvironmentKind::Beach, 1).unwrap();
    assert_eq!(beach.config().character_y_offset, Some(1.2));

    let desert = Environment::create(EnvironmentKind::Desert, 1).unwrap();
    assert_eq!(desert.config().fog_near, 35.0);

    let snowy = Environment::create(EnvironmentKind::SnowyForest, 1).unwrap();
    assert_eq!(snowy.config().fog_far, 70.0);
}

#[test]
fn update_by_frame_is_uniform_across_biomes() {
    for kind in [
        EnvironmentKind::Jungle,
        EnvironmentKind::Beach,
        EnvironmentKind::Desert,
        EnvironmentKind::SnowyForest,
        EnvironmentKind::CherryBlossom,
    ] {
        let mut env = Environment::create(kind, 99).unwrap();
        env.update_by_frame(123.0);
        env.update_by_frame(0.0);
        env.update_by_frame(9999.5);
    }
}
