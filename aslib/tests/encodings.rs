use std::collections::HashSet;

use aslib::{
    AgroSuccessLct, Aspect, Code, Color, Encoding, EncodingError, LookupKey,
    MillingtonLct, SeedPresence, Succession, Water,
};
use serde::{Deserialize, Serialize};

fn check_unique<E: Encoding>() {
    let values: HashSet<_> = E::members().map(E::value).collect();
    let aliases: HashSet<_> = E::members().map(E::alias).collect();
    let count = E::members().count();

    assert_eq!(values.len(), count, "{} values repeat", E::ENCODING);
    assert_eq!(aliases.len(), count, "{} aliases repeat", E::ENCODING);
}

fn check_round_trip<E: Encoding>() {
    for member in E::members() {
        assert_eq!(E::from_value(member.value()), Ok(member));
        assert_eq!(E::from_alias(member.alias()), Ok(member));
        assert_eq!(E::from_name(member.name()), Ok(member));
    }
}

fn check_not_found<E: Encoding>() {
    let unused = E::members().map(E::value).max().unwrap_or_default() + 1;

    assert_eq!(
        E::from_value(unused),
        Err(EncodingError::NotFound {
            encoding: E::ENCODING,
            key: LookupKey::Value(unused),
        })
    );
    assert_eq!(
        E::from_value(-1),
        Err(EncodingError::NotFound {
            encoding: E::ENCODING,
            key: LookupKey::Value(-1),
        })
    );
    assert_eq!(
        E::from_alias("NoSuchThing"),
        Err(EncodingError::NotFound {
            encoding: E::ENCODING,
            key: LookupKey::Alias("NoSuchThing".to_string()),
        })
    );
}

fn check_all<E: Encoding>(expected_count: usize) {
    assert_eq!(E::members().count(), expected_count, "{}", E::ENCODING);
    assert_eq!(E::members().collect::<Vec<_>>(), E::MEMBERS);
    check_unique::<E>();
    check_round_trip::<E>();
    check_not_found::<E>();
}

#[test]
fn given_every_encoding_when_checking_contract_then_holds() {
    check_all::<Succession>(2);
    check_all::<Aspect>(2);
    check_all::<SeedPresence>(2);
    check_all::<Water>(3);
    check_all::<MillingtonLct>(11);
    check_all::<AgroSuccessLct>(9);
}

#[test]
fn given_members_when_enumerating_twice_then_order_is_stable() {
    let first: Vec<_> = MillingtonLct::members().collect();
    let second: Vec<_> = MillingtonLct::members().collect();

    assert_eq!(first, second);
    assert_eq!(first.first(), Some(&MillingtonLct::Pine));
    assert_eq!(first.last(), Some(&MillingtonLct::Burnt));
}

#[test]
fn given_oak_alias_when_looking_up_then_returns_documented_member() {
    let oak = AgroSuccessLct::from_alias("Oak").expect("Oak is defined");

    assert_eq!(oak, AgroSuccessLct::Oak);
    assert_eq!(oak.value(), 8);
    assert_eq!(oak.color(), Color::DarkPurple);
    assert_eq!(oak.color().hex_code(), "#85144b");
    assert_eq!(
        AgroSuccessLct::from_alias("NoSuchThing"),
        Err(EncodingError::NotFound {
            encoding: "AgroSuccessLct",
            key: LookupKey::Alias("NoSuchThing".to_string()),
        })
    );
}

#[test]
fn given_simulation_state_codes_when_decoding_then_maps_to_aliases() {
    let raster: [Code; 6] = [0, 5, 5, 8, 3, 1];

    let aliases: Vec<String> = raster
        .into_iter()
        .map(|code| AgroSuccessLct::try_from(code).map(|lct| lct.to_string()))
        .collect::<Result<_, _>>()
        .expect("every code is a land cover type");

    assert_eq!(aliases, ["WaterQuarry", "Pine", "Pine", "Oak", "DAL", "Burnt"]);
}

#[test]
fn given_scenario_json_when_deserializing_then_reads_aliases() {
    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Cell {
        lct: AgroSuccessLct,
        water: Water,
        aspect: Aspect,
        seeds: SeedPresence,
    }

    let json = r#"{"lct":"TransForest","water":"mesic","aspect":"north","seeds":"true"}"#;
    let cell: Cell = serde_json::from_str(json).expect("valid scenario cell");

    assert_eq!(
        cell,
        Cell {
            lct: AgroSuccessLct::TransForest,
            water: Water::Mesic,
            aspect: Aspect::North,
            seeds: SeedPresence::True,
        }
    );
    assert_eq!(serde_json::to_string(&cell).expect("serialize"), json);
}

#[test]
fn given_unknown_alias_in_scenario_when_deserializing_then_reports_it() {
    let err = serde_json::from_str::<Vec<Water>>(r#"["xeric","boggy"]"#)
        .expect_err("boggy is not a water class");

    assert!(err.to_string().contains("no member in Water with alias: \"boggy\""));
}
