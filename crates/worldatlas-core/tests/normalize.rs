use pretty_assertions::assert_eq;
use worldatlas_core::{Atlas, Continent, Country};

#[test]
fn france_record_is_fully_normalized() {
    let atlas = Atlas::parse_or_empty(
        r#"{"Europe": [{"name":"France","capital":"Paris","population":67000000,"area_km2":551695,"currency":"Euro","flagUrl":"http://x/fr.png"}]}"#,
    );

    assert_eq!(
        atlas.continents(),
        &[Continent {
            name: "Europe".into(),
            countries: vec![Country {
                name: "France".into(),
                capital: "Paris".into(),
                population: "67,000,000".into(),
                area: "551,695 km²".into(),
                currency: "Euro".into(),
                flag_url: "http://x/fr.png".into(),
            }],
        }]
    );
}

#[test]
fn bare_names_keep_only_name_and_blanks_drop() {
    let atlas = Atlas::parse_or_empty(r#"{"Asia": ["Japan", ""]}"#);

    assert_eq!(
        atlas.continents(),
        &[Continent {
            name: "Asia".into(),
            countries: vec![Country::named("Japan")],
        }]
    );
}

#[test]
fn top_level_array_yields_empty_atlas() {
    assert!(Atlas::parse_or_empty(r#"[{"Europe": ["France"]}]"#).is_empty());
}

#[test]
fn malformed_document_yields_empty_atlas() {
    assert!(Atlas::parse_or_empty(r#"{"Europe": ["France""#).is_empty());
}

#[test]
fn order_and_length_follow_the_source() {
    let atlas = Atlas::parse_or_empty(
        r#"{
            "Zeta": ["Z1", " ", "Z2", 7, {"name": "Z3"}],
            "Alpha": [],
            "skip me": 1,
            "Mid": [{"name": "M1"}, "M2"]
        }"#,
    );

    let summary: Vec<(&str, Vec<&str>)> = atlas
        .continents()
        .iter()
        .map(|c| (c.name.as_str(), c.country_names().collect()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Zeta", vec!["Z1", "Z2", "Z3"]),
            ("Alpha", vec![]),
            ("Mid", vec!["M1", "M2"]),
        ]
    );
}

#[test]
fn missing_optional_fields_are_empty_strings() {
    let atlas = Atlas::parse_or_empty(r#"{"Oceania": [{"name": "Nauru"}]}"#);
    assert_eq!(atlas.find_country("Oceania", "Nauru"), Some(&Country::named("Nauru")));
}

#[test]
fn string_quantities_pass_through() {
    let atlas = Atlas::parse_or_empty(
        r#"{"Europe": [{"name": "X", "population": "about 1,000", "area_km2": "41,285 km²"}]}"#,
    );
    let x = atlas.find_country("Europe", "X").unwrap();
    assert_eq!(x.population, "about 1,000");
    assert_eq!(x.area, "41,285 km²");
}

#[test]
fn numeric_quantities_group_without_fractions() {
    let atlas = Atlas::parse_or_empty(
        r#"{"Asia": [
            {"name": "Singapore", "population": 5917600.9, "area_km2": 734.3},
            {"name": "India", "population": 1428627663, "area_km2": 3287263.0}
        ]}"#,
    );

    let sg = atlas.find_country("Asia", "Singapore").unwrap();
    assert_eq!(sg.population, "5,917,600");
    assert_eq!(sg.area, "734 km²");

    let india = atlas.find_country("Asia", "India").unwrap();
    assert_eq!(india.population, "1,428,627,663");
    assert_eq!(india.area, "3,287,263 km²");
}

#[test]
fn one_bad_record_does_not_spoil_the_batch() {
    let atlas = Atlas::parse_or_empty(
        r#"{"Africa": [
            {"name": 42, "capital": ["Abuja"], "population": {"n": 1}},
            {"name": "Kenya", "capital": "Nairobi"}
        ]}"#,
    );

    let africa = atlas.continent("Africa").unwrap();
    assert_eq!(africa.countries.len(), 2);
    assert_eq!(africa.countries[0], Country::default());
    assert_eq!(africa.countries[1].capital, "Nairobi");
}
