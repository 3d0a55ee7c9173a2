use chandas::{identify, IdentifyRequest, IdentifyResponse};
use serde_json::Value;

mod common;

#[test]
fn response_carries_the_wire_fields() {
    let json = identify(common::BG_2_47).unwrap().to_json().unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["chandas_name"], "Anuṣṭubh");
    assert_eq!(value["confidence"], 1.0);
    assert_eq!(value["laghu_guru_pattern"], common::BG_2_47_PATTERNS.concat());
    assert_eq!(
        value["syllable_breakdown"][0],
        serde_json::json!({ "syllable": "क", "type": "guru", "position": 1 })
    );
    assert_eq!(value["syllable_breakdown"][4]["type"], "laghu");
    assert_eq!(value["syllable_breakdown"].as_array().unwrap().len(), 32);
    assert_eq!(value["identification_process"][0]["step_number"], 1);
    assert_eq!(value["identification_process"][0]["step_name"], "Text Normalization");
    assert_eq!(value["syllable_counts"], serde_json::json!([8, 8, 8, 8]));
    assert_eq!(value["padas"][3]["aksharas"][2]["rule"], "conjunct");
    assert!(value["explanation"].as_str().unwrap().starts_with("Anuṣṭubh"));
}

#[test]
fn positions_run_across_the_whole_verse() {
    let response = identify(common::BG_2_47).unwrap().to_response();
    let positions: Vec<usize> = response.syllable_breakdown.iter().map(|s| s.position).collect();
    assert_eq!(positions, (1..=32).collect::<Vec<_>>());
    assert_eq!(response.syllable_breakdown[8].syllable, "मा");
}

#[test]
fn response_round_trips_through_json() {
    let response = identify(common::BG_1_1).unwrap().to_response();
    let json = serde_json::to_string(&response).unwrap();
    let back: IdentifyResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, response);
}

#[test]
fn request_body_parses() {
    let request = IdentifyRequest::from_json(r#"{"text": "राम"}"#).unwrap();
    assert_eq!(request.text, "राम");
    assert!(IdentifyRequest::from_json(r#"{"verse": "राम"}"#).is_err());
}
