use super::*;
use crate::foundation::core::Tick;

const DOC: &str = r#"{
  "bounds": { "left": 0, "top": 0, "width": 100, "height": 100 },
  "shapes": [
    {
      "id": "r",
      "kind": "rectangle",
      "keyframes": [
        { "tick": 10, "attrs": { "x": 10, "y": 0, "w": 5, "h": 5, "r": 0, "g": 0, "b": 0 } },
        { "tick": 0,  "attrs": { "x": 0,  "y": 0, "w": 5, "h": 5, "r": 0, "g": 0, "b": 0 } },
        { "tick": 20, "attrs": { "x": 30, "y": 0, "w": 5, "h": 5, "r": 0, "g": 0, "b": 0 } }
      ]
    },
    {
      "id": "dot",
      "kind": "ellipse",
      "keyframes": [
        { "tick": 4, "attrs": { "x": 1, "y": 1, "w": 2, "h": 2, "r": 9, "g": 9, "b": 9 } }
      ]
    },
    { "id": "empty", "kind": "rectangle" }
  ]
}"#;

#[test]
fn loads_unsorted_keyframes_into_a_model() {
    let m = AnimationDoc::from_reader(DOC.as_bytes())
        .unwrap()
        .into_model()
        .unwrap();
    assert_eq!(m.ids(), vec!["r", "dot", "empty"]);
    let ticks: Vec<u32> = m.keyframes("r").unwrap().iter().map(|k| k.tick.0).collect();
    assert_eq!(ticks, vec![0, 10, 20]);
    assert_eq!(m.commands("r").unwrap().len(), 2);
    assert_eq!(m.keyframes("dot").unwrap().len(), 1);
    assert!(m.commands("dot").unwrap().is_empty());
    assert!(m.keyframes("empty").unwrap().is_empty());
}

#[test]
fn model_survives_a_json_round_trip() {
    let m = AnimationDoc::from_reader(DOC.as_bytes())
        .unwrap()
        .into_model()
        .unwrap();
    let doc = AnimationDoc::from_model(&m).unwrap();
    let json = doc.to_json().unwrap();
    let back = AnimationDoc::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, doc);
    let again = back.into_model().unwrap();
    assert_eq!(
        again.shapes_at_tick(Tick(15)).unwrap(),
        m.shapes_at_tick(Tick(15)).unwrap()
    );
}

#[test]
fn duplicate_ticks_are_rejected() {
    let mut doc = AnimationDoc::from_reader(DOC.as_bytes()).unwrap();
    let dup = doc.shapes[0].keyframes[0];
    doc.shapes[0].keyframes.push(dup);
    assert!(matches!(
        doc.into_model(),
        Err(KeylineError::Validation(_))
    ));
}

#[test]
fn invalid_content_is_rejected_on_load() {
    let mut doc = AnimationDoc::from_reader(DOC.as_bytes()).unwrap();
    doc.shapes[1].keyframes[0].attrs.r = 300;
    assert!(matches!(
        doc.into_model(),
        Err(KeylineError::Validation(_))
    ));

    let mut doc = AnimationDoc::from_reader(DOC.as_bytes()).unwrap();
    doc.shapes[2].id = "r".to_string();
    assert!(doc.into_model().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        AnimationDoc::from_reader("{ not json".as_bytes()),
        Err(KeylineError::Serde(_))
    ));
    assert!(matches!(
        AnimationDoc::from_reader(r#"{"bounds": {"left": 0}}"#.as_bytes()),
        Err(KeylineError::Serde(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        AnimationDoc::from_path("no/such/animation.json"),
        Err(KeylineError::Other(_))
    ));
}
