use deptboard_core::{Journal, JournalPaper, Person};
use serde_json::json;
use uuid::Uuid;

#[test]
fn person_serializes_with_optional_orcid() {
    let person = Person {
        uuid: Uuid::nil(),
        name: "Ana".to_string(),
        institution: "Universidad de La Habana".to_string(),
        orcid: None,
    };

    let value = serde_json::to_value(&person).unwrap();
    assert_eq!(
        value,
        json!({
            "uuid": "00000000-0000-0000-0000-000000000000",
            "name": "Ana",
            "institution": "Universidad de La Habana",
            "orcid": null,
        })
    );
}

#[test]
fn paper_json_embeds_journal_and_authors() {
    let ana = Person::new("Ana", "UH");
    let paper = JournalPaper {
        uuid: Uuid::new_v4(),
        title: "Grafos".to_string(),
        authors: vec![ana.clone()],
        corresponding: Some(ana.uuid),
        journal: Journal::new("RCM", "UH Press", "0256-5374"),
        issue: 1,
        year: 2022,
    };

    let value = serde_json::to_value(&paper).unwrap();
    assert_eq!(value["journal"]["title"], "RCM");
    assert_eq!(value["authors"][0]["name"], "Ana");
    assert_eq!(value["corresponding"], json!(ana.uuid.to_string()));
    assert_eq!(value["issue"], 1);
    assert_eq!(value["year"], 2022);
}
