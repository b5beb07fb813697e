use deptboard_core::db::open_db_in_memory;
use deptboard_core::page::projects::{
    self, CreateView, INCOMPLETE_WARNING, READ_ONLY_NOTICE, SAVE_SUCCESS_NOTICE,
};
use deptboard_core::{
    Person, PersonRepository, Project, ProjectService, SessionStore, SqlitePersonRepository,
    SqliteProjectRepository, CURRENT_PROJECT_KEY,
};
use uuid::Uuid;

fn seed_people(conn: &rusqlite::Connection) -> Vec<Person> {
    let repo = SqlitePersonRepository::new(conn);
    repo.create_person(&Person::new("Ana", "Universidad de La Habana"))
        .unwrap();
    repo.create_person(&Person::new("Luis", "Universidad de La Habana"))
        .unwrap();
    repo.list_people().unwrap()
}

fn stage_complete_draft(session: &mut SessionStore, prefix: &str, people: &[Person]) {
    projects::stage_text(session, prefix, "title", "Grafos aleatorios");
    projects::stage_text(session, prefix, "code", "PN-223");
    projects::stage_text(session, prefix, "project_type", "Nacional");
    projects::stage_text(session, prefix, "status", "Activo");
    projects::stage_text(session, prefix, "main_entity", "MatCom");
    projects::stage_text(session, prefix, "head", people[0].uuid.to_string());
    projects::stage_list(
        session,
        prefix,
        "members",
        people.iter().map(|p| p.uuid.to_string()).collect(),
    );
    projects::stage_list(
        session,
        prefix,
        "entities",
        vec!["ICIMAF".to_string()],
    );
    projects::stage_list(session, prefix, "funding", vec!["FONCI".to_string()]);
}

#[test]
fn without_write_access_nothing_mutates() {
    let conn = open_db_in_memory().unwrap();
    let people = seed_people(&conn);
    let service = ProjectService::new(SqliteProjectRepository::new(&conn));
    let mut session = SessionStore::new();

    let view = projects::create_view(&mut session, &people, false);
    assert_eq!(
        view,
        CreateView::ReadOnly {
            notice: READ_ONLY_NOTICE
        }
    );
    assert!(session.is_empty());
    assert!(service.list_projects().unwrap().is_empty());
}

#[test]
fn first_visit_allocates_a_stable_session_key() {
    let conn = open_db_in_memory().unwrap();
    let people = seed_people(&conn);
    let mut session = SessionStore::new();

    let first = projects::create_view(&mut session, &people, true);
    let CreateView::Incomplete { prefix, missing_fields, warning } = first else {
        panic!("expected incomplete view for a blank draft");
    };
    assert_eq!(warning, INCOMPLETE_WARNING);
    assert!(missing_fields.contains(&"title"));
    assert!(missing_fields.contains(&"head"));
    assert_eq!(session.get_text(CURRENT_PROJECT_KEY), Some(prefix.as_str()));

    // Reruns reuse the allocated key instead of minting a new one.
    let second = projects::create_view(&mut session, &people, true);
    let CreateView::Incomplete { prefix: again, .. } = second else {
        panic!("expected incomplete view on rerun");
    };
    assert_eq!(again, prefix);
}

#[test]
fn save_persists_once_and_purges_prefixed_session_state() {
    let conn = open_db_in_memory().unwrap();
    let people = seed_people(&conn);
    let service = ProjectService::new(SqliteProjectRepository::new(&conn));
    let mut session = SessionStore::new();
    session.set_text("paper_title", "unrelated state");

    let CreateView::Incomplete { prefix, .. } =
        projects::create_view(&mut session, &people, true)
    else {
        panic!("expected incomplete view");
    };
    stage_complete_draft(&mut session, &prefix, &people);

    let CreateView::Ready { record, prefix } =
        projects::create_view(&mut session, &people, true)
    else {
        panic!("expected ready view after staging all required fields");
    };

    let notice = projects::save_project(&mut session, &service, &record, &prefix).unwrap();
    assert_eq!(notice, SAVE_SUCCESS_NOTICE);

    let listed = service.list_projects().unwrap();
    assert_eq!(listed.len(), 1);
    let stored = &listed[0];
    assert_eq!(stored.title, "Grafos aleatorios");
    assert_eq!(stored.head.name, "Ana");
    assert_eq!(stored.members.len(), 2);
    assert_eq!(stored.entities, vec!["ICIMAF".to_string()]);
    assert_eq!(stored.funding, vec!["FONCI".to_string()]);

    assert!(session.keys().all(|key| !key.starts_with(&prefix)));
    assert!(!session.contains(CURRENT_PROJECT_KEY));
    assert_eq!(session.get_text("paper_title"), Some("unrelated state"));

    // Next visit starts a fresh in-progress project.
    let CreateView::Incomplete { prefix: fresh, .. } =
        projects::create_view(&mut session, &people, true)
    else {
        panic!("expected a fresh incomplete view");
    };
    assert_ne!(fresh, prefix);
}

#[test]
fn member_count_in_header_matches_member_list() {
    let conn = open_db_in_memory().unwrap();
    let people = seed_people(&conn);
    let service = ProjectService::new(SqliteProjectRepository::new(&conn));

    let project = Project {
        uuid: Uuid::new_v4(),
        title: "Optimización".to_string(),
        code: "PN-9".to_string(),
        project_type: "Institucional".to_string(),
        program: Some("PNCB".to_string()),
        status: "Activo".to_string(),
        head: people[0].clone(),
        members: people.clone(),
        main_entity: "MatCom".to_string(),
        entities: vec![],
        funding: vec![],
    };
    let stored = service.create_project(&project).unwrap();

    let header = projects::summary_header(&stored);
    assert!(header.ends_with(&format!("({} participantes)", stored.members.len())));
    assert_eq!(stored.members.len(), people.len());
}

#[test]
fn project_list_is_sorted_by_title() {
    let conn = open_db_in_memory().unwrap();
    let people = seed_people(&conn);
    let service = ProjectService::new(SqliteProjectRepository::new(&conn));

    for title in ["Zeta", "Alfa", "Medio"] {
        let project = Project {
            uuid: Uuid::new_v4(),
            title: title.to_string(),
            code: "C".to_string(),
            project_type: "Nacional".to_string(),
            program: None,
            status: "Activo".to_string(),
            head: people[0].clone(),
            members: vec![],
            main_entity: "MatCom".to_string(),
            entities: vec![],
            funding: vec![],
        };
        service.create_project(&project).unwrap();
    }

    let titles: Vec<String> = service
        .list_projects()
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["Alfa", "Medio", "Zeta"]);
}

#[test]
fn member_order_survives_persistence() {
    let conn = open_db_in_memory().unwrap();
    let people = seed_people(&conn);
    let service = ProjectService::new(SqliteProjectRepository::new(&conn));

    // Reverse of the alphabetical people listing.
    let members = vec![people[1].clone(), people[0].clone()];
    let project = Project {
        uuid: Uuid::new_v4(),
        title: "Orden".to_string(),
        code: "C".to_string(),
        project_type: "Nacional".to_string(),
        program: None,
        status: "Activo".to_string(),
        head: people[0].clone(),
        members: members.clone(),
        main_entity: "MatCom".to_string(),
        entities: vec![],
        funding: vec![],
    };
    let stored = service.create_project(&project).unwrap();

    let stored_names: Vec<&str> = stored.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(stored_names, vec!["Luis", "Ana"]);
}
