use deptboard_core::analytics::{
    counts_by_year_and_kind, load_publications, to_csv_bytes, totals_by_kind, venue_breakdown,
};

const SAMPLE: &str = "\
Tipo de publicación,Título,Fecha de publicación,Nombre de la Publicación / Evento
Artículo publicado en journal,Grafos I,2022-03-15,Revista Ciencias Matemáticas
Artículo publicado en journal,Grafos II,2022-11-02,Revista Ciencias Matemáticas
Artículo publicado en proceeding de congreso,Optimización,15/04/2021,CLAIO
Presentación en congreso (sin artículo),Charla,2021-06-01,COMPUMAT
Tesis de maestría,Tesis A,2022-07-01,MatCom
";

fn write_sample(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("publications.csv");
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn loads_rows_with_spanish_headers() {
    let dir = tempfile::tempdir().unwrap();
    let rows = load_publications(write_sample(&dir)).unwrap();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].title, "Grafos I");
    assert_eq!(rows[0].kind, "Artículo publicado en journal");
    assert_eq!(rows[2].venue, "CLAIO");
}

#[test]
fn totals_count_every_kind() {
    let dir = tempfile::tempdir().unwrap();
    let rows = load_publications(write_sample(&dir)).unwrap();

    let totals = totals_by_kind(&rows);
    assert_eq!(totals.get("Artículo publicado en journal"), Some(&2));
    assert_eq!(totals.get("Tesis de maestría"), Some(&1));
    assert_eq!(totals.values().sum::<usize>(), 5);
}

#[test]
fn year_buckets_handle_both_date_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let rows = load_publications(write_sample(&dir)).unwrap();

    let counts = counts_by_year_and_kind(&rows);
    assert_eq!(
        counts.get(&("2022".to_string(), "Artículo publicado en journal".to_string())),
        Some(&2)
    );
    // Day-first dates still yield their four-digit year.
    assert_eq!(
        counts.get(&(
            "2021".to_string(),
            "Artículo publicado en proceeding de congreso".to_string()
        )),
        Some(&1)
    );
}

#[test]
fn venue_breakdown_excludes_thesis_rows() {
    let dir = tempfile::tempdir().unwrap();
    let rows = load_publications(write_sample(&dir)).unwrap();

    let venues = venue_breakdown(&rows);
    assert_eq!(
        venues.get(&(
            "Artículo publicado en journal".to_string(),
            "Revista Ciencias Matemáticas".to_string()
        )),
        Some(&2)
    );
    assert!(venues
        .keys()
        .all(|(kind, _)| kind != "Tesis de maestría"));
}

#[test]
fn reencoded_csv_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let rows = load_publications(write_sample(&dir)).unwrap();

    let bytes = to_csv_bytes(&rows).unwrap();
    let path = dir.path().join("reencoded.csv");
    std::fs::write(&path, &bytes).unwrap();

    let reloaded = load_publications(&path).unwrap();
    assert_eq!(reloaded, rows);
}
