use flixdb_catalog::TitleRecord;
use flixdb_db::*;

fn record(title: &str, kind: &str, rating: &str) -> TitleRecord {
    TitleRecord {
        kind: kind.to_string(),
        title: title.to_string(),
        rating: rating.to_string(),
        ..Default::default()
    }
}

fn setup_db() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    upsert_title(&conn, &record("The Witcher", "TV Show", "TV-MA")).unwrap();
    upsert_title(&conn, &record("The Irishman", "Movie", "R")).unwrap();
    upsert_title(&conn, &record("The Dark Knight", "Movie", "PG-13")).unwrap();
    conn
}

#[test]
fn all_titles_returns_insertion_order() {
    let conn = setup_db();
    let titles: Vec<String> = all_titles(&conn)
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["The Witcher", "The Irishman", "The Dark Knight"]);
}

#[test]
fn all_titles_on_empty_store() {
    let conn = open_memory().unwrap();
    assert!(all_titles(&conn).unwrap().is_empty());
}

#[test]
fn find_rating_by_exact_title() {
    let conn = setup_db();
    assert_eq!(
        find_rating(&conn, "The Dark Knight").unwrap(),
        Some("PG-13".to_string())
    );
    assert_eq!(find_rating(&conn, "Dark Knight").unwrap(), None);
}

#[test]
fn null_columns_read_back_empty() {
    let conn = open_memory().unwrap();
    conn.execute("INSERT INTO titles (title) VALUES ('Bare')", [])
        .unwrap();

    let found = find_title(&conn, "Bare").unwrap().unwrap();
    assert_eq!(found.rating, "");
    assert_eq!(found.listed_in, "");
    assert_eq!(find_rating(&conn, "Bare").unwrap(), Some(String::new()));
}

#[test]
fn stats_count_by_type() {
    let conn = setup_db();
    let stats = catalog_stats(&conn).unwrap();
    assert_eq!(
        stats,
        CatalogStats {
            titles: 3,
            movies: 2,
            shows: 1,
        }
    );
}
