use flixdb_catalog::TitleRecord;
use flixdb_db::*;

fn witcher() -> TitleRecord {
    TitleRecord {
        show_id: "s1".to_string(),
        kind: "TV Show".to_string(),
        title: "The Witcher".to_string(),
        director: "Lauren Schmidt Hissrich".to_string(),
        cast: "Henry Cavill, Anya Chalotra, Freya Allan".to_string(),
        country: "United States".to_string(),
        date_added: "2019-12-20".to_string(),
        release_year: "2019".to_string(),
        rating: "TV-MA".to_string(),
        duration: "2 Seasons".to_string(),
        listed_in: "Action, Adventure, Drama".to_string(),
        description: "Geralt of Rivia journeys toward his destiny.".to_string(),
    }
}

#[test]
fn upsert_and_find_title() {
    let conn = open_memory().unwrap();
    upsert_title(&conn, &witcher()).unwrap();

    let found = find_title(&conn, "The Witcher").unwrap();
    assert_eq!(found, Some(witcher()));
    assert!(title_exists(&conn, "The Witcher").unwrap());
    assert!(!title_exists(&conn, "the witcher").unwrap());
}

#[test]
fn upsert_title_is_idempotent() {
    let conn = open_memory().unwrap();
    upsert_title(&conn, &witcher()).unwrap();
    upsert_title(&conn, &witcher()).unwrap();

    let count: i32 = conn
        .query_row("SELECT COUNT(*) FROM titles", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn upsert_replaces_every_column() {
    let conn = open_memory().unwrap();
    upsert_title(&conn, &witcher()).unwrap();

    let replacement = TitleRecord {
        show_id: "s9".to_string(),
        kind: "Movie".to_string(),
        title: "The Witcher".to_string(),
        director: String::new(),
        cast: String::new(),
        country: "Poland".to_string(),
        date_added: String::new(),
        release_year: "2001".to_string(),
        rating: "R".to_string(),
        duration: "130 min".to_string(),
        listed_in: "Fantasy".to_string(),
        description: String::new(),
    };
    upsert_title(&conn, &replacement).unwrap();

    let all = all_titles(&conn).unwrap();
    assert_eq!(all, vec![replacement]);
}
