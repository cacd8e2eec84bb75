use flixdb_catalog::{CatalogError, GenreTally, TitleRecord, tally_genres};

fn titled(title: &str, year: &str, genres: &str) -> TitleRecord {
    TitleRecord {
        title: title.to_string(),
        release_year: year.to_string(),
        listed_in: genres.to_string(),
        ..Default::default()
    }
}

fn sample() -> Vec<TitleRecord> {
    vec![
        titled("The Witcher", "2019", "Action, Adventure, Drama"),
        titled("Stranger Things", "2016", "Drama, Fantasy, Horror"),
        titled("The Irishman", "2019", "Biography, Crime, Drama"),
        titled("The Dark Knight", "2008", "Action, Crime, Drama"),
    ]
}

#[test]
fn drama_dominates_2015_to_2020() {
    let records = sample();
    let tally = tally_genres(&records, 2015, 2020).unwrap();
    assert_eq!(tally.count("Drama"), 3);
    assert_eq!(tally.count("Action"), 1);
    assert_eq!(tally.count("Crime"), 1);
    assert_eq!(tally.most_common(), vec!["Drama"]);
}

#[test]
fn range_bounds_are_inclusive() {
    let records = sample();
    let tally = tally_genres(&records, 2008, 2008).unwrap();
    assert_eq!(
        tally.most_common(),
        vec!["Action", "Crime", "Drama"],
        "single title in range ties all its genres"
    );
}

#[test]
fn ties_return_every_genre_in_first_encounter_order() {
    let records = vec![
        titled("A", "2000", "Comedy, Horror"),
        titled("B", "2000", "Horror, Romance"),
        titled("C", "2000", "Comedy"),
    ];
    let tally = tally_genres(&records, 2000, 2000).unwrap();
    assert_eq!(tally.most_common(), vec!["Comedy", "Horror"]);
}

#[test]
fn nothing_in_range_yields_empty_tally() {
    let records = sample();
    let tally = tally_genres(&records, 1990, 1999).unwrap();
    assert!(tally.is_empty());
    assert!(tally.most_common().is_empty());
}

#[test]
fn unparseable_year_fails_the_tally() {
    let records = vec![
        titled("A", "2019", "Drama, Crime"),
        titled("B", "n/a", "Comedy"),
    ];
    let err = tally_genres(&records, 2000, 2030).unwrap_err();
    assert!(
        matches!(
            err,
            CatalogError::InvalidReleaseYear { ref title, ref value } if title == "B" && value == "n/a"
        ),
        "got {err:?}"
    );
}

#[test]
fn empty_year_fails_even_outside_the_range() {
    let records = vec![titled("A", "2019", "Drama"), titled("B", "", "Drama")];
    let err = tally_genres(&records, 1990, 1999).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidReleaseYear { ref title, .. } if title == "B"));
}

#[test]
fn surrounding_whitespace_in_year_is_ignored() {
    let records = vec![titled("A", " 2001 ", "Drama")];
    let tally = tally_genres(&records, 2001, 2001).unwrap();
    assert_eq!(tally.count("Drama"), 1);
}

#[test]
fn titles_outside_range_do_not_count() {
    let records = vec![
        titled("A", "2010", "Drama, Comedy"),
        titled("B", "2011", "Comedy"),
        titled("C", "1999", "Drama"),
        titled("D", "2030", "Drama"),
    ];
    let tally = tally_genres(&records, 2010, 2011).unwrap();
    assert_eq!(tally.count("Drama"), 1);
    assert_eq!(tally.count("Comedy"), 2);
    assert_eq!(tally.most_common(), vec!["Comedy"]);
}

#[test]
fn empty_genre_field_counts_as_empty_token() {
    let records = vec![titled("A", "2001", ""), titled("B", "2001", "")];
    let tally = tally_genres(&records, 2001, 2001).unwrap();
    assert_eq!(tally.count(""), 2);
    assert_eq!(tally.most_common(), vec![""]);
}

#[test]
fn separator_is_comma_space_only() {
    let mut tally = GenreTally::new();
    tally.add_list("Drama,Comedy");
    assert_eq!(tally.len(), 1);
    assert_eq!(tally.count("Drama,Comedy"), 1);
}
