use flixdb_catalog::*;

fn row(id: &str, title: &str, country: &str, year: &str, rating: &str) -> TitleRecord {
    TitleRecord {
        show_id: id.to_string(),
        kind: "TV Show".to_string(),
        title: title.to_string(),
        director: String::new(),
        cast: String::new(),
        country: country.to_string(),
        date_added: String::new(),
        release_year: year.to_string(),
        rating: rating.to_string(),
        duration: String::new(),
        listed_in: String::new(),
        description: String::new(),
    }
}

fn sample_catalog() -> Catalog {
    Catalog::from_records(
        canonical_schema(),
        vec![
            row("s1", "The Witcher", "United States", "2019", "TV-MA"),
            row("s2", "Stranger Things", "United States", "2016", "TV-14"),
            row("s3", "Dark", "Germany", "2017", "TV-MA"),
            row("s4", "Black Mirror", "United Kingdom", "2011", "TV-MA"),
        ],
    )
    .unwrap()
}

fn constraints(pairs: &[(&str, Constraint)]) -> Vec<(String, Constraint)> {
    pairs
        .iter()
        .map(|(k, c)| (k.to_string(), c.clone()))
        .collect()
}

#[test]
fn filter_by_country_and_rating() {
    let catalog = sample_catalog();
    let result = filter_titles(
        &catalog,
        &constraints(&[
            ("country", Constraint::equals("United States")),
            ("rating", Constraint::equals("TV-MA")),
        ]),
    );
    assert_eq!(result, vec!["The Witcher"]);
}

#[test]
fn filter_by_type_and_release_year() {
    let catalog = sample_catalog();
    let result = filter_titles(
        &catalog,
        &constraints(&[
            ("type", Constraint::equals("TV Show")),
            ("release_year", Constraint::equals("2016")),
        ]),
    );
    assert_eq!(result, vec!["Stranger Things"]);
}

#[test]
fn filter_with_no_matches_is_empty() {
    let catalog = sample_catalog();
    let result = filter_titles(
        &catalog,
        &constraints(&[("country", Constraint::equals("France"))]),
    );
    assert!(result.is_empty());
}

#[test]
fn filter_with_value_set_keeps_catalog_order() {
    let catalog = sample_catalog();
    let result = filter_titles(
        &catalog,
        &constraints(&[(
            "country",
            Constraint::any_of(["United Kingdom", "Germany"]),
        )]),
    );
    assert_eq!(result, vec!["Dark", "Black Mirror"]);
}

#[test]
fn unknown_attribute_is_ignored() {
    let catalog = sample_catalog();
    let result = filter_titles(
        &catalog,
        &constraints(&[("studio", Constraint::equals("Nobody"))]),
    );
    assert_eq!(
        result,
        vec!["The Witcher", "Stranger Things", "Dark", "Black Mirror"]
    );

    let result = filter_titles(
        &catalog,
        &constraints(&[
            ("studio", Constraint::equals("Nobody")),
            ("country", Constraint::equals("Germany")),
        ]),
    );
    assert_eq!(result, vec!["Dark"]);
}

#[test]
fn empty_stored_value_never_matches() {
    let catalog = sample_catalog();
    // Every sample row has an empty director.
    let result = filter_titles(
        &catalog,
        &constraints(&[("director", Constraint::equals(""))]),
    );
    assert!(result.is_empty());

    let result = filter_titles(
        &catalog,
        &constraints(&[("director", Constraint::any_of(["", "Somebody"]))]),
    );
    assert!(result.is_empty());
}

#[test]
fn no_constraints_returns_every_title() {
    let catalog = sample_catalog();
    assert_eq!(filter_titles(&catalog, &[]).len(), 4);
}

#[test]
fn filter_uses_catalog_schema_not_canonical_names() {
    let mut schema = canonical_schema();
    schema[5] = "origin".to_string();
    let catalog = Catalog::from_records(
        schema,
        vec![row("s1", "The Witcher", "United States", "2019", "TV-MA")],
    )
    .unwrap();

    let by_origin = filter_titles(
        &catalog,
        &constraints(&[("origin", Constraint::equals("Poland"))]),
    );
    assert!(by_origin.is_empty());

    // "country" is no longer a known attribute, so it is skipped.
    let by_country = filter_titles(
        &catalog,
        &constraints(&[("country", Constraint::equals("Poland"))]),
    );
    assert_eq!(by_country, vec!["The Witcher"]);
}
