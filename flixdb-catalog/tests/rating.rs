use flixdb_catalog::{ContentRating, Suitability};

#[test]
fn thresholds_match_rating_table() {
    let expected = [
        ("TV-MA", 17),
        ("R", 17),
        ("NC-17", 17),
        ("TV-14", 14),
        ("PG-13", 13),
        ("TV-PG", 8),
        ("PG", 8),
        ("G", 0),
        ("TV-G", 0),
        ("TV-Y", 0),
        ("TV-Y7", 0),
        ("TV-Y7-FV", 0),
    ];
    for (s, age) in expected {
        let rating = ContentRating::parse(s).unwrap_or_else(|| panic!("{s} should parse"));
        assert_eq!(rating.minimum_age(), age, "threshold for {s}");
        assert_eq!(rating.as_str(), s);
    }
}

#[test]
fn unknown_ratings_do_not_parse() {
    assert_eq!(ContentRating::parse("NR"), None);
    assert_eq!(ContentRating::parse("UR"), None);
    assert_eq!(ContentRating::parse("tv-ma"), None);
    assert_eq!(ContentRating::parse(""), None);
}

#[test]
fn pg13_boundary() {
    let rating = ContentRating::Pg13;
    assert_eq!(rating.suitability(12), Suitability::NotSuitable);
    assert_eq!(rating.suitability(13), Suitability::ParentalGuidance);
    assert_eq!(rating.suitability(14), Suitability::Suitable);
}

#[test]
fn general_audience_is_suitable_for_any_positive_age() {
    assert_eq!(ContentRating::TvY.suitability(1), Suitability::Suitable);
    assert_eq!(ContentRating::G.suitability(30), Suitability::Suitable);
}

#[test]
fn outcomes_have_distinct_messages() {
    let messages = [
        Suitability::Suitable.to_string(),
        Suitability::ParentalGuidance.to_string(),
        Suitability::NotSuitable.to_string(),
    ];
    assert_ne!(messages[0], messages[1]);
    assert_ne!(messages[1], messages[2]);
    assert_ne!(messages[0], messages[2]);
}
