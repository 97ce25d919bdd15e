use super::*;
use proptest::prelude::*;

fn sample() -> Vec<Film> {
    vec![
        Film::new("Inception", "Sci-Fi", 9.0, 2010),
        Film::new("Avatar", "Sci-Fi", 8.0, 2009),
        Film::new("Titanik", "Romance", 7.0, 1997),
        Film::unrated("The Room", "Drama", 2003),
        Film::new("Interstellar", "sci-fi", 10.0, 2014),
    ]
}

fn titles<'a>(films: &[&'a Film]) -> Vec<&'a str> {
    films.iter().map(|f| f.title()).collect()
}

#[test]
fn title_search_finds_substring_ignoring_case() {
    let films = vec![Film::new("Inception", "Sci-Fi", 8.5, 2010)];
    let found = search_by_title(&films, "ncep").unwrap();
    assert_eq!(titles(&found), vec!["Inception"]);

    let found = search_by_title(&films, "NCEP").unwrap();
    assert_eq!(found.len(), 1);
}

#[test]
fn title_search_preserves_source_order() {
    let films = sample();
    let found = search_by_title(&films, "i").unwrap();
    assert_eq!(titles(&found), vec!["Inception", "Titanik", "Interstellar"]);
}

#[test]
fn title_search_rejects_blank_needle() {
    let films = sample();
    for needle in ["", "   ", "\t\n"] {
        assert!(matches!(
            search_by_title(&films, needle),
            Err(CatalogError::InvalidInput(_))
        ));
    }
}

#[test]
fn title_search_with_no_match_is_empty() {
    let films = sample();
    assert!(search_by_title(&films, "matrix").unwrap().is_empty());
}

#[test]
fn category_filter_is_exact_but_case_insensitive() {
    let films = sample();
    let found = filter_by_category(&films, "SCI-FI").unwrap();
    assert_eq!(titles(&found), vec!["Inception", "Avatar", "Interstellar"]);

    assert!(filter_by_category(&films, "Sci").unwrap().is_empty());
}

#[test]
fn category_filter_rejects_blank() {
    let films = sample();
    assert!(matches!(
        filter_by_category(&films, "  "),
        Err(CatalogError::InvalidInput(_))
    ));
}

#[test]
fn min_rating_filter_uses_average() {
    let films = sample();
    let found = filter_by_min_rating(&films, "8").unwrap();
    assert_eq!(titles(&found), vec!["Inception", "Avatar", "Interstellar"]);

    let found = filter_by_min_rating(&films, " 8.5 ").unwrap();
    assert_eq!(titles(&found), vec!["Inception", "Interstellar"]);
}

#[test]
fn min_rating_filter_never_returns_unrated_films() {
    let films = sample();
    let found = filter_by_min_rating(&films, "1").unwrap();
    assert!(found.iter().all(|f| f.rating_count() > 0));
    assert_eq!(found.len(), 4);
}

#[test]
fn min_rating_filter_distinguishes_format_and_range() {
    let films = sample();
    assert!(matches!(
        filter_by_min_rating(&films, "abc"),
        Err(CatalogError::InvalidFormat(_))
    ));
    assert!(matches!(
        filter_by_min_rating(&films, ""),
        Err(CatalogError::InvalidFormat(_))
    ));
    for raw in ["0", "0.99", "10.5", "-1", "NaN", "inf"] {
        assert!(
            matches!(
                filter_by_min_rating(&films, raw),
                Err(CatalogError::InvalidRange(_))
            ),
            "{raw} should be out of range"
        );
    }
}

#[test]
fn search_dispatches_on_kind() {
    let films = sample();
    assert_eq!(search(&films, SearchKind::Title, "ava").unwrap().len(), 1);
    assert_eq!(search(&films, SearchKind::Category, "drama").unwrap().len(), 1);
    assert_eq!(search(&films, SearchKind::MinRating, "10").unwrap().len(), 1);
}

#[test]
fn unique_categories_keep_first_seen_order() {
    let films = sample();
    assert_eq!(
        unique_categories(&films),
        vec!["Sci-Fi", "Romance", "Drama", "sci-fi"]
    );
}

#[test]
fn unique_categories_of_empty_catalog() {
    assert!(unique_categories(&[]).is_empty());
}

#[test]
fn find_by_title_is_exact() {
    let films = sample();
    assert_eq!(find_by_title(&films, "avatar").map(Film::year), Some(2009));
    assert!(find_by_title(&films, "ava").is_none());
}

#[test]
fn capping_keeps_first_ten_and_total() {
    let films: Vec<Film> = (0..11)
        .map(|i| Film::new(format!("Film {i}"), "Action", 7.0, 2000 + i))
        .collect();
    let matches = filter_by_category(&films, "action").unwrap();
    let capped = CappedResults::new(matches);
    assert_eq!(capped.shown.len(), 10);
    assert_eq!(capped.total, 11);
    assert!(capped.is_truncated());
    assert_eq!(capped.shown[0].title(), "Film 0");
    assert_eq!(capped.shown[9].title(), "Film 9");
}

#[test]
fn capping_small_result_is_untouched() {
    let films = sample();
    let capped = CappedResults::new(films.iter().collect());
    assert_eq!(capped.shown.len(), 5);
    assert!(!capped.is_truncated());
    assert!(!capped.is_empty());
}

proptest! {
    #[test]
    fn min_rating_returns_exactly_the_qualifying_subset(
        averages in prop::collection::vec(0u8..=10, 0..30),
        threshold in 1.0f64..=10.0,
    ) {
        let films: Vec<Film> = averages
            .iter()
            .enumerate()
            .map(|(i, &a)| Film::new(format!("F{i}"), "x", f64::from(a), 2000))
            .collect();
        let found = filter_by_min_rating(&films, &threshold.to_string()).unwrap();
        let expected: Vec<&Film> = films
            .iter()
            .filter(|f| f.average_rating() >= threshold)
            .collect();
        prop_assert_eq!(found, expected);
    }
}
