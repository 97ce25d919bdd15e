use super::*;
use proptest::prelude::*;

#[test]
fn new_records_in_range_initial_rating() {
    let film = Film::new("Inception", "Sci-Fi", 8.0, 2010);
    assert_eq!(film.ratings(), &[8]);
    assert_eq!(film.average_rating(), 8.0);
}

#[test]
fn new_rounds_initial_rating_half_to_even() {
    assert_eq!(Film::new("A", "x", 8.5, 2000).ratings(), &[8]);
    assert_eq!(Film::new("B", "x", 7.5, 2000).ratings(), &[8]);
    assert_eq!(Film::new("C", "x", 7.6, 2000).ratings(), &[8]);
}

#[test]
fn new_drops_out_of_range_initial_rating() {
    assert!(Film::new("Zero", "x", 0.0, 2000).ratings().is_empty());
    assert!(Film::new("Low", "x", 0.99, 2000).ratings().is_empty());
    assert!(Film::new("High", "x", 10.01, 2000).ratings().is_empty());
    assert!(Film::new("Nan", "x", f64::NAN, 2000).ratings().is_empty());
}

#[test]
fn new_accepts_bounds() {
    assert_eq!(Film::new("Low", "x", 1.0, 2000).ratings(), &[1]);
    assert_eq!(Film::new("High", "x", 10.0, 2000).ratings(), &[10]);
}

#[test]
fn average_of_no_ratings_is_zero() {
    let film = Film::unrated("Empty", "Drama", 1999);
    assert_eq!(film.average_rating(), 0.0);
}

#[test]
fn average_is_arithmetic_mean() {
    let mut film = Film::new("Avatar", "Sci-Fi", 8.0, 2009);
    film.add_rating(10);
    film.add_rating(9);
    assert!((film.average_rating() - 9.0).abs() < 1e-9);
}

#[test]
fn add_rating_out_of_range_is_ignored() {
    let mut film = Film::new("Avatar", "Sci-Fi", 8.0, 2009);
    film.add_rating(12);
    film.add_rating(0);
    film.add_rating(-3);
    assert_eq!(film.rating_count(), 1);
    assert_eq!(film.average_rating(), 8.0);
}

#[test]
fn clear_ratings_empties_list() {
    let mut film = Film::new("Avatar", "Sci-Fi", 8.0, 2009);
    film.add_rating(6);
    film.clear_ratings();
    assert!(film.ratings().is_empty());
    assert_eq!(film.average_rating(), 0.0);
}

#[test]
fn setters_do_not_validate() {
    let mut film = Film::new("Avatar", "Sci-Fi", 8.0, 2009);
    film.set_title("");
    film.set_category("Drama");
    film.set_year(-5);
    assert_eq!(film.title(), "");
    assert_eq!(film.category(), "Drama");
    assert_eq!(film.year(), -5);
}

#[test]
fn title_matches_ignores_case() {
    let film = Film::new("Titanik", "Romance", 7.0, 1997);
    assert!(film.title_matches("TITANIK"));
    assert!(film.title_matches("titanik"));
    assert!(!film.title_matches("titan"));
}

#[test]
fn display_shows_two_decimal_average() {
    let mut film = Film::new("Inception", "Sci-Fi", 8.0, 2010);
    film.add_rating(9);
    film.add_rating(9);
    assert_eq!(
        film.to_string(),
        "Inception | Sci-Fi | 2010 | Average: 8.67 (3 ratings)"
    );
}

proptest! {
    #[test]
    fn average_matches_sum_over_len(ratings in prop::collection::vec(1i32..=10, 0..40)) {
        let mut film = Film::unrated("P", "x", 2000);
        for &r in &ratings {
            film.add_rating(r);
        }
        if ratings.is_empty() {
            prop_assert_eq!(film.average_rating(), 0.0);
        } else {
            let expected = ratings.iter().sum::<i32>() as f64 / ratings.len() as f64;
            prop_assert!((film.average_rating() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn out_of_range_rating_never_changes_state(
        prior in prop::collection::vec(1i32..=10, 0..10),
        bad in prop_oneof![i32::MIN..1, 11..i32::MAX],
    ) {
        let mut film = Film::unrated("P", "x", 2000);
        for &r in &prior {
            film.add_rating(r);
        }
        let before = film.clone();
        film.add_rating(bad);
        prop_assert_eq!(film, before);
    }
}
