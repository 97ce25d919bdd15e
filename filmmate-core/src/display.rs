//! Plain-text rendering of film listings.
//!
//! The CLI adds colour on top; everything produced here is uncoloured so the
//! same text can go to a log file or a test buffer.

use crate::film::Film;
use crate::query::{CappedResults, RESULT_LIMIT};

/// Shown instead of a listing when there is nothing to list.
pub const EMPTY_LIST_MESSAGE: &str = "The film list is empty or could not be found.";

/// Banner for the complete catalog listing.
pub const ALL_FILMS_TITLE: &str = "All Films";

/// Shown when a search or filter matched nothing.
pub const NO_MATCHES_MESSAGE: &str = "No films found.";

/// One-line summary of a film.
pub fn film_line(film: &Film) -> String {
    film.to_string()
}

/// Banner line placed above a listing.
pub fn banner(title: &str) -> String {
    format!("--- {title} ---")
}

fn render(films: &[&Film], title: &str) -> String {
    if films.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }
    let mut out = banner(title);
    for film in films {
        out.push('\n');
        out.push_str(&film_line(film));
    }
    out
}

/// Render every film under a banner, without capping.
///
/// Used for full listings and sorted output.
pub fn format_full_list(films: &[&Film], title: &str) -> String {
    render(films, title)
}

/// Render at most [`RESULT_LIMIT`] films under a banner.
///
/// When more films were supplied the banner carries an "N of TOTAL"
/// annotation.
pub fn format_film_list(films: &[&Film], title: &str) -> String {
    format_capped(&CappedResults::new(films.to_vec()), title)
}

/// Render an already capped result set.
pub fn format_capped(results: &CappedResults<'_>, title: &str) -> String {
    if results.is_truncated() {
        render(
            &results.shown,
            &format!("{title} ({RESULT_LIMIT} of {})", results.total),
        )
    } else {
        render(&results.shown, title)
    }
}

/// Render search/filter results with the standard headings.
pub fn format_search_results(matches: &[&Film]) -> String {
    if matches.is_empty() {
        return NO_MATCHES_MESSAGE.to_string();
    }
    format_film_list(matches, "Found")
}

/// Render the distinct category list.
pub fn format_categories(categories: &[&str]) -> String {
    if categories.is_empty() {
        return "No films, so no categories.".to_string();
    }
    let mut out = banner("Existing Categories");
    for category in categories {
        out.push_str("\n- ");
        out.push_str(category);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn many(n: i32) -> Vec<Film> {
        (0..n)
            .map(|i| Film::new(format!("Film {i}"), "Action", 7.0, 2000 + i))
            .collect()
    }

    #[test]
    fn empty_list_shows_explicit_message() {
        assert_eq!(format_full_list(&[], "All Films"), EMPTY_LIST_MESSAGE);
        assert_eq!(format_film_list(&[], "Found"), EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn full_list_has_banner_and_lines() {
        let films = many(2);
        let refs: Vec<&Film> = films.iter().collect();
        let text = format_full_list(&refs, "All Films");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "--- All Films ---");
        assert_eq!(lines[1], "Film 0 | Action | 2000 | Average: 7.00 (1 ratings)");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn full_list_is_not_capped() {
        let films = many(15);
        let refs: Vec<&Film> = films.iter().collect();
        assert_eq!(format_full_list(&refs, "All").lines().count(), 16);
    }

    #[test]
    fn eleven_matches_show_ten_of_eleven() {
        let films = many(11);
        let refs: Vec<&Film> = films.iter().collect();
        let text = format_search_results(&refs);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "--- Found (10 of 11) ---");
        assert_eq!(lines.len(), 11);
        assert!(!text.contains("Film 10"));
    }

    #[test]
    fn ten_matches_have_no_annotation() {
        let films = many(10);
        let refs: Vec<&Film> = films.iter().collect();
        let text = format_search_results(&refs);
        assert!(text.starts_with("--- Found ---"));
        assert_eq!(text.lines().count(), 11);
    }

    #[test]
    fn no_matches_message() {
        assert_eq!(format_search_results(&[]), NO_MATCHES_MESSAGE);
    }

    #[test]
    fn categories_are_bulleted() {
        assert_eq!(
            format_categories(&["Sci-Fi", "Drama"]),
            "--- Existing Categories ---\n- Sci-Fi\n- Drama"
        );
        assert_eq!(format_categories(&[]), "No films, so no categories.");
    }
}
