//! Interactive start, administrator and viewer menus.
//!
//! Roles carry no behaviour of their own; this module decides which catalog
//! operations each role is offered. Every failure is printed and control
//! returns to the menu that started the action. End of input leaves all
//! menus.

use std::io::{self, BufRead, Write};

use filmmate_core::display::{
    ALL_FILMS_TITLE, format_categories, format_full_list, format_search_results,
};
use filmmate_core::{Film, Role, SearchKind, SortKey, User};
use filmmate_lib::ops::check_new_title;
use filmmate_lib::{
    Accounts, Catalog, DELETE_TOKEN, DeleteConfirmation, DeleteOutcome, FilmUpdate, NewFilm,
    RecordStore, add_film, delete_film, rate_film, update_film,
};

use crate::console::Console;

/// Read a line or leave the current action on end of input.
macro_rules! ask {
    ($console:expr, $label:expr) => {
        match $console.prompt($label)? {
            Some(line) => line,
            None => return Ok(()),
        }
    };
}

/// Everything an interactive session works on.
pub(crate) struct Session<F, U, R, W> {
    pub catalog: Catalog<F>,
    pub accounts: Accounts<U>,
    pub console: Console<R, W>,
    pub current_year: i32,
}

impl<R: BufRead, W: Write> DeleteConfirmation for Console<R, W> {
    fn confirm(&mut self, film: &Film) -> bool {
        let warning = match film.rating_count() {
            0 => String::new(),
            n => format!("WARNING: '{}' has {n} ratings. ", film.title()),
        };
        let label = format!(
            "Are you sure you want to delete {}? {warning}(y/n): ",
            film.title()
        );
        match self.prompt(&label) {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }

    fn final_check(&mut self, _film: &Film, token: &str) -> String {
        let label = format!("Deleting loses all ratings! Type '{token}' to confirm: ");
        self.prompt(&label).ok().flatten().unwrap_or_default()
    }
}

impl<F, U, R, W> Session<F, U, R, W>
where
    F: RecordStore<Film>,
    U: RecordStore<User>,
    R: BufRead,
    W: Write,
{
    /// Run the start menu until the user exits or input ends.
    pub(crate) fn run(&mut self) -> io::Result<()> {
        self.console.heading("--- FilmMate ---")?;
        loop {
            self.console.blank()?;
            self.console.say("1. Register\n2. Log in\n3. Exit")?;
            let Some(choice) = self.console.prompt("Choice: ")? else {
                return Ok(());
            };
            match choice.trim() {
                "1" => self.register()?,
                "2" => {
                    if let Some(role) = self.login()? {
                        match role {
                            Role::Administrator => self.admin_menu()?,
                            Role::Viewer => self.viewer_menu()?,
                        }
                    }
                }
                "3" => return Ok(()),
                _ => self.console.error("Invalid choice!")?,
            }
        }
    }

    fn register(&mut self) -> io::Result<()> {
        let username = ask!(self.console, "Username: ");
        if let Err(e) = self.accounts.check_username(&username) {
            return self.console.error(e);
        }
        let password = ask!(self.console, "Password: ");
        match self.accounts.register(&username, &password) {
            Ok(_) => self.console.success("Registration successful!"),
            Err(e) => self.console.error(e),
        }
    }

    /// Returns the role of the logged-in user.
    fn login(&mut self) -> io::Result<Option<Role>> {
        let Some(username) = self.console.prompt("Username: ")? else {
            return Ok(None);
        };
        let Some(password) = self.console.prompt("Password: ")? else {
            return Ok(None);
        };
        match self.accounts.login(&username, &password) {
            Some(user) => {
                let role = user.role;
                log::debug!("'{}' logged in as {role}", user.username);
                self.console.success(format!("Welcome {}", user.username))?;
                Ok(Some(role))
            }
            None => {
                self.console.error("Wrong username or password!")?;
                Ok(None)
            }
        }
    }

    fn admin_menu(&mut self) -> io::Result<()> {
        loop {
            self.console.heading("--- Administrator Menu ---")?;
            self.console.say(
                "1. Add film\n2. Update film\n3. Delete film\n4. List films\n\
                 5. Search/filter films\n6. Show all categories\n7. Sort films\n\
                 8. Rate film\n0. Log out",
            )?;
            let choice = ask!(self.console, "Choice: ");
            match choice.trim() {
                "1" => self.add()?,
                "2" => self.update()?,
                "3" => self.delete()?,
                "4" => self.list()?,
                "5" => self.search()?,
                "6" => self.categories()?,
                "7" => self.sort_menu()?,
                "8" => self.rate()?,
                "0" => return Ok(()),
                _ => self.console.error("Invalid choice!")?,
            }
        }
    }

    fn viewer_menu(&mut self) -> io::Result<()> {
        loop {
            self.console.heading("--- Viewer Menu ---")?;
            self.console.say(
                "1. List films\n2. Search/filter films\n3. Sort films\n4. Rate film\n\
                 5. Show all categories\n0. Log out",
            )?;
            let choice = ask!(self.console, "Choice: ");
            match choice.trim() {
                "1" => self.list()?,
                "2" => self.search()?,
                "3" => self.sort_menu()?,
                "4" => self.rate()?,
                "5" => self.categories()?,
                "0" => return Ok(()),
                _ => self.console.error("Invalid choice!")?,
            }
        }
    }

    fn add(&mut self) -> io::Result<()> {
        let title = ask!(self.console, "Title: ");
        if let Err(e) = check_new_title(&self.catalog, &title) {
            return self.console.error(e);
        }
        let category = ask!(self.console, "Category: ");
        let rating = ask!(self.console, "Rating (1-10): ");
        let year = ask!(self.console, "Year: ");

        let input = NewFilm {
            title,
            category,
            rating,
            year,
        };
        match add_film(&mut self.catalog, &input, self.current_year) {
            Ok(added) => {
                if let Some(warning) = added.warning() {
                    self.console.warn(warning)?;
                }
                self.console.success("Film added!")
            }
            Err(e) => self.console.error(e),
        }
    }

    fn update(&mut self) -> io::Result<()> {
        let title = ask!(self.console, "Film title: ");
        if title.trim().is_empty() {
            return self.console.error("Film title must not be empty.");
        }
        if self.catalog.find(&title).is_none() {
            return self.console.error("Film not found!");
        }

        self.console.say("1. Title 2. Category 3. Year")?;
        let choice = ask!(self.console, "Field: ");
        let update = match choice.trim() {
            "1" => FilmUpdate::Title(ask!(self.console, "New title: ")),
            "2" => FilmUpdate::Category(ask!(self.console, "New category: ")),
            "3" => FilmUpdate::Year(ask!(self.console, "New year: ")),
            _ => return self.console.error("Invalid choice!"),
        };
        match update_film(&mut self.catalog, &title, update, self.current_year) {
            Ok(()) => self.console.success("Film updated!"),
            Err(e) => self.console.error(e),
        }
    }

    fn delete(&mut self) -> io::Result<()> {
        let title = ask!(self.console, "Film title: ");
        match delete_film(&mut self.catalog, &title, &mut self.console) {
            Ok(DeleteOutcome::Deleted) => self.console.success("Film deleted!"),
            Ok(DeleteOutcome::Cancelled) => self.console.say("Deletion cancelled."),
            Ok(DeleteOutcome::FinalCheckFailed) => self.console.warn(format!(
                "Deletion cancelled: '{DELETE_TOKEN}' was not entered."
            )),
            Err(e) => self.console.error(e),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        let films: Vec<&Film> = self.catalog.films().iter().collect();
        let text = format_full_list(&films, ALL_FILMS_TITLE);
        self.console.say(text)
    }

    fn categories(&mut self) -> io::Result<()> {
        let text = format_categories(&self.catalog.categories());
        self.console.say(text)
    }

    fn search(&mut self) -> io::Result<()> {
        if self.catalog.is_empty() {
            return self.console.error("No films to search!");
        }
        self.console.heading("--- Search and Filter Films ---")?;
        self.console.say(
            "1. Search by title\n2. Filter by category\n3. Filter by minimum rating\n\
             0. Back",
        )?;
        let choice = ask!(self.console, "Choice: ");
        let (kind, label) = match choice.trim() {
            "1" => (SearchKind::Title, "Part of the title: "),
            "2" => (SearchKind::Category, "Category: "),
            "3" => (SearchKind::MinRating, "Minimum rating: "),
            "0" => return Ok(()),
            _ => return self.console.error("Invalid choice."),
        };
        let query = ask!(self.console, label);
        match self.catalog.search(kind, &query) {
            Ok(matches) => {
                let text = format_search_results(&matches);
                self.console.say(text)
            }
            Err(e) => self.console.error(e),
        }
    }

    fn sort_menu(&mut self) -> io::Result<()> {
        loop {
            self.console.heading("--- Sort Films ---")?;
            for (idx, key) in SortKey::all().iter().enumerate() {
                self.console.say(format!("{}. By {}", idx + 1, key.display_name()))?;
            }
            self.console.say("0. Back")?;
            let choice = ask!(self.console, "Sort by: ");
            let key = match choice.trim() {
                "0" => return Ok(()),
                "1" => SortKey::Rating,
                "2" => SortKey::Year,
                "3" => SortKey::Title,
                _ => {
                    self.console.error("Invalid choice!")?;
                    continue;
                }
            };

            self.console.say("  A. Ascending\n  D. Descending")?;
            let direction = ask!(self.console, "Direction (A/D): ");
            let ascending = match direction.trim().to_uppercase().as_str() {
                "A" => true,
                "D" => false,
                _ => {
                    self.console.error("Invalid direction.")?;
                    continue;
                }
            };

            let sorted = self.catalog.sorted(key, ascending);
            let text = format_full_list(&sorted, &key.order(ascending).heading());
            self.console.say(text)?;
        }
    }

    fn rate(&mut self) -> io::Result<()> {
        if self.catalog.is_empty() {
            return self.console.error("No films to rate.");
        }
        let title = ask!(self.console, "Title of the film to rate: ");
        if title.trim().is_empty() {
            return self.console.error("Film title must not be empty.");
        }
        let Some(film) = self.catalog.find(&title) else {
            return self.console.error("Film not found!");
        };
        let label = format!("Your rating for '{}' (1-10): ", film.title());
        let rating = ask!(self.console, &label);
        match rate_film(&mut self.catalog, &title, &rating) {
            Ok(average) => self
                .console
                .success(format!("Rating saved. New average is {average:.2}.")),
            Err(e) => self.console.error(e),
        }
    }
}

#[cfg(test)]
#[path = "tests/menu_tests.rs"]
mod tests;
