use std::sync::Arc;

use crate::models::{Movie, Premiere, Theater};
use crate::registry::Registry;
use crate::schedule::Schedule;

/// Facade over the movie/theater registries and the booking schedule.
///
/// This is the single entry point external callers (the REPL, the HTTP
/// controllers, tests) use. It resolves name-based queries into id-based
/// ones; the seat-reservation operation itself lives on [`Premiere`].
pub struct BookingService {
    movies: Registry<Movie>,
    theaters: Registry<Theater>,
    schedule: Schedule,
}

impl BookingService {
    pub fn new() -> Self {
        BookingService {
            movies: Registry::new(),
            theaters: Registry::new(),
            schedule: Schedule::new(),
        }
    }

    /// Registers a movie. Names are not deduplicated; see [`Registry`].
    ///
    /// [`Registry`]: crate::registry::Registry
    pub fn add_movie(&self, name: &str) -> Arc<Movie> {
        self.movies.add_entry(name)
    }

    /// Registers a theater. Names are not deduplicated.
    pub fn add_theater(&self, name: &str) -> Arc<Theater> {
        self.theaters.add_entry(name)
    }

    pub fn find_movie(&self, name: &str) -> Option<Arc<Movie>> {
        self.movies.find_by_name(name)
    }

    pub fn find_theater(&self, name: &str) -> Option<Arc<Theater>> {
        self.theaters.find_by_name(name)
    }

    /// Schedules a premiere of the movie at the theater.
    ///
    /// Returns `false` when either name is unknown or the pair is already
    /// scheduled.
    pub fn schedule_movie(&self, movie_name: &str, theater_name: &str) -> bool {
        let Some(movie) = self.movies.find_by_name(movie_name) else {
            return false;
        };
        let Some(theater) = self.theaters.find_by_name(theater_name) else {
            return false;
        };
        self.schedule.schedule(&theater, &movie)
    }

    pub fn get_premiere(&self, theater: &Theater, movie: &Movie) -> Option<Arc<Premiere>> {
        self.schedule.find_premiere(theater.id, movie.id)
    }

    /// Name-resolving variant of [`get_premiere`]; prefer the reference
    /// variant when the records are already at hand.
    ///
    /// [`get_premiere`]: Self::get_premiere
    pub fn get_premiere_by_names(
        &self,
        theater_name: &str,
        movie_name: &str,
    ) -> Option<Arc<Premiere>> {
        let theater = self.theaters.find_by_name(theater_name)?;
        let movie = self.movies.find_by_name(movie_name)?;
        self.get_premiere(&theater, &movie)
    }

    /// Available seat numbers for the premiere, ascending. Empty both when
    /// the premiere is sold out and when it does not exist; callers that
    /// need to tell those apart ask for the premiere first.
    pub fn get_seats_available(&self, theater_name: &str, movie_name: &str) -> Vec<u16> {
        self.get_premiere_by_names(theater_name, movie_name)
            .map(|premiere| premiere.seats_available())
            .unwrap_or_default()
    }

    /// Every movie in the catalog, scheduled or not.
    pub fn movies(&self) -> Vec<Arc<Movie>> {
        self.movies.all_entries()
    }

    /// Movies with at least one premiere, ordered by first scheduling.
    pub fn playing_movies(&self) -> Vec<Arc<Movie>> {
        self.schedule
            .movies_playing()
            .into_iter()
            .filter_map(|movie_id| self.movies.find_by_id(movie_id))
            .collect()
    }

    pub fn theaters(&self) -> Vec<Arc<Theater>> {
        self.theaters.all_entries()
    }

    /// All theaters with a premiere of the named movie.
    pub fn theaters_by_movie(&self, movie_name: &str) -> Vec<Arc<Theater>> {
        let Some(movie) = self.movies.find_by_name(movie_name) else {
            return Vec::new();
        };
        self.schedule
            .theaters_showing(movie.id)
            .into_iter()
            .filter_map(|theater_id| self.theaters.find_by_id(theater_id))
            .collect()
    }
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new()
    }
}
