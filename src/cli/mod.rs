pub mod command;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::models::{Movie, Theater};
use crate::services::BookingService;

pub use command::{Command, ParseError};

/// Outcome of one processed line: keep reading or stop the loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Status {
    Continue,
    Stop,
}

/// An interactive booking session.
///
/// Holds the "currently selected" theater and movie between commands; the
/// booking core knows nothing about this state. Output goes to any `Write`
/// sink so tests can capture it.
pub struct Session<'a, W: Write> {
    service: &'a BookingService,
    out: W,
    theater: Option<Arc<Theater>>,
    movie: Option<Arc<Movie>>,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(service: &'a BookingService, out: W) -> Self {
        Session {
            service,
            out,
            theater: None,
            movie: None,
        }
    }

    /// Reads lines until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()?;
        for line in input.lines() {
            let line = line?;
            if self.process_line(&line)? == Status::Stop {
                return Ok(());
            }
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Parses and executes one line. Parse failures are reported to the
    /// user and the session keeps going.
    pub fn process_line(&mut self, line: &str) -> io::Result<Status> {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(error) => {
                writeln!(self.out, "{error}")?;
                Ok(Status::Continue)
            }
        }
    }

    fn execute(&mut self, command: Command) -> io::Result<Status> {
        match command {
            Command::SelectTheater(name) => self.select_theater(&name)?,
            Command::SelectMovie(name) => self.select_movie(&name)?,
            Command::ListTheaters => self.list_theaters()?,
            Command::ListMovies => self.list_movies()?,
            Command::ListPlayingMovies => self.list_playing_movies()?,
            Command::ListAvailableSeats => self.list_available_seats()?,
            Command::FindTheaters(name) => self.find_theaters(&name)?,
            Command::BookSeats(seats) => self.book_seats(&seats)?,
            Command::Help => self.help()?,
            Command::Quit => return Ok(Status::Stop),
        }
        Ok(Status::Continue)
    }

    fn select_theater(&mut self, name: &str) -> io::Result<()> {
        self.theater = None;
        match self.service.find_theater(name) {
            Some(theater) => {
                writeln!(self.out, "The '{}' theater is chosen", theater.name)?;
                self.theater = Some(theater);
            }
            None => writeln!(self.out, "Failed to find the '{name}' theater")?,
        }
        Ok(())
    }

    fn select_movie(&mut self, name: &str) -> io::Result<()> {
        self.movie = None;
        let Some(movie) = self.service.find_movie(name) else {
            writeln!(self.out, "Failed to find the '{name}' movie")?;
            return Ok(());
        };

        if let Some(theater) = &self.theater {
            if self.service.get_premiere(theater, &movie).is_none() {
                writeln!(
                    self.out,
                    "Unfortunately, the '{}' movie is not being shown at the '{}' theater",
                    movie.name, theater.name
                )?;
                return Ok(());
            }
        }

        writeln!(self.out, "The '{}' movie is chosen", movie.name)?;
        self.movie = Some(movie);
        Ok(())
    }

    fn list_theaters(&mut self) -> io::Result<()> {
        for theater in self.service.theaters() {
            writeln!(self.out, "\t{}", theater.name)?;
        }
        Ok(())
    }

    fn list_movies(&mut self) -> io::Result<()> {
        for movie in self.service.movies() {
            writeln!(self.out, "\t{}", movie.name)?;
        }
        Ok(())
    }

    fn list_playing_movies(&mut self) -> io::Result<()> {
        for movie in self.service.playing_movies() {
            writeln!(self.out, "\t{}", movie.name)?;
        }
        Ok(())
    }

    fn list_available_seats(&mut self) -> io::Result<()> {
        let Some((theater, movie)) = self.selection()? else {
            return Ok(());
        };
        match self.service.get_premiere(&theater, &movie) {
            Some(premiere) => {
                writeln!(self.out, "Theater: {}, Movie: {}", theater.name, movie.name)?;
                writeln!(self.out, "Seats available: {}", join_seats(&premiere.seats_available()))?;
            }
            None => writeln!(
                self.out,
                "'{}' is not being shown at '{}'",
                movie.name, theater.name
            )?,
        }
        Ok(())
    }

    fn find_theaters(&mut self, movie_name: &str) -> io::Result<()> {
        writeln!(self.out, "The movie '{movie_name}' is being shown in:")?;
        for theater in self.service.theaters_by_movie(movie_name) {
            writeln!(self.out, "\t{}", theater.name)?;
        }
        Ok(())
    }

    fn book_seats(&mut self, seats: &[u16]) -> io::Result<()> {
        let Some((theater, movie)) = self.selection()? else {
            return Ok(());
        };
        let Some(premiere) = self.service.get_premiere(&theater, &movie) else {
            writeln!(
                self.out,
                "'{}' is not being shown at '{}'",
                movie.name, theater.name
            )?;
            return Ok(());
        };

        if premiere.book_seats(seats) {
            writeln!(self.out, "Booked seats: {}", join_seats(seats))?;
        } else {
            writeln!(
                self.out,
                "Failed to book seats {}: no longer available",
                join_seats(seats)
            )?;
        }
        Ok(())
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(self.out, "Commands available:")?;
        for (usage, description) in Command::HELP {
            writeln!(self.out, "\t{usage:<28} {description}")?;
        }
        Ok(())
    }

    /// Both a theater and a movie must be selected before seat operations.
    fn selection(&mut self) -> io::Result<Option<(Arc<Theater>, Arc<Movie>)>> {
        let Some(theater) = self.theater.clone() else {
            writeln!(self.out, "Please select a Theater first (select_theater <name>)")?;
            return Ok(None);
        };
        let Some(movie) = self.movie.clone() else {
            writeln!(self.out, "Please select a Movie first (select_movie <name>)")?;
            return Ok(None);
        };
        Ok(Some((theater, movie)))
    }
}

fn join_seats(seats: &[u16]) -> String {
    seats
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::demo;

    fn run_lines(service: &BookingService, lines: &[&str]) -> String {
        let mut out = Vec::new();
        let mut session = Session::new(service, &mut out);
        for line in lines {
            session.process_line(line).expect("write to Vec");
        }
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn booking_through_the_repl() {
        let service = BookingService::new();
        demo::load_demo_data(&service);

        let output = run_lines(
            &service,
            &[
                "select_theater 4DX",
                "select_movie Fight Club",
                "list_available_seats",
                "book_seats 1 2 3",
                "book_seats 1 2 3",
            ],
        );

        assert!(output.contains("The '4DX' theater is chosen"));
        assert!(output.contains("The 'Fight Club' movie is chosen"));
        assert!(output.contains("Seats available: 1 2 3 4 5"));
        assert!(output.contains("Booked seats: 1 2 3"));
        assert!(output.contains("Failed to book seats 1 2 3"));

        let premiere = service
            .get_premiere_by_names("4DX", "Fight Club")
            .expect("scheduled in demo data");
        assert_eq!(premiere.seats_available(), (4..=20).collect::<Vec<u16>>());
    }

    #[test]
    fn seat_commands_demand_a_selection() {
        let service = BookingService::new();
        demo::load_demo_data(&service);

        let output = run_lines(&service, &["list_available_seats"]);
        assert!(output.contains("Please select a Theater first"));

        let output = run_lines(&service, &["select_theater 4DX", "book_seats 1"]);
        assert!(output.contains("Please select a Movie first"));
    }

    #[test]
    fn selecting_a_movie_not_shown_at_the_selected_theater_is_refused() {
        let service = BookingService::new();
        demo::load_demo_data(&service);

        let output = run_lines(&service, &["select_theater Odeon", "select_movie Fight Club"]);
        assert!(output
            .contains("the 'Fight Club' movie is not being shown at the 'Odeon' theater"));
    }

    #[test]
    fn parse_errors_are_reported_and_the_session_continues() {
        let service = BookingService::new();
        demo::load_demo_data(&service);

        let output = run_lines(&service, &["frobnicate", "book_seats one", "list_playing_movies"]);
        assert!(output.contains("invalid command \"frobnicate\""));
        assert!(output.contains("invalid seat number 'one'"));
        assert!(output.contains("Fight Club"));
    }

    #[test]
    fn find_theaters_lists_every_showing() {
        let service = BookingService::new();
        demo::load_demo_data(&service);

        let output = run_lines(&service, &["find_theaters Fight Club"]);
        assert!(output.contains("The movie 'Fight Club' is being shown in:"));
        assert!(output.contains("\t4DX"));
        assert!(output.contains("\tElectric Cinema"));
    }

    #[test]
    fn quit_stops_the_loop() {
        let service = BookingService::new();
        let mut out = Vec::new();
        let mut session = Session::new(&service, &mut out);
        assert_eq!(session.process_line("q").expect("write"), Status::Stop);
    }
}
