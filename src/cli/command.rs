use thiserror::Error;

/// Everything that can go wrong turning a line of input into a [`Command`].
/// Parse failures are reported to the user and never reach the booking core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("invalid command \"{0}\" (try 'help')")]
    Unknown(String),
    #[error("{0}: {1} expected")]
    MissingArgument(&'static str, &'static str),
    #[error("invalid seat number '{0}'")]
    InvalidSeat(String),
}

/// A parsed REPL command. The free-text vocabulary maps onto the booking
/// service operations; selection state lives in the session, not here.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    SelectTheater(String),
    SelectMovie(String),
    ListTheaters,
    ListMovies,
    ListPlayingMovies,
    ListAvailableSeats,
    FindTheaters(String),
    BookSeats(Vec<u16>),
    Help,
    Quit,
}

impl Command {
    /// Command names and usage lines, for `help`.
    pub const HELP: &'static [(&'static str, &'static str)] = &[
        ("select_theater <name>", "choose the theater to book in"),
        ("select_movie <name>", "choose the movie to book for"),
        ("list_theaters", "list all theaters"),
        ("list_movies", "list all movies"),
        ("list_playing_movies", "list movies currently scheduled"),
        ("list_available_seats", "show free seats for the selection"),
        ("find_theaters <movie>", "list theaters showing a movie"),
        ("book_seats <n> [n ...]", "book the given seat numbers"),
        ("help", "show this list"),
        ("quit | q", "exit"),
    ];

    /// Splits the line into a command word and its argument tail, then maps
    /// the word onto a command value.
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let line = line.trim();
        let (word, args) = match line.split_once(' ') {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" => Err(ParseError::Empty),
            "select_theater" => Ok(Command::SelectTheater(named_arg(
                "select_theater",
                "theater name",
                args,
            )?)),
            "select_movie" => Ok(Command::SelectMovie(named_arg(
                "select_movie",
                "movie name",
                args,
            )?)),
            "list_theaters" => Ok(Command::ListTheaters),
            "list_movies" => Ok(Command::ListMovies),
            "list_playing_movies" => Ok(Command::ListPlayingMovies),
            "list_available_seats" => Ok(Command::ListAvailableSeats),
            "find_theaters" => Ok(Command::FindTheaters(named_arg(
                "find_theaters",
                "movie name",
                args,
            )?)),
            "book_seats" => Ok(Command::BookSeats(parse_seats(args)?)),
            "help" => Ok(Command::Help),
            "quit" | "q" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_owned())),
        }
    }
}

fn named_arg(command: &'static str, what: &'static str, args: &str) -> Result<String, ParseError> {
    if args.is_empty() {
        return Err(ParseError::MissingArgument(command, what));
    }
    Ok(args.to_owned())
}

fn parse_seats(args: &str) -> Result<Vec<u16>, ParseError> {
    if args.is_empty() {
        return Err(ParseError::MissingArgument("book_seats", "seat numbers"));
    }
    args.split_whitespace()
        .map(|token| {
            token
                .parse::<u16>()
                .map_err(|_| ParseError::InvalidSeat(token.to_owned()))
        })
        .collect()
}
