use tracing::info;

use crate::services::BookingService;

/// Seeds the service with a well-known catalog and a few premieres, for the
/// REPL and for manual poking at the HTTP API.
pub fn load_demo_data(service: &BookingService) {
    for movie in [
        "Fight Club",
        "The Lord of the Rings: The Fellowship of the Ring",
        "The Lord of the Rings: The Two Towers",
        "The Lord of the Rings: The Return of the King",
        "The Green Mile",
        "The Shawshank Redemption",
        "Pulp Fiction",
        "Terminator",
        "Terminator 2: Judgment Day",
        "Inception",
        "Harry Potter and the Sorcerer's Stone",
        "Harry Potter and the Chamber of Secrets",
        "Harry Potter and the Goblet of Fire",
        "Harry Potter and the Prisoner of Azkaban",
    ] {
        service.add_movie(movie);
    }

    for theater in [
        "Raj Mandir",
        "Alamo Drafthouse",
        "Cine Thisio",
        "Kino International",
        "4DX",
        "Uplink X",
        "Prasads",
        "Cine de Chef",
        "Castro Theatre",
        "Rooftop Cinema",
        "AMC Pacific Place Cinema",
        "Odeon",
        "Biograf Teater",
        "Electric Cinema",
        "Sun Pictures",
    ] {
        service.add_theater(theater);
    }

    let scheduled = [
        ("Fight Club", "4DX"),
        ("Fight Club", "Electric Cinema"),
        ("The Green Mile", "4DX"),
        ("Terminator", "4DX"),
    ]
    .into_iter()
    .filter(|(movie, theater)| service.schedule_movie(movie, theater))
    .count();

    info!(
        "Demo data loaded: {} movies, {} theaters, {} premieres",
        service.movies().len(),
        service.theaters().len(),
        scheduled
    );
}
