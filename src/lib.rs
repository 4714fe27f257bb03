pub mod cli;
pub mod config;
pub mod controllers;
pub mod models;
pub mod registry;
pub mod schedule;
pub mod services;

// Shared state for the whole application
pub struct AppState {
    pub service: services::BookingService,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        let service = services::BookingService::new();
        if config.demo.enabled {
            services::demo::load_demo_data(&service);
        }
        AppState { service, config }
    }
}
