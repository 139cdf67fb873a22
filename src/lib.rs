pub mod api;
pub mod config;
pub mod events;
pub mod sizing;
mod state;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use events::EventHub;
pub use state::AppState;
