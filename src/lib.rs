pub mod constants;
pub mod seeded_rng;
pub mod geo;
pub mod hotspot;
pub mod heat_field;
pub mod detection;
pub mod grid_route;
pub mod metrics;
pub mod export;
pub mod scan;
pub mod report;
