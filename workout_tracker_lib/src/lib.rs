pub mod config;
pub mod form;
pub mod location;
pub mod stamp;
pub mod tracker;
pub mod view;
pub mod workout;
pub mod workout_log;
