pub mod dashboard_engine;
pub mod progress_engine;
pub mod workout_log;
