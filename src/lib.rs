pub mod timetable;
pub mod store;
pub mod error;
pub mod display;
pub mod export;
pub mod logging;
pub mod web;

pub use error::{ApiError, StoreError, TimetableError};
pub use store::ConfigStore;
pub use timetable::{generate_timetable, Configuration, Day, Entry, Picker, RandomPicker, Timetable};
