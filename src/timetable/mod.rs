pub mod types;
pub mod picker;
pub mod generator;

pub use types::{Configuration, Day, Entry, Timetable, LUNCH_SLOT, TIME_SLOTS};
pub use picker::{Picker, RandomPicker};
pub use generator::generate_timetable;
