use std::collections::BTreeMap;
use std::fmt;
use serde::{Serialize, Deserialize};

/// Label used for the lunch cell's subject
pub const LUNCH_BREAK: &str = "Lunch Break";
/// Subject shown once a day has run out of subjects
pub const FREE_PERIOD: &str = "Free Period";
/// Placeholder teacher/room for cells without a lesson
pub const NO_ASSIGNMENT: &str = "-";

/// Fixed daily time slots, in teaching order
pub const TIME_SLOTS: [&str; 7] = [
    "9:00 AM - 10:00 AM",
    "10:00 AM - 11:00 AM",
    "11:00 AM - 12:00 PM",
    "12:00 PM - 1:00 PM",
    "1:00 PM - 2:00 PM",
    "2:00 PM - 3:00 PM",
    "3:00 PM - 4:00 PM",
];

/// The slot reserved for lunch (matched by exact label)
pub const LUNCH_SLOT: &str = TIME_SLOTS[3];

/// A teaching day. Ordering follows the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One cell of the timetable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

impl Entry {
    pub fn lesson(time: &str, subject: &str, teacher: &str, room: &str) -> Self {
        Entry {
            time: time.to_string(),
            subject: subject.to_string(),
            teacher: teacher.to_string(),
            room: room.to_string(),
        }
    }

    pub fn lunch(time: &str) -> Self {
        Entry::lesson(time, LUNCH_BREAK, NO_ASSIGNMENT, NO_ASSIGNMENT)
    }

    pub fn free_period(time: &str) -> Self {
        Entry::lesson(time, FREE_PERIOD, NO_ASSIGNMENT, NO_ASSIGNMENT)
    }

    /// True for cells that carry an actual subject (not lunch, not a free period)
    pub fn is_lesson(&self) -> bool {
        self.subject != LUNCH_BREAK && self.subject != FREE_PERIOD
    }
}

/// A full week: every day maps to one entry per time slot, in slot order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    pub days: BTreeMap<Day, Vec<Entry>>,
}

impl Timetable {
    pub fn day(&self, day: Day) -> &[Entry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates days in week order
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[Entry])> {
        self.days.iter().map(|(day, entries)| (*day, entries.as_slice()))
    }
}

/// Subjects, teachers and rooms the generator draws from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub subjects: Vec<String>,
    pub teachers: Vec<String>,
    pub rooms: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            subjects: owned(&["Mathematics", "Physics", "Chemistry", "English", "Computer Science"]),
            teachers: owned(&["Dr. Smith", "Prof. Johnson", "Dr. Williams", "Ms. Brown", "Mr. Davis"]),
            rooms: owned(&["Room 101", "Room 102", "Room 103", "Lab 1", "Lab 2"]),
        }
    }
}
