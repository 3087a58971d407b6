use tracing::debug;
use crate::error::TimetableError;
use super::picker::Picker;
use super::types::{Configuration, Day, Entry, Timetable, LUNCH_SLOT, TIME_SLOTS};

/// Generates a random weekly timetable
///
/// Each day starts from a fresh copy of `subjects`. Every non-lunch slot draws a subject
/// from that day's pool (removing it), then a teacher and a room from the full lists.
/// Once the pool is empty the remaining slots become free periods.
///
/// Fails with `InvalidConfiguration` when there are subjects to place but no teachers or
/// no rooms to place them with.
pub fn generate_timetable<P: Picker + ?Sized>(
    subjects: &[String],
    teachers: &[String],
    rooms: &[String],
    picker: &mut P,
) -> Result<Timetable, TimetableError> {
    // The first slot of every day is a lesson, so any subject means we need both lists
    if !subjects.is_empty() {
        if teachers.is_empty() {
            return Err(TimetableError::InvalidConfiguration {
                message: format!("{} subject(s) configured but no teachers", subjects.len()),
            });
        }
        if rooms.is_empty() {
            return Err(TimetableError::InvalidConfiguration {
                message: format!("{} subject(s) configured but no rooms", subjects.len()),
            });
        }
    }

    let mut timetable = Timetable::default();

    for day in Day::ALL {
        let mut available_subjects: Vec<&String> = subjects.iter().collect();
        let mut entries = Vec::with_capacity(TIME_SLOTS.len());

        for time_slot in TIME_SLOTS {
            if time_slot == LUNCH_SLOT {
                entries.push(Entry::lunch(time_slot));
            } else if !available_subjects.is_empty() {
                let subject = available_subjects.remove(picker.pick(available_subjects.len()));
                let teacher = &teachers[picker.pick(teachers.len())];
                let room = &rooms[picker.pick(rooms.len())];
                entries.push(Entry::lesson(time_slot, subject, teacher, room));
            } else {
                entries.push(Entry::free_period(time_slot));
            }
        }

        debug!(%day, lessons = entries.iter().filter(|e| e.is_lesson()).count(), "day generated");
        timetable.days.insert(day, entries);
    }

    Ok(timetable)
}

impl Configuration {
    /// Generates a timetable from this configuration
    pub fn generate<P: Picker + ?Sized>(&self, picker: &mut P) -> Result<Timetable, TimetableError> {
        generate_timetable(&self.subjects, &self.teachers, &self.rooms, picker)
    }
}
