use std::io::Write;
use std::path::Path;
use csv::Writer;
use crate::timetable::Timetable;

/// Writes the timetable as CSV rows: day,time,subject,teacher,room
pub fn write_timetable_csv<W: Write>(writer: W, timetable: &Timetable) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["day", "time", "subject", "teacher", "room"])?;

    for (day, entries) in timetable.iter() {
        for entry in entries {
            wtr.write_record([
                day.name(),
                entry.time.as_str(),
                entry.subject.as_str(),
                entry.teacher.as_str(),
                entry.room.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the timetable to a CSV file, replacing any existing file
pub fn export_timetable_to_csv(timetable: &Timetable, csv_path: &Path) -> Result<(), csv::Error> {
    let file = std::fs::File::create(csv_path)?;
    write_timetable_csv(file, timetable)
}
