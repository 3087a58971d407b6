use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use chrono::Local;
use crate::timetable::{Entry, Timetable};

/// Formats a single cell: lessons get a (teacher, room) suffix, lunch and free periods don't
pub fn format_entry(entry: &Entry) -> String {
    if entry.is_lesson() {
        format!("{:<20} {} ({}, {})", entry.time, entry.subject, entry.teacher, entry.room)
    } else {
        format!("{:<20} {}", entry.time, entry.subject)
    }
}

/// Writes the timetable day by day, one line per slot
pub fn write_timetable<W: Write>(out: &mut W, timetable: &Timetable) -> io::Result<()> {
    for (day, entries) in timetable.iter() {
        writeln!(out, "** {} **", day)?;
        for entry in entries {
            writeln!(out, "  {}", format_entry(entry))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the timetable to a file, with a generation timestamp header
pub fn write_timetable_to_file(timetable: &Timetable, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Generated {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;
    write_timetable(&mut file, timetable)
}

/// Prints the timetable to stdout
pub fn print_timetable(timetable: &Timetable) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_timetable(&mut lock, timetable)
}
