use std::path::PathBuf;
use clap::{Parser, Subcommand};
use tracing::info;

use class_timetable::display::{print_timetable, write_timetable_to_file};
use class_timetable::export::export_timetable_to_csv;
use class_timetable::logging::init_logger;
use class_timetable::{web, ConfigStore, Configuration, Picker, RandomPicker};

#[derive(Parser)]
#[command(author, version, about = "Random weekly class timetable generator")]
struct Args {
    /// JSON file holding subjects, teachers and rooms
    #[arg(long, short, global = true, env = "TIMETABLE_DATA_FILE", default_value = "data.json")]
    data_file: PathBuf,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server
    Web {
        #[arg(long, env = "TIMETABLE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, short, env = "TIMETABLE_PORT", default_value_t = 5000)]
        port: u16,
    },
    /// Generate one timetable and print it
    Generate {
        /// Also write the text rendering to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Also export as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let store = ConfigStore::new(args.data_file, Configuration::default());

    match args.command {
        Command::Web { host, port } => {
            web::start_server(&host, port, store).await?;
        }
        Command::Generate { output, csv, seed } => {
            let config = store.load()?;
            let mut picker: Box<dyn Picker> = match seed {
                Some(seed) => Box::new(RandomPicker::seeded(seed)),
                None => Box::new(RandomPicker::thread()),
            };
            let timetable = config.generate(picker.as_mut())?;

            print_timetable(&timetable)?;

            if let Some(path) = output {
                write_timetable_to_file(&timetable, &path)?;
                info!(path = %path.display(), "timetable written");
            }
            if let Some(path) = csv {
                export_timetable_to_csv(&timetable, &path)?;
                info!(path = %path.display(), "timetable exported");
            }
        }
    }

    Ok(())
}
