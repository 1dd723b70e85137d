//! `kickoff logs`: list or print the logs of previous runs.

use kickoff_adapters::LocalFilesystem;
use kickoff_core::{
    application::{LogEntry, LogService},
    domain::EXIT_SUCCESS,
};

use crate::{cli::LogsArgs, commands, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: LogsArgs, config: &AppConfig, output: &OutputManager) -> CliResult<i32> {
    let data_folder = commands::data_folder(config)?;
    let service = LogService::new(Box::new(LocalFilesystem::new()));

    if args.latest {
        match service.latest(&data_folder)? {
            Some(entry) if args.path => output.print(&entry.path.display().to_string())?,
            Some(entry) => output.print_raw(&service.read(&entry)?)?,
            None => output.info(&format!(
                "No run logs in {}",
                data_folder.display()
            ))?,
        }
        return Ok(EXIT_SUCCESS);
    }

    let entries = service.list(&data_folder)?;
    if entries.is_empty() {
        output.info(&format!("No run logs in {}", data_folder.display()))?;
        return Ok(EXIT_SUCCESS);
    }

    if args.path {
        for entry in &entries {
            output.print(&entry.path.display().to_string())?;
        }
    } else {
        output.header("Run logs:")?;
        for entry in &entries {
            output.print(&listing_line(entry))?;
        }
    }
    Ok(EXIT_SUCCESS)
}

fn listing_line(entry: &LogEntry) -> String {
    format!("  {:>4}  {}", entry.number, entry.path.display())
}
