use crate::error::{AirschedError, Result};
use crate::types::{Schedule, TrialOutcome};
use polars::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const SLOT_HEADER: &str = "Time Slot";
pub const PROGRAM_HEADER: &str = "Program";

pub struct ScheduleExporter;

impl ScheduleExporter {
    /// Render a schedule as a two-column DataFrame for display or export.
    pub fn to_dataframe(schedule: &Schedule) -> Result<DataFrame> {
        let slots: Vec<String> = schedule.slots().map(|s| s.to_string()).collect();
        let programs: Vec<String> = schedule.programs().map(|p| p.to_string()).collect();

        let df = DataFrame::new(vec![
            Column::new(SLOT_HEADER.into(), slots),
            Column::new(PROGRAM_HEADER.into(), programs),
        ])?;
        Ok(df)
    }

    /// Serialize a schedule as UTF-8 CSV with header `Time Slot,Program`,
    /// one row per assignment in output order, no trailing metadata.
    pub fn write_csv<W: Write>(schedule: &Schedule, writer: &mut W) -> Result<()> {
        let mut df = Self::to_dataframe(schedule)?;
        CsvWriter::new(writer)
            .include_header(true)
            .finish(&mut df)
            .map_err(|e| AirschedError::Export(format!("Failed to write CSV: {}", e)))?;
        Ok(())
    }

    pub fn write_csv_file<P: AsRef<Path>>(schedule: &Schedule, path: P) -> Result<()> {
        let mut file = File::create(path.as_ref())?;
        Self::write_csv(schedule, &mut file)
    }

    /// Per-trial file path in the original download naming style,
    /// e.g. `trial_1_schedule.csv`.
    pub fn trial_file_path<P: AsRef<Path>>(dir: P, outcome: &TrialOutcome) -> PathBuf {
        let stem = outcome.label.to_lowercase().replace(' ', "_");
        dir.as_ref().join(format!("{}_schedule.csv", stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Assignment, Parameters};

    fn sample_schedule() -> Schedule {
        Schedule::new(vec![
            Assignment {
                slot: "08:00 AM".to_string(),
                program: "News".to_string(),
            },
            Assignment {
                slot: "09:00 AM".to_string(),
                program: "Drama".to_string(),
            },
        ])
    }

    #[test]
    fn csv_has_contract_header_and_rows() {
        let mut buf = Vec::new();
        ScheduleExporter::write_csv(&sample_schedule(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Time Slot,Program"));
        assert_eq!(lines.next(), Some("08:00 AM,News"));
        assert_eq!(lines.next(), Some("09:00 AM,Drama"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_schedule_writes_header_only() {
        let mut buf = Vec::new();
        ScheduleExporter::write_csv(&Schedule::empty(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().next(), Some("Time Slot,Program"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn trial_paths_follow_download_naming() {
        let outcome = TrialOutcome {
            label: "Trial 2".to_string(),
            parameters: Parameters::default(),
            schedule: Schedule::empty(),
        };
        let path = ScheduleExporter::trial_file_path("out", &outcome);
        assert_eq!(path, PathBuf::from("out/trial_2_schedule.csv"));
    }
}
