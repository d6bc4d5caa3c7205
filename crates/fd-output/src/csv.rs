//! CSV chronicle backend.
//!
//! Creates three files in the configured output directory:
//! - `production.csv`
//! - `consumption.csv`
//! - `standings.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use fd_core::Part;

use crate::writer::ChronicleWriter;
use crate::{ConsumptionRow, OutputResult, ProductionRow, StandingRow};

pub struct CsvChronicle {
    production:  Writer<File>,
    consumption: Writer<File>,
    standings:   Writer<File>,
    finished:    bool,
}

impl CsvChronicle {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut production = Writer::from_path(dir.join("production.csv"))?;
        let mut header = vec!["day", "units"];
        header.extend(Part::ALL.map(Part::name));
        header.extend(["rejected", "stock"]);
        production.write_record(&header)?;

        let mut consumption = Writer::from_path(dir.join("consumption.csv"))?;
        consumption.write_record(["day", "faction_id", "faction", "taken", "built", "total_built"])?;

        let mut standings = Writer::from_path(dir.join("standings.csv"))?;
        standings.write_record(["faction_id", "faction", "constructs", "withdrawn", "spare"])?;

        Ok(Self {
            production,
            consumption,
            standings,
            finished: false,
        })
    }
}

impl ChronicleWriter for CsvChronicle {
    fn write_production(&mut self, row: &ProductionRow) -> OutputResult<()> {
        let mut record = vec![row.day.to_string(), row.units.to_string()];
        record.extend(row.parts.iter().map(u32::to_string));
        record.push(row.rejected.to_string());
        record.push(row.stock.to_string());
        self.production.write_record(&record)?;
        Ok(())
    }

    fn write_consumption(&mut self, row: &ConsumptionRow) -> OutputResult<()> {
        self.consumption.write_record(&[
            row.day.to_string(),
            row.faction_id.to_string(),
            row.faction.clone(),
            row.taken.to_string(),
            row.built.to_string(),
            row.total_built.to_string(),
        ])?;
        Ok(())
    }

    fn write_standings(&mut self, rows: &[StandingRow]) -> OutputResult<()> {
        for row in rows {
            self.standings.write_record(&[
                row.faction_id.to_string(),
                row.faction.clone(),
                row.constructs.to_string(),
                row.withdrawn.to_string(),
                row.spare.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.production.flush()?;
        self.consumption.flush()?;
        self.standings.flush()?;
        Ok(())
    }
}
