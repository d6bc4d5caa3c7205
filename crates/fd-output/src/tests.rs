//! Integration tests for fd-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvChronicle;
    use crate::row::{ConsumptionRow, ProductionRow, StandingRow};
    use crate::writer::ChronicleWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvChronicle::new(dir.path()).unwrap();
        assert!(dir.path().join("production.csv").exists());
        assert!(dir.path().join("consumption.csv").exists());
        assert!(dir.path().join("standings.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvChronicle::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir, "production.csv"),
            ["day", "units", "head", "torso", "arm", "leg", "rejected", "stock"],
        );
        assert_eq!(
            headers(&dir, "consumption.csv"),
            ["day", "faction_id", "faction", "taken", "built", "total_built"],
        );
        assert_eq!(
            headers(&dir, "standings.csv"),
            ["faction_id", "faction", "constructs", "withdrawn", "spare"],
        );
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let mut w = CsvChronicle::new(dir.path()).unwrap();
        w.write_production(&ProductionRow {
            day: 1, units: 6, parts: [1, 2, 3, 0], rejected: 0, stock: 6,
        }).unwrap();
        w.write_consumption(&ConsumptionRow {
            day: 1, faction_id: 0, faction: "World".into(), taken: 5, built: 0, total_built: 0,
        }).unwrap();
        w.write_standings(&[StandingRow {
            faction_id: 0, faction: "World".into(), constructs: 0, withdrawn: 5, spare: 5,
        }]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("production.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "6"); // units
        assert_eq!(&rows[0][4], "3"); // arm

        let mut rdr = csv::Reader::from_path(dir.path().join("consumption.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][2], "World");
        assert_eq!(&rows[0][3], "5");
    }
}

#[cfg(test)]
mod reporter_tests {
    use std::sync::Arc;

    use fd_core::{OverflowPolicy, SimConfig};
    use fd_sim::SimBuilder;

    use crate::error::OutputError;
    use crate::row::{ConsumptionRow, ProductionRow, StandingRow};
    use crate::writer::ChronicleWriter;
    use crate::{ChronicleReporter, CsvChronicle, OutputResult};

    fn config(days: u32) -> SimConfig {
        SimConfig {
            days,
            storage_capacity: 10,
            max_batch:        10,
            take_cap:         5,
            seed:             7,
            overflow:         OverflowPolicy::Block,
        }
    }

    #[test]
    fn full_run_writes_every_day() {
        let dir = tempfile::tempdir().unwrap();
        let chronicle = Arc::new(ChronicleReporter::new(CsvChronicle::new(dir.path()).unwrap()));

        SimBuilder::new(config(12))
            .factions(["World", "Wednesday"])
            .reporter(Arc::clone(&chronicle))
            .build()
            .unwrap()
            .run()
            .unwrap();
        assert!(chronicle.take_error().is_none());

        let count = |file: &str| {
            csv::Reader::from_path(dir.path().join(file)).unwrap().records().count()
        };
        assert_eq!(count("production.csv"), 12);
        assert_eq!(count("consumption.csv"), 24);
        assert_eq!(count("standings.csv"), 2);
    }

    /// Fails every write after the first `ok` calls.
    struct FlakyWriter {
        ok:    usize,
        calls: usize,
    }

    impl FlakyWriter {
        fn tick(&mut self) -> OutputResult<()> {
            self.calls += 1;
            if self.calls > self.ok {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            Ok(())
        }
    }

    impl ChronicleWriter for FlakyWriter {
        fn write_production(&mut self, _row: &ProductionRow) -> OutputResult<()> {
            self.tick()
        }
        fn write_consumption(&mut self, _row: &ConsumptionRow) -> OutputResult<()> {
            self.tick()
        }
        fn write_standings(&mut self, _rows: &[StandingRow]) -> OutputResult<()> {
            self.tick()
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_errors_do_not_stop_the_run() {
        let chronicle = Arc::new(ChronicleReporter::new(FlakyWriter { ok: 3, calls: 0 }));

        let outcome = SimBuilder::new(config(5))
            .factions(["World", "Wednesday"])
            .reporter(Arc::clone(&chronicle))
            .build()
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(outcome.days, 5);

        assert!(matches!(chronicle.take_error(), Some(OutputError::Io(_))));
        assert!(chronicle.take_error().is_none());

        let writer = Arc::try_unwrap(chronicle).ok().unwrap().into_writer();
        // 5 production + 10 consumption + 1 standings.
        assert_eq!(writer.calls, 16);
    }
}
