//! Log-to-table pipeline.

use loghaul_commit::CommitRecord;
use loghaul_git::LogSource;
use loghaul_parser::parse_log;
use loghaul_store::CommitStore;
use tracing::info;

use crate::CoreResult;

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Commits parsed from the log.
    pub commits: usize,

    /// Rows written to the table.
    pub rows: u64,
}

/// Runs fetch, scan, parse and load in sequence.
pub struct Pipeline {
    source: Box<dyn LogSource>,
}

impl Pipeline {
    /// Creates a pipeline reading from `source`.
    #[must_use]
    pub fn new(source: Box<dyn LogSource>) -> Self {
        Self { source }
    }

    /// Fetches and parses the whole log.
    ///
    /// # Errors
    ///
    /// Returns an acquisition error if the log cannot be fetched and a
    /// format error if any commit block is malformed.
    pub fn parse(&self) -> CoreResult<Vec<CommitRecord>> {
        let text = self.source.fetch()?;
        let records = parse_log(&text)?;
        Ok(records)
    }

    /// Parses the log, then replaces the contents of `store` with it.
    ///
    /// # Errors
    ///
    /// Returns the first acquisition, format or load error.
    pub fn run(&self, store: &mut dyn CommitStore) -> CoreResult<RunSummary> {
        let records = self.parse()?;
        Self::load(&records, store)
    }

    /// Replaces the contents of `store` with `records`.
    ///
    /// Once the table has been reset, a failing transfer leaves it empty or
    /// partially loaded.
    ///
    /// # Errors
    ///
    /// Returns a load error if the reset or the transfer fails.
    pub fn load(records: &[CommitRecord], store: &mut dyn CommitStore) -> CoreResult<RunSummary> {
        store.reset()?;
        let rows = store.load(records)?;

        let summary = RunSummary {
            commits: records.len(),
            rows,
        };
        info!(commits = summary.commits, rows = summary.rows, "run complete");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use loghaul_git::{GitError, GitResult};
    use loghaul_store::{StoreError, StoreResult};
    use std::path::PathBuf;

    const TWO_COMMITS: &str = "\
commit bbb222
Author: Jane Doe <j@x.io>
Date:   2024-01-02T10:00:00+00:00

    Second change

commit aaa111
Author: Jane Doe <j@x.io>
Date:   2024-01-01T10:00:00+00:00

    Fix bug
";

    // Source returning fixed text
    struct TextSource(&'static str);

    impl LogSource for TextSource {
        fn fetch(&self) -> GitResult<String> {
            Ok(self.0.to_string())
        }
    }

    // Source that always fails
    struct FailingSource;

    impl LogSource for FailingSource {
        fn fetch(&self) -> GitResult<String> {
            Err(GitError::NotARepo(PathBuf::from("/tmp/missing")))
        }
    }

    // In-memory table
    #[derive(Default)]
    struct MemoryStore {
        table: Option<Vec<CommitRecord>>,
        resets: usize,
        fail_load: bool,
    }

    impl CommitStore for MemoryStore {
        fn reset(&mut self) -> StoreResult<()> {
            self.resets += 1;
            self.table = Some(Vec::new());
            Ok(())
        }

        fn load(&mut self, records: &[CommitRecord]) -> StoreResult<u64> {
            if self.fail_load {
                return Err(StoreError::RowCount {
                    expected: records.len() as u64,
                    written: 0,
                });
            }
            let table = self.table.get_or_insert_with(Vec::new);
            table.extend_from_slice(records);
            Ok(records.len() as u64)
        }
    }

    fn pipeline(text: &'static str) -> Pipeline {
        Pipeline::new(Box::new(TextSource(text)))
    }

    #[test]
    fn test_parse() {
        let records = pipeline(TWO_COMMITS).parse().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].commit_id(), "bbb222");
        assert_eq!(records[1].body(), "Fix bug");
    }

    #[test]
    fn test_run_loads_all_records() {
        let mut store = MemoryStore::default();
        let summary = pipeline(TWO_COMMITS).run(&mut store).unwrap();

        assert_eq!(summary, RunSummary { commits: 2, rows: 2 });
        let table = store.table.unwrap();
        let ids: Vec<_> = table.iter().map(CommitRecord::commit_id).collect();
        assert_eq!(ids, ["bbb222", "aaa111"]);
    }

    #[test]
    fn test_run_twice_is_idempotent() {
        let mut store = MemoryStore::default();
        let pipeline = pipeline(TWO_COMMITS);

        pipeline.run(&mut store).unwrap();
        let first = store.table.clone();
        pipeline.run(&mut store).unwrap();

        assert_eq!(store.table, first);
        assert_eq!(store.resets, 2);
    }

    #[test]
    fn test_run_empty_log_creates_empty_table() {
        let mut store = MemoryStore::default();
        let summary = pipeline("").run(&mut store).unwrap();

        assert_eq!(summary, RunSummary { commits: 0, rows: 0 });
        assert_eq!(store.table, Some(Vec::new()));
    }

    #[test]
    fn test_run_malformed_log_leaves_table_untouched() {
        let mut store = MemoryStore::default();
        pipeline(TWO_COMMITS).run(&mut store).unwrap();
        let before = store.table.clone();

        let broken = "commit ccc333\nAuthored-by: someone\nDate: 2024-01-03T00:00:00Z\n";
        let err = pipeline(broken).run(&mut store).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(store.resets, 1);
        assert_eq!(store.table, before);
    }

    #[test]
    fn test_run_acquisition_failure() {
        let mut store = MemoryStore::default();
        let err = Pipeline::new(Box::new(FailingSource))
            .run(&mut store)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Acquisition);
        assert_eq!(store.resets, 0);
    }

    #[test]
    fn test_run_load_failure_after_reset() {
        let mut store = MemoryStore {
            fail_load: true,
            ..MemoryStore::default()
        };
        let err = pipeline(TWO_COMMITS).run(&mut store).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Load);
        // The table was already recreated when the transfer failed.
        assert_eq!(store.table, Some(Vec::new()));
    }
}
