//! `PostgreSQL` implementation of [`CommitStore`].

use loghaul_commit::CommitRecord;
use postgres::binary_copy::BinaryCopyInWriter;
use postgres::{Client, NoTls};
use tracing::{debug, info};

use crate::schema::{COPY_STATEMENT, COPY_TYPES, CREATE_TABLE, DROP_TABLE};
use crate::{CommitStore, StoreError, StoreResult};

/// Loads commits into `public."commit"` over a single connection.
///
/// Resetting the schema and transferring the rows are two separate
/// operations; a failed transfer can leave the table empty or partially
/// filled.
pub struct PostgresStore {
    client: Client,
}

impl PostgresStore {
    /// Connects to the database at `db_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn connect(db_url: &str) -> StoreResult<Self> {
        let client = Client::connect(db_url, NoTls).map_err(StoreError::Connect)?;
        debug!("connected to database");
        Ok(Self { client })
    }

    /// Wraps an already connected client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl CommitStore for PostgresStore {
    fn reset(&mut self) -> StoreResult<()> {
        self.client
            .batch_execute(&format!("{DROP_TABLE};\n{CREATE_TABLE}"))
            .map_err(StoreError::Schema)?;
        info!("recreated commit table");
        Ok(())
    }

    fn load(&mut self, records: &[CommitRecord]) -> StoreResult<u64> {
        let sink = self
            .client
            .copy_in(COPY_STATEMENT)
            .map_err(StoreError::Transfer)?;
        let mut writer = BinaryCopyInWriter::new(sink, &COPY_TYPES);

        for record in records {
            let timestamp = record.timestamp();
            writer
                .write(&[
                    &record.commit_id(),
                    &record.author(),
                    &timestamp,
                    &record.body(),
                ])
                .map_err(StoreError::Transfer)?;
        }

        let written = writer.finish().map_err(StoreError::Transfer)?;
        let expected = records.len() as u64;
        if written != expected {
            return Err(StoreError::RowCount { expected, written });
        }

        info!(rows = written, "loaded commit table");
        Ok(written)
    }
}
