//! CSV-backed shoe repository.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::instrument;

use shoe_inventory_core::{Category, ShoeId, ShoeRecord};

use super::RepositoryError;

/// Column names of the data file, in order.
pub const COLUMNS: [&str; 7] = [
    "shoes_id",
    "brand",
    "model",
    "category",
    "color",
    "size_eu",
    "price_idr",
];

// =============================================================================
// Internal Row Type
// =============================================================================

/// One row of the data file. Field names are the column names.
#[derive(Debug, Serialize, Deserialize)]
struct ShoeRow {
    shoes_id: String,
    brand: String,
    model: String,
    category: String,
    color: String,
    size_eu: u8,
    #[serde(with = "rust_decimal::serde::str")]
    price_idr: Decimal,
}

impl From<ShoeRow> for ShoeRecord {
    fn from(row: ShoeRow) -> Self {
        Self {
            id: ShoeId::new(row.shoes_id),
            brand: row.brand,
            model: row.model,
            category: Category::from_name(&row.category),
            color: row.color,
            size_eu: row.size_eu,
            price_idr: row.price_idr,
        }
    }
}

impl From<&ShoeRecord> for ShoeRow {
    fn from(record: &ShoeRecord) -> Self {
        Self {
            shoes_id: record.id.to_string(),
            brand: record.brand.clone(),
            model: record.model.clone(),
            category: record.category.to_string(),
            color: record.color.clone(),
            size_eu: record.size_eu,
            price_idr: record.price_idr,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for the shoe data file.
///
/// Appends made through one repository are serialized; other processes
/// writing the same file are not coordinated with.
#[derive(Debug)]
pub struct ShoeRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ShoeRepository {
    /// Create a repository for the file at `path`. The file is not touched.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row of the data file, in file order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the file does not exist, and
    /// `Io`/`Csv` errors if it cannot be read or a row does not parse.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load_all(&self) -> Result<Vec<ShoeRecord>, RepositoryError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RepositoryError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let records = parse_rows(&bytes)?;
        tracing::debug!(rows = records.len(), "Loaded data file");
        Ok(records)
    }

    /// Like [`load_all`](Self::load_all), but a missing file is an empty inventory.
    ///
    /// # Errors
    ///
    /// Returns `Io`/`Csv` errors if an existing file cannot be read.
    pub async fn load_or_empty(&self) -> Result<Vec<ShoeRecord>, RepositoryError> {
        match self.load_all().await {
            Err(RepositoryError::NotFound(path)) => {
                tracing::debug!(path = %path.display(), "No data file yet, starting empty");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Create the data file with only the header row if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file cannot be inspected or created.
    pub async fn ensure_file_exists(&self) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;

        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }

        tokio::fs::write(&self.path, encode_rows(&[])?).await?;
        tracing::info!(path = %self.path.display(), "Created empty data file");
        Ok(())
    }

    /// Append one row: read the full table, add the row, rewrite the file.
    ///
    /// # Errors
    ///
    /// Returns `Io`/`Csv` errors if the existing file cannot be read or the
    /// new contents cannot be written. Nothing is rolled back on failure.
    #[instrument(skip(self, record), fields(shoes_id = %record.id))]
    pub async fn append_row(&self, record: &ShoeRecord) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load_or_empty().await?;
        records.push(record.clone());

        tokio::fs::write(&self.path, encode_rows(&records)?).await?;
        tracing::debug!(rows = records.len(), "Rewrote data file");
        Ok(())
    }
}

/// Parse CSV bytes with a header row into records.
fn parse_rows(bytes: &[u8]) -> Result<Vec<ShoeRecord>, RepositoryError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    reader
        .deserialize::<ShoeRow>()
        .map(|row| row.map(ShoeRecord::from).map_err(RepositoryError::from))
        .collect()
}

/// Encode the header row followed by one row per record.
fn encode_rows(records: &[ShoeRecord]) -> Result<Vec<u8>, RepositoryError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(ShoeRow::from(record))?;
    }

    writer
        .into_inner()
        .map_err(|e| RepositoryError::Io(e.into_error()))
}
