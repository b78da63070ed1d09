//! Commands that write to the data file.

use shoe_inventory_core::ShoeDraft;
use shoe_inventory_dashboard::storage::ShoeRepository;

use super::CliError;

/// Create the data file with only its header row if it does not exist.
pub async fn init(repository: &ShoeRepository) -> Result<(), CliError> {
    repository.ensure_file_exists().await?;
    tracing::info!(path = %repository.path().display(), "Data file ready");
    Ok(())
}

/// Validate `draft` and append it to the data file.
///
/// Nothing is written when validation fails.
pub async fn add(repository: &ShoeRepository, draft: &ShoeDraft) -> Result<(), CliError> {
    let record = draft.validate()?;
    repository.append_row(&record).await?;

    tracing::info!(
        shoes_id = %record.id,
        brand = %record.brand,
        category = %record.category,
        "Shoe added"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft(color: &str) -> ShoeDraft {
        ShoeDraft {
            shoes_id: "AD-07".to_string(),
            brand: "Adidas".to_string(),
            model: "Ultraboost".to_string(),
            category: "Running".to_string(),
            color: color.to_string(),
            size_eu: "41".to_string(),
            price_idr: "2300000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_appends_valid_shoe() {
        let dir = tempfile::tempdir().unwrap();
        let repository = ShoeRepository::new(dir.path().join("shoes.csv"));

        init(&repository).await.unwrap();
        add(&repository, &draft("Grey")).await.unwrap();

        let rows = repository.load_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.as_str(), "AD-07");
    }

    #[tokio::test]
    async fn test_add_rejects_missing_color() {
        let dir = tempfile::tempdir().unwrap();
        let repository = ShoeRepository::new(dir.path().join("shoes.csv"));

        let err = add(&repository, &draft("")).await.unwrap_err();
        assert!(matches!(err, CliError::Draft(_)));
        assert!(!repository.path().exists());
    }
}
