use crate::{error::AppResult, models::Recipe};
use std::path::{Path, PathBuf};

/// Read-only handle on the bundled recipe dataset
///
/// The file is read fresh on every call; nothing is cached between requests.
#[derive(Debug, Clone)]
pub struct LocalDataset {
    path: PathBuf,
}

impl LocalDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every recipe in the dataset
    pub async fn load(&self) -> AppResult<Vec<Recipe>> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let recipes: Vec<Recipe> = serde_json::from_str(&contents)?;

        tracing::debug!(
            path = %self.path.display(),
            recipes = recipes.len(),
            "Loaded local recipe dataset"
        );

        Ok(recipes.into_iter().map(Recipe::with_derived_fields).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "Banana Oat Smoothie", "ingredients": ["banana", "oats", "milk", "honey"]}},
                {{"name": "Greek Salad", "calories": 180, "ingredients": ["cucumber", "tomato", "feta"]}}
            ]"#
        )
        .unwrap();

        let dataset = LocalDataset::new(file.path());
        let recipes = dataset.load().await.unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "Banana Oat Smoothie");
        assert!(recipes[0]
            .youtube_url
            .contains("Banana+Oat+Smoothie+recipe+tutorial"));
        assert_eq!(recipes[1].ingredients, vec!["cucumber", "tomato", "feta"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = LocalDataset::new(dir.path().join("missing.json"));

        let result = dataset.load().await;
        assert!(matches!(result, Err(AppError::DatasetIo(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let dataset = LocalDataset::new(file.path());
        let result = dataset.load().await;
        assert!(matches!(result, Err(AppError::DatasetParse(_))));
    }

    #[tokio::test]
    async fn test_bundled_dataset_parses() {
        let dataset = LocalDataset::new(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("data/local_recipes.json"),
        );
        let recipes = dataset.load().await.unwrap();

        assert!(recipes.len() >= 3);
        assert!(recipes.iter().all(|r| !r.ingredients.is_empty()));
    }
}
