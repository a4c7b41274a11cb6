//! # Dataset
//!
//! Nutrition dataset loaded once from CSV and queried in memory.
//!
//! - [`load`]: read the file at startup into a [`Dataset`]
//! - [`Dataset`]: case-insensitive exact lookups, name listing, substring suggestions
//!
//! The index never changes after load, so it can be shared behind an `Arc` and read from
//! any number of tasks without locking.
use std::{fs::File, path::Path};

use tracing::info;

pub mod error;
pub mod foods;
pub mod index;

pub use error::{LoadError, LookupError};
pub use foods::{Entry, FoodRecord, Nutrient};
pub use index::Dataset;

pub const DEFAULT_KEY_COLUMN: &str = "Dish Name";
pub const SUGGESTION_LIMIT: usize = 10;
pub const MIN_SUGGESTION_LEN: usize = 2;

pub fn load(path: impl AsRef<Path>, key_column: &str) -> Result<Dataset, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = Dataset::from_reader(file, key_column)?;
    info!("Loaded {} foods from {}", dataset.len(), path.display());

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Dish Name,Calories (kcal),Protein (g)").unwrap();
        writeln!(file, "Naan,250,8").unwrap();
        writeln!(file, "Idli,100,4").unwrap();

        let dataset = load(file.path(), DEFAULT_KEY_COLUMN).unwrap();

        assert_eq!(dataset.list_all(), ["Naan", "Idli"]);
        assert_eq!(
            dataset.get_exact("IDLI").unwrap().record.get("Protein (g)"),
            Some(&Nutrient::Int(4))
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        let result = load(&path, DEFAULT_KEY_COLUMN);

        assert!(matches!(result, Err(LoadError::Open { path: p, .. }) if p == path));
    }

    #[test]
    fn test_load_shipped_sample() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../data/Indian_Food_Nutrition_Processed.csv");

        let dataset = load(path, DEFAULT_KEY_COLUMN).unwrap();

        assert!(!dataset.is_empty());
        assert_eq!(dataset.get_exact("naan").unwrap().name, "Naan");
        assert!(dataset.suggest("dosa", SUGGESTION_LIMIT).contains(&"Masala dosa"));
    }
}
