use std::sync::Arc;

use anyhow::{Context, Result};
use dataset::Dataset;

use super::config::Config;

pub struct State {
    pub dataset: Dataset,
    pub config: Config,
}

impl State {
    /// Loads the dataset. Must finish before the listener is bound.
    pub fn new(config: Config) -> Result<Arc<Self>> {
        let dataset = dataset::load(&config.dataset_path, &config.key_column)
            .with_context(|| format!("Loading {}", config.dataset_path.display()))?;

        Ok(Self::with_dataset(dataset, config))
    }

    pub fn with_dataset(dataset: Dataset, config: Config) -> Arc<Self> {
        Arc::new(Self { dataset, config })
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, path::PathBuf};

    use dataset::{DEFAULT_KEY_COLUMN, LoadError};
    use tempfile::NamedTempFile;

    use super::*;

    fn config(dataset_path: PathBuf) -> Config {
        Config {
            port: 0,
            dataset_path,
            key_column: DEFAULT_KEY_COLUMN.to_string(),
        }
    }

    fn load_error(error: &anyhow::Error) -> Option<&LoadError> {
        error.chain().find_map(|cause| cause.downcast_ref::<LoadError>())
    }

    #[test]
    fn test_missing_file_aborts() {
        let dir = tempfile::tempdir().unwrap();

        let error = State::new(config(dir.path().join("absent.csv")))
            .err()
            .unwrap();

        assert!(matches!(load_error(&error), Some(LoadError::Open { .. })));
    }

    #[test]
    fn test_missing_key_column_aborts() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Name,Calories").unwrap();
        writeln!(file, "Naan,250").unwrap();

        let error = State::new(config(file.path().to_path_buf())).err().unwrap();

        assert!(matches!(
            load_error(&error),
            Some(LoadError::MissingKeyColumn(column)) if column == DEFAULT_KEY_COLUMN
        ));
    }

    #[test]
    fn test_loads_before_serving() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Dish Name,Calories").unwrap();
        writeln!(file, "Naan,250").unwrap();

        let state = State::new(config(file.path().to_path_buf())).unwrap();

        assert_eq!(state.dataset.list_all(), ["Naan"]);
    }
}
