use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Destination of the rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for PresenterType {
    /// `-o PATH` writes to a file, otherwise the report goes to stdout
    fn from(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified destination
    ///
    /// # Examples
    /// ```
    /// use devcontrol_analytics::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_presenter_type_from_output_flag() {
        assert_eq!(PresenterType::from(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::from(Some(PathBuf::from("risk.md"))),
            PresenterType::File(PathBuf::from("risk.md"))
        );
    }

    #[test]
    fn test_file_presenter_writes_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deps.json");

        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("{}").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }
}
