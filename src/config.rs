use serde::{Serialize, Deserialize};

use crate::error::ConfigError;
use crate::report::score::ScoreReporter;

fn default_report_epochs() -> bool {
    true
}

/// A fully serializable description of a score reporter configuration.
///
/// `ReporterSpec` can be saved to / loaded from JSON independently of a
/// live reporter, making it possible to store reporting settings
/// alongside the rest of a run's configuration before training starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterSpec {
    /// Iterations between periodic loss reports.
    pub frequency: usize,
    /// Whether an end-of-epoch summary is logged.
    #[serde(default = "default_report_epochs")]
    pub report_epochs: bool,
}

impl Default for ReporterSpec {
    fn default() -> ReporterSpec {
        ReporterSpec { frequency: 10, report_epochs: true }
    }
}

impl ReporterSpec {
    /// Validates the spec and constructs the reporter it describes.
    pub fn build(&self) -> Result<ScoreReporter, ConfigError> {
        ScoreReporter::with_report_epochs(self.frequency, self.report_epochs)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `ReporterSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<ReporterSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
