use console::Style;
use lazy_static::lazy_static;

use crate::place::Candidate;

/// Base URL of the public QASPER release bucket.
pub const DATASET_BASE_URL: &str = "https://qasper-dataset.s3.us-west-2.amazonaws.com";

/// Archive holding the train and dev splits.
pub const TRAIN_DEV_ARCHIVE: &str = "qasper-train-dev-v0.3.tgz";
/// Archive holding the test split and the official evaluator.
pub const TEST_ARCHIVE: &str = "qasper-test-and-evaluator-v0.3.tgz";

/// Transient directory the archives are downloaded and unpacked in.
pub const WORKSPACE_DIR: &str = "data/qasper_temp";
/// Directory the split files are published to.
pub const DEST_DIR: &str = "data/qasper";
/// Extension of the split files inside [`DEST_DIR`].
pub const SPLIT_EXTENSION: &str = "json";

/// Mapping from the file names inside the v0.3 archives to the split names
/// this tool maintains. The left-hand side is controlled by the upstream
/// release and may drift between versions; a missing entry is tolerated.
pub const CANDIDATES: [Candidate; 3] = [
    Candidate {
        source: "qasper-train-v0.3.json",
        dest: "train.json",
    },
    Candidate {
        source: "qasper-dev-v0.3.json",
        dest: "validation.json",
    },
    Candidate {
        source: "qasper-test-v0.3.json",
        dest: "test.json",
    },
];

lazy_static! {
    pub static ref SPLIT_STYLE: Style = Style::new().magenta();
    pub static ref HEADER_STYLE: Style = Style::new().bold();
}
