use std::io;
use std::path::{Path, PathBuf};

/// Extension of input structure files.
pub const STRUCTURE_EXT: &str = "pdb";

/// Extension of candidate-set (multi-record FASTA) files.
pub const CANDIDATE_EXT: &str = "fa";

/// Consolidated structure record emitted by the preprocessor, deleted at the
/// end of a successful run.
pub const PARSED_STRUCTURES_FILE: &str = "parsed_pdbs.jsonl";

/// Subdirectory of the output directory where the generator drops raw
/// candidate sets, deleted at the end of a successful run.
pub const SEQUENCE_SUBDIR: &str = "seqs";

/// The full set of files derived from one input structure.
///
/// Every artifact lives in the output directory and is addressed as
/// `<stem>.<extension>`; the stem is the join key back to
/// `<input_dir>/<stem>.pdb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    stem: String,
    output_dir: PathBuf,
}

impl ArtifactPaths {
    pub fn new(output_dir: &Path, stem: &str) -> Self {
        Self {
            stem: stem.to_string(),
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Normalized candidate set, `<stem>.fa`.
    pub fn candidate_set(&self) -> PathBuf {
        self.named(CANDIDATE_EXT)
    }

    /// Secondary-structure table, `<stem>.ss`.
    pub fn secondary_structure(&self) -> PathBuf {
        self.named("ss")
    }

    /// Raw residue-frequency counts, `<stem>.freq`.
    pub fn raw_frequency(&self) -> PathBuf {
        self.named("freq")
    }

    /// Normalized residue-frequency table, `<stem>.re.freq`.
    pub fn normalized_frequency(&self) -> PathBuf {
        self.named("re.freq")
    }

    /// Combined per-position feature table, `<stem>.comb`.
    pub fn combined_features(&self) -> PathBuf {
        self.named("comb")
    }

    /// Predicted mutation table, `<stem>.mut`.
    pub fn mutations(&self) -> PathBuf {
        self.named("mut")
    }

    fn named(&self, ext: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", self.stem, ext))
    }
}

/// Lists the stems of all candidate-set files directly under `dir`.
///
/// Entries are matched on the `.fa` extension and returned sorted
/// lexicographically so a run processes items in a reproducible order.
pub fn discover_candidates(dir: &Path) -> io::Result<Vec<String>> {
    let mut stems = Vec::new();
    for entry in dir.read_dir()? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(CANDIDATE_EXT) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            stems.push(stem.to_string());
        }
    }
    stems.sort();
    Ok(stems)
}
