use super::item::{self, ItemOutcome};
use crate::core::artifacts::{self, SEQUENCE_SUBDIR};
use crate::engine::config::PipelineConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tools::ToolSet;
use std::fs;
use tracing::{debug, error, info, instrument};

/// Per-stem outcomes of one pipeline run.
///
/// `failed` is populated only when the run was configured with `keep_going`;
/// under the default policy the first analysis failure aborts the run before
/// a summary exists.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub processed: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

/// Executes the complete design pipeline.
///
/// Stages run in strict program order, one blocking subprocess at a time:
/// structure preprocessing and sequence generation (fatal on failure, no
/// candidate sets exist yet), candidate discovery, the sequential per-item
/// analysis pass, and best-effort intermediate cleanup.
#[instrument(skip_all, name = "design_pipeline")]
pub fn run(
    config: &PipelineConfig,
    reporter: &ProgressReporter<'_>,
) -> Result<RunSummary, EngineError> {
    let tools = ToolSet::new(config);

    // === Stage 1: structure preprocessing + sequence generation ===
    reporter.report(Progress::StageStart {
        name: "Sequence Generation",
    });
    info!(
        "Generating candidate sequences for structures in {}",
        config.input_dir.display()
    );
    tools
        .parse_structures()
        .run()
        .map_err(|source| EngineError::Generation { source })?;
    tools
        .generate_sequences()
        .run()
        .map_err(|source| EngineError::Generation { source })?;
    reporter.report(Progress::StageFinish);

    // === Stage 2: candidate discovery ===
    let seq_dir = config.output_dir.join(SEQUENCE_SUBDIR);
    if !seq_dir.is_dir() {
        return Err(EngineError::SequenceDirMissing { path: seq_dir });
    }
    let stems = artifacts::discover_candidates(&seq_dir)?;
    if stems.is_empty() {
        return Err(EngineError::NoCandidates { path: seq_dir });
    }
    info!("Discovered {} candidate set(s).", stems.len());

    // === Stage 3: sequential per-item analysis ===
    let mut summary = RunSummary::default();
    reporter.report(Progress::BatchStart {
        total_items: stems.len() as u64,
    });
    for stem in &stems {
        reporter.report(Progress::ItemStart { stem: stem.clone() });
        match item::process_item(stem, config, &tools) {
            Ok(ItemOutcome::Processed) => summary.processed.push(stem.clone()),
            Ok(ItemOutcome::Skipped) => summary.skipped.push(stem.clone()),
            Err(e) if config.keep_going => {
                error!("Analysis failed for '{}': {}", stem, e);
                summary.failed.push(stem.clone());
            }
            Err(e) => return Err(e),
        }
        reporter.report(Progress::ItemFinish);
    }
    reporter.report(Progress::BatchFinish);

    // === Stage 4: intermediate cleanup ===
    if !config.keep_intermediates {
        reporter.report(Progress::StageStart { name: "Cleanup" });
        remove_intermediates(config, &tools);
        reporter.report(Progress::StageFinish);
    }

    info!(
        "Pipeline complete: {} processed, {} skipped, {} failed.",
        summary.processed.len(),
        summary.skipped.len(),
        summary.failed.len()
    );
    Ok(summary)
}

// Best-effort: an intermediate that is already gone is not an error.
fn remove_intermediates(config: &PipelineConfig, tools: &ToolSet<'_>) {
    let parsed = tools.parsed_structures_path();
    if let Err(e) = fs::remove_file(&parsed) {
        debug!("Could not remove {}: {}", parsed.display(), e);
    }
    let seq_dir = config.output_dir.join(SEQUENCE_SUBDIR);
    if let Err(e) = fs::remove_dir_all(&seq_dir) {
        debug!("Could not remove {}: {}", seq_dir.display(), e);
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::engine::config::PipelineConfigBuilder;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Shell stand-ins for the Python collaborators, run with `sh` as the
    // configured interpreter. Each parses the same flags the real tools take.

    const PARSE_STUB: &str = r#"
in=""; out=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --input-path) in="$2"; shift 2 ;;
    --output-path) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
: > "$out"
for f in "$in"/*.pdb; do
  [ -e "$f" ] && basename "$f" .pdb >> "$out"
done
"#;

    const GENERATE_STUB: &str = r#"
structures=""; folder=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --structures) structures="$2"; shift 2 ;;
    --out-folder) folder="$2"; shift 2 ;;
    *) shift ;;
  esac
done
mkdir -p "$folder/seqs"
while IFS= read -r stem; do
  printf '>native\nMKVL\n>sample1\nMAVL\n>sample2\nMIVL\n' > "$folder/seqs/$stem.fa"
done < "$structures"
"#;

    const SS_STUB: &str = r#"
out=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --out) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
printf '1\tM\tH\n' > "$out"
"#;

    const FREQ_STUB: &str = r#"
counts=""; out=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --counts) counts="$2"; shift 2 ;;
    --out) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
printf 'M\tM\t90.0%%\n' > "$counts"
printf 'M\tM\t0.9\n' > "$out"
"#;

    const MUT_STUB: &str = r#"
comb=""; mut=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --combined-out) comb="$2"; shift 2 ;;
    --mutations-out) mut="$2"; shift 2 ;;
    *) shift ;;
  esac
done
printf 'pos\tref_aa\thighest_freq_aa\tfrequency\tSS\n' > "$comb"
printf 'pos\tref_aa\thighest_freq_aa\tfrequency\tSS\n' > "$mut"
"#;

    struct Fixture {
        _root: TempDir,
        config: PipelineConfig,
    }

    impl Fixture {
        fn new(input_stems: &[&str]) -> Self {
            let root = TempDir::new().unwrap();
            let scripts = root.path().join("scripts");
            let input = root.path().join("input");
            let output = root.path().join("output");
            fs::create_dir_all(&scripts).unwrap();
            fs::create_dir_all(&input).unwrap();
            fs::create_dir_all(&output).unwrap();

            fs::write(scripts.join("parse_structures.py"), PARSE_STUB).unwrap();
            fs::write(scripts.join("generate_sequences.py"), GENERATE_STUB).unwrap();
            fs::write(scripts.join("predict_ss.py"), SS_STUB).unwrap();
            fs::write(scripts.join("residue_frequency.py"), FREQ_STUB).unwrap();
            fs::write(scripts.join("predict_mutations.py"), MUT_STUB).unwrap();

            for stem in input_stems {
                fs::write(input.join(format!("{}.pdb", stem)), "ATOM\n").unwrap();
            }

            let mut config = PipelineConfigBuilder::new()
                .scripts_dir(scripts)
                .input_dir(input)
                .output_dir(output)
                .build()
                .unwrap();
            config.tools.interpreter = "sh".into();

            Self {
                _root: root,
                config,
            }
        }

        fn override_script(&self, name: &str, body: &str) {
            fs::write(self.config.scripts_dir.join(name), body).unwrap();
        }

        fn output(&self) -> &Path {
            &self.config.output_dir
        }
    }

    #[test]
    fn end_to_end_run_produces_the_full_artifact_bundle_per_stem() {
        let fx = Fixture::new(&["A", "B"]);
        let summary = run(&fx.config, &ProgressReporter::new()).unwrap();

        assert_eq!(summary.processed, vec!["A", "B"]);
        assert!(summary.skipped.is_empty());
        assert!(summary.failed.is_empty());

        for stem in ["A", "B"] {
            let fa = fs::read_to_string(fx.output().join(format!("{}.fa", stem))).unwrap();
            assert_eq!(fa, ">ref\nMKVL\n>1\nMAVL\n>2\nMIVL\n");
            for ext in ["ss", "freq", "re.freq", "comb", "mut"] {
                assert!(
                    fx.output().join(format!("{}.{}", stem, ext)).is_file(),
                    "missing {}.{}",
                    stem,
                    ext
                );
            }
        }

        // Intermediates are gone after a successful run.
        assert!(!fx.output().join("parsed_pdbs.jsonl").exists());
        assert!(!fx.output().join(SEQUENCE_SUBDIR).exists());
    }

    #[test]
    fn stem_without_a_structure_file_is_skipped_not_fatal() {
        let fx = Fixture::new(&["A"]);
        // The generator also emits a candidate set nothing maps back to.
        fx.override_script(
            "generate_sequences.py",
            &format!(
                "{}\nprintf '>native\\nMKVL\\n>x\\nMAVL\\n' > \"$folder/seqs/orphan.fa\"\n",
                GENERATE_STUB
            ),
        );

        let summary = run(&fx.config, &ProgressReporter::new()).unwrap();
        assert_eq!(summary.processed, vec!["A"]);
        assert_eq!(summary.skipped, vec!["orphan"]);

        // The orphan still gets its normalized candidate set, nothing more.
        let fa = fs::read_to_string(fx.output().join("orphan.fa")).unwrap();
        assert_eq!(fa, ">ref\nMKVL\n>1\nMAVL\n");
        for ext in ["ss", "freq", "re.freq", "comb", "mut"] {
            assert!(!fx.output().join(format!("orphan.{}", ext)).exists());
        }
    }

    #[test]
    fn generator_failure_aborts_before_any_analysis() {
        let fx = Fixture::new(&["A"]);
        fx.override_script("generate_sequences.py", "exit 2\n");

        let err = run(&fx.config, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::Generation { .. }));
        assert!(!fx.output().join("A.fa").exists());
    }

    #[test]
    fn missing_sequence_directory_is_its_own_failure() {
        let fx = Fixture::new(&["A"]);
        // Generator succeeds but never creates the expected layout.
        fx.override_script("generate_sequences.py", "exit 0\n");

        let err = run(&fx.config, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::SequenceDirMissing { .. }));
    }

    #[test]
    fn empty_sequence_directory_is_distinct_from_a_missing_one() {
        let fx = Fixture::new(&["A"]);
        fx.override_script(
            "generate_sequences.py",
            r#"
folder=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --out-folder) folder="$2"; shift 2 ;;
    *) shift ;;
  esac
done
mkdir -p "$folder/seqs"
"#,
        );

        let err = run(&fx.config, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::NoCandidates { .. }));
    }

    #[test]
    fn analyzer_failure_halts_processing_of_subsequent_stems() {
        let fx = Fixture::new(&["A", "B"]);
        fx.override_script("residue_frequency.py", "exit 1\n");

        let err = run(&fx.config, &ProgressReporter::new()).unwrap_err();
        match err {
            EngineError::FrequencyCalculation { ref stem, .. } => assert_eq!(stem, "A"),
            ref other => panic!("expected FrequencyCalculation, got {:?}", other),
        }
        // B was never reached: its normalized set was not written.
        assert!(!fx.output().join("B.fa").exists());
    }

    #[test]
    fn keep_going_records_failures_and_finishes_the_batch() {
        let mut fx = Fixture::new(&["A", "B"]);
        fx.config.keep_going = true;
        fx.override_script("predict_ss.py", "exit 1\n");

        let summary = run(&fx.config, &ProgressReporter::new()).unwrap();
        assert!(summary.processed.is_empty());
        assert_eq!(summary.failed, vec!["A", "B"]);
        // Cleanup still ran.
        assert!(!fx.output().join(SEQUENCE_SUBDIR).exists());
    }

    #[test]
    fn keep_intermediates_preserves_the_generator_output() {
        let mut fx = Fixture::new(&["A"]);
        fx.config.keep_intermediates = true;

        run(&fx.config, &ProgressReporter::new()).unwrap();
        assert!(fx.output().join("parsed_pdbs.jsonl").is_file());
        assert!(fx.output().join(SEQUENCE_SUBDIR).is_dir());
    }

    #[test]
    fn progress_events_follow_the_stage_and_batch_protocol() {
        use std::sync::Mutex;

        let fx = Fixture::new(&["A"]);
        let events: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|p| {
            let tag = match p {
                Progress::StageStart { name } => format!("stage:{}", name),
                Progress::StageFinish => "stage-end".to_string(),
                Progress::BatchStart { total_items } => format!("batch:{}", total_items),
                Progress::ItemStart { stem } => format!("item:{}", stem),
                Progress::ItemFinish => "item-end".to_string(),
                Progress::BatchFinish => "batch-end".to_string(),
                Progress::Message(m) => format!("msg:{}", m),
            };
            events.lock().unwrap().push(tag);
        }));

        run(&fx.config, &reporter).unwrap();
        drop(reporter);
        let events = events.into_inner().unwrap();
        assert_eq!(
            events,
            vec![
                "stage:Sequence Generation",
                "stage-end",
                "batch:1",
                "item:A",
                "item-end",
                "batch-end",
                "stage:Cleanup",
                "stage-end",
            ]
        );
    }
}
