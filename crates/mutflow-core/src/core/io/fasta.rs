use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Marker character that starts a FASTA record header line.
pub const HEADER_MARKER: char = '>';

/// Header token assigned to the first record of a candidate set.
pub const REFERENCE_TAG: &str = "ref";

/// Rewrites the record headers of a candidate set into the canonical scheme.
///
/// The first record in file order becomes `>ref` and every subsequent record
/// receives a dense, 1-based decimal ordinal (`>1`, `>2`, ...) reflecting its
/// original relative order. Original header content is discarded entirely:
/// relabeling is positional, so reapplying after any reordering or subsetting
/// assigns fresh ordinals, while an already-normalized file is a fixed point.
/// Non-header lines are copied through verbatim. An empty input produces an
/// empty output.
///
/// The result is written to `output` via a sibling temp file followed by a
/// rename, so readers of `output` never observe a half-written set. `input`
/// and `output` may be the same path.
pub fn renumber_headers(input: &Path, output: &Path) -> io::Result<()> {
    let reader = BufReader::new(File::open(input)?);
    let tmp_path = tmp_sibling(output);

    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    let mut records_seen: usize = 0;

    for line in reader.lines() {
        let line = line?;
        if line.starts_with(HEADER_MARKER) {
            records_seen += 1;
            if records_seen == 1 {
                writeln!(writer, "{}{}", HEADER_MARKER, REFERENCE_TAG)?;
            } else {
                writeln!(writer, "{}{}", HEADER_MARKER, records_seen - 1)?;
            }
        } else {
            writeln!(writer, "{}", line)?;
        }
    }

    writer.flush()?;
    drop(writer);
    fs::rename(&tmp_path, output)?;
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_and_renumber(content: &str) -> String {
        let dir = tempdir().unwrap();
        let path = dir.path().join("set.fa");
        fs::write(&path, content).unwrap();
        renumber_headers(&path, &path).unwrap();
        fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn first_record_becomes_reference_regardless_of_original_header() {
        let out = write_and_renumber(">design_7, score=1.2\nMKVL\n>native\nMKIL\n");
        assert_eq!(out, ">ref\nMKVL\n>1\nMKIL\n");
    }

    #[test]
    fn ordinals_are_dense_and_follow_file_order() {
        let out = write_and_renumber(">a\nAA\n>b\nCC\n>c\nGG\n>d\nTT\n");
        let headers: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with(HEADER_MARKER))
            .collect();
        assert_eq!(headers, vec![">ref", ">1", ">2", ">3"]);
    }

    #[test]
    fn body_lines_are_copied_verbatim() {
        let out = write_and_renumber(">x\nMKV LLQ\n  indented\n>y\nAC-GT\n");
        assert_eq!(out, ">ref\nMKV LLQ\n  indented\n>1\nAC-GT\n");
    }

    #[test]
    fn multi_line_record_bodies_survive() {
        let out = write_and_renumber(">s\nAAAA\nBBBB\nCCCC\n>t\nDDDD\n");
        assert_eq!(out, ">ref\nAAAA\nBBBB\nCCCC\n>1\nDDDD\n");
    }

    #[test]
    fn empty_input_yields_empty_output_without_error() {
        let out = write_and_renumber("");
        assert_eq!(out, "");
    }

    #[test]
    fn single_record_set_gets_only_the_reference_header() {
        let out = write_and_renumber(">only\nMK\n");
        assert_eq!(out, ">ref\nMK\n");
    }

    #[test]
    fn normalized_output_is_a_fixed_point() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("set.fa");
        fs::write(&path, ">q\nAA\n>r\nCC\n>s\nGG\n").unwrap();
        renumber_headers(&path, &path).unwrap();
        let first_pass = fs::read_to_string(&path).unwrap();
        renumber_headers(&path, &path).unwrap();
        let second_pass = fs::read_to_string(&path).unwrap();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn relabeling_ignores_existing_identities() {
        // A set whose records were reordered after a previous pass gets fresh
        // ordinals by position, not by what the headers claim.
        let out = write_and_renumber(">2\nGG\n>ref\nAA\n>1\nCC\n");
        assert_eq!(out, ">ref\nGG\n>1\nAA\n>2\nCC\n");
    }

    #[test]
    fn output_can_differ_from_input_path() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("raw.fa");
        let dst = dir.path().join("normalized.fa");
        fs::write(&src, ">a\nAA\n>b\nCC\n").unwrap();
        renumber_headers(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), ">ref\nAA\n>1\nCC\n");
        // Source is left untouched.
        assert_eq!(fs::read_to_string(&src).unwrap(), ">a\nAA\n>b\nCC\n");
    }

    #[test]
    fn no_temp_file_remains_after_renumbering() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("set.fa");
        fs::write(&path, ">a\nAA\n").unwrap();
        renumber_headers(&path, &path).unwrap();
        assert!(!dir.path().join("set.fa.tmp").exists());
    }

    #[test]
    fn missing_input_surfaces_an_io_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.fa");
        let result = renumber_headers(&missing, &missing);
        assert!(result.is_err());
    }
}
