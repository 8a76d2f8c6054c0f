//! Reading samples from a feature CSV and a parallel label file.
//!
//! The feature file holds one sample per record as comma-separated floats;
//! fields may be quoted and blank lines are skipped. The label file holds one
//! integer per line, matched to feature records in order, and must not hold
//! more labels than there are feature records. Label `10` is read as `0`
//! (MNIST digit files store zero that way).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};

use super::Sample;
use crate::error::{NetError, Result};

const ZERO_DIGIT_LABEL: usize = 10;

fn headerless<R: Read>(reader: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

fn line_of(record: &StringRecord) -> usize {
    record.position().map_or(0, |p| p.line() as usize)
}

fn parse_features(record: &StringRecord) -> Result<Vec<f32>> {
    record.deserialize::<Vec<f32>>(None).map_err(|e| NetError::Parse {
        line: line_of(record),
        reason: format!("invalid features: {}", e),
    })
}

fn parse_label(record: &StringRecord) -> Result<usize> {
    let field = record.get(0).unwrap_or("");
    let label = field.parse::<usize>().map_err(|e| NetError::Parse {
        line: line_of(record),
        reason: format!("invalid label '{}': {}", field, e),
    })?;
    Ok(if label == ZERO_DIGIT_LABEL { 0 } else { label })
}

/// Read samples from a feature reader and a label reader.
pub fn load_samples<F: Read, L: Read>(features: F, labels: L) -> Result<Vec<Sample>> {
    let mut feature_reader = headerless(features);
    let mut label_reader = headerless(labels);
    let mut label_records = label_reader.records();

    let mut samples = Vec::new();
    for record in feature_reader.records() {
        let record = record?;
        let label_record = label_records.next().ok_or_else(|| NetError::Parse {
            line: line_of(&record),
            reason: "no label for feature record".to_string(),
        })??;

        samples.push(Sample::new(parse_features(&record)?, parse_label(&label_record)?));
    }

    if let Some(extra) = label_records.next() {
        let extra = extra?;
        return Err(NetError::Parse {
            line: line_of(&extra),
            reason: format!("label file has more entries than the {} feature records", samples.len()),
        });
    }

    log::debug!("loaded {} samples", samples.len());
    Ok(samples)
}

/// Read samples from a feature CSV file and a label file.
pub fn load_sample_files<P: AsRef<Path>, Q: AsRef<Path>>(features_path: P, labels_path: Q) -> Result<Vec<Sample>> {
    let features = BufReader::new(File::open(features_path)?);
    let labels = BufReader::new(File::open(labels_path)?);
    load_samples(features, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_samples() {
        let features = Cursor::new("0.5, 1.0\n\n-0.25,2\n");
        let labels = Cursor::new("1\n10\n");
        let samples = load_samples(features, labels).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0], Sample::new(vec![0.5, 1.0], 1));
        assert_eq!(samples[1], Sample::new(vec![-0.25, 2.0], 0));
    }

    #[test]
    fn test_load_samples_quoted_fields() {
        let features = Cursor::new("\"0.5\",\"1.0\"\n");
        let samples = load_samples(features, Cursor::new("1\n")).unwrap();
        assert_eq!(samples, vec![Sample::new(vec![0.5, 1.0], 1)]);
    }

    #[test]
    fn test_load_samples_errors() {
        let missing_label = load_samples(Cursor::new("1,2\n3,4\n"), Cursor::new("1\n"));
        assert!(matches!(missing_label, Err(NetError::Parse { line: 2, .. })));

        let bad_feature = load_samples(Cursor::new("1,x\n"), Cursor::new("1\n"));
        assert!(matches!(bad_feature, Err(NetError::Parse { line: 1, .. })));

        let bad_label = load_samples(Cursor::new("1,2\n"), Cursor::new("-3\n"));
        assert!(matches!(bad_label, Err(NetError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_load_samples_invalid_utf8() {
        let features = Cursor::new(vec![0xff, 0xfe, b',', b'1', b'\n']);
        let result = load_samples(features, Cursor::new("1\n"));
        assert!(matches!(result, Err(NetError::Csv(_))));
    }

    #[test]
    fn test_load_samples_extra_labels() {
        let extra = load_samples(Cursor::new("1,2\n3,4\n"), Cursor::new("1\n0\n1\n"));
        assert!(matches!(extra, Err(NetError::Parse { line: 3, .. })));
    }
}
