// Tests for the MIT-BIH loader: construction checks, loading, transforms

use std::fs;
use std::path::Path;

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use rusty_ecg::{
    ArrhythmiaDataset, Dataset, DatasetError, LoaderConfig, Rescale, Split, SEQUENCE_LENGTH,
};

// Helpers

/// One CSV row: every feature column holds `value`, followed by `label`.
fn uniform_row(value: f64, label: &str) -> String {
    let mut fields = vec![value.to_string(); SEQUENCE_LENGTH];
    fields.push(label.to_string());
    fields.join(",") + "\n"
}

/// A row whose feature `i` is `i / 186`, so every column is distinct.
fn ramp_row(label: &str) -> String {
    let mut fields: Vec<String> = (0..SEQUENCE_LENGTH)
        .map(|i| (i as f64 / (SEQUENCE_LENGTH - 1) as f64).to_string())
        .collect();
    fields.push(label.to_string());
    fields.join(",") + "\n"
}

fn write_split(dir: &Path, split: Split, content: &str) {
    fs::write(dir.join(split.file_name()), content).unwrap();
}

fn dataset_dir(train: &str, test: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_split(dir.path(), Split::Train, train);
    write_split(dir.path(), Split::Test, test);
    dir
}

fn two_row_train() -> String {
    uniform_row(0.1, "2") + &uniform_row(0.9, "4")
}

// End-to-end

#[test]
fn test_two_row_training_file() {
    let dir = dataset_dir(&two_row_train(), &uniform_row(0.5, "0"));
    let ds = ArrhythmiaDataset::new(dir.path(), true).unwrap();

    let x_train = ds.x_train().unwrap();
    let y_train = ds.y_train().unwrap();
    assert_eq!(x_train.shape(), &[2, 187, 1]);
    assert_abs_diff_eq!(x_train[[0, 0, 0]], 2.0 * 0.1 - 1.0);
    assert_abs_diff_eq!(x_train[[0, 0, 0]], -0.8, epsilon = 1e-12);
    assert_eq!(y_train.row(0).to_vec(), vec![0.0, 0.0, 1.0, 0.0, 0.0]);
    assert_eq!(y_train.row(1).to_vec(), vec![0.0, 0.0, 0.0, 0.0, 1.0]);

    let x_test = ds.x_test().unwrap();
    assert_eq!(x_test.shape(), &[1, 187, 1]);
    assert_eq!(x_test[[0, 100, 0]], 0.0);
    assert_eq!(ds.y_test().unwrap().row(0).to_vec(), vec![1.0, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_every_feature_maps_to_two_v_minus_one() {
    let dir = dataset_dir(&ramp_row("1"), &ramp_row("3"));
    let ds = ArrhythmiaDataset::new(dir.path(), true).unwrap();
    let x = ds.x_train().unwrap();
    for i in 0..SEQUENCE_LENGTH {
        let v = i as f64 / (SEQUENCE_LENGTH - 1) as f64;
        assert_eq!(x[[0, i, 0]], 2.0 * v - 1.0, "column {i}");
    }
    assert_eq!(x[[0, 0, 0]], -1.0);
    assert_eq!(x[[0, SEQUENCE_LENGTH - 1, 0]], 1.0);
}

#[test]
fn test_row_counts_match_per_split() {
    let train: String = (0..7).map(|i| uniform_row(0.2, &(i % 5).to_string())).collect();
    let test: String = (0..3).map(|i| uniform_row(0.4, &(i % 5).to_string())).collect();
    let dir = dataset_dir(&train, &test);
    let ds = ArrhythmiaDataset::new(dir.path(), true).unwrap();

    for (split, rows) in [(Split::Train, 7), (Split::Test, 3)] {
        let data = ds.split(split).unwrap();
        assert_eq!(data.features().shape()[0], rows);
        assert_eq!(data.labels().nrows(), rows);
        assert_eq!(data.len(), rows);
    }
    assert_eq!(ds.train().unwrap().class_counts(), vec![2, 2, 1, 1, 1]);
}

#[test]
fn test_labels_are_one_hot_at_truncated_value() {
    let train = ["0", "1.0", "2.9", "3.5", "4.0", "0.99"]
        .iter()
        .map(|label| uniform_row(0.3, label))
        .collect::<String>();
    let dir = dataset_dir(&train, "");
    let ds = ArrhythmiaDataset::new(dir.path(), true).unwrap();
    let y = ds.y_train().unwrap();

    let expected = [0, 1, 2, 3, 4, 0];
    for (row, &class) in y.rows().into_iter().zip(expected.iter()) {
        assert_eq!(row.len(), 5);
        assert_eq!(row.sum(), 1.0);
        assert_eq!(row[class], 1.0);
        assert_eq!(row.iter().filter(|&&v| v == 0.0).count(), 4);
    }
}

#[test]
fn test_empty_files_load_to_empty_arrays() {
    let dir = dataset_dir("", "");
    let ds = ArrhythmiaDataset::new(dir.path(), true).unwrap();
    assert_eq!(ds.x_train().unwrap().shape(), &[0, 187, 1]);
    assert_eq!(ds.y_test().unwrap().shape(), &[0, 5]);
    assert!(ds.test().unwrap().is_empty());
}

// Construction preconditions

#[test]
fn test_missing_train_file_is_reported_first() {
    let dir = TempDir::new().unwrap();
    let err = ArrhythmiaDataset::new(dir.path(), true).unwrap_err();
    match err {
        DatasetError::MissingFile { split, path } => {
            assert_eq!(split, Split::Train);
            assert_eq!(path, dir.path().join("mitbih_train.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_train_wins_over_bad_test_content() {
    let dir = TempDir::new().unwrap();
    write_split(dir.path(), Split::Test, "garbage\n");
    let err = ArrhythmiaDataset::new(dir.path(), true).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::MissingFile {
            split: Split::Train,
            ..
        }
    ));
}

#[test]
fn test_missing_test_file() {
    let dir = TempDir::new().unwrap();
    write_split(dir.path(), Split::Train, &two_row_train());
    let err = ArrhythmiaDataset::new(dir.path(), false).unwrap_err();
    assert!(matches!(
        err,
        DatasetError::MissingFile {
            split: Split::Test,
            ..
        }
    ));
    assert!(err.to_string().contains("mitbih_test.csv"));
}

#[test]
fn test_missing_directory() {
    let err = ArrhythmiaDataset::new("/no/such/mitbih/dir", false).unwrap_err();
    assert!(matches!(err, DatasetError::MissingFile { .. }));
}

// Lazy loading

#[test]
fn test_lazy_then_load_matches_eager() {
    let dir = dataset_dir(&two_row_train(), &(ramp_row("3") + &uniform_row(0.0, "1")));

    let mut lazy = ArrhythmiaDataset::new(dir.path(), false).unwrap();
    assert!(!lazy.is_loaded());
    assert!(lazy.x_train().is_none());
    assert!(lazy.y_test().is_none());

    lazy.load().unwrap();
    assert!(lazy.is_loaded());

    let eager = ArrhythmiaDataset::new(dir.path(), true).unwrap();
    assert_eq!(lazy.train(), eager.train());
    assert_eq!(lazy.test(), eager.test());
}

#[test]
fn test_lazy_construction_does_not_parse() {
    let dir = dataset_dir("not numbers at all\n", "");
    let mut ds = ArrhythmiaDataset::new(dir.path(), false).unwrap();
    assert!(ds.load().is_err());
    assert!(!ds.is_loaded());
}

// Parse and validation errors

#[test]
fn test_non_numeric_token_is_a_parse_error() {
    let mut bad = vec!["0.5".to_string(); SEQUENCE_LENGTH];
    bad[10] = "oops".to_string();
    bad.push("1".to_string());
    let dir = dataset_dir(&(bad.join(",") + "\n"), "");

    let err = ArrhythmiaDataset::new(dir.path(), true).unwrap_err();
    match err {
        DatasetError::Parse {
            row, column, token, ..
        } => {
            assert_eq!(row, 1);
            assert_eq!(column, 10);
            assert_eq!(token, "oops");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_short_row_is_a_shape_mismatch() {
    let dir = dataset_dir(&two_row_train(), "0.1,0.2,0.3,1\n");
    let err = ArrhythmiaDataset::new(dir.path(), true).unwrap_err();
    match err {
        DatasetError::ShapeMismatch {
            expected, found, ..
        } => {
            assert_eq!(expected, 188);
            assert_eq!(found, 4);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_label_out_of_range() {
    let dir = dataset_dir(&(uniform_row(0.1, "0") + &uniform_row(0.1, "5")), "");
    let err = ArrhythmiaDataset::new(dir.path(), true).unwrap_err();
    match err {
        DatasetError::LabelRange { row, value, .. } => {
            assert_eq!(row, 2);
            assert_eq!(value, 5.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_negative_label_out_of_range() {
    let dir = dataset_dir(&uniform_row(0.1, "-1"), "");
    let err = ArrhythmiaDataset::new(dir.path(), true).unwrap_err();
    assert!(matches!(err, DatasetError::LabelRange { .. }));
}

// Config and description

#[test]
fn test_custom_rescale() {
    let dir = dataset_dir(&uniform_row(0.5, "1"), &uniform_row(0.25, "1"));
    let config = LoaderConfig::default().with_rescale(Rescale::identity());
    let ds = ArrhythmiaDataset::with_config(dir.path(), true, config).unwrap();
    assert_eq!(ds.x_train().unwrap()[[0, 0, 0]], 0.5);
    assert_eq!(ds.x_test().unwrap()[[0, 186, 0]], 0.25);
    assert_eq!(ds.config().rescale, Rescale::identity());
}

#[test]
fn test_rescale_from_json_config() {
    let dir = dataset_dir(&uniform_row(0.5, "1"), "");
    let config_path = dir.path().join("loader.json");
    fs::write(&config_path, r#"{"rescale": {"scale": 10.0, "offset": 1.0}}"#).unwrap();

    let config = LoaderConfig::from_json_file(&config_path).unwrap();
    let ds = ArrhythmiaDataset::with_config(dir.path(), true, config).unwrap();
    assert_eq!(ds.x_train().unwrap()[[0, 5, 0]], 6.0);
}

#[test]
fn test_describe_mentions_classes_and_shape() {
    let dir = dataset_dir("", "");
    let ds = ArrhythmiaDataset::new(dir.path(), false).unwrap();
    let text = ds.describe();
    assert!(text.contains("Num classes: 5"));
    assert!(text.contains("(187, 1)"));
    assert_eq!(text, ds.to_string());
}

#[test]
fn test_directory_path_accessor() {
    let dir = dataset_dir("", "");
    let ds = ArrhythmiaDataset::new(dir.path(), false).unwrap();
    assert_eq!(ds.directory_path(), dir.path());
    assert_eq!(ds.path(Split::Test), dir.path().join("mitbih_test.csv"));
}
