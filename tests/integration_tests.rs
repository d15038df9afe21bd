//! Integration tests for the imputation library.
//!
//! These tests verify end-to-end behavior of the imputation strategies on
//! raw matrices and on polars DataFrames.

use fillna::{
    CollectedDiagnostics, ImputeError, Imputer, ImputerConfig, MedianImputer, impute_frame,
    impute_frame_columns,
};
use polars::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Helper Functions
// ============================================================================

fn rows(data: &[&[f64]]) -> Vec<Vec<f64>> {
    data.iter().map(|row| row.to_vec()).collect()
}

fn verbose_imputer() -> (MedianImputer, Arc<CollectedDiagnostics>) {
    let sink = Arc::new(CollectedDiagnostics::new());
    let imputer = MedianImputer::with_config(ImputerConfig::default().with_verbose(true))
        .with_sink(sink.clone());
    (imputer, sink)
}

// ============================================================================
// End-to-End Imputation Tests
// ============================================================================

#[test]
fn test_median_imputation_fills_each_column_independently() {
    let data = rows(&[
        &[1.0, f64::NAN],
        &[3.0, 5.0],
        &[5.0, f64::NAN],
    ]);

    let output = MedianImputer::new().operate(&data).unwrap();

    assert_eq!(
        output,
        vec![vec![1.0, 5.0], vec![3.0, 5.0], vec![5.0, 5.0]]
    );
}

#[test]
fn test_even_observed_count_uses_middle_pair_average() {
    let data = rows(&[&[1.0], &[2.0], &[3.0], &[4.0], &[f64::NAN]]);

    let output = MedianImputer::new().operate(&data).unwrap();

    assert_eq!(output[4][0], 2.5);
}

#[test]
fn test_clean_dataset_passes_through_unchanged() {
    let data = rows(&[&[1.5, -2.0], &[0.0, 8.25], &[3.0, 4.0]]);

    let output = MedianImputer::new().operate(&data).unwrap();

    assert_eq!(output, data);
}

#[test]
fn test_fully_missing_column_keeps_its_sentinel() {
    let data = rows(&[&[1.0, f64::NAN], &[2.0, f64::NAN], &[3.0, f64::NAN]]);

    let output = MedianImputer::new().operate(&data).unwrap();

    // Column 0 is untouched; column 1 has no observed values to aggregate,
    // so its cells stay missing rather than failing the run.
    assert_eq!(output[0][0], 1.0);
    assert_eq!(output[2][0], 3.0);
    assert!(output.iter().all(|row| row[1].is_nan()));
}

#[test]
fn test_input_dataset_is_not_mutated() {
    let data = rows(&[&[1.0, f64::NAN], &[3.0, 5.0], &[5.0, f64::NAN]]);

    let output = MedianImputer::new().operate(&data).unwrap();

    assert!(data[0][1].is_nan(), "Input must keep its missing cells");
    assert!(data[2][1].is_nan(), "Input must keep its missing cells");
    assert_eq!(output[0][1], 5.0);
}

#[test]
fn test_negative_observed_values() {
    let data = rows(&[&[-4.0], &[f64::NAN], &[2.0], &[10.0]]);

    let output = MedianImputer::new().operate(&data).unwrap();

    assert_eq!(output[1][0], 2.0);
}

// ============================================================================
// Shape Validation Tests
// ============================================================================

#[test]
fn test_empty_dataset_is_rejected() {
    let data: Vec<Vec<f64>> = Vec::new();

    let error = MedianImputer::new().operate(&data).unwrap_err();

    assert!(matches!(error, ImputeError::EmptyDataset));
    assert_eq!(error.error_code(), "EMPTY_DATASET");
    assert_eq!(error.to_string(), "Dataset is empty");
    assert!(error.is_invalid_input());
}

#[test]
fn test_zero_column_dataset_is_rejected() {
    let data: Vec<Vec<f64>> = vec![vec![], vec![]];

    let error = MedianImputer::new().operate(&data).unwrap_err();

    assert!(matches!(error, ImputeError::NoColumns));
    assert_eq!(error.error_code(), "NO_COLUMNS");
}

#[test]
fn test_ragged_dataset_is_rejected_with_offending_row() {
    let data = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0, 7.0]];

    let error = MedianImputer::new().operate(&data).unwrap_err();

    match error {
        ImputeError::RaggedRows {
            row,
            expected,
            found,
        } => {
            assert_eq!(row, 2);
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
        }
        other => panic!("Expected RaggedRows, got: {other:?}"),
    }
}

// ============================================================================
// Strategy Polymorphism Tests
// ============================================================================

#[test]
fn test_imputers_are_usable_as_trait_objects() {
    let data = rows(&[&[1.0], &[f64::NAN], &[3.0]]);

    let strategies: Vec<Box<dyn Imputer>> = vec![
        Box::new(MedianImputer::new()),
        Box::new(MedianImputer::with_config(
            ImputerConfig::default().with_seed(7),
        )),
    ];

    for strategy in &strategies {
        assert_eq!(strategy.name(), "Median imputation");
        let output = strategy.operate(&data).unwrap();
        assert_eq!(output[1][0], 2.0);
    }
}

// ============================================================================
// Cloning and Determinism Tests
// ============================================================================

#[test]
fn test_cloned_imputer_matches_original() {
    let data = rows(&[&[4.0, f64::NAN], &[f64::NAN, 2.0], &[6.0, 0.0]]);

    let original = MedianImputer::with_config(ImputerConfig::default().with_seed(21));
    let copy = original.clone();

    assert_eq!(copy.config(), original.config());
    assert_eq!(copy.config().seed(), Some(21));
    assert_eq!(
        copy.operate(&data).unwrap(),
        original.operate(&data).unwrap()
    );
}

#[test]
fn test_output_is_independent_of_seed_and_verbosity() {
    let data = rows(&[&[1.0, f64::NAN], &[3.0, 5.0], &[5.0, f64::NAN]]);

    let configs = [
        ImputerConfig::default(),
        ImputerConfig::default().with_seed(1),
        ImputerConfig::default().with_seed(9999).with_verbose(true),
    ];

    let outputs: Vec<_> = configs
        .into_iter()
        .map(|config| MedianImputer::with_config(config).operate(&data).unwrap())
        .collect();

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

#[test]
fn test_clone_shares_attached_sink() {
    let data = rows(&[&[1.0], &[f64::NAN]]);
    let (original, sink) = verbose_imputer();

    let copy = original.clone();
    copy.operate(&data).unwrap();

    assert!(
        !sink.is_empty(),
        "Diagnostics from the clone should land in the shared sink"
    );
}

// ============================================================================
// Diagnostics Tests
// ============================================================================

#[test]
fn test_silent_by_default() {
    let data = rows(&[&[1.0, f64::NAN], &[3.0, 5.0]]);

    let sink = Arc::new(CollectedDiagnostics::new());
    let imputer = MedianImputer::new().with_sink(sink.clone());
    imputer.operate(&data).unwrap();

    assert!(sink.is_empty(), "Non-verbose runs must not emit diagnostics");
}

#[test]
fn test_verbose_run_reports_dimensions_and_column_medians() {
    let data = rows(&[
        &[1.0, f64::NAN],
        &[3.0, 5.0],
        &[5.0, f64::NAN],
    ]);

    let (imputer, sink) = verbose_imputer();
    imputer.operate(&data).unwrap();

    assert_eq!(
        sink.lines(),
        [
            "(Median imputation) performing median imputation on 3 x 2 dataset",
            "(Median imputation) 0 NaNs identified in column 0 (column median=3)",
            "(Median imputation) 2 NaNs identified in column 1 (column median=5)",
        ]
    );
}

#[test]
fn test_singular_replacement_count_in_diagnostics() {
    let data = rows(&[&[1.0], &[f64::NAN], &[3.0]]);

    let (imputer, sink) = verbose_imputer();
    imputer.operate(&data).unwrap();

    assert_eq!(
        sink.lines()[1],
        "(Median imputation) 1 NaN identified in column 0 (column median=2)"
    );
}

#[test]
fn test_fully_missing_column_diagnostic_reports_nan_median() {
    let data = rows(&[&[1.0, f64::NAN], &[3.0, f64::NAN]]);

    let (imputer, sink) = verbose_imputer();
    imputer.operate(&data).unwrap();

    assert_eq!(
        sink.lines()[2],
        "(Median imputation) 2 NaNs identified in column 1 (column median=NaN)"
    );
}

#[test]
fn test_closure_diagnostic_callback_invoked_per_line() {
    let data = rows(&[&[1.0, f64::NAN], &[3.0, 5.0], &[5.0, f64::NAN]]);

    let call_count = Arc::new(AtomicUsize::new(0));
    let call_count_clone = call_count.clone();

    let imputer = MedianImputer::with_config(ImputerConfig::default().with_verbose(true))
        .on_diagnostic(move |_event| {
            call_count_clone.fetch_add(1, Ordering::SeqCst);
        });
    imputer.operate(&data).unwrap();

    // One dimensions line plus one line per column.
    assert_eq!(call_count.load(Ordering::SeqCst), 3);
}

// ============================================================================
// DataFrame Adapter Tests
// ============================================================================

#[test]
fn test_impute_frame_fills_numeric_and_skips_text() {
    let df = df![
        "name" => ["ann", "bo", "cy", "dee"],
        "age" => [Some(30.0), None, Some(40.0), Some(50.0)],
        "note" => [None, Some("tall"), None, None],
    ]
    .unwrap();

    let output = impute_frame(&MedianImputer::new(), &df).unwrap();

    let age = output.column("age").unwrap();
    assert_eq!(age.null_count(), 0);
    // Median of [30, 40, 50] = 40
    assert_eq!(age.get(1).unwrap().try_extract::<f64>().unwrap(), 40.0);

    // Text columns keep their nulls and values.
    assert_eq!(output.column("note").unwrap().null_count(), 3);
    let name = output.column("name").unwrap();
    assert_eq!(name.get(0).unwrap(), AnyValue::String("ann"));
    assert_eq!(name.get(3).unwrap(), AnyValue::String("dee"));
}

#[test]
fn test_impute_frame_converts_integer_columns_to_float() {
    let df = df![
        "count" => [Some(1i64), None, Some(5)],
    ]
    .unwrap();

    let output = impute_frame(&MedianImputer::new(), &df).unwrap();
    let count = output.column("count").unwrap();

    assert_eq!(count.dtype(), &DataType::Float64);
    // Median of [1, 5] = 3
    assert_eq!(count.get(1).unwrap().try_extract::<f64>().unwrap(), 3.0);
}

#[test]
fn test_impute_frame_columns_fills_only_the_selection() {
    let df = df![
        "a" => [Some(1.0), None, Some(3.0)],
        "b" => [Some(1.0), None, Some(3.0)],
    ]
    .unwrap();

    let output = impute_frame_columns(&MedianImputer::new(), &df, &["b"]).unwrap();

    assert_eq!(output.column("a").unwrap().null_count(), 1);
    assert_eq!(output.column("b").unwrap().null_count(), 0);
}

#[test]
fn test_impute_frame_columns_unknown_column() {
    let df = df!["a" => [1.0, 2.0]].unwrap();

    let error = impute_frame_columns(&MedianImputer::new(), &df, &["missing"]).unwrap_err();

    assert!(matches!(error, ImputeError::ColumnNotFound(_)));
    assert_eq!(error.error_code(), "COLUMN_NOT_FOUND");
}

#[test]
fn test_impute_frame_zero_rows_is_rejected() {
    let df = df!["a" => Vec::<f64>::new()].unwrap();

    let error = impute_frame(&MedianImputer::new(), &df).unwrap_err();

    assert!(matches!(error, ImputeError::EmptyDataset));
}

#[test]
fn test_verbose_frame_imputation_reports_through_sink() {
    let df = df![
        "score" => [Some(2.0), None, Some(4.0)],
    ]
    .unwrap();

    let (imputer, sink) = verbose_imputer();
    impute_frame(&imputer, &df).unwrap();

    assert_eq!(
        sink.lines(),
        [
            "(Median imputation) performing median imputation on 3 x 1 dataset",
            "(Median imputation) 1 NaN identified in column 0 (column median=3)",
        ]
    );
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_config_round_trips_through_json() {
    let config = ImputerConfig::default().with_verbose(true).with_seed(42);

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value, json!({"verbose": true, "seed": 42}));

    let restored: ImputerConfig = serde_json::from_value(value).unwrap();
    assert_eq!(restored, config);
}

#[test]
fn test_errors_serialize_as_code_message_pairs() {
    let error = MedianImputer::new()
        .operate(&Vec::<Vec<f64>>::new())
        .unwrap_err();

    let value = serde_json::to_value(&error).unwrap();
    assert_eq!(
        value,
        json!({"code": "EMPTY_DATASET", "message": "Dataset is empty"})
    );
}
