//! Sample array resizing tests
//!
//! Short arrays are padded with 0.5 and reported; long arrays are truncated
//! and reported. Neither stops the run.

use queue_simulator_core_rs::arrivals::{resize_samples, SampleAxis, PADDING_VALUE};
use queue_simulator_core_rs::{simulate, Preset, SampleSet, SampleWarning, ServedRecord};

#[test]
fn test_empty_arrays_are_padded_and_reported() {
    let config = Preset::demo().config;
    let result = simulate(&config, &SampleSet::default()).unwrap();

    assert_eq!(
        result.warnings,
        vec![
            SampleWarning::Padded {
                axis: SampleAxis::Arrivals,
                supplied: 0,
                required: 5,
            },
            SampleWarning::Padded {
                axis: SampleAxis::Service,
                supplied: 0,
                required: 5,
            },
        ]
    );

    // Every client gets the neutral sample: service = 2 + 4·0.5
    assert!(result.records.iter().all(|r| r.service_duration() == 4.0));
}

#[test]
fn test_partial_array_keeps_supplied_prefix() {
    let mut preset = Preset::demo();
    preset.samples = SampleSet::supplied(
        vec![0.8, 0.3],
        vec![0.5, 0.7, 0.2, 0.9, 0.4],
        Vec::new(),
    );
    let result = simulate(&preset.config, &preset.samples).unwrap();

    assert_eq!(result.warnings.len(), 1);
    let gap = |r: &[ServedRecord], i: usize| r[i].arrival_time() - r[i - 1].arrival_time();
    assert!((gap(&result.records, 1) - (-7.0 * 0.3f64.ln())).abs() < 1e-9);
    // Padded entries produce the median inter-arrival time 7·ln2
    let padded_gap = -7.0 * PADDING_VALUE.ln();
    for i in 2..5 {
        assert!((gap(&result.records, i) - padded_gap).abs() < 1e-9);
    }
}

#[test]
fn test_long_arrays_are_truncated() {
    let mut preset = Preset::demo();
    preset.samples = SampleSet::supplied(
        vec![0.8, 0.3, 0.6, 0.1, 0.9, 0.2, 0.2],
        vec![0.5, 0.7, 0.2, 0.9, 0.4],
        vec![0.1, 0.1],
    );
    let baseline = simulate(&Preset::demo().config, &Preset::demo().samples).unwrap();
    let result = simulate(&preset.config, &preset.samples).unwrap();

    // VIP samples are ignored entirely when VIP handling is off
    assert_eq!(
        result.warnings,
        vec![SampleWarning::Truncated {
            axis: SampleAxis::Arrivals,
            supplied: 7,
            required: 5,
        }]
    );
    assert_eq!(result.records, baseline.records);
}

#[test]
fn test_normal_service_needs_two_samples_per_client() {
    let preset = Preset::single_server_fifo(4);
    let samples = SampleSet::supplied(vec![0.5; 4], vec![0.5; 4], Vec::new());
    let result = simulate(&preset.config, &samples).unwrap();

    assert_eq!(
        result.warnings,
        vec![SampleWarning::Padded {
            axis: SampleAxis::Service,
            supplied: 4,
            required: 8,
        }]
    );
}

#[test]
fn test_resize_exact_length_has_no_warning() {
    let (resized, warning) = resize_samples(&[0.2, 0.4], 2, SampleAxis::Service);
    assert_eq!(resized, vec![0.2, 0.4]);
    assert!(warning.is_none());
}

#[test]
fn test_warning_display_names_axis() {
    let warning = SampleWarning::Padded {
        axis: SampleAxis::Vip,
        supplied: 1,
        required: 4,
    };
    let text = warning.to_string();
    assert!(text.starts_with("vip:"));
    assert!(text.contains("padded with 0.5"));
}
