//! Multi-server VIP priority tests
//!
//! 20 clients, 2 servers, arrivals every 2·ln2 and a constant service of
//! 10 − 2·√(2·ln2) ≈ 7.645, so a line builds up quickly. Clients 5, 10, 15
//! and 20 are VIP.

use queue_simulator_core_rs::{
    simulate, PolicyConfig, Preset, PriorityClass, SampleSet, ServedRecord, SimulationConfig,
    VipConfig,
};

const CLIENTS: usize = 20;

fn vip_samples() -> Vec<f64> {
    (1..=CLIENTS)
        .map(|id| if id % 5 == 0 { 0.1 } else { 0.9 })
        .collect()
}

fn scenario() -> (SimulationConfig, SampleSet) {
    let preset = Preset::multi_server_vip();
    let samples = SampleSet::supplied(vec![0.5; CLIENTS], vec![0.5; CLIENTS * 2], vip_samples());
    (preset.config, samples)
}

#[test]
fn test_vip_classification_from_samples() {
    let (config, samples) = scenario();
    let result = simulate(&config, &samples).unwrap();

    let vip_ids: Vec<usize> = result
        .records
        .iter()
        .filter(|r| r.priority_class() == PriorityClass::Vip)
        .map(ServedRecord::id)
        .collect();
    assert_eq!(vip_ids, vec![5, 10, 15, 20]);
    assert_eq!(result.policy, PolicyConfig::VipPriority);
}

#[test]
fn test_vip_mean_wait_not_above_regular() {
    let (config, samples) = scenario();
    let result = simulate(&config, &samples).unwrap();

    let vip = result.metrics.vip.as_ref().unwrap();
    let regular = &result.metrics.regular;
    assert_eq!(vip.count, 4);
    assert_eq!(regular.count, 16);
    assert!(vip.mean_wait <= regular.mean_wait);
    assert!((vip.mean_wait - 3.1706).abs() < 1e-3);
    assert!((regular.mean_wait - 26.6157).abs() < 1e-3);
}

#[test]
fn test_vip_served_by_first_free_server() {
    let (config, samples) = scenario();
    let result = simulate(&config, &samples).unwrap();

    // Client 5 arrives at 6.93 behind regular clients 3 and 4, and takes server 1
    // when it frees at 9.03
    let client5 = &result.records[4];
    assert_eq!(client5.server_id(), 1);
    assert!((client5.service_start() - 9.0315).abs() < 1e-3);

    let client3 = &result.records[2];
    assert_eq!(client3.server_id(), 2);
    assert!((client3.service_start() - 10.4178).abs() < 1e-3);
}

#[test]
fn test_regular_clients_keep_fifo_order() {
    let (config, samples) = scenario();
    let result = simulate(&config, &samples).unwrap();

    let mut regular: Vec<&ServedRecord> = result
        .records
        .iter()
        .filter(|r| r.priority_class() == PriorityClass::Regular)
        .collect();
    regular.sort_by(|a, b| a.service_start().total_cmp(&b.service_start()));
    let ids: Vec<usize> = regular.iter().map(|r| r.id()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_priority_does_not_change_total_wait() {
    // Identical service durations: reordering the line moves waiting around
    // without changing its total
    let (config, samples) = scenario();
    let with_vip = simulate(&config, &samples).unwrap();

    let fifo_config = SimulationConfig { vip: None, ..config };
    let fifo = simulate(&fifo_config, &samples).unwrap();

    assert_eq!(fifo.policy, PolicyConfig::Fifo);
    assert!((with_vip.metrics.overall.mean_wait - fifo.metrics.overall.mean_wait).abs() < 1e-9);
    assert!((with_vip.metrics.overall.mean_wait - 21.9267).abs() < 1e-3);
    assert!((with_vip.metrics.utilization - 96.5003).abs() < 1e-3);
    assert!(fifo.metrics.vip.is_none());
}

#[test]
fn test_zero_fraction_means_no_vip() {
    let (config, samples) = scenario();
    let config = SimulationConfig {
        vip: Some(VipConfig { fraction: 0.0 }),
        ..config
    };
    let result = simulate(&config, &samples).unwrap();

    assert_eq!(result.metrics.vip.as_ref().unwrap().count, 0);
    assert_eq!(result.metrics.regular.count, CLIENTS);
}

#[test]
fn test_all_vip_behaves_like_fifo() {
    let (config, samples) = scenario();
    let all_vip = SimulationConfig {
        vip: Some(VipConfig { fraction: 1.0 }),
        ..config.clone()
    };
    let fifo = SimulationConfig { vip: None, ..config };

    let all_vip = simulate(&all_vip, &samples).unwrap();
    let fifo = simulate(&fifo, &samples).unwrap();

    for (vip, regular) in all_vip.records.iter().zip(&fifo.records) {
        assert!(vip.priority_class().is_vip());
        assert_eq!(vip.service_start(), regular.service_start());
        assert_eq!(vip.server_id(), regular.server_id());
    }
}

#[test]
fn test_preset_runs_with_neutral_samples() {
    let preset = Preset::multi_server_vip();
    let result = simulate(&preset.config, &preset.samples).unwrap();

    // 0.5 is never below 0.2, so nobody is VIP
    assert_eq!(result.metrics.vip.as_ref().unwrap().count, 0);
    assert_eq!(result.records.len(), CLIENTS);
    assert_eq!(result.metrics.servers.len(), 2);
}
