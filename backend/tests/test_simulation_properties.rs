//! Property tests over randomly generated configurations
//!
//! Whatever the configuration, a completed run must serve every client exactly
//! once, never start a client before it arrives, never overlap two clients on
//! one server and report utilization within [0, 100].

use proptest::prelude::*;
use queue_simulator_core_rs::{
    simulate, ArrivalConfig, SampleSet, ServedRecord, ServiceConfig, ServiceDistribution,
    SimulationConfig, SimulationResult, VipConfig,
};

const EPSILON: f64 = 1e-9;

fn service_strategy() -> impl Strategy<Value = ServiceConfig> {
    prop_oneof![
        (0.5f64..20.0, 0.1f64..5.0).prop_map(|(mean, std_dev)| ServiceConfig::Sampled {
            distribution: ServiceDistribution::Normal { mean, std_dev },
        }),
        (0.0f64..5.0, 0.1f64..10.0).prop_map(|(min, width)| ServiceConfig::Sampled {
            distribution: ServiceDistribution::Uniform {
                min,
                max: min + width,
            },
        }),
        (0.1f64..10.0).prop_map(|mean| ServiceConfig::Sampled {
            distribution: ServiceDistribution::Exponential { mean },
        }),
        (0.0f64..10.0).prop_map(|duration| ServiceConfig::Fixed { duration }),
    ]
}

fn arrival_strategy() -> impl Strategy<Value = ArrivalConfig> {
    prop_oneof![
        (0.1f64..10.0).prop_map(|mean| ArrivalConfig::Sampled { mean }),
        (0.0f64..5.0, 0.0f64..5.0).prop_map(|(initial_arrival, interval)| ArrivalConfig::Fixed {
            initial_arrival,
            interval,
        }),
    ]
}

fn config_strategy() -> impl Strategy<Value = SimulationConfig> {
    (
        1usize..40,
        1usize..5,
        arrival_strategy(),
        service_strategy(),
        proptest::option::of(0.0f64..=1.0),
    )
        .prop_map(|(client_count, server_count, arrivals, service, vip)| SimulationConfig {
            client_count,
            server_count,
            arrivals,
            service,
            vip: vip.map(|fraction| VipConfig { fraction }),
        })
}

fn run(config: &SimulationConfig, seed: u64) -> SimulationResult {
    simulate(config, &SampleSet::seeded(seed)).expect("valid configuration must run")
}

proptest! {
    #[test]
    fn every_client_served_exactly_once(config in config_strategy(), seed in any::<u64>()) {
        let result = run(&config, seed);

        prop_assert_eq!(result.records.len(), config.client_count);
        let ids: Vec<usize> = result.records.iter().map(ServedRecord::id).collect();
        prop_assert_eq!(ids, (1..=config.client_count).collect::<Vec<_>>());
        prop_assert_eq!(result.events_processed, 2 * config.client_count);
        prop_assert_eq!(result.event_log.len(), 3 * config.client_count);
    }

    #[test]
    fn no_client_starts_before_arrival(config in config_strategy(), seed in any::<u64>()) {
        let result = run(&config, seed);

        for record in &result.records {
            prop_assert!(record.wait_time() >= 0.0);
            prop_assert!(record.service_start() >= record.arrival_time());
            prop_assert!((record.service_end() - record.service_start() - record.service_duration()).abs() < EPSILON);
            prop_assert!(record.satisfaction() >= 0.0 && record.satisfaction() <= 1.0);
            prop_assert!(record.server_id() >= 1 && record.server_id() <= config.server_count);
        }
    }

    #[test]
    fn servers_never_overlap(config in config_strategy(), seed in any::<u64>()) {
        let result = run(&config, seed);

        for server_id in 1..=config.server_count {
            let mut intervals: Vec<(f64, f64)> = result
                .records
                .iter()
                .filter(|r| r.server_id() == server_id)
                .map(|r| (r.service_start(), r.service_end()))
                .collect();
            intervals.sort_by(|a, b| a.0.total_cmp(&b.0));
            for pair in intervals.windows(2) {
                prop_assert!(pair[1].0 >= pair[0].1 - EPSILON);
            }
        }
    }

    #[test]
    fn utilization_within_bounds(config in config_strategy(), seed in any::<u64>()) {
        let metrics = run(&config, seed).metrics;

        prop_assert!(metrics.utilization >= 0.0);
        prop_assert!(metrics.utilization <= 100.0 + EPSILON);
        if metrics.total_span == 0.0 {
            prop_assert_eq!(metrics.utilization, 0.0);
        }
        let busy: usize = metrics.servers.iter().map(|s| s.clients_served).sum();
        prop_assert_eq!(busy, config.client_count);
    }

    #[test]
    fn enough_servers_means_no_waiting(
        client_count in 1usize..10,
        seed in any::<u64>(),
        mean in 0.1f64..10.0,
    ) {
        let config = SimulationConfig {
            client_count,
            server_count: client_count,
            arrivals: ArrivalConfig::Sampled { mean },
            service: ServiceConfig::Sampled {
                distribution: ServiceDistribution::Exponential { mean: 5.0 },
            },
            vip: Some(VipConfig { fraction: 0.5 }),
        };
        let result = run(&config, seed);
        prop_assert!(result.records.iter().all(|r| r.wait_time() == 0.0));
        prop_assert_eq!(result.metrics.overall.zero_wait_count, client_count);
    }

    #[test]
    fn identical_inputs_give_identical_output(config in config_strategy(), seed in any::<u64>()) {
        let first = serde_json::to_string(&run(&config, seed)).unwrap();
        let second = serde_json::to_string(&run(&config, seed)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn class_groups_partition_clients(config in config_strategy(), seed in any::<u64>()) {
        let metrics = run(&config, seed).metrics;
        let vip_count = metrics.vip.as_ref().map_or(0, |g| g.count);
        prop_assert_eq!(vip_count + metrics.regular.count, metrics.overall.count);
        prop_assert_eq!(metrics.vip.is_some(), config.vip.is_some());
    }
}
