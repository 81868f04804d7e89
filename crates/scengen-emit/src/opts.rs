//! Emission options. Every field has a default, so a partial configuration file fills in the
//! rest.

use derivative::Derivative;
use scengen_core::units::{Bytes, Kbps, Millisecs};

/// How a scenario instance is written to disk.
#[derive(
    Debug, Clone, PartialEq, typed_builder::TypedBuilder, serde::Serialize, serde::Deserialize,
)]
#[serde(default)]
pub struct EmitOpts {
    /// OS image of every testbed node.
    #[builder(default = String::from("XEN46-64-STD"), setter(into))]
    pub os_image: String,
    /// Bandwidth of every duplex link.
    #[builder(default = Kbps::new(100_000))]
    pub link_bandwidth: Kbps,
    /// Latency of every duplex link.
    #[builder(default = Millisecs::ZERO)]
    pub link_delay: Millisecs,
    /// `numClients` of each client pool file.
    #[builder(default = 100)]
    pub pool_size: u64,
    /// Hardware profile of the server node.
    #[builder(default = String::from("large"), setter(into))]
    pub server_profile: String,
    /// Hardware profile of every other node.
    #[builder(default = String::from("simple"), setter(into))]
    pub node_profile: String,
    /// The hardware catalog.
    #[builder(default = default_hardware())]
    pub hardware: Vec<HardwareProfile>,
    /// Service deployment defaults.
    #[builder(default)]
    pub services: ServiceOpts,
    /// Client demand timeline.
    #[builder(default)]
    pub demand: DemandOpts,
}

impl Default for EmitOpts {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A named capacity tier.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HardwareProfile {
    pub name: String,
    pub capacity: HardwareCapacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct HardwareCapacity {
    pub cpu: u64,
    pub memory: Bytes,
    pub disk: u64,
    pub task_containers: u64,
}

fn default_hardware() -> Vec<HardwareProfile> {
    vec![
        HardwareProfile {
            name: "simple".into(),
            capacity: HardwareCapacity {
                cpu: 4,
                memory: Bytes::new(8_000_000_000),
                disk: 10,
                task_containers: 20,
            },
        },
        HardwareProfile {
            name: "large".into(),
            capacity: HardwareCapacity {
                cpu: 8,
                memory: Bytes::new(16_000_000_000),
                disk: 10,
                task_containers: 8,
            },
        },
    ]
}

/// Deployment defaults shared by all services. Service `i` is named `<artifact_prefix><i>`.
#[derive(
    Debug, Clone, PartialEq, Eq, typed_builder::TypedBuilder, serde::Serialize, serde::Deserialize,
)]
#[serde(default)]
pub struct ServiceOpts {
    #[builder(default = 3)]
    pub nr_services: usize,
    #[builder(default = String::from("com.bbn"), setter(into))]
    pub group: String,
    #[builder(default = String::from("test-service"), setter(into))]
    pub artifact_prefix: String,
    #[builder(default = String::from("1"), setter(into))]
    pub version: String,
    #[builder(default = String::from("test-service"), setter(into))]
    pub hostname: String,
    #[builder(default = 1)]
    pub initial_instances: u64,
    #[builder(default = 1)]
    pub task_containers: u64,
    #[builder(default = 1)]
    pub cpu: u64,
    #[builder(default = 100)]
    pub datarate_tx: u64,
    #[builder(default = 100)]
    pub datarate_rx: u64,
    #[builder(default)]
    pub traffic_type: TrafficType,
}

impl Default for ServiceOpts {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Which direction of a service's traffic dominates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Derivative, serde::Serialize, serde::Deserialize)]
#[derivative(Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrafficType {
    #[derivative(Default)]
    RxGreater,
    TxGreater,
}

/// The demand timeline replicated to every client pool.
#[derive(
    Debug, Clone, PartialEq, typed_builder::TypedBuilder, serde::Serialize, serde::Deserialize,
)]
#[serde(default)]
pub struct DemandOpts {
    /// Bursts per service.
    #[builder(default = 10)]
    pub bursts_per_service: usize,
    /// Start of the first round of bursts.
    #[builder(default = Millisecs::new(30_000))]
    pub first_start: Millisecs,
    /// Time between rounds, also the server and network duration of each burst.
    #[builder(default = Millisecs::new(60_000))]
    pub interval: Millisecs,
    /// Clients per burst.
    #[builder(default = 200)]
    pub clients_per_burst: u64,
    #[builder(default = 0.1)]
    pub task_containers_load: f64,
    #[builder(default = 0.001)]
    pub datarate_tx_load: f64,
    #[builder(default = 0.002)]
    pub datarate_rx_load: f64,
}

impl Default for DemandOpts {
    fn default() -> Self {
        Self::builder().build()
    }
}
