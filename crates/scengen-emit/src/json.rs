//! The JSON descriptor files. Each file has a serialize-only wire type mirroring the layout the
//! deployment engine reads.

use std::fmt::Display;

use scengen_core::units::Millisecs;
use scengen_core::NodeId;
use serde::Serializer;

use crate::opts::{DemandOpts, EmitOpts, HardwareProfile, ServiceOpts, TrafficType};

// The deployment engine reads some numeric fields as strings.
fn as_string<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientPoolFile {
    region: String,
    client: bool,
    num_clients: u64,
}

#[derive(Debug, serde::Serialize)]
struct NodeFile {
    region: String,
    dns: bool,
    #[serde(rename = "DCOP")]
    dcop: bool,
    #[serde(rename = "RLG")]
    rlg: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
struct ServiceRef {
    group: String,
    artifact: String,
    version: String,
}

impl ServiceRef {
    fn new(opts: &ServiceOpts, i: usize) -> Self {
        Self {
            group: opts.group.clone(),
            artifact: format!("{}{i}", opts.artifact_prefix),
            version: opts.version.clone(),
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceFileEntry {
    service: ServiceRef,
    hostname: String,
    default_node: String,
    default_node_region: String,
    #[serde(serialize_with = "as_string")]
    initial_instances: u64,
    compute_capacity: ComputeCapacity,
    network_capacity: NetworkCapacity,
    priority: usize,
    traffic_type: TrafficType,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct ComputeCapacity {
    #[serde(serialize_with = "as_string")]
    task_containers: u64,
    #[serde(serialize_with = "as_string")]
    cpu: u64,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct NetworkCapacity {
    #[serde(serialize_with = "as_string")]
    datarate_tx: u64,
    #[serde(serialize_with = "as_string")]
    datarate_rx: u64,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct DemandFileEntry {
    start_time: Millisecs,
    server_duration: Millisecs,
    network_duration: Millisecs,
    num_clients: u64,
    service: ServiceRef,
    node_load: NodeLoad,
    network_load: NetworkLoad,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct NodeLoad {
    task_containers: f64,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct NetworkLoad {
    datarate_tx: f64,
    datarate_rx: f64,
}

pub(crate) fn translate_client_pool(
    client: NodeId,
    opts: &EmitOpts,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ClientPoolFile {
        region: client.to_string(),
        client: true,
        num_clients: opts.pool_size,
    })
}

pub(crate) fn translate_node(node: NodeId) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&NodeFile {
        region: node.to_string(),
        dns: true,
        dcop: true,
        rlg: true,
    })
}

pub(crate) fn translate_hardware(hardware: &[HardwareProfile]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(hardware)
}

/// One entry per service, all defaulting to the server node. Priorities start at 1.
pub(crate) fn translate_services(
    server: NodeId,
    opts: &ServiceOpts,
) -> serde_json::Result<String> {
    let entries = (1..=opts.nr_services)
        .map(|i| ServiceFileEntry {
            service: ServiceRef::new(opts, i),
            hostname: opts.hostname.clone(),
            default_node: format!("node{server}"),
            default_node_region: server.to_string(),
            initial_instances: opts.initial_instances,
            compute_capacity: ComputeCapacity {
                task_containers: opts.task_containers,
                cpu: opts.cpu,
            },
            network_capacity: NetworkCapacity {
                datarate_tx: opts.datarate_tx,
                datarate_rx: opts.datarate_rx,
            },
            priority: i,
            traffic_type: opts.traffic_type,
        })
        .collect::<Vec<_>>();
    serde_json::to_string_pretty(&entries)
}

/// Round `k` starts at `first_start + k * interval` and holds one burst per service.
pub(crate) fn translate_demand(
    services: &ServiceOpts,
    demand: &DemandOpts,
) -> serde_json::Result<String> {
    let mut entries = Vec::with_capacity(demand.bursts_per_service * services.nr_services);
    for k in 0..demand.bursts_per_service {
        let start_time = demand.first_start + demand.interval * k as u64;
        for i in 1..=services.nr_services {
            entries.push(DemandFileEntry {
                start_time,
                server_duration: demand.interval,
                network_duration: demand.interval,
                num_clients: demand.clients_per_burst,
                service: ServiceRef::new(services, i),
                node_load: NodeLoad {
                    task_containers: demand.task_containers_load,
                },
                network_load: NetworkLoad {
                    datarate_tx: demand.datarate_tx_load,
                    datarate_rx: demand.datarate_rx_load,
                },
            });
        }
    }
    serde_json::to_string_pretty(&entries)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn translate_client_pool_correct() -> anyhow::Result<()> {
        let s = translate_client_pool(NodeId::new(7), &EmitOpts::default())?;
        insta::assert_snapshot!(s, @r###"
        {
          "region": "7",
          "client": true,
          "numClients": 100
        }
        "###);
        Ok(())
    }

    #[test]
    fn translate_node_correct() -> anyhow::Result<()> {
        let s = translate_node(NodeId::new(3))?;
        insta::assert_snapshot!(s, @r###"
        {
          "region": "3",
          "dns": true,
          "DCOP": true,
          "RLG": true
        }
        "###);
        Ok(())
    }

    #[test]
    fn translate_hardware_correct() -> anyhow::Result<()> {
        let s = translate_hardware(&EmitOpts::default().hardware)?;
        insta::assert_snapshot!(s, @r###"
        [
          {
            "name": "simple",
            "capacity": {
              "CPU": 4,
              "MEMORY": 8000000000,
              "DISK": 10,
              "TASK_CONTAINERS": 20
            }
          },
          {
            "name": "large",
            "capacity": {
              "CPU": 8,
              "MEMORY": 16000000000,
              "DISK": 10,
              "TASK_CONTAINERS": 8
            }
          }
        ]
        "###);
        Ok(())
    }

    #[test]
    fn translate_services_correct() -> anyhow::Result<()> {
        let opts = ServiceOpts::builder().nr_services(1).build();
        let s = translate_services(NodeId::new(4), &opts)?;
        insta::assert_snapshot!(s, @r###"
        [
          {
            "service": {
              "group": "com.bbn",
              "artifact": "test-service1",
              "version": "1"
            },
            "hostname": "test-service",
            "defaultNode": "node4",
            "defaultNodeRegion": "4",
            "initialInstances": "1",
            "computeCapacity": {
              "TASK_CONTAINERS": "1",
              "CPU": "1"
            },
            "networkCapacity": {
              "DATARATE_TX": "100",
              "DATARATE_RX": "100"
            },
            "priority": 1,
            "trafficType": "RX_GREATER"
          }
        ]
        "###);
        Ok(())
    }

    #[test]
    fn services_are_prioritized_in_order() -> anyhow::Result<()> {
        let s = translate_services(NodeId::new(2), &ServiceOpts::default())?;
        let v: Value = serde_json::from_str(&s)?;
        let priorities = v
            .as_array()
            .map(|a| a.iter().map(|e| e["priority"].clone()).collect::<Vec<_>>())
            .unwrap_or_default();
        assert_eq!(priorities, vec![Value::from(1), Value::from(2), Value::from(3)]);
        Ok(())
    }

    #[test]
    fn demand_timeline_correct() -> anyhow::Result<()> {
        let s = translate_demand(&ServiceOpts::default(), &DemandOpts::default())?;
        let v: Value = serde_json::from_str(&s)?;
        let entries = v.as_array().cloned().unwrap_or_default();
        assert_eq!(entries.len(), 30);
        assert_eq!(entries[0]["startTime"], 30_000);
        assert_eq!(entries[2]["startTime"], 30_000);
        assert_eq!(entries[3]["startTime"], 90_000);
        assert_eq!(entries[29]["startTime"], 570_000);
        assert_eq!(entries[29]["service"]["artifact"], "test-service3");
        assert_eq!(entries[0]["serverDuration"], 60_000);
        assert_eq!(entries[0]["networkDuration"], 60_000);
        assert_eq!(entries[0]["numClients"], 200);
        assert_eq!(entries[0]["nodeLoad"]["TASK_CONTAINERS"], 0.1);
        assert_eq!(entries[0]["networkLoad"]["DATARATE_TX"], 0.001);
        assert_eq!(entries[0]["networkLoad"]["DATARATE_RX"], 0.002);
        Ok(())
    }
}
