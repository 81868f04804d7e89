use scengen_core::{generate_batch, ScenarioOpts, TopologyKind};
use scengen_emit::ScenarioWriter;

#[test]
fn writes_every_instance_of_a_batch() -> anyhow::Result<()> {
    let root = tempfile::tempdir()?;
    let opts = ScenarioOpts::builder()
        .nr_agents(10)
        .nr_clients(3)
        .topology(TopologyKind::Gnp { probability: 0.5 })
        .seed(17)
        .build();
    let writer = ScenarioWriter::builder().root_dir(root.path()).build();

    let mut written = 0;
    for (id, res) in generate_batch(&opts, 5) {
        let Ok(instance) = res else { continue };
        let dir = writer.write(&instance)?;
        assert_eq!(dir, root.path().join(id.to_string()));
        for node in 1..=10 {
            assert!(dir.join(format!("node{node}.json")).is_file());
        }
        for client in instance.clients() {
            assert!(dir.join(format!("clientPool{client}.json")).is_file());
            assert!(dir.join(format!("demand/clientPool{client}.json")).is_file());
        }

        let services: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join("service-configurations.json"))?)?;
        let server = instance.server();
        assert_eq!(services[0]["defaultNode"], format!("node{server}"));

        let topology = std::fs::read_to_string(dir.join("topology.ns"))?;
        assert!(topology.contains(&format!("tb-set-hardware $node{server} large")));
        assert_eq!(
            topology.matches("tb-set-hardware").count(),
            instance.topology().nr_nodes()
        );
        assert_eq!(
            topology.matches("DropTail").count(),
            instance.topology().nr_links() + instance.clients().len()
        );
        written += 1;
    }
    assert!(written > 0);
    Ok(())
}
