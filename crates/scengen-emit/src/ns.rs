//! The testbed topology script (`topology.ns`).

use std::fmt::Write;

use scengen_core::ScenarioInstance;

use crate::opts::EmitOpts;

/// Renders the ns/Tcl script describing client pools, nodes and links.
///
/// Node-to-node links are named `link<a>_<b>`; the separator keeps names unique once IDs reach
/// two digits.
pub(crate) fn translate_topology(instance: &ScenarioInstance, opts: &EmitOpts) -> String {
    let mut s = String::new();
    let os = &opts.os_image;
    let link_params = format!("{} {} DropTail", opts.link_bandwidth, opts.link_delay);
    s.push_str("# CP Paper\n\nset ns [new Simulator]\nsource tb_compact.tcl\n\n");

    writeln!(s, "# Clients").unwrap();
    for client in instance.clients() {
        writeln!(s, "set clientPool{client} [$ns node]").unwrap();
        writeln!(s, "tb-set-node-os $clientPool{client} {os}").unwrap();
    }

    writeln!(s, "\n# NCPs").unwrap();
    for &node in instance.topology().nodes() {
        let profile = if node == instance.server() {
            &opts.server_profile
        } else {
            &opts.node_profile
        };
        writeln!(s, "set node{node} [$ns node]").unwrap();
        writeln!(s, "tb-set-node-os $node{node} {os}").unwrap();
        writeln!(s, "tb-set-hardware $node{node} {profile}\n").unwrap();
    }

    writeln!(s, "# Links").unwrap();
    for link in instance.topology().links() {
        let (a, b) = (link.a, link.b);
        writeln!(
            s,
            "set link{a}_{b} [$ns duplex-link $node{a} $node{b} {link_params}]"
        )
        .unwrap();
    }
    writeln!(s).unwrap();
    for client in instance.clients() {
        writeln!(
            s,
            "set linkClient{client} [$ns duplex-link $clientPool{client} $node{client} {link_params}]"
        )
        .unwrap();
    }

    s.push_str("\n$ns rtproto Static\n$ns run\n");
    s
}

#[cfg(test)]
mod tests {
    use scengen_core::{InstanceId, ScenarioOpts, TopologyKind};

    use super::*;

    #[test]
    fn translate_diamond_correct() -> anyhow::Result<()> {
        let opts = ScenarioOpts::builder()
            .topology(TopologyKind::Diamond)
            .build();
        let instance = ScenarioInstance::generate(&opts, InstanceId::ZERO)?;
        let s = translate_topology(&instance, &EmitOpts::default());
        insta::assert_snapshot!(s, @r###"
        # CP Paper

        set ns [new Simulator]
        source tb_compact.tcl

        # Clients
        set clientPool5 [$ns node]
        tb-set-node-os $clientPool5 XEN46-64-STD

        # NCPs
        set node1 [$ns node]
        tb-set-node-os $node1 XEN46-64-STD
        tb-set-hardware $node1 large

        set node2 [$ns node]
        tb-set-node-os $node2 XEN46-64-STD
        tb-set-hardware $node2 simple

        set node3 [$ns node]
        tb-set-node-os $node3 XEN46-64-STD
        tb-set-hardware $node3 simple

        set node4 [$ns node]
        tb-set-node-os $node4 XEN46-64-STD
        tb-set-hardware $node4 simple

        set node5 [$ns node]
        tb-set-node-os $node5 XEN46-64-STD
        tb-set-hardware $node5 simple

        # Links
        set link1_2 [$ns duplex-link $node1 $node2 100000.0kb 0.0ms DropTail]
        set link2_3 [$ns duplex-link $node2 $node3 100000.0kb 0.0ms DropTail]
        set link2_4 [$ns duplex-link $node2 $node4 100000.0kb 0.0ms DropTail]
        set link3_5 [$ns duplex-link $node3 $node5 100000.0kb 0.0ms DropTail]
        set link4_5 [$ns duplex-link $node4 $node5 100000.0kb 0.0ms DropTail]

        set linkClient5 [$ns duplex-link $clientPool5 $node5 100000.0kb 0.0ms DropTail]

        $ns rtproto Static
        $ns run
        "###);
        Ok(())
    }

    #[test]
    fn link_parameters_come_from_opts() -> anyhow::Result<()> {
        use scengen_core::units::{Kbps, Millisecs};

        let opts = ScenarioOpts::builder()
            .topology(TopologyKind::Diamond)
            .build();
        let instance = ScenarioInstance::generate(&opts, InstanceId::ZERO)?;
        let emit = EmitOpts::builder()
            .link_bandwidth(Kbps::new(900_000))
            .link_delay(Millisecs::new(5))
            .build();
        let s = translate_topology(&instance, &emit);
        assert!(s.contains("set link1_2 [$ns duplex-link $node1 $node2 900000.0kb 5.0ms DropTail]"));
        Ok(())
    }
}
