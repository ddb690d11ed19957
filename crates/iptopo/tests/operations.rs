//! End-to-end tests of node operations against a scripted executor.

mod common;

use common::*;
use iptopo::{Error, Node};

mod configure {
    use super::*;

    #[test]
    fn test_address_only() {
        let mut node = Node::new(Scripted::new());
        node.configure_interface(&ports(), "1", Some("20.1.1.2/24"), None)
            .unwrap();
        assert_eq!(node.executor().commands(), ["ip addr add 20.1.1.2/24 dev eth1"]);
    }

    #[test]
    fn test_address_is_verbatim() {
        let mut node = Node::new(Scripted::new());
        node.configure_interface(&ports(), "2", Some("2001:DB8::0001/64"), None)
            .unwrap();
        assert_eq!(
            node.executor().commands(),
            ["ip addr add 2001:DB8::0001/64 dev eth2"]
        );
    }

    #[test]
    fn test_state_only() {
        let mut node = Node::new(Scripted::new());
        node.configure_interface(&ports(), "1", None, Some(true))
            .unwrap();
        node.configure_interface(&ports(), "1", None, Some(false))
            .unwrap();
        assert_eq!(
            node.executor().commands(),
            ["ip link set dev eth1 up", "ip link set dev eth1 down"]
        );
    }

    #[test]
    fn test_address_then_state() {
        let mut node = Node::new(Scripted::new());
        node.configure_interface(&ports(), "1", Some("10.0.0.1/8"), Some(true))
            .unwrap();
        assert_eq!(
            node.executor().commands(),
            ["ip addr add 10.0.0.1/8 dev eth1", "ip link set dev eth1 up"]
        );
    }

    #[test]
    fn test_nothing_to_do() {
        let mut node = Node::new(Scripted::new());
        node.configure_interface(&ports(), "1", None, None).unwrap();
        assert!(node.executor().commands().is_empty());
    }

    #[test]
    fn test_invalid_input_issues_nothing() {
        let mut node = Node::new(Scripted::new());
        for (port, addr) in [
            ("1", "300.0.0.1/24"),
            ("1", "10.0.0.1/33"),
            ("", "10.0.0.1/24"),
            ("9", "10.0.0.1/24"),
        ] {
            let err = node
                .configure_interface(&ports(), port, Some(addr), Some(true))
                .unwrap_err();
            assert!(err.is_precondition(), "{port} {addr}: {err}");
        }
        assert!(node.executor().commands().is_empty());
    }

    #[test]
    fn test_failure_stops_before_state_change() {
        let exec = Scripted::new().respond(
            "ip addr add 10.0.0.1/8 dev eth1",
            "RTNETLINK answers: File exists\n",
        );
        let mut node = Node::new(exec);
        let err = node
            .configure_interface(&ports(), "1", Some("10.0.0.1/8"), Some(true))
            .unwrap_err();
        match err {
            Error::UnexpectedOutput { command, output } => {
                assert_eq!(command, "ip addr add 10.0.0.1/8 dev eth1");
                assert!(output.contains("File exists"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(node.executor().commands().len(), 1);
    }

    #[test]
    fn test_shell_is_forwarded() {
        let mut node = Node::new(Scripted::new()).with_shell("bash");
        node.configure_interface(&ports(), "1", None, Some(true))
            .unwrap();
        node.set_shell(None);
        node.configure_interface(&ports(), "1", None, Some(false))
            .unwrap();
        assert_eq!(node.executor().shells(), [Some("bash"), None]);
    }
}

mod sub_interface {
    use super::*;

    #[test]
    fn test_down_leaves_parent_alone() {
        let mut node = Node::new(Scripted::new());
        node.configure_sub_interface(&ports(), "2", "100", None, Some(false))
            .unwrap();
        assert_eq!(node.executor().commands(), ["ip link set dev eth2.100 down"]);
    }

    #[test]
    fn test_up_raises_parent_first() {
        let mut node = Node::new(Scripted::new());
        node.configure_sub_interface(&ports(), "2", "100", None, Some(true))
            .unwrap();
        assert_eq!(
            node.executor().commands(),
            ["ip link set dev eth2 up", "ip link set dev eth2.100 up"]
        );
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let mut node = Node::new(Scripted::new());
        let err = node
            .configure_sub_interface(&ports(), "2", "", Some("10.0.0.1/24"), Some(true))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(node.executor().commands().is_empty());
    }
}

mod remove_address {
    use super::*;

    #[test]
    fn test_with_and_without_prefix() {
        let mut node = Node::new(Scripted::new());
        node.remove_address(&ports(), "1", "20.1.1.2/24").unwrap();
        node.remove_address(&ports(), "1", "20.1.1.2").unwrap();
        assert_eq!(
            node.executor().commands(),
            [
                "ip addr del 20.1.1.2/24 dev eth1",
                "ip addr del 20.1.1.2 dev eth1"
            ]
        );
    }

    #[test]
    fn test_validity_independent_of_command() {
        // A valid address with a prefix is sent exactly as written, and an
        // invalid one never reaches the executor.
        let mut node = Node::new(Scripted::new());
        node.remove_address(&ports(), "2", "fe80::1/64").unwrap();
        assert!(node.remove_address(&ports(), "2", "fe80::zz").is_err());
        assert_eq!(node.executor().commands(), ["ip addr del fe80::1/64 dev eth2"]);
    }
}

mod routes {
    use super::*;

    fn route(dest: &str, via: &str) -> String {
        let mut node = Node::new(Scripted::new());
        node.add_route(dest, via).unwrap();
        node.executor().commands()[0].to_string()
    }

    #[test]
    fn test_family_selection() {
        assert_eq!(
            route("default", "2001:db8::1"),
            "ip -6 route add default via 2001:db8::1"
        );
        assert_eq!(
            route("10.1.0.0/16", "10.0.0.1"),
            "ip -4 route add 10.1.0.0/16 via 10.0.0.1"
        );
        assert_eq!(
            route("default", "10.0.0.1"),
            "ip -4 route add default via 10.0.0.1"
        );
        assert_eq!(
            route("2001:db8:1::/48", "2001:db8::1"),
            "ip -6 route add 2001:db8:1::/48 via 2001:db8::1"
        );
    }

    #[test]
    fn test_mixed_family_takes_ipv6() {
        assert_eq!(
            route("2001:db8:1::/48", "10.0.0.1"),
            "ip -6 route add 2001:db8:1::/48 via 10.0.0.1"
        );
    }

    #[test]
    fn test_gateway_is_canonical() {
        assert_eq!(
            route("default", "2001:DB8:0:0::0001"),
            "ip -6 route add default via 2001:db8::1"
        );
    }

    #[test]
    fn test_invalid_route() {
        let mut node = Node::new(Scripted::new());
        assert!(node.add_route("10.1.0.1/16", "10.0.0.1").is_err());
        assert!(node.add_route("", "10.0.0.1").is_err());
        assert!(node.add_route("default", "10.0.0.0/8").is_err());
        assert!(node.add_route("nowhere", "10.0.0.1").is_err());
        assert!(node.executor().commands().is_empty());
    }
}

mod vlan {
    use super::*;

    #[test]
    fn test_add_then_remove() {
        let mut ports = ports();
        let mut node = Node::new(Scripted::new());

        node.add_vlan_link(&mut ports, "1", "vlan10", 10).unwrap();
        assert_eq!(ports.resolve("vlan10").unwrap(), "vlan10");

        node.configure_interface(&ports, "vlan10", Some("10.10.0.1/24"), Some(true))
            .unwrap();

        node.remove_vlan_link(&mut ports, "vlan10").unwrap();
        assert!(!ports.contains("vlan10"));

        assert_eq!(
            node.executor().commands(),
            [
                "ip link add link eth1 name vlan10 type vlan id 10",
                "ip addr add 10.10.0.1/24 dev vlan10",
                "ip link set dev vlan10 up",
                "ip link del link dev vlan10",
            ]
        );
    }

    #[test]
    fn test_add_existing_name_fails_first() {
        let mut ports = ports();
        ports.insert("vlan10", "vlan10");
        let mut node = Node::new(Scripted::new());

        let err = node.add_vlan_link(&mut ports, "1", "vlan10", 10).unwrap_err();
        assert!(matches!(err, Error::DeviceExists { ref name } if name == "vlan10"));
        assert!(node.executor().commands().is_empty());
    }

    #[test]
    fn test_remove_unknown_name_fails_first() {
        let mut ports = ports();
        let mut node = Node::new(Scripted::new());

        let err = node.remove_vlan_link(&mut ports, "vlan99").unwrap_err();
        assert!(matches!(err, Error::DeviceNotFound { ref name } if name == "vlan99"));
        assert!(node.executor().commands().is_empty());
    }

    #[test]
    fn test_bad_vlan_id() {
        let mut ports = ports();
        let mut node = Node::new(Scripted::new());
        assert!(node.add_vlan_link(&mut ports, "1", "vlan0", 0).is_err());
        assert!(node.add_vlan_link(&mut ports, "1", "vlan4095", 4095).is_err());
        assert!(node.add_vlan_link(&mut ports, "", "vlan5", 5).is_err());
        assert!(node.executor().commands().is_empty());
        assert_eq!(ports.len(), 2);
    }

    #[test]
    fn test_failed_create_does_not_register() {
        let mut ports = ports();
        let exec = Scripted::new().respond(
            "ip link add link eth1 name vlan10 type vlan id 10",
            "RTNETLINK answers: Operation not permitted\n",
        );
        let mut node = Node::new(exec);
        assert!(node.add_vlan_link(&mut ports, "1", "vlan10", 10).is_err());
        assert!(!ports.contains("vlan10"));
    }
}

mod show {
    use super::*;

    #[test]
    fn test_existing_device() {
        let exec = Scripted::new()
            .respond("ip addr list dev eth1", ETH1_ADDR)
            .respond("ip -s link list dev eth1", ETH1_STATS);
        let mut node = Node::new(exec);

        let status = node.show_interface("eth1").unwrap().unwrap();
        assert_eq!(status.dev(), "eth1");
        assert_eq!(status.config.inet.unwrap().to_string(), "20.1.1.2");
        assert_eq!(status.config.inet_mask, Some(24));
        assert_eq!(status.config.inet6, None);
        assert_eq!(status.stats.rx_bytes, 100);
        assert_eq!(status.stats.rx_packets, 50);
        assert_eq!(status.stats.rx_mcast, 2);
        assert_eq!(status.stats.tx_bytes, 200);
        assert_eq!(status.stats.tx_packets, 60);
        assert_eq!(status.stats.tx_errors, 1);

        assert_eq!(
            node.executor().commands(),
            ["ip addr list dev eth1", "ip -s link list dev eth1"]
        );
    }

    #[test]
    fn test_json_has_no_absent_fields() {
        let exec = Scripted::new()
            .respond("ip addr list dev eth1", ETH1_ADDR)
            .respond("ip -s link list dev eth1", ETH1_STATS);
        let status = Node::new(exec).show_interface("eth1").unwrap().unwrap();

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["inet"], "20.1.1.2");
        assert_eq!(json["inet_mask"], 24);
        assert!(json.get("inet6").is_none());
        assert!(json.get("inet6_mask").is_none());
    }

    #[test]
    fn test_missing_device_skips_stats() {
        let exec = Scripted::new().respond("ip addr list dev eth7", ETH7_MISSING);
        let mut node = Node::new(exec);

        assert_eq!(node.show_interface("eth7").unwrap(), None);
        assert_eq!(node.executor().commands(), ["ip addr list dev eth7"]);
    }

    #[test]
    fn test_missing_stats_is_parse_error() {
        let exec = Scripted::new().respond("ip addr list dev eth1", ETH1_ADDR);
        let err = Node::new(exec).show_interface("eth1").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let exec = Scripted::new().respond("ip addr list dev eth1", "permission denied\n");
        let mut node = Node::new(exec);
        assert!(node.show_interface("eth1").unwrap_err().is_parse());
        assert_eq!(node.executor().commands().len(), 1);
    }
}

mod ping {
    use super::*;

    #[test]
    fn test_summary() {
        let exec = Scripted::new().respond("ping -c 5 20.1.1.1", PING_OK);
        let mut node = Node::new(exec);
        let res = node.ping(5, "20.1.1.1", None, false).unwrap();
        assert_eq!(res.transmitted, 5);
        assert_eq!(res.received, 5);
        assert_eq!(res.errors, 0);
        assert_eq!(res.loss_pc, 0);
        assert_eq!(res.time_ms, 40);
    }

    #[test]
    fn test_ipv6_with_errors_and_options() {
        let exec = Scripted::new().respond("ping6 -i 0.2 -q -c 5 2001:db8::9", PING_ERRORS);
        let mut node = Node::new(exec);
        let res = node.ping(5, "2001:db8::9", Some(0.2), true).unwrap();
        assert_eq!(res.errors, 2);
        assert_eq!(res.loss_pc, 100);
    }

    #[test]
    fn test_partial_loss() {
        let exec = Scripted::new().respond(
            "ping -c 3 20.1.1.1",
            "--- 20.1.1.1 ping statistics ---\n\
             3 packets transmitted, 2 received, +1 duplicates, 33.3333% packet loss, time 2003ms\n",
        );
        let res = Node::new(exec).ping(3, "20.1.1.1", None, false).unwrap();
        assert_eq!(res.received, 2);
        assert_eq!(res.duplicates, 1);
        assert_eq!(res.loss_pc, 33);
    }

    #[test]
    fn test_missing_summary() {
        let exec = Scripted::new().respond("ping -c 1 20.1.1.1", "connect: Network is unreachable\n");
        let err = Node::new(exec).ping(1, "20.1.1.1", None, false).unwrap_err();
        assert!(err.is_parse());
    }
}
