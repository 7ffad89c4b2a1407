//! Integration tests for subnet-decomposer
//!
//! These tests verify the complete workflow from registry to rendered views.

use std::net::Ipv4Addr;
use subnet_decomposer::{
    concatenated, dump_registry, index_view,
    models::{addr_to_int, int_to_addr},
    output::{export_configuration, render_index, OutputFormat},
    processing::{decompose, mask_length},
    registry::Registry,
};

#[test]
fn test_index_view_from_registry() {
    let dir = tempfile::tempdir().expect("temp dir");
    let registry = Registry::open(dir.path().join("registry.json")).expect("open registry");
    registry.insert("172.16.0.0/24", 5).expect("insert");

    let views = index_view(&registry, Some(65_536)).expect("index view");
    assert_eq!(views.len(), 1);

    let descriptors = concatenated(&views);
    assert_eq!(descriptors.len(), 256, "Expected one descriptor per /32");
    for (k, d) in descriptors.iter().enumerate() {
        assert_eq!(d.index, 1);
        assert_eq!(d.hosts, 5);
        assert_eq!(d.network, Ipv4Addr::new(172, 16, 0, k as u8));
    }
}

#[test]
fn test_index_view_with_test_data() {
    let registry =
        Registry::open("src/tests/test_data/registry_test_01.json").expect("open registry");
    let views = index_view(&registry, None).expect("index view");

    assert_eq!(views.len(), 3);
    assert_eq!(views[0].descriptors.len(), 256);
    assert_eq!(views[1].descriptors.len(), 4);
    // 999.1.1.1 is kept in the registry but cannot be decomposed
    assert!(views[2].descriptors.is_empty());
    assert_eq!(concatenated(&views).len(), 260);

    let records = dump_registry(&registry).expect("dump");
    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 4]);
}

#[test]
fn test_index_view_caps_large_networks() {
    let registry =
        Registry::open("src/tests/test_data/registry_test_large.json").expect("open registry");
    let views = index_view(&registry, Some(65_536)).expect("index view");

    assert_eq!(views.len(), 2);
    assert!(views[0].descriptors.is_empty(), "/8 exceeds the unit cap");
    assert_eq!(views[1].descriptors.len(), 2);

    let csv = render_index(&views, OutputFormat::Csv).expect("render");
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn test_descriptor_properties() {
    for (base, hosts) in [("10.0.0.0/28", 0), ("192.168.7.0/27", 12), ("10.1.2.3", 200)] {
        let descriptors = decompose(base, hosts);
        assert!(!descriptors.is_empty());
        for d in descriptors {
            assert_eq!(addr_to_int(d.first), addr_to_int(d.network) + 1);
            assert_eq!(addr_to_int(d.last), addr_to_int(d.network) + d.hosts);
            assert_eq!(d.broadcast, d.network);
            assert_eq!(d.mask_label(), "/32");
        }
    }
}

#[test]
fn test_descriptors_wrap_at_top_of_address_space() {
    for (base, hosts, units) in [("255.255.255.0/24", 1, 256), ("255.255.255.252/30", 0, 4)] {
        let descriptors = decompose(base, hosts);
        assert_eq!(descriptors.len(), units, "Expected one descriptor per /32 for {base}");
        for d in descriptors {
            assert_eq!(d.first, int_to_addr(addr_to_int(d.network).wrapping_add(1)));
            assert_eq!(d.last, int_to_addr(addr_to_int(d.network).wrapping_add(d.hosts)));
        }
    }
}

#[test]
fn test_malformed_inputs() {
    assert!(decompose("not-an-ip", 1).is_empty());
    assert!(decompose("10.0.0.0/99", 1).is_empty());
    assert!(decompose(" 10.0.0.0/24", 1).is_empty());
    assert_eq!(mask_length("10.0.0.1"), Ok(32));
    assert!(mask_length("not-an-ip").is_err());
    assert!(export_configuration("not-an-ip", "FastEthernet0/0").is_err());
}

#[test]
fn test_address_round_trip() {
    for n in [0, 1, 0x0A00_0001, 0xC0A8_0101, u32::MAX - 1, u32::MAX] {
        assert_eq!(addr_to_int(int_to_addr(n)), n);
    }
}
