//! Subnet descriptor produced by the decomposer.

use serde::{Deserialize, Serialize, Serializer};
use std::net::Ipv4Addr;

/// One unit of a decomposed network.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetDescriptor {
    /// 1-based sequence number, restarting for every /32 unit.
    pub index: usize,
    /// Prefix length of the unit, serialized as `/<n>`.
    #[serde(serialize_with = "serialize_mask", deserialize_with = "deserialize_mask")]
    pub mask: u8,
    /// Network address of the unit.
    pub network: Ipv4Addr,
    /// Broadcast address of the unit.
    pub broadcast: Ipv4Addr,
    /// First usable address (`network + 1`).
    pub first: Ipv4Addr,
    /// Last usable address (`network + hosts`).
    pub last: Ipv4Addr,
    /// Requested host count.
    pub hosts: u32,
}

impl SubnetDescriptor {
    /// The mask as shown to users, e.g. `/32`.
    pub fn mask_label(&self) -> String {
        format!("/{}", self.mask)
    }
}

fn serialize_mask<S: Serializer>(mask: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("/{mask}"))
}

fn deserialize_mask<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.strip_prefix('/')
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid mask: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_json() {
        let d = SubnetDescriptor {
            index: 1,
            mask: 32,
            network: Ipv4Addr::new(10, 0, 0, 1),
            broadcast: Ipv4Addr::new(10, 0, 0, 1),
            first: Ipv4Addr::new(10, 0, 0, 2),
            last: Ipv4Addr::new(10, 0, 0, 4),
            hosts: 3,
        };
        assert_eq!(d.mask_label(), "/32");

        let json = serde_json::to_value(d).unwrap();
        assert_eq!(json["mask"], "/32");
        assert_eq!(json["network"], "10.0.0.1");
        assert_eq!(json["last"], "10.0.0.4");
        assert_eq!(json["hosts"], 3);

        let back: SubnetDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, d);
    }
}
