//! Device configuration snippets for a single address.

use crate::error::AddressError;
use crate::processing::mask_length;

/// Render the interface block for `ip`/`prefix`.
pub fn render_configuration(ip: &str, prefix: u8, interface: &str) -> String {
    format!(
        "interface {interface}\n ip address {ip}/{prefix}\n description Configuration for IP address {ip}\n"
    )
}

/// Resolve the prefix of `ip` and render its configuration.
///
/// Fails when `ip` is not a bare dotted-quad address.
pub fn export_configuration(ip: &str, interface: &str) -> Result<String, AddressError> {
    let prefix = mask_length(ip)?;
    log::debug!("export_configuration {ip}/{prefix} on {interface}");
    Ok(render_configuration(ip, prefix, interface))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_INTERFACE;

    #[test]
    fn test_render_configuration() {
        assert_eq!(
            render_configuration("10.0.0.1", 32, "FastEthernet0/0"),
            "interface FastEthernet0/0\n ip address 10.0.0.1/32\n description Configuration for IP address 10.0.0.1\n"
        );
    }

    #[test]
    fn test_export_configuration() {
        let config = export_configuration("192.168.1.10", DEFAULT_INTERFACE).unwrap();
        assert!(config.starts_with("interface FastEthernet0/0\n"));
        assert!(config.contains(" ip address 192.168.1.10/32\n"));

        let config = export_configuration("192.168.1.10", "GigabitEthernet0/1").unwrap();
        assert!(config.starts_with("interface GigabitEthernet0/1\n"));
    }

    #[test]
    fn test_export_configuration_not_found() {
        assert!(export_configuration("not-an-ip", DEFAULT_INTERFACE).is_err());
        assert!(export_configuration("10.0.0.0/24", DEFAULT_INTERFACE).is_err());
    }
}
