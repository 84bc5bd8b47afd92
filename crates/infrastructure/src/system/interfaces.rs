use ferrous_nslookup_application::ports::{InterfaceAddress, InterfaceLister};
use ferrous_nslookup_domain::DomainError;
use if_addrs::{IfAddr, Interface};
use std::net::IpAddr;

/// Local interface addresses as reported by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaceLister;

impl SystemInterfaceLister {
    pub fn new() -> Self {
        Self
    }
}

impl InterfaceLister for SystemInterfaceLister {
    fn addresses(&self) -> Result<Vec<InterfaceAddress>, DomainError> {
        let interfaces = if_addrs::get_if_addrs().map_err(|e| {
            DomainError::IoError(format!("Failed to list interface addresses: {}", e))
        })?;

        Ok(interfaces.iter().map(to_interface_address).collect())
    }
}

fn to_interface_address(interface: &Interface) -> InterfaceAddress {
    let (address, netmask) = match &interface.addr {
        IfAddr::V4(v4) => (IpAddr::V4(v4.ip), IpAddr::V4(v4.netmask)),
        IfAddr::V6(v6) => (IpAddr::V6(v6.ip), IpAddr::V6(v6.netmask)),
    };

    InterfaceAddress {
        interface: interface.name.clone(),
        address,
        prefix_len: prefix_len(netmask),
    }
}

/// `None` for masks that are not a contiguous run of ones.
fn prefix_len(netmask: IpAddr) -> Option<u8> {
    ipnetwork::ip_mask_to_prefix(netmask).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_len() {
        assert_eq!(prefix_len("255.255.255.0".parse().unwrap()), Some(24));
        assert_eq!(prefix_len("255.0.0.0".parse().unwrap()), Some(8));
        assert_eq!(
            prefix_len("ffff:ffff:ffff:ffff::".parse().unwrap()),
            Some(64)
        );
    }

    #[test]
    fn test_non_contiguous_mask_has_no_prefix() {
        assert_eq!(prefix_len("255.0.255.0".parse().unwrap()), None);
    }

    #[test]
    fn test_lists_loopback() {
        let addresses = SystemInterfaceLister::new().addresses().unwrap();
        assert!(addresses.iter().any(|a| a.address.is_loopback()));
    }
}
