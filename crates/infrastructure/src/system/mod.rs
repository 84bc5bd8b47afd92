pub mod icmp_probe;
pub mod interfaces;

pub use icmp_probe::IcmpProbe;
pub use interfaces::SystemInterfaceLister;
