/// One address assigned to an interface, kept as printed (`192.168.1.20/24`, `fe80::1/64`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBinding {
    pub interface: String,
    pub address: String,
}

impl AddressBinding {
    pub fn new(interface: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            address: address.into(),
        }
    }
}
