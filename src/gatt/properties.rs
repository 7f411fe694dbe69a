#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacteristicProperty {
    Broadcast,
    Read,
    WriteWithoutResponse,
    Write,
    AuthenticatedSignedWrites,
    Notify,
    NotifyEncryptionRequired,
    Indicate,
    IndicateEncryptionRequired,
    ExtendedProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributePermission {
    Readable,
    Writeable,
    ReadEncryptionRequired,
    WriteEncryptionRequired,
}

impl AttributePermission {
    /// Whether a client may read an attribute carrying `permissions`.
    pub fn readable(permissions: &[AttributePermission]) -> bool {
        permissions.iter().any(|p| {
            matches!(
                p,
                AttributePermission::Readable | AttributePermission::ReadEncryptionRequired
            )
        })
    }

    pub fn read_encrypted(permissions: &[AttributePermission]) -> bool {
        permissions.contains(&AttributePermission::ReadEncryptionRequired)
    }
}
