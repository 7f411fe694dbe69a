use crate::gatt::{descriptor, properties::AttributePermission};
use bluer::gatt::local::{Descriptor, DescriptorRead, DescriptorReadRequest, ReqError};
use futures::FutureExt;

pub fn parse_descriptor(descriptor: descriptor::Descriptor) -> Descriptor {
    let descriptor::Descriptor {
        uuid,
        permissions,
        value,
        ..
    } = descriptor;

    let read = match value {
        Some(value) if AttributePermission::readable(&permissions) => Some(DescriptorRead {
            read: true,
            secure_read: AttributePermission::read_encrypted(&permissions),
            fun: Box::new(move |request: DescriptorReadRequest| {
                let value = value.clone();
                async move { read_at_offset(&value, request.offset as usize) }.boxed()
            }),
            ..Default::default()
        }),
        _ => None,
    };

    Descriptor {
        uuid,
        read,
        ..Default::default()
    }
}

/// Long reads arrive in pieces, each asking for the value from `offset` on.
fn read_at_offset(value: &[u8], offset: usize) -> Result<Vec<u8>, ReqError> {
    value
        .get(offset..)
        .map(<[u8]>::to_vec)
        .ok_or(ReqError::InvalidOffset)
}
