#[cfg(target_os = "linux")]
mod bluez;

use crate::{
    error::Error,
    gatt::{characteristic::Characteristic, descriptor::Descriptor},
};
use uuid::Uuid;

/// Something a descriptor can be attached to.
///
/// Implementations take ownership of `value`; it must stay readable by
/// clients for as long as the characteristic is served.
pub trait CharacteristicHandle {
    fn attach_descriptor(&mut self, uuid: Uuid, value: Vec<u8>) -> Result<(), Error>;
}

impl CharacteristicHandle for Characteristic {
    fn attach_descriptor(&mut self, uuid: Uuid, value: Vec<u8>) -> Result<(), Error> {
        self.descriptors.push(Descriptor::read_only(uuid, value));
        Ok(())
    }
}
