mod descriptor_utils;

use super::CharacteristicHandle;
use crate::{error::Error, gatt::descriptor::Descriptor};
use descriptor_utils::parse_descriptor;
use uuid::Uuid;

impl CharacteristicHandle for bluer::gatt::local::Characteristic {
    fn attach_descriptor(&mut self, uuid: Uuid, value: Vec<u8>) -> Result<(), Error> {
        self.descriptors
            .push(parse_descriptor(Descriptor::read_only(uuid, value)));
        Ok(())
    }
}
