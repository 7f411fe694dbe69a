pub mod adapter;
pub mod config;
pub mod error;
pub mod gatt;
pub mod property;
pub mod uuid;

pub use self::adapter::CharacteristicHandle;
pub use self::property::{PropertyBlock, PropertyEncoder, PropertyKind};
