use super::{clamp_str, BlockTag, BlockWriter, PropertyType};
use crate::adapter::CharacteristicHandle;
use crate::config::EncoderConfig;
use crate::error::{Error, ErrorType};
use once_cell::sync::Lazy;
use std::sync::Mutex;

pub const DEFAULT_INT_INCREMENT: u32 = 1;
pub const DEFAULT_FLOAT_INCREMENT: f32 = 0.01;

/// What a property is, together with its type-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKind<'a> {
    Bool,
    Int { increment: u32 },
    Float { increment: f32 },
    Text,
    Date,
    Time,
    Range { min: u32, max: u32 },
    /// `options` is a `|` separated list, e.g. `"Low|Medium|High"`.
    Select { options: &'a str },
}

impl PropertyKind<'_> {
    pub fn property_type(&self) -> PropertyType {
        match self {
            PropertyKind::Bool => PropertyType::Bool,
            PropertyKind::Int { .. } => PropertyType::Int,
            PropertyKind::Float { .. } => PropertyType::Float,
            PropertyKind::Text => PropertyType::Text,
            PropertyKind::Date => PropertyType::Date,
            PropertyKind::Time => PropertyType::Time,
            PropertyKind::Range { .. } => PropertyType::Range,
            PropertyKind::Select { .. } => PropertyType::Select,
        }
    }
}

/// Encodes property blocks and attaches them to characteristics.
///
/// The encoder hands out sort positions in attachment order and holds at most
/// one staged title, which goes into the next property that is attached.
/// Both are only advanced by a successful attach: a rejected property leaves
/// no gap in the ordering and keeps the staged title for the next one.
#[derive(Debug, Clone)]
pub struct PropertyEncoder {
    config: EncoderConfig,
    // u16 so that "all 256 positions issued" is representable
    next_sort: u16,
    pending_title: Option<String>,
    added: usize,
}

impl Default for PropertyEncoder {
    fn default() -> Self {
        PropertyEncoder::with_config(EncoderConfig::default())
    }
}

impl PropertyEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        PropertyEncoder {
            next_sort: config.first_sort_position.into(),
            config,
            pending_title: None,
            added: 0,
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Sort position the next attached property will get, `None` once all
    /// 256 positions are used up.
    pub fn next_sort_position(&self) -> Option<u8> {
        u8::try_from(self.next_sort).ok()
    }

    pub fn pending_title(&self) -> Option<&str> {
        self.pending_title.as_deref()
    }

    /// Number of properties attached through this encoder.
    pub fn properties_added(&self) -> usize {
        self.added
    }

    /// Stages a title shown above the next property. Empty titles are ignored,
    /// a second call before the next property replaces the first.
    pub fn add_title(&mut self, title: &str) {
        if title.is_empty() {
            return;
        }
        let title = clamp_str(title, self.config.string_limit());
        log::trace!("Staged property title {title:?}");
        self.pending_title = Some(title.to_string());
    }

    pub fn add_bool<H>(&mut self, characteristic: &mut H, name: &str) -> Result<(), Error>
    where
        H: CharacteristicHandle + ?Sized,
    {
        self.add(characteristic, name, PropertyKind::Bool)
    }

    pub fn add_int<H>(&mut self, characteristic: &mut H, name: &str) -> Result<(), Error>
    where
        H: CharacteristicHandle + ?Sized,
    {
        self.add_int_with_increment(characteristic, name, DEFAULT_INT_INCREMENT)
    }

    /// Integer property; `increment` is the step of the client's control.
    pub fn add_int_with_increment<H>(
        &mut self,
        characteristic: &mut H,
        name: &str,
        increment: u32,
    ) -> Result<(), Error>
    where
        H: CharacteristicHandle + ?Sized,
    {
        self.add(characteristic, name, PropertyKind::Int { increment })
    }

    pub fn add_float<H>(&mut self, characteristic: &mut H, name: &str) -> Result<(), Error>
    where
        H: CharacteristicHandle + ?Sized,
    {
        self.add_float_with_increment(characteristic, name, DEFAULT_FLOAT_INCREMENT)
    }

    pub fn add_float_with_increment<H>(
        &mut self,
        characteristic: &mut H,
        name: &str,
        increment: f32,
    ) -> Result<(), Error>
    where
        H: CharacteristicHandle + ?Sized,
    {
        self.add(characteristic, name, PropertyKind::Float { increment })
    }

    pub fn add_text<H>(&mut self, characteristic: &mut H, name: &str) -> Result<(), Error>
    where
        H: CharacteristicHandle + ?Sized,
    {
        self.add(characteristic, name, PropertyKind::Text)
    }

    /// Date property. The characteristic value is a `YYYY-MM-DD` string; the
    /// format is not checked here.
    pub fn add_date<H>(&mut self, characteristic: &mut H, name: &str) -> Result<(), Error>
    where
        H: CharacteristicHandle + ?Sized,
    {
        self.add(characteristic, name, PropertyKind::Date)
    }

    /// Time property. The characteristic value is an `HH:MM` string.
    pub fn add_time<H>(&mut self, characteristic: &mut H, name: &str) -> Result<(), Error>
    where
        H: CharacteristicHandle + ?Sized,
    {
        self.add(characteristic, name, PropertyKind::Time)
    }

    /// Range property, rendered as a slider between `min` and `max`.
    pub fn add_range<H>(
        &mut self,
        characteristic: &mut H,
        name: &str,
        min: u32,
        max: u32,
    ) -> Result<(), Error>
    where
        H: CharacteristicHandle + ?Sized,
    {
        self.add(characteristic, name, PropertyKind::Range { min, max })
    }

    pub fn add_select<H>(
        &mut self,
        characteristic: &mut H,
        name: &str,
        options: &str,
    ) -> Result<(), Error>
    where
        H: CharacteristicHandle + ?Sized,
    {
        self.add(characteristic, name, PropertyKind::Select { options })
    }

    /// Encodes a property and attaches it to `characteristic` under the
    /// configured descriptor UUID.
    pub fn add<H>(
        &mut self,
        characteristic: &mut H,
        name: &str,
        kind: PropertyKind<'_>,
    ) -> Result<(), Error>
    where
        H: CharacteristicHandle + ?Sized,
    {
        let block = match self.encode(name, &kind) {
            Ok(block) => block,
            Err(err) => {
                log::warn!(
                    "Property {name:?} ({:?}) not attached: {}",
                    kind.property_type(),
                    err.description()
                );
                return Err(err);
            }
        };
        let size = block.len();
        if let Err(err) = characteristic.attach_descriptor(self.config.descriptor_uuid, block) {
            log::warn!(
                "Property {name:?} ({:?}) not attached: {}",
                kind.property_type(),
                err.description()
            );
            return Err(err);
        }

        log::debug!(
            "Attached {:?} property {name:?} at sort position {} ({size} bytes)",
            kind.property_type(),
            self.next_sort
        );
        self.next_sort += 1;
        self.pending_title = None;
        self.added += 1;
        Ok(())
    }

    /// Returns the block the next `add` with these arguments would attach,
    /// without attaching it or touching the sort position and staged title.
    pub fn encode(&self, name: &str, kind: &PropertyKind<'_>) -> Result<Vec<u8>, Error> {
        if name.is_empty() {
            return Err(Error::from_string(
                "property name is empty".to_string(),
                ErrorType::EmptyName,
            ));
        }
        let limit = self.config.string_limit();
        if let PropertyKind::Select { options } = kind {
            if options.is_empty() || options.len() > limit {
                return Err(Error::from_string(
                    format!(
                        "select options must be 1 to {limit} bytes, got {}",
                        options.len()
                    ),
                    ErrorType::InvalidOptions,
                ));
            }
        }
        let sort_position = self.next_sort_position().ok_or_else(|| {
            Error::from_string(
                "all 256 sort positions are in use".to_string(),
                ErrorType::SortOrderExhausted,
            )
        })?;

        let mut w: BlockWriter = BlockWriter::new();

        // attributes, two reserved bytes
        w.put_u8(kind.property_type().into())?;
        w.put_u8(sort_position)?;
        w.put_bytes(&[0, 0])?;

        // a name cut down to nothing would leave no length byte for clients to read
        let name = clamp_str(name, limit);
        if name.is_empty() {
            return Err(Error::from_string(
                format!("property name does not fit in {limit} bytes"),
                ErrorType::EmptyName,
            ));
        }
        w.put_str(name.as_bytes())?;

        if let Some(title) = &self.pending_title {
            w.put_u8(BlockTag::Title.into())?;
            w.put_str(title.as_bytes())?;
        }

        match *kind {
            PropertyKind::Int { increment } => {
                w.put_u8(BlockTag::Increment.into())?;
                w.put_u32_le(increment)?;
            }
            PropertyKind::Float { increment } => {
                w.put_u8(BlockTag::Increment.into())?;
                w.put_f32_le(increment)?;
            }
            PropertyKind::Range { min, max } => {
                w.put_u8(BlockTag::Range.into())?;
                w.put_u32_le(min)?;
                w.put_u32_le(max)?;
            }
            PropertyKind::Select { options } => {
                w.put_u8(BlockTag::SelectOptions.into())?;
                w.put_str(options.as_bytes())?;
            }
            PropertyKind::Bool | PropertyKind::Text | PropertyKind::Date | PropertyKind::Time => {}
        }
        Ok(w.into_vec())
    }
}

static SHARED: Lazy<Mutex<PropertyEncoder>> = Lazy::new(|| Mutex::new(PropertyEncoder::new()));

/// Process-wide encoder for call sites that set up all their properties from
/// one place and do not want to carry an encoder around.
pub fn shared() -> &'static Mutex<PropertyEncoder> {
    &SHARED
}
