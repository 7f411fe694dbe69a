use super::{BlockTag, PropertyType};
use crate::error::Error;
use num_enum::TryFromPrimitive;

/// Type-specific part of a property block.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    None,
    Increment(u32),
    FloatIncrement(f32),
    Range { min: u32, max: u32 },
    Options(Vec<String>),
}

/// A decoded property block, as a client reads it from the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyBlock {
    pub property_type: PropertyType,
    pub sort_position: u8,
    pub name: String,
    pub title: Option<String>,
    pub payload: Payload,
}

struct Reader<'a> {
    b: &'a [u8],
    i: usize,
}

impl<'a> Reader<'a> {
    fn is_empty(&self) -> bool {
        self.i >= self.b.len()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        let end = self.i + n;
        let v = self.b.get(self.i..end).ok_or_else(|| {
            Error::malformed(format!(
                "block ends at {} bytes, needed {end}",
                self.b.len()
            ))
        })?;
        self.i = end;
        Ok(v)
    }

    fn u8(&mut self) -> Result<u8, Error> {
        Ok(self.take(1)?[0])
    }

    fn array4(&mut self) -> Result<[u8; 4], Error> {
        let mut a = [0; 4];
        a.copy_from_slice(self.take(4)?);
        Ok(a)
    }

    fn string(&mut self) -> Result<String, Error> {
        let n = self.u8()? as usize;
        let raw = self.take(n)?;
        String::from_utf8(raw.to_vec())
            .map_err(|err| Error::malformed(format!("string is not UTF-8: {err}")))
    }
}

impl PropertyBlock {
    /// Decodes a descriptor value produced by `PropertyEncoder`.
    pub fn parse(b: &[u8]) -> Result<PropertyBlock, Error> {
        let mut r = Reader { b, i: 0 };
        let property_type = PropertyType::try_from_primitive(r.u8()?)?;
        let sort_position = r.u8()?;
        r.take(2)?; // reserved
        let name = r.string()?;

        let mut title = None;
        let mut tag = if r.is_empty() {
            None
        } else {
            Some(BlockTag::try_from_primitive(r.u8()?)?)
        };
        if tag == Some(BlockTag::Title) {
            title = Some(r.string()?);
            tag = if r.is_empty() {
                None
            } else {
                Some(BlockTag::try_from_primitive(r.u8()?)?)
            };
        }

        let payload = match (property_type, tag) {
            (PropertyType::Int, Some(BlockTag::Increment)) => {
                Payload::Increment(u32::from_le_bytes(r.array4()?))
            }
            (PropertyType::Float, Some(BlockTag::Increment)) => {
                Payload::FloatIncrement(f32::from_le_bytes(r.array4()?))
            }
            (PropertyType::Range, Some(BlockTag::Range)) => {
                let min = u32::from_le_bytes(r.array4()?);
                let max = u32::from_le_bytes(r.array4()?);
                Payload::Range { min, max }
            }
            (PropertyType::Select, Some(BlockTag::SelectOptions)) => {
                Payload::Options(r.string()?.split('|').map(String::from).collect())
            }
            (
                PropertyType::Bool | PropertyType::Text | PropertyType::Date | PropertyType::Time,
                None,
            ) => Payload::None,
            (t, tag) => {
                return Err(Error::malformed(format!(
                    "{t:?} property cannot carry {tag:?} block"
                )))
            }
        };

        if !r.is_empty() {
            return Err(Error::malformed(format!(
                "{} trailing bytes",
                b.len() - r.i
            )));
        }
        Ok(PropertyBlock {
            property_type,
            sort_position,
            name,
            title,
            payload,
        })
    }
}
