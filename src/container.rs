use std::io::{Cursor, Read, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, VectorError};

/// Version byte leading every encoded [`ArrayVector`].
pub const ARRAY_VECTOR_VERSION: u8 = 1;

/// Integer array wrapper that can be persisted and restored.
///
/// Encoded layout, all integers big-endian:
/// - `u8` version
/// - `u8` 1 if an array is present, 0 otherwise
/// - `u32` length, then `i32` elements (only when present)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrayVector {
    array: Option<Vec<i32>>,
}

impl ArrayVector {
    pub fn new(array: impl Into<Vec<i32>>) -> Self {
        ArrayVector {
            array: Some(array.into()),
        }
    }

    pub fn set_array(&mut self, array: impl Into<Vec<i32>>) {
        self.array = Some(array.into());
    }

    pub fn array(&self) -> Option<&[i32]> {
        self.array.as_deref()
    }

    /// Polynomial hash over the elements with multiplier 31; 0 when no
    /// array is set.
    pub fn hash_code(&self) -> i32 {
        match &self.array {
            None => 0,
            Some(array) => array
                .iter()
                .fold(1i32, |h, &x| h.wrapping_mul(31).wrapping_add(x)),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(&[ARRAY_VECTOR_VERSION])?;
        match &self.array {
            None => out.write_all(&[0])?,
            Some(array) => {
                let len = u32::try_from(array.len())
                    .map_err(|_| VectorError::InvalidLength(array.len() as i64))?;
                out.write_all(&[1])?;
                out.write_all(&len.to_be_bytes())?;
                for x in array {
                    out.write_all(&x.to_be_bytes())?;
                }
            }
        }
        Ok(())
    }

    pub fn read_from<R: Read>(input: &mut R) -> Result<Self> {
        let mut header = [0u8; 2];
        input.read_exact(&mut header)?;
        let [version, present] = header;
        if version != ARRAY_VECTOR_VERSION {
            return Err(VectorError::UnsupportedVersion(version));
        }

        let array = match present {
            0 => None,
            1 => {
                let mut len_bytes = [0u8; 4];
                input.read_exact(&mut len_bytes)?;
                let len = u32::from_be_bytes(len_bytes) as usize;
                let mut array = Vec::with_capacity(len.min(4096));
                let mut val_bytes = [0u8; 4];
                for _ in 0..len {
                    input.read_exact(&mut val_bytes)?;
                    array.push(i32::from_be_bytes(val_bytes));
                }
                Some(array)
            }
            other => {
                return Err(VectorError::Malformed(format!(
                    "presence flag must be 0 or 1, got {}",
                    other
                )));
            }
        };
        debug!("read array vector: {:?}", array);
        Ok(ArrayVector { array })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::read_from(&mut Cursor::new(bytes))
    }
}
