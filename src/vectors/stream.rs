//! Byte and text stream codecs for [`Vector`].
//!
//! # Binary layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | length N, `i32` big-endian |
//! | 4 | 8 * N | elements, `f64` big-endian |
//!
//! # Text layout
//!
//! `<N> <v1> <v2> ... <vN> ` with every token followed by a single space.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, error, warn};

use crate::{Result, Vector, VectorError};

pub fn write_binary<T, W>(vector: &[T], out: &mut W) -> Result<()>
where
    T: Copy + Into<f64>,
    W: Write,
{
    let len = i32::try_from(vector.len())
        .map_err(|_| VectorError::InvalidLength(vector.len() as i64))?;
    out.write_all(&len.to_be_bytes())?;
    for &x in vector {
        out.write_all(&x.into().to_be_bytes())?;
    }
    debug!("wrote binary vector of {} elements", len);
    Ok(())
}

/// Reads a length-prefixed vector. A stream shorter than the declared
/// length fails with an unexpected-EOF I/O error.
pub fn read_binary<R: Read>(input: &mut R) -> Result<Vector> {
    let mut len_bytes = [0u8; 4];
    input.read_exact(&mut len_bytes)?;
    let len = i32::from_be_bytes(len_bytes);
    if len < 0 {
        return Err(VectorError::InvalidLength(len as i64));
    }

    let len = len as usize;
    let mut data = Vec::with_capacity(len.min(4096));
    let mut val_bytes = [0u8; 8];
    for _ in 0..len {
        input.read_exact(&mut val_bytes)?;
        data.push(f64::from_be_bytes(val_bytes));
    }
    debug!("read binary vector of {} elements", len);
    Ok(Vector::new(data))
}

pub fn write_text<T, W>(vector: &[T], out: &mut W) -> Result<()>
where
    T: Copy + Into<f64>,
    W: Write,
{
    let mut s = format!("{} ", vector.len());
    let values = vector
        .iter()
        .map(|&x| x.into().to_string() + " ")
        .collect::<String>();
    s.push_str(values.as_str());
    out.write_all(s.as_bytes())?;
    debug!("wrote text vector of {} elements", vector.len());
    Ok(())
}

/// Reads a whitespace separated vector. The first token is the declared
/// length; the next that many tokens are consumed and every one that does
/// not parse as a number is dropped, so the result can be shorter than
/// declared.
pub fn read_text<R: Read>(input: &mut R) -> Result<Vector> {
    let mut content = String::new();
    input.read_to_string(&mut content)?;

    let mut tokens = content.split_whitespace();
    let len = match tokens.next().and_then(|t| t.parse::<f64>().ok()) {
        // saturating cast: NaN and negatives become 0
        Some(n) => n as usize,
        None => 0,
    };

    let vector = tokens
        .take(len)
        .filter_map(|token| match token.parse::<f64>() {
            Ok(x) => Some(x),
            Err(_) => {
                warn!("skipping non-numeric token {:?}", token);
                None
            }
        })
        .collect::<Vector>();
    debug!(
        "read text vector of {} elements (declared {})",
        vector.len(),
        len
    );
    Ok(vector)
}

pub fn save_binary<T>(path: impl AsRef<Path>, vector: &[T]) -> Result<()>
where
    T: Copy + Into<f64>,
{
    let path = path.as_ref();
    save_with(path, |out| write_binary(vector, out))
        .inspect_err(|e| error!("failed to save binary vector to {}: {}", path.display(), e))
}

pub fn load_binary(path: impl AsRef<Path>) -> Result<Vector> {
    let path = path.as_ref();
    load_with(path, |input| read_binary(input))
        .inspect_err(|e| error!("failed to load binary vector from {}: {}", path.display(), e))
}

pub fn save_text<T>(path: impl AsRef<Path>, vector: &[T]) -> Result<()>
where
    T: Copy + Into<f64>,
{
    let path = path.as_ref();
    save_with(path, |out| write_text(vector, out))
        .inspect_err(|e| error!("failed to save text vector to {}: {}", path.display(), e))
}

pub fn load_text(path: impl AsRef<Path>) -> Result<Vector> {
    let path = path.as_ref();
    load_with(path, |input| read_text(input))
        .inspect_err(|e| error!("failed to load text vector from {}: {}", path.display(), e))
}

fn save_with<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let mut out = BufWriter::new(File::create(path)?);
    write(&mut out)?;
    out.flush()?;
    Ok(())
}

fn load_with<T, F>(path: &Path, read: F) -> Result<T>
where
    F: FnOnce(&mut BufReader<File>) -> Result<T>,
{
    let mut input = BufReader::new(File::open(path)?);
    read(&mut input)
}
