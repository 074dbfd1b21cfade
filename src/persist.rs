use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::Result;

/// Writes any serializable value to `path` as self-describing JSON.
pub fn save_object<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write = || -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut out, value)?;
        out.flush()?;
        Ok(())
    };
    write().inspect_err(|e| error!("failed to save object to {}: {}", path.display(), e))?;
    debug!("saved object to {}", path.display());
    Ok(())
}

pub fn load_object<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let read = || -> Result<T> {
        let input = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(input)?)
    };
    read().inspect_err(|e| error!("failed to load object from {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayVector, Vector, VectorError};
    use anyhow::Result;
    use std::collections::LinkedList;
    use tempfile::tempdir;

    #[test]
    fn test_linked_list_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("file");
        let mut written = LinkedList::new();
        written.push_back("first".to_string());
        written.push_back("second".to_string());

        save_object(&path, &written)?;
        let read: LinkedList<String> = load_object(&path)?;
        assert_eq!(read, written);
        Ok(())
    }

    #[test]
    fn test_array_vector_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("file");
        let written = ArrayVector::new([1, 3, 5]);

        save_object(&path, &written)?;
        let read: ArrayVector = load_object(&path)?;
        assert_eq!(read, written);
        assert_eq!(read.hash_code(), written.hash_code());
        Ok(())
    }

    #[test]
    fn test_vector_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("file");
        let written = Vector::new([2.2, -0.5, 10.0]);

        save_object(&path, &written)?;
        assert_eq!(load_object::<Vector>(&path)?, written);
        Ok(())
    }

    #[test]
    fn test_load_wrong_shape() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("file");
        save_object(&path, &"not a list")?;
        let err = load_object::<LinkedList<String>>(&path).unwrap_err();
        assert!(matches!(err, VectorError::SerdeJson(_)));
        Ok(())
    }
}
