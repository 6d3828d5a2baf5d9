//! Format identification by magic bytes.
//!
//! GLB files carry a 12-byte header: the ASCII magic `glTF`, a u32
//! version, and the total file length, all little-endian. Images are
//! identified by their signature bytes alone.

use std::io;

use crate::manifest::AssetKind;

/// GLB header magic ("glTF" as a little-endian u32).
const GLB_MAGIC: u32 = 0x46546C67;

/// Concrete on-disk format detected from leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFormat {
    Glb,
    Png,
    Jpeg,
}

impl AssetFormat {
    /// The manifest kind this format satisfies.
    pub fn kind(self) -> AssetKind {
        match self {
            AssetFormat::Glb => AssetKind::Model,
            AssetFormat::Png | AssetFormat::Jpeg => AssetKind::Texture,
        }
    }
}

/// Detect the format of a byte buffer, if it is one we know.
pub fn detect(data: &[u8]) -> Option<AssetFormat> {
    if data.len() >= 4 && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == GLB_MAGIC {
        return Some(AssetFormat::Glb);
    }
    if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(AssetFormat::Png);
    }
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(AssetFormat::Jpeg);
    }
    None
}

/// Check that a loaded buffer matches its manifest kind.
///
/// For GLB this also validates the declared total length against the
/// actual byte count, catching truncated downloads.
pub fn check_magic(kind: AssetKind, data: &[u8]) -> io::Result<()> {
    let format = detect(data).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Unrecognized asset format ({} bytes)", data.len()),
        )
    })?;

    if format.kind() != kind {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Expected {kind:?}, found {format:?}"),
        ));
    }

    if format == AssetFormat::Glb {
        if data.len() < 12 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("GLB header truncated: {} bytes", data.len()),
            ));
        }
        let declared = u32::from_le_bytes([data[8], data[9], data[10], data[11]]) as usize;
        if declared != data.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "GLB length mismatch: header says {declared} bytes, file has {}",
                    data.len()
                ),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a minimal well-formed GLB buffer of the given total size.
    fn make_glb(total_len: usize) -> Vec<u8> {
        let mut data = vec![0u8; total_len.max(12)];
        data[0..4].copy_from_slice(&GLB_MAGIC.to_le_bytes());
        data[4..8].copy_from_slice(&2u32.to_le_bytes());
        let len = data.len() as u32;
        data[8..12].copy_from_slice(&len.to_le_bytes());
        data
    }

    #[test]
    fn test_detect_formats() {
        assert_eq!(detect(&make_glb(64)), Some(AssetFormat::Glb));
        assert_eq!(
            detect(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00]),
            Some(AssetFormat::Png)
        );
        assert_eq!(detect(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(AssetFormat::Jpeg));
        assert_eq!(detect(b"not an asset"), None);
        assert_eq!(detect(&[]), None);
    }

    #[test]
    fn test_check_magic_accepts_matching_kind() {
        assert!(check_magic(AssetKind::Model, &make_glb(128)).is_ok());
        assert!(check_magic(AssetKind::Texture, &[0xFF, 0xD8, 0xFF, 0xE1]).is_ok());
    }

    #[test]
    fn test_check_magic_rejects_kind_mismatch() {
        // A texture entry pointing at a model file must fail
        let err = check_magic(AssetKind::Texture, &make_glb(64)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_check_magic_rejects_truncated_glb() {
        let mut data = make_glb(256);
        data.truncate(100); // header still claims 256
        let err = check_magic(AssetKind::Model, &data).unwrap_err();
        assert!(err.to_string().contains("length mismatch"), "{err}");
    }

    #[test]
    fn test_check_magic_rejects_junk() {
        assert!(check_magic(AssetKind::Model, b"GLTF but not really").is_err());
    }
}
