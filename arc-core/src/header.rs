use crate::error::{DetectError, Result};
use byteorder::{ByteOrder, ReadBytesExt, LE};
use std::io::{Read, Seek, SeekFrom};

/// Size of the legacy DOS stub at the start of every PE file.
pub const DOS_STUB_LEN: usize = 64;

/// Offset of `e_lfanew` within the DOS stub.
const PE_OFFSET_FIELD: usize = 0x3c;

/// The 4 bytes that open the PE header proper.
pub const PE_SIGNATURE: [u8; 4] = *b"PE\0\0";

/// The fixed-size DOS stub heading a PE file.
///
/// Only `e_lfanew` is interpreted; the `MZ` magic is intentionally left
/// unchecked, matching the reference behavior.
#[derive(Debug, Clone, Copy)]
pub struct DosStub {
    /// Absolute file offset of the PE header.
    pub e_lfanew: u32,
}

impl DosStub {
    /// Reads the stub from the start of `r`.
    ///
    /// Fails with [`DetectError::Io`] when fewer than 64 bytes are
    /// available.
    pub fn from_reader<R: Read>(r: &mut R) -> Result<Self> {
        let mut stub = [0u8; DOS_STUB_LEN];
        r.read_exact(&mut stub)?;
        Ok(Self {
            e_lfanew: LE::read_u32(&stub[PE_OFFSET_FIELD..]),
        })
    }
}

/// The PE signature block: signature plus the `Machine` field.
#[derive(Debug, Clone, Copy)]
pub struct PeHeader {
    /// Raw machine-type code, little-endian u16 after the signature.
    pub machine: u16,
}

impl PeHeader {
    /// Seeks to `offset` and reads the signature and machine code.
    ///
    /// A signature mismatch is a [`DetectError::Format`]; an offset
    /// beyond the end of the file surfaces as [`DetectError::Io`] from
    /// the short read that follows the seek.
    pub fn from_reader<R: Read + Seek>(r: &mut R, offset: u32) -> Result<Self> {
        r.seek(SeekFrom::Start(offset as u64))?;

        let mut signature = [0u8; 4];
        r.read_exact(&mut signature)?;
        if signature != PE_SIGNATURE {
            return Err(DetectError::Format);
        }

        Ok(Self {
            machine: r.read_u16::<LE>()?,
        })
    }
}
