use crate::error::Result;
use crate::header::{DosStub, PeHeader};
use crate::machine::Machine;
use std::fmt;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

/// Runs the full pipeline against an open stream: locate the PE header
/// through the DOS stub, then read and map the machine code.
pub fn detect_arch<R: Read + Seek>(r: &mut R) -> Result<Machine> {
    let stub = DosStub::from_reader(r)?;
    log::debug!("PE header offset: {:#x}", stub.e_lfanew);

    let pe = PeHeader::from_reader(r, stub.e_lfanew)?;
    Ok(Machine::from_code(pe.machine))
}

/// Opens `path` and detects its target architecture.
///
/// The handle is closed before this returns, success or not.
pub fn detect_file<P: AsRef<Path>>(path: P) -> Result<Machine> {
    let mut file = File::open(path)?;
    detect_arch(&mut file)
}

/// One input path paired with its detection outcome.
///
/// Created per input and handed straight to the output sink; Display
/// renders the per-file report line.
#[derive(Debug)]
pub struct Detection {
    pub path: String,
    pub outcome: Result<Machine>,
}

impl Detection {
    /// Drives one detection, capturing any failure instead of
    /// propagating it. A bad file must never abort the batch.
    pub fn run<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let outcome = detect_file(path);
        if let Err(err) = &outcome {
            log::warn!("{}: {err}", path.display());
        }
        Self {
            path: path.display().to_string(),
            outcome,
        }
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(machine) => write!(f, "{}: {}", self.path, machine),
            Err(err) => write!(f, "{}: Error - {}", self.path, err),
        }
    }
}

/// Detects every path in input order, one result per path.
pub fn detect_all<P: AsRef<Path>>(paths: &[P]) -> Vec<Detection> {
    paths.iter().map(Detection::run).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DetectError;
    use std::io::Cursor;

    /// Minimal synthetic PE: 64-byte DOS stub whose `e_lfanew` points
    /// right past itself, then signature and machine code.
    fn synthetic_pe(machine: u16) -> Vec<u8> {
        let mut data = vec![0u8; 64];
        data[0x3c..0x40].copy_from_slice(&64u32.to_le_bytes());
        data.extend_from_slice(b"PE\0\0");
        data.extend_from_slice(&machine.to_le_bytes());
        data
    }

    #[test]
    fn maps_every_table_entry() {
        for (code, label) in [
            (0x014c, "x86"),
            (0x8664, "x64"),
            (0x01c0, "ARM"),
            (0xaa64, "ARM"),
            (0x0200, "Unknown (0x200)"),
        ] {
            let arch = detect_arch(&mut Cursor::new(synthetic_pe(code))).unwrap();
            assert_eq!(arch.to_string(), label);
        }
    }

    #[test]
    fn short_file_is_io_error() {
        let err = detect_arch(&mut Cursor::new(vec![0u8; 32])).unwrap_err();
        assert!(matches!(err, DetectError::Io(_)));
    }

    #[test]
    fn corrupt_signature_is_format_error() {
        let mut data = synthetic_pe(0x014c);
        data[64] = b'X';
        let err = detect_arch(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, DetectError::Format));
    }

    #[test]
    fn nonzero_header_offset_is_honored() {
        let mut data = vec![0u8; 0x100];
        data[0x3c..0x40].copy_from_slice(&0x80u32.to_le_bytes());
        data[0x80..0x84].copy_from_slice(b"PE\0\0");
        data[0x84..0x86].copy_from_slice(&0x8664u16.to_le_bytes());

        let arch = detect_arch(&mut Cursor::new(data)).unwrap();
        assert_eq!(arch, Machine::X64);
    }

    #[test]
    fn missing_file_becomes_error_detection() {
        let det = Detection::run("definitely/not/here.exe");
        assert!(det.outcome.is_err());
        assert!(det.to_string().starts_with("definitely/not/here.exe: Error - "));
    }
}
