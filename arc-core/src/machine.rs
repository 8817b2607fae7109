use std::fmt;

pub const IMAGE_FILE_MACHINE_I386: u16 = 0x014c;
pub const IMAGE_FILE_MACHINE_ARM: u16 = 0x01c0;
pub const IMAGE_FILE_MACHINE_AMD64: u16 = 0x8664;
pub const IMAGE_FILE_MACHINE_ARM64: u16 = 0xaa64;

/// Target CPU architecture decoded from the PE `Machine` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Machine {
    X86,
    X64,
    Arm,
    /// A code outside the mapping table, carried verbatim. Not an error.
    Unknown(u16),
}

impl Machine {
    pub fn from_code(code: u16) -> Self {
        match code {
            IMAGE_FILE_MACHINE_I386 => Self::X86,
            IMAGE_FILE_MACHINE_AMD64 => Self::X64,
            IMAGE_FILE_MACHINE_ARM | IMAGE_FILE_MACHINE_ARM64 => Self::Arm,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X86 => f.write_str("x86"),
            Self::X64 => f.write_str("x64"),
            Self::Arm => f.write_str("ARM"),
            Self::Unknown(code) => write!(f, "Unknown (0x{code:X})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_labels() {
        assert_eq!(Machine::from_code(0x014c).to_string(), "x86");
        assert_eq!(Machine::from_code(0x8664).to_string(), "x64");
        assert_eq!(Machine::from_code(0x01c0).to_string(), "ARM");
        assert_eq!(Machine::from_code(0xaa64).to_string(), "ARM");
    }

    #[test]
    fn unknown_codes_render_unpadded_uppercase_hex() {
        assert_eq!(Machine::from_code(0x0200).to_string(), "Unknown (0x200)");
        assert_eq!(Machine::from_code(0x0001).to_string(), "Unknown (0x1)");
        assert_eq!(Machine::from_code(0xa641).to_string(), "Unknown (0xA641)");
    }
}
