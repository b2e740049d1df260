//! Attenuator stages of the BK4819 front end (REG_13)
//!
//! Each stage is a discrete attenuator. Index 0 is the strongest attenuation,
//! the last index is 0 dB.

/// One cascaded attenuator block and its slot in the gain register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub name: &'static str,
    /// Attenuation in dB for each selectable index
    pub values: &'static [u8],
    /// Bit position of the index field in the register
    pub shift: u8,
    /// Width of the index field in bits
    pub width: u8,
}

impl Stage {
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub const fn mask(&self) -> u16 {
        ((1u16 << self.width) - 1) << self.shift
    }

    pub fn attenuation(&self, index: u8) -> Option<u8> {
        self.values.get(index as usize).copied()
    }

    /// Highest attenuation this stage can contribute
    pub fn max_attenuation(&self) -> u8 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

pub const LNA_SHORT: Stage = Stage {
    name: "LNAS",
    values: &[19, 16, 11, 0],
    shift: 8,
    width: 2,
};

pub const LNA: Stage = Stage {
    name: "LNA",
    values: &[24, 19, 14, 9, 6, 4, 2, 0],
    shift: 5,
    width: 3,
};

pub const MIXER: Stage = Stage {
    name: "MIX",
    values: &[8, 6, 3, 0],
    shift: 3,
    width: 2,
};

pub const PGA: Stage = Stage {
    name: "PGA",
    values: &[33, 27, 21, 15, 9, 6, 3, 0],
    shift: 0,
    width: 3,
};

/// Stages in enumeration order (outermost first).
pub const STAGES: [Stage; 4] = [LNA_SHORT, LNA, MIXER, PGA];

/// Sum of every stage's index-0 attenuation.
pub fn max_total_attenuation() -> u8 {
    STAGES.iter().map(Stage::max_attenuation).sum()
}
