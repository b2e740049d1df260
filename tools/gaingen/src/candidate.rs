//! Candidate register settings
//!
//! A candidate is one index per stage. Packing the indices gives the value
//! written to REG_13.

use core::fmt;

use thiserror::Error;

use crate::stages::STAGES;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    #[error("register value {0:#06x} has bits set outside the gain fields")]
    StrayBits(u16),
    #[error("index {index} out of range for stage {stage}")]
    IndexOutOfRange { stage: &'static str, index: u8 },
}

/// Packed stage indices as written to the gain register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegisterValue(pub u16);

impl RegisterValue {
    pub fn encode(indices: [u8; 4]) -> Result<Self, RegisterError> {
        for (stage, index) in STAGES.iter().zip(indices) {
            if index as usize >= stage.len() {
                return Err(RegisterError::IndexOutOfRange {
                    stage: stage.name,
                    index,
                });
            }
        }
        Ok(Self::pack(indices))
    }

    /// Indices must already be in range for their stage.
    fn pack(indices: [u8; 4]) -> Self {
        Self(
            STAGES
                .iter()
                .zip(indices)
                .fold(0, |raw, (stage, index)| raw | ((index as u16) << stage.shift)),
        )
    }

    pub fn decode(self) -> Result<[u8; 4], RegisterError> {
        let all = STAGES.iter().fold(0, |acc, s| acc | s.mask());
        if self.0 & !all != 0 {
            return Err(RegisterError::StrayBits(self.0));
        }

        let mut indices = [0u8; 4];
        for (slot, stage) in indices.iter_mut().zip(STAGES.iter()) {
            *slot = ((self.0 & stage.mask()) >> stage.shift) as u8;
        }
        Ok(indices)
    }
}

impl fmt::Display for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

impl fmt::LowerHex for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for RegisterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub indices: [u8; 4],
    pub total_attenuation: u8,
    pub register_value: RegisterValue,
    /// Higher keeps LNAS and LNA open longer, which is better for sensitivity
    pub rf_score: u16,
}

impl Candidate {
    pub fn from_indices(indices: [u8; 4]) -> Result<Self, RegisterError> {
        RegisterValue::encode(indices)?;
        Ok(Self::assemble(indices))
    }

    /// Indices must already be in range for their stage.
    fn assemble(indices: [u8; 4]) -> Self {
        let total_attenuation = STAGES
            .iter()
            .zip(indices)
            .map(|(stage, index)| stage.values[index as usize])
            .sum();

        Self {
            indices,
            total_attenuation,
            register_value: RegisterValue::pack(indices),
            rf_score: indices[0] as u16 * 10 + indices[1] as u16,
        }
    }
}

/// Every combination of stage indices, LNAS outermost and PGA innermost.
///
/// The order matters: the selector keeps the first of fully tied candidates.
pub fn enumerate() -> Vec<Candidate> {
    let [lnas, lna, mix, pga] = STAGES.map(|s| s.len() as u8);
    let mut candidates = Vec::with_capacity(STAGES.iter().map(|s| s.len()).product());

    for a in 0..lnas {
        for b in 0..lna {
            for c in 0..mix {
                for d in 0..pga {
                    candidates.push(Candidate::assemble([a, b, c, d]));
                }
            }
        }
    }

    candidates
}
