//! The emitted gain table and its text renderings

use core::fmt::{self, Write};

use crate::candidate::{self, Candidate, RegisterValue};
use crate::select;
use crate::target;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GainEntry {
    pub register_value: RegisterValue,
    pub attenuation: u8,
}

/// One picked candidate per target, kept together with the target it was
/// picked for so the table can explain itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub target: f64,
    pub candidate: Candidate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GainTable {
    pub steps: Vec<Step>,
}

impl GainTable {
    /// The BK4819 receive gain table: 31 steps from 0 to 84 dB.
    pub fn build() -> Self {
        Self::build_with(&candidate::enumerate(), target::STEPS, target::MAX_ATTENUATION)
    }

    pub fn build_with(candidates: &[Candidate], steps: usize, max_atten: f64) -> Self {
        let targets = target::sample(steps, max_atten);
        let picks = select::select_all(candidates, &targets);

        Self {
            steps: targets
                .into_iter()
                .zip(picks)
                .map(|(target, candidate)| Step {
                    target,
                    candidate: *candidate,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = GainEntry> + '_ {
        self.steps.iter().map(|step| GainEntry {
            register_value: step.candidate.register_value,
            attenuation: step.candidate.total_attenuation,
        })
    }

    /// `{0x3ff, 0},` lines, the initializer list pasted into the driver.
    pub fn initializer_list(&self) -> String {
        let mut out = String::new();
        for entry in self.entries() {
            // writing into a String never fails
            let _ = writeln!(out, "{{{:#x}, {}}},", entry.register_value, entry.attenuation);
        }
        out
    }

    /// The initializer list wrapped in a `Gain` array definition.
    pub fn c_array(&self, name: &str) -> String {
        let mut out = format!("const Gain {}[{}] = {{\n", name, self.len());
        for line in self.initializer_list().lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("};\n");
        out
    }

    pub fn explain(&self) -> Explain<'_> {
        Explain(self)
    }
}

/// Per-step diagnostic view of a [`GainTable`].
pub struct Explain<'a>(&'a GainTable);

impl fmt::Display for Explain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<3} | {:<6} | {:<6} | {:<6} | {}",
            "Idx", "Target", "Actual", "Hex", "RF_Score"
        )?;
        writeln!(f, "{}", "-".repeat(50))?;

        for (i, step) in self.0.steps.iter().enumerate() {
            writeln!(
                f,
                "{:<3} | {:<6.1} | {:<6} | 0x{:04X} | {}",
                i,
                step.target,
                step.candidate.total_attenuation,
                step.candidate.register_value,
                step.candidate.rf_score
            )?;
        }
        Ok(())
    }
}
