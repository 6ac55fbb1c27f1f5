use enigma_types::{Letter, PermutationTable};

use crate::errors::{ConfigurationError, ReflectorDefect};

/// Fixed-point-free involution applied between the two rotor passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    table: PermutationTable,
}

impl Reflector {
    pub fn new(table: PermutationTable) -> Result<Self, ConfigurationError> {
        if table.has_fixed_point() {
            let fixed = first_letter(|l| table.map(l) == l);
            return Err(ReflectorDefect::FixedPoint(fixed).into());
        }
        if !table.is_involution() {
            let broken = first_letter(|l| table.map(table.map(l)) != l);
            return Err(ReflectorDefect::NotInvolutive(broken).into());
        }
        Ok(Self { table })
    }

    #[must_use]
    pub fn reflect(&self, letter: Letter) -> Letter {
        self.table.map(letter)
    }
}

/// First letter matching `defect`. Only called once the table is known to have one.
fn first_letter(defect: impl Fn(Letter) -> bool) -> Letter {
    Letter::all().find(|&l| defect(l)).unwrap_or(Letter::from_index(0))
}
