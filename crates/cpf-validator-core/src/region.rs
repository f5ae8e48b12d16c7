//! Fiscal regions encoded in the ninth CPF digit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The Receita Federal fiscal region that issued a CPF.
///
/// Determined by the ninth digit (index 8) of the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum FiscalRegion {
    /// Rio Grande do Sul.
    Region0 = 0,
    /// Distrito Federal, Goiás, Mato Grosso do Sul, Mato Grosso, Tocantins.
    Region1 = 1,
    /// Acre, Amazonas, Amapá, Pará, Rondônia, Roraima.
    Region2 = 2,
    /// Ceará, Maranhão, Piauí.
    Region3 = 3,
    /// Alagoas, Paraíba, Pernambuco, Rio Grande do Norte.
    Region4 = 4,
    /// Bahia, Sergipe.
    Region5 = 5,
    /// Minas Gerais.
    Region6 = 6,
    /// Espírito Santo, Rio de Janeiro.
    Region7 = 7,
    /// São Paulo.
    Region8 = 8,
    /// Paraná, Santa Catarina.
    Region9 = 9,
}

impl FiscalRegion {
    /// Every region, indexed by its number.
    pub const ALL: [Self; 10] = [
        Self::Region0,
        Self::Region1,
        Self::Region2,
        Self::Region3,
        Self::Region4,
        Self::Region5,
        Self::Region6,
        Self::Region7,
        Self::Region8,
        Self::Region9,
    ];

    /// Try to map a digit value to its region.
    pub fn from_digit(digit: u8) -> Option<Self> {
        Self::ALL.get(usize::from(digit)).copied()
    }

    /// The region number (the ninth CPF digit).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Two-letter codes of the states in this region.
    pub fn states(self) -> &'static [&'static str] {
        match self {
            Self::Region0 => &["RS"],
            Self::Region1 => &["DF", "GO", "MS", "MT", "TO"],
            Self::Region2 => &["AC", "AM", "AP", "PA", "RO", "RR"],
            Self::Region3 => &["CE", "MA", "PI"],
            Self::Region4 => &["AL", "PB", "PE", "RN"],
            Self::Region5 => &["BA", "SE"],
            Self::Region6 => &["MG"],
            Self::Region7 => &["ES", "RJ"],
            Self::Region8 => &["SP"],
            Self::Region9 => &["PR", "SC"],
        }
    }

    /// Check whether a state code belongs to this region (case-insensitive).
    pub fn contains_state(self, code: &str) -> bool {
        self.states()
            .iter()
            .any(|state| state.eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for FiscalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fiscal region {} ({})", self.number(), self.states().join(", "))
    }
}
