use crate::formula::PolicyKind;

/// Decimal places shown for weights unless configured otherwise
pub const DEFAULT_PRECISION: usize = 3;

/// Formulas offered by the sample picker
pub const SAMPLE_FORMULAS: [&str; 7] = ["H2O", "NaCl", "C6H12O6", "Fe2(SO4)3", "CuSO4·5H2O", "NO2", "Mg3(PO4)2"];

/// Runtime settings shared by the command line and the interactive app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub policy: PolicyKind,
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            policy: PolicyKind::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}
