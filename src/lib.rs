//! Translation of ASCII AIGER circuits into DIMACS CNF.
//!
//! The pipeline runs in a single pass: [`parser::parse_aag`] splits the file into typed
//! sections, [`tseitin`] encodes every AND gate, [`mapping::SignalMap`] names the CNF
//! variables, [`assignment::inject`] fixes requested signals and [`emit`] renders the artifacts.

pub mod assignment;
pub mod circuit;
pub mod clause;
pub mod constants;
pub mod emit;
pub mod error;
pub mod lit;
pub mod mapping;
pub mod parser;
pub mod tseitin;

pub use assignment::Assignments;
pub use circuit::Circuit;
pub use clause::{Clause, Cnf};
pub use error::{Error, Result};
pub use lit::Lit;
pub use mapping::SignalMap;
pub use parser::parse_aag;

use emit::Artifacts;

/// Result of encoding a circuit.
#[derive(Debug, Clone)]
pub struct Translation {
    pub cnf: Cnf,
    pub signals: SignalMap,
    /// Number of assignments that resolved to a variable.
    pub applied: usize,
}

impl Translation {
    pub fn render(&self) -> Result<Artifacts> {
        Artifacts::render(&self.cnf, &self.signals.var_to_signal)
    }
}

/// Encodes a parsed circuit and fixes the requested signals.
pub fn translate(circuit: &Circuit, assignments: &Assignments) -> Result<Translation> {
    let header = &circuit.header;
    let mut cnf = Cnf::with_capacity(header.num_vars, 3 * header.num_ands + assignments.len());

    tseitin::encode_gates(&circuit.gates, &mut cnf)?;
    let signals = SignalMap::build(circuit)?;
    let applied = assignment::inject(&mut cnf, &signals, assignments);

    Ok(Translation {
        cnf,
        signals,
        applied,
    })
}

/// Parses and encodes an ASCII AIGER file in one go.
pub fn translate_aag(data: &[u8], assignments: &Assignments) -> Result<Translation> {
    translate(&parse_aag(data)?, assignments)
}
