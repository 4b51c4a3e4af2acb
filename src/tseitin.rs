//! Tseitin encoding of AND gates.
//!
//! A gate `z = x & y` becomes the three clauses
//!
//! ```text
//! (¬x ∨ ¬y ∨ z) ∧ (x ∨ ¬z) ∧ (y ∨ ¬z)
//! ```
//!
//! where `x` and `y` carry the inversion of the gate's operands. Together they force `z` to be
//! exactly the conjunction, so the clause set is equisatisfiable with the circuit.

use crate::{
    circuit::AndGate,
    clause::{Clause, Cnf},
    error::{Error, Result},
    lit::Lit,
};

/// Appends the defining clauses of every gate, in declaration order.
pub fn encode_gates(gates: &[AndGate], cnf: &mut Cnf) -> Result<()> {
    for gate in gates {
        encode_and(gate, cnf)?;
    }
    Ok(())
}

/// Appends the three defining clauses of a single gate.
pub fn encode_and(gate: &AndGate, cnf: &mut Cnf) -> Result<()> {
    let (z_var, z_inv) = gate.lhs.decode();
    if z_inv {
        return Err(Error::InvertedGateOutput {
            line: gate.line,
            lit: gate.lhs,
        });
    }

    for lit in [gate.lhs, gate.rhs0, gate.rhs1] {
        if lit.is_const() {
            return Err(Error::ConstantGateLiteral {
                line: gate.line,
                lit,
            });
        }
    }

    let z = Lit::new(z_var, false).to_dimacs();
    let x = gate.rhs0.to_dimacs();
    let y = gate.rhs1.to_dimacs();

    cnf.add_clause(Clause::new(&[-x, -y, z]));
    cnf.add_clause(Clause::new(&[x, -z]));
    cnf.add_clause(Clause::new(&[y, -z]));

    Ok(())
}
