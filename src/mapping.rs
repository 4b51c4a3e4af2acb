use indexmap::IndexMap;
use log::warn;

use crate::{
    circuit::{Circuit, Role},
    error::{Error, Result},
    lit::VariableId,
};

/// Two-way mapping between named circuit signals and CNF variables.
///
/// Built from the input and output entries of the symbol table only. Both directions keep
/// insertion order; when two names resolve to the same variable the later name wins in
/// `var_to_signal` while keeping the variable's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalMap {
    pub signal_to_var: IndexMap<String, VariableId>,
    pub var_to_signal: IndexMap<VariableId, String>,
}

impl SignalMap {
    pub fn build(circuit: &Circuit) -> Result<Self> {
        let mut map = SignalMap::default();

        for (&(role, index), name) in &circuit.symbols {
            let section = match role {
                Role::Input => &circuit.inputs,
                Role::Output => &circuit.outputs,
                // Latches are not part of the combinational encoding.
                Role::Latch => continue,
            };

            let lit = section.get(index).ok_or_else(|| Error::DanglingSymbol {
                role,
                index,
                name: name.clone(),
            })?;

            // Output polarity is dropped; only the underlying variable is mapped.
            let var = lit.var();
            if var == 0 {
                warn!(
                    "Signal {} is the constant literal {} and is left out of the mapping",
                    name, lit
                );
                continue;
            }

            map.insert(name, var);
        }

        Ok(map)
    }

    fn insert(&mut self, name: &str, var: VariableId) {
        self.signal_to_var.insert(name.to_string(), var);
        self.var_to_signal.insert(var, name.to_string());
    }

    pub fn var_of(&self, signal: &str) -> Option<VariableId> {
        self.signal_to_var.get(signal).copied()
    }

    pub fn signal_of(&self, var: VariableId) -> Option<&str> {
        self.var_to_signal.get(&var).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.var_to_signal.is_empty()
    }
}
