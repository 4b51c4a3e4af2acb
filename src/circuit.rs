use std::fmt;

use indexmap::IndexMap;

use crate::lit::Lit;

/// Header counts `aag M I L O A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    /// Maximum variable index.
    pub num_vars: usize,
    pub num_inputs: usize,
    pub num_latches: usize,
    pub num_outputs: usize,
    pub num_ands: usize,
}

impl Header {
    /// Number of body lines the declared sections occupy.
    pub fn num_body_lines(&self) -> usize {
        self.num_inputs
            .saturating_add(self.num_latches)
            .saturating_add(self.num_outputs)
            .saturating_add(self.num_ands)
    }

    /// Largest literal allowed by `num_vars`.
    pub fn max_lit(&self) -> Lit {
        Lit((self.num_vars as u64).saturating_mul(2).saturating_add(1))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M={} I={} L={} O={} A={}",
            self.num_vars, self.num_inputs, self.num_latches, self.num_outputs, self.num_ands
        )
    }
}

/// Section a symbol table entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Input,
    Latch,
    Output,
}

impl Role {
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'i' => Some(Role::Input),
            'l' => Some(Role::Latch),
            'o' => Some(Role::Output),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Role::Input => 'i',
            Role::Latch => 'l',
            Role::Output => 'o',
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let section = match self {
            Role::Input => "input",
            Role::Latch => "latch",
            Role::Output => "output",
        };
        write!(f, "{}", section)
    }
}

/// An AND gate `lhs = rhs0 & rhs1`, as declared in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndGate {
    pub lhs: Lit,
    pub rhs0: Lit,
    pub rhs1: Lit,
    /// 1-based line number of the declaration, for error reporting.
    pub line: usize,
}

/// A latch declaration. Parsed for completeness, latches take no part in the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latch {
    pub lit: Lit,
    pub next: Lit,
    pub reset: Option<Lit>,
}

/// An ASCII AIGER circuit split into its typed sections.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    pub header: Header,
    pub inputs: Vec<Lit>,
    pub latches: Vec<Latch>,
    pub outputs: Vec<Lit>,
    pub gates: Vec<AndGate>,
    /// Symbol table keyed by `(role, position)` in declaration order.
    pub symbols: IndexMap<(Role, usize), String>,
    /// Lines of the trailing comment section.
    pub comments: Vec<String>,
}

impl Circuit {
    /// Looks up the display name of a section entry.
    pub fn symbol(&self, role: Role, index: usize) -> Option<&str> {
        self.symbols.get(&(role, index)).map(String::as_str)
    }

    /// Evaluates the combinational part of the circuit.
    ///
    /// Returns the value of every variable `0..=M`, with latches held at `false`.
    /// Gates are evaluated in file order, so they must be declared topologically.
    pub fn simulate(&self, input_values: &[bool]) -> Vec<bool> {
        debug_assert_eq!(
            input_values.len(),
            self.inputs.len(),
            "Input vector length does not match number of inputs."
        );

        let mut values = vec![false; self.header.num_vars + 1];
        for (lit, &value) in self.inputs.iter().zip(input_values) {
            values[lit.var()] = value;
        }

        for gate in &self.gates {
            let x = gate.rhs0.eval_with(values[gate.rhs0.var()]);
            let y = gate.rhs1.eval_with(values[gate.rhs1.var()]);
            values[gate.lhs.var()] = x && y;
        }

        values
    }

    /// Output values for the given inputs, in output declaration order.
    pub fn eval_outputs(&self, input_values: &[bool]) -> Vec<bool> {
        let values = self.simulate(input_values);
        self.outputs
            .iter()
            .map(|lit| lit.eval_with(values[lit.var()]))
            .collect()
    }
}
