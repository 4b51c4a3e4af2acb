use std::{fmt, num::IntErrorKind};

use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, warn};

use crate::{
    clause::{Clause, Cnf},
    error::{Error, Result},
    lit::{DimacsLit, VariableId},
    mapping::SignalMap,
};

/// Constant values requested for named signals, in the order they were first given.
///
/// A signal given more than once keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments(IndexMap<String, bool>);

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `signal=value` arguments. Arguments without `=` are skipped.
    ///
    /// The value must be an integer and counts as `true` only if it equals 1.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut assignments = Assignments::new();
        for arg in args {
            let arg = arg.as_ref();
            let Some((signal, value)) = arg.split_once('=') else {
                debug!("Ignoring argument {:?} without '='", arg);
                continue;
            };
            assignments.set(signal.trim(), parse_value(arg, value.trim())?);
        }
        Ok(assignments)
    }

    pub fn set(&mut self, signal: &str, value: bool) {
        self.0.insert(signal.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(signal, &value)| (signal.as_str(), value))
    }
}

impl fmt::Display for Assignments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self
            .iter()
            .format_with(", ", |(signal, value), out| {
                out(&format_args!("{}={}", signal, value as u8))
            });
        write!(f, "{}", pairs)
    }
}

fn parse_value(arg: &str, value: &str) -> Result<bool> {
    match value.parse::<i64>() {
        Ok(n) => Ok(n == 1),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(false)
        }
        Err(e) => Err(Error::InvalidAssignment {
            arg: arg.to_string(),
            msg: format!("value {:?} is not an integer ({})", value, e),
        }),
    }
}

/// Appends one unit clause per assignment whose signal is mapped, after all existing clauses.
///
/// Unknown signals are reported and skipped. Returns the number of clauses added.
pub fn inject(cnf: &mut Cnf, signals: &SignalMap, assignments: &Assignments) -> usize {
    let mut applied = 0;
    for (signal, value) in assignments.iter() {
        let Some(var) = signals.var_of(signal) else {
            warn!("Signal {} not found in mapping, skipping", signal);
            continue;
        };
        cnf.add_clause(Clause::unit(unit_lit(var, value)));
        applied += 1;
    }
    applied
}

fn unit_lit(var: VariableId, value: bool) -> DimacsLit {
    let lit = var as DimacsLit;
    if value { lit } else { -lit }
}
