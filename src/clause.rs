use stackvector::StackVec;

use crate::{constants::MAX_LITS_PER_CLAUSE, lit::DimacsLit};

/// A disjunction of signed DIMACS literals. The terminating `0` is not stored.
#[derive(Debug, Clone)]
pub struct Clause(StackVec<[DimacsLit; MAX_LITS_PER_CLAUSE]>);

impl Clause {
    pub fn new(lits: &[DimacsLit]) -> Self {
        debug_assert!(
            lits.len() <= MAX_LITS_PER_CLAUSE,
            "Clause size {} exceeds expected maximum of {}.",
            lits.len(),
            MAX_LITS_PER_CLAUSE
        );
        debug_assert!(!lits.contains(&0), "0 is not a DIMACS literal.");

        let mut inner = StackVec::new();
        for &lit in lits {
            inner.push(lit);
        }
        Clause(inner)
    }

    pub fn unit(lit: DimacsLit) -> Self {
        Clause::new(&[lit])
    }

    pub fn lits(&self) -> &[DimacsLit] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks if the clause is satisfied by the given assignment, where `assignment[v - 1]`
    /// holds the value of variable `v`.
    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        self.lits().iter().any(|&lit| {
            let value = assignment[lit.unsigned_abs() as usize - 1];
            value == (lit > 0)
        })
    }
}

/// An append-only clause set over variables `1..=num_vars`.
#[derive(Debug, Clone, Default)]
pub struct Cnf {
    /// Declared variable count, written verbatim into the `p cnf` header.
    pub num_vars: usize,
    clauses: Vec<Clause>,
}

impl Cnf {
    pub fn new(num_vars: usize) -> Self {
        Cnf {
            num_vars,
            clauses: Vec::new(),
        }
    }

    pub fn with_capacity(num_vars: usize, num_clauses: usize) -> Self {
        Cnf {
            num_vars,
            clauses: Vec::with_capacity(num_clauses),
        }
    }

    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Verifies if the given assignment satisfies all clauses.
    pub fn verify_solution(&self, solution: &[bool]) -> Result<(), String> {
        debug_assert_eq!(
            solution.len(),
            self.num_vars,
            "Assignment length does not match number of variables."
        );

        for (i, clause) in self.clauses.iter().enumerate() {
            if !clause.is_satisfied_by(solution) {
                return Err(format!("Clause {} {:?} is unsatisfied.", i, clause.lits()));
            }
        }

        Ok(())
    }
}
