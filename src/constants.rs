/// Magic token on the header line of an ASCII AIGER file.
pub const AAG_MAGIC: &str = "aag";

/// Artifact paths used when none are given on the command line.
pub const DEFAULT_CNF_PATH: &str = "problem.cnf";
pub const DEFAULT_MAPPING_PATH: &str = "mapping.json";

/// Widest clause the encoder ever emits (the first Tseitin clause of an AND gate).
pub const MAX_LITS_PER_CLAUSE: usize = 3;
