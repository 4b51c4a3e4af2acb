use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Serialize;

use crate::{clause::Cnf, error::Result, lit::VariableId};

/// JSON record written next to the CNF file.
#[derive(Debug, Serialize)]
pub struct MappingRecord<'a> {
    pub var_to_signal: &'a IndexMap<VariableId, String>,
}

/// Writes the clause set in DIMACS format, preceded by one `c var <id> <name>` comment per
/// mapped variable. The header declares `cnf.num_vars` as given, not the variables in use.
pub fn write_dimacs<W: Write>(
    cnf: &Cnf,
    var_to_signal: &IndexMap<VariableId, String>,
    out: W,
) -> io::Result<()> {
    let mut writer = BufWriter::new(out);

    for (var, name) in var_to_signal {
        writeln!(writer, "c var {} {}", var, name)?;
    }
    writeln!(writer, "p cnf {} {}", cnf.num_vars, cnf.num_clauses())?;

    for clause in cnf.clauses() {
        for lit in clause.lits() {
            write!(writer, "{} ", lit)?;
        }
        writeln!(writer, "0")?;
    }

    writer.flush()
}

/// Writes `{"var_to_signal": {...}}` as pretty printed JSON.
pub fn write_mapping<W: Write>(
    var_to_signal: &IndexMap<VariableId, String>,
    out: W,
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(out, &MappingRecord { var_to_signal })
}

/// Both output artifacts, fully rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub cnf: Vec<u8>,
    pub mapping: Vec<u8>,
}

impl Artifacts {
    pub fn render(cnf: &Cnf, var_to_signal: &IndexMap<VariableId, String>) -> Result<Self> {
        let mut cnf_bytes = Vec::new();
        write_dimacs(cnf, var_to_signal, &mut cnf_bytes)?;

        let mut mapping_bytes = Vec::new();
        write_mapping(var_to_signal, &mut mapping_bytes)?;

        Ok(Artifacts {
            cnf: cnf_bytes,
            mapping: mapping_bytes,
        })
    }

    /// Writes the mapping file and the CNF file.
    ///
    /// Both are first written to `<path>.tmp` and only renamed into place once both writes
    /// succeeded, so a failed write leaves neither artifact behind.
    pub fn write(&self, cnf_path: &Path, mapping_path: &Path) -> Result<()> {
        let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(2);

        for (path, bytes) in [(mapping_path, &self.mapping), (cnf_path, &self.cnf)] {
            let tmp = staging_path(path);
            if let Err(e) = fs::write(&tmp, bytes) {
                let _ = fs::remove_file(&tmp);
                discard(&staged);
                return Err(e.into());
            }
            staged.push((tmp, path));
        }

        for (i, (tmp, path)) in staged.iter().enumerate() {
            if let Err(e) = fs::rename(tmp, path) {
                for (_, renamed) in &staged[..i] {
                    let _ = fs::remove_file(renamed);
                }
                discard(&staged[i..]);
                return Err(e.into());
            }
        }

        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn discard(staged: &[(PathBuf, &Path)]) {
    for (tmp, _) in staged {
        let _ = fs::remove_file(tmp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Clause;

    fn and2() -> (Cnf, IndexMap<VariableId, String>) {
        let mut cnf = Cnf::new(3);
        cnf.add_clause(Clause::new(&[-1, -2, 3]));
        cnf.add_clause(Clause::new(&[1, -3]));
        cnf.add_clause(Clause::new(&[2, -3]));

        let var_to_signal = [(1, "a"), (2, "b"), (3, "c")]
            .into_iter()
            .map(|(var, name)| (var, name.to_string()))
            .collect();
        (cnf, var_to_signal)
    }

    #[test]
    fn test_write_dimacs() {
        let (cnf, var_to_signal) = and2();
        let mut out = Vec::new();
        write_dimacs(&cnf, &var_to_signal, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "c var 1 a\nc var 2 b\nc var 3 c\np cnf 3 3\n-1 -2 3 0\n1 -3 0\n2 -3 0\n"
        );
    }

    #[test]
    fn test_header_uses_declared_vars() {
        let mut cnf = Cnf::new(10);
        cnf.add_clause(Clause::unit(-2));
        let mut out = Vec::new();
        write_dimacs(&cnf, &IndexMap::new(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "p cnf 10 1\n-2 0\n");
    }

    #[test]
    fn test_write_mapping() {
        let (_, var_to_signal) = and2();
        let mut out = Vec::new();
        write_mapping(&var_to_signal, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"var_to_signal\": {\n    \"1\": \"a\",\n    \"2\": \"b\",\n    \"3\": \"c\"\n  }\n}"
        );
    }

    #[test]
    fn test_write_empty_mapping() {
        let mut out = Vec::new();
        write_mapping(&IndexMap::new(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"var_to_signal\": {}\n}");
    }

    #[test]
    fn test_mapping_keeps_insertion_order() {
        let var_to_signal: IndexMap<VariableId, String> = [(7, "z"), (2, "y")]
            .into_iter()
            .map(|(var, name)| (var, name.to_string()))
            .collect();
        let mut out = Vec::new();
        write_mapping(&var_to_signal, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let pos_z = text.find("\"7\"").unwrap();
        let pos_y = text.find("\"2\"").unwrap();
        assert!(pos_z < pos_y, "{}", text);
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("aig2cnf-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_write_artifacts() {
        let (cnf, var_to_signal) = and2();
        let artifacts = Artifacts::render(&cnf, &var_to_signal).unwrap();
        let dir = scratch_dir("write");
        let cnf_path = dir.join("problem.cnf");
        let mapping_path = dir.join("mapping.json");

        artifacts.write(&cnf_path, &mapping_path).unwrap();

        assert_eq!(fs::read(&cnf_path).unwrap(), artifacts.cnf);
        assert_eq!(fs::read(&mapping_path).unwrap(), artifacts.mapping);
        assert!(!staging_path(&cnf_path).exists());
        assert!(!staging_path(&mapping_path).exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_cnf_write_leaves_no_mapping() {
        let (cnf, var_to_signal) = and2();
        let artifacts = Artifacts::render(&cnf, &var_to_signal).unwrap();
        let dir = scratch_dir("failed-write");
        let cnf_path = dir.join("missing-dir").join("problem.cnf");
        let mapping_path = dir.join("mapping.json");

        assert!(artifacts.write(&cnf_path, &mapping_path).is_err());

        assert!(!mapping_path.exists());
        assert!(!staging_path(&mapping_path).exists());
        assert!(!cnf_path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
