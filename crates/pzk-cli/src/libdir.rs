use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::output;

const PREFIXES: &[&str] = &[
    ".",
    "pact-util-lib",
    ".pact_util_lib",
    "../pact-util-lib/",
    "../../pact-util-lib/",
];

const SUFFIXES: &[&str] = &["pact/contracts", "contracts", "pact"];

/// File whose presence marks a usable support library.
const MARKER: &str = "util-zk.pact";

/// Candidate directories, in probing order.
fn candidates(base: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    PREFIXES
        .iter()
        .flat_map(move |p| SUFFIXES.iter().map(move |s| base.join(p).join(s)))
}

pub fn locate(requested: &Path) -> Result<PathBuf> {
    let base = requested
        .canonicalize()
        .with_context(|| format!("cannot resolve {}", requested.display()))?;

    let found = candidates(&base).find(|dir| dir.is_dir() && dir.join(MARKER).is_file());
    match found {
        Some(dir) => {
            output::label("pact-util-lib found", &dir.display().to_string());
            Ok(dir)
        }
        None => Err(output::fail_with_hint(
            &format!("unable to locate pact-util-lib from {}", base.display()),
            "pass --util-lib-dir pointing at a checkout of pact-util-lib",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn probing_order() {
        let all: Vec<_> = candidates(Path::new("/b")).collect();
        assert_eq!(all.len(), 15);
        assert_eq!(all[0], Path::new("/b/./pact/contracts"));
        assert_eq!(all[2], Path::new("/b/./pact"));
        assert_eq!(all[3], Path::new("/b/pact-util-lib/pact/contracts"));
    }

    #[test]
    fn finds_sibling_checkout() {
        let tmp = tempfile::tempdir().unwrap();
        let work = tmp.path().join("work");
        let lib = tmp.path().join("pact-util-lib").join("pact");
        fs::create_dir_all(&work).unwrap();
        fs::create_dir_all(&lib).unwrap();
        fs::write(lib.join(MARKER), "").unwrap();

        let found = locate(&work).unwrap();
        assert_eq!(found.canonicalize().unwrap(), lib.canonicalize().unwrap());
    }

    #[test]
    fn marker_required() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("contracts")).unwrap();
        assert!(locate(tmp.path()).is_err());
    }
}
