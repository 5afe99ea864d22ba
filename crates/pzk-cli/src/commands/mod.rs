pub mod gen_module;
pub mod gen_proof;
pub mod gen_test;

use std::path::PathBuf;

use pzk_sdk::zokrates::ZokratesProject;

/// Per-invocation context shared by every command.
pub struct Ctx {
    pub project: ZokratesProject,
    pub state_path: PathBuf,
    /// Where generated files land.
    pub out_dir: PathBuf,
}
