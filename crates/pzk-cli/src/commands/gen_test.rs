use std::path::Path;

use anyhow::Result;
use pzk_sdk::generate;
use pzk_sdk::state::load_state;
use pzk_sdk::PzkError;

use super::Ctx;
use crate::{libdir, output};

pub fn run(ctx: &Ctx, util_lib_dir: &Path) -> Result<()> {
    output::info("generating test REPL");

    let state = load_state(&ctx.state_path);
    let prepared = match generate::prepare_test(&ctx.project, &state) {
        Err(PzkError::NoModuleGenerated) => {
            return Err(output::fail_with_hint(
                "no module has been generated",
                "run `pact-zk-gen gen-module` first",
            ))
        }
        other => other?,
    };

    let lib_dir = libdir::locate(util_lib_dir)?;
    let file = prepared.render(&lib_dir);
    if ctx.out_dir.join(&file.file_name).exists() {
        output::warn(&format!("overwriting {}", file.file_name));
    }
    let path = file.write_to(&ctx.out_dir)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "module": prepared.module_name,
            "proof_type": prepared.proof_type.as_str(),
            "util_lib_dir": lib_dir.display().to_string(),
            "file": path.display().to_string(),
        }));
    } else {
        output::success(&format!("{} written", path.display()));
    }
    Ok(())
}
