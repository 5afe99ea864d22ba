use anyhow::Result;
use pzk_sdk::state::{load_state, save_state};
use pzk_sdk::{generate, ProofType};

use super::Ctx;
use crate::output;

pub fn run(ctx: &Ctx, module_name: &str, proof_type: ProofType) -> Result<()> {
    output::info("generating Pact module");

    let module = generate::generate_module(&ctx.project, module_name, proof_type)?;
    if ctx.out_dir.join(&module.file_name).exists() {
        output::warn(&format!("overwriting {}", module.file_name));
    }
    let path = module.write_to(&ctx.out_dir)?;

    let mut state = load_state(&ctx.state_path);
    state.record_module(module_name, proof_type);
    save_state(&ctx.state_path, &state)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "module": module_name,
            "proof_type": proof_type.as_str(),
            "file": path.display().to_string(),
        }));
    } else {
        output::success(&format!("{} written", path.display()));
        output::label("proof type", proof_type.as_str());
    }
    Ok(())
}
