use anyhow::Result;
use pzk_sdk::state::load_state;
use pzk_sdk::{generate, ProofType, PzkError};

use super::Ctx;
use crate::output;

pub fn run(ctx: &Ctx, requested: Option<ProofType>) -> Result<()> {
    let state = load_state(&ctx.state_path);
    let proof = match generate::generate_proof(&ctx.project, &state, requested) {
        Err(err @ PzkError::ProofTypeMismatch { .. }) => {
            return Err(output::fail_with_hint(
                &err.to_string(),
                "omit --proof-type, or regenerate the module with the proof type you need",
            ))
        }
        other => other?,
    };

    if output::is_json() {
        output::json_output(serde_json::json!({ "proof": proof }));
    } else {
        println!("{proof}");
    }
    Ok(())
}
