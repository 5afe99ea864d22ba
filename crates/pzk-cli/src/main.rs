mod commands;
mod libdir;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pzk_sdk::state::DEFAULT_STATE_FILE;
use pzk_sdk::zokrates::ZokratesProject;
use pzk_sdk::ProofType;

use commands::Ctx;

#[derive(Parser)]
#[command(
    name = "pact-zk-gen",
    version,
    about = "Generate Pact Groth16 verifiers from ZoKrates projects"
)]
struct Cli {
    /// Directory holding abi.json, proof.json and verification.key
    #[arg(long, global = true, default_value = ".")]
    project_dir: PathBuf,
    /// Machine-readable output
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Generate verifier module
    GenModule {
        /// Type of the expected proof
        #[arg(long, value_enum, default_value_t = ProofTypeArg::String)]
        proof_type: ProofTypeArg,
        #[arg(long, default_value = "verifier")]
        module_name: String,
    },
    /// Generate test REPL
    GenTest {
        #[arg(long, default_value = ".")]
        util_lib_dir: PathBuf,
    },
    /// Generate a proof to be used in Pact
    GenProof {
        /// Type of proof; defaults to the one the module was generated for
        #[arg(long, value_enum)]
        proof_type: Option<ProofTypeArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProofTypeArg {
    String,
    Object,
}

impl From<ProofTypeArg> for ProofType {
    fn from(arg: ProofTypeArg) -> Self {
        match arg {
            ProofTypeArg::String => ProofType::String,
            ProofTypeArg::Object => ProofType::Object,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);

    let ctx = Ctx {
        project: ZokratesProject::new(cli.project_dir),
        state_path: PathBuf::from(env_or("PACT_ZK_STATE", DEFAULT_STATE_FILE)),
        out_dir: PathBuf::from("."),
    };

    match cli.command {
        Cmd::GenModule {
            proof_type,
            module_name,
        } => commands::gen_module::run(&ctx, &module_name, proof_type.into())?,
        Cmd::GenTest { util_lib_dir } => commands::gen_test::run(&ctx, &util_lib_dir)?,
        Cmd::GenProof { proof_type } => {
            commands::gen_proof::run(&ctx, proof_type.map(Into::into))?
        }
    }
    Ok(())
}
