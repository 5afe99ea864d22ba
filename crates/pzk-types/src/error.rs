// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Error taxonomy shared by every pact-zk crate.
//!
//! Every failure is terminal for the current invocation. Variants raised while
//! reading an artifact carry the [`Artifact`] (rendered as its file name) and,
//! where there is one, the offending JSON key.

use std::fmt;
use std::path::PathBuf;

use crate::model::ProofType;

/// The three ZoKrates files a project is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Abi,
    Proof,
    VerificationKey,
}

impl Artifact {
    pub const fn file_name(self) -> &'static str {
        match self {
            Artifact::Abi => "abi.json",
            Artifact::Proof => "proof.json",
            Artifact::VerificationKey => "verification.key",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Failures of the numeric codec, independent of any artifact.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("malformed hex string {0:?}")]
    MalformedHex(String),

    #[error("value needs {needed} bytes, more than the {width}-byte width")]
    ValueTooLarge { needed: usize, width: usize },

    #[error("invalid base64 length {0} (length mod 4 == 1)")]
    InvalidBase64Length(usize),

    #[error("malformed base64: {0}")]
    MalformedBase64(#[from] base64::DecodeError),
}

#[derive(Debug, thiserror::Error)]
pub enum PzkError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{artifact}: field `{field}`: {source}")]
    Field {
        artifact: Artifact,
        field: String,
        source: CodecError,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("{artifact}: unsupported verification scheme {scheme:?}")]
    UnsupportedScheme { artifact: Artifact, scheme: String },

    #[error("{artifact}: unsupported curve {curve:?}")]
    UnsupportedCurve { artifact: Artifact, curve: String },

    #[error(
        "{artifact}: argument `{name}` has type {ty:?}; only field/integers and [field/integers] are supported"
    )]
    UnsupportedAbiType {
        artifact: Artifact,
        name: String,
        ty: String,
    },

    #[error("{artifact}: field `{field}` not present")]
    MissingField { artifact: Artifact, field: String },

    #[error("{artifact}: invalid point format in `{field}`")]
    InvalidPointShape { artifact: Artifact, field: String },

    #[error("proof inputs do not match the ABI: expected {expected} values, got {actual}")]
    ArgumentCountMismatch { expected: usize, actual: usize },

    #[error("requested proof type `{requested}` but the module was generated for `{recorded}`")]
    ProofTypeMismatch {
        recorded: ProofType,
        requested: ProofType,
    },

    #[error("no module has been generated")]
    NoModuleGenerated,

    #[error("encoded proof holds {actual} scalars, expected {expected}")]
    MalformedProofString { expected: usize, actual: usize },

    #[error("cannot render JSON literal: {0}")]
    Render(serde_json::Error),
}

pub type PzkResult<T> = Result<T, PzkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_display_is_file_name() {
        assert_eq!(Artifact::Abi.to_string(), "abi.json");
        assert_eq!(Artifact::Proof.to_string(), "proof.json");
        assert_eq!(Artifact::VerificationKey.to_string(), "verification.key");
    }

    #[test]
    fn field_error_names_artifact_and_key() {
        let err = PzkError::Field {
            artifact: Artifact::VerificationKey,
            field: "alpha".into(),
            source: CodecError::MalformedHex("0xzz".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("verification.key"));
        assert!(msg.contains("`alpha`"));
        assert!(msg.contains("0xzz"));
    }
}
