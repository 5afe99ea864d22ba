// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Proof → Pact literal.
//!
//! # String form
//!
//! The proof is flattened in canonical order (A, B, C; `x` before `y`; pair
//! elements in order), each scalar is written as 32 big-endian bytes, the
//! 256 bytes are concatenated and the result is base64url-encoded without
//! padding. The literal is the quoted string.
//!
//! # Object form
//!
//! The typed structure written directly as a single-line object literal,
//! e.g. `{"A": {"x": 1, "y": 2}, "B": {...}, "C": {...}}`.

use pzk_types::codec::{b64_url_decode, b64_url_encode};
use pzk_types::SCALAR_BYTES;

use crate::{Proof, ProofType, PzkError, PzkResult, Scalar, Value};

pub fn serialize_proof_string(proof: &Proof) -> PzkResult<String> {
    let mut bytes = Vec::with_capacity(Proof::FLAT_LEN * SCALAR_BYTES);
    for scalar in proof.flatten() {
        bytes.extend_from_slice(&scalar.to_bytes32()?);
    }
    Ok(b64_url_encode(&bytes))
}

/// Inverse of [`serialize_proof_string`] (unquoted input).
pub fn deserialize_proof_string(encoded: &str) -> PzkResult<Proof> {
    let bytes = b64_url_decode(encoded)?;
    let chunks = bytes.chunks_exact(SCALAR_BYTES);
    if !chunks.remainder().is_empty() {
        return Err(PzkError::MalformedProofString {
            expected: Proof::FLAT_LEN,
            actual: bytes.len().div_ceil(SCALAR_BYTES),
        });
    }
    let scalars: Vec<Scalar> = chunks.map(Scalar::from_be_bytes).collect();
    Proof::from_flat(&scalars)
}

pub fn serialize_proof_object(proof: &Proof) -> PzkResult<String> {
    Value::from(proof).render_inline().map_err(PzkError::Render)
}

/// The proof literal passed to the generated `verify` function.
pub fn render_proof(proof: &Proof, proof_type: ProofType) -> PzkResult<String> {
    match proof_type {
        ProofType::String => Ok(format!("\"{}\"", serialize_proof_string(proof)?)),
        ProofType::Object => serialize_proof_object(proof),
    }
}
