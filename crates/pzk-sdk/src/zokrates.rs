// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Loading and validation of ZoKrates artifacts.
//!
//! A project directory holds `abi.json`, `proof.json` and `verification.key`.
//! Proof and key are rejected unless they declare scheme `g16` on curve
//! `bn128`; that check runs before any other field is read.
//!
//! The `parse_*` functions work on already-decoded JSON so they can be
//! driven without touching the filesystem.

use std::fs;
use std::path::PathBuf;

use pzk_types::codec::{hex_to_scalar, int_to_fixed_bytes};
use pzk_types::SCALAR_BYTES;
use serde::Deserialize;
use serde_json::Value as Json;

use crate::{
    Abi, AbiInput, Artifact, CircuitArgument, CodecError, ElementType, G1Point, G2Point, Proof,
    ProvingParameters, PzkError, PzkResult, Scalar, VerificationKey,
};

#[derive(Deserialize)]
struct RawAbi {
    inputs: Vec<RawInput>,
    #[serde(default)]
    output: Option<RawOutput>,
}

#[derive(Deserialize)]
struct RawInput {
    name: String,
    public: bool,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    components: Option<RawComponents>,
}

#[derive(Deserialize)]
struct RawOutput {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    components: Option<RawComponents>,
}

#[derive(Deserialize)]
struct RawComponents {
    #[serde(default)]
    size: Option<usize>,
    #[serde(rename = "type", default)]
    ty: Option<String>,
    #[serde(default)]
    elements: Option<Vec<Json>>,
}

/// Public inputs and proof points from `proof.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofArtifact {
    pub inputs: Vec<Scalar>,
    pub proof: Proof,
}

pub struct ZokratesProject {
    dir: PathBuf,
}

impl ZokratesProject {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_of(&self, artifact: Artifact) -> PathBuf {
        self.dir.join(artifact.file_name())
    }

    fn read<T: serde::de::DeserializeOwned>(&self, artifact: Artifact) -> PzkResult<T> {
        let path = self.path_of(artifact);
        let data = fs::read_to_string(&path).map_err(|source| PzkError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| PzkError::Json { path, source })
    }

    pub fn abi(&self) -> PzkResult<Abi> {
        let raw: RawAbi = self.read(Artifact::Abi)?;
        abi_from_raw(raw)
    }

    pub fn proof_artifact(&self) -> PzkResult<ProofArtifact> {
        parse_proof(&self.read(Artifact::Proof)?)
    }

    pub fn proof(&self) -> PzkResult<Proof> {
        Ok(self.proof_artifact()?.proof)
    }

    pub fn verification_key(&self) -> PzkResult<VerificationKey> {
        parse_verification_key(&self.read(Artifact::VerificationKey)?)
    }
}

pub fn parse_abi(json: &Json) -> PzkResult<Abi> {
    let raw = RawAbi::deserialize(json).map_err(|source| PzkError::Json {
        path: PathBuf::from(Artifact::Abi.file_name()),
        source,
    })?;
    abi_from_raw(raw)
}

fn abi_from_raw(raw: RawAbi) -> PzkResult<Abi> {
    let mut inputs = Vec::with_capacity(raw.inputs.len());
    for inp in raw.inputs {
        let argument = to_argument(&inp.name, &inp.ty, inp.components.as_ref(), false)?
            .ok_or_else(|| unsupported(&inp.name, &inp.ty))?;
        inputs.push(AbiInput {
            argument,
            public: inp.public,
        });
    }
    let output = match raw.output {
        Some(out) => to_argument(Abi::OUTPUT_NAME, &out.ty, out.components.as_ref(), true)?,
        None => None,
    };
    Ok(Abi { inputs, output })
}

/// Largest array size accepted from an ABI.
pub const MAX_ARRAY_SIZE: usize = 1 << 16;

/// `Ok(None)` only for an output declared as an empty tuple.
fn to_argument(
    name: &str,
    ty: &str,
    components: Option<&RawComponents>,
    is_output: bool,
) -> PzkResult<Option<CircuitArgument>> {
    if let Ok(element) = ty.parse::<ElementType>() {
        return Ok(Some(CircuitArgument::scalar(name, element)));
    }
    match (ty, components) {
        ("array", Some(c)) => {
            let element = c.ty.as_deref().and_then(|t| t.parse::<ElementType>().ok());
            let size = c.size.filter(|size| *size <= MAX_ARRAY_SIZE);
            if let (Some(element), Some(size)) = (element, size) {
                if let Some(arg) = CircuitArgument::new(name, element, size) {
                    return Ok(Some(arg));
                }
            }
            let inner = c.ty.as_deref().unwrap_or("?");
            Err(unsupported(name, &format!("array of {inner}")))
        }
        ("tuple", Some(c)) if is_output && c.elements.as_ref().is_some_and(Vec::is_empty) => {
            Ok(None)
        }
        _ => Err(unsupported(name, ty)),
    }
}

fn unsupported(name: &str, ty: &str) -> PzkError {
    PzkError::UnsupportedAbiType {
        artifact: Artifact::Abi,
        name: name.to_string(),
        ty: ty.to_string(),
    }
}

pub fn check_params(artifact: Artifact, json: &Json) -> PzkResult<()> {
    let get = |key: &str| {
        json.get(key)
            .and_then(Json::as_str)
            .unwrap_or("unknown")
            .to_string()
    };
    ProvingParameters {
        scheme: get("scheme"),
        curve: get("curve"),
    }
    .validate(artifact)
}

pub fn parse_proof(json: &Json) -> PzkResult<ProofArtifact> {
    const A: Artifact = Artifact::Proof;
    check_params(A, json)?;

    let inputs = match json.get("inputs") {
        None => Vec::new(),
        Some(Json::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, v)| parse_scalar(A, &format!("inputs[{i}]"), v))
            .collect::<PzkResult<_>>()?,
        Some(other) => return Err(malformed(A, "inputs", other)),
    };

    let body = field(A, json, "proof")?;
    let proof = Proof {
        a: parse_g1(A, body, "a")?,
        b: parse_g2(A, body, "b")?,
        c: parse_g1(A, body, "c")?,
    };
    Ok(ProofArtifact { inputs, proof })
}

pub fn parse_verification_key(json: &Json) -> PzkResult<VerificationKey> {
    const A: Artifact = Artifact::VerificationKey;
    check_params(A, json)?;

    Ok(VerificationKey {
        alpha: parse_g1(A, json, "alpha")?,
        beta: parse_g2(A, json, "beta")?,
        gamma: parse_g2(A, json, "gamma")?,
        delta: parse_g2(A, json, "delta")?,
        ic: parse_ic(A, json, "gamma_abc")?,
    })
}

fn field<'a>(artifact: Artifact, obj: &'a Json, key: &str) -> PzkResult<&'a Json> {
    obj.get(key).ok_or_else(|| PzkError::MissingField {
        artifact,
        field: key.to_string(),
    })
}

fn pair<'a>(artifact: Artifact, key: &str, v: &'a Json) -> PzkResult<(&'a Json, &'a Json)> {
    match v.as_array().map(Vec::as_slice) {
        Some([first, second]) => Ok((first, second)),
        _ => Err(PzkError::InvalidPointShape {
            artifact,
            field: key.to_string(),
        }),
    }
}

fn malformed(artifact: Artifact, key: &str, v: &Json) -> PzkError {
    PzkError::Field {
        artifact,
        field: key.to_string(),
        source: CodecError::MalformedHex(v.to_string()),
    }
}

fn parse_scalar(artifact: Artifact, key: &str, v: &Json) -> PzkResult<Scalar> {
    let field_err = |source| PzkError::Field {
        artifact,
        field: key.to_string(),
        source,
    };
    let s = v.as_str().ok_or_else(|| malformed(artifact, key, v))?;
    let scalar = hex_to_scalar(s).map_err(field_err)?;
    int_to_fixed_bytes(&scalar, SCALAR_BYTES).map_err(field_err)?;
    Ok(scalar)
}

fn g1_from_pair(artifact: Artifact, key: &str, v: &Json) -> PzkResult<G1Point> {
    let (x, y) = pair(artifact, key, v)?;
    Ok(G1Point {
        x: parse_scalar(artifact, &format!("{key}[0]"), x)?,
        y: parse_scalar(artifact, &format!("{key}[1]"), y)?,
    })
}

fn parse_g1(artifact: Artifact, obj: &Json, key: &str) -> PzkResult<G1Point> {
    g1_from_pair(artifact, key, field(artifact, obj, key)?)
}

fn parse_g2(artifact: Artifact, obj: &Json, key: &str) -> PzkResult<G2Point> {
    let (x, y) = pair(artifact, key, field(artifact, obj, key)?)?;
    let coord = |i: usize, c: &Json| -> PzkResult<[Scalar; 2]> {
        let (c0, c1) = pair(artifact, key, c)?;
        Ok([
            parse_scalar(artifact, &format!("{key}[{i}][0]"), c0)?,
            parse_scalar(artifact, &format!("{key}[{i}][1]"), c1)?,
        ])
    };
    Ok(G2Point {
        x: coord(0, x)?,
        y: coord(1, y)?,
    })
}

fn parse_ic(artifact: Artifact, obj: &Json, key: &str) -> PzkResult<Vec<G1Point>> {
    let items = field(artifact, obj, key)?
        .as_array()
        .ok_or_else(|| PzkError::InvalidPointShape {
            artifact,
            field: key.to_string(),
        })?;
    items
        .iter()
        .enumerate()
        .map(|(i, v)| g1_from_pair(artifact, &format!("{key}[{i}]"), v))
        .collect()
}
