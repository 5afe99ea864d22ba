// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 proof and verification key over BN128, as ZoKrates exports them.
//!
//! Conversions into [`Value`] fix the key names used in generated Pact code:
//! proof fields `A`, `B`, `C`; key fields `alpha`, `beta`, `gamma`, `delta`,
//! `ic`; point coordinates `x`, `y`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::Scalar;
use crate::error::{Artifact, PzkError, PzkResult};
use crate::value::Value;

pub const ACCEPTED_SCHEME: &str = "g16";
pub const ACCEPTED_CURVE: &str = "bn128";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G1Point {
    pub x: Scalar,
    pub y: Scalar,
}

/// Coordinates live in the quadratic extension, so each is a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G2Point {
    pub x: [Scalar; 2],
    pub y: [Scalar; 2],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationKey {
    pub alpha: G1Point,
    pub beta: G2Point,
    pub gamma: G2Point,
    pub delta: G2Point,
    /// ic\[0\] = constant term, ic\[1..\] = public input coefficients
    pub ic: Vec<G1Point>,
}

/// `scheme` / `curve` pair carried by proof and key files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvingParameters {
    pub scheme: String,
    pub curve: String,
}

impl ProvingParameters {
    pub fn validate(&self, artifact: Artifact) -> PzkResult<()> {
        if self.scheme != ACCEPTED_SCHEME {
            return Err(PzkError::UnsupportedScheme {
                artifact,
                scheme: self.scheme.clone(),
            });
        }
        if self.curve != ACCEPTED_CURVE {
            return Err(PzkError::UnsupportedCurve {
                artifact,
                curve: self.curve.clone(),
            });
        }
        Ok(())
    }
}

/// How a proof is handed to the generated verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofType {
    /// One opaque base64url string, decoded on-chain.
    #[default]
    String,
    /// A structured Pact object literal.
    Object,
}

impl ProofType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ProofType::String => "string",
            ProofType::Object => "object",
        }
    }
}

impl fmt::Display for ProofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProofType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ProofType::String),
            "object" => Ok(ProofType::Object),
            other => Err(format!("unknown proof type {other:?} (expected string or object)")),
        }
    }
}

impl From<&G1Point> for Value {
    fn from(p: &G1Point) -> Self {
        Value::Map(vec![
            ("x".into(), Value::Scalar(p.x.clone())),
            ("y".into(), Value::Scalar(p.y.clone())),
        ])
    }
}

impl From<&G2Point> for Value {
    fn from(p: &G2Point) -> Self {
        let pair = |c: &[Scalar; 2]| Value::Seq(c.iter().cloned().map(Value::Scalar).collect());
        Value::Map(vec![("x".into(), pair(&p.x)), ("y".into(), pair(&p.y))])
    }
}

impl From<&Proof> for Value {
    fn from(p: &Proof) -> Self {
        Value::Map(vec![
            ("A".into(), Value::from(&p.a)),
            ("B".into(), Value::from(&p.b)),
            ("C".into(), Value::from(&p.c)),
        ])
    }
}

impl From<&VerificationKey> for Value {
    fn from(vk: &VerificationKey) -> Self {
        Value::Map(vec![
            ("alpha".into(), Value::from(&vk.alpha)),
            ("beta".into(), Value::from(&vk.beta)),
            ("gamma".into(), Value::from(&vk.gamma)),
            ("delta".into(), Value::from(&vk.delta)),
            ("ic".into(), Value::Seq(vk.ic.iter().map(Value::from).collect())),
        ])
    }
}

impl Proof {
    /// Number of scalars in a flattened proof: 2 (A) + 4 (B) + 2 (C).
    pub const FLAT_LEN: usize = 8;

    /// Canonical scalar order: A.x A.y B.x0 B.x1 B.y0 B.y1 C.x C.y.
    pub fn flatten(&self) -> Vec<Scalar> {
        Value::from(self).flatten()
    }

    /// Inverse of [`Proof::flatten`].
    pub fn from_flat(scalars: &[Scalar]) -> PzkResult<Self> {
        let [ax, ay, bx0, bx1, by0, by1, cx, cy] = scalars else {
            return Err(PzkError::MalformedProofString {
                expected: Self::FLAT_LEN,
                actual: scalars.len(),
            });
        };
        Ok(Proof {
            a: G1Point { x: ax.clone(), y: ay.clone() },
            b: G2Point {
                x: [bx0.clone(), bx1.clone()],
                y: [by0.clone(), by1.clone()],
            },
            c: G1Point { x: cx.clone(), y: cy.clone() },
        })
    }
}
