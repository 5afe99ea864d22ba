// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Argument binding: aligns declared circuit arguments with the flat list of
//! public values a proof carries, and renders them in Pact calling
//! convention.
//!
//! Values are consumed left to right, one chunk of `length` values per
//! argument. The totals must match exactly.

use crate::{CircuitArgument, PzkError, PzkResult, Scalar};

/// One argument together with the values bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundArgument {
    pub argument: CircuitArgument,
    pub values: Vec<Scalar>,
}

impl BoundArgument {
    /// `v` for a scalar, `[v0 v1 ...]` for an array.
    pub fn render_call(&self) -> String {
        match self.values.as_slice() {
            [single] if self.argument.is_scalar() => single.to_string(),
            values => {
                let items: Vec<String> = values.iter().map(ToString::to_string).collect();
                format!("[{}]", items.join(" "))
            }
        }
    }
}

pub fn bind(args: &[CircuitArgument], values: &[Scalar]) -> PzkResult<Vec<BoundArgument>> {
    let mismatch = |expected| PzkError::ArgumentCountMismatch {
        expected,
        actual: values.len(),
    };
    let expected = pzk_types::abi::total_length(args).ok_or_else(|| mismatch(usize::MAX))?;
    if expected != values.len() {
        return Err(mismatch(expected));
    }

    let mut rest = values;
    let mut bound = Vec::with_capacity(args.len());
    for arg in args {
        let (chunk, tail) = rest.split_at(arg.length());
        bound.push(BoundArgument {
            argument: arg.clone(),
            values: chunk.to_vec(),
        });
        rest = tail;
    }
    Ok(bound)
}

/// Space-separated call arguments, e.g. `1 [2 3 4]`.
pub fn render_call_arguments(bound: &[BoundArgument]) -> String {
    bound
        .iter()
        .map(BoundArgument::render_call)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `name:integer` or `name:[integer]`.
pub fn signature_param(arg: &CircuitArgument) -> String {
    let ty = arg.element_type().pact_type();
    if arg.is_scalar() {
        format!("{}:{ty}", arg.name())
    } else {
        format!("{}:[{ty}]", arg.name())
    }
}

pub fn render_signature(args: &[CircuitArgument]) -> String {
    args.iter().map(signature_param).collect::<Vec<_>>().join(" ")
}

/// Expressions reading `arg` back out of the aggregated public-input list:
/// the name itself for a scalar, `(at i name)` per element for an array.
pub fn public_input_accessors(arg: &CircuitArgument) -> Vec<String> {
    if arg.is_scalar() {
        vec![arg.name().to_string()]
    } else {
        (0..arg.length())
            .map(|idx| format!("(at {idx} {})", arg.name()))
            .collect()
    }
}

/// Bracketed, comma-separated list of every public input accessor.
pub fn render_public_inputs(args: &[CircuitArgument]) -> String {
    let exprs: Vec<String> = args.iter().flat_map(public_input_accessors).collect();
    format!("[{}]", exprs.join(", "))
}
