// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Circuit interface: typed arguments as declared by the ZoKrates ABI.

use std::fmt;
use std::str::FromStr;

/// Scalar element types a circuit argument may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Field,
    U8,
    U16,
    U32,
    U64,
}

impl ElementType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementType::Field => "field",
            ElementType::U8 => "u8",
            ElementType::U16 => "u16",
            ElementType::U32 => "u32",
            ElementType::U64 => "u64",
        }
    }

    /// Every element type is passed to Pact as an `integer`.
    pub const fn pact_type(self) -> &'static str {
        "integer"
    }
}

impl FromStr for ElementType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "field" => Ok(ElementType::Field),
            "u8" => Ok(ElementType::U8),
            "u16" => Ok(ElementType::U16),
            "u32" => Ok(ElementType::U32),
            "u64" => Ok(ElementType::U64),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named circuit argument. `length == 1` is a scalar, `length > 1` a
/// fixed-size array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitArgument {
    name: String,
    element_type: ElementType,
    length: usize,
}

impl CircuitArgument {
    /// Returns `None` for a zero length.
    pub fn new(name: impl Into<String>, element_type: ElementType, length: usize) -> Option<Self> {
        (length > 0).then(|| Self {
            name: name.into(),
            element_type,
            length,
        })
    }

    pub fn scalar(name: impl Into<String>, element_type: ElementType) -> Self {
        Self {
            name: name.into(),
            element_type,
            length: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_scalar(&self) -> bool {
        self.length == 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiInput {
    pub argument: CircuitArgument,
    pub public: bool,
}

/// Declared inputs, in ABI order, and the optional output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Abi {
    pub inputs: Vec<AbiInput>,
    pub output: Option<CircuitArgument>,
}

impl Abi {
    /// Name given to the output argument in generated code.
    pub const OUTPUT_NAME: &'static str = "out";

    pub fn public_inputs(&self) -> impl Iterator<Item = &CircuitArgument> {
        self.inputs.iter().filter(|i| i.public).map(|i| &i.argument)
    }

    pub fn private_inputs(&self) -> impl Iterator<Item = &CircuitArgument> {
        self.inputs.iter().filter(|i| !i.public).map(|i| &i.argument)
    }

    /// Public inputs followed by the output: the arguments visible to the
    /// verifier, in the order the proof lists their values.
    pub fn public_abi(&self) -> Vec<CircuitArgument> {
        self.public_inputs()
            .chain(self.output.iter())
            .cloned()
            .collect()
    }
}

/// Sum of argument lengths, i.e. the number of scalar values they bind.
/// `None` if the sum does not fit in `usize`.
pub fn total_length(args: &[CircuitArgument]) -> Option<usize> {
    args.iter()
        .try_fold(0usize, |acc, arg| acc.checked_add(arg.length()))
}
