// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Nested value tree built from scalars, sequences and keyed maps, and its
//! canonical flattening.
//!
//! Map entries keep their insertion order for rendering, but
//! [`Value::flatten`] always visits them sorted by key, so the flat order
//! depends only on the logical content.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Serializer;

use crate::codec::Scalar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(Scalar),
    Seq(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Depth-first scalars: sequences in order, maps by ascending key.
    pub fn flatten(&self) -> Vec<Scalar> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<Scalar>) {
        match self {
            Value::Scalar(s) => out.push(s.clone()),
            Value::Seq(items) => items.iter().for_each(|v| v.flatten_into(out)),
            Value::Map(entries) => {
                let mut sorted: Vec<&(String, Value)> = entries.iter().collect();
                sorted.sort_by(|a, b| a.0.cmp(&b.0));
                for (_, v) in sorted {
                    v.flatten_into(out);
                }
            }
        }
    }

    /// JSON form with scalars as exact integer literals.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        Ok(match self {
            Value::Scalar(s) => serde_json::Value::Number(s.to_string().parse()?),
            Value::Seq(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(Value::to_json)
                    .collect::<serde_json::Result<_>>()?,
            ),
            Value::Map(entries) => {
                let mut map = serde_json::Map::new();
                for (k, v) in entries {
                    map.insert(k.clone(), v.to_json()?);
                }
                serde_json::Value::Object(map)
            }
        })
    }

    /// Single-line literal with `, ` and `: ` separators.
    pub fn render_inline(&self) -> serde_json::Result<String> {
        self.render_with(InlineFormatter)
    }

    /// Multi-line literal indented by `indent` spaces per level.
    pub fn render_pretty(&self, indent: usize) -> serde_json::Result<String> {
        let indent = " ".repeat(indent);
        self.render_with(PrettyFormatter::with_indent(indent.as_bytes()))
    }

    fn render_with<F: Formatter>(&self, formatter: F) -> serde_json::Result<String> {
        let json = self.to_json()?;
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        json.serialize(&mut ser)?;
        // serde_json only writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Compact layout with a space after every separator.
struct InlineFormatter;

impl Formatter for InlineFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
