//! STEP entity type definitions and Part 21 serialization.
//!
//! Each entity kind is a plain value carrying its file-unique id and the
//! ids of the entities it references. Serialization renders one textual
//! AP214 instance, `#<id>=KEYWORD(...);`, terminated by a semicolon.
//! Composite entities (the "typed list" form) span multiple lines; the
//! line breaks are part of the format because some CAD consumers are
//! line-oriented.

pub mod curves;
pub mod geometry;
pub mod product;
pub mod surfaces;
pub mod topology;
pub mod units;

pub use curves::*;
pub use geometry::*;
pub use product::*;
pub use surfaces::*;
pub use topology::*;
pub use units::*;

use std::fmt::Write as _;

/// A dense positive entity id, unique within one file.
pub type EntityId = u64;

/// A STEP entity instance.
///
/// Ids are assigned at creation time by the converter and never change;
/// references between entities are by id, so any forward reference is
/// legal in the output.
pub trait StepEntity: std::fmt::Debug {
    /// The entity's id within the DATA section.
    fn id(&self) -> EntityId;

    /// Render the complete `#<id>=...;` instance, possibly multi-line.
    ///
    /// Serialization does not fail; malformed values (e.g. non-finite
    /// reals) are the producer's responsibility and render as-is.
    fn to_step(&self) -> String;
}

/// Format a real in the fixed six-digit fractional form, e.g. `1.500000`.
pub(crate) fn fmt_real(value: f64) -> String {
    format!("{value:.6}")
}

/// Format a real in the six-digit scientific form, e.g. `1.000000E-06`.
///
/// The exponent always carries a sign and at least two digits.
pub(crate) fn fmt_scientific(value: f64) -> String {
    let s = format!("{value:.6E}");
    match s.split_once('E') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}E{sign}{digits:0>2}")
        }
        None => s,
    }
}

/// Format a boolean in the Part 21 enumeration form, `.T.` or `.F.`.
pub(crate) fn fmt_bool(value: bool) -> &'static str {
    if value {
        ".T."
    } else {
        ".F."
    }
}

/// Format a comma-separated list of entity references, e.g. `#3,#4,#5`.
pub(crate) fn fmt_refs(refs: &[EntityId]) -> String {
    let mut out = String::new();
    for (i, id) in refs.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "#{id}");
    }
    out
}

/// Format a comma-separated list of reals in fixed six-digit form.
pub(crate) fn fmt_reals(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| fmt_real(*v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Format a comma-separated list of integers.
pub(crate) fn fmt_ints(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
