//! Enumeration of every valid conversion the site offers.
//!
//! The conversion space is the cartesian product of input formats and
//! encodable output formats, minus self-pairs. One landing page and one
//! sitemap entry exist per element, so the enumeration order *is* the
//! site's URL order: outer loop over inputs, inner loop over outputs, both
//! in catalog declaration order. Re-running yields an identical sequence,
//! which keeps sitemap diffs meaningful between deploys.

use crate::catalog::Catalog;
use crate::slug;
use serde::Serialize;

/// One valid conversion, with its slug precomputed.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub from: &'static str,
    pub to: &'static str,
    pub slug: String,
}

/// Enumerate all valid conversions in catalog order.
///
/// Size is `|inputs| * |outputs| - |encodable|`: every encodable format is
/// also decodable, so exactly one self-pair is skipped per output format.
pub fn all_conversions(catalog: &Catalog) -> Vec<Conversion> {
    let mut conversions = Vec::new();
    for input in catalog.input_formats() {
        for output in catalog.output_formats() {
            if input.value == output.value {
                continue;
            }
            conversions.push(Conversion {
                from: input.value,
                to: output.value,
                slug: slug::generate(input.value, output.value),
            });
        }
    }
    conversions
}
