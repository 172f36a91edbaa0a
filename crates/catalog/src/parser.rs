//! Parser for catalog data files.
//!
//! Catalog files are plain text, one product per line:
//!
//! ```text
//! id::name::color::size
//! ```
//!
//! Blank lines are skipped. Lines are independent, so parsing is
//! data-parallel over the line list with rayon.

use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Product};

/// Load a catalog from a `::`-delimited text file.
///
/// # Returns
/// * `Ok(Catalog)` with products in file order
/// * `Err` carrying the offending line number for parse failures
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse catalog file contents already held in memory
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    let products: Vec<Product> = lines
        .par_iter()
        .map(|&(idx, line)| parse_product_line(line, idx + 1))
        .collect::<Result<Vec<_>>>()?;

    Catalog::from_products(products)
}

fn parse_product_line(line: &str, line_no: usize) -> Result<Product> {
    let fields: Vec<&str> = line.trim().split("::").collect();
    if fields.len() != 4 {
        return Err(CatalogError::ParseError {
            line: line_no,
            reason: format!("expected 4 fields, found {}", fields.len()),
        });
    }

    let id = fields[0]
        .parse()
        .map_err(|_| CatalogError::ParseError {
            line: line_no,
            reason: format!("invalid product id: {}", fields[0]),
        })?;

    let color = fields[2]
        .parse()
        .map_err(|err: CatalogError| CatalogError::ParseError {
            line: line_no,
            reason: err.to_string(),
        })?;

    let size = fields[3]
        .parse()
        .map_err(|err: CatalogError| CatalogError::ParseError {
            line: line_no,
            reason: err.to_string(),
        })?;

    Ok(Product::new(id, fields[1], color, size))
}
