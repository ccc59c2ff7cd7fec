//! Gridsheet - Library for packing images into an irregular-grid spritesheet
//!
//! This library provides functionality to:
//! - Load a directory of PNG images in a stable, sorted order
//! - Scale every image by a uniform factor
//! - Compute a grid layout whose row heights and column widths adapt to content
//! - Composite all sprites into one transparent-padded sheet
//! - Emit a position manifest addressing every sprite by grid coordinate or index

pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod manifest;
pub mod output;
pub mod pack;
pub mod scale;
pub mod spritesheet;
