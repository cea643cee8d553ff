// AlphaEdge bridge shared type definitions
// Each submodule defines types used across the shell.

pub mod bridge;
pub mod errors;
pub mod feature;
pub mod settings;
pub mod ui;
