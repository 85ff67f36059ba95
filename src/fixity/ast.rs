//! Abstract syntax tree
//!
//!     Nodes are plain data built bottom-up by the parser and handed to the caller. Every node
//!     is tagged by the operator id or statement-rule name that produced it, so the tree
//!     carries no knowledge of the concrete syntax beyond those names.
//!
//!     Equality is structural, which is what tests compare against. Nodes render as
//!     S-expressions through `Display`:
//!
//!         1 + 2 * 3               (plus 1 (mul 2 3))
//!         f(1, 2)                 (call f 1 2)
//!         def f(x) x end          (functionDef name=f params=x stat=[x])
//!
//!     and serialize with serde (internally tagged by `kind`) for JSON and YAML output.

pub mod display;
pub mod node;

pub use node::{AstNode, Capture, CaptureValue, Scalar};
