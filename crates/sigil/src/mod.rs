//! sigil: hyperlinked type-signature rendering for API documentation
//!
//! This crate turns a typed library's declaration AST into styled, linkable
//! signature text:
//! - Rendering any type node, call signature, member or interface header to
//!   [`AnnotatedText`], an ordered sequence of tagged text runs the
//!   presentation layer styles and places
//! - Measuring the would-be width of a rendering to decide between inline and
//!   one-parameter-per-line layout at the 80-column budget
//! - Resolving an inherited member's generic parameters to the concrete types
//!   supplied by the subtype being documented, across multi-level inheritance
//! - Linking documented type names against a registry of entities
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │ TypeNode AST │     │   Registry   │
//! │  (extractor) │     │ (entity tree)│
//! └──────┬───────┘     └──────┬───────┘
//!        │                    │
//!        │       ┌────────────┴───┐
//!        │       ▼                ▼
//!        │  ┌──────────┐   ┌─────────────────┐
//!        └─►│ Renderer │◄──│ SubstitutionMap │
//!           └────┬─────┘   └─────────────────┘
//!                │  measure() for wrap decisions
//!                ▼
//!         ┌───────────────┐
//!         │ AnnotatedText │
//!         └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sigil::{Registry, Renderer, RenderContext, TypeNode};
//!
//! let registry = Registry::new("4.0.0");
//! let renderer = Renderer::with_registry(&registry);
//! let node = TypeNode::union(vec![TypeNode::string(), TypeNode::undefined()]);
//! let text = renderer.render_type(&node, &RenderContext::default()).unwrap();
//! assert_eq!(text.plain_text(), "string | undefined");
//! ```
//!
//! The core is pure and synchronous: every call is a function over immutable
//! borrows, so independent renders may run in parallel without locking.

// Core types
pub mod annotate;
pub mod interface;
pub mod params;
pub mod registry;
pub mod types;

// Rendering engine
pub mod measure;
pub mod render;
pub mod substitute;

// Utilities
pub mod diagnostics;
pub mod printer;
pub mod test_util;

// Re-exports for convenience
pub use annotate::{AnnotatedText, Segment, Tag, TextRun};
pub use diagnostics::{SigilError, SigilResult};
pub use interface::{CallSignatureDef, FunctionDef, InterfaceDef, InterfaceMember};
pub use params::ParamDef;
pub use registry::{DocEntity, Registry};
pub use render::{RenderContext, Renderer, COLUMN_BUDGET};
pub use substitute::{build_substitution_map, SubstKey, SubstitutionMap};
pub use types::{FunctionTypeDef, NamedTypeDef, ObjectMemberDef, TypeNode};

// Terminal output
pub use printer::SignaturePrinter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
