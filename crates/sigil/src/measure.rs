//! Length estimation for rendered signatures
//!
//! Predicts the exact character width a node's plain-text rendering would
//! occupy with no inserted line breaks; the renderer compares these widths
//! against its column budget to pick single-line or one-parameter-per-line
//! layout.
//!
//! Keeping a second hand-written recursion structurally identical to the
//! renderer would be a standing correctness hazard, so these functions are
//! derived from it instead: each one runs the shared emission core with
//! wrapping disabled and counts the characters it produced. Render/measure
//! consistency holds by construction.

use crate::annotate::Emitter;
use crate::diagnostics::SigilResult;
use crate::interface::CallSignatureDef;
use crate::render::{RenderContext, Renderer};
use crate::types::{FunctionTypeDef, TypeNode};

/// Width of the plain-text rendering of `node`, assuming no line breaks
pub fn type_len(node: &TypeNode, ctx: &RenderContext<'_>) -> SigilResult<usize> {
    let mut e = Emitter::new();
    Renderer::new().emit_type(&mut e, node, ctx, 0, false)?;
    Ok(e.finish().plain_len())
}

/// Width of a function type's `<T>(params) => Ret` text
pub fn function_len(func: &FunctionTypeDef, ctx: &RenderContext<'_>) -> SigilResult<usize> {
    let mut e = Emitter::new();
    Renderer::new().emit_function(&mut e, func, ctx, false, false)?;
    Ok(e.finish().plain_len())
}

/// Width of a call signature's `<T>(params): Ret` text, excluding the name
pub fn call_signature_len(sig: &CallSignatureDef, ctx: &RenderContext<'_>) -> SigilResult<usize> {
    let mut e = Emitter::new();
    Renderer::new().emit_signature_tail(&mut e, sig, ctx, false, false)?;
    Ok(e.finish().plain_len())
}

/// Predicted width of a full call signature line:
/// module qualifier and dot, name, then the signature text
pub fn signature_width(
    name: &str,
    module: Option<&str>,
    sig: &CallSignatureDef,
    ctx: &RenderContext<'_>,
) -> SigilResult<usize> {
    let qualifier = module.map(|m| m.chars().count() + 1).unwrap_or(0);
    Ok(qualifier + name.chars().count() + call_signature_len(sig, ctx)?)
}
