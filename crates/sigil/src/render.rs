//! Signature renderer
//!
//! Recursive formatter turning a type-AST node, call signature, member or
//! interface header into [`AnnotatedText`]. The renderer consults the length
//! estimator (`measure`) to choose between single-line and one-parameter-per-
//! line layout, the substitution map in the [`RenderContext`] to resolve
//! inherited generic parameters, and the registry to link documented type
//! names.
//!
//! Rendering is pure: equal inputs produce equal output, and nothing here
//! mutates the AST, the registry or the substitution map.

use crate::annotate::{AnnotatedText, Emitter, Tag};
use crate::diagnostics::{SigilError, SigilResult};
use crate::interface::{CallSignatureDef, FunctionDef, InterfaceDef, InterfaceMember};
use crate::measure;
use crate::params::ParamDef;
use crate::registry::Registry;
use crate::substitute::SubstitutionMap;
use crate::types::{FunctionTypeDef, NamedTypeDef, ObjectMemberDef, TypeNode};

/// Column budget for call signatures; beyond this the parameter list wraps
pub const COLUMN_BUDGET: usize = 80;

/// Nested function types keep two columns in reserve for the punctuation of
/// the parameter that encloses them
const NESTED_BUDGET: usize = COLUMN_BUDGET - 2;

/// Defining context for a single render call
///
/// Constructed fresh per top-level call, never mutated, discarded afterwards.
/// `defining` names the super interface whose scope the rendered member was
/// declared in; together with the substitution map it resolves generic
/// parameter references to the concrete types the documented subtype supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    /// Name of the interface declaring the member being rendered
    pub defining: Option<&'a str>,

    /// Substitutions built for the subtype currently being documented
    pub substitutions: Option<&'a SubstitutionMap>,
}

impl<'a> RenderContext<'a> {
    /// Context for a member inherited from `defining`
    pub fn inherited(defining: &'a str, substitutions: &'a SubstitutionMap) -> Self {
        Self {
            defining: Some(defining),
            substitutions: Some(substitutions),
        }
    }

    /// Concrete type substituted for `param` in the defining scope, if any
    pub fn lookup(&self, param: &str) -> Option<&'a TypeNode> {
        self.substitutions?.get(self.defining?, param)
    }
}

/// Signature renderer
///
/// Holds an optional registry borrow used to turn documented type names into
/// links; without one, everything renders unlinked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer<'a> {
    registry: Option<&'a Registry>,
}

impl<'a> Renderer<'a> {
    /// Create a renderer with no registry (no links)
    pub fn new() -> Self {
        Self { registry: None }
    }

    /// Create a renderer resolving links against `registry`
    pub fn with_registry(registry: &'a Registry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    /// Render a type node
    pub fn render_type(
        &self,
        node: &TypeNode,
        ctx: &RenderContext<'_>,
    ) -> SigilResult<AnnotatedText> {
        let mut e = Emitter::new();
        self.emit_type(&mut e, node, ctx, 0, true)?;
        Ok(e.finish())
    }

    /// Render a call signature: `module.name<T>(params): Ret`
    ///
    /// Wraps the parameter list when the predicted width exceeds the
    /// 80-column budget.
    pub fn render_call_signature(
        &self,
        name: &str,
        module: Option<&str>,
        sig: &CallSignatureDef,
        ctx: &RenderContext<'_>,
    ) -> SigilResult<AnnotatedText> {
        let mut e = Emitter::new();
        self.emit_call_signature(&mut e, name, module, sig, ctx)?;
        Ok(e.finish())
    }

    /// Render an object member: `module.name: Type` or `module.[params]: Type`
    pub fn render_member(
        &self,
        module: Option<&str>,
        member: &ObjectMemberDef,
    ) -> SigilResult<AnnotatedText> {
        let mut e = Emitter::new();
        self.emit_object_member(&mut e, module, member, &RenderContext::default(), true)?;
        Ok(e.finish())
    }

    /// Render an interface header: `type Name<T> extends A<T> implements B`
    pub fn render_interface_header(
        &self,
        name: &str,
        def: &InterfaceDef,
    ) -> SigilResult<AnnotatedText> {
        let ctx = RenderContext::default();
        let mut e = Emitter::new();
        e.tagged(Tag::Keyword, "type ");
        e.tagged(Tag::TypeName, name);
        self.emit_type_param_names(&mut e, &def.type_params);
        if !def.extends.is_empty() {
            e.tagged(Tag::Keyword, " extends ");
            for (i, super_type) in def.extends.iter().enumerate() {
                if i > 0 {
                    e.punct(", ");
                }
                self.emit_named(&mut e, super_type, &ctx, true)?;
            }
        }
        if !def.implements.is_empty() {
            e.tagged(Tag::Keyword, " implements ");
            for (i, super_type) in def.implements.iter().enumerate() {
                if i > 0 {
                    e.punct(", ");
                }
                self.emit_named(&mut e, super_type, &ctx, true)?;
            }
        }
        Ok(e.finish())
    }

    /// Render a documented function's overloads, one signature per line
    pub fn render_function(&self, name: &str, def: &FunctionDef) -> SigilResult<AnnotatedText> {
        let ctx = RenderContext::default();
        let mut e = Emitter::new();
        for (i, sig) in def.signatures.iter().enumerate() {
            if i > 0 {
                e.line_break();
            }
            self.emit_call_signature(&mut e, name, None, sig, &ctx)?;
        }
        Ok(e.finish())
    }

    /// Render the signature block for an interface member
    ///
    /// Static members carry the parent name as qualifier; properties render
    /// in member form; methods render one overload per line. For inherited
    /// members the substitution map resolves the declaring interface's
    /// generic parameters.
    pub fn render_member_signatures(
        &self,
        parent: &str,
        member: &InterfaceMember,
        substitutions: Option<&SubstitutionMap>,
    ) -> SigilResult<AnnotatedText> {
        let module = if member.is_static { Some(parent) } else { None };
        if member.is_property() {
            let prop = ObjectMemberDef::Property {
                name: member.name.clone(),
                member_type: member.property_type.clone(),
            };
            return self.render_member(module, &prop);
        }

        let ctx = match (member.inherited_from.as_deref(), substitutions) {
            (Some(defining), Some(map)) => RenderContext::inherited(defining, map),
            _ => RenderContext::default(),
        };
        let mut e = Emitter::new();
        for (i, sig) in member.signatures.iter().enumerate() {
            if i > 0 {
                e.line_break();
            }
            self.emit_call_signature(&mut e, &member.name, module, sig, &ctx)?;
        }
        Ok(e.finish())
    }

    fn emit_call_signature(
        &self,
        e: &mut Emitter,
        name: &str,
        module: Option<&str>,
        sig: &CallSignatureDef,
        ctx: &RenderContext<'_>,
    ) -> SigilResult<()> {
        if let Some(module) = module {
            e.tagged(Tag::FnQualifier, module);
            e.punct(".");
        }
        e.tagged(Tag::FnName, name);
        let wrap = measure::signature_width(name, module, sig, ctx)? > COLUMN_BUDGET;
        self.emit_signature_tail(e, sig, ctx, wrap, true)
    }

    /// The `<T>(params): Ret` part of a call signature
    pub(crate) fn emit_signature_tail(
        &self,
        e: &mut Emitter,
        sig: &CallSignatureDef,
        ctx: &RenderContext<'_>,
        wrap: bool,
        allow_wrap: bool,
    ) -> SigilResult<()> {
        self.emit_type_param_names(e, &sig.type_params);
        e.punct("(");
        self.emit_params(e, &sig.params, ctx, wrap, allow_wrap)?;
        e.punct(")");
        if let Some(return_type) = &sig.return_type {
            e.punct(": ");
            self.emit_type(e, return_type, ctx, 0, allow_wrap)?;
        }
        Ok(())
    }

    /// Core recursive formatter
    ///
    /// `prefix` is the width already taken on the line by the enclosing
    /// parameter's name and punctuation; it only matters for the wrap
    /// decision of nested function types. `allow_wrap` is cleared on the
    /// measuring pass, which predicts widths assuming no breaks.
    pub(crate) fn emit_type(
        &self,
        e: &mut Emitter,
        node: &TypeNode,
        ctx: &RenderContext<'_>,
        prefix: usize,
        allow_wrap: bool,
    ) -> SigilResult<()> {
        match node {
            TypeNode::Never => e.tagged(Tag::Primitive, "never"),
            TypeNode::Any => e.tagged(Tag::Primitive, "any"),
            TypeNode::This => e.tagged(Tag::Primitive, "this"),
            TypeNode::Undefined => e.tagged(Tag::Primitive, "undefined"),
            TypeNode::Boolean => e.tagged(Tag::Primitive, "boolean"),
            TypeNode::Number => e.tagged(Tag::Primitive, "number"),
            TypeNode::String => e.tagged(Tag::Primitive, "string"),
            TypeNode::Union(members) => {
                if members.is_empty() {
                    return Err(SigilError::invalid("union type with no members"));
                }
                e.group(Tag::Union, |e| -> SigilResult<()> {
                    for (i, member) in members.iter().enumerate() {
                        if i > 0 {
                            e.punct(" | ");
                        }
                        self.emit_type(e, member, ctx, 0, allow_wrap)?;
                    }
                    Ok(())
                })?
            }
            TypeNode::Intersection(members) => {
                if members.is_empty() {
                    return Err(SigilError::invalid("intersection type with no members"));
                }
                e.group(Tag::Intersection, |e| -> SigilResult<()> {
                    for (i, member) in members.iter().enumerate() {
                        if i > 0 {
                            e.punct(" & ");
                        }
                        self.emit_type(e, member, ctx, 0, allow_wrap)?;
                    }
                    Ok(())
                })?
            }
            TypeNode::Tuple(elements) => e.group(Tag::Tuple, |e| -> SigilResult<()> {
                e.punct("[");
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        e.punct(", ");
                    }
                    self.emit_type(e, element, ctx, 0, allow_wrap)?;
                }
                e.punct("]");
                Ok(())
            })?,
            TypeNode::Object(members) => e.group(Tag::Object, |e| -> SigilResult<()> {
                e.punct("{");
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        e.punct(", ");
                    }
                    self.emit_object_member(e, None, member, ctx, allow_wrap)?;
                }
                e.punct("}");
                Ok(())
            })?,
            TypeNode::Indexed { target, index } => e.group(Tag::Indexed, |e| -> SigilResult<()> {
                self.emit_type(e, target, ctx, 0, allow_wrap)?;
                e.punct("[");
                self.emit_type(e, index, ctx, 0, allow_wrap)?;
                e.punct("]");
                Ok(())
            })?,
            TypeNode::Operator { operator, operand } => e.group(Tag::Operator, |e| {
                e.tagged(Tag::Primitive, operator);
                e.punct(" ");
                self.emit_type(e, operand, ctx, 0, allow_wrap)
            })?,
            TypeNode::Array(element) => e.group(Tag::Array, |e| -> SigilResult<()> {
                self.emit_type(e, element, ctx, 0, allow_wrap)?;
                e.punct("[]");
                Ok(())
            })?,
            TypeNode::Function(func) => {
                let wrap =
                    allow_wrap && prefix + measure::function_len(func, ctx)? > NESTED_BUDGET;
                self.emit_function(e, func, ctx, wrap, allow_wrap)?
            }
            TypeNode::TypeParam(name) => match ctx.lookup(name) {
                // Substituted concrete type, rendered with a null context so
                // its own parameter references are not substituted again
                Some(concrete) => {
                    self.emit_type(e, concrete, &RenderContext::default(), prefix, allow_wrap)?
                }
                None => e.tagged(Tag::TypeParam, name),
            },
            TypeNode::Named(named) => self.emit_named(e, named, ctx, allow_wrap)?,
            TypeNode::Unknown => return Err(SigilError::UnknownTypeKind),
        }
        Ok(())
    }

    /// Function type: `<T>(params) => Ret`
    pub(crate) fn emit_function(
        &self,
        e: &mut Emitter,
        func: &FunctionTypeDef,
        ctx: &RenderContext<'_>,
        wrap: bool,
        allow_wrap: bool,
    ) -> SigilResult<()> {
        e.group(Tag::Function, |e| {
            self.emit_type_param_names(e, &func.type_params);
            e.punct("(");
            self.emit_params(e, &func.params, ctx, wrap, allow_wrap)?;
            e.punct(")");
            e.punct(" => ");
            self.emit_type(e, &func.return_type, ctx, 0, allow_wrap)
        })
    }

    /// Named type reference with link resolution and generic arguments
    fn emit_named(
        &self,
        e: &mut Emitter,
        named: &NamedTypeDef,
        ctx: &RenderContext<'_>,
        allow_wrap: bool,
    ) -> SigilResult<()> {
        let path = named.path();
        let link = self
            .registry
            .and_then(|registry| registry.resolve(&path))
            .map(|_| Registry::link_target(&path));

        e.group(Tag::Type, |e| {
            let emit_name = |e: &mut Emitter| -> SigilResult<()> {
                for segment in &named.qualifier {
                    e.tagged(Tag::TypeQualifier, segment);
                    e.punct(".");
                }
                e.tagged(Tag::TypeName, &named.name);
                Ok(())
            };
            match link {
                Some(target) => e.linked(target, emit_name)?,
                None => emit_name(e)?,
            }
            if !named.args.is_empty() {
                e.punct("<");
                for (i, arg) in named.args.iter().enumerate() {
                    if i > 0 {
                        e.punct(", ");
                    }
                    self.emit_type(e, arg, ctx, 0, allow_wrap)?;
                }
                e.punct(">");
            }
            Ok(())
        })
    }

    /// Object/interface member: `name: Type` or `[params]: Type`
    fn emit_object_member(
        &self,
        e: &mut Emitter,
        module: Option<&str>,
        member: &ObjectMemberDef,
        ctx: &RenderContext<'_>,
        allow_wrap: bool,
    ) -> SigilResult<()> {
        e.group(Tag::Member, |e| {
            if let Some(module) = module {
                e.tagged(Tag::FnQualifier, module);
                e.punct(".");
            }
            let member_type = match member {
                ObjectMemberDef::Index {
                    params,
                    member_type,
                } => {
                    e.punct("[");
                    self.emit_params(e, params, ctx, false, allow_wrap)?;
                    e.punct("]");
                    member_type
                }
                ObjectMemberDef::Property { name, member_type } => {
                    e.text(name);
                    member_type
                }
            };
            if let Some(member_type) = member_type {
                e.punct(": ");
                self.emit_type(e, member_type, ctx, 0, allow_wrap)?;
            }
            Ok(())
        })
    }

    /// Parameter list, inline or one per line inside a block
    fn emit_params(
        &self,
        e: &mut Emitter,
        params: &[ParamDef],
        ctx: &RenderContext<'_>,
        wrap: bool,
        allow_wrap: bool,
    ) -> SigilResult<()> {
        if wrap {
            e.block(|e| self.emit_param_list(e, params, ctx, true, allow_wrap))
        } else {
            self.emit_param_list(e, params, ctx, false, allow_wrap)
        }
    }

    fn emit_param_list(
        &self,
        e: &mut Emitter,
        params: &[ParamDef],
        ctx: &RenderContext<'_>,
        wrap: bool,
        allow_wrap: bool,
    ) -> SigilResult<()> {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                if wrap {
                    e.punct(",");
                    e.line_break();
                } else {
                    e.punct(", ");
                }
            }
            // Line width already taken in front of the parameter's type
            let prefix = param.name.chars().count()
                + if param.rest { 3 } else { 0 }
                + if param.optional { 3 } else { 2 };
            if param.rest {
                e.punct("...");
            }
            e.tagged(Tag::Param, &param.name);
            e.punct(if param.optional { "?: " } else { ": " });
            self.emit_type(e, &param.param_type, ctx, prefix, allow_wrap)?;
        }
        Ok(())
    }

    /// Generic parameter name list: `<T, U>` (nothing when empty)
    fn emit_type_param_names(&self, e: &mut Emitter, names: &[String]) {
        if names.is_empty() {
            return;
        }
        e.punct("<");
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                e.punct(", ");
            }
            e.tagged(Tag::TypeParam, name);
        }
        e.punct(">");
    }
}
