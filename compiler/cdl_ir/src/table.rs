//! The symbol registry and compilation context.
//!
//! One [`SymbolTable`] is created at the start of a compilation and
//! threaded through every phase. It owns every symbol in one arena — the
//! sole destruction authority — while the per-class lists and all graph
//! cross-references hold [`SymbolId`]s. Dropping the table releases every
//! symbol and its class-owned payload exactly once.
//!
//! The registry is append-only for the duration of a compilation: symbols
//! are registered in parse-encounter order and never removed or replaced,
//! and every list preserves that order for downstream passes.

use std::borrow::Cow;

use rustc_hash::FxHashMap;

use cdl_diagnostic::{Diagnostic, ErrorCode};
use cdl_types::Tag;

use crate::path::{collect_path, render_prefix, root_first, PATH_SEPARATOR};
use crate::{ObjectClass, Symbol, SymbolDetail, SymbolId};

/// Key of the duplicate-declaration index: enclosing group, class, local
/// name. Structural by construction — two traversals reaching the same
/// group share its id.
#[derive(Clone, Eq, PartialEq, Hash)]
struct ScopeKey {
    container: Option<SymbolId>,
    class: ObjectClass,
    name: String,
}

/// The symbol registry.
pub struct SymbolTable {
    /// Universal arena; owns every symbol.
    symbols: Vec<Symbol>,
    /// Per-class views, registration order.
    groups: Vec<SymbolId>,
    dimensions: Vec<SymbolId>,
    variables: Vec<SymbolId>,
    attributes: Vec<SymbolId>,
    types: Vec<SymbolId>,
    enum_consts: Vec<SymbolId>,
    fields: Vec<SymbolId>,
    arrays: Vec<SymbolId>,
    primitives: Vec<SymbolId>,
    /// Sub-views of the attribute class.
    global_attributes: Vec<SymbolId>,
    special_attributes: Vec<SymbolId>,
    /// Pre-seeded primitive-type symbols, indexed by primitive tag.
    primitive_index: [Option<SymbolId>; Self::PRIM_COUNT],
    /// First declaration per (group, class, name).
    scope_index: FxHashMap<ScopeKey, SymbolId>,
    /// The root group, once registered.
    root: Option<SymbolId>,
}

impl SymbolTable {
    /// Index space of the pre-seeded primitive slots: `NAT..=STRING`.
    const PRIM_COUNT: usize = 13;

    /// Create a registry with the primitive-type symbols pre-seeded, one
    /// per primitive tag `BYTE..=STRING`, in tag order.
    pub fn new() -> Self {
        let mut table = SymbolTable {
            symbols: Vec::new(),
            groups: Vec::new(),
            dimensions: Vec::new(),
            variables: Vec::new(),
            attributes: Vec::new(),
            types: Vec::new(),
            enum_consts: Vec::new(),
            fields: Vec::new(),
            arrays: Vec::new(),
            primitives: Vec::new(),
            global_attributes: Vec::new(),
            special_attributes: Vec::new(),
            primitive_index: [None; Self::PRIM_COUNT],
            scope_index: FxHashMap::default(),
            root: None,
        };
        for raw in Tag::BYTE.raw()..=Tag::STRING.raw() {
            let tag = Tag::from_raw(raw);
            let name = tag.cdl_name().unwrap_or("nat");
            let id = table.register(Symbol::new(name, SymbolDetail::Primitive { tag }));
            if let Ok(slot) = usize::try_from(raw) {
                table.primitive_index[slot] = Some(id);
            }
        }
        table
    }

    /// Register a symbol: append it to the universal arena and to the one
    /// class list matching its payload. This is the only mutation the
    /// registry permits — no removal, no replacement.
    ///
    /// Registration also wires the graph: an empty `prefix` is derived
    /// root-first from the `container` chain, the symbol is appended to its
    /// container's `subnodes`, and an attribute is recorded on its target
    /// variable.
    pub fn register(&mut self, mut sym: Symbol) -> SymbolId {
        let id = SymbolId::from_raw(u32::try_from(self.symbols.len()).unwrap_or(u32::MAX));
        let class = sym.object_class();

        if sym.prefix.is_empty() {
            if let Some(container) = sym.container {
                sym.prefix = root_first(collect_path(self, container));
            }
        }

        tracing::debug!(name = %sym.name, class = ?class, id = id.raw(), "register symbol");

        let key = ScopeKey {
            container: sym.container,
            class,
            name: sym.name.clone(),
        };
        self.scope_index.entry(key).or_insert(id);

        let container = sym.container;
        let attr = sym.as_attribute().cloned();
        if sym.is_root() && self.root.is_none() {
            self.root = Some(id);
        }

        self.symbols.push(sym);
        self.class_list_mut(class).push(id);

        if let Some(container) = container {
            self.symbols[container.index()].subnodes.push(id);
        }
        if let Some(attr) = attr {
            if attr.special {
                self.special_attributes.push(id);
            } else if attr.target.is_none() {
                self.global_attributes.push(id);
            }
            if let Some(var) = attr.target {
                if let Some(detail) = self.symbols[var.index()].as_variable_mut() {
                    detail.attributes.push(id);
                }
            }
        }

        id
    }

    fn class_list_mut(&mut self, class: ObjectClass) -> &mut Vec<SymbolId> {
        match class {
            ObjectClass::Group => &mut self.groups,
            ObjectClass::Dimension => &mut self.dimensions,
            ObjectClass::Variable => &mut self.variables,
            ObjectClass::Attribute => &mut self.attributes,
            ObjectClass::Type => &mut self.types,
            ObjectClass::EnumConst => &mut self.enum_consts,
            ObjectClass::Field => &mut self.fields,
            ObjectClass::Array => &mut self.arrays,
            ObjectClass::Primitive => &mut self.primitives,
        }
    }

    /// Borrow a symbol.
    ///
    /// # Panics
    /// Panics on an id from another table; ids are never invalidated by
    /// this table, which only appends.
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    /// Mutably borrow a symbol, for the parse phase populating payloads in
    /// place.
    pub fn symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.index()]
    }

    /// Number of registered symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate every symbol in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols.iter().enumerate().map(|(i, sym)| {
            (
                SymbolId::from_raw(u32::try_from(i).unwrap_or(u32::MAX)),
                sym,
            )
        })
    }

    // === Per-class views, registration order ===

    pub fn groups(&self) -> &[SymbolId] {
        &self.groups
    }

    pub fn dimensions(&self) -> &[SymbolId] {
        &self.dimensions
    }

    pub fn variables(&self) -> &[SymbolId] {
        &self.variables
    }

    /// Every attribute symbol, variable-scoped and global alike.
    pub fn attributes(&self) -> &[SymbolId] {
        &self.attributes
    }

    /// Attributes declared at group scope.
    pub fn global_attributes(&self) -> &[SymbolId] {
        &self.global_attributes
    }

    /// Virtual `_`-prefixed special attributes.
    pub fn special_attributes(&self) -> &[SymbolId] {
        &self.special_attributes
    }

    pub fn types(&self) -> &[SymbolId] {
        &self.types
    }

    pub fn enum_consts(&self) -> &[SymbolId] {
        &self.enum_consts
    }

    pub fn fields(&self) -> &[SymbolId] {
        &self.fields
    }

    pub fn arrays(&self) -> &[SymbolId] {
        &self.arrays
    }

    pub fn primitives(&self) -> &[SymbolId] {
        &self.primitives
    }

    /// The pre-seeded symbol for a primitive tag, if there is one.
    pub fn primitive(&self, tag: Tag) -> Option<SymbolId> {
        let slot = usize::try_from(tag.raw()).ok()?;
        self.primitive_index.get(slot).copied().flatten()
    }

    /// The root group, once one has been registered.
    pub fn root(&self) -> Option<SymbolId> {
        self.root
    }

    /// First declaration of `name` with class `class` in `container`, if
    /// any. A second registration under the same key is the redeclaration
    /// case; the index always answers with the first.
    pub fn find(
        &self,
        container: Option<SymbolId>,
        class: ObjectClass,
        name: &str,
    ) -> Option<SymbolId> {
        self.scope_index
            .get(&ScopeKey {
                container,
                class,
                name: name.to_owned(),
            })
            .copied()
    }

    /// The fully qualified name of a symbol, computed on first use and
    /// cached on the symbol: rendered root-first prefix plus
    /// `separator + local name`. A top-level entity's fully qualified name
    /// is simply `/name`.
    pub fn full_name(&self, id: SymbolId) -> &str {
        let sym = &self.symbols[id.index()];
        sym.fqn.get_or_init(|| {
            let mut out = render_prefix(self, &sym.prefix, PATH_SEPARATOR);
            out.push_str(PATH_SEPARATOR);
            out.push_str(&sym.name);
            out
        })
    }

    /// Human-readable description of a symbol for diagnostics:
    /// `class name` plus the fully qualified name.
    pub fn describe(&self, id: SymbolId) -> Cow<'static, str> {
        let sym = self.symbol(id);
        Cow::Owned(format!(
            "{} {}",
            sym.object_class().tag().class_name(),
            self.full_name(id)
        ))
    }

    /// Diagnose a redeclaration: `Some` when an earlier symbol with the
    /// same (group, class, name) key exists.
    pub fn duplicate_diagnostic(&self, id: SymbolId) -> Option<Diagnostic> {
        let sym = self.symbol(id);
        let first = self.find(sym.container, sym.object_class(), &sym.name)?;
        if first == id {
            return None;
        }
        let mut diag = Diagnostic::error(ErrorCode::E2001)
            .with_message(format!("duplicate declaration of {}", self.describe(id)))
            .with_note(format!(
                "first declared at cdl line {}",
                self.symbol(first).lineno
            ));
        if sym.lineno > 0 {
            diag = diag.with_cdl_line(sym.lineno);
        }
        Some(diag)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
