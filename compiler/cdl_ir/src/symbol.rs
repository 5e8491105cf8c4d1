//! The universal semantic entity.
//!
//! Every object the parser discovers — group, dimension, variable,
//! attribute, type, enum constant, compound field, array type, primitive —
//! is one [`Symbol`]. The universal fields are shared by every class; the
//! class-specific payload is one [`SymbolDetail`] variant, exhaustively
//! matched wherever class behavior differs.
//!
//! Ownership rule: a symbol owns its name, its cached fully-qualified name,
//! its data lists, and its payload. Relations to other symbols
//! (`container`, `prefix`, `subnodes`, a variable's attribute list) are
//! [`SymbolId`]s and never own what they reference.

use std::cell::OnceCell;

use cdl_types::Tag;

use crate::{DataList, DimSet, Special, SymbolId};

/// The nine symbol classes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ObjectClass {
    Group,
    Dimension,
    Variable,
    Attribute,
    Type,
    EnumConst,
    Field,
    Array,
    Primitive,
}

impl ObjectClass {
    /// The meta-band tag identifying this class.
    pub const fn tag(self) -> Tag {
        match self {
            ObjectClass::Group => Tag::GRP,
            ObjectClass::Dimension => Tag::DIM,
            ObjectClass::Variable => Tag::VAR,
            ObjectClass::Attribute => Tag::ATT,
            ObjectClass::Type => Tag::TYPE,
            ObjectClass::EnumConst => Tag::ECONST,
            ObjectClass::Field => Tag::FIELD,
            ObjectClass::Array => Tag::ARRAY,
            ObjectClass::Primitive => Tag::PRIM,
        }
    }

    /// Decode a meta-band tag.
    pub const fn from_tag(tag: Tag) -> Option<Self> {
        match tag {
            Tag::GRP => Some(ObjectClass::Group),
            Tag::DIM => Some(ObjectClass::Dimension),
            Tag::VAR => Some(ObjectClass::Variable),
            Tag::ATT => Some(ObjectClass::Attribute),
            Tag::TYPE => Some(ObjectClass::Type),
            Tag::ECONST => Some(ObjectClass::EnumConst),
            Tag::FIELD => Some(ObjectClass::Field),
            Tag::ARRAY => Some(ObjectClass::Array),
            Tag::PRIM => Some(ObjectClass::Primitive),
            _ => None,
        }
    }
}

/// Declared extent of a dimension.
///
/// The declared size of an unlimited dimension is zero until data is
/// written, which is what size arithmetic observes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DimSize {
    Unlimited,
    Fixed(u64),
}

impl DimSize {
    pub const fn is_unlimited(self) -> bool {
        matches!(self, DimSize::Unlimited)
    }

    /// The size used in cross products: the fixed extent, or zero for an
    /// unlimited dimension.
    pub const fn declared(self) -> u64 {
        match self {
            DimSize::Unlimited => 0,
            DimSize::Fixed(n) => n,
        }
    }
}

/// Group payload. The file path is only meaningful for the root group,
/// which represents the compilation unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupDetail {
    pub file_path: Option<String>,
    pub is_root: bool,
}

/// Variable payload.
#[derive(Clone, Debug, PartialEq)]
pub struct VarDetail {
    /// The declared type symbol.
    pub base_type: Option<SymbolId>,
    /// Ordered dimension references.
    pub dims: DimSet,
    /// Owned storage metadata.
    pub special: Special,
    /// Attribute symbols attached to this variable (not owned).
    pub attributes: Vec<SymbolId>,
}

impl VarDetail {
    pub fn new(base_type: Option<SymbolId>, dims: DimSet) -> Self {
        VarDetail {
            base_type,
            dims,
            special: Special::new(),
            attributes: Vec::new(),
        }
    }
}

/// Attribute payload. `target` is the declaring variable; a global
/// attribute has none.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttrDetail {
    pub target: Option<SymbolId>,
    pub base_type: Option<SymbolId>,
    /// True for the virtual `_`-prefixed special attributes.
    pub special: bool,
}

/// Type payload, covering vlen/opaque/enum/compound definitions.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDetail {
    /// Which kind of user type this is (`VLEN`, `OPAQUE`, `ENUM`,
    /// `COMPOUND`, or a primitive tag for aliases).
    pub subclass: Tag,
    /// Base type for vlen/enum definitions.
    pub base: Option<SymbolId>,
    /// Actual byte size for opaque/compound definitions.
    pub size: u64,
    /// Alignment for compound layout.
    pub alignment: u32,
    /// Owned literal expression of an enumeration constant.
    pub econst: Option<crate::Constant>,
    /// Owned fill-value list attached to the type.
    pub fill_value: Option<DataList>,
}

impl TypeDetail {
    pub fn new(subclass: Tag) -> Self {
        TypeDetail {
            subclass,
            base: None,
            size: 0,
            alignment: 0,
            econst: None,
            fill_value: None,
        }
    }
}

/// Compound-field payload.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDetail {
    pub base_type: Option<SymbolId>,
    pub dims: DimSet,
}

/// Array-type payload.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayDetail {
    pub base: Option<SymbolId>,
    pub dims: DimSet,
}

/// Class-specific payload, exactly one per symbol.
#[derive(Clone, Debug, PartialEq)]
pub enum SymbolDetail {
    Group(GroupDetail),
    Dimension { size: DimSize },
    Variable(VarDetail),
    Attribute(AttrDetail),
    Type(TypeDetail),
    EnumConst,
    Field(FieldDetail),
    Array(ArrayDetail),
    Primitive { tag: Tag },
}

impl SymbolDetail {
    /// The class this payload selects.
    pub const fn object_class(&self) -> ObjectClass {
        match self {
            SymbolDetail::Group(_) => ObjectClass::Group,
            SymbolDetail::Dimension { .. } => ObjectClass::Dimension,
            SymbolDetail::Variable(_) => ObjectClass::Variable,
            SymbolDetail::Attribute(_) => ObjectClass::Attribute,
            SymbolDetail::Type(_) => ObjectClass::Type,
            SymbolDetail::EnumConst => ObjectClass::EnumConst,
            SymbolDetail::Field(_) => ObjectClass::Field,
            SymbolDetail::Array(_) => ObjectClass::Array,
            SymbolDetail::Primitive { .. } => ObjectClass::Primitive,
        }
    }
}

/// One semantic entity.
#[derive(Clone, Debug)]
pub struct Symbol {
    /// Local identifier.
    pub name: String,
    /// Cached fully-qualified name, computed on first use.
    pub(crate) fqn: OnceCell<String>,
    /// CDL source line of the declaration.
    pub lineno: u32,
    /// Enclosing group; the root group has none.
    pub container: Option<SymbolId>,
    /// Ancestor groups, root-first.
    pub prefix: Vec<SymbolId>,
    /// Child symbols, declaration order.
    pub subnodes: Vec<SymbolId>,
    /// Universal attached data list (attribute values, variable data).
    pub data: Option<DataList>,
    /// Class-specific payload.
    pub detail: SymbolDetail,
}

impl Symbol {
    /// Create a symbol with the given payload; relations start empty.
    pub fn new(name: impl Into<String>, detail: SymbolDetail) -> Self {
        Symbol {
            name: name.into(),
            fqn: OnceCell::new(),
            lineno: 0,
            container: None,
            prefix: Vec::new(),
            subnodes: Vec::new(),
            data: None,
            detail,
        }
    }

    /// Attach the enclosing group.
    #[must_use]
    pub fn with_container(mut self, container: SymbolId) -> Self {
        self.container = Some(container);
        self
    }

    /// Attach the CDL source line.
    #[must_use]
    pub fn with_lineno(mut self, lineno: u32) -> Self {
        self.lineno = lineno;
        self
    }

    /// Shorthand for a subgroup symbol.
    pub fn group(name: impl Into<String>) -> Self {
        Symbol::new(name, SymbolDetail::Group(GroupDetail::default()))
    }

    /// Shorthand for the root group representing the compilation unit.
    pub fn root_group(name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Symbol::new(
            name,
            SymbolDetail::Group(GroupDetail {
                file_path: Some(file_path.into()),
                is_root: true,
            }),
        )
    }

    /// Shorthand for a dimension symbol.
    pub fn dimension(name: impl Into<String>, size: DimSize) -> Self {
        Symbol::new(name, SymbolDetail::Dimension { size })
    }

    /// Shorthand for a variable symbol.
    pub fn variable(name: impl Into<String>, base_type: Option<SymbolId>, dims: DimSet) -> Self {
        Symbol::new(name, SymbolDetail::Variable(VarDetail::new(base_type, dims)))
    }

    /// Shorthand for an attribute symbol; `target` is the declaring
    /// variable, or `None` for a global attribute.
    pub fn attribute(name: impl Into<String>, target: Option<SymbolId>) -> Self {
        Symbol::new(
            name,
            SymbolDetail::Attribute(AttrDetail {
                target,
                ..AttrDetail::default()
            }),
        )
    }

    /// Shorthand for a user type symbol.
    pub fn typedef(name: impl Into<String>, subclass: Tag) -> Self {
        Symbol::new(name, SymbolDetail::Type(TypeDetail::new(subclass)))
    }

    /// The class of this symbol.
    pub const fn object_class(&self) -> ObjectClass {
        self.detail.object_class()
    }

    /// True for the root group.
    pub fn is_root(&self) -> bool {
        matches!(&self.detail, SymbolDetail::Group(g) if g.is_root)
    }

    /// The cached fully-qualified name, if already computed.
    pub fn cached_fqn(&self) -> Option<&str> {
        self.fqn.get().map(String::as_str)
    }

    /// Dimension payload accessor.
    pub fn as_dimension(&self) -> Option<DimSize> {
        match &self.detail {
            SymbolDetail::Dimension { size } => Some(*size),
            _ => None,
        }
    }

    /// Variable payload accessor.
    pub fn as_variable(&self) -> Option<&VarDetail> {
        match &self.detail {
            SymbolDetail::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Mutable variable payload accessor.
    pub fn as_variable_mut(&mut self) -> Option<&mut VarDetail> {
        match &mut self.detail {
            SymbolDetail::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Type payload accessor.
    pub fn as_type(&self) -> Option<&TypeDetail> {
        match &self.detail {
            SymbolDetail::Type(t) => Some(t),
            _ => None,
        }
    }

    /// Mutable type payload accessor.
    pub fn as_type_mut(&mut self) -> Option<&mut TypeDetail> {
        match &mut self.detail {
            SymbolDetail::Type(t) => Some(t),
            _ => None,
        }
    }

    /// Group payload accessor.
    pub fn as_group(&self) -> Option<&GroupDetail> {
        match &self.detail {
            SymbolDetail::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Attribute payload accessor.
    pub fn as_attribute(&self) -> Option<&AttrDetail> {
        match &self.detail {
            SymbolDetail::Attribute(a) => Some(a),
            _ => None,
        }
    }
}
