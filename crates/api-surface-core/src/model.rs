//! The API item model.
//!
//! A [`Codebase`] is an arena-backed forest of [`Item`]s: packages containing
//! classes containing members. The model is front-end agnostic; whoever parses
//! source, bytecode, or signature files builds it through [`CodebaseBuilder`].
//!
//! Items are immutable after construction except for the `emit`/`hidden`
//! status flags, which flip behind `&mut Codebase` so exactly one pass can
//! mutate them at a time.

use std::collections::HashMap;
use std::fmt;

/// Index of an [`Item`] inside its owning [`Codebase`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) usize);

/// Discriminant for the item variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A package.
    Package,
    /// A constructor.
    Constructor,
    /// A method.
    Method,
    /// A field.
    Field,
    /// A class, interface, enum, or annotation type.
    Class,
    /// A method or constructor parameter.
    Parameter,
    /// An annotation usage item.
    Annotation,
    /// A Kotlin property.
    Property,
}

impl ItemKind {
    /// Rank used by the canonical sibling ordering.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Package => 0,
            Self::Constructor => 1,
            Self::Method => 2,
            Self::Field => 3,
            Self::Class => 4,
            Self::Parameter => 5,
            Self::Annotation => 6,
            Self::Property => 7,
        }
    }

    /// Lowercase label used in diagnostics ("method", "class", ...).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Constructor => "constructor",
            Self::Method => "method",
            Self::Field => "field",
            Self::Class => "class",
            Self::Parameter => "parameter",
            Self::Annotation => "annotation",
            Self::Property => "property",
        }
    }
}

/// Visibility of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// `public`.
    #[default]
    Public,
    /// `protected`.
    Protected,
    /// Kotlin `internal`.
    Internal,
    /// Java package-private.
    PackagePrivate,
    /// `private`.
    Private,
}

impl Visibility {
    /// Whether the item is part of the public or protected API surface.
    #[must_use]
    pub fn is_api_surface(self) -> bool {
        matches!(self, Self::Public | Self::Protected)
    }
}

/// Declared nullability of a type or item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Nullability {
    /// No nullability information (platform type).
    #[default]
    Unknown,
    /// Explicitly nullable.
    Nullable,
    /// Explicitly non-null.
    NonNull,
}

/// Modifier set attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Visibility of the item.
    pub visibility: Visibility,
    /// `static`.
    pub is_static: bool,
    /// `final`.
    pub is_final: bool,
    /// `abstract`.
    pub is_abstract: bool,
    /// Java `default` interface method.
    pub is_default: bool,
    /// `synchronized` visible in the signature.
    pub is_synchronized: bool,
    /// Kotlin `operator`.
    pub is_operator: bool,
    /// Declared nullability of the item itself.
    pub nullability: Nullability,
}

/// Flavor of a class item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassKind {
    /// A concrete or abstract class.
    #[default]
    Class,
    /// An interface.
    Interface,
    /// An enum.
    Enum,
    /// An annotation type.
    Annotation,
}

/// A compile-time constant value attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    /// Integral constant (byte through long).
    Int(i64),
    /// Floating-point constant.
    Double(f64),
    /// Boolean constant.
    Bool(bool),
    /// String constant.
    Str(String),
}

impl ConstantValue {
    /// Returns the integral value, if this is an [`ConstantValue::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }
}

/// Package prefix rewrites applied when erasing types, so compiler-generated
/// signature variants compare equal across language versions.
const PACKAGE_RENAMES: &[(&str, &str)] =
    &[("kotlin.coroutines.experimental", "kotlin.coroutines")];

/// A declared type: qualified name, type arguments, array/varargs shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeItem {
    /// Fully qualified name of the raw type (e.g. `java.util.List`).
    pub qualified_name: String,
    /// Type arguments, empty for raw or non-generic types.
    pub arguments: Vec<TypeItem>,
    /// Number of array dimensions.
    pub array_dims: u8,
    /// Whether the last dimension is a varargs (`...`) dimension.
    pub varargs: bool,
    /// Declared nullability of this type occurrence.
    pub nullability: Nullability,
}

impl TypeItem {
    /// Creates a non-generic, non-array type.
    #[must_use]
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Self::default()
        }
    }

    /// The `void` type.
    #[must_use]
    pub fn void() -> Self {
        Self::new("void")
    }

    /// Adds type arguments.
    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<TypeItem>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Marks this type as an array with the given number of dimensions.
    #[must_use]
    pub fn array(mut self, dims: u8) -> Self {
        self.array_dims = dims;
        self
    }

    /// Marks the last array dimension as varargs.
    #[must_use]
    pub fn as_varargs(mut self) -> Self {
        self.array_dims = self.array_dims.max(1);
        self.varargs = true;
        self
    }

    /// Sets the declared nullability.
    #[must_use]
    pub fn with_nullability(mut self, nullability: Nullability) -> Self {
        self.nullability = nullability;
        self
    }

    /// Whether this is the `void` type.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.qualified_name == "void" && self.array_dims == 0
    }

    /// Whether this is a primitive (non-array) type.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.array_dims == 0
            && matches!(
                self.qualified_name.as_str(),
                "void" | "boolean" | "byte" | "char" | "short" | "int" | "long" | "float"
                    | "double"
            )
    }

    /// Whether this is an array type (including varargs).
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.array_dims > 0
    }

    /// First type argument, if any.
    #[must_use]
    pub fn first_argument(&self) -> Option<&TypeItem> {
        self.arguments.first()
    }

    /// Qualified name with legacy package prefixes rewritten.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        for (from, to) in PACKAGE_RENAMES {
            if let Some(rest) = self.qualified_name.strip_prefix(from) {
                return format!("{to}{rest}");
            }
        }
        self.qualified_name.clone()
    }

    /// Erased signature string used for overload ordering and matching.
    ///
    /// Type arguments are erased and a varargs dimension renders as an array
    /// dimension, so `foo(int...)` and `foo(int[])` erase identically.
    #[must_use]
    pub fn erased_signature(&self) -> String {
        let mut sig = self.normalized_name();
        for _ in 0..self.array_dims {
            sig.push_str("[]");
        }
        sig
    }

    /// Unqualified (simple) name of the raw type.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }
}

impl fmt::Display for TypeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)?;
        if !self.arguments.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        for dim in 0..self.array_dims {
            if self.varargs && dim + 1 == self.array_dims {
                f.write_str("...")?;
            } else {
                f.write_str("[]")?;
            }
        }
        Ok(())
    }
}

/// Kind-specific payload of an [`Item`].
#[derive(Debug, Clone, PartialEq)]
pub enum ItemDetail {
    /// Package payload.
    Package,
    /// Class payload.
    Class {
        /// Class flavor.
        kind: ClassKind,
        /// Qualified name of the superclass, if any.
        super_class: Option<String>,
        /// Qualified names of implemented interfaces.
        interfaces: Vec<String>,
    },
    /// Method or constructor payload.
    Method {
        /// Qualified names of declared thrown exception types.
        throws: Vec<String>,
    },
    /// Field payload.
    Field {
        /// Compile-time constant value, if known.
        constant: Option<ConstantValue>,
    },
    /// Parameter payload.
    Parameter {
        /// Zero-based position in the parameter list.
        index: usize,
    },
    /// Property payload.
    Property,
}

/// One node in the API tree.
#[derive(Debug, Clone)]
pub struct Item {
    pub(crate) id: ItemId,
    pub(crate) parent: Option<ItemId>,
    pub(crate) children: Vec<ItemId>,
    /// Item kind discriminant.
    pub kind: ItemKind,
    /// Simple name.
    pub name: String,
    /// Fully qualified name, stable across versions.
    pub qualified_name: String,
    /// Modifier set.
    pub modifiers: Modifiers,
    /// Declared type: return type for methods, type for fields, parameters
    /// and properties. `None` for packages, classes and constructors.
    pub item_type: Option<TypeItem>,
    /// Qualified names of annotations present on the item.
    pub annotations: Vec<String>,
    /// Whether the item participates in emitted output.
    pub emit: bool,
    /// Whether the item is hidden from the API surface.
    pub hidden: bool,
    /// Whether the item was hidden before show-annotation processing.
    pub originally_hidden: bool,
    /// Whether the item is deprecated.
    pub deprecated: bool,
    /// Whether the item is compiler-synthesized.
    pub synthetic: bool,
    /// Whether the item carries documentation.
    pub documented: bool,
    /// Kind-specific payload.
    pub detail: ItemDetail,
}

/// A complete API surface: an arena of items rooted at packages.
#[derive(Debug, Clone)]
pub struct Codebase {
    description: String,
    items: Vec<Item>,
    packages: Vec<ItemId>,
    class_index: HashMap<String, ItemId>,
    pre_filtered: bool,
}

impl Codebase {
    /// Human-readable description of where this codebase came from.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether visibility filtering already happened upstream.
    #[must_use]
    pub fn is_pre_filtered(&self) -> bool {
        self.pre_filtered
    }

    /// Root packages in source declaration order.
    pub fn packages(&self) -> impl Iterator<Item = ItemHandle<'_>> {
        self.packages.iter().map(|id| self.handle(*id))
    }

    /// Number of items in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the codebase contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a handle for the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this codebase; that is a caller
    /// invariant violation, not a reportable condition.
    #[must_use]
    pub fn handle(&self, id: ItemId) -> ItemHandle<'_> {
        assert!(id.0 < self.items.len(), "item id out of range");
        ItemHandle { codebase: self, id }
    }

    /// Looks up a class by fully qualified name.
    #[must_use]
    pub fn find_class(&self, qualified_name: &str) -> Option<ItemHandle<'_>> {
        self.class_index
            .get(qualified_name)
            .map(|id| self.handle(*id))
    }

    /// Flips the `emit` flag on an item.
    pub fn set_emit(&mut self, id: ItemId, emit: bool) {
        self.items[id.0].emit = emit;
    }

    /// Flips the `hidden` flag on an item.
    pub fn set_hidden(&mut self, id: ItemId, hidden: bool) {
        let item = &mut self.items[id.0];
        if hidden && !item.hidden {
            item.originally_hidden = true;
        }
        item.hidden = hidden;
    }
}

/// A borrowed view of one item inside its codebase.
///
/// This is the unit of currency across the comparator, the lint engine and
/// the rules: cheap to copy, comparable across codebases.
#[derive(Clone, Copy)]
pub struct ItemHandle<'a> {
    pub(crate) codebase: &'a Codebase,
    pub(crate) id: ItemId,
}

impl PartialEq for ItemHandle<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.codebase, other.codebase) && self.id == other.id
    }
}

impl Eq for ItemHandle<'_> {}

impl<'a> ItemHandle<'a> {
    /// The underlying item.
    #[must_use]
    pub fn item(&self) -> &'a Item {
        &self.codebase.items[self.id.0]
    }

    /// The owning codebase.
    #[must_use]
    pub fn codebase(&self) -> &'a Codebase {
        self.codebase
    }

    /// Arena id of the item.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Item kind.
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.item().kind
    }

    /// Simple name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.item().name
    }

    /// Fully qualified name.
    #[must_use]
    pub fn qualified_name(&self) -> &'a str {
        &self.item().qualified_name
    }

    /// Modifier set.
    #[must_use]
    pub fn modifiers(&self) -> &'a Modifiers {
        &self.item().modifiers
    }

    /// Declared type, if the kind carries one.
    #[must_use]
    pub fn item_type(&self) -> Option<&'a TypeItem> {
        self.item().item_type.as_ref()
    }

    /// Whether the item participates in emitted output.
    #[must_use]
    pub fn emit(&self) -> bool {
        self.item().emit
    }

    /// Whether the item is hidden.
    #[must_use]
    pub fn hidden(&self) -> bool {
        self.item().hidden
    }

    /// Whether the item or, for a parameter, its owning method is deprecated.
    #[must_use]
    pub fn effectively_deprecated(&self) -> bool {
        if self.item().deprecated {
            return true;
        }
        self.kind() == ItemKind::Parameter
            && self.parent().is_some_and(|p| p.item().deprecated)
    }

    /// Containing item, if any.
    #[must_use]
    pub fn parent(&self) -> Option<ItemHandle<'a>> {
        self.item().parent.map(|id| self.codebase.handle(id))
    }

    /// Children in source declaration order.
    pub fn children(&self) -> impl Iterator<Item = ItemHandle<'a>> + '_ {
        let codebase = self.codebase;
        self.item().children.iter().map(move |id| codebase.handle(*id))
    }

    fn children_of_kind(&self, kind: ItemKind) -> impl Iterator<Item = ItemHandle<'a>> + '_ {
        self.children().filter(move |c| c.kind() == kind)
    }

    /// Methods declared on a class, in source order.
    pub fn methods(&self) -> impl Iterator<Item = ItemHandle<'a>> + '_ {
        self.children_of_kind(ItemKind::Method)
    }

    /// Constructors declared on a class, in source order.
    pub fn constructors(&self) -> impl Iterator<Item = ItemHandle<'a>> + '_ {
        self.children_of_kind(ItemKind::Constructor)
    }

    /// Fields declared on a class, in source order.
    pub fn fields(&self) -> impl Iterator<Item = ItemHandle<'a>> + '_ {
        self.children_of_kind(ItemKind::Field)
    }

    /// Nested classes, in source order.
    pub fn nested_classes(&self) -> impl Iterator<Item = ItemHandle<'a>> + '_ {
        self.children_of_kind(ItemKind::Class)
    }

    /// Parameters of a method or constructor, in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = ItemHandle<'a>> + '_ {
        self.children_of_kind(ItemKind::Parameter)
    }

    /// Parameter position, for parameter items.
    #[must_use]
    pub fn parameter_index(&self) -> Option<usize> {
        match self.item().detail {
            ItemDetail::Parameter { index } => Some(index),
            _ => None,
        }
    }

    /// Class flavor, for class items.
    #[must_use]
    pub fn class_kind(&self) -> Option<ClassKind> {
        match self.item().detail {
            ItemDetail::Class { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Resolved superclass, for class items. Unresolvable names yield `None`.
    #[must_use]
    pub fn super_class(&self) -> Option<ItemHandle<'a>> {
        match &self.item().detail {
            ItemDetail::Class {
                super_class: Some(name),
                ..
            } => self.codebase.find_class(name),
            _ => None,
        }
    }

    /// Declared superclass name, resolved or not.
    #[must_use]
    pub fn super_class_name(&self) -> Option<&'a str> {
        match &self.item().detail {
            ItemDetail::Class { super_class, .. } => super_class.as_deref(),
            _ => None,
        }
    }

    /// Resolved implemented interfaces, for class items. Unresolvable
    /// interface names are silently skipped.
    #[must_use]
    pub fn interfaces(&self) -> Vec<ItemHandle<'a>> {
        match &self.item().detail {
            ItemDetail::Class { interfaces, .. } => interfaces
                .iter()
                .filter_map(|name| self.codebase.find_class(name))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Declared interface names, resolved or not.
    #[must_use]
    pub fn interface_names(&self) -> &'a [String] {
        match &self.item().detail {
            ItemDetail::Class { interfaces, .. } => interfaces,
            _ => &[],
        }
    }

    /// Declared thrown exception names, for methods and constructors.
    #[must_use]
    pub fn throws(&self) -> &'a [String] {
        match &self.item().detail {
            ItemDetail::Method { throws } => throws,
            _ => &[],
        }
    }

    /// Constant value, for fields.
    #[must_use]
    pub fn constant_value(&self) -> Option<&'a ConstantValue> {
        match &self.item().detail {
            ItemDetail::Field { constant } => constant.as_ref(),
            _ => None,
        }
    }

    /// Whether this class or any of its supertypes implements the given
    /// interface or extends the given class.
    #[must_use]
    pub fn extends_or_implements(&self, qualified_name: &str) -> bool {
        if self.qualified_name() == qualified_name {
            return true;
        }
        if self.super_class_name() == Some(qualified_name)
            || self.interface_names().iter().any(|i| i == qualified_name)
        {
            return true;
        }
        if let Some(sup) = self.super_class() {
            if sup.extends_or_implements(qualified_name) {
                return true;
            }
        }
        self.interfaces()
            .iter()
            .any(|i| i.extends_or_implements(qualified_name))
    }

    /// Diagnostic description, e.g. `method android.app.Foo.getX()`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind() {
            ItemKind::Method | ItemKind::Constructor => {
                let params: Vec<String> = self
                    .parameters()
                    .filter_map(|p| p.item_type().map(|t| t.to_string()))
                    .collect();
                format!(
                    "{} {}({})",
                    self.kind().label(),
                    self.qualified_name(),
                    params.join(", ")
                )
            }
            kind => format!("{} {}", kind.label(), self.qualified_name()),
        }
    }
}

impl fmt::Debug for ItemHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemHandle({})", self.describe())
    }
}

/// Builds a well-formed [`Codebase`].
///
/// Front-ends construct the arena through this builder; tests use it to set
/// up small synthetic codebases. Parent links, qualified names, parameter
/// indices and the class index are maintained by the builder so they cannot
/// drift out of sync.
#[derive(Debug)]
pub struct CodebaseBuilder {
    codebase: Codebase,
}

impl CodebaseBuilder {
    /// Starts a new codebase with a description of its origin.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            codebase: Codebase {
                description: description.into(),
                items: Vec::new(),
                packages: Vec::new(),
                class_index: HashMap::new(),
                pre_filtered: false,
            },
        }
    }

    /// Marks the codebase as already visibility-filtered.
    #[must_use]
    pub fn pre_filtered(mut self, pre_filtered: bool) -> Self {
        self.codebase.pre_filtered = pre_filtered;
        self
    }

    fn push(
        &mut self,
        parent: Option<ItemId>,
        kind: ItemKind,
        name: &str,
        qualified_name: String,
        item_type: Option<TypeItem>,
        detail: ItemDetail,
    ) -> ItemId {
        let id = ItemId(self.codebase.items.len());
        self.codebase.items.push(Item {
            id,
            parent,
            children: Vec::new(),
            kind,
            name: name.to_string(),
            qualified_name,
            modifiers: Modifiers::default(),
            item_type,
            annotations: Vec::new(),
            emit: true,
            hidden: false,
            originally_hidden: false,
            deprecated: false,
            synthetic: false,
            documented: false,
            detail,
        });
        if let Some(parent) = parent {
            self.codebase.items[parent.0].children.push(id);
        }
        id
    }

    fn qualify(&self, parent: ItemId, name: &str) -> String {
        let parent_qn = &self.codebase.items[parent.0].qualified_name;
        if parent_qn.is_empty() {
            name.to_string()
        } else {
            format!("{parent_qn}.{name}")
        }
    }

    /// Adds a root package.
    pub fn package(&mut self, name: &str) -> ItemId {
        let id = self.push(
            None,
            ItemKind::Package,
            name,
            name.to_string(),
            None,
            ItemDetail::Package,
        );
        self.codebase.packages.push(id);
        id
    }

    /// Adds a class (or nested class) under a package or class.
    pub fn class(&mut self, parent: ItemId, name: &str) -> ItemId {
        self.class_of_kind(parent, name, ClassKind::Class)
    }

    /// Adds an interface under a package or class.
    pub fn interface(&mut self, parent: ItemId, name: &str) -> ItemId {
        self.class_of_kind(parent, name, ClassKind::Interface)
    }

    /// Adds a class item of the given flavor.
    pub fn class_of_kind(&mut self, parent: ItemId, name: &str, kind: ClassKind) -> ItemId {
        let qualified = self.qualify(parent, name);
        let id = self.push(
            Some(parent),
            ItemKind::Class,
            name,
            qualified.clone(),
            None,
            ItemDetail::Class {
                kind,
                super_class: None,
                interfaces: Vec::new(),
            },
        );
        self.codebase.class_index.insert(qualified, id);
        id
    }

    /// Adds a method to a class.
    pub fn method(&mut self, class: ItemId, name: &str, returns: TypeItem) -> ItemId {
        let qualified = self.qualify(class, name);
        self.push(
            Some(class),
            ItemKind::Method,
            name,
            qualified,
            Some(returns),
            ItemDetail::Method { throws: Vec::new() },
        )
    }

    /// Adds a constructor to a class.
    pub fn constructor(&mut self, class: ItemId) -> ItemId {
        let name = self.codebase.items[class.0].name.clone();
        let qualified = self.qualify(class, &name);
        self.push(
            Some(class),
            ItemKind::Constructor,
            &name,
            qualified,
            None,
            ItemDetail::Method { throws: Vec::new() },
        )
    }

    /// Adds a field to a class.
    pub fn field(&mut self, class: ItemId, name: &str, field_type: TypeItem) -> ItemId {
        let qualified = self.qualify(class, name);
        self.push(
            Some(class),
            ItemKind::Field,
            name,
            qualified,
            Some(field_type),
            ItemDetail::Field { constant: None },
        )
    }

    /// Adds a property to a class.
    pub fn property(&mut self, class: ItemId, name: &str, property_type: TypeItem) -> ItemId {
        let qualified = self.qualify(class, name);
        self.push(
            Some(class),
            ItemKind::Property,
            name,
            qualified,
            Some(property_type),
            ItemDetail::Property,
        )
    }

    /// Appends a parameter to a method or constructor.
    pub fn parameter(&mut self, method: ItemId, name: &str, parameter_type: TypeItem) -> ItemId {
        let index = self.codebase.items[method.0]
            .children
            .iter()
            .filter(|c| self.codebase.items[c.0].kind == ItemKind::Parameter)
            .count();
        let qualified = self.qualify(method, name);
        self.push(
            Some(method),
            ItemKind::Parameter,
            name,
            qualified,
            Some(parameter_type),
            ItemDetail::Parameter { index },
        )
    }

    /// Replaces the modifiers of an item.
    pub fn set_modifiers(&mut self, id: ItemId, modifiers: Modifiers) {
        self.codebase.items[id.0].modifiers = modifiers;
    }

    /// Mutable access to the modifiers of an item.
    pub fn modifiers_mut(&mut self, id: ItemId) -> &mut Modifiers {
        &mut self.codebase.items[id.0].modifiers
    }

    /// Marks an item deprecated.
    pub fn set_deprecated(&mut self, id: ItemId, deprecated: bool) {
        self.codebase.items[id.0].deprecated = deprecated;
    }

    /// Marks an item hidden.
    pub fn set_hidden(&mut self, id: ItemId, hidden: bool) {
        self.codebase.items[id.0].hidden = hidden;
        self.codebase.items[id.0].originally_hidden = hidden;
    }

    /// Overrides the emit flag of an item.
    pub fn set_emit(&mut self, id: ItemId, emit: bool) {
        self.codebase.items[id.0].emit = emit;
    }

    /// Marks an item synthetic.
    pub fn set_synthetic(&mut self, id: ItemId, synthetic: bool) {
        self.codebase.items[id.0].synthetic = synthetic;
    }

    /// Marks an item as documented.
    pub fn set_documented(&mut self, id: ItemId, documented: bool) {
        self.codebase.items[id.0].documented = documented;
    }

    /// Sets the annotations present on an item.
    pub fn set_annotations(&mut self, id: ItemId, annotations: Vec<String>) {
        self.codebase.items[id.0].annotations = annotations;
    }

    /// Sets the superclass of a class.
    pub fn set_super_class(&mut self, class: ItemId, super_class: &str) {
        if let ItemDetail::Class { super_class: sc, .. } = &mut self.codebase.items[class.0].detail
        {
            *sc = Some(super_class.to_string());
        }
    }

    /// Adds an implemented interface to a class.
    pub fn add_interface(&mut self, class: ItemId, interface: &str) {
        if let ItemDetail::Class { interfaces, .. } = &mut self.codebase.items[class.0].detail {
            interfaces.push(interface.to_string());
        }
    }

    /// Sets the declared throws list of a method or constructor.
    pub fn set_throws(&mut self, method: ItemId, throws: Vec<String>) {
        if let ItemDetail::Method { throws: t } = &mut self.codebase.items[method.0].detail {
            *t = throws;
        }
    }

    /// Sets the constant value of a field.
    pub fn set_constant(&mut self, field: ItemId, value: ConstantValue) {
        if let ItemDetail::Field { constant } = &mut self.codebase.items[field.0].detail {
            *constant = Some(value);
        }
    }

    /// Finalizes the codebase, computing the default `emit` flags.
    ///
    /// An item is emitted when neither it nor any ancestor is hidden and its
    /// own visibility is part of the API surface, unless the flag was
    /// explicitly overridden.
    #[must_use]
    pub fn build(mut self) -> Codebase {
        let ids: Vec<ItemId> = self.codebase.packages.clone();
        for id in ids {
            self.finalize_emit(id, false);
        }
        self.codebase
    }

    fn finalize_emit(&mut self, id: ItemId, ancestor_hidden: bool) {
        let hidden = ancestor_hidden || self.codebase.items[id.0].hidden;
        let visible = match self.codebase.items[id.0].kind {
            ItemKind::Package => true,
            _ => self.codebase.items[id.0].modifiers.visibility.is_api_surface(),
        };
        if hidden || !visible {
            self.codebase.items[id.0].emit = false;
        }
        let children = self.codebase.items[id.0].children.clone();
        for child in children {
            self.finalize_emit(child, hidden);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_wires_parents_and_qualified_names() {
        let mut cb = CodebaseBuilder::new("test");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Foo");
        let m = cb.method(cls, "bar", TypeItem::void());
        let p = cb.parameter(m, "value", TypeItem::new("int"));
        let codebase = cb.build();

        let method = codebase.handle(m);
        assert_eq!(method.qualified_name(), "android.pkg.Foo.bar");
        assert_eq!(method.parent().map(|c| c.id()), Some(cls));
        assert_eq!(codebase.handle(p).parameter_index(), Some(0));
        assert_eq!(
            codebase.find_class("android.pkg.Foo").map(|c| c.id()),
            Some(cls)
        );
    }

    #[test]
    fn hidden_class_suppresses_emit_recursively() {
        let mut cb = CodebaseBuilder::new("test");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Hidden");
        let m = cb.method(cls, "bar", TypeItem::void());
        cb.set_hidden(cls, true);
        let codebase = cb.build();

        assert!(!codebase.handle(cls).emit());
        assert!(!codebase.handle(m).emit());
    }

    #[test]
    fn private_member_not_emitted() {
        let mut cb = CodebaseBuilder::new("test");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Foo");
        let m = cb.method(cls, "internalDetail", TypeItem::void());
        cb.modifiers_mut(m).visibility = Visibility::Private;
        let codebase = cb.build();

        assert!(codebase.handle(cls).emit());
        assert!(!codebase.handle(m).emit());
    }

    #[test]
    fn varargs_erases_like_array() {
        let varargs = TypeItem::new("java.lang.String").as_varargs();
        let array = TypeItem::new("java.lang.String").array(1);
        assert_eq!(varargs.erased_signature(), array.erased_signature());
        assert_eq!(varargs.to_string(), "java.lang.String...");
    }

    #[test]
    fn coroutine_package_normalized() {
        let ty = TypeItem::new("kotlin.coroutines.experimental.Continuation");
        assert_eq!(ty.normalized_name(), "kotlin.coroutines.Continuation");
    }

    #[test]
    fn parameter_of_deprecated_method_is_effectively_deprecated() {
        let mut cb = CodebaseBuilder::new("test");
        let pkg = cb.package("android.pkg");
        let cls = cb.class(pkg, "Foo");
        let m = cb.method(cls, "old", TypeItem::void());
        let p = cb.parameter(m, "value", TypeItem::new("int"));
        cb.set_deprecated(m, true);
        let codebase = cb.build();

        assert!(codebase.handle(p).effectively_deprecated());
        assert!(!codebase.handle(cls).effectively_deprecated());
    }

    #[test]
    fn extends_or_implements_walks_supertypes() {
        let mut cb = CodebaseBuilder::new("test");
        let pkg = cb.package("android.pkg");
        let base = cb.class(pkg, "Base");
        cb.add_interface(base, "java.lang.AutoCloseable");
        let sub = cb.class(pkg, "Sub");
        cb.set_super_class(sub, "android.pkg.Base");
        let codebase = cb.build();

        assert!(codebase
            .handle(sub)
            .extends_or_implements("java.lang.AutoCloseable"));
        assert!(!codebase
            .handle(base)
            .extends_or_implements("java.io.Closeable"));
    }
}
