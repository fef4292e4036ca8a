//! Serde DTOs for the signature-JSON format.
//!
//! Deliberately permissive: defaults everywhere, validation happens in the
//! loader where contextual error messages can be produced.

use serde::{Deserialize, Serialize};

/// Root of a signature file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodebaseDto {
    /// Description of where the surface came from.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether visibility filtering already happened upstream.
    #[serde(default)]
    pub pre_filtered: bool,
    /// Root packages.
    #[serde(default)]
    pub packages: Vec<PackageDto>,
}

/// One package.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageDto {
    /// Qualified package name.
    pub name: String,
    /// Hidden from the API surface.
    #[serde(default)]
    pub hidden: bool,
    /// Classes in declaration order.
    #[serde(default)]
    pub classes: Vec<ClassDto>,
}

/// One class, interface, enum or annotation type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassDto {
    /// Simple name.
    pub name: String,
    /// `"class"`, `"interface"`, `"enum"` or `"annotation"`.
    #[serde(default)]
    pub kind: Option<String>,
    /// Qualified superclass name.
    #[serde(default)]
    pub extends: Option<String>,
    /// Qualified implemented-interface names.
    #[serde(default)]
    pub implements: Vec<String>,
    /// Modifier set.
    #[serde(default)]
    pub modifiers: ModifiersDto,
    /// Deprecated marker.
    #[serde(default)]
    pub deprecated: bool,
    /// Hidden marker.
    #[serde(default)]
    pub hidden: bool,
    /// Annotation qualified names.
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Constructors in declaration order.
    #[serde(default)]
    pub constructors: Vec<MethodDto>,
    /// Methods in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodDto>,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDto>,
    /// Properties in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyDto>,
    /// Nested classes in declaration order.
    #[serde(default)]
    pub classes: Vec<ClassDto>,
}

/// One method or constructor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodDto {
    /// Simple name; ignored for constructors.
    #[serde(default)]
    pub name: String,
    /// Return type; absent means `void` (and always absent on constructors).
    #[serde(default)]
    pub returns: Option<TypeDto>,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterDto>,
    /// Declared thrown exception names.
    #[serde(default)]
    pub throws: Vec<String>,
    /// Modifier set.
    #[serde(default)]
    pub modifiers: ModifiersDto,
    /// Deprecated marker.
    #[serde(default)]
    pub deprecated: bool,
    /// Hidden marker.
    #[serde(default)]
    pub hidden: bool,
    /// Annotation qualified names.
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// One field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldDto {
    /// Simple name.
    pub name: String,
    /// Field type.
    #[serde(rename = "type", default)]
    pub field_type: TypeDto,
    /// Compile-time constant value, if known.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    /// Modifier set.
    #[serde(default)]
    pub modifiers: ModifiersDto,
    /// Deprecated marker.
    #[serde(default)]
    pub deprecated: bool,
    /// Hidden marker.
    #[serde(default)]
    pub hidden: bool,
    /// Annotation qualified names.
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// One Kotlin property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyDto {
    /// Simple name.
    pub name: String,
    /// Property type.
    #[serde(rename = "type", default)]
    pub property_type: TypeDto,
    /// Modifier set.
    #[serde(default)]
    pub modifiers: ModifiersDto,
    /// Deprecated marker.
    #[serde(default)]
    pub deprecated: bool,
    /// Hidden marker.
    #[serde(default)]
    pub hidden: bool,
}

/// One parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterDto {
    /// Parameter name.
    #[serde(default)]
    pub name: String,
    /// Parameter type.
    #[serde(rename = "type", default)]
    pub parameter_type: TypeDto,
}

/// A type reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeDto {
    /// Qualified name of the raw type.
    pub name: String,
    /// Type arguments.
    #[serde(default)]
    pub arguments: Vec<TypeDto>,
    /// Array dimensions.
    #[serde(default)]
    pub array: u8,
    /// Varargs last dimension.
    #[serde(default)]
    pub varargs: bool,
    /// `true` nullable, `false` non-null, absent unknown.
    #[serde(default)]
    pub nullable: Option<bool>,
}

/// Modifier set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModifiersDto {
    /// `"public"`, `"protected"`, `"internal"`, `"package"` or `"private"`.
    #[serde(default)]
    pub visibility: Option<String>,
    /// `static`.
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// `final`.
    #[serde(default, rename = "final")]
    pub is_final: bool,
    /// `abstract`.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Java `default` interface method.
    #[serde(default, rename = "default")]
    pub is_default: bool,
    /// `synchronized` visible in the signature.
    #[serde(default, rename = "synchronized")]
    pub is_synchronized: bool,
    /// Kotlin `operator`.
    #[serde(default, rename = "operator")]
    pub is_operator: bool,
}
