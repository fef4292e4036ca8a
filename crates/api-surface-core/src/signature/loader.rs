//! DTO → Codebase conversion with validation.

use crate::model::{
    ClassKind, Codebase, CodebaseBuilder, ConstantValue, ItemId, Modifiers, Nullability,
    TypeItem, Visibility,
};

use super::dto::{
    ClassDto, CodebaseDto, FieldDto, MethodDto, ModifiersDto, PackageDto, TypeDto,
};

/// Errors during DTO → Codebase conversion.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Invalid JSON.
    #[error("invalid signature JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An item name is empty.
    #[error("{context}: name must not be empty")]
    EmptyName {
        /// Where the error occurred (e.g. `packages[0].classes[2]`).
        context: String,
    },

    /// Unknown visibility string.
    #[error("{context}: unknown visibility `{value}`, expected: public, protected, internal, package, private")]
    UnknownVisibility {
        /// Where the error occurred.
        context: String,
        /// The invalid value.
        value: String,
    },

    /// Unknown class kind string.
    #[error("{context}: unknown class kind `{value}`, expected: class, interface, enum, annotation")]
    UnknownClassKind {
        /// Where the error occurred.
        context: String,
        /// The invalid value.
        value: String,
    },

    /// A constant value of an unsupported JSON type.
    #[error("{context}: unsupported constant value {value}")]
    BadConstant {
        /// Where the error occurred.
        context: String,
        /// The offending value.
        value: serde_json::Value,
    },
}

/// Parses and loads a signature-JSON string.
///
/// # Errors
///
/// Returns an error on invalid JSON or on the first validation failure.
pub fn load_str(content: &str, description: &str) -> Result<Codebase, LoadError> {
    let dto: CodebaseDto = serde_json::from_str(content)?;
    load(dto, description)
}

/// Converts a parsed [`CodebaseDto`] into a [`Codebase`].
///
/// # Errors
///
/// Returns the first validation error encountered.
pub fn load(dto: CodebaseDto, description: &str) -> Result<Codebase, LoadError> {
    let description = dto.description.as_deref().unwrap_or(description);
    let mut builder = CodebaseBuilder::new(description).pre_filtered(dto.pre_filtered);
    for (i, package) in dto.packages.iter().enumerate() {
        convert_package(&mut builder, package, &format!("packages[{i}]"))?;
    }
    Ok(builder.build())
}

fn convert_package(
    builder: &mut CodebaseBuilder,
    dto: &PackageDto,
    ctx: &str,
) -> Result<(), LoadError> {
    if dto.name.is_empty() {
        return Err(LoadError::EmptyName {
            context: ctx.to_string(),
        });
    }
    let package = builder.package(&dto.name);
    builder.set_hidden(package, dto.hidden);
    for (i, class) in dto.classes.iter().enumerate() {
        convert_class(builder, package, class, &format!("{ctx}.classes[{i}]"))?;
    }
    Ok(())
}

fn convert_class(
    builder: &mut CodebaseBuilder,
    parent: ItemId,
    dto: &ClassDto,
    ctx: &str,
) -> Result<(), LoadError> {
    if dto.name.is_empty() {
        return Err(LoadError::EmptyName {
            context: ctx.to_string(),
        });
    }
    let kind = match dto.kind.as_deref() {
        None | Some("class") => ClassKind::Class,
        Some("interface") => ClassKind::Interface,
        Some("enum") => ClassKind::Enum,
        Some("annotation") => ClassKind::Annotation,
        Some(other) => {
            return Err(LoadError::UnknownClassKind {
                context: ctx.to_string(),
                value: other.to_string(),
            })
        }
    };
    let class = builder.class_of_kind(parent, &dto.name, kind);
    builder.set_modifiers(class, convert_modifiers(&dto.modifiers, ctx)?);
    builder.set_deprecated(class, dto.deprecated);
    builder.set_hidden(class, dto.hidden);
    builder.set_annotations(class, dto.annotations.clone());
    if let Some(extends) = &dto.extends {
        builder.set_super_class(class, extends);
    }
    for interface in &dto.implements {
        builder.add_interface(class, interface);
    }

    for (i, ctor) in dto.constructors.iter().enumerate() {
        let id = builder.constructor(class);
        fill_method(builder, id, ctor, &format!("{ctx}.constructors[{i}]"))?;
    }
    for (i, method) in dto.methods.iter().enumerate() {
        let method_ctx = format!("{ctx}.methods[{i}]");
        if method.name.is_empty() {
            return Err(LoadError::EmptyName {
                context: method_ctx,
            });
        }
        let returns = method
            .returns
            .as_ref()
            .map_or_else(TypeItem::void, convert_type);
        let id = builder.method(class, &method.name, returns);
        fill_method(builder, id, method, &method_ctx)?;
    }
    for (i, field) in dto.fields.iter().enumerate() {
        convert_field(builder, class, field, &format!("{ctx}.fields[{i}]"))?;
    }
    for (i, property) in dto.properties.iter().enumerate() {
        let property_ctx = format!("{ctx}.properties[{i}]");
        if property.name.is_empty() {
            return Err(LoadError::EmptyName {
                context: property_ctx,
            });
        }
        let id = builder.property(class, &property.name, convert_type(&property.property_type));
        builder.set_modifiers(id, convert_modifiers(&property.modifiers, &property_ctx)?);
        builder.set_deprecated(id, property.deprecated);
        builder.set_hidden(id, property.hidden);
    }
    for (i, nested) in dto.classes.iter().enumerate() {
        convert_class(builder, class, nested, &format!("{ctx}.classes[{i}]"))?;
    }
    Ok(())
}

fn fill_method(
    builder: &mut CodebaseBuilder,
    id: ItemId,
    dto: &MethodDto,
    ctx: &str,
) -> Result<(), LoadError> {
    builder.set_modifiers(id, convert_modifiers(&dto.modifiers, ctx)?);
    builder.set_deprecated(id, dto.deprecated);
    builder.set_hidden(id, dto.hidden);
    builder.set_annotations(id, dto.annotations.clone());
    builder.set_throws(id, dto.throws.clone());
    for (i, parameter) in dto.parameters.iter().enumerate() {
        let name = if parameter.name.is_empty() {
            format!("arg{i}")
        } else {
            parameter.name.clone()
        };
        builder.parameter(id, &name, convert_type(&parameter.parameter_type));
    }
    Ok(())
}

fn convert_field(
    builder: &mut CodebaseBuilder,
    class: ItemId,
    dto: &FieldDto,
    ctx: &str,
) -> Result<(), LoadError> {
    if dto.name.is_empty() {
        return Err(LoadError::EmptyName {
            context: ctx.to_string(),
        });
    }
    let id = builder.field(class, &dto.name, convert_type(&dto.field_type));
    builder.set_modifiers(id, convert_modifiers(&dto.modifiers, ctx)?);
    builder.set_deprecated(id, dto.deprecated);
    builder.set_hidden(id, dto.hidden);
    builder.set_annotations(id, dto.annotations.clone());
    if let Some(value) = &dto.value {
        builder.set_constant(id, convert_constant(value, ctx)?);
    }
    Ok(())
}

fn convert_constant(
    value: &serde_json::Value,
    ctx: &str,
) -> Result<ConstantValue, LoadError> {
    use serde_json::Value;
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(ConstantValue::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(ConstantValue::Double(f))
            } else {
                Err(LoadError::BadConstant {
                    context: ctx.to_string(),
                    value: value.clone(),
                })
            }
        }
        Value::Bool(b) => Ok(ConstantValue::Bool(*b)),
        Value::String(s) => Ok(ConstantValue::Str(s.clone())),
        _ => Err(LoadError::BadConstant {
            context: ctx.to_string(),
            value: value.clone(),
        }),
    }
}

fn convert_type(dto: &TypeDto) -> TypeItem {
    let mut ty = TypeItem::new(&dto.name)
        .with_arguments(dto.arguments.iter().map(convert_type).collect())
        .array(dto.array);
    if dto.varargs {
        ty = ty.as_varargs();
    }
    ty.with_nullability(match dto.nullable {
        Some(true) => Nullability::Nullable,
        Some(false) => Nullability::NonNull,
        None => Nullability::Unknown,
    })
}

fn convert_modifiers(dto: &ModifiersDto, ctx: &str) -> Result<Modifiers, LoadError> {
    let visibility = match dto.visibility.as_deref() {
        None | Some("public") => Visibility::Public,
        Some("protected") => Visibility::Protected,
        Some("internal") => Visibility::Internal,
        Some("package") => Visibility::PackagePrivate,
        Some("private") => Visibility::Private,
        Some(other) => {
            return Err(LoadError::UnknownVisibility {
                context: ctx.to_string(),
                value: other.to_string(),
            })
        }
    };
    Ok(Modifiers {
        visibility,
        is_static: dto.is_static,
        is_final: dto.is_final,
        is_abstract: dto.is_abstract,
        is_default: dto.is_default,
        is_synchronized: dto.is_synchronized,
        is_operator: dto.is_operator,
        nullability: Nullability::Unknown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "description": "current.json",
        "packages": [{
            "name": "android.pkg",
            "classes": [{
                "name": "Foo",
                "extends": "java.lang.Object",
                "constructors": [{"modifiers": {"visibility": "public"}}],
                "methods": [{
                    "name": "getName",
                    "returns": {"name": "java.lang.String", "nullable": false},
                    "parameters": []
                }],
                "fields": [{
                    "name": "FLAG_ONE",
                    "type": {"name": "int"},
                    "value": 1,
                    "modifiers": {"static": true, "final": true}
                }]
            }]
        }]
    }"#;

    #[test]
    fn loads_a_complete_fixture() {
        let codebase = load_str(FIXTURE, "fallback").expect("fixture loads");
        assert_eq!(codebase.description(), "current.json");
        let foo = codebase.find_class("android.pkg.Foo").expect("class");
        assert_eq!(foo.super_class_name(), Some("java.lang.Object"));
        assert_eq!(foo.constructors().count(), 1);
        let field = foo.fields().next().expect("field");
        assert_eq!(
            field.constant_value().and_then(|c| c.as_int()),
            Some(1)
        );
        let method = foo.methods().next().expect("method");
        assert_eq!(
            method.item_type().map(|t| t.qualified_name.as_str()),
            Some("java.lang.String")
        );
    }

    #[test]
    fn rejects_empty_class_name() {
        let json = r#"{"packages": [{"name": "pkg", "classes": [{"name": ""}]}]}"#;
        assert!(matches!(
            load_str(json, "test"),
            Err(LoadError::EmptyName { .. })
        ));
    }

    #[test]
    fn rejects_unknown_visibility() {
        let json = r#"{"packages": [{"name": "pkg", "classes": [
            {"name": "Foo", "modifiers": {"visibility": "exported"}}
        ]}]}"#;
        let err = load_str(json, "test").expect_err("must fail");
        assert!(err.to_string().contains("exported"));
    }

    #[test]
    fn rejects_array_constant() {
        let json = r#"{"packages": [{"name": "pkg", "classes": [
            {"name": "Foo", "fields": [{"name": "X", "type": {"name": "int"}, "value": [1]}]}
        ]}]}"#;
        assert!(matches!(
            load_str(json, "test"),
            Err(LoadError::BadConstant { .. })
        ));
    }
}
