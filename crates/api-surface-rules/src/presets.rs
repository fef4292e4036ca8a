//! Rule presets.

use api_surface_core::ApiRuleBox;

use crate::{
    BuilderConventions, ClassStructure, ConstantConventions, EqualsHashCode, ExceptionPolicy,
    GetterSetterConventions, KotlinOperators, NamingConventions, ParameterOrder,
    RegistrationPairs, TypePolicy,
};

/// Every built-in rule, in catalog order.
#[must_use]
pub fn all_rules() -> Vec<ApiRuleBox> {
    vec![
        Box::new(NamingConventions::new()),
        Box::new(ConstantConventions::new()),
        Box::new(GetterSetterConventions::new()),
        Box::new(EqualsHashCode::new()),
        Box::new(RegistrationPairs::new()),
        Box::new(BuilderConventions::new()),
        Box::new(ParameterOrder::new()),
        Box::new(TypePolicy::new()),
        Box::new(ExceptionPolicy::new()),
        Box::new(KotlinOperators::new()),
        Box::new(ClassStructure::new()),
    ]
}

/// The rules recommended for new API surfaces: everything except the
/// Kotlin-operator advisory.
#[must_use]
pub fn recommended_rules() -> Vec<ApiRuleBox> {
    all_rules()
        .into_iter()
        .filter(|rule| rule.name() != "kotlin-operators")
        .collect()
}
