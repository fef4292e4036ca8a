//! # api-surface-rules
//!
//! Built-in API design lint rules for api-surface.
//!
//! Each rule is an independent [`ApiRule`](api_surface_core::ApiRule) over
//! the normalized API model; rules share no state and can run in any order.
//!
//! ## Rule families
//!
//! | Rule | Issues | Description |
//! |------|--------|-------------|
//! | `naming-conventions` | AS001-AS004 | Camel-case and acronym naming |
//! | `constant-conventions` | AS005-AS007 | ALL_CAPS constants, flag bit overlap |
//! | `getter-setter-conventions` | AS008 | Getter/setter symmetry |
//! | `equals-hash-code` | AS009 | equals/hashCode pairing |
//! | `registration-pairs` | AS010-AS011 | add/remove and register/unregister pairs |
//! | `builder-conventions` | AS012-AS015 | Builder class structure |
//! | `parameter-order` | AS016-AS017 | Context first, listeners last |
//! | `type-policy` | AS018-AS024 | Banned and discouraged signature types |
//! | `exception-policy` | AS025-AS026 | Throws-clause policy |
//! | `kotlin-operators` | AS027 | Kotlin operator convention candidates |
//! | `class-structure` | AS028-AS034 | Managers, singletons, utils, enums |
//!
//! ## Usage
//!
//! ```ignore
//! use api_surface_core::{ApiLint, CollectingReporter};
//! use api_surface_rules::{all_rules, legacy_allowlist};
//!
//! let lint = ApiLint::builder()
//!     .rules(all_rules())
//!     .allowlist(legacy_allowlist())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod allowlist;
mod builders;
mod callbacks;
mod classes;
mod constants;
mod equality;
mod exceptions;
mod getters_setters;
mod naming;
mod operators;
mod params;
mod presets;
mod types;
mod util;

pub use allowlist::legacy_allowlist;
pub use builders::BuilderConventions;
pub use callbacks::RegistrationPairs;
pub use classes::ClassStructure;
pub use constants::ConstantConventions;
pub use equality::EqualsHashCode;
pub use exceptions::ExceptionPolicy;
pub use getters_setters::GetterSetterConventions;
pub use naming::NamingConventions;
pub use operators::KotlinOperators;
pub use params::ParameterOrder;
pub use presets::{all_rules, recommended_rules};
pub use types::TypePolicy;

#[cfg(test)]
pub(crate) mod testkit {
    use api_surface_core::{
        ApiLint, ApiRule, Codebase, CollectingReporter, Issue, Report,
    };

    /// Runs a single rule over a codebase with an empty allowlist.
    pub fn run_rule<R: ApiRule + 'static>(rule: R, codebase: &Codebase) -> Vec<Report> {
        let lint = ApiLint::builder().rule(rule).build();
        let mut reporter = CollectingReporter::new();
        lint.check(codebase, None, &mut reporter, None);
        reporter.into_reports()
    }

    /// The issue ids of the reports, in report order.
    pub fn issues(reports: &[Report]) -> Vec<Issue> {
        reports.iter().map(|r| r.issue).collect()
    }
}
