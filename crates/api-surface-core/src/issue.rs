//! Issue taxonomy for API lint.
//!
//! Rules select *which* [`Issue`] applies; they never decide severity. That
//! is resolved by the reporting side through an
//! [`IssueConfiguration`](crate::reporter::IssueConfiguration), so baselines
//! and per-project overrides stay out of rule logic.

use serde::{Deserialize, Serialize};

/// Severity attached to a reported issue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suppressed entirely.
    Hidden,
    /// Advisory; surfaced but never fails a run.
    Lint,
    /// Should be addressed.
    Warning,
    /// Must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hidden => write!(f, "hidden"),
            Self::Lint => write!(f, "lint"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

macro_rules! issues {
    ($( $variant:ident, $name:literal, $code:literal, $severity:ident; )+) => {
        /// Stable identifier of an API lint finding.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
        )]
        #[serde(rename_all = "kebab-case")]
        pub enum Issue {
            $(
                #[doc = concat!("`", $name, "` (", $code, ")")]
                $variant,
            )+
        }

        impl Issue {
            /// Every issue id, in catalog order.
            pub const ALL: &'static [Issue] = &[ $( Issue::$variant, )+ ];

            /// Kebab-case name of the issue.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self { $( Self::$variant => $name, )+ }
            }

            /// Short code of the issue (e.g. `AS013`).
            #[must_use]
            pub fn code(self) -> &'static str {
                match self { $( Self::$variant => $code, )+ }
            }

            /// Severity applied when no override is configured.
            #[must_use]
            pub fn default_severity(self) -> Severity {
                match self { $( Self::$variant => Severity::$severity, )+ }
            }

            /// Looks an issue up by its kebab-case name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

issues! {
    StartWithLower, "start-with-lower", "AS001", Error;
    StartWithUpper, "start-with-upper", "AS002", Error;
    EndsWithImpl, "ends-with-impl", "AS003", Error;
    AcronymName, "acronym-name", "AS004", Warning;
    AllUpper, "all-upper", "AS005", Error;
    OverlappingConstants, "overlapping-constants", "AS006", Warning;
    MinMaxConstant, "min-max-constant", "AS007", Warning;
    GetterSetterNames, "getter-setter-names", "AS008", Error;
    EqualsAndHashCode, "equals-and-hash-code", "AS009", Error;
    PairedRegistration, "paired-registration", "AS010", Error;
    RegistrationName, "registration-name", "AS011", Error;
    TopLevelBuilder, "top-level-builder", "AS012", Warning;
    StaticFinalBuilder, "static-final-builder", "AS013", Warning;
    MissingBuildMethod, "missing-build-method", "AS014", Warning;
    SetterReturnsThis, "setter-returns-this", "AS015", Warning;
    ContextFirst, "context-first", "AS016", Error;
    ListenerLast, "listener-last", "AS017", Warning;
    ConcreteCollection, "concrete-collection", "AS018", Error;
    AutoBoxing, "auto-boxing", "AS019", Error;
    NoByteOrShort, "no-byte-or-short", "AS020", Warning;
    NullableCollection, "nullable-collection", "AS021", Warning;
    UseIcu, "use-icu", "AS022", Warning;
    BadFuture, "bad-future", "AS023", Error;
    UseParcelFileDescriptor, "use-parcel-file-descriptor", "AS024", Error;
    GenericException, "generic-exception", "AS025", Error;
    BannedThrow, "banned-throw", "AS026", Error;
    KotlinOperator, "kotlin-operator", "AS027", Lint;
    StaticUtils, "static-utils", "AS028", Error;
    SingletonConstructor, "singleton-constructor", "AS029", Error;
    ManagerConstructor, "manager-constructor", "AS030", Error;
    AbstractInner, "abstract-inner", "AS031", Warning;
    EnumClass, "enum-class", "AS032", Error;
    NotCloseable, "not-closeable", "AS033", Warning;
    VisiblySynchronized, "visibly-synchronized", "AS034", Error;
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_and_names_are_unique() {
        let mut names = HashSet::new();
        let mut codes = HashSet::new();
        for issue in Issue::ALL {
            assert!(names.insert(issue.name()), "duplicate name {}", issue.name());
            assert!(codes.insert(issue.code()), "duplicate code {}", issue.code());
        }
    }

    #[test]
    fn from_name_round_trips() {
        for issue in Issue::ALL {
            assert_eq!(Issue::from_name(issue.name()), Some(*issue));
        }
        assert_eq!(Issue::from_name("no-such-issue"), None);
    }

    #[test]
    fn severity_order() {
        assert!(Severity::Hidden < Severity::Lint);
        assert!(Severity::Lint < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }
}
