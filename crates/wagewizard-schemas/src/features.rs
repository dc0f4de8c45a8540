//! Feature schema registry: the fixed set of employee attributes the
//! salary model accepts.
//!
//! The registry is the single source of truth for field kinds, enumerated
//! domains, and default values. No other component may hardcode a domain:
//! the form layer initializes from the defaults here, choice surfaces
//! offer exactly the domains here, and the request payload carries
//! exactly the names here.
//!
//! Registry order is significant — it is the declaration order of the
//! input form and is preserved through `FormState::to_request()` and
//! choice listings.

/// Classification of one feature field.
///
/// A field is enumerated if and only if it carries a closed domain of
/// legal string tokens; all remaining fields are numeric. The
/// classification is fixed at declaration and never derived from values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Accepts any value that parses as a non-negative real number.
    /// No upper bound is enforced (documented limitation).
    Numeric,
    /// Restricted to an exact closed list of string tokens, in display
    /// order.
    Enumerated(&'static [&'static str]),
}

/// One entry of the feature schema: a uniquely named employee attribute
/// with its kind and initial value.
#[derive(Copy, Clone, Debug)]
pub struct FeatureField {
    /// Unique key, also the JSON key in the prediction request body.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Initial raw value. For enumerated fields, always a domain member.
    /// For numeric fields, a non-negative number or the empty string
    /// (an empty numeric field is submitted verbatim; the service owns
    /// rejecting it).
    pub default: &'static str,
}

impl FeatureField {
    /// Returns the closed domain for enumerated fields, in registry
    /// order, or `None` for numeric fields. Choice surfaces must offer
    /// exactly these tokens and never free text.
    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self.kind {
            FieldKind::Numeric => None,
            FieldKind::Enumerated(domain) => Some(domain),
        }
    }

    /// Returns `true` if the field is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, FieldKind::Numeric)
    }

    /// Advisory type/range coherence check for a raw value.
    ///
    /// Enumerated: domain membership. Numeric: empty (the accepted
    /// just-initialized state) or a parseable non-negative real. The
    /// form layer does not enforce this at `set_field` time — choice
    /// surfaces already restrict enumerated input, and malformed
    /// numerics are the service's to reject.
    pub fn accepts(&self, raw: &str) -> bool {
        match self.kind {
            FieldKind::Numeric => {
                raw.is_empty()
                    || raw.parse::<f64>().is_ok_and(|v| v >= 0.0 && v.is_finite())
            }
            FieldKind::Enumerated(domain) => domain.contains(&raw),
        }
    }
}

const RATING_1_TO_4: &[&str] = &["1", "2", "3", "4"];

/// The 25 employee attributes, in form declaration order.
///
/// 14 enumerated fields, 11 numeric fields.
static REGISTRY: [FeatureField; 25] = [
    FeatureField {
        name: "Age",
        kind: FieldKind::Numeric,
        default: "",
    },
    FeatureField {
        name: "Attrition",
        kind: FieldKind::Enumerated(&["Yes", "No"]),
        default: "No",
    },
    FeatureField {
        name: "BusinessTravel",
        kind: FieldKind::Enumerated(&["Travel_Rarely", "Travel_Frequently", "Non-Travel"]),
        default: "Travel_Rarely",
    },
    FeatureField {
        name: "Department",
        kind: FieldKind::Enumerated(&["Sales", "Research & Development", "Human Resources"]),
        default: "Research & Development",
    },
    FeatureField {
        name: "Education",
        kind: FieldKind::Numeric,
        default: "3",
    },
    FeatureField {
        name: "EducationField",
        kind: FieldKind::Enumerated(&[
            "Life Sciences",
            "Medical",
            "Marketing",
            "Technical Degree",
            "Human Resources",
            "Other",
        ]),
        default: "Life Sciences",
    },
    FeatureField {
        name: "Gender",
        kind: FieldKind::Enumerated(&["Male", "Female"]),
        default: "Male",
    },
    FeatureField {
        name: "JobInvolvement",
        kind: FieldKind::Enumerated(RATING_1_TO_4),
        default: "3",
    },
    FeatureField {
        name: "JobLevel",
        kind: FieldKind::Enumerated(&["1", "2", "3", "4", "5"]),
        default: "1",
    },
    FeatureField {
        name: "JobRole",
        kind: FieldKind::Enumerated(&[
            "Sales Executive",
            "Research Scientist",
            "Laboratory Technician",
            "Manufacturing Director",
            "Healthcare Representative",
            "Manager",
            "Sales Representative",
            "Research Director",
            "Human Resources",
        ]),
        default: "Sales Executive",
    },
    FeatureField {
        name: "JobSatisfaction",
        kind: FieldKind::Enumerated(RATING_1_TO_4),
        default: "3",
    },
    FeatureField {
        name: "MaritalStatus",
        kind: FieldKind::Enumerated(&["Single", "Married", "Divorced"]),
        default: "Single",
    },
    FeatureField {
        name: "NumCompaniesWorked",
        kind: FieldKind::Numeric,
        default: "1",
    },
    FeatureField {
        name: "OverTime",
        kind: FieldKind::Enumerated(&["Yes", "No"]),
        default: "No",
    },
    FeatureField {
        name: "PercentSalaryHike",
        kind: FieldKind::Numeric,
        default: "11",
    },
    FeatureField {
        name: "PerformanceRating",
        kind: FieldKind::Enumerated(RATING_1_TO_4),
        default: "3",
    },
    FeatureField {
        name: "RelationshipSatisfaction",
        kind: FieldKind::Enumerated(RATING_1_TO_4),
        default: "3",
    },
    FeatureField {
        name: "StandardHours",
        kind: FieldKind::Numeric,
        default: "80",
    },
    FeatureField {
        name: "TotalWorkingYears",
        kind: FieldKind::Numeric,
        default: "3",
    },
    FeatureField {
        name: "TrainingTimesLastYear",
        kind: FieldKind::Numeric,
        default: "2",
    },
    FeatureField {
        name: "WorkLifeBalance",
        kind: FieldKind::Enumerated(RATING_1_TO_4),
        default: "3",
    },
    FeatureField {
        name: "YearsAtCompany",
        kind: FieldKind::Numeric,
        default: "2",
    },
    FeatureField {
        name: "YearsInCurrentRole",
        kind: FieldKind::Numeric,
        default: "2",
    },
    FeatureField {
        name: "YearsSinceLastPromotion",
        kind: FieldKind::Numeric,
        default: "1",
    },
    FeatureField {
        name: "YearsWithCurrManager",
        kind: FieldKind::Numeric,
        default: "2",
    },
];

/// Returns the full registry in form declaration order.
pub fn registry() -> &'static [FeatureField] {
    &REGISTRY
}

/// Looks up a field by name. Returns `None` for names outside the
/// schema — the form layer turns that into a validation error before
/// anything reaches the network.
pub fn field(name: &str) -> Option<&'static FeatureField> {
    REGISTRY.iter().find(|f| f.name == name)
}
