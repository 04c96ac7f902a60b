//! Query-string parsing for the planner page and the SVG chart endpoint.

use household_core::{errors::ValidationError, HouseholdFeature, HouseholdProfile};

/// Inputs carried in a planner query string.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerQuery {
    pub profile: HouseholdProfile,
    /// Set when the user pressed "Generate plan"
    pub generate: bool,
}

fn parse_number(field: &str, value: &str) -> Result<u32, ValidationError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}

impl PlannerQuery {
    /// Parses a raw query string. Accepts camelCase or snake_case keys and
    /// repeated `features` (or `features[]`) keys. Unknown keys are ignored.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let mut query = PlannerQuery {
            profile: HouseholdProfile::default(),
            generate: false,
        };
        let Some(qs) = raw else {
            return Ok(query);
        };
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(qs)
            .map_err(|e| ValidationError::MalformedQuery(e.to_string()))?;

        for (key, value) in pairs {
            match key.as_str() {
                "age" => query.profile.age = parse_number(&key, &value)?,
                "risk" => query.profile.risk = parse_number(&key, &value)?,
                "familyMembers" | "family_members" => {
                    query.profile.family_members = parse_number(&key, &value)?
                }
                "eduPriority" | "edu_priority" => {
                    query.profile.edu_priority = parse_number(&key, &value)?
                }
                "features" | "features[]" => {
                    if !value.trim().is_empty() {
                        query
                            .profile
                            .features
                            .insert(value.parse::<HouseholdFeature>()?);
                    }
                }
                "generate" => query.generate = matches!(value.as_str(), "1" | "true" | "on"),
                _ => {}
            }
        }
        Ok(query)
    }
}
