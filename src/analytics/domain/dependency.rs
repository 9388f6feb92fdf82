use crate::shared::error::AnalyticsError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of relationship between two services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyType {
    Runtime,
    Data,
    Deployment,
    SharedLib,
}

impl FromStr for DependencyType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "runtime" => Ok(DependencyType::Runtime),
            "data" => Ok(DependencyType::Data),
            "deployment" => Ok(DependencyType::Deployment),
            "shared-lib" | "shared_lib" => Ok(DependencyType::SharedLib),
            _ => Err(format!(
                "Invalid dependency type: {}. Please specify 'runtime', 'data', 'deployment' or 'shared-lib'",
                s
            )),
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DependencyType::Runtime => "runtime",
            DependencyType::Data => "data",
            DependencyType::Deployment => "deployment",
            DependencyType::SharedLib => "shared-lib",
        };
        write!(f, "{}", name)
    }
}

/// Directed edge in the service dependency graph
///
/// The graph itself is never materialized; edges are consumed as a flat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDependency {
    pub source_service_id: String,
    pub source_service_name: String,
    pub target_service_id: String,
    pub target_service_name: String,
    pub dependency_type: DependencyType,
    #[serde(default)]
    pub is_critical: bool,
}

impl ServiceDependency {
    /// Checks that the edge can be registered with the backend
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("sourceServiceId", &self.source_service_id),
            ("sourceServiceName", &self.source_service_name),
            ("targetServiceId", &self.target_service_id),
            ("targetServiceName", &self.target_service_name),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AnalyticsError::Validation {
                    message: format!("{} must not be empty", field),
                }
                .into());
            }
        }

        if self.source_service_id == self.target_service_id {
            return Err(AnalyticsError::Validation {
                message: format!(
                    "service '{}' cannot depend on itself",
                    self.source_service_id
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Returns true if this edge runs from `from` to `to`
    pub fn connects(&self, from: &str, to: &str) -> bool {
        self.source_service_id == from && self.target_service_id == to
    }
}

/// Closed loop of service ids as reported by `GET /dependencies/cycles`
///
/// The closing edge runs from the last id back to the first. A trailing
/// repeat of the first id is tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyCycle {
    pub services: Vec<String>,
}

impl DependencyCycle {
    pub fn new(services: Vec<String>) -> Self {
        Self { services }
    }

    /// Distinct service ids in traversal order
    pub fn members(&self) -> &[String] {
        match self.services.as_slice() {
            [first, .., last] if first == last => &self.services[..self.services.len() - 1],
            all => all,
        }
    }

    /// Every directed edge of the loop, including the closing edge
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let members = self.members();
        if members.len() < 2 {
            return members
                .first()
                .map(|only| vec![(only.as_str(), only.as_str())])
                .unwrap_or_default();
        }

        members
            .iter()
            .zip(members.iter().cycle().skip(1))
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members().is_empty()
    }
}

impl fmt::Display for DependencyCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members = self.members();
        match members.first() {
            Some(first) => write!(f, "{} → {}", members.join(" → "), first),
            None => write!(f, "(empty cycle)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(source: &str, target: &str) -> ServiceDependency {
        ServiceDependency {
            source_service_id: source.to_string(),
            source_service_name: source.to_string(),
            target_service_id: target.to_string(),
            target_service_name: target.to_string(),
            dependency_type: DependencyType::Runtime,
            is_critical: false,
        }
    }

    #[test]
    fn test_dependency_type_from_str() {
        assert_eq!(
            DependencyType::from_str("Runtime").unwrap(),
            DependencyType::Runtime
        );
        assert_eq!(
            DependencyType::from_str("shared-lib").unwrap(),
            DependencyType::SharedLib
        );
        assert_eq!(
            DependencyType::from_str("shared_lib").unwrap(),
            DependencyType::SharedLib
        );
        let err = DependencyType::from_str("queue").unwrap_err();
        assert!(err.contains("Invalid dependency type"));
    }

    #[test]
    fn test_service_dependency_camel_case_wire_format() {
        let json = r#"{
            "sourceServiceId": "svc-api",
            "sourceServiceName": "api",
            "targetServiceId": "svc-auth",
            "targetServiceName": "auth",
            "dependencyType": "shared-lib",
            "isCritical": true
        }"#;
        let parsed: ServiceDependency = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.source_service_name, "api");
        assert_eq!(parsed.dependency_type, DependencyType::SharedLib);
        assert!(parsed.is_critical);

        let round = serde_json::to_value(&parsed).unwrap();
        assert_eq!(round["targetServiceId"], "svc-auth");
    }

    #[test]
    fn test_validate_rejects_self_edge() {
        let err = dep("a", "a").validate().unwrap_err();
        assert!(err.to_string().contains("cannot depend on itself"));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut edge = dep("a", "b");
        edge.target_service_name = "  ".to_string();
        let err = edge.validate().unwrap_err();
        assert!(err.to_string().contains("targetServiceName must not be empty"));
    }

    #[test]
    fn test_validate_accepts_regular_edge() {
        assert!(dep("a", "b").validate().is_ok());
    }

    #[test]
    fn test_cycle_edges_include_closing_edge() {
        let cycle = DependencyCycle::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(cycle.edges(), vec![("a", "b"), ("b", "c"), ("c", "a")]);
        assert_eq!(cycle.len(), 3);
    }

    #[test]
    fn test_cycle_tolerates_repeated_first_id() {
        let cycle = DependencyCycle::new(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(cycle.members(), &["a".to_string(), "b".to_string()]);
        assert_eq!(cycle.edges(), vec![("a", "b"), ("b", "a")]);
    }

    #[test]
    fn test_cycle_display() {
        let cycle = DependencyCycle::new(vec!["api".into(), "auth".into()]);
        assert_eq!(cycle.to_string(), "api → auth → api");
        assert_eq!(DependencyCycle::new(vec![]).to_string(), "(empty cycle)");
    }

    #[test]
    fn test_cycle_deserializes_from_plain_array() {
        let cycles: Vec<DependencyCycle> = serde_json::from_str(r#"[["a","b"],["c","d","e"]]"#).unwrap();
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[1].len(), 3);
    }
}
