//! Resume analysis data model.
//!
//! Wire names match the JSON contract consumed by the web client, so field
//! names here are part of the public API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub skill_name: String,
    /// Free-text description of the skill (e.g. "programming language").
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Phone number, email address or social handle.
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub education: String,
    #[serde(alias = "scooling")]
    pub institution: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub experience: String,
}

/// Structured data pulled out of a resume by the skill extraction stage.
///
/// `None` and `Some(vec![])` are different answers: the former means the
/// model did not report the section at all, the latter that it found nothing.
/// Both survive a JSON round trip (`null` vs `[]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub all_skills: Vec<Skill>,
    pub all_contacts: Option<Vec<Contact>>,
    pub all_education: Option<Vec<Education>>,
    pub all_experience: Option<Vec<Experience>>,
}

impl ExtractedProfile {
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.all_skills.iter().map(|s| s.skill_name.as_str())
    }
}

/// Gap analysis of a resume against its inferred professional domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub identified_domain: String,
    /// Always within 0..=100; the gap-analysis stage clamps model output.
    pub score: u8,
    pub missing_skills: Vec<String>,
    pub recommended_courses: Vec<String>,
}

/// Final output of the resume pipeline.
///
/// Absent stage results serialize as `{}` rather than `null` so consumers
/// always see two objects; `{}` and `null` both read back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default, with = "empty_object")]
    pub analysis: Option<AnalysisResult>,
    #[serde(default, with = "empty_object")]
    pub extracted_skills: Option<ExtractedProfile>,
}

impl AnalysisReport {
    /// True when neither stage produced anything.
    pub fn is_empty(&self) -> bool {
        self.analysis.is_none() && self.extracted_skills.is_none()
    }
}

mod empty_object {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Object(map) if map.is_empty() => Ok(None),
            other => serde_json::from_value(other)
                .map(Some)
                .map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_profile() -> ExtractedProfile {
        ExtractedProfile {
            all_skills: vec![Skill {
                skill_name: "Rust".to_string(),
                kind: "programming language".to_string(),
            }],
            all_contacts: Some(vec![]),
            all_education: None,
            all_experience: Some(vec![Experience {
                experience: "3 years backend".to_string(),
            }]),
        }
    }

    #[test]
    fn test_empty_report_serializes_as_empty_objects() {
        let value = serde_json::to_value(AnalysisReport::default()).unwrap();
        assert_eq!(value, json!({"analysis": {}, "extracted_skills": {}}));
    }

    #[test]
    fn test_empty_objects_deserialize_to_absent() {
        let report: AnalysisReport =
            serde_json::from_value(json!({"analysis": {}, "extracted_skills": null})).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_missing_keys_deserialize_to_absent() {
        let report: AnalysisReport = serde_json::from_value(json!({})).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_populated_report_keeps_wire_names() {
        let report = AnalysisReport {
            analysis: Some(AnalysisResult {
                identified_domain: "Backend Developer".to_string(),
                score: 72,
                missing_skills: vec!["Kubernetes".to_string()],
                recommended_courses: vec!["CKAD".to_string()],
            }),
            extracted_skills: Some(sample_profile()),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["analysis"]["identified_domain"], "Backend Developer");
        assert_eq!(value["extracted_skills"]["all_skills"][0]["type"], "programming language");
        assert_eq!(value["extracted_skills"]["all_contacts"], json!([]));
        assert_eq!(value["extracted_skills"]["all_education"], json!(null));

        let back: AnalysisReport = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_profile_absent_sections_are_none() {
        let profile: ExtractedProfile = serde_json::from_value(json!({
            "all_skills": [{"skill_name": "SQL", "type": "database"}]
        }))
        .unwrap();
        assert!(profile.all_contacts.is_none());
        assert!(profile.all_education.is_none());
        assert!(profile.all_experience.is_none());
    }

    #[test]
    fn test_education_accepts_legacy_institution_key() {
        let education: Education = serde_json::from_value(json!({
            "education": "BSc Computer Science",
            "scooling": "State University",
            "year": 2019
        }))
        .unwrap();
        assert_eq!(education.institution, "State University");
    }
}
