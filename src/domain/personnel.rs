use serde::{Deserialize, Serialize};

/// Staff member as published by the personnel service. Read-only for scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelRef {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub poste: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
}

impl PersonnelRef {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        poste: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            poste: poste.map(str::to_string),
            profile_photo_url: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn poste_or_empty(&self) -> &str {
        self.poste.as_deref().unwrap_or("")
    }
}

/// Distinct postes in first-seen order, for the filter choices.
pub fn distinct_postes(personnel: &[PersonnelRef]) -> Vec<String> {
    let mut postes: Vec<String> = Vec::new();
    for poste in personnel.iter().filter_map(|p| p.poste.as_deref()) {
        if !poste.is_empty() && !postes.iter().any(|known| known == poste) {
            postes.push(poste.to_string());
        }
    }
    postes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_record() {
        let raw = r#"{"id":"p1","firstName":"Ana","lastName":"Silva","poste":null,"profilePhotoUrl":"/img/p1.png"}"#;
        let person: PersonnelRef = serde_json::from_str(raw).unwrap();
        assert_eq!(person.full_name(), "Ana Silva");
        assert_eq!(person.poste, None);
        assert_eq!(person.profile_photo_url.as_deref(), Some("/img/p1.png"));
    }

    #[test]
    fn distinct_postes_keep_first_seen_order() {
        let personnel = vec![
            PersonnelRef::new("1", "A", "A", Some("Cuisinier")),
            PersonnelRef::new("2", "B", "B", Some("Veilleur")),
            PersonnelRef::new("3", "C", "C", Some("Cuisinier")),
            PersonnelRef::new("4", "D", "D", None),
        ];
        assert_eq!(distinct_postes(&personnel), vec!["Cuisinier", "Veilleur"]);
    }
}
