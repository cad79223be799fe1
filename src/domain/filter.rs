use super::personnel::PersonnelRef;

/// Poste criterion of the grid filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PosteFilter {
    #[default]
    All,
    Exact(String),
}

impl PosteFilter {
    /// `None`, an empty value, or `"all"` select every poste.
    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => PosteFilter::All,
            Some(v) if v.eq_ignore_ascii_case("all") => PosteFilter::All,
            Some(v) => PosteFilter::Exact(v.to_string()),
        }
    }
}

/// Transient filter over the personnel rows. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub poste: PosteFilter,
    pub name: String,
}

impl FilterState {
    pub fn new(poste: Option<&str>, name: Option<&str>) -> Self {
        Self {
            poste: PosteFilter::from_option(poste),
            name: name.unwrap_or_default().trim().to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.poste != PosteFilter::All || !self.name.is_empty()
    }

    pub fn matches(&self, person: &PersonnelRef) -> bool {
        let poste_ok = match &self.poste {
            PosteFilter::All => true,
            PosteFilter::Exact(poste) => person.poste.as_deref() == Some(poste.as_str()),
        };
        let name_ok = self.name.is_empty()
            || person.full_name().to_lowercase().contains(&self.name.to_lowercase());
        poste_ok && name_ok
    }

    /// Rows to display, in the personnel list's order.
    pub fn apply<'a>(&self, personnel: &'a [PersonnelRef]) -> Vec<&'a PersonnelRef> {
        personnel.iter().filter(|person| self.matches(person)).collect()
    }

    /// Human-readable description of the active criteria.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let PosteFilter::Exact(poste) = &self.poste {
            parts.push(format!("Poste : {}", poste));
        }
        if !self.name.is_empty() {
            parts.push(format!("Nom : « {} »", self.name));
        }
        if parts.is_empty() { "Aucun filtre".to_string() } else { parts.join(" | ") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<PersonnelRef> {
        vec![
            PersonnelRef::new("1", "Marie", "Dupont", Some("Éducatrice")),
            PersonnelRef::new("2", "Jean", "Martin", Some("Cuisinier")),
            PersonnelRef::new("3", "Paul", "Bernard", Some("Cuisinier")),
            PersonnelRef::new("4", "Lucie", "Petit", None),
        ]
    }

    #[test]
    fn poste_filter_is_exact() {
        let personnel = staff();
        let filter = FilterState::new(Some("Cuisinier"), None);
        let ids: Vec<&str> = filter.apply(&personnel).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);

        let partial = FilterState::new(Some("Cuisin"), None);
        assert!(partial.apply(&personnel).is_empty());
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let personnel = staff();
        let filter = FilterState::new(None, Some("mar"));
        let names: Vec<String> = filter.apply(&personnel).iter().map(|p| p.full_name()).collect();
        assert_eq!(names, vec!["Marie Dupont", "Jean Martin"]);
    }

    #[test]
    fn name_matches_across_first_and_last_name() {
        let personnel = staff();
        let filter = FilterState::new(None, Some("PAUL BER"));
        assert_eq!(filter.apply(&personnel).len(), 1);
    }

    #[test]
    fn all_keeps_everyone_in_order() {
        let personnel = staff();
        let filter = FilterState::new(Some("all"), Some("  "));
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&personnel).len(), personnel.len());
        assert_eq!(filter.summary(), "Aucun filtre");
    }

    #[test]
    fn summary_lists_active_criteria() {
        let filter = FilterState::new(Some("Cuisinier"), Some("mar"));
        assert_eq!(filter.summary(), "Poste : Cuisinier | Nom : « mar »");
    }
}
