//! Pure derivation of the visible collection from the base collection and
//! the current criteria.

/// Filter criteria for one entity kind: a free-text search plus zero or more
/// categorical fields. Empty fields are inactive.
pub trait FilterCriteria: Default + Clone + Send + Sync {
    fn search(&self) -> &str;
}

pub trait Filterable {
    type Criteria: FilterCriteria;

    /// Fields the free-text search looks into.
    fn text_fields(&self) -> Vec<&str>;

    /// Exact-match checks for every categorical field of the criteria.
    fn matches_categories(&self, criteria: &Self::Criteria) -> bool;
}

/// An empty filter value matches everything.
pub fn matches_category(filter: &str, value: &str) -> bool {
    filter.is_empty() || filter == value
}

/// Case-insensitive substring match against any designated field.
pub fn matches_text<E: Filterable>(entity: &E, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    entity
        .text_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_by_text<E: Filterable + Clone>(items: &[E], criteria: &E::Criteria) -> Vec<E> {
    items
        .iter()
        .filter(|item| matches_text(*item, criteria.search()))
        .cloned()
        .collect()
}

pub fn filter_by_categories<E: Filterable + Clone>(
    items: &[E],
    criteria: &E::Criteria,
) -> Vec<E> {
    items
        .iter()
        .filter(|item| item.matches_categories(criteria))
        .cloned()
        .collect()
}

/// Free-text stage, then the categorical stage; all predicates ANDed.
pub fn visible_items<E: Filterable + Clone>(base: &[E], criteria: &E::Criteria) -> Vec<E> {
    filter_by_categories(&filter_by_text(base, criteria), criteria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Documento, DocumentoFilter, Personal, PersonalFilter};

    fn documento(id: i32, nombre: &str, tipo: &str, proyecto: &str, creado_por: &str) -> Documento {
        Documento {
            id: Some(id),
            nombre: nombre.to_string(),
            tipo: tipo.to_string(),
            proyecto: proyecto.to_string(),
            version: "v1.0".to_string(),
            estado: "Borrador".to_string(),
            creado_por: creado_por.to_string(),
        }
    }

    fn sample() -> Vec<Documento> {
        vec![
            documento(1, "Contrato Ana", "Contrato", "Proyecto Alpha", "Pedro"),
            documento(2, "Plano B", "Plano", "Proyecto Beta", "Ana López"),
            documento(3, "Informe mensual", "Informe", "Proyecto Alpha", "Luis"),
            documento(4, "Contrato marco", "Contrato", "Proyecto Beta", "Marta"),
        ]
    }

    #[test]
    fn test_search_matches_name_or_creator() {
        let base = vec![
            documento(1, "Contrato Ana", "Contrato", "Proyecto Alpha", "Pedro"),
            documento(2, "Plano B", "Plano", "Proyecto Beta", "Ana López"),
        ];
        let criteria = DocumentoFilter {
            search: "ana".into(),
            ..Default::default()
        };
        assert_eq!(visible_items(&base, &criteria), base);
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let base = sample();
        assert_eq!(visible_items(&base, &DocumentoFilter::default()), base);
    }

    #[test]
    fn test_categorical_filters_are_anded() {
        let criteria = DocumentoFilter {
            tipo: "Contrato".into(),
            proyecto: "Proyecto Beta".into(),
            ..Default::default()
        };
        let ids: Vec<_> = visible_items(&sample(), &criteria)
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![Some(4)]);
    }

    #[test]
    fn test_stage_order_does_not_matter() {
        let base = sample();
        let cases = [
            DocumentoFilter::default(),
            DocumentoFilter {
                search: "contrato".into(),
                ..Default::default()
            },
            DocumentoFilter {
                search: "a".into(),
                proyecto: "Proyecto Alpha".into(),
                ..Default::default()
            },
            DocumentoFilter {
                search: "LUIS".into(),
                tipo: "Informe".into(),
                estado: "Borrador".into(),
                ..Default::default()
            },
            DocumentoFilter {
                search: "zzz".into(),
                tipo: "Plano".into(),
                ..Default::default()
            },
        ];

        for criteria in cases {
            let text_first = filter_by_categories(&filter_by_text(&base, &criteria), &criteria);
            let categories_first = filter_by_text(&filter_by_categories(&base, &criteria), &criteria);
            assert_eq!(text_first, categories_first, "criteria: {criteria:?}");
        }
    }

    #[test]
    fn test_personnel_search_uses_name_and_role() {
        let base = vec![
            Personal {
                id: Some(1),
                nombre_completo: "Ana López".into(),
                rol: "Ingeniera".into(),
                email: "ana@example.org".into(),
                estado: "Disponible".into(),
                ..Default::default()
            },
            Personal {
                id: Some(2),
                nombre_completo: "Luis Pérez".into(),
                rol: "Técnico".into(),
                email: "ingenieria@example.org".into(),
                estado: "Asignado".into(),
                ..Default::default()
            },
        ];

        let criteria = PersonalFilter {
            search: "ingen".into(),
            ..Default::default()
        };
        let ids: Vec<_> = visible_items(&base, &criteria).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(1)]);

        let criteria = PersonalFilter {
            estado: "Asignado".into(),
            ..Default::default()
        };
        let ids: Vec<_> = visible_items(&base, &criteria).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(2)]);
    }
}
