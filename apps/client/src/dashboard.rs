//! Figures shown above the personnel list, derived from the fetched base
//! collection rather than from separate requests.

use std::collections::BTreeMap;

use crate::models::{Personal, ESTADO_DISPONIBLE, UNASSIGNED_PROJECT};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersonnelSummary {
    pub total: usize,
    pub available: usize,
}

pub fn personnel_summary(personnel: &[Personal]) -> PersonnelSummary {
    PersonnelSummary {
        total: personnel.len(),
        available: personnel
            .iter()
            .filter(|p| p.estado == ESTADO_DISPONIBLE)
            .count(),
    }
}

/// Groups people by assigned project, unassigned ones included under the
/// sentinel. Keys come out sorted.
pub fn personnel_by_project(personnel: &[Personal]) -> BTreeMap<String, Vec<Personal>> {
    let mut groups: BTreeMap<String, Vec<Personal>> = BTreeMap::new();
    for person in personnel {
        let key = if person.proyecto_asignado.trim().is_empty() {
            UNASSIGNED_PROJECT.to_string()
        } else {
            person.proyecto_asignado.clone()
        };
        groups.entry(key).or_default().push(person.clone());
    }
    groups
}

/// People that can be picked for a project.
pub fn available_for_assignment(personnel: &[Personal]) -> Vec<Personal> {
    personnel
        .iter()
        .filter(|p| p.estado == ESTADO_DISPONIBLE || p.proyecto_asignado == UNASSIGNED_PROJECT)
        .cloned()
        .collect()
}
