//! Read-only projections used by the reports page and the RPC facade.

use serde::{Deserialize, Serialize};

use crate::activity::ConservationActivity;
use crate::activity_type::ActivityType;
use crate::conservation_state::ConservationState;
use crate::species::TreeSpecies;
use crate::zone::Zone;

/// A species that has a conservation state, with the state name resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConservationSpeciesInfo {
    pub id: i32,
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub zone_id: Option<i32>,
    pub conservation_state_id: Option<i32>,
    /// Empty when the referenced state is not among the active states
    pub conservation_state: String,
}

impl ConservationSpeciesInfo {
    /// Project a species, resolving its state name by scanning `states`.
    pub fn project(species: &TreeSpecies, states: &[ConservationState]) -> Self {
        let conservation_state = species
            .conservation_state_id
            .and_then(|id| states.iter().find(|state| state.id == id))
            .map(|state| state.name.clone())
            .unwrap_or_default();

        Self {
            id: species.id,
            common_name: species.common_name.clone(),
            scientific_name: species.scientific_name.clone(),
            zone_id: species.zone_id,
            conservation_state_id: species.conservation_state_id,
            conservation_state,
        }
    }
}

/// Simple conservation counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConservationStatistics {
    pub total_active_species: usize,
    pub species_in_conservation: usize,
    pub species_without_conservation_status: usize,
    pub total_conservation_states: usize,
}

impl ConservationStatistics {
    pub fn compute(species: &[TreeSpecies], states: &[ConservationState]) -> Self {
        let in_conservation = species.iter().filter(|s| s.in_conservation()).count();
        Self {
            total_active_species: species.len(),
            species_in_conservation: in_conservation,
            species_without_conservation_status: species.len() - in_conservation,
            total_conservation_states: states.len(),
        }
    }
}

/// Everything the reports dashboard shows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dashboard {
    pub species: Vec<TreeSpecies>,
    pub zones: Vec<Zone>,
    pub activities: Vec<ConservationActivity>,
    pub states: Vec<ConservationState>,
    pub activity_types: Vec<ActivityType>,
    pub statistics: ConservationStatistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(id: i32, name: &str) -> ConservationState {
        ConservationState {
            id,
            name: name.into(),
            description: None,
            active: true,
        }
    }

    fn species(id: i32, name: &str, state_id: Option<i32>) -> TreeSpecies {
        TreeSpecies {
            id,
            conservation_state_id: state_id,
            ..TreeSpecies::new(name)
        }
    }

    #[test]
    fn projection_resolves_state_name() {
        let states = vec![state(1, "Vulnerable"), state(2, "En peligro")];
        let info = ConservationSpeciesInfo::project(&species(7, "Cedro", Some(2)), &states);
        assert_eq!(info.id, 7);
        assert_eq!(info.conservation_state, "En peligro");
    }

    #[test]
    fn projection_leaves_unknown_state_blank() {
        let info = ConservationSpeciesInfo::project(&species(7, "Cedro", Some(9)), &[]);
        assert_eq!(info.conservation_state, "");
        assert_eq!(info.conservation_state_id, Some(9));
    }

    #[test]
    fn statistics_split_species_by_state() {
        let all = vec![
            species(1, "Cedro", Some(1)),
            species(2, "Nogal", None),
            species(3, "Roble", Some(2)),
        ];
        let stats = ConservationStatistics::compute(&all, &[state(1, "A"), state(2, "B")]);
        assert_eq!(
            stats,
            ConservationStatistics {
                total_active_species: 3,
                species_in_conservation: 2,
                species_without_conservation_status: 1,
                total_conservation_states: 2,
            }
        );
    }
}
