//! Report service - read-only projections over the catalogs.

use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use domain::{
    ActivityType, ConservationActivity, ConservationSpeciesInfo, ConservationState,
    ConservationStatistics, Dashboard, TreeSpecies, Zone,
};

use super::CatalogService;

/// Report service trait for dependency injection.
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Active species that have a conservation state
    async fn species_in_conservation(&self) -> AppResult<Vec<ConservationSpeciesInfo>>;

    /// Active species in the given conservation state
    async fn species_by_conservation_state(
        &self,
        state_id: i32,
    ) -> AppResult<Vec<ConservationSpeciesInfo>>;

    async fn conservation_statistics(&self) -> AppResult<ConservationStatistics>;

    /// Every active list shown on the reports page
    async fn dashboard(&self) -> AppResult<Dashboard>;
}

/// Concrete implementation of ReportService over the catalog services.
pub struct ReportManager {
    species: Arc<dyn CatalogService<TreeSpecies>>,
    states: Arc<dyn CatalogService<ConservationState>>,
    zones: Arc<dyn CatalogService<Zone>>,
    activities: Arc<dyn CatalogService<ConservationActivity>>,
    activity_types: Arc<dyn CatalogService<ActivityType>>,
}

impl ReportManager {
    pub fn new(
        species: Arc<dyn CatalogService<TreeSpecies>>,
        states: Arc<dyn CatalogService<ConservationState>>,
        zones: Arc<dyn CatalogService<Zone>>,
        activities: Arc<dyn CatalogService<ConservationActivity>>,
        activity_types: Arc<dyn CatalogService<ActivityType>>,
    ) -> Self {
        Self {
            species,
            states,
            zones,
            activities,
            activity_types,
        }
    }

    async fn conservation_projection(
        &self,
        keep: impl Fn(&TreeSpecies) -> bool + Send,
    ) -> AppResult<Vec<ConservationSpeciesInfo>> {
        let (species, states) =
            futures::try_join!(self.species.list_all(), self.states.list_all())?;

        Ok(species
            .iter()
            .filter(|&s| s.in_conservation() && keep(s))
            .map(|s| ConservationSpeciesInfo::project(s, &states))
            .collect())
    }
}

#[async_trait]
impl ReportService for ReportManager {
    async fn species_in_conservation(&self) -> AppResult<Vec<ConservationSpeciesInfo>> {
        self.conservation_projection(|_| true).await
    }

    async fn species_by_conservation_state(
        &self,
        state_id: i32,
    ) -> AppResult<Vec<ConservationSpeciesInfo>> {
        self.conservation_projection(move |s| s.conservation_state_id == Some(state_id))
            .await
    }

    async fn conservation_statistics(&self) -> AppResult<ConservationStatistics> {
        let (species, states) =
            futures::try_join!(self.species.list_all(), self.states.list_all())?;
        Ok(ConservationStatistics::compute(&species, &states))
    }

    async fn dashboard(&self) -> AppResult<Dashboard> {
        let (species, zones, activities, states, activity_types) = futures::try_join!(
            self.species.list_all(),
            self.zones.list_all(),
            self.activities.list_all(),
            self.states.list_all(),
            self.activity_types.list_all(),
        )?;

        let statistics = ConservationStatistics::compute(&species, &states);
        Ok(Dashboard {
            species,
            zones,
            activities,
            states,
            activity_types,
            statistics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{CatalogRepository, MemoryCatalog};
    use crate::service::CatalogManager;
    use domain::CatalogRecord;

    fn service<T: CatalogRecord>(rows: Vec<T>) -> Arc<dyn CatalogService<T>> {
        let repo: Arc<dyn CatalogRepository<T>> = Arc::new(MemoryCatalog::seeded(rows));
        Arc::new(CatalogManager::new(repo))
    }

    fn state(id: i32, name: &str) -> ConservationState {
        ConservationState {
            id,
            name: name.to_string(),
            description: None,
            active: true,
        }
    }

    fn species(id: i32, name: &str, state_id: Option<i32>, active: bool) -> TreeSpecies {
        TreeSpecies {
            id,
            conservation_state_id: state_id,
            active,
            ..TreeSpecies::new(name)
        }
    }

    fn manager(species_rows: Vec<TreeSpecies>) -> ReportManager {
        let states = vec![state(1, "Vulnerable"), state(2, "En peligro")];
        ReportManager::new(
            service(species_rows),
            service(states),
            service(Vec::<Zone>::new()),
            service(Vec::<ConservationActivity>::new()),
            service(Vec::<ActivityType>::new()),
        )
    }

    fn sample() -> Vec<TreeSpecies> {
        vec![
            species(1, "Cedro", Some(1), true),
            species(2, "Roble", None, true),
            species(3, "Caoba", Some(2), true),
            species(4, "Nogal", Some(2), false),
        ]
    }

    #[tokio::test]
    async fn species_in_conservation_resolves_state_names() {
        let report = manager(sample()).species_in_conservation().await.unwrap();

        let names: Vec<_> = report
            .iter()
            .map(|info| (info.common_name.as_str(), info.conservation_state.as_str()))
            .collect();
        assert_eq!(names, vec![("Cedro", "Vulnerable"), ("Caoba", "En peligro")]);
    }

    #[tokio::test]
    async fn species_by_state_filters_active_rows() {
        let report = manager(sample())
            .species_by_conservation_state(2)
            .await
            .unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].id, 3);
    }

    #[tokio::test]
    async fn statistics_count_active_species() {
        let stats = manager(sample()).conservation_statistics().await.unwrap();

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

    #[tokio::test]
    async fn dashboard_collects_every_list() {
        let dashboard = manager(sample()).dashboard().await.unwrap();

        assert_eq!(dashboard.species.len(), 3);
        assert_eq!(dashboard.states.len(), 2);
        assert!(dashboard.zones.is_empty());
        assert_eq!(dashboard.statistics.species_in_conservation, 2);
    }
}
