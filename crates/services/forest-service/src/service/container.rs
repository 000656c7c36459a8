//! Service container - one handle to every forest service.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use domain::{ActivityType, ConservationActivity, ConservationState, TreeSpecies, Zone};

use super::{
    CatalogManager, CatalogService, ReportManager, ReportService, UserManager, UserService,
};
use crate::repository::{
    ActivityTypeStore, CatalogRepository, ConservationActivityStore, ConservationStateStore,
    MemoryCatalog, MemoryUsers, TreeSpeciesStore, UserRepository, UserStore, ZoneStore,
};

/// Repositories the services are built from.
pub struct Repositories {
    pub zones: Arc<dyn CatalogRepository<Zone>>,
    pub species: Arc<dyn CatalogRepository<TreeSpecies>>,
    pub states: Arc<dyn CatalogRepository<ConservationState>>,
    pub activity_types: Arc<dyn CatalogRepository<ActivityType>>,
    pub activities: Arc<dyn CatalogRepository<ConservationActivity>>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// SeaORM stores sharing one connection pool.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            zones: Arc::new(ZoneStore::new(db.clone())),
            species: Arc::new(TreeSpeciesStore::new(db.clone())),
            states: Arc::new(ConservationStateStore::new(db.clone())),
            activity_types: Arc::new(ActivityTypeStore::new(db.clone())),
            activities: Arc::new(ConservationActivityStore::new(db.clone())),
            users: Arc::new(UserStore::new(db)),
        }
    }

    /// Empty in-process repositories.
    pub fn in_memory() -> Self {
        Self {
            zones: Arc::new(MemoryCatalog::<Zone>::new().ordered_by_name()),
            species: Arc::new(MemoryCatalog::<TreeSpecies>::new()),
            states: Arc::new(MemoryCatalog::<ConservationState>::new().ordered_by_name()),
            activity_types: Arc::new(MemoryCatalog::<ActivityType>::new()),
            activities: Arc::new(MemoryCatalog::<ConservationActivity>::new()),
            users: Arc::new(MemoryUsers::new()),
        }
    }
}

/// Cheaply clonable access to all services.
#[derive(Clone)]
pub struct Services {
    zones: Arc<dyn CatalogService<Zone>>,
    species: Arc<dyn CatalogService<TreeSpecies>>,
    states: Arc<dyn CatalogService<ConservationState>>,
    activity_types: Arc<dyn CatalogService<ActivityType>>,
    activities: Arc<dyn CatalogService<ConservationActivity>>,
    users: Arc<dyn UserService>,
    reports: Arc<dyn ReportService>,
}

impl Services {
    /// Wire the managers over the given repositories.
    pub fn new(repos: Repositories) -> Self {
        let zones: Arc<dyn CatalogService<Zone>> = Arc::new(CatalogManager::new(repos.zones));
        let species: Arc<dyn CatalogService<TreeSpecies>> =
            Arc::new(CatalogManager::new(repos.species));
        let states: Arc<dyn CatalogService<ConservationState>> =
            Arc::new(CatalogManager::new(repos.states));
        let activity_types: Arc<dyn CatalogService<ActivityType>> =
            Arc::new(CatalogManager::new(repos.activity_types));
        let activities: Arc<dyn CatalogService<ConservationActivity>> =
            Arc::new(CatalogManager::new(repos.activities));

        let reports = Arc::new(ReportManager::new(
            species.clone(),
            states.clone(),
            zones.clone(),
            activities.clone(),
            activity_types.clone(),
        ));

        Self {
            zones,
            species,
            states,
            activity_types,
            activities,
            users: Arc::new(UserManager::new(repos.users)),
            reports,
        }
    }

    /// Create service container from database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::new(Repositories::from_connection(db))
    }

    pub fn zones(&self) -> Arc<dyn CatalogService<Zone>> {
        self.zones.clone()
    }

    pub fn species(&self) -> Arc<dyn CatalogService<TreeSpecies>> {
        self.species.clone()
    }

    /// Read-only from both surfaces
    pub fn states(&self) -> Arc<dyn CatalogService<ConservationState>> {
        self.states.clone()
    }

    pub fn activity_types(&self) -> Arc<dyn CatalogService<ActivityType>> {
        self.activity_types.clone()
    }

    pub fn activities(&self) -> Arc<dyn CatalogService<ConservationActivity>> {
        self.activities.clone()
    }

    pub fn users(&self) -> Arc<dyn UserService> {
        self.users.clone()
    }

    pub fn reports(&self) -> Arc<dyn ReportService> {
        self.reports.clone()
    }
}
