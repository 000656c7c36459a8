//! gRPC facade over the zone and species services.
//!
//! The facade performs no authentication. Mutations never fail with a
//! status: every rejection is logged and reported as `success = false`.

mod report_grpc;
mod species_grpc;
mod zones_grpc;

pub use report_grpc::ReportGrpcService;
pub use species_grpc::SpeciesGrpcService;
pub use zones_grpc::ZonesGrpcService;

use common::{AppError, AppResult};
use tracing::{error, info, warn};

/// Collapse a mutation result into the facade's success flag, logging failures.
fn outcome<T>(action: &'static str, result: AppResult<T>) -> bool {
    match result {
        Ok(_) => {
            info!(action, "Mutation succeeded");
            true
        }
        Err(err @ (AppError::NotFound | AppError::Validation(_) | AppError::Conflict(_))) => {
            warn!(action, error = %err, "Mutation rejected");
            false
        }
        Err(err) => {
            error!(action, error = ?err, "Mutation failed");
            false
        }
    }
}

/// Counts travel as int32 on the wire.
fn wire_count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_reports_success_flag() {
        assert!(outcome("create", Ok::<_, AppError>(())));
        assert!(!outcome::<()>("create", Err(AppError::validation("x"))));
        assert!(!outcome::<()>("update", Err(AppError::NotFound)));
        assert!(!outcome::<()>("delete", Err(AppError::internal("down"))));
    }

    #[test]
    fn wire_count_saturates() {
        assert_eq!(wire_count(3), 3);
        assert_eq!(wire_count(usize::MAX), i32::MAX);
    }
}
