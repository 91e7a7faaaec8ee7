//! Server-side actions.
//!
//! Each public function here is one user-initiated operation: validate the
//! input, scope everything to the acting user, perform the database work,
//! and map failures onto the fixed [`ActionError`](crate::ActionError)
//! taxonomy. The HTTP layer stays thin on top of these.

mod auth;
mod dashboard;
mod health_record;
mod pet;

pub use auth::{current_user, login, register};
pub use dashboard::{
    dashboard, health_score, weight_series, LastActivity, PetSummary, WeightEntry,
    EXPECTED_VACCINATIONS,
};
pub use health_record::{create_health_record, delete_health_record, list_health_records};
pub use pet::{create_pet, delete_pet, get_pet, list_pets, update_pet, update_pet_weight, PetDetail};

use std::future::Future;

use crate::error::{ActionError, ActionResult};
use crate::schemas::Validate;

/// Validate `input`, then hand it to `handler`.
///
/// On failure the action short-circuits with the first failing field's
/// message and the handler never runs.
pub async fn validated<I, H, Fut, T>(input: I, handler: H) -> ActionResult<T>
where
    I: Validate,
    H: FnOnce(I) -> Fut,
    Fut: Future<Output = ActionResult<T>>,
{
    if let Err(errors) = input.validate() {
        return Err(ActionError::Validation(errors.first_message().to_string()));
    }
    handler(input).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::ValidationErrors;

    struct Doubled(i32);

    impl Validate for Doubled {
        fn validate(&self) -> Result<(), ValidationErrors> {
            let mut errors = ValidationErrors::new();
            if self.0 < 0 {
                errors.push("value", "Value must not be negative.");
            }
            errors.into_result()
        }
    }

    #[tokio::test]
    async fn runs_handler_on_valid_input() {
        let result = validated(Doubled(21), |input| async move { Ok(input.0 * 2) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn short_circuits_with_first_field_message() {
        let result: ActionResult<i32> = validated(Doubled(-1), |input| async move {
            panic!("handler must not run on invalid input: {}", input.0)
        })
        .await;
        match result {
            Err(ActionError::Validation(message)) => {
                assert_eq!(message, "Value must not be negative.")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
