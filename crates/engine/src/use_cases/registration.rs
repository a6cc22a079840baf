//! Account registration.
//!
//! Validates a registration form and records the account in the user
//! directory. Credentials are validated but never stored; signing in is
//! handled outside this service.

use std::sync::Arc;

use crate::forms::{FormValidation, RegistrationForm};
use crate::infrastructure::ports::{ClockPort, RepoError, User, UserRepo};

pub const EMAIL_TAKEN_MESSAGE: &str = "Email is already registered";

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    Registered(User),
    /// The form was rejected; resubmitting with corrections may succeed.
    Rejected(FormValidation),
}

pub struct RegisterUser {
    user_repo: Arc<dyn UserRepo>,
    clock: Arc<dyn ClockPort>,
}

impl RegisterUser {
    pub fn new(user_repo: Arc<dyn UserRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { user_repo, clock }
    }

    pub async fn execute(
        &self,
        form: &RegistrationForm,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        let validation = form.validate_form();
        let email = match (&form.email, validation.valid) {
            (Some(email), true) => email,
            _ => {
                tracing::debug!(errors = ?validation.errors, "Registration form rejected");
                return Ok(RegistrationOutcome::Rejected(validation));
            }
        };

        if self.user_repo.find_by_email(email).await?.is_some() {
            return Ok(email_taken());
        }

        let user = User::new(email, self.clock.now());
        match self.user_repo.save(&user).await {
            Ok(()) => {}
            // Lost a race with a concurrent registration of the same email.
            Err(RepoError::ConstraintViolation(_)) => return Ok(email_taken()),
            Err(e) => return Err(e.into()),
        }

        tracing::info!(user_id = %user.id, "Registered user");
        Ok(RegistrationOutcome::Registered(user))
    }
}

fn email_taken() -> RegistrationOutcome {
    RegistrationOutcome::Rejected(FormValidation::field_error("email", EMAIL_TAKEN_MESSAGE))
}
