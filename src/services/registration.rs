//! Screen-by-screen sign-up flow.
//!
//! `Landing → Login | RegisterRole`, then `Name → Skill → Details → Area`
//! for workers and `Name → Area` for employers. Each `next` checks the
//! fields gathered on the current screen before moving on, and `submit`
//! hands the finished form to an [`AuthService`].

use crate::models::{Skill, User};
use crate::services::auth_service::{
    AuthError, AuthService, EmployerRegistration, Registration, WorkerRegistration,
};
use crate::services::validation::{require_text, validate_phone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScreen {
    Landing,
    Login,
    RegisterRole,
    Name,
    Skill,
    Details,
    Area,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterRole {
    Worker,
    Employer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub skill: Option<Skill>,
    pub daily_wage: Option<u32>,
    pub experience_years: Option<u32>,
    pub photo_url: Option<String>,
    pub id_proof_url: Option<String>,
    pub bio: Option<String>,
    pub area: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFlow {
    screen: AuthScreen,
    role: Option<RegisterRole>,
    pub form: RegistrationForm,
}

impl Default for RegistrationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationFlow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: AuthScreen::Landing,
            role: None,
            form: RegistrationForm {
                skill: Some(Skill::Painter),
                ..RegistrationForm::default()
            },
        }
    }

    #[must_use]
    pub const fn screen(&self) -> AuthScreen {
        self.screen
    }

    #[must_use]
    pub const fn role(&self) -> Option<RegisterRole> {
        self.role
    }

    pub fn open_login(&mut self) {
        self.screen = AuthScreen::Login;
    }

    pub fn open_register(&mut self) {
        self.screen = AuthScreen::RegisterRole;
    }

    pub fn choose_role(&mut self, role: RegisterRole) {
        self.role = Some(role);
        self.screen = AuthScreen::Name;
    }

    /// Advances one screen after checking the current screen's fields.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] and stays put if a field is missing
    /// or there is no next screen.
    pub fn next(&mut self) -> Result<AuthScreen, AuthError> {
        let next = match (self.screen, self.role) {
            (AuthScreen::Name, Some(role)) => {
                require_text(&self.form.name, "Name").map_err(AuthError::Validation)?;
                validate_phone(&self.form.phone).map_err(AuthError::Validation)?;
                match role {
                    RegisterRole::Worker => AuthScreen::Skill,
                    RegisterRole::Employer => AuthScreen::Area,
                }
            }
            (AuthScreen::Skill, Some(RegisterRole::Worker)) => {
                if self.form.skill.is_none() {
                    return Err(AuthError::Validation("Skill is required".to_string()));
                }
                AuthScreen::Details
            }
            (AuthScreen::Details, Some(RegisterRole::Worker)) => {
                if self.form.daily_wage.is_none_or(|w| w == 0) {
                    return Err(AuthError::Validation("Daily wage is required".to_string()));
                }
                AuthScreen::Area
            }
            (screen, _) => {
                return Err(AuthError::Validation(format!(
                    "No next step from {screen:?}"
                )));
            }
        };

        self.screen = next;
        Ok(next)
    }

    /// Steps back one screen. Going back from the first screen is a no-op.
    pub fn back(&mut self) -> AuthScreen {
        self.screen = match (self.screen, self.role) {
            (AuthScreen::Landing | AuthScreen::Login | AuthScreen::RegisterRole, _) => {
                AuthScreen::Landing
            }
            (AuthScreen::Name, _) => AuthScreen::RegisterRole,
            (AuthScreen::Skill, _) => AuthScreen::Name,
            (AuthScreen::Details, _) => AuthScreen::Skill,
            (AuthScreen::Area, Some(RegisterRole::Worker)) => AuthScreen::Details,
            (AuthScreen::Area, _) => AuthScreen::Name,
        };
        self.screen
    }

    /// Builds the registration from the gathered form.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] unless the flow is on the area
    /// screen with an area filled in.
    pub fn finish(&self) -> Result<Registration, AuthError> {
        if self.screen != AuthScreen::Area {
            return Err(AuthError::Validation(
                "Registration is not complete".to_string(),
            ));
        }
        require_text(&self.form.area, "Area").map_err(AuthError::Validation)?;

        let form = self.form.clone();
        match self.role {
            Some(RegisterRole::Worker) => Ok(Registration::Worker(WorkerRegistration {
                name: form.name,
                phone: form.phone,
                skill: form.skill,
                daily_wage: form.daily_wage,
                experience_years: form.experience_years,
                area: form.area,
                bio: form.bio,
                photo_url: form.photo_url,
                id_proof_url: form.id_proof_url,
            })),
            Some(RegisterRole::Employer) => Ok(Registration::Employer(EmployerRegistration {
                name: form.name,
                phone: form.phone,
                area: form.area,
                bio: form.bio,
            })),
            None => Err(AuthError::Validation("Choose a role first".to_string())),
        }
    }

    /// Registers the account and logs it in.
    pub fn submit(&self, auth: &dyn AuthService) -> Result<User, AuthError> {
        auth.register(self.finish()?)
    }
}
