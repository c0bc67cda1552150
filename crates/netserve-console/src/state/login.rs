//! Login form state

/// Form field on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    /// Move to the next field
    pub fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }

    /// Move to the previous field
    pub fn prev(self) -> Self {
        // Two fields: previous and next coincide
        self.next()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }
}

/// State for the login form
#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub focused_field: LoginField,
    /// Credentials are being checked; input is frozen
    pub submitting: bool,
    /// Error text from the last failed attempt
    pub last_error: Option<String>,
}

impl LoginFormState {
    /// Reset the form to its default state
    pub fn reset(&mut self) {
        self.username.clear();
        self.password.clear();
        self.focused_field = LoginField::default();
        self.submitting = false;
        self.last_error = None;
    }

    /// Mutable access to the currently focused field
    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused_field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// Both fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}
