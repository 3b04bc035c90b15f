use crate::utils::error::PythiaError;

/// Authentication-related state kept next to the root store.
#[derive(Debug, Default)]
pub struct SessionState {
    pub login_error: Option<PythiaError>,
}

impl SessionState {
    /// Display text for the last login failure. A validation message coming
    /// from the server takes precedence over the transport error.
    pub fn login_error_text(&self) -> Option<String> {
        match self.login_error.as_ref()? {
            PythiaError::LoginError { message } => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn clear_error(&mut self) {
        self.login_error = None;
    }
}
