use serde::Deserialize;
use validator::Validate;

use crate::app::validation::not_blank;

/// Credentials exchanged for an access token.
///
/// Read from a form body on `/token` and from the query string on `/login`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Login {
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_are_rejected() {
        let login = Login {
            username: "  ".to_string(),
            password: "securepassword123".to_string(),
        };
        assert!(login.validate().is_err());

        let login = Login {
            username: "john_doe".to_string(),
            password: String::new(),
        };
        assert!(login.validate().is_err());
    }
}
