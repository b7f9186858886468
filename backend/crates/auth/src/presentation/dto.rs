//! API DTOs (Data Transfer Objects)
//!
//! Request bodies are loose JSON; they become typed commands through
//! `TryFrom`, which reports the first failing field in key order.

use kernel::error::app_error::AppError;
use serde::{Deserialize, Serialize};

use crate::application::{LoginInput, LoginOutput, SignUpInput};
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_password::RawPassword,
};

fn required(field: &'static str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::validation(field, format!("\"{}\" is required", field)))
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<SignUpRequest> for SignUpInput {
    type Error = AppError;

    fn try_from(req: SignUpRequest) -> Result<Self, Self::Error> {
        let name = DisplayName::new(required("name", req.name)?)?;
        let email = Email::new(required("email", req.email)?)?;
        let password = RawPassword::new(required("password", req.password)?)?;

        Ok(SignUpInput {
            name,
            email,
            password,
        })
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for LoginInput {
    type Error = AppError;

    fn try_from(req: LoginRequest) -> Result<Self, Self::Error> {
        let email = Email::new(required("email", req.email)?)?;
        let password = RawPassword::new(required("password", req.password)?)?;

        Ok(LoginInput { email, password })
    }
}

/// Login response
///
/// The token is sent twice: `token` for API clients, `jwtToken` for the SPA.
/// `userId` is what bookmark requests may echo back.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub jwt_token: String,
    pub user_id: String,
    pub email: String,
    pub name: String,
}

impl From<LoginOutput> for LoginResponse {
    fn from(output: LoginOutput) -> Self {
        Self {
            success: true,
            message: "Login Successful".to_string(),
            jwt_token: output.token.clone(),
            token: output.token,
            user_id: output.user_id.to_string(),
            email: output.email,
            name: output.name,
        }
    }
}
