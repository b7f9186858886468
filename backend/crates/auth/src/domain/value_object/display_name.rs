//! Display Name Value Object
//!
//! 表示名はユーザーが自由に決める**表示用の名前**であり、識別子ではない。
//! 一意性は要求せず、入力された文字列をそのまま保持する。
//!
//! ## 不変条件
//! - 長さ: 3〜100文字（コードポイント単位）
//! - 制御文字を含まない

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for display name (in characters)
pub const DISPLAY_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for display name (in characters)
pub const DISPLAY_NAME_MAX_LENGTH: usize = 100;

// ============================================================================
// DisplayName
// ============================================================================

/// User display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and wrap a display name
    pub fn new(input: impl Into<String>) -> AppResult<Self> {
        let input = input.into();
        let len = input.chars().count();

        if len == 0 {
            return Err(AppError::validation(
                "name",
                "\"name\" is not allowed to be empty",
            ));
        }

        if len < DISPLAY_NAME_MIN_LENGTH {
            return Err(AppError::validation(
                "name",
                format!(
                    "\"name\" length must be at least {} characters long",
                    DISPLAY_NAME_MIN_LENGTH
                ),
            ));
        }

        if len > DISPLAY_NAME_MAX_LENGTH {
            return Err(AppError::validation(
                "name",
                format!(
                    "\"name\" length must be less than or equal to {} characters long",
                    DISPLAY_NAME_MAX_LENGTH
                ),
            ));
        }

        if input.chars().any(char::is_control) {
            return Err(AppError::validation(
                "name",
                "\"name\" contains invalid characters",
            ));
        }

        Ok(Self(input))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

// ============================================================================
// Tests
// ============================================================================
