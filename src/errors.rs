// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected mutation input. Every variant names the field at fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("amount must be non-negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("amount '{0}' is not a valid number")]
    InvalidAmount(String),
    #[error("type '{0}' is not one of income, fixed, variable, credit_card")]
    UnsupportedType(String),
    #[error("category is required for variable expenses")]
    MissingCategory,
    #[error("category only applies to variable expenses, not {0}")]
    UnexpectedCategory(String),
    #[error("category '{0}' is not a known category")]
    UnknownCategory(String),
    #[error("cardId is required for credit_card transactions")]
    MissingCardId,
    #[error("cardId only applies to credit_card transactions, not {0}")]
    UnexpectedCardId(String),
    #[error("name must not be empty")]
    EmptyCardName,
    #[error("dueDay must be between 1 and 31, got {0}")]
    DueDayOutOfRange(u32),
    #[error("color '{0}' is not in the card palette")]
    UnknownColor(String),
    #[error("limit must be non-negative, got {0}")]
    NegativeLimit(Decimal),
    #[error("month {0}/{1} is not a calendar month")]
    InvalidMonth(u32, i32),
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyDescription => "description",
            ValidationError::NegativeAmount(_) | ValidationError::InvalidAmount(_) => "amount",
            ValidationError::UnsupportedType(_) => "type",
            ValidationError::MissingCategory
            | ValidationError::UnexpectedCategory(_)
            | ValidationError::UnknownCategory(_) => "category",
            ValidationError::MissingCardId | ValidationError::UnexpectedCardId(_) => "cardId",
            ValidationError::EmptyCardName => "name",
            ValidationError::DueDayOutOfRange(_) => "dueDay",
            ValidationError::UnknownColor(_) => "color",
            ValidationError::NegativeLimit(_) => "limit",
            ValidationError::InvalidMonth(..) => "month",
        }
    }
}
