// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::ValidationError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const INCOME_PRESETS: [&str; 3] = ["Salário", "Extra", "Comissão"];
pub const DEFAULT_DUE_DAY: u32 = 10;

/// Kind of a transaction. Values other than the four known ones are kept
/// verbatim so that one unexpected record does not void a whole blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Income,
    Fixed,
    Variable,
    CreditCard,
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Fixed => "fixed",
            TransactionType::Variable => "variable",
            TransactionType::CreditCard => "credit_card",
            TransactionType::Other(s) => s,
        }
    }

    /// Only bills and card invoices have a paid/unpaid state.
    pub fn carries_paid(&self) -> bool {
        matches!(self, TransactionType::Fixed | TransactionType::CreditCard)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TransactionType::Other(_))
    }
}

impl Default for TransactionType {
    fn default() -> Self {
        TransactionType::Other(String::new())
    }
}

impl From<String> for TransactionType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "income" => TransactionType::Income,
            "fixed" => TransactionType::Fixed,
            "variable" => TransactionType::Variable,
            "credit_card" => TransactionType::CreditCard,
            _ => TransactionType::Other(s),
        }
    }
}

impl From<TransactionType> for String {
    fn from(t: TransactionType) -> Self {
        match t {
            TransactionType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match TransactionType::from(s.trim().to_lowercase()) {
            TransactionType::Other(_) => Err(ValidationError::UnsupportedType(s.to_string())),
            known => Ok(known),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Alimentação")]
    Alimentacao,
    Transporte,
    Lazer,
    #[serde(rename = "Saúde")]
    Saude,
    Casa,
    Compras,
    Outros,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Alimentacao,
        Category::Transporte,
        Category::Lazer,
        Category::Saude,
        Category::Casa,
        Category::Compras,
        Category::Outros,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Alimentacao => "Alimentação",
            Category::Transporte => "Transporte",
            Category::Lazer => "Lazer",
            Category::Saude => "Saúde",
            Category::Casa => "Casa",
            Category::Compras => "Compras",
            Category::Outros => "Outros",
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match wanted.as_str() {
            "alimentacao" => return Ok(Category::Alimentacao),
            "saude" => return Ok(Category::Saude),
            _ => {}
        }
        Category::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card palette. Older data stored the CSS class instead of the name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    #[default]
    #[serde(alias = "bg-purple-600")]
    Roxo,
    #[serde(alias = "bg-slate-900")]
    Preto,
    #[serde(alias = "bg-blue-600")]
    Azul,
    #[serde(alias = "bg-red-600")]
    Vermelho,
    #[serde(alias = "bg-orange-500")]
    Laranja,
    #[serde(alias = "bg-emerald-600")]
    Verde,
}

impl CardColor {
    pub const ALL: [CardColor; 6] = [
        CardColor::Roxo,
        CardColor::Preto,
        CardColor::Azul,
        CardColor::Vermelho,
        CardColor::Laranja,
        CardColor::Verde,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CardColor::Roxo => "Roxo",
            CardColor::Preto => "Preto",
            CardColor::Azul => "Azul",
            CardColor::Vermelho => "Vermelho",
            CardColor::Laranja => "Laranja",
            CardColor::Verde => "Verde",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CardColor::Roxo => "bg-purple-600",
            CardColor::Preto => "bg-slate-900",
            CardColor::Azul => "bg-blue-600",
            CardColor::Vermelho => "bg-red-600",
            CardColor::Laranja => "bg-orange-500",
            CardColor::Verde => "bg-emerald-600",
        }
    }
}

impl FromStr for CardColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CardColor::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted) || c.css_class() == wanted)
            .ok_or_else(|| ValidationError::UnknownColor(s.to_string()))
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub r#type: TransactionType,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub due_day: u32,
    #[serde(default)]
    pub color: CardColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Decimal>,
}

/// Input for a new transaction. `date` falls back to the creation day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionDraft {
    pub r#type: TransactionType,
    pub description: String,
    pub amount: Decimal,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub card_id: Option<String>,
}

impl NewTransactionDraft {
    pub fn new(r#type: TransactionType, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            r#type,
            description: description.into(),
            amount,
            date: None,
            category: None,
            due_date: None,
            card_id: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_card(mut self, card_id: impl Into<String>) -> Self {
        self.card_id = Some(card_id.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.r#type.is_known() {
            return Err(ValidationError::UnsupportedType(self.r#type.to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(ValidationError::NegativeAmount(self.amount));
        }
        match (&self.r#type, self.category) {
            (TransactionType::Variable, None) => return Err(ValidationError::MissingCategory),
            (t, Some(_)) if *t != TransactionType::Variable => {
                return Err(ValidationError::UnexpectedCategory(t.to_string()));
            }
            _ => {}
        }
        match (&self.r#type, &self.card_id) {
            (TransactionType::CreditCard, None) => Err(ValidationError::MissingCardId),
            (t, Some(_)) if *t != TransactionType::CreditCard => {
                Err(ValidationError::UnexpectedCardId(t.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCardDraft {
    pub name: String,
    #[serde(default = "default_due_day")]
    pub due_day: u32,
    #[serde(default)]
    pub color: CardColor,
    #[serde(default)]
    pub limit: Option<Decimal>,
}

fn default_due_day() -> u32 {
    DEFAULT_DUE_DAY
}

impl NewCardDraft {
    pub fn new(name: impl Into<String>, due_day: u32, color: CardColor) -> Self {
        Self {
            name: name.into(),
            due_day,
            color,
            limit: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyCardName);
        }
        if !(1..=31).contains(&self.due_day) {
            return Err(ValidationError::DueDayOutOfRange(self.due_day));
        }
        if let Some(limit) = self.limit {
            if limit.is_sign_negative() && !limit.is_zero() {
                return Err(ValidationError::NegativeLimit(limit));
            }
        }
        Ok(())
    }
}

/// Creation payload from the presentation layer, dispatched on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Draft {
    Transaction(NewTransactionDraft),
    Card(NewCardDraft),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_fixed: Decimal,
    pub total_variable: Decimal,
    pub total_credit_card: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub remaining_budget: Decimal,
}
