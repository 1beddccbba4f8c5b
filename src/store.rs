// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory record store and the mutations allowed on it.
//!
//! Both collections keep insertion order. Nothing outside this module can
//! change them except through the methods below.

use crate::errors::ValidationError;
use crate::models::{
    Card, NewCardDraft, NewTransactionDraft, Transaction, TransactionType,
};
use crate::summary::in_month;
use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

const FALLBACK_CARD_LABEL: &str = "Cartão";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    transactions: Vec<Transaction>,
    cards: Vec<Card>,
}

/// Outcome of setting a card invoice for a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceUpsert {
    Updated(String),
    Created(String),
}

impl InvoiceUpsert {
    pub fn id(&self) -> &str {
        match self {
            InvoiceUpsert::Updated(id) | InvoiceUpsert::Created(id) => id,
        }
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(transactions: Vec<Transaction>, cards: Vec<Card>) -> Self {
        Self {
            transactions,
            cards,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Appends a transaction built from `draft`. A missing date means `today`.
    pub fn add_transaction(
        &mut self,
        draft: NewTransactionDraft,
        today: NaiveDate,
    ) -> Result<&Transaction, ValidationError> {
        draft.validate()?;
        self.transactions.push(Transaction {
            id: new_id(),
            r#type: draft.r#type,
            description: draft.description.trim().to_string(),
            amount: draft.amount,
            date: draft.date.unwrap_or(today),
            category: draft.category,
            is_paid: false,
            due_date: draft.due_date,
            card_id: draft.card_id,
        });
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    pub fn add_card(&mut self, draft: NewCardDraft) -> Result<&Card, ValidationError> {
        draft.validate()?;
        self.cards.push(Card {
            id: new_id(),
            name: draft.name.trim().to_string(),
            due_day: draft.due_day,
            color: draft.color,
            limit: draft.limit,
        });
        Ok(&self.cards[self.cards.len() - 1])
    }

    /// Returns false when no transaction has that id.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.transactions.len() != before
    }

    /// Removes the card only. Invoices pointing at it stay in place.
    pub fn delete_card(&mut self, card_id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != card_id);
        self.cards.len() != before
    }

    /// Flips `is_paid` and returns the new value, or `None` when the id is
    /// unknown or the transaction type has no paid state.
    pub fn toggle_transaction_paid(&mut self, id: &str) -> Option<bool> {
        let tx = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id && t.r#type.carries_paid())?;
        tx.is_paid = !tx.is_paid;
        Some(tx.is_paid)
    }

    pub fn find_invoice(&self, card_id: &str, month: u32, year: i32) -> Option<&Transaction> {
        self.transactions.iter().find(|t| is_invoice_for(t, card_id, month, year))
    }

    /// Sets the invoice amount of `card_id` for (`month`, `year`).
    ///
    /// An existing invoice keeps its id, date and paid flag; only the amount
    /// changes. Otherwise a new unpaid invoice is appended, dated `today` when
    /// that falls in the month, else on the same day of the reference month
    /// (clamped to its last day).
    pub fn upsert_card_invoice(
        &mut self,
        card_id: &str,
        amount: Decimal,
        month: u32,
        year: i32,
        today: NaiveDate,
    ) -> Result<InvoiceUpsert, ValidationError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::NegativeAmount(amount));
        }
        let date = invoice_date(month, year, today)?;
        if let Some(existing) = self
            .transactions
            .iter_mut()
            .find(|t| is_invoice_for(t, card_id, month, year))
        {
            existing.amount = amount;
            tracing::debug!(id = %existing.id, card_id, %amount, "updated card invoice");
            return Ok(InvoiceUpsert::Updated(existing.id.clone()));
        }

        let description = format!(
            "Fatura {}",
            self.card(card_id)
                .map(|c| c.name.as_str())
                .unwrap_or(FALLBACK_CARD_LABEL)
        );
        let id = new_id();
        self.transactions.push(Transaction {
            id: id.clone(),
            r#type: TransactionType::CreditCard,
            description,
            amount,
            date,
            category: None,
            is_paid: false,
            due_date: None,
            card_id: Some(card_id.to_string()),
        });
        tracing::debug!(%id, card_id, %amount, "created card invoice");
        Ok(InvoiceUpsert::Created(id))
    }

    /// Same as [`RecordStore::upsert_card_invoice`] for the month of `today`.
    pub fn set_current_invoice(
        &mut self,
        card_id: &str,
        amount: Decimal,
        today: NaiveDate,
    ) -> Result<InvoiceUpsert, ValidationError> {
        self.upsert_card_invoice(card_id, amount, today.month(), today.year(), today)
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
        self.cards.clear();
    }
}

fn invoice_date(month: u32, year: i32, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if in_month(today, month, year) {
        return Ok(today);
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(ValidationError::InvalidMonth(month, year))?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);
    Ok(first.with_day(today.day().min(last.day())).unwrap_or(first))
}

fn is_invoice_for(t: &Transaction, card_id: &str, month: u32, year: i32) -> bool {
    t.r#type == TransactionType::CreditCard
        && t.card_id.as_deref() == Some(card_id)
        && in_month(t.date, month, year)
}
