// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Entry points for the presentation layer.
//!
//! A `Tracker` owns the record store and its storage. Every mutation runs to
//! completion and is written back before the call returns. Confirming
//! destructive calls (`on_delete_transaction`, `on_reset_all`) is the
//! caller's job.

use crate::db::{self, Storage};
use crate::models::{Card, Draft, NewCardDraft, NewTransactionDraft, Transaction};
use crate::store::{InvoiceUpsert, RecordStore};
use crate::summary::{self, CardInvoice, MonthlyView};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub struct Tracker<S: Storage> {
    store: RecordStore,
    storage: S,
}

impl<S: Storage> Tracker<S> {
    pub fn load_state(storage: S) -> Self {
        let store = db::load(&storage);
        Self { store, storage }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    pub fn cards(&self) -> &[Card] {
        self.store.cards()
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Creates a transaction or a card and returns its id.
    pub fn on_create(&mut self, draft: Draft, today: NaiveDate) -> Result<String> {
        match draft {
            Draft::Transaction(d) => self.on_create_transaction(d, today),
            Draft::Card(d) => self.on_create_card(d),
        }
    }

    pub fn on_create_transaction(
        &mut self,
        draft: NewTransactionDraft,
        today: NaiveDate,
    ) -> Result<String> {
        let id = self.store.add_transaction(draft, today)?.id.clone();
        self.persist_transactions()?;
        Ok(id)
    }

    pub fn on_create_card(&mut self, draft: NewCardDraft) -> Result<String> {
        let id = self.store.add_card(draft)?.id.clone();
        self.persist_cards()?;
        Ok(id)
    }

    pub fn on_delete_transaction(&mut self, id: &str) -> Result<bool> {
        if !self.store.delete_transaction(id) {
            return Ok(false);
        }
        self.persist_transactions()?;
        Ok(true)
    }

    pub fn on_delete_card(&mut self, card_id: &str) -> Result<bool> {
        if !self.store.delete_card(card_id) {
            return Ok(false);
        }
        self.persist_cards()?;
        Ok(true)
    }

    pub fn on_toggle_paid(&mut self, id: &str) -> Result<Option<bool>> {
        let Some(paid) = self.store.toggle_transaction_paid(id) else {
            return Ok(None);
        };
        self.persist_transactions()?;
        Ok(Some(paid))
    }

    /// Sets the invoice of `card_id` for the month of `today`.
    pub fn on_set_card_invoice(
        &mut self,
        card_id: &str,
        amount: Decimal,
        today: NaiveDate,
    ) -> Result<InvoiceUpsert> {
        let outcome = self.store.set_current_invoice(card_id, amount, today)?;
        self.persist_transactions()?;
        Ok(outcome)
    }

    /// Drops every transaction and card, in memory and on disk.
    pub fn on_reset_all(&mut self) -> Result<()> {
        self.store.clear();
        db::clear(&mut self.storage).inspect_err(|e| {
            tracing::error!(error = %format!("{:#}", e), "failed to clear stored data");
        })?;
        tracing::info!("all transactions and cards erased");
        Ok(())
    }

    pub fn compute_summary(&self, today: NaiveDate) -> MonthlyView {
        summary::monthly_view(today, self.store.transactions())
    }

    pub fn card_invoices(&self, today: NaiveDate) -> Vec<CardInvoice<'_>> {
        summary::card_invoices(today, self.store.cards(), self.store.transactions())
    }

    fn persist_transactions(&mut self) -> Result<()> {
        db::save_transactions(&mut self.storage, self.store.transactions()).inspect_err(|e| {
            tracing::error!(error = %format!("{:#}", e), "failed to save transactions");
        })
    }

    fn persist_cards(&mut self) -> Result<()> {
        db::save_cards(&mut self.storage, self.store.cards()).inspect_err(|e| {
            tracing::error!(error = %format!("{:#}", e), "failed to save cards");
        })
    }
}
