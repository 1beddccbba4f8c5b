// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly summary derived from raw transactions.
//!
//! Nothing here mutates state or reads the clock; callers pass `today`.

use crate::models::{Card, FinancialSummary, Transaction, TransactionType};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// The month's summary plus its transactions partitioned by type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyView {
    pub month: u32,
    pub year: i32,
    pub summary: FinancialSummary,
    /// Ascending by date.
    pub fixed: Vec<Transaction>,
    /// Most recent first.
    pub variable: Vec<Transaction>,
    /// Most recent first.
    pub income: Vec<Transaction>,
    pub credit_card: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInvoice<'a> {
    pub card: &'a Card,
    pub invoice: Option<&'a Transaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub label: &'static str,
    pub value: Decimal,
}

pub fn in_month(date: NaiveDate, month: u32, year: i32) -> bool {
    date.month() == month && date.year() == year
}

/// Transactions dated in the calendar month of `today`, in insertion order.
pub fn current_month<'a>(today: NaiveDate, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| in_month(t.date, today.month(), today.year()))
        .collect()
}

pub fn compute_summary(today: NaiveDate, transactions: &[Transaction]) -> FinancialSummary {
    let mut s = FinancialSummary::default();
    for t in current_month(today, transactions) {
        match t.r#type {
            TransactionType::Income => s.total_income += t.amount,
            TransactionType::Fixed => s.total_fixed += t.amount,
            TransactionType::Variable => s.total_variable += t.amount,
            TransactionType::CreditCard => s.total_credit_card += t.amount,
            TransactionType::Other(_) => {}
        }
    }
    s.total_expenses = s.total_fixed + s.total_variable + s.total_credit_card;
    s.balance = s.total_income - s.total_expenses;
    s.remaining_budget = s.balance;
    s
}

pub fn monthly_view(today: NaiveDate, transactions: &[Transaction]) -> MonthlyView {
    let month = current_month(today, transactions);
    let of_type = |kind: TransactionType| -> Vec<Transaction> {
        month
            .iter()
            .filter(|t| t.r#type == kind)
            .map(|t| (*t).clone())
            .collect()
    };

    let mut fixed = of_type(TransactionType::Fixed);
    fixed.sort_by(|a, b| a.date.cmp(&b.date));
    let mut variable = of_type(TransactionType::Variable);
    variable.sort_by(|a, b| b.date.cmp(&a.date));
    let mut income = of_type(TransactionType::Income);
    income.sort_by(|a, b| b.date.cmp(&a.date));

    MonthlyView {
        month: today.month(),
        year: today.year(),
        summary: compute_summary(today, transactions),
        fixed,
        variable,
        income,
        credit_card: of_type(TransactionType::CreditCard),
    }
}

/// Groups an already sorted list by day, keeping the incoming day order.
pub fn group_by_date(list: &[Transaction]) -> Vec<(NaiveDate, Vec<&Transaction>)> {
    let mut groups: Vec<(NaiveDate, Vec<&Transaction>)> = Vec::new();
    for t in list {
        match groups.iter_mut().find(|(d, _)| *d == t.date) {
            Some((_, items)) => items.push(t),
            None => groups.push((t.date, vec![t])),
        }
    }
    groups
}

/// Each card with its invoice for the month of `today`, if one was set.
pub fn card_invoices<'a>(
    today: NaiveDate,
    cards: &'a [Card],
    transactions: &'a [Transaction],
) -> Vec<CardInvoice<'a>> {
    let month = current_month(today, transactions);
    cards
        .iter()
        .map(|card| CardInvoice {
            card,
            invoice: month
                .iter()
                .find(|t| {
                    t.r#type == TransactionType::CreditCard
                        && t.card_id.as_deref() == Some(card.id.as_str())
                })
                .copied(),
        })
        .collect()
}

/// Budget split for the dashboard chart. Empty without income.
pub fn distribution(summary: &FinancialSummary) -> Vec<Slice> {
    if summary.total_income <= Decimal::ZERO {
        return Vec::new();
    }
    [
        ("Fixo", summary.total_fixed),
        ("Variável", summary.total_variable),
        ("Cartões", summary.total_credit_card),
        ("Disponível", summary.remaining_budget.max(Decimal::ZERO)),
    ]
    .into_iter()
    .filter(|(_, v)| *v > Decimal::ZERO)
    .map(|(label, value)| Slice { label, value })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardColor, Category};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(id: &str, kind: TransactionType, amount: &str, date: NaiveDate) -> Transaction {
        Transaction {
            id: id.into(),
            category: (kind == TransactionType::Variable).then_some(Category::Outros),
            r#type: kind,
            description: id.into(),
            amount: dec(amount),
            date,
            is_paid: false,
            due_date: None,
            card_id: None,
        }
    }

    #[test]
    fn totals_and_balance() {
        let today = day(2025, 5, 20);
        let txs = vec![
            tx("salario", TransactionType::Income, "5000.00", day(2025, 5, 5)),
            tx("aluguel", TransactionType::Fixed, "1200.00", day(2025, 5, 10)),
            tx("padaria", TransactionType::Variable, "15.50", day(2025, 5, 12)),
            tx("fatura", TransactionType::CreditCard, "400.00", day(2025, 5, 1)),
        ];
        let s = compute_summary(today, &txs);
        assert_eq!(s.total_income, dec("5000.00"));
        assert_eq!(s.total_fixed, dec("1200.00"));
        assert_eq!(s.total_variable, dec("15.50"));
        assert_eq!(s.total_credit_card, dec("400.00"));
        assert_eq!(s.total_expenses, dec("1615.50"));
        assert_eq!(s.balance, dec("3384.50"));
        assert_eq!(s.remaining_budget, s.balance);
    }

    #[test]
    fn balance_goes_negative() {
        let today = day(2025, 5, 20);
        let txs = vec![
            tx("a", TransactionType::Income, "100", day(2025, 5, 5)),
            tx("b", TransactionType::Fixed, "250.75", day(2025, 5, 6)),
        ];
        let s = compute_summary(today, &txs);
        assert_eq!(s.balance, dec("-150.75"));
        assert_eq!(
            s.balance,
            s.total_income - (s.total_fixed + s.total_variable + s.total_credit_card)
        );
    }

    #[test]
    fn other_months_and_years_are_excluded() {
        let today = day(2025, 5, 20);
        let txs = vec![
            tx("prev", TransactionType::Income, "999", day(2025, 4, 30)),
            tx("next", TransactionType::Fixed, "999", day(2025, 6, 1)),
            tx("last_year", TransactionType::Variable, "999", day(2024, 5, 15)),
            tx("now", TransactionType::Income, "1", day(2025, 5, 31)),
        ];
        let s = compute_summary(today, &txs);
        assert_eq!(s.total_income, dec("1"));
        assert_eq!(s.total_fixed, Decimal::ZERO);
        assert_eq!(s.total_variable, Decimal::ZERO);
    }

    #[test]
    fn unknown_type_counts_nowhere() {
        let today = day(2025, 5, 20);
        let txs = vec![
            tx("x", TransactionType::Other("loan".into()), "70", day(2025, 5, 2)),
            tx("y", TransactionType::Income, "30", day(2025, 5, 2)),
        ];
        let s = compute_summary(today, &txs);
        assert_eq!(s.total_income + s.total_expenses, dec("30"));
        let view = monthly_view(today, &txs);
        let listed = view.fixed.len() + view.variable.len() + view.income.len() + view.credit_card.len();
        assert_eq!(listed, 1);
    }

    #[test]
    fn totals_cover_every_month_transaction_once() {
        let today = day(2025, 5, 20);
        let txs = vec![
            tx("a", TransactionType::Income, "10.10", day(2025, 5, 1)),
            tx("b", TransactionType::Fixed, "20.20", day(2025, 5, 2)),
            tx("c", TransactionType::Variable, "30.30", day(2025, 5, 3)),
            tx("d", TransactionType::CreditCard, "40.40", day(2025, 5, 4)),
            tx("e", TransactionType::Variable, "0.01", day(2025, 5, 4)),
        ];
        let s = compute_summary(today, &txs);
        let all: Decimal = txs.iter().map(|t| t.amount).sum();
        assert_eq!(
            s.total_income + s.total_fixed + s.total_variable + s.total_credit_card,
            all
        );
    }

    #[test]
    fn lists_are_sorted_per_type() {
        let today = day(2025, 5, 20);
        let txs = vec![
            tx("f2", TransactionType::Fixed, "1", day(2025, 5, 15)),
            tx("f1", TransactionType::Fixed, "1", day(2025, 5, 5)),
            tx("v1", TransactionType::Variable, "1", day(2025, 5, 3)),
            tx("v2", TransactionType::Variable, "1", day(2025, 5, 18)),
            tx("i1", TransactionType::Income, "1", day(2025, 5, 1)),
            tx("i2", TransactionType::Income, "1", day(2025, 5, 25)),
        ];
        let view = monthly_view(today, &txs);
        let ids = |v: &[Transaction]| v.iter().map(|t| t.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&view.fixed), ["f1", "f2"]);
        assert_eq!(ids(&view.variable), ["v2", "v1"]);
        assert_eq!(ids(&view.income), ["i2", "i1"]);
    }

    #[test]
    fn same_day_entries_keep_insertion_order() {
        let today = day(2025, 5, 20);
        let txs = vec![
            tx("a", TransactionType::Variable, "1", day(2025, 5, 3)),
            tx("b", TransactionType::Variable, "1", day(2025, 5, 3)),
            tx("c", TransactionType::Variable, "1", day(2025, 5, 9)),
        ];
        let view = monthly_view(today, &txs);
        let groups = group_by_date(&view.variable);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, day(2025, 5, 9));
        let second: Vec<_> = groups[1].1.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(second, ["a", "b"]);
    }

    #[test]
    fn card_invoices_pair_each_card_with_this_month() {
        let today = day(2025, 5, 20);
        let cards = vec![
            Card {
                id: "c1".into(),
                name: "Nubank".into(),
                due_day: 10,
                color: CardColor::Roxo,
                limit: None,
            },
            Card {
                id: "c2".into(),
                name: "Inter".into(),
                due_day: 5,
                color: CardColor::Laranja,
                limit: None,
            },
        ];
        let mut old = tx("old", TransactionType::CreditCard, "50", day(2025, 4, 2));
        old.card_id = Some("c1".into());
        let mut cur = tx("cur", TransactionType::CreditCard, "80", day(2025, 5, 2));
        cur.card_id = Some("c1".into());
        let txs = vec![old, cur];

        let rows = card_invoices(today, &cards, &txs);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].invoice.map(|t| t.id.as_str()), Some("cur"));
        assert!(rows[1].invoice.is_none());
    }

    #[test]
    fn distribution_drops_empty_slices() {
        let s = FinancialSummary {
            total_income: dec("1000"),
            total_fixed: dec("300"),
            total_variable: Decimal::ZERO,
            total_credit_card: dec("800"),
            total_expenses: dec("1100"),
            balance: dec("-100"),
            remaining_budget: dec("-100"),
        };
        let labels: Vec<_> = distribution(&s).iter().map(|s| s.label).collect();
        assert_eq!(labels, ["Fixo", "Cartões"]);
        assert!(distribution(&FinancialSummary::default()).is_empty());
    }
}
