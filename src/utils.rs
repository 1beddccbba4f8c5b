// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::ValidationError;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

// 1.234,56 style, thousands separated by dots
static GROUPED_BRL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d{1,3}(\.\d{3})+(,\d+)?$").expect("valid amount pattern"));

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Accepts `15.50`, `15,50` and `1.234,56`.
pub fn parse_amount(s: &str) -> Result<Decimal, ValidationError> {
    let t = s.trim();
    let normalized = if GROUPED_BRL.is_match(t) {
        t.replace('.', "").replace(',', ".")
    } else {
        t.replace(',', ".")
    };
    normalized
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount(s.to_string()))
}

/// `R$ 1.234,56` with a non-breaking space, `-R$ 5,00` for negatives.
pub fn format_brl(d: &Decimal) -> String {
    let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!(
        "{}R$\u{a0}{},{}",
        if negative { "-" } else { "" },
        grouped,
        frac_part
    )
}

pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// e.g. `outubro de 2026`
pub fn month_label(date: NaiveDate) -> String {
    format!("{} de {}", MONTHS_PT[date.month0() as usize], date.year())
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn brl_formatting() {
        assert_eq!(format_brl(&dec("5000")), "R$\u{a0}5.000,00");
        assert_eq!(format_brl(&dec("15.5")), "R$\u{a0}15,50");
        assert_eq!(format_brl(&dec("1234567.891")), "R$\u{a0}1.234.567,89");
        assert_eq!(format_brl(&dec("0.005")), "R$\u{a0}0,01");
        assert_eq!(format_brl(&dec("-1215.5")), "-R$\u{a0}1.215,50");
        assert_eq!(format_brl(&dec("-0.001")), "R$\u{a0}0,00");
    }

    #[test]
    fn amount_parsing() {
        assert_eq!(parse_amount("15,50").unwrap(), dec("15.50"));
        assert_eq!(parse_amount(" 15.50 ").unwrap(), dec("15.50"));
        assert_eq!(parse_amount("1.234,56").unwrap(), dec("1234.56"));
        assert_eq!(parse_amount("340").unwrap(), dec("340"));
        let err = parse_amount("abc").unwrap_err();
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn date_labels() {
        let d = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();
        assert_eq!(format_day_month(d), "05/10");
        assert_eq!(month_label(d), "outubro de 2026");
        assert!(parse_date("2026-13-01").is_err());
    }
}
