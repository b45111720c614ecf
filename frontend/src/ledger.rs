//! Values derived from the cached slices for display.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::model::{Category, EntryType, Transaction};

pub const UNKNOWN_CATEGORY: &str = "Unknown";

pub fn category_name<'a>(categories: &'a [Category], id: &str) -> &'a str {
    categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.name.as_str())
        .unwrap_or(UNKNOWN_CATEGORY)
}

pub fn category_kind(categories: &[Category], id: &str) -> Option<EntryType> {
    categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.kind)
}

/// Net balance. The sign comes from the referenced category, so a transaction whose
/// category is missing counts as an expense.
pub fn running_total(transactions: &[Transaction], categories: &[Category]) -> f64 {
    transactions
        .iter()
        .fold(0.0, |total, transaction| {
            match category_kind(categories, &transaction.category) {
                Some(EntryType::Income) => total + transaction.amount,
                _ => total - transaction.amount,
            }
        })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

pub fn newest_first(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| parse_timestamp(&b.created_at).cmp(&parse_timestamp(&a.created_at)));
    sorted
}

pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

fn format_timestamp_in<Tz>(raw: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw) {
        Some(parsed) => parsed
            .with_timezone(zone)
            .format("%d.%m.%Y %H:%M")
            .to_string(),
        None => raw.to_string(),
    }
}

/// Timestamp for a new transaction, in the same shape browsers produce for `toISOString`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn format_with_commas(value: i64) -> String {
    let s = value.abs().to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_amount(amount: f64, currency_code: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
    format!(
        "{}{}.{:02} {}",
        sign,
        format_with_commas(cents / 100),
        cents % 100,
        currency_code
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, kind: EntryType) -> Category {
        Category {
            id: id.to_string(),
            name: format!("name of {id}"),
            kind,
        }
    }

    fn transaction(id: &str, category: &str, amount: f64, created_at: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            category: category.to_string(),
            amount,
            kind: EntryType::Expense,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn dangling_category_is_unknown() {
        let categories = vec![category("salary", EntryType::Income)];

        assert_eq!(category_name(&categories, "salary"), "name of salary");
        assert_eq!(category_name(&categories, "deleted"), UNKNOWN_CATEGORY);
        assert_eq!(category_kind(&categories, "deleted"), None);
    }

    #[test]
    fn total_uses_category_type() {
        let categories = vec![
            category("salary", EntryType::Income),
            category("food", EntryType::Expense),
        ];
        let transactions = vec![
            transaction("1", "salary", 1000.0, ""),
            transaction("2", "food", 150.0, ""),
            transaction("3", "deleted", 50.0, ""),
        ];

        assert_eq!(running_total(&transactions, &categories), 800.0);
        assert_eq!(running_total(&[], &categories), 0.0);
    }

    #[test]
    fn newest_transactions_come_first() {
        let transactions = vec![
            transaction("old", "x", 1.0, "2024-01-01T09:00:00.000Z"),
            transaction("broken", "x", 1.0, "yesterday"),
            transaction("new", "x", 1.0, "2024-02-01T09:00:00.000Z"),
            transaction("offset", "x", 1.0, "2024-01-15T09:00:00+06:00"),
        ];

        let ids: Vec<_> = newest_first(&transactions)
            .into_iter()
            .map(|t| t.id)
            .collect();

        assert_eq!(ids, ["new", "offset", "old", "broken"]);
    }

    #[test]
    fn timestamps_render_day_first() {
        assert_eq!(
            format_timestamp_in("2024-03-07T18:05:42.123Z", &Utc),
            "07.03.2024 18:05"
        );
        assert_eq!(format_timestamp_in("not a date", &Utc), "not a date");
    }

    #[test]
    fn new_timestamps_parse_back() {
        assert!(parse_timestamp(&now_timestamp()).is_some());
    }

    #[test]
    fn amounts_are_grouped_with_two_decimals() {
        assert_eq!(format_amount(1234.5, "KGS"), "1,234.50 KGS");
        assert_eq!(format_amount(-1000000.0, "KGS"), "-1,000,000.00 KGS");
        assert_eq!(format_amount(0.0, "USD"), "0.00 USD");
        assert_eq!(format_amount(-0.001, "USD"), "0.00 USD");
    }
}
