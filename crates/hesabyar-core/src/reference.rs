//! Static reference table of account natures
//!
//! The table is the degraded-mode answer source: when the service is
//! unreachable or returns unusable content, matches from this table are
//! rendered instead of an explanation.

use std::fmt;

/// Account classification in double-entry bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountKind::Asset => "دارایی",
            AccountKind::Liability => "بدهی",
            AccountKind::Equity => "حقوق صاحبان سرمایه",
            AccountKind::Revenue => "درآمد",
            AccountKind::Expense => "هزینه",
        };
        write!(f, "{}", label)
    }
}

/// Whether increases to an account are recorded as debit or credit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nature {
    Debit,
    Credit,
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Nature::Debit => "بدهکار",
            Nature::Credit => "بستانکار",
        };
        write!(f, "{}", label)
    }
}

/// One row of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountRecord {
    pub name: &'static str,
    pub kind: AccountKind,
    pub nature: Nature,
}

/// The reference table; lookup results keep this order
pub const REFERENCE_ACCOUNTS: [AccountRecord; 6] = [
    AccountRecord {
        name: "صندوق",
        kind: AccountKind::Asset,
        nature: Nature::Debit,
    },
    AccountRecord {
        name: "بانک",
        kind: AccountKind::Asset,
        nature: Nature::Debit,
    },
    AccountRecord {
        name: "فروش",
        kind: AccountKind::Revenue,
        nature: Nature::Credit,
    },
    AccountRecord {
        name: "هزینه",
        kind: AccountKind::Expense,
        nature: Nature::Debit,
    },
    AccountRecord {
        name: "سرمایه",
        kind: AccountKind::Equity,
        nature: Nature::Credit,
    },
    AccountRecord {
        name: "بدهی کوتاه مدت",
        kind: AccountKind::Liability,
        nature: Nature::Credit,
    },
];

/// Case-sensitive substring filter over record names, table order preserved
pub fn lookup(query: &str) -> Vec<&'static AccountRecord> {
    REFERENCE_ACCOUNTS
        .iter()
        .filter(|record| record.name.contains(query))
        .collect()
}

/// Render one record as `name (kind) - nature`
pub fn format_record(record: &AccountRecord) -> String {
    format!("{} ({}) - {}", record.name, record.kind, record.nature)
}

/// Newline-joined formatted matches, `None` when nothing matches
///
/// Both degraded branches (success without content, outright failure) go
/// through this one function.
pub fn fallback_lookup(query: &str) -> Option<String> {
    let matches = lookup(query);
    if matches.is_empty() {
        return None;
    }

    Some(
        matches
            .iter()
            .map(|record| format_record(record))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_name() {
        let matches = lookup("بانک");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "بانک");
        assert_eq!(matches[0].kind, AccountKind::Asset);
        assert_eq!(matches[0].nature, Nature::Debit);
    }

    #[test]
    fn test_lookup_substring_keeps_table_order() {
        // "بدهی کوتاه مدت" contains "بدهی"
        let matches = lookup("هی");
        let names: Vec<&str> = matches.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["بدهی کوتاه مدت"]);
    }

    #[test]
    fn test_lookup_no_match() {
        assert!(lookup("ماشین").is_empty());
    }

    #[test]
    fn test_lookup_is_case_and_script_sensitive() {
        // Latin text never matches the Persian table
        assert!(lookup("bank").is_empty());
    }

    #[test]
    fn test_format_record() {
        let record = &REFERENCE_ACCOUNTS[1];
        assert_eq!(format_record(record), "بانک (دارایی) - بدهکار");
    }

    #[test]
    fn test_fallback_lookup_single_match() {
        assert_eq!(
            fallback_lookup("بانک").as_deref(),
            Some("بانک (دارایی) - بدهکار")
        );
    }

    #[test]
    fn test_fallback_lookup_joins_with_newlines_in_table_order() {
        // Empty query matches every row
        let joined = fallback_lookup("").unwrap();
        let lines: Vec<&str> = joined.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "صندوق (دارایی) - بدهکار",
                "بانک (دارایی) - بدهکار",
                "فروش (درآمد) - بستانکار",
                "هزینه (هزینه) - بدهکار",
                "سرمایه (حقوق صاحبان سرمایه) - بستانکار",
                "بدهی کوتاه مدت (بدهی) - بستانکار",
            ]
        );
    }

    #[test]
    fn test_fallback_lookup_none_when_empty() {
        assert_eq!(fallback_lookup("ماشین"), None);
    }
}
