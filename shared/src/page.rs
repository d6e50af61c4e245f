//! State of the invoices page that does not depend on the rendering target.

use std::collections::BTreeSet;

use crate::models::{InvoiceStatus, InvoiceSummary, ThemePreference};

pub const DARK_CLASS: &str = "dark";

pub const EMPTY_TITLE: &str = "There is nothing here";

/// Which of the two mutually exclusive bodies the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceListState<'a> {
    Empty,
    Populated(&'a [InvoiceSummary]),
}

impl<'a> InvoiceListState<'a> {
    /// A collection that has not arrived yet counts as empty.
    pub fn from_collection(invoices: Option<&'a [InvoiceSummary]>) -> Self {
        match invoices {
            Some(invoices) if !invoices.is_empty() => InvoiceListState::Populated(invoices),
            _ => InvoiceListState::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, InvoiceListState::Empty)
    }
}

pub fn count_label(len: usize) -> String {
    match len {
        0 => "No invoices".to_string(),
        1 => "1 Invoice".to_string(),
        n => format!("{n} Invoices"),
    }
}

/// Anything with a class list, the document body in the browser.
pub trait ClassList {
    fn add_class(&mut self, class: &str);
}

impl ClassList for Vec<String> {
    fn add_class(&mut self, class: &str) {
        if !self.iter().any(|c| c == class) {
            self.push(class.to_string());
        }
    }
}

/// Per-instance "has run" flag for a side effect that must happen once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnceEffect {
    has_run: bool,
}

impl OnceEffect {
    pub fn has_run(&self) -> bool {
        self.has_run
    }

    /// Runs `effect` on the first call only. Returns whether it ran.
    pub fn run(&mut self, effect: impl FnOnce()) -> bool {
        if self.has_run {
            return false;
        }
        self.has_run = true;
        effect();
        true
    }
}

/// Applies the dark class the first time a resolved preference is seen.
/// Returns true when the class was added.
pub fn apply_dark_mode<C: ClassList>(
    gate: &mut OnceEffect,
    theme: Option<&ThemePreference>,
    target: &mut C,
) -> bool {
    let Some(theme) = theme else {
        return false;
    };
    let mut added = false;
    gate.run(|| {
        if theme.dark_mode {
            target.add_class(DARK_CLASS);
            added = true;
        }
    });
    added
}

pub fn body_class(theme: Option<&ThemePreference>) -> Option<&'static str> {
    theme.filter(|t| t.dark_mode).map(|_| DARK_CLASS)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    open: bool,
}

impl ModalVisibility {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Statuses checked in the filter control. Nothing checked shows everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFilter {
    selected: BTreeSet<InvoiceStatus>,
}

impl StatusFilter {
    pub fn toggle(&mut self, status: InvoiceStatus) {
        if !self.selected.remove(&status) {
            self.selected.insert(status);
        }
    }

    pub fn is_selected(&self, status: InvoiceStatus) -> bool {
        self.selected.contains(&status)
    }

    pub fn matches(&self, invoice: &InvoiceSummary) -> bool {
        self.selected.is_empty() || self.selected.contains(&invoice.status)
    }

    pub fn apply<'a>(&self, invoices: &'a [InvoiceSummary]) -> Vec<&'a InvoiceSummary> {
        invoices.iter().filter(|i| self.matches(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn invoice(reference: &str, status: InvoiceStatus) -> InvoiceSummary {
        InvoiceSummary {
            id: Uuid::new_v4(),
            reference: reference.to_string(),
            client_name: "Alysa Werner".to_string(),
            payment_due: NaiveDate::from_ymd_opt(2021, 10, 12).unwrap(),
            total_cents: 10_200,
            status,
        }
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "No invoices");
        assert_eq!(count_label(1), "1 Invoice");
        assert_eq!(count_label(2), "2 Invoices");
        assert_eq!(count_label(37), "37 Invoices");
    }

    #[test]
    fn test_list_state_is_exclusive_over_length() {
        let all: Vec<_> = (0..5)
            .map(|i| invoice(&format!("AA000{i}"), InvoiceStatus::Pending))
            .collect();
        for len in 0..=all.len() {
            let state = InvoiceListState::from_collection(Some(&all[..len]));
            match state {
                InvoiceListState::Empty => assert_eq!(len, 0),
                InvoiceListState::Populated(rows) => {
                    assert!(len >= 1);
                    assert_eq!(rows.len(), len);
                }
            }
        }
        assert!(InvoiceListState::from_collection(None).is_empty());
    }

    #[test]
    fn test_dark_mode_applied_once() {
        let mut gate = OnceEffect::default();
        let mut body: Vec<String> = vec![];

        assert!(!apply_dark_mode(&mut gate, None, &mut body));
        assert!(!gate.has_run());

        assert!(apply_dark_mode(&mut gate, Some(&ThemePreference { dark_mode: true }), &mut body));
        assert_eq!(body, vec![DARK_CLASS.to_string()]);

        assert!(!apply_dark_mode(&mut gate, Some(&ThemePreference { dark_mode: true }), &mut body));
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn test_light_preference_never_adds_class_later() {
        let mut gate = OnceEffect::default();
        let mut body: Vec<String> = vec![];

        assert!(!apply_dark_mode(&mut gate, Some(&ThemePreference { dark_mode: false }), &mut body));
        assert!(gate.has_run());
        assert!(!apply_dark_mode(&mut gate, Some(&ThemePreference { dark_mode: true }), &mut body));
        assert!(body.is_empty());
    }

    #[test]
    fn test_body_class() {
        assert_eq!(body_class(Some(&ThemePreference { dark_mode: true })), Some("dark"));
        assert_eq!(body_class(Some(&ThemePreference { dark_mode: false })), None);
        assert_eq!(body_class(None), None);
    }

    #[test]
    fn test_modal_visibility() {
        let mut modal = ModalVisibility::default();
        assert!(!modal.is_open());
        modal.open();
        assert!(modal.is_open());
        modal.open();
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_status_filter() {
        let invoices = vec![
            invoice("RT3080", InvoiceStatus::Paid),
            invoice("XM9141", InvoiceStatus::Pending),
            invoice("FV2353", InvoiceStatus::Draft),
        ];
        let mut filter = StatusFilter::default();
        assert_eq!(filter.apply(&invoices).len(), 3);

        filter.toggle(InvoiceStatus::Paid);
        let shown = filter.apply(&invoices);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].reference, "RT3080");

        filter.toggle(InvoiceStatus::Draft);
        assert_eq!(filter.apply(&invoices).len(), 2);

        filter.toggle(InvoiceStatus::Paid);
        filter.toggle(InvoiceStatus::Draft);
        assert!(!filter.is_selected(InvoiceStatus::Paid));
        assert_eq!(filter.apply(&invoices).len(), 3);
    }
}
