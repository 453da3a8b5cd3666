use std::collections::BTreeMap;

use crate::period::ReportingPeriod;
use crate::trade::{Mode, Trade};

/// Everything a template needs, captured from one filled-in form.
///
/// Built fresh for every render and never mutated afterwards. Lookups are
/// forgiving: an unknown field reads as an empty list and a blank scalar
/// reads as absent, so templates never have to fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContext {
    pub trade: Trade,
    pub mode: Mode,
    pub period: Option<ReportingPeriod>,
    pub fields: BTreeMap<String, Vec<String>>,
    pub scalars: BTreeMap<String, String>,
}

impl DocumentContext {
    pub fn new(trade: Trade, mode: Mode) -> Self {
        Self {
            trade,
            mode,
            period: None,
            fields: BTreeMap::new(),
            scalars: BTreeMap::new(),
        }
    }

    pub fn with_period(mut self, period: ReportingPeriod) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_field<I, S>(mut self, name: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .insert(name.to_string(), items.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_scalar(mut self, name: &str, value: impl Into<String>) -> Self {
        self.scalars.insert(name.to_string(), value.into());
        self
    }

    /// Merged items of a field, empty if the field was never filled.
    pub fn field(&self, name: &str) -> &[String] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Trimmed scalar value, `None` when missing or blank.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.scalars
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn mode_label(&self) -> &'static str {
        self.mode.label(self.trade)
    }

    pub fn period_label(&self) -> Option<String> {
        self.period.map(|p| p.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_empty() {
        let ctx = DocumentContext::new(Trade::Bueromanagement, Mode::Ausbildung);
        assert!(ctx.field("tools").is_empty());
    }

    #[test]
    fn blank_scalar_is_absent() {
        let ctx = DocumentContext::new(Trade::Metall, Mode::Ausbildung)
            .with_scalar("toleranzen", "   ")
            .with_scalar("lernziel", "  Passung H7 herstellen ");
        assert_eq!(ctx.scalar("toleranzen"), None);
        assert_eq!(ctx.scalar("kontext"), None);
        assert_eq!(ctx.scalar("lernziel"), Some("Passung H7 herstellen"));
    }

    #[test]
    fn with_field_keeps_order() {
        let ctx = DocumentContext::new(Trade::Bueromanagement, Mode::Ausbildung)
            .with_field("tools", ["MS Word", "MS Excel"]);
        assert_eq!(ctx.field("tools"), ["MS Word", "MS Excel"]);
    }
}
