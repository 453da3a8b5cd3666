use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::DocumentContext;
use crate::error::AzubiError;
use crate::field::collect;
use crate::period::ReportingPeriod;
use crate::schema::{self, FieldSpec, ScalarSpec, Schema};
use crate::trade::{Mode, Trade};

/// A filled-in form as read from disk.
///
/// Fields and scalars left out of the document fall back to the schema
/// defaults, so an empty form is the same as a freshly reset one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub trade: Trade,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodInput>,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldInput>,
    #[serde(default)]
    pub scalars: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInput {
    #[serde(default)]
    pub selected: Vec<String>,
    #[serde(default)]
    pub free_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInput {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl FormInput {
    pub fn new(trade: Trade, mode: Mode) -> Self {
        Self {
            trade,
            mode,
            period: None,
            fields: BTreeMap::new(),
            scalars: BTreeMap::new(),
        }
    }

    /// The untouched form for a trade: every field and scalar at its default.
    pub fn skeleton(trade: Trade, mode: Mode) -> Self {
        let schema = schema::schema_for(trade, mode);
        let mut form = Self::new(trade, mode);
        for spec in schema.fields {
            form.fields.insert(spec.name.to_string(), FieldInput::defaults_for(spec));
        }
        for spec in schema.scalars {
            form.scalars.insert(spec.name.to_string(), default_value(spec));
        }
        form
    }

    pub fn from_json(raw: &str) -> Result<Self, AzubiError> {
        serde_json::from_str(raw).map_err(|e| AzubiError::InvalidInput(format!("form: {e}")))
    }

    /// Validate against the trade's schema and run the collector for every field.
    ///
    /// `today` anchors the default reporting period (Monday of this week
    /// through today) for office forms that do not name one.
    pub fn into_context(self, today: NaiveDate) -> Result<DocumentContext, AzubiError> {
        let schema = schema::schema_for(self.trade, self.mode);
        reject_unknown_names(&schema, &self)?;

        let mut ctx = DocumentContext::new(self.trade, self.mode);
        ctx.period = match self.period {
            Some(p) => Some(ReportingPeriod::new(p.from, p.to)),
            None if self.trade == Trade::Bueromanagement => {
                Some(ReportingPeriod::current_week(today))
            }
            None => None,
        };

        let mut fields = self.fields;
        for spec in schema.fields {
            let input = fields
                .remove(spec.name)
                .unwrap_or_else(|| FieldInput::defaults_for(spec));
            let merged = collect_field(spec, &input)?;
            ctx.fields.insert(spec.name.to_string(), merged);
        }

        let mut scalars = self.scalars;
        for spec in schema.scalars {
            let value = match scalars.remove(spec.name) {
                Some(v) => scalar_text(spec.name, v)?,
                None => spec.default.to_string(),
            };
            let value = validate_scalar(spec, value)?;
            ctx.scalars.insert(spec.name.to_string(), value);
        }

        Ok(ctx)
    }
}

impl FieldInput {
    pub fn defaults_for(spec: &FieldSpec) -> Self {
        Self {
            selected: spec.defaults.iter().map(|s| s.to_string()).collect(),
            free_text: String::new(),
        }
    }
}

fn reject_unknown_names(schema: &Schema, form: &FormInput) -> Result<(), AzubiError> {
    if let Some(name) = form.fields.keys().find(|n| schema.field(n).is_none()) {
        return Err(AzubiError::UnknownField(name.clone()));
    }
    if let Some(name) = form.scalars.keys().find(|n| schema.scalar(n).is_none()) {
        return Err(AzubiError::UnknownField(name.clone()));
    }
    Ok(())
}

fn collect_field(spec: &FieldSpec, input: &FieldInput) -> Result<Vec<String>, AzubiError> {
    if let Some(option) = input.selected.iter().find(|s| !spec.catalog.contains(&s.as_str())) {
        return Err(AzubiError::UnknownOption {
            field: spec.name.to_string(),
            option: option.clone(),
        });
    }
    if !spec.free_text && !input.free_text.trim().is_empty() {
        return Err(AzubiError::InvalidInput(format!(
            "{} accepts catalog selections only",
            spec.name
        )));
    }
    Ok(collect(spec.catalog, &input.selected, &input.free_text))
}

fn scalar_text(name: &str, value: Value) -> Result<String, AzubiError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(AzubiError::InvalidInput(format!(
            "{name}: expected text or number, got {other}"
        ))),
    }
}

fn validate_scalar(spec: &ScalarSpec, value: String) -> Result<String, AzubiError> {
    let trimmed = value.trim();
    if spec.is_choice() && !spec.choices.contains(&trimmed) {
        return Err(AzubiError::UnknownOption {
            field: spec.name.to_string(),
            option: value,
        });
    }
    if spec.name == schema::ZEIT_MIN {
        let minutes: u32 = trimmed.parse().map_err(|_| {
            AzubiError::InvalidInput(format!("{}: not a number of minutes: {value:?}", spec.name))
        })?;
        if !schema::ZEIT_MIN_RANGE.contains(&minutes) {
            return Err(AzubiError::InvalidInput(format!(
                "{}: {minutes} outside {}..={}",
                spec.name,
                schema::ZEIT_MIN_RANGE.start(),
                schema::ZEIT_MIN_RANGE.end()
            )));
        }
        return Ok(minutes.to_string());
    }
    Ok(value)
}

fn default_value(spec: &ScalarSpec) -> Value {
    if spec.name == schema::ZEIT_MIN {
        return Value::from(schema::ZEIT_MIN_DEFAULT);
    }
    Value::String(spec.default.to_string())
}
