pub mod catalog;
pub mod context;
pub mod error;
pub mod field;
pub mod form;
pub mod period;
pub mod schema;
pub mod template;
pub mod trade;

pub use context::DocumentContext;
pub use error::AzubiError;
pub use field::{clean_lines, collect, SelectionField};
pub use form::{FieldInput, FormInput, PeriodInput};
pub use period::ReportingPeriod;
pub use template::TemplateKind;
pub use trade::{Mode, Trade};
