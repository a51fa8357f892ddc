//! Statement renderers.
//!
//! Presentational collaborators of the statement builder: they consume a
//! finished [`stagebill_statement::StatementData`] and format it, nothing
//! more. Amounts arrive in cents and are displayed as USD with two decimal
//! digits; credits are displayed as plain counts.

pub mod currency;
pub mod html;
pub mod plain;

pub use currency::format_usd;
pub use html::render_html;
pub use plain::render_plain_text;
