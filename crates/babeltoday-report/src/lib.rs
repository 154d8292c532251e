//! HTML report rendering for babeltoday.
//!
//! Turns a computed [`babeltoday_core::SupportMatrix`] into a complete
//! static HTML document. Rendering is deterministic: the generated-on date
//! is injected by the caller through [`ReportOptions`], never read from the
//! clock here.

pub mod html;

pub use html::{render_report, ReportOptions};
