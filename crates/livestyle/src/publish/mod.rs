//! Rule serialization and injection.
//!
//! This module provides:
//!
//! - [`CompiledRule`]: a selector plus its declarations, rendered as CSS text
//! - [`StyleSink`]: the page-stylesheet interface rules are injected into
//! - [`PageStyleSheet`]: an in-memory sink holding one rule per selector
//! - [`Publisher`]: owns a sink and keeps exactly one managed rule per selector
//!
//! Rules are upserted by selector rather than appended, so repeated edits
//! never accumulate stale rules in the page.

mod compiled;
mod page;
mod publisher;
mod sink;

pub use compiled::CompiledRule;
pub use page::PageStyleSheet;
pub use publisher::Publisher;
pub use sink::StyleSink;
