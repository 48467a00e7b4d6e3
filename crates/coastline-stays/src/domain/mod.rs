mod content;
mod enquiry;
mod property;
mod taxonomy;

pub use content::{CategoryRef, ContentId, ContentItem};
pub use enquiry::{ContactEnquiry, PropertyEnquiry};
pub use property::{Property, PropertyId, Review};
pub use taxonomy::{TaxonomyEntry, TaxonomySet};
