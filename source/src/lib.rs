pub mod properties;

mod composition_exclusions;
mod error;
mod unicode;

pub use error::FormatError;
pub use error::SourceError;

pub use unicode::UnicodeData;
pub use unicode::UnicodeRecord;
pub use unicode::UnicodeDataEntry;
pub use unicode::FIELDS_COUNT;

pub use composition_exclusions::CompositionExclusions;
