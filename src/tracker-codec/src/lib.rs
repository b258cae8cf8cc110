mod error;
pub use error::{DurationError, RecordError};

mod duration;
pub use duration::parse_duration;

mod record;
pub use record::{RecordLayout, parse_record};
