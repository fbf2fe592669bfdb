mod envelope;
pub use self::envelope::{DayEnvelope, Envelope};

mod category;
pub use self::category::Category;

mod entry;
pub use self::entry::{Entry, EntryID};

mod day;
pub use self::day::DayDigest;

mod digest;
pub use self::digest::Digest;

mod search;
pub use self::search::SearchHit;
