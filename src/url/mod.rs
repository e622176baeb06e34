pub mod codec;
pub mod history;

pub use codec::{FilterParam, FragmentCodec, KEYWORD_PARAM, SECTION_PARAM, SORT_PARAM};
pub use history::{HistoryBackend, SessionHistory, Traversal};
