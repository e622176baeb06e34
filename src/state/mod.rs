pub mod filter;
pub mod navigation;
pub mod search;
pub mod section;
pub mod sort;

pub use filter::FilterSelections;
pub use navigation::NavigationState;
pub use search::SearchKeyword;
pub use section::{CurrentSection, SectionId};
pub use sort::SortOrder;
