// Deep-link bindings - per-concern adapters between UI widgets and the controller
pub mod filter;
pub mod search;
pub mod sort;

pub use filter::FilterBinding;
pub use search::SearchBinding;
pub use sort::SortBinding;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::controller::{ControllerOptions, NavigationController};
    use crate::registry::{SectionDescriptor, SectionRegistry};
    use crate::url::{FilterParam, FragmentCodec, SessionHistory};

    pub fn controller(fragment: &str) -> NavigationController {
        let registry = SectionRegistry::new([
            SectionDescriptor::new("featured", "featured"),
            SectionDescriptor::new("accelerators", "accelerators"),
        ]);
        let codec = FragmentCodec::new(
            registry,
            vec![
                FilterParam::new("industries", "industries"),
                FilterParam::new("programmingLanguages", "languages"),
            ],
        );
        NavigationController::new(codec, SessionHistory::new(fragment), ControllerOptions::default())
    }
}
