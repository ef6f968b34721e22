mod repository_filter;

pub use repository_filter::RepositoryFilter;
