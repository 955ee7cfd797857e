pub mod detail;
pub mod featured;
pub mod home;
pub mod search_results;

pub use detail::DetailPage;
pub use featured::FeaturedSection;
pub use home::HomePage;
pub use search_results::SearchResults;
