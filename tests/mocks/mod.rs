pub mod mock_county_resolver;

pub use mock_county_resolver::MockCountyResolver;
