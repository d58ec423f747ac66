pub mod fixtures;
pub mod harness;
pub mod reports;
pub mod tester;

pub use fixtures::FixtureSource;
pub use harness::SiteHarness;
pub use tester::*;
