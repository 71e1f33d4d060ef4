pub mod branch;
pub mod prefix;

pub use branch::BranchRef;
pub use prefix::IssuePrefix;
