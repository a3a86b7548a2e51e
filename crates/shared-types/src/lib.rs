pub mod types;

pub use types::{
    ComparisonResult, ComplianceStatus, ComplianceSummary, Document, ResultSet,
};
