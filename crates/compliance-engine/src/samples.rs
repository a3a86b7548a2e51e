//! Sample documents pre-filled into the front ends so a comparison runs instantly

/// Sample company SOP, three policy lines framed by blank lines
pub const DEFAULT_SOP: &str = "
All customer data must be encrypted.
Financial records should be reviewed annually.
Employees must complete safety training.
";

/// Sample regulation, four clauses framed by blank lines
pub const DEFAULT_REGULATION: &str = "
All customer data must be encrypted using approved standards.
Financial records must be audited every year.
Employee safety training is mandatory and must be documented.
Data breach incidents must be reported within 72 hours.
";
