pub mod targets {
    pub const ANALYSIS: &str = "analysis";
    pub const BACKJUMP: &str = "backjump";
    pub const CHOICE: &str = "choice";
    pub const CLAUSE_DB: &str = "clause_db";
    pub const PARSER: &str = "parser";
    pub const PROPAGATION: &str = "propagation";
    pub const QUEUE: &str = "queue";
    pub const REDUCTION: &str = "reduction";
    pub const RESOLUTION: &str = "resolution";
    pub const VALUATION: &str = "valuation";
}
