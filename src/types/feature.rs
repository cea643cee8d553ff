/// Web app sections the shell can open directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    Dashboard,
    StockAnalysis,
    Recommendations,
    Portfolio,
    Profile,
    Help,
    /// Any other section; routed by name, titled generically.
    Other(String),
}

impl Feature {
    /// Parses a feature tag. A missing or empty tag opens the dashboard.
    /// Tags are matched exactly, without trimming.
    pub fn parse(tag: Option<&str>) -> Self {
        match tag {
            None | Some("") | Some("dashboard") => Feature::Dashboard,
            Some("stock_analysis") => Feature::StockAnalysis,
            Some("recommendations") => Feature::Recommendations,
            Some("portfolio") => Feature::Portfolio,
            Some("profile") => Feature::Profile,
            Some("help") => Feature::Help,
            Some(other) => Feature::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Feature::Dashboard => "dashboard",
            Feature::StockAnalysis => "stock_analysis",
            Feature::Recommendations => "recommendations",
            Feature::Portfolio => "portfolio",
            Feature::Profile => "profile",
            Feature::Help => "help",
            Feature::Other(tag) => tag,
        }
    }
}
