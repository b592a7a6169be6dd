use std::fmt;

/// Why a required input collection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeProblem {
    Missing,
    NotSequence,
    Empty,
}

impl fmt::Display for ShapeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "is missing"),
            Self::NotSequence => write!(f, "is not an array"),
            Self::Empty => write!(f, "is empty"),
        }
    }
}

/// Error category. Callers map these to exit codes or retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputShape,
    Config,
    ReferentialIntegrity,
}

#[derive(Debug)]
pub enum AnalyzeError {
    /// A required collection is absent, not an array, or empty.
    InputShape { collection: &'static str, problem: ShapeProblem },
    /// Two sellers share an id, or two products share a sku.
    DuplicateKey { collection: &'static str, key: String },
    /// An element of a collection failed to deserialize.
    DataParse { collection: &'static str, message: String },
    /// Options were built without one of the two strategies.
    MissingStrategy(&'static str),
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (percent out of range, zero limit).
    ConfigValidation(String),
    /// Purchase record references a seller that does not exist.
    UnknownSeller { record: String, seller_id: String },
    /// Line item references a product that does not exist.
    UnknownProduct { record: String, sku: String },
}

impl AnalyzeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputShape { .. } | Self::DuplicateKey { .. } | Self::DataParse { .. } => {
                ErrorKind::InputShape
            }
            Self::MissingStrategy(_) | Self::ConfigParse(_) | Self::ConfigValidation(_) => {
                ErrorKind::Config
            }
            Self::UnknownSeller { .. } | Self::UnknownProduct { .. } => {
                ErrorKind::ReferentialIntegrity
            }
        }
    }
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputShape { collection, problem } => {
                write!(f, "invalid input: '{collection}' {problem}")
            }
            Self::DuplicateKey { collection, key } => {
                write!(f, "invalid input: '{collection}' contains duplicate key '{key}'")
            }
            Self::DataParse { collection, message } => {
                write!(f, "invalid input: cannot parse '{collection}': {message}")
            }
            Self::MissingStrategy(name) => write!(f, "config error: strategy '{name}' is not set"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::UnknownSeller { record, seller_id } => {
                write!(f, "record '{record}': unknown seller '{seller_id}'")
            }
            Self::UnknownProduct { record, sku } => {
                write!(f, "record '{record}': unknown product '{sku}'")
            }
        }
    }
}

impl std::error::Error for AnalyzeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let shape = AnalyzeError::InputShape { collection: "sellers", problem: ShapeProblem::Empty };
        assert_eq!(shape.kind(), ErrorKind::InputShape);
        assert_eq!(AnalyzeError::MissingStrategy("calculate_bonus").kind(), ErrorKind::Config);
        let dangling = AnalyzeError::UnknownProduct { record: "#3".into(), sku: "SKU_404".into() };
        assert_eq!(dangling.kind(), ErrorKind::ReferentialIntegrity);
    }

    #[test]
    fn display_names_collection() {
        let err = AnalyzeError::InputShape {
            collection: "purchase_records",
            problem: ShapeProblem::NotSequence,
        };
        assert_eq!(err.to_string(), "invalid input: 'purchase_records' is not an array");
    }
}
