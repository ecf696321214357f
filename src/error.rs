use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    Empty,
    NonContiguousId { position: usize, found: usize },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Empty => write!(f, "chapter registry must contain at least one chapter"),
            RegistryError::NonContiguousId { position, found } => {
                write!(
                    f,
                    "chapter at position {} has id {} (expected {})",
                    position,
                    found,
                    position + 1
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive { name: &'static str },
    Negative { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { name } => write!(f, "{} must be greater than zero", name),
            ConfigError::Negative { name, value } => {
                write!(f, "{} must not be negative (got {})", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug)]
pub enum UiError {
    Terminal(Box<dyn std::error::Error + Send + Sync>),
    Logging(String),
    Registry(RegistryError),
    Config(ConfigError),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Terminal(err) => write!(f, "Terminal error: {}", err),
            UiError::Logging(msg) => write!(f, "Logging setup failed: {}", msg),
            UiError::Registry(err) => write!(f, "Chapter registry error: {}", err),
            UiError::Config(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UiError::Terminal(err) => Some(err.as_ref()),
            UiError::Registry(err) => Some(err),
            UiError::Config(err) => Some(err),
            UiError::Logging(_) => None,
        }
    }
}

impl From<std::io::Error> for UiError {
    fn from(err: std::io::Error) -> Self {
        UiError::Terminal(Box::new(err))
    }
}

impl From<RegistryError> for UiError {
    fn from(err: RegistryError) -> Self {
        UiError::Registry(err)
    }
}

impl From<ConfigError> for UiError {
    fn from(err: ConfigError) -> Self {
        UiError::Config(err)
    }
}
