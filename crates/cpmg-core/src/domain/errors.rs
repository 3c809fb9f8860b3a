use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ExchangeResult<T> = Result<T, ExchangeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeErrorCategory {
    InvalidParameter,
    InvalidInput,
    IoSystemError,
    DegenerateExchange,
}

impl ExchangeErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InvalidParameter | Self::InvalidInput => 2,
            Self::IoSystemError => 3,
            Self::DegenerateExchange => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidParameter => "InvalidParameterError",
            Self::InvalidInput => "InvalidInputError",
            Self::IoSystemError => "IoSystemError",
            Self::DegenerateExchange => "DegenerateExchangeError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeError {
    category: ExchangeErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl ExchangeError {
    pub fn new(
        category: ExchangeErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn invalid_parameter(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ExchangeErrorCategory::InvalidParameter, placeholder, message)
    }

    pub fn invalid_input(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ExchangeErrorCategory::InvalidInput, placeholder, message)
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ExchangeErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn degenerate_exchange(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            ExchangeErrorCategory::DegenerateExchange,
            placeholder,
            message,
        )
    }

    pub const fn category(&self) -> ExchangeErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }
}

impl Display for ExchangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.as_str(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for ExchangeError {}
