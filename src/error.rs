use std::{error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    EmptyName,
    InvalidOptions,
    PayloadTooLarge,
    SortOrderExhausted,
    MalformedBlock,
    Attach,
}

impl From<ErrorType> for &'static str {
    fn from(error_type: ErrorType) -> &'static str {
        match error_type {
            ErrorType::EmptyName => "EmptyName",
            ErrorType::InvalidOptions => "InvalidOptions",
            ErrorType::PayloadTooLarge => "PayloadTooLarge",
            ErrorType::SortOrderExhausted => "SortOrderExhausted",
            ErrorType::MalformedBlock => "MalformedBlock",
            ErrorType::Attach => "Attach",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let error_type: &str = self.clone().into();
        write!(f, "<BlePropertySheet {} Error>", error_type)
    }
}

impl error::Error for ErrorType {}

#[derive(Debug, Clone)]
pub struct Error {
    name: String,
    description: String,
    combined_description: String,
    error_type: ErrorType,
}

impl Error {
    pub fn new<T: Into<String>>(name: T, description: T, error_type: ErrorType) -> Self {
        let name: String = name.into();
        let description: String = description.into();
        let combined_description = format!("{}: {}", name, description);
        Error {
            name,
            description,
            combined_description,
            error_type,
        }
    }

    pub fn from_type(error_type: ErrorType) -> Self {
        let name: String = error_type.to_string();
        let description: String = error_type.to_string();
        let combined_description = format!("{}: {}", name, description);
        Error {
            name,
            description,
            combined_description,
            error_type,
        }
    }

    pub fn from_string(error: String, error_type: ErrorType) -> Self {
        let name: String = error_type.to_string();
        let description: String = error;
        let combined_description = format!("{}: {}", name, description);
        Error {
            name,
            description,
            combined_description,
            error_type,
        }
    }

    /// Block of `needed` bytes does not fit the `capacity` byte scratch buffer.
    pub(crate) fn payload_too_large(needed: usize, capacity: usize) -> Self {
        Error::from_string(
            format!("block needs {needed} bytes, capacity is {capacity}"),
            ErrorType::PayloadTooLarge,
        )
    }

    pub(crate) fn malformed<T: Into<String>>(description: T) -> Self {
        Error::from_string(description.into(), ErrorType::MalformedBlock)
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.error_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `name: description` in one string, for log lines.
    pub fn combined_description(&self) -> &str {
        &self.combined_description
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let error_type: &str = self.error_type.clone().into();
        write!(
            f,
            "**BlePropertySheet {} Error**\n\n\t{}:\n\t\t{}",
            error_type, self.name, self.description,
        )
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error_type)
    }
}
