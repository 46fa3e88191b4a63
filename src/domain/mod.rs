pub mod chart;
pub mod forecast;
pub mod logging;

/// Centralized error handling for the entire application
pub mod errors {
    use std::fmt::{Display, Formatter, Result as FmtResult};

    /// Root error type for the entire application
    #[derive(Debug, Clone)]
    pub enum AppError {
        Domain(DomainError),
        Infrastructure(InfrastructureError),
        Presentation(PresentationError),
    }

    /// Domain layer specific errors
    #[derive(Debug, Clone)]
    pub enum DomainError {
        Validation(ValidationError),
    }

    /// Validation failures raised while turning a raw prediction payload
    /// into a domain forecast
    #[derive(Debug, Clone, PartialEq)]
    pub enum ValidationError {
        MissingField(&'static str),
        EmptySeries,
        SeriesLengthMismatch { dates: usize, prices: usize },
        NonFinitePrice { index: usize },
    }

    /// Infrastructure layer errors
    #[derive(Debug, Clone)]
    pub enum InfrastructureError {
        Network(NetworkError),
        Rendering(RenderingError),
    }

    /// Network-related errors
    #[derive(Debug, Clone)]
    pub enum NetworkError {
        RequestFailed(String),
        HttpStatus { status: u16, status_text: String },
        MalformedBody(String),
    }

    /// Canvas rendering errors
    #[derive(Debug, Clone)]
    pub enum RenderingError {
        CanvasAccessFailed(String),
        DrawFailed(String),
    }

    /// Presentation layer errors
    #[derive(Debug, Clone)]
    pub enum PresentationError {
        ElementNotFound(String),
        BrowserApiUnavailable(&'static str),
    }

    impl Display for AppError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                AppError::Domain(e) => write!(f, "{}", e),
                AppError::Infrastructure(e) => write!(f, "{}", e),
                AppError::Presentation(e) => write!(f, "{}", e),
            }
        }
    }

    impl Display for DomainError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                DomainError::Validation(e) => write!(f, "Invalid prediction payload: {}", e),
            }
        }
    }

    impl Display for ValidationError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                ValidationError::MissingField(field) => write!(f, "missing field '{}'", field),
                ValidationError::EmptySeries => write!(f, "forecast series is empty"),
                ValidationError::SeriesLengthMismatch { dates, prices } => {
                    write!(f, "{} dates but {} prices", dates, prices)
                }
                ValidationError::NonFinitePrice { index } => {
                    write!(f, "non-finite price at index {}", index)
                }
            }
        }
    }

    impl Display for InfrastructureError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                InfrastructureError::Network(e) => write!(f, "{}", e),
                InfrastructureError::Rendering(e) => write!(f, "Rendering: {}", e),
            }
        }
    }

    impl Display for NetworkError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                NetworkError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
                NetworkError::HttpStatus { status, status_text } => {
                    write!(f, "API Error: {} (HTTP {})", status_text, status)
                }
                NetworkError::MalformedBody(msg) => write!(f, "Malformed response: {}", msg),
            }
        }
    }

    impl Display for RenderingError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                RenderingError::CanvasAccessFailed(msg) => {
                    write!(f, "canvas access failed: {}", msg)
                }
                RenderingError::DrawFailed(msg) => write!(f, "draw failed: {}", msg),
            }
        }
    }

    impl Display for PresentationError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                PresentationError::ElementNotFound(id) => {
                    write!(f, "element '{}' not found in DOM", id)
                }
                PresentationError::BrowserApiUnavailable(api) => {
                    write!(f, "browser API unavailable: {}", api)
                }
            }
        }
    }

    impl std::error::Error for AppError {}

    impl From<ValidationError> for AppError {
        fn from(e: ValidationError) -> Self {
            AppError::Domain(DomainError::Validation(e))
        }
    }

    impl From<InfrastructureError> for AppError {
        fn from(e: InfrastructureError) -> Self {
            AppError::Infrastructure(e)
        }
    }

    impl From<NetworkError> for AppError {
        fn from(e: NetworkError) -> Self {
            AppError::Infrastructure(InfrastructureError::Network(e))
        }
    }

    impl From<RenderingError> for AppError {
        fn from(e: RenderingError) -> Self {
            AppError::Infrastructure(InfrastructureError::Rendering(e))
        }
    }

    impl From<PresentationError> for AppError {
        fn from(e: PresentationError) -> Self {
            AppError::Presentation(e)
        }
    }

}
