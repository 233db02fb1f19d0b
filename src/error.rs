use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("cannot {action} while {stage}")]
    InvalidTransition {
        action: &'static str,
        stage: &'static str,
    },

    #[error("Store I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
