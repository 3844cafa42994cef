pub mod account_service;
pub mod error;
pub mod use_cases;

// Re-export commonly used types
pub use account_service::{AccountService, SessionSettings};
pub use error::AccountError;
pub use use_cases::{
    current_session::CurrentSessionUseCase,
    get_user::GetUserUseCase,
    login::{LoginRequest, LoginResponse, LoginUseCase},
    register::{RegisterRequest, RegisterResponse, RegisterUseCase},
    update_profile::{UpdateProfileRequest, UpdateProfileUseCase},
};
