pub mod errors;
pub mod form;
pub mod health;
pub mod premium;

// Re-export handlers for easier imports
pub use errors::ErrorResponse;
pub use form::{show_form, submit_form};
pub use health::health_check;
pub use premium::{
    calculate_bmi, estimate_premium, get_session, predict_session, reset_session, update_profile,
};
