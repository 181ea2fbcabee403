// Public entities for the PremiumGuide API
// Request shapes that exist only at the HTTP boundary; the views themselves
// are domain types serialized as-is

// Urlencoded submission of the interactive form
pub mod form;

// BMI calculator query and response
pub mod bmi;
