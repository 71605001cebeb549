pub mod api_error;
pub mod lookup;
pub mod money;
pub mod reference;
pub mod validation;
