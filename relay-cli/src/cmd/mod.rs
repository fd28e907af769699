pub mod execute;
pub mod inspect;
pub mod validate;
