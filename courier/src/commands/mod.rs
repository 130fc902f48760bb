pub mod brand;
pub mod message;
pub mod paginate;
pub mod template;
