pub mod company;
pub mod db;
pub mod errors;
pub mod invoice;
