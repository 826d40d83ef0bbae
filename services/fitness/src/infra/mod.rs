pub mod credential;
pub mod db;
pub mod token;
