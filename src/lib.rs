pub mod api;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod password;
