mod auth;
mod backend;
pub mod web;
