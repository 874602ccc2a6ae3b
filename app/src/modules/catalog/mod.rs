pub mod dto;
pub mod filters;
pub mod fragment;
pub mod repository;
pub mod routes;
