//! Company module: three-layer architecture (domain, repository, service).
//!
//! Company lifecycle rules live in the service; storage is behind `CompanyRepository`.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Company, CompanyFilter, CompanyPatch, NewCompany};
pub use errors::CompanyError;
pub use repository::CompanyRepository;
pub use service::CompanyService;
