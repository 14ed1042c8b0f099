pub mod debounce;
pub mod registry_service;
