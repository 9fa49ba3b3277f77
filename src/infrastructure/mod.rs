// Infrastructure layer - Configuration, data source and HTTP encoding
pub mod chunked_json;
pub mod config;
pub mod http_response;
pub mod memory_repository;
pub mod mock_data;
