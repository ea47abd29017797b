// Application layer - API client use cases and the transport seam
pub mod api_client;
pub mod page_loader;
pub mod transport;
