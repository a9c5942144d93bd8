/// Business logic layer
///
/// Handlers stay thin: they parse the request, call the service and map the
/// outcome to a response.
pub mod videos;

pub use videos::VideoService;
