mod requests;
mod responses;

pub use requests::PostPayload;
pub use responses::HealthResponse;
