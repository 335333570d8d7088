pub mod fetch_error;
pub mod fetch_params;
pub mod guarded_buffer;
pub mod transfer_envelope;

pub use fetch_error::FetchError;
pub use fetch_params::FetchParams;
pub use guarded_buffer::GuardedBuffer;
pub use transfer_envelope::TransferEnvelope;
