pub mod contact_type;
pub mod endpoint_status;

pub use contact_type::ContactType;
pub use endpoint_status::EndpointStatus;
