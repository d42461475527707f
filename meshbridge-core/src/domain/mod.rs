pub mod credentials;
pub mod error;
pub mod fields;
pub mod naming;
pub mod request;
pub mod value;

// Re-exports to keep imports short elsewhere
pub use credentials::{Credentials, SecretString};
pub use error::DomainError;
pub use fields::StandardFieldSet;
pub use request::{Connection, CreateAssetRequest, ResourceDetails};
pub use value::{ConfigMap, ConfigValue};
