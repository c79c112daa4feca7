//! Remote inventory service.

pub mod deregister;
pub mod http;

pub use deregister::{RemoteDeregistrar, USER_DEVICES_ENDPOINT};
pub use http::{HttpClient, HttpResponse, ReqwestHttpClient};
