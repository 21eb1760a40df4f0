pub mod llm_client;
pub mod store_client;

pub use llm_client::LlmClient;
pub use store_client::StoreClient;
