mod extractive_qa_client;

pub use extractive_qa_client::ExtractiveQaClient;
