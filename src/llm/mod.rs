pub mod openai;
pub mod parser;
pub mod prompts;
pub mod provider;

pub use openai::OpenAiProvider;
pub use prompts::build_prompt;
pub use provider::ChatProvider;
