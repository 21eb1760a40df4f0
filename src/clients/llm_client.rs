//! LLM client - infrastructure layer
//!
//! One client per credential, built on `async-openai` against any
//! OpenAI-compatible endpoint (the default config points at Gemini's
//! compatibility API). Key rotation lives a layer up in `LlmService`;
//! this type knows nothing about it.

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use tracing::{debug, warn};

/// A single-credential chat-completion client
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmClient {
    pub fn new(api_key: &str, api_base: &str, model_name: impl Into<String>) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        Self {
            client: Client::with_config(openai_config),
            model_name: model_name.into(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Send one chat completion.
    ///
    /// # Arguments
    /// - `user_message`: the prompt
    /// - `system_message`: optional system framing
    /// - `json_mode`: request a JSON-object response from the model
    ///
    /// # Returns
    /// The trimmed completion text.
    pub async fn chat(
        &self,
        user_message: &str,
        system_message: Option<&str>,
        json_mode: bool,
    ) -> Result<String> {
        debug!("calling LLM API, model: {}", self.model_name);
        debug!("user message length: {} chars", user_message.len());

        let mut messages = Vec::new();

        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        let mut request_args = CreateChatCompletionRequestArgs::default();
        request_args
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.7)
            .max_tokens(8192u32);

        if json_mode {
            request_args.response_format(ResponseFormat::JsonObject);
        }

        let request = request_args.build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API call failed: {}", e);
            anyhow::anyhow!("LLM API call failed: {}", e)
        })?;

        debug!("LLM API call succeeded");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| crate::error::AppError::EmptyCompletion {
                model: self.model_name.clone(),
            })?;

        Ok(content.trim().to_string())
    }
}
