use std::time::Duration;

use async_trait::async_trait;
use common_libs::error::FormResult;
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;

use crate::constants::{ENDPOINT, FORM_CONTENT_TYPE, USER_AGENT};
use crate::model::{ServiceAnswer, WordRequest};

#[async_trait]
pub trait EtymologyTransport: Send + Sync {
    /// One POST of the word form. Any status that came with a readable body
    /// is an answer; only failing to get one is an error.
    async fn post_word(&self, request: &WordRequest) -> FormResult<ServiceAnswer>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> FormResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(HttpTransport {
            client,
            url: to_url(base_url),
        })
    }
}

fn to_url(base_url: &str) -> String {
    let mut url = String::from(base_url.trim().trim_end_matches('/'));
    url.push_str(ENDPOINT);
    url
}

#[async_trait]
impl EtymologyTransport for HttpTransport {
    async fn post_word(&self, request: &WordRequest) -> FormResult<ServiceAnswer> {
        debug!("POST {} body: {}", self.url, request.form_body());
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(request.form_body())
            .send()
            .await?;

        let status = response.status();
        info!("{} answered {}", self.url, status);
        let bytes = response.bytes().await?;
        Ok(ServiceAnswer::new(status.as_u16(), bytes.to_vec()))
    }
}
