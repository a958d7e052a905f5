// src/notify/line.rs
// LINE Messaging API broadcast. With a bot whose only friend is the operator,
// a broadcast is effectively a push to self.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use super::{Delivery, Notifier};
use crate::core::net;
use crate::error::DeliveryError;

#[derive(Serialize)]
struct Broadcast<'a> {
    messages: [TextMessage<'a>; 1],
}

#[derive(Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

pub struct LineBroadcast {
    client: Client,
    endpoint: String,
    token: String,
}

impl LineBroadcast {
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = net::client(timeout).map_err(DeliveryError::Client)?;
        Ok(Self { client, endpoint: s!(endpoint), token: s!(token) })
    }
}

impl Notifier for LineBroadcast {
    fn send(&self, text: &str) -> Result<Delivery, DeliveryError> {
        let body = Broadcast { messages: [TextMessage { kind: "text", text }] };

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .map_err(DeliveryError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(DeliveryError::Status { status: status.as_u16(), body });
        }

        logf!("LINE broadcast accepted (HTTP {})", status.as_u16());
        Ok(Delivery::Sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_shape() {
        let body = Broadcast { messages: [TextMessage { kind: "text", text: "空きあり" }] };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "messages": [{ "type": "text", "text": "空きあり" }] }));
    }
}
