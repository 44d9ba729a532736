//! Webhook request types

use serde::Deserialize;

/// Fields the gateway posts for an inbound SMS
///
/// Gateways send many more fields (`MessageSid`, `To`, ...); only these two
/// matter here and the rest are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RawInboundSms {
    #[serde(rename = "From", default)]
    pub from: Option<String>,
    #[serde(rename = "Body", default)]
    pub body: Option<String>,
}

/// An inbound message with a sender that is known to be present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundSms {
    pub sender: String,
    pub body: String,
}

/// The request carried no usable sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingSender;

impl TryFrom<RawInboundSms> for InboundSms {
    type Error = MissingSender;

    fn try_from(raw: RawInboundSms) -> Result<Self, Self::Error> {
        let sender = raw
            .from
            .map(|from| from.trim().to_string())
            .filter(|from| !from.is_empty())
            .ok_or(MissingSender)?;

        Ok(Self {
            sender,
            body: raw.body.unwrap_or_default(),
        })
    }
}
