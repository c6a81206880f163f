use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectToken {
    #[serde(rename = "type")]
    pub token_type: String,
    pub amount: String, // Decimal string with 4 fractional digits
}

/// Intent sent to the build phase: receive `expect_token` on `chain_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub expect_token: ExpectToken,
    pub chain_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeConfig {
    pub slippage_bps: u32,
    pub universal_gas: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConvertBody<'a> {
    #[serde(flatten)]
    pub request: &'a ConvertRequest,
    pub trade_config: TradeConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RootHashField {
    pub root_hash: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SendBody<'a> {
    pub transaction: &'a serde_json::Value,
    pub signature: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendResponse {
    pub transaction_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RawMessage<'a> {
    pub raw: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignMessageRequest<'a> {
    pub account: &'a str,
    pub message: RawMessage<'a>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignMessageResponse {
    #[serde(default)]
    pub signature: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn convert_body_matches_wire_shape() {
        let request = ConvertRequest {
            expect_token: ExpectToken {
                token_type: "eth".to_string(),
                amount: "0.0200".to_string(),
            },
            chain_id: 8453,
        };
        let body = ConvertBody {
            request: &request,
            trade_config: TradeConfig {
                slippage_bps: 100,
                universal_gas: true,
            },
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "expectToken": { "type": "eth", "amount": "0.0200" },
                "chainId": 8453,
                "tradeConfig": { "slippageBps": 100, "universalGas": true }
            })
        );
    }

    #[test]
    fn sign_request_wraps_hash_as_raw_message() {
        let request = SignMessageRequest {
            account: "0xabc",
            message: RawMessage { raw: "0x1234" },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "account": "0xabc", "message": { "raw": "0x1234" } })
        );
    }
}
