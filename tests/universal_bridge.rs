use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ua_swap_core::entity::SwapTransaction;
use ua_swap_core::universal::{
    ConvertRequest, ExecutionService, ExpectToken, HttpExecutionService, HttpWalletSigner,
    UniversalConfig, WalletSigner,
};

const OWNER: &str = "0x1111111111111111111111111111111111111111";

fn config(server: &MockServer) -> UniversalConfig {
    UniversalConfig {
        service_url: server.uri(),
        project_id: Some("project-1".to_string()),
        slippage_bps: 100,
        universal_gas: true,
        signer_url: server.uri(),
        signature_timeout: Duration::from_secs(2),
        http_timeout: Duration::from_secs(2),
    }
}

#[tokio::test]
async fn convert_transaction_posts_intent_and_trade_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/accounts/{}/convert-transactions", OWNER)))
        .and(header("X-Project-Id", "project-1"))
        .and(body_json(json!({
            "expectToken": { "type": "eth", "amount": "0.0200" },
            "chainId": 8453,
            "tradeConfig": { "slippageBps": 100, "universalGas": true }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rootHash": "0xabc",
            "userOps": [{ "chainId": 8453 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let execution = HttpExecutionService::new(config(&server)).unwrap();
    let request = ConvertRequest {
        expect_token: ExpectToken {
            token_type: "eth".to_string(),
            amount: "0.0200".to_string(),
        },
        chain_id: 8453,
    };

    let transaction = execution
        .create_convert_transaction(OWNER, &request)
        .await
        .unwrap();

    assert_eq!(transaction.root_hash, "0xabc");
    assert_eq!(transaction.descriptor["userOps"][0]["chainId"], 8453);
}

#[tokio::test]
async fn convert_transaction_failure_carries_upstream_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("insufficient liquidity"))
        .mount(&server)
        .await;

    let execution = HttpExecutionService::new(config(&server)).unwrap();
    let request = ConvertRequest {
        expect_token: ExpectToken {
            token_type: "btc".to_string(),
            amount: "1.0000".to_string(),
        },
        chain_id: 1,
    };

    let err = execution
        .create_convert_transaction(OWNER, &request)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("insufficient liquidity"));
}

#[tokio::test]
async fn send_transaction_echoes_descriptor_with_signature() {
    let server = MockServer::start().await;
    let descriptor = json!({ "rootHash": "0xabc", "userOps": [] });

    Mock::given(method("POST"))
        .and(path(format!("/accounts/{}/transactions", OWNER)))
        .and(body_json(json!({
            "transaction": descriptor.clone(),
            "signature": "0xsig"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "transactionId": "tx-42" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let execution = HttpExecutionService::new(config(&server)).unwrap();
    let transaction = SwapTransaction {
        root_hash: "0xabc".to_string(),
        descriptor,
    };

    let receipt = execution
        .send_transaction(OWNER, &transaction, "0xsig")
        .await
        .unwrap();

    assert_eq!(receipt.transaction_id, "tx-42");
    assert_eq!(
        receipt.explorer_url(),
        "https://universalx.app/activity/details?id=tx-42"
    );
}

#[tokio::test]
async fn primary_assets_and_account_options_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{}/primary-assets", OWNER)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalAmountInUSD": 40.5,
            "assets": [
                { "tokenType": "usdc", "amount": 25.0, "amountInUSD": 25.0 },
                { "tokenType": "sol", "amount": 0.1, "amountInUSD": 15.5 }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{}/smart-account-options", OWNER)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ownerAddress": OWNER,
            "smartAccountAddress": "0x2222222222222222222222222222222222222222",
            "solanaSmartAccountAddress": "So1anaSmartAccount111111111111111111111111"
        })))
        .mount(&server)
        .await;

    let execution = HttpExecutionService::new(config(&server)).unwrap();

    let primary = execution.get_primary_assets(OWNER).await.unwrap();
    assert_eq!(primary.assets.len(), 2);
    assert_eq!(primary.assets[1].token_type, "sol");
    assert_eq!(primary.assets[1].amount_in_usd, 15.5);

    let options = execution.get_smart_account_options(OWNER).await.unwrap();
    assert_eq!(options.evm_address, "0x2222222222222222222222222222222222222222");
    assert_eq!(options.owner_address, OWNER);
}

#[tokio::test]
async fn signer_returns_signature_for_raw_hash() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sign-message"))
        .and(body_json(json!({
            "account": OWNER,
            "message": { "raw": "0xabc" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "signature": "0xsig" })))
        .expect(1)
        .mount(&server)
        .await;

    let signer = HttpWalletSigner::new(&config(&server)).unwrap();
    let signature = signer.sign_message(OWNER, "0xabc").await.unwrap();

    assert_eq!(signature.as_deref(), Some("0xsig"));
}

#[tokio::test]
async fn signer_rejection_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sign-message"))
        .respond_with(ResponseTemplate::new(403).set_body_string("user rejected"))
        .mount(&server)
        .await;

    let signer = HttpWalletSigner::new(&config(&server)).unwrap();
    assert_eq!(signer.sign_message(OWNER, "0xabc").await.unwrap(), None);
}

#[tokio::test]
async fn signer_null_signature_is_a_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "signature": null })))
        .mount(&server)
        .await;

    let signer = HttpWalletSigner::new(&config(&server)).unwrap();
    assert_eq!(signer.sign_message(OWNER, "0xabc").await.unwrap(), None);
}

#[tokio::test]
async fn signer_timeout_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "signature": "0xlate" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config(&server);
    config.signature_timeout = Duration::from_millis(200);
    let signer = HttpWalletSigner::new(&config).unwrap();

    assert!(signer.sign_message(OWNER, "0xabc").await.is_err());
}
