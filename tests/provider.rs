use std::sync::{Arc, Mutex};

use alloy::primitives::{B256, U256};
use balanced_sdk::{
    NetworkId,
    contracts::{Balanced, SICX_BNUSD_POOL_ID},
    error::{Error, ProviderError},
    provider::{HttpProvider, Provider},
    settings::ContractSettings,
    signer::Wallet,
};
use serde_json::{Value, json};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};
use tokio_test::assert_ok;
use url::Url;

const KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

const TX_HASH: &str = "0x5a6f4bb8ab9a7b3e1c0d8f2e7a6b5c4d3e2f1a0b9c8d7e6f5a4b3c2d1e0f9a8b";

/// JSON-RPC node answering from canned results and recording every request.
struct Node {
    url: Url,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl Node {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = recorded.clone();
                tokio::spawn(async move { serve(stream, recorded).await });
            }
        });

        Self { url, requests }
    }

    fn provider(&self) -> HttpProvider {
        HttpProvider::new(self.url.clone())
    }

    fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

fn reply(request: &Value) -> Value {
    let outcome = match request["method"].as_str() {
        Some("icx_getBalance") => json!({ "result": "0xde0b6b3a7640000" }),
        Some("icx_getTransactionResult") => {
            json!({ "result": { "txHash": request["params"]["txHash"], "status": "0x1" } })
        }
        Some("icx_call") if request["params"]["data"]["method"] == "getPrice" => {
            json!({ "result": "0x14d1120d7b160000" })
        }
        Some("icx_call") => {
            json!({ "error": { "code": -30032, "message": "Reverted(0): Invalid pool id" } })
        }
        Some("icx_sendTransaction") => json!({ "result": TX_HASH }),
        _ => json!({ "error": { "code": -32601, "message": "Method not found" } }),
    };
    let mut body = json!({ "jsonrpc": "2.0", "id": request["id"] });
    body.as_object_mut()
        .unwrap()
        .extend(outcome.as_object().unwrap().clone());
    body
}

async fn serve(mut stream: TcpStream, recorded: Arc<Mutex<Vec<Value>>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    // headers
    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
    };
    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .map(|v| v.trim().parse::<usize>().unwrap())
        .unwrap_or(0);

    while buf.len() < header_end + length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request: Value = serde_json::from_slice(&buf[header_end..header_end + length]).unwrap();
    let body = reply(&request).to_string();
    recorded.lock().unwrap().push(request);

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await.unwrap();
    stream.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_get_balance_request() {
    let node = Node::start().await;
    let provider = node.provider();
    let wallet = Wallet::from_private_key(KEY).unwrap();

    let balance = assert_ok!(provider.get_balance(wallet.address()).await);
    assert_eq!(balance, U256::from(10u64).pow(U256::from(18u64)));

    let requests = node.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["jsonrpc"], json!("2.0"));
    assert_eq!(requests[0]["method"], json!("icx_getBalance"));
    assert_eq!(
        requests[0]["params"],
        json!({ "address": wallet.address().as_str() })
    );
}

#[tokio::test]
async fn test_get_transaction_result_request() {
    let node = Node::start().await;
    let provider = node.provider();
    let hash = TX_HASH.parse::<B256>().unwrap();

    let result = assert_ok!(provider.get_transaction_result(hash).await);
    assert_eq!(result["status"], json!("0x1"));
    assert_eq!(result["txHash"], json!(TX_HASH));

    let requests = node.requests();
    assert_eq!(requests[0]["method"], json!("icx_getTransactionResult"));
    assert_eq!(requests[0]["params"], json!({ "txHash": TX_HASH }));
}

#[tokio::test]
async fn test_call_request_and_revert() {
    let node = Node::start().await;
    let balanced = Balanced::new(ContractSettings::new(NetworkId::Mainnet, node.provider()));

    let price = assert_ok!(balanced.dex.get_price(SICX_BNUSD_POOL_ID).await);
    assert_eq!(price, json!("0x14d1120d7b160000"));

    let err = balanced.dex.get_pool_stats(SICX_BNUSD_POOL_ID).await.unwrap_err();
    let Error::Provider(ProviderError::Reverted(reason)) = err else {
        panic!("expected revert, got {err:?}");
    };
    assert_eq!(reason.code, 32);
    assert_eq!(reason.user_code(), Some(0));

    let requests = node.requests();
    assert_eq!(requests.len(), 2);
    let params = &requests[0]["params"];
    assert_eq!(requests[0]["method"], json!("icx_call"));
    assert_eq!(params["to"], json!(balanced.dex.contract().address().as_str()));
    assert_eq!(params["dataType"], json!("call"));
    assert_eq!(params["data"]["method"], json!("getPrice"));
    assert_eq!(params["data"]["params"]["_id"], json!("0x2"));
    assert_eq!(requests[1]["params"]["data"]["method"], json!("getPoolStats"));
}

#[tokio::test]
async fn test_send_transaction_request() {
    let node = Node::start().await;
    let wallet = Wallet::from_private_key(KEY).unwrap();
    let address = wallet.address().clone();
    let balanced = Balanced::new(
        ContractSettings::new(NetworkId::Yeouido, node.provider()).with_account(wallet),
    );

    let hash = assert_ok!(balanced.staking.stake_icx(U256::from(1u64)).await);
    assert_eq!(hash, TX_HASH.parse::<B256>().unwrap());

    let requests = node.requests();
    assert_eq!(requests.len(), 1);
    let params = &requests[0]["params"];
    assert_eq!(requests[0]["method"], json!("icx_sendTransaction"));
    assert_eq!(params["from"], json!(address.as_str()));
    assert_eq!(params["nid"], json!("0x3"));
    assert_eq!(params["value"], json!("0x1"));
    assert_eq!(params["data"]["method"], json!("stakeICX"));
    assert!(params["signature"].as_str().is_some_and(|s| !s.is_empty()));
}
