//! Wallet processing: one key at a time, decode → balance → sign → mint.
//!
//! [`WalletProcessor::run`] is the per-key error boundary. A failing key is
//! reported and recorded in the [`BatchReport`]; the next key is processed
//! regardless. Keys are never processed concurrently.

use std::fmt;
use std::future::Future;

use crate::error::{WalletError, WalletResult};
use crate::keys::{decode_private_key, KeyScheme, SuiAddress, SuiKeypair};
use crate::mint::{sign_mint_request, MintClient, MintRequest, MintResponse, MintResult};
use crate::rpc::{Balance, RpcResult, SuiRpcClient};
use crate::shared::format_balance;

/// Source of on-chain balances.
pub trait BalanceSource {
    fn get_balance(&self, owner: &SuiAddress) -> impl Future<Output = RpcResult<Balance>> + Send;
}

/// Destination for signed mint requests.
pub trait MintSubmitter {
    fn submit_mint(
        &self,
        request: &MintRequest,
    ) -> impl Future<Output = MintResult<MintResponse>> + Send;
}

impl BalanceSource for SuiRpcClient {
    async fn get_balance(&self, owner: &SuiAddress) -> RpcResult<Balance> {
        SuiRpcClient::get_balance(self, owner).await
    }
}

impl MintSubmitter for MintClient {
    async fn submit_mint(&self, request: &MintRequest) -> MintResult<MintResponse> {
        self.submit(request).await
    }
}

/// Everything learned about one successfully processed wallet.
#[derive(Debug, Clone)]
pub struct WalletReport {
    pub address: SuiAddress,
    /// Total balance in MIST
    pub balance_mist: u128,
    pub request: MintRequest,
    pub response: MintResponse,
}

/// Result of processing one encoded key.
#[derive(Debug)]
pub struct KeyOutcome {
    pub key: String,
    pub result: WalletResult<WalletReport>,
}

impl KeyOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a whole batch, in key order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<KeyOutcome>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    /// Outcomes that ended in an error.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &WalletError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.key.as_str(), e)))
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} keys: {} succeeded, {} failed",
            self.len(),
            self.succeeded(),
            self.failed()
        )
    }
}

/// The `<address>: <sui> SUI (<mist> MIST)` line.
pub fn balance_line(address: &SuiAddress, mist: u128) -> String {
    format!("{}: {}", address, format_balance(mist))
}

/// Processes encoded keys against a balance source and a mint endpoint.
#[derive(Debug, Clone)]
pub struct WalletProcessor<B, M> {
    balances: B,
    mint: M,
}

impl<B, M> WalletProcessor<B, M>
where
    B: BalanceSource,
    M: MintSubmitter,
{
    pub fn new(balances: B, mint: M) -> Self {
        Self { balances, mint }
    }

    /// Process a single encoded key, printing its balance and mint result.
    pub async fn process_key(&self, key: &str) -> WalletResult<WalletReport> {
        let decoded = decode_private_key(key)?;
        if decoded.scheme() != KeyScheme::Ed25519 {
            tracing::warn!(scheme = %decoded.scheme(), "Key flag is not ed25519, deriving as ed25519");
        }

        let keypair = SuiKeypair::from_decoded(&decoded);
        let address = keypair.address();

        let balance = self.balances.get_balance(&address).await?;
        println!("\n{}", balance_line(&address, balance.total_balance));

        let request = sign_mint_request(&keypair);
        let response = self.mint.submit_mint(&request).await?;
        println!("{}", response);

        Ok(WalletReport {
            address,
            balance_mist: balance.total_balance,
            request,
            response,
        })
    }

    /// Process every key in order, one at a time.
    ///
    /// Errors are printed to stderr together with the offending key and never
    /// stop the batch.
    pub async fn run<I, S>(&self, keys: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut report = BatchReport::default();

        for key in keys {
            let key = key.into();
            let result = self.process_key(&key).await;

            if let Err(e) = &result {
                eprintln!("Error processing key {}: {}", key, e);
                tracing::warn!(index = report.len(), error = %e, "Wallet processing failed");
            }

            report.outcomes.push(KeyOutcome { key, result });
        }

        tracing::info!(
            total = report.len(),
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Batch finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    use bech32::{Bech32, Hrp};

    use crate::keys::KeyError;
    use crate::mint::MintError;
    use crate::rpc::RpcError;

    fn encode_payload(payload: &[u8]) -> String {
        bech32::encode::<Bech32>(Hrp::parse("suiprivkey").unwrap(), payload).unwrap()
    }

    fn encode_key(fill: u8) -> String {
        let mut payload = vec![fill; 33];
        payload[0] = 0x00;
        encode_payload(&payload)
    }

    fn address_of(fill: u8) -> SuiAddress {
        SuiKeypair::from_seed(&[fill; 32]).address()
    }

    #[derive(Default)]
    struct FakeBalances {
        calls: Mutex<Vec<SuiAddress>>,
        failing: HashSet<SuiAddress>,
    }

    impl BalanceSource for FakeBalances {
        async fn get_balance(&self, owner: &SuiAddress) -> RpcResult<Balance> {
            self.calls.lock().unwrap().push(*owner);
            if self.failing.contains(owner) {
                return Err(RpcError::JsonRpc {
                    code: -32000,
                    message: "node unavailable".to_string(),
                });
            }
            Ok(Balance {
                coin_type: "0x2::sui::SUI".to_string(),
                coin_object_count: 1,
                total_balance: 1_500_000_000,
            })
        }
    }

    #[derive(Default)]
    struct FakeMint {
        requests: Mutex<Vec<MintRequest>>,
        rejecting: HashSet<String>,
    }

    impl MintSubmitter for FakeMint {
        async fn submit_mint(&self, request: &MintRequest) -> MintResult<MintResponse> {
            self.requests.lock().unwrap().push(request.clone());
            if self.rejecting.contains(&request.address) {
                return Err(MintError::RequestFailed {
                    status: 429,
                    status_text: "Too Many Requests".to_string(),
                });
            }
            Ok(MintResponse {
                status: Some("queued".into()),
                message: Some("accepted".into()),
                request_hash: Some(format!("hash-{}", request.address).into()),
                queue_position: Some(serde_json::Value::from(1u64)),
            })
        }
    }

    #[tokio::test]
    async fn test_process_key_success() {
        let processor = WalletProcessor::new(FakeBalances::default(), FakeMint::default());
        let report = processor.process_key(&encode_key(7)).await.unwrap();

        assert_eq!(report.address, address_of(7));
        assert_eq!(report.balance_mist, 1_500_000_000);
        assert_eq!(report.request.network, "mainnet");
        assert!(report.request.message.contains(&report.address.to_string()));
        assert_eq!(report.response.status, Some("queued".into()));
    }

    #[tokio::test]
    async fn test_invalid_length_skips_network() {
        let processor = WalletProcessor::new(FakeBalances::default(), FakeMint::default());
        let err = processor
            .process_key(&encode_payload(&[0u8; 32]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WalletError::Key(KeyError::InvalidKeyLength { actual: 32 })
        ));
        assert!(processor.balances.calls.lock().unwrap().is_empty());
        assert!(processor.mint.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_balance_failure_skips_mint() {
        let balances = FakeBalances {
            failing: HashSet::from([address_of(3)]),
            ..Default::default()
        };
        let processor = WalletProcessor::new(balances, FakeMint::default());
        let err = processor.process_key(&encode_key(3)).await.unwrap_err();

        assert!(matches!(err, WalletError::Rpc(RpcError::JsonRpc { code: -32000, .. })));
        assert!(processor.mint.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_batch() {
        let keys = vec![
            encode_key(1),
            "suiprivkey1notvalid".to_string(),
            encode_key(3),
            encode_key(4),
            encode_key(5),
        ];
        let processor = WalletProcessor::new(FakeBalances::default(), FakeMint::default());
        let report = processor.run(keys.clone()).await;

        assert_eq!(report.len(), 5);
        assert_eq!(report.succeeded(), 4);
        assert_eq!(report.failed(), 1);

        let keys_seen: Vec<&str> = report.outcomes.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys_seen, keys.iter().map(String::as_str).collect::<Vec<_>>());
        assert!(!report.outcomes[1].is_success());

        let submitted: Vec<String> = processor
            .mint
            .requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.address.clone())
            .collect();
        let expected: Vec<String> = [1u8, 3, 4, 5]
            .iter()
            .map(|fill| address_of(*fill).to_string())
            .collect();
        assert_eq!(submitted, expected);
    }

    #[tokio::test]
    async fn test_rejected_mint_reports_status() {
        let mint = FakeMint {
            rejecting: HashSet::from([address_of(2).to_string()]),
            ..Default::default()
        };
        let processor = WalletProcessor::new(FakeBalances::default(), mint);
        let report = processor
            .run([encode_key(1), encode_key(2), encode_key(3)])
            .await;

        assert_eq!(report.succeeded(), 2);
        let failures: Vec<(&str, &WalletError)> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, encode_key(2));
        assert_eq!(
            failures[0].1.to_string(),
            "API request failed: 429 Too Many Requests"
        );
        assert!(report.outcomes[2].is_success());
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let processor = WalletProcessor::new(FakeBalances::default(), FakeMint::default());
        let report = processor.run(Vec::<String>::new()).await;

        assert!(report.is_empty());
        assert_eq!(report.to_string(), "Processed 0 keys: 0 succeeded, 0 failed");
        assert!(processor.balances.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_keys_processed_twice() {
        let processor = WalletProcessor::new(FakeBalances::default(), FakeMint::default());
        let report = processor.run([encode_key(9), encode_key(9)]).await;

        assert_eq!(report.succeeded(), 2);
        assert_eq!(processor.mint.requests.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_balance_line() {
        let address = address_of(7);
        assert_eq!(
            balance_line(&address, 1_500_000_000),
            "0xa0ccc8bcc83f6c628340134f8546a21e0618fd1aaa02432bba454c4a2c2233da: 1.50 SUI (1500000000 MIST)"
        );
    }

    #[test]
    fn test_report_summary() {
        let report = BatchReport {
            outcomes: vec![
                KeyOutcome {
                    key: "a".to_string(),
                    result: Err(KeyError::InvalidKeyLength { actual: 1 }.into()),
                },
            ],
        };
        assert_eq!(report.to_string(), "Processed 1 keys: 0 succeeded, 1 failed");
    }
}
