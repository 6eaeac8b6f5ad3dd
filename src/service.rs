use crate::types::{MultisigTransaction, TransactionPage};

/// Client for the Safe Transaction Service multisig-transactions listing.
pub struct TxService {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl TxService {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        TxService {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// The most recently executed transaction for a Safe, if any.
    pub async fn last_executed_transaction(
        &self,
        safe_address: &str,
    ) -> Result<Option<MultisigTransaction>, Box<dyn std::error::Error>> {
        let url = format!(
            "{}/api/v2/safes/{}/multisig-transactions?executed=true&limit=1",
            self.base_url, safe_address
        );
        let mut page = self.fetch_page(&url).await?;
        if page.results.is_empty() {
            Ok(None)
        } else {
            Ok(Some(page.results.remove(0)))
        }
    }

    /// All currently pending (unexecuted) transactions for a Safe, in the
    /// service's order: oldest first, i.e. execution order.
    pub async fn pending_transactions(
        &self,
        safe_address: &str,
    ) -> Result<Vec<MultisigTransaction>, Box<dyn std::error::Error>> {
        let url = format!(
            "{}/api/v2/safes/{}/multisig-transactions?executed=false",
            self.base_url, safe_address
        );
        let page = self.fetch_page(&url).await?;
        Ok(page.results)
    }

    async fn fetch_page(&self, url: &str) -> Result<TransactionPage, Box<dyn std::error::Error>> {
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Transaction service error: HTTP {} for {}", status, url).into());
        }

        let page: TransactionPage = response.json().await?;
        Ok(page)
    }
}
