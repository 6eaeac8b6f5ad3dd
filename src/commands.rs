use crate::service::TxService;
use crate::utils::{api_key_from_env, parse_offset, safe_network_code, service_base_url, SAFE_ADDRESS};

/// Resolve the network, query the transaction service and print the calldata
/// of the pending transaction at the requested queue position.
pub async fn get_calldata(
    network: &str,
    offset_arg: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (offset, explicit_offset) = parse_offset(offset_arg.as_deref())?;
    let network_code = safe_network_code(network)?;

    let service = TxService::new(service_base_url(network_code), api_key_from_env());
    let calldata = fetch_calldata(&service, SAFE_ADDRESS, offset, explicit_offset).await?;

    println!("{}", calldata);
    Ok(())
}

/// Select the pending transaction at `offset` and return its calldata.
///
/// When the caller did not pass an offset (the default "next transaction"
/// case) the selected nonce must equal the nonce after the last executed
/// transaction; a mismatch means the head of the queue is not the
/// transaction that will execute next. An explicit offset, even 0, skips
/// the check to allow deliberate browsing of the queue.
pub async fn fetch_calldata(
    service: &TxService,
    safe_address: &str,
    offset: usize,
    explicit_offset: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let last_executed = service.last_executed_transaction(safe_address).await?;
    let next_nonce = match last_executed {
        Some(tx) => tx.nonce + 1,
        None => 0,
    };

    let pending = service.pending_transactions(safe_address).await?;
    if pending.is_empty() {
        return Err("No pending transactions found".into());
    }

    if offset >= pending.len() {
        return Err(format!(
            "Requested offset {} but only {} pending transactions available",
            offset,
            pending.len()
        )
        .into());
    }

    let selected = &pending[offset];

    if !explicit_offset && offset == 0 && selected.nonce != next_nonce {
        return Err(format!(
            "nonce of last pending tx ({}) not equal to next nonce ({})",
            selected.nonce, next_nonce
        )
        .into());
    }

    Ok(selected.data.clone().unwrap_or_default())
}
