// @file: capital_history/src/formatting/withdrawals.rs
// @description: Readable withdrawal records built from GET /sapi/v1/capital/withdraw/history.
// @author: LAS.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::errors::Result;
use crate::formatting::{decode_records, string_or_number, transfer_type_name, wallet_type_name};


//
// BINANCE WIRE MODEL
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWithdrawal {
    #[serde(default, deserialize_with = "string_or_number")] id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")] amount: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")] transaction_fee: Option<String>,
    #[serde(default)] coin: Option<String>,
    #[serde(default)] status: Option<i64>,
    #[serde(default)] address: Option<String>,
    #[serde(default)] tx_id: Option<String>,
    // Already 'YYYY-MM-DD HH:MM:SS' UTC on this endpoint
    #[serde(default)] apply_time: Option<String>,
    #[serde(default)] network: Option<String>,
    #[serde(default)] transfer_type: Option<i64>,
    #[serde(default)] withdraw_order_id: Option<String>,
    #[serde(default)] info: Option<String>,
    #[serde(default)] wallet_type: Option<i64>,
    #[serde(default)] tx_key: Option<String>,
    #[serde(default)] complete_time: Option<String>,
}


//
// OUTPUT MODEL
//

// Field order is the output column order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WithdrawalRecord {
    pub id: Option<String>,
    pub tx_id: Option<String>,
    pub address: Option<String>,
    pub tx_key: Option<String>,
    pub network: Option<String>,
    pub coin: Option<String>,
    pub amount: Option<String>,
    pub transaction_fee: Option<String>,
    pub transfer_type: Option<i64>,
    pub transfer_type_name: Option<String>,
    pub wallet_type: Option<i64>,
    pub wallet_type_name: Option<String>,
    pub status: Option<i64>,
    pub status_name: Option<String>,
    pub info: Option<String>,
    pub withdraw_order_id: Option<String>,
    pub apply_time_dttm: Option<String>,
    pub complete_time_dttm: Option<String>,
    pub load_dttm: String,
}


//
// PUBLIC INTERFACE
//

pub fn withdrawal_status_name(code: Option<i64>) -> Option<String> {
    let name: &str = match code? {
        0 => "Email Sent",
        2 => "Awaiting Approval",
        3 => "Rejected",
        4 => "Processing",
        6 => "Completed",
        _ => return None,
    };
    Some(name.to_string())
}

pub fn format_withdrawals(raw: &[Value], load_dttm: &str) -> Result<Vec<WithdrawalRecord>> {
    let decoded: Vec<RawWithdrawal> = decode_records(raw, "withdrawal")?;

    Ok(decoded
        .into_iter()
        .map(|w| WithdrawalRecord {
            id: w.id,
            tx_id: w.tx_id,
            address: w.address,
            tx_key: w.tx_key,
            network: w.network,
            coin: w.coin,
            amount: w.amount,
            transaction_fee: w.transaction_fee,
            transfer_type: w.transfer_type,
            transfer_type_name: transfer_type_name(w.transfer_type),
            wallet_type: w.wallet_type,
            wallet_type_name: wallet_type_name(w.wallet_type),
            status: w.status,
            status_name: withdrawal_status_name(w.status),
            info: w.info,
            withdraw_order_id: w.withdraw_order_id,
            apply_time_dttm: w.apply_time,
            complete_time_dttm: w.complete_time,
            load_dttm: load_dttm.to_string(),
        })
        .collect())
}
