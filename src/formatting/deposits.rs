// @file: capital_history/src/formatting/deposits.rs
// @description: Readable deposit records built from GET /sapi/v1/capital/deposit/hisrec.
// @author: LAS.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::errors::Result;
use crate::formatting::{decode_records, string_or_number, transfer_type_name, wallet_type_name};
use crate::utils::time_codec;


//
// BINANCE WIRE MODEL
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDeposit {
    #[serde(default, deserialize_with = "string_or_number")] id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")] amount: Option<String>,
    #[serde(default)] coin: Option<String>,
    #[serde(default)] network: Option<String>,
    #[serde(default)] status: Option<i64>,
    #[serde(default)] address: Option<String>,
    #[serde(default)] address_tag: Option<String>,
    #[serde(default)] tx_id: Option<String>,
    #[serde(default)] insert_time: Option<i64>,
    #[serde(default)] transfer_type: Option<i64>,
    #[serde(default)] confirm_times: Option<String>,
    #[serde(default)] unlock_confirm: Option<i64>,
    #[serde(default)] wallet_type: Option<i64>,
}


//
// OUTPUT MODEL
//

// Field order is the output column order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DepositRecord {
    pub id: Option<String>,
    pub tx_id: Option<String>,
    pub address: Option<String>,
    pub address_tag: Option<String>,
    pub network: Option<String>,
    pub coin: Option<String>,
    pub amount: Option<String>,
    pub transfer_type: Option<i64>,
    pub transfer_type_name: Option<String>,
    pub wallet_type: Option<i64>,
    pub wallet_type_name: Option<String>,
    pub status: Option<i64>,
    pub status_name: Option<String>,
    pub confirm_times: Option<String>,
    pub unlock_confirm: Option<i64>,
    pub insert_time: Option<i64>,
    pub insert_time_dttm: Option<String>,
    pub load_dttm: String,
}


//
// PUBLIC INTERFACE
//

pub fn deposit_status_name(code: Option<i64>) -> Option<String> {
    let name: &str = match code? {
        0 => "Pending",
        1 => "Success",
        2 => "Rejected",
        6 => "Credited But Cannot Withdraw",
        7 => "Wrong Deposit",
        8 => "Waiting User Confirm",
        _ => return None,
    };
    Some(name.to_string())
}

pub fn format_deposits(raw: &[Value], load_dttm: &str) -> Result<Vec<DepositRecord>> {
    let decoded: Vec<RawDeposit> = decode_records(raw, "deposit")?;
    let mut records: Vec<DepositRecord> = Vec::with_capacity(decoded.len());

    for d in decoded {
        // #1. Readable insert time
        let insert_time_dttm: Option<String> = match d.insert_time {
            Some(ms) => Some(time_codec::millis_to_datetime(ms)?),
            None => None,
        };

        // #2. Assemble
        records.push(DepositRecord {
            id: d.id,
            tx_id: d.tx_id,
            address: d.address,
            address_tag: d.address_tag,
            network: d.network,
            coin: d.coin,
            amount: d.amount,
            transfer_type: d.transfer_type,
            transfer_type_name: transfer_type_name(d.transfer_type),
            wallet_type: d.wallet_type,
            wallet_type_name: wallet_type_name(d.wallet_type),
            status: d.status,
            status_name: deposit_status_name(d.status),
            confirm_times: d.confirm_times,
            unlock_confirm: d.unlock_confirm,
            insert_time: d.insert_time,
            insert_time_dttm,
            load_dttm: load_dttm.to_string(),
        });
    }

    Ok(records)
}
