//! Account info extraction from auth module queries.
//!
//! The auth endpoint returns a polymorphic account object discriminated by
//! `@type`: plain `BaseAccount`s, vesting accounts that nest one, module
//! accounts, or chain-specific types this client has never heard of. All of
//! them carry the number/sequence pair needed to sign, so extraction walks
//! the known shapes and falls back to searching for an embedded base
//! account.

use serde_json::Value;

use crate::error::{Error, Result};

/// Common account information extracted from any account type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountInfo {
    pub address: String,
    pub account_number: u64,
    pub sequence: u64,
}

/// Extract signing info from the `account` object of a
/// `/cosmos/auth/v1beta1/accounts/{address}` response.
pub fn account_info_from_json(account: &Value) -> Result<AccountInfo> {
    let type_url = account.get("@type").and_then(Value::as_str).unwrap_or("");

    match type_url {
        "/cosmos.auth.v1beta1.BaseAccount" => base_account_info(account),
        "/cosmos.auth.v1beta1.ModuleAccount" => account
            .get("base_account")
            .map(base_account_info)
            .unwrap_or_else(|| {
                Err(Error::UnexpectedResponse(
                    "module account without base_account".to_string(),
                ))
            }),
        _ if type_url.starts_with("/cosmos.vesting.v1beta1.") => account
            .get("base_vesting_account")
            .and_then(|bva| bva.get("base_account"))
            .map(base_account_info)
            .unwrap_or_else(|| {
                Err(Error::UnexpectedResponse(format!(
                    "vesting account {} without base_account",
                    type_url
                )))
            }),
        other => {
            // Forward compatibility: many custom account types embed a
            // base_account at the top level.
            log::warn!("unrecognized account type: {}", other);
            if let Some(base) = account.get("base_account") {
                return base_account_info(base);
            }
            if let Some(base) = account
                .get("base_vesting_account")
                .and_then(|bva| bva.get("base_account"))
            {
                return base_account_info(base);
            }
            Err(Error::UnexpectedResponse(format!(
                "cannot extract account info from type {}",
                other
            )))
        }
    }
}

fn base_account_info(base: &Value) -> Result<AccountInfo> {
    let address = base
        .get("address")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(AccountInfo {
        address,
        account_number: u64_field(base, "account_number")?,
        sequence: u64_field(base, "sequence")?,
    })
}

// The gateway renders uint64 as a JSON string; accept a bare number too.
fn u64_field(value: &Value, field: &str) -> Result<u64> {
    match value.get(field) {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n.as_u64().ok_or_else(|| {
            Error::UnexpectedResponse(format!("account field {} is not a u64", field))
        }),
        Some(Value::String(s)) => s.parse::<u64>().map_err(|e| {
            Error::UnexpectedResponse(format!("account field {} unparsable: {}", field, e))
        }),
        Some(other) => Err(Error::UnexpectedResponse(format!(
            "account field {} has unexpected type: {}",
            field, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_account() {
        let account = json!({
            "@type": "/cosmos.auth.v1beta1.BaseAccount",
            "address": "cosmos1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu",
            "pub_key": null,
            "account_number": "12",
            "sequence": "5"
        });

        let info = account_info_from_json(&account).unwrap();
        assert_eq!(info.address, "cosmos1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5lzv7xu");
        assert_eq!(info.account_number, 12);
        assert_eq!(info.sequence, 5);
    }

    #[test]
    fn test_vesting_account_nests_base() {
        let account = json!({
            "@type": "/cosmos.vesting.v1beta1.ContinuousVestingAccount",
            "base_vesting_account": {
                "base_account": {
                    "address": "cosmos1vest",
                    "account_number": "3",
                    "sequence": "9"
                }
            }
        });

        let info = account_info_from_json(&account).unwrap();
        assert_eq!(info.account_number, 3);
        assert_eq!(info.sequence, 9);
    }

    #[test]
    fn test_unknown_type_with_embedded_base_account() {
        let account = json!({
            "@type": "/some.custom.v1.Account",
            "base_account": {
                "address": "cosmos1custom",
                "account_number": 1,
                "sequence": 2
            }
        });

        let info = account_info_from_json(&account).unwrap();
        assert_eq!(info.address, "cosmos1custom");
        assert_eq!(info.sequence, 2);
    }

    #[test]
    fn test_unknown_type_without_base_account_is_an_error() {
        let account = json!({ "@type": "/some.custom.v1.Opaque" });
        assert!(matches!(
            account_info_from_json(&account),
            Err(Error::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        // Fresh accounts can come back without sequence/number fields
        let account = json!({
            "@type": "/cosmos.auth.v1beta1.BaseAccount",
            "address": "cosmos1new"
        });

        let info = account_info_from_json(&account).unwrap();
        assert_eq!(info.account_number, 0);
        assert_eq!(info.sequence, 0);
    }
}
