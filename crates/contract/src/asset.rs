use serde::{Deserialize, Serialize};

/// A dealer/subscriber balance record
///
/// The subscriber number is the record's key in the world state and is not
/// part of the encoded value. Unknown JSON fields are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// The dealer that owns the subscriber
    #[serde(rename = "dealerID")]
    pub dealer_id: String,
    /// The subscriber's PIN
    pub mpin: String,
    /// Current balance
    pub balance: i64,
    /// Account status, e.g. "active"
    pub status: String,
    /// Amount of the last transaction
    #[serde(rename = "transAmount")]
    pub trans_amount: i64,
    /// Kind of the last transaction, e.g. "credit"
    #[serde(rename = "transType")]
    pub trans_type: String,
    /// Free-text remark
    pub remarks: String,
}

impl Asset {
    pub fn new(
        dealer_id: impl Into<String>,
        mpin: impl Into<String>,
        balance: i64,
        status: impl Into<String>,
        trans_amount: i64,
        trans_type: impl Into<String>,
        remarks: impl Into<String>,
    ) -> Self {
        Self {
            dealer_id: dealer_id.into(),
            mpin: mpin.into(),
            balance,
            status: status.into(),
            trans_amount,
            trans_type: trans_type.into(),
            remarks: remarks.into(),
        }
    }

    /// Encode the record as stored in the world state
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decode a record read from the world state
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
