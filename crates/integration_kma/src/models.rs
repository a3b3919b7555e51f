//! Response envelope of the KMA open API
//!
//! Every endpoint wraps its records as
//! `response.header.{resultCode,resultMsg}` and `response.body.items.item[]`.

use domain::Category;
use serde::{Deserialize, Serialize};

/// Result codes reported in the response header
#[derive(Debug)]
pub struct ResultCode;

impl ResultCode {
    /// Request succeeded
    pub const NORMAL: &'static str = "00";
    /// Request succeeded but there is nothing to return
    pub const NO_DATA: &'static str = "03";
    /// Too many requests for the service key
    pub const LIMIT_EXCEEDED: &'static str = "22";
    /// Service key not registered or not yet active
    pub const UNREGISTERED_KEY: &'static str = "30";
}

/// One observation of `getUltraSrtNcst`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationItem {
    #[serde(default)]
    pub base_date: String,
    #[serde(default)]
    pub base_time: String,
    pub category: Category,
    pub obsr_value: String,
    #[serde(default)]
    pub nx: i32,
    #[serde(default)]
    pub ny: i32,
}

/// Top-level JSON document
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub response: ResponseBody<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseBody<T> {
    pub header: Header,
    #[serde(default = "Option::default")]
    pub body: Option<Body<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Header {
    pub result_code: String,
    #[serde(default)]
    pub result_msg: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Body<T> {
    #[serde(default = "ItemsField::empty")]
    pub items: ItemsField<T>,
}

/// `items` is an object normally, but an empty string when nothing matched
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ItemsField<T> {
    Items {
        #[serde(default = "Vec::new")]
        item: Vec<T>,
    },
    Empty(#[allow(dead_code)] String),
}

impl<T> ItemsField<T> {
    const fn empty() -> Self {
        Self::Empty(String::new())
    }
}

impl<T> ApiResponse<T> {
    /// Header result code and message
    pub fn result(&self) -> (&str, &str) {
        let header = &self.response.header;
        (header.result_code.as_str(), header.result_msg.as_str())
    }

    /// The records, empty when the body or its items are missing
    pub fn into_items(self) -> Vec<T> {
        match self.response.body.map(|b| b.items) {
            Some(ItemsField::Items { item }) => item,
            Some(ItemsField::Empty(_)) | None => Vec::new(),
        }
    }
}
