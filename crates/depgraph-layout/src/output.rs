//! The finished node-attribute table handed to non-core collaborators (§4.10).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One node's rendering-relevant attributes. Never interprets `href`; it is passed through from
/// [`crate::IngestRecord::url`] unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAttrs {
    pub href: String,
    pub x: i64,
    pub y: i64,
    pub is_dummy: bool,
}

/// `name -> {href, x, y, is_dummy}`. A `BTreeMap` rather than a hash map so serialisation order
/// is deterministic without relying on an insertion-order-preserving JSON feature.
pub type LayoutOutput = BTreeMap<String, NodeAttrs>;
