//! Metanet node scripts: `OP_FALSE OP_RETURN "META" <node> <parent txid>`.
use crate::script::op_codes::{OP_FALSE, OP_RETURN};
use crate::script::Script;
use crate::util::Result;

/// Protocol flag pushed after `OP_RETURN`.
pub const META_FLAG: &[u8; 4] = b"META";

/// Creates the data script of a root node, whose parent is 32 zero bytes.
///
/// # Errors
/// Only if a push is too large to encode.
pub fn create_root_script(root: &[u8]) -> Result<Script> {
    create_node_script(root, &[0u8; 32])
}

/// Creates the data script of a node under `parent_txid`.
///
/// # Errors
/// Only if a push is too large to encode.
pub fn create_node_script(node: &[u8], parent_txid: &[u8]) -> Result<Script> {
    let mut script = Script::new();
    script.append(OP_FALSE);
    script.append(OP_RETURN);
    script.append_data(META_FLAG)?;
    script.append_data(node)?;
    script.append_data(parent_txid)?;
    Ok(script)
}
