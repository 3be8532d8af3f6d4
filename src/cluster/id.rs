//! 标识符类型
//!
//! 定义 block（midplane）的唯一标识符。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Block 标识符：即在资源池中的下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub usize);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
