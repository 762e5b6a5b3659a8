//! 記述子と関連する型の定義。
//!
//! 各記述子は[`Descriptor::parse`]でタグを確認した上で読み取る。
//! タグの不一致・長さ不足・規格外の値はいずれも`None`となり、呼び出し側はその記述子を読み飛ばす。

mod base;
mod en300468;
mod iso;

pub use base::*;
pub use en300468::*;
pub use iso::*;
